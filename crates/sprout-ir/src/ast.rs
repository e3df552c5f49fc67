//! Expression tree types.

use crate::SExpValue;
use serde::{Deserialize, Serialize};

/// A `name := value` binding inside a `let`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Binding {
    pub name: String,
    pub value: Expression,
}

/// A `key: value` entry of a dictionary literal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DictEntry {
    pub key: Expression,
    pub value: Expression,
}

/// An expression node.
///
/// The variant set is closed: passes over the tree match on it exhaustively
/// so a new variant cannot be silently skipped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expression {
    /// Numeric literal.
    Number(f64),
    /// Boolean literal.
    Bool(bool),
    /// String literal.
    Str(String),
    /// Variable reference.
    Var(String),
    /// Reference to a primitive operator such as `+` or `eq?`.
    PrimOp(String),
    /// Quoted data.
    Literal(SExpValue),
    If {
        test: Box<Expression>,
        then: Box<Expression>,
        alt: Box<Expression>,
    },
    /// `(lambda (params...) body...)`. The body holds at least one expression.
    Proc {
        params: Vec<String>,
        body: Vec<Expression>,
    },
    /// Application of `rator` to `rands`.
    App {
        rator: Box<Expression>,
        rands: Vec<Expression>,
    },
    Let {
        bindings: Vec<Binding>,
        body: Vec<Expression>,
    },
    /// Dictionary literal, eliminated by desugaring.
    Dict { entries: Vec<DictEntry> },
}

impl Expression {
    /// Returns true for numeric, boolean and string literals.
    pub fn is_atomic(&self) -> bool {
        matches!(
            self,
            Expression::Number(_) | Expression::Bool(_) | Expression::Str(_)
        )
    }

    /// Returns true if this node has no child expressions.
    pub fn is_leaf(&self) -> bool {
        matches!(
            self,
            Expression::Number(_)
                | Expression::Bool(_)
                | Expression::Str(_)
                | Expression::Var(_)
                | Expression::PrimOp(_)
                | Expression::Literal(_)
        )
    }

    pub fn is_dict(&self) -> bool {
        matches!(self, Expression::Dict { .. })
    }

    /// Returns the operator symbol if this is a primitive operator reference.
    pub fn as_prim_op(&self) -> Option<&str> {
        match self {
            Expression::PrimOp(op) => Some(op),
            _ => None,
        }
    }

    /// Returns the variable name if this is a variable reference.
    pub fn as_var(&self) -> Option<&str> {
        match self {
            Expression::Var(name) => Some(name),
            _ => None,
        }
    }

    /// Returns true if a dictionary literal occurs anywhere in this tree.
    pub fn contains_dict(&self) -> bool {
        match self {
            Expression::Number(_)
            | Expression::Bool(_)
            | Expression::Str(_)
            | Expression::Var(_)
            | Expression::PrimOp(_)
            | Expression::Literal(_) => false,
            Expression::If { test, then, alt } => {
                test.contains_dict() || then.contains_dict() || alt.contains_dict()
            }
            Expression::Proc { body, .. } => body.iter().any(Expression::contains_dict),
            Expression::App { rator, rands } => {
                rator.contains_dict() || rands.iter().any(Expression::contains_dict)
            }
            Expression::Let { bindings, body } => {
                bindings.iter().any(|b| b.value.contains_dict())
                    || body.iter().any(Expression::contains_dict)
            }
            Expression::Dict { .. } => true,
        }
    }
}

/// A top-level form of a program.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TopLevel {
    /// `(define name value)`.
    Define { name: String, value: Expression },
    /// A bare expression evaluated for its value.
    Expr(Expression),
}

impl TopLevel {
    /// Returns the expression this form evaluates.
    pub fn expression(&self) -> &Expression {
        match self {
            TopLevel::Define { value, .. } => value,
            TopLevel::Expr(expr) => expr,
        }
    }
}

impl From<Expression> for TopLevel {
    fn from(expr: Expression) -> Self {
        TopLevel::Expr(expr)
    }
}

/// An ordered sequence of top-level forms.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Program {
    pub forms: Vec<TopLevel>,
}

impl Program {
    pub fn new(forms: Vec<TopLevel>) -> Self {
        Self { forms }
    }

    /// Returns true if any form contains a dictionary literal.
    pub fn contains_dict(&self) -> bool {
        self.forms.iter().any(|form| form.expression().contains_dict())
    }
}

impl FromIterator<TopLevel> for Program {
    fn from_iter<I: IntoIterator<Item = TopLevel>>(iter: I) -> Self {
        Program {
            forms: iter.into_iter().collect(),
        }
    }
}
