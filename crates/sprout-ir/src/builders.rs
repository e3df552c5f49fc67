//! Shorthand constructors for building expression trees by hand.
//!
//! The names follow the Scheme surface syntax: `app(prim("+"), ...)` is
//! `(+ ...)`, `lambda(["x"], ...)` is `(lambda (x) ...)`.

use crate::{Binding, DictEntry, Expression, SExpValue, TopLevel};

/// Numeric literal.
pub fn num(value: impl Into<f64>) -> Expression {
    Expression::Number(value.into())
}

/// Boolean literal.
pub fn boolean(value: bool) -> Expression {
    Expression::Bool(value)
}

/// String literal.
pub fn string(value: impl Into<String>) -> Expression {
    Expression::Str(value.into())
}

/// Variable reference.
pub fn var(name: impl Into<String>) -> Expression {
    Expression::Var(name.into())
}

/// Primitive operator reference.
pub fn prim(op: impl Into<String>) -> Expression {
    Expression::PrimOp(op.into())
}

/// Quoted data.
pub fn lit(value: SExpValue) -> Expression {
    Expression::Literal(value)
}

/// Quoted symbol, `'name`.
pub fn quote_symbol(name: impl Into<String>) -> Expression {
    Expression::Literal(SExpValue::symbol(name))
}

/// `(if test then alt)`
pub fn if_(test: Expression, then: Expression, alt: Expression) -> Expression {
    Expression::If {
        test: Box::new(test),
        then: Box::new(then),
        alt: Box::new(alt),
    }
}

/// `(lambda (params...) body...)`
pub fn lambda<P, S>(params: P, body: Vec<Expression>) -> Expression
where
    P: IntoIterator<Item = S>,
    S: Into<String>,
{
    Expression::Proc {
        params: params.into_iter().map(Into::into).collect(),
        body,
    }
}

/// `(rator rands...)`
pub fn app(rator: Expression, rands: Vec<Expression>) -> Expression {
    Expression::App {
        rator: Box::new(rator),
        rands,
    }
}

/// `(let ((name value)...) body...)`
pub fn let_<N>(bindings: Vec<(N, Expression)>, body: Vec<Expression>) -> Expression
where
    N: Into<String>,
{
    Expression::Let {
        bindings: bindings
            .into_iter()
            .map(|(name, value)| Binding {
                name: name.into(),
                value,
            })
            .collect(),
        body,
    }
}

/// `{ key: value, ... }`
pub fn dict(entries: Vec<(Expression, Expression)>) -> Expression {
    Expression::Dict {
        entries: entries
            .into_iter()
            .map(|(key, value)| DictEntry { key, value })
            .collect(),
    }
}

/// `(define name value)`
pub fn define(name: impl Into<String>, value: Expression) -> TopLevel {
    TopLevel::Define {
        name: name.into(),
        value,
    }
}
