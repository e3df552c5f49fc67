//! Bottom-up tree rewriting.

use crate::dict::desugar_dict;
use crate::options::DesugarOptions;
use crate::DesugarError;
use rhizome_sprout_ir::{Binding, DictEntry, Expression, Program, TopLevel};
use tracing::debug;

/// Rewrite an expression, desugaring every dictionary literal in it.
pub fn rewrite(expr: &Expression, options: &DesugarOptions) -> Result<Expression, DesugarError> {
    Rewriter::new(options).rewrite_expr(expr)
}

/// Rewrite every form of a program, keeping form order and define names.
pub fn rewrite_program(
    program: &Program,
    options: &DesugarOptions,
) -> Result<Program, DesugarError> {
    let mut rewriter = Rewriter::new(options);
    let forms: Result<Vec<_>, DesugarError> = program
        .forms
        .iter()
        .map(|form| rewriter.rewrite_form(form))
        .collect();
    let forms = forms?;
    debug!(
        forms = forms.len(),
        dicts = rewriter.dicts,
        "rewrote program"
    );
    Ok(Program::new(forms))
}

struct Rewriter<'a> {
    options: &'a DesugarOptions,
    /// Number of dictionary literals desugared so far.
    dicts: usize,
}

impl<'a> Rewriter<'a> {
    fn new(options: &'a DesugarOptions) -> Self {
        Self { options, dicts: 0 }
    }

    fn rewrite_form(&mut self, form: &TopLevel) -> Result<TopLevel, DesugarError> {
        match form {
            TopLevel::Define { name, value } => Ok(TopLevel::Define {
                name: name.clone(),
                value: self.rewrite_expr(value)?,
            }),
            TopLevel::Expr(expr) => Ok(TopLevel::Expr(self.rewrite_expr(expr)?)),
        }
    }

    fn rewrite_expr(&mut self, expr: &Expression) -> Result<Expression, DesugarError> {
        match expr {
            Expression::Number(_)
            | Expression::Bool(_)
            | Expression::Str(_)
            | Expression::Var(_)
            | Expression::PrimOp(_)
            | Expression::Literal(_) => Ok(expr.clone()),

            Expression::If { test, then, alt } => Ok(Expression::If {
                test: Box::new(self.rewrite_expr(test)?),
                then: Box::new(self.rewrite_expr(then)?),
                alt: Box::new(self.rewrite_expr(alt)?),
            }),

            Expression::Proc { params, body } => Ok(Expression::Proc {
                params: params.clone(),
                body: self.rewrite_all(body)?,
            }),

            Expression::App { rator, rands } => Ok(Expression::App {
                rator: Box::new(self.rewrite_expr(rator)?),
                rands: self.rewrite_all(rands)?,
            }),

            Expression::Let { bindings, body } => {
                let bindings = bindings
                    .iter()
                    .map(|b| {
                        Ok(Binding {
                            name: b.name.clone(),
                            value: self.rewrite_expr(&b.value)?,
                        })
                    })
                    .collect::<Result<Vec<_>, DesugarError>>()?;
                Ok(Expression::Let {
                    bindings,
                    body: self.rewrite_all(body)?,
                })
            }

            Expression::Dict { entries } => {
                let entries = entries
                    .iter()
                    .map(|entry| {
                        Ok(DictEntry {
                            key: self.rewrite_expr(&entry.key)?,
                            value: self.rewrite_expr(&entry.value)?,
                        })
                    })
                    .collect::<Result<Vec<_>, DesugarError>>()?;
                self.dicts += 1;
                desugar_dict(&entries, self.options)
            }
        }
    }

    fn rewrite_all(&mut self, exprs: &[Expression]) -> Result<Vec<Expression>, DesugarError> {
        exprs.iter().map(|e| self.rewrite_expr(e)).collect()
    }
}
