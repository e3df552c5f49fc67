//! Expression to S-expression encoding.

use crate::DesugarError;
use rhizome_sprout_ir::{Expression, SExpValue};

/// Encode a literal expression as quoted data.
///
/// Only atomic literals and already-quoted data can be embedded; any other
/// node is a computation and fails with [`DesugarError::NonLiteralValue`].
pub fn encode(expr: &Expression) -> Result<SExpValue, DesugarError> {
    match expr {
        Expression::Number(n) => Ok(SExpValue::Number(*n)),
        Expression::Bool(b) => Ok(SExpValue::Bool(*b)),
        Expression::Str(s) => Ok(SExpValue::Str(s.clone())),
        Expression::Literal(value) => Ok(value.clone()),
        Expression::Var(_)
        | Expression::PrimOp(_)
        | Expression::If { .. }
        | Expression::Proc { .. }
        | Expression::App { .. }
        | Expression::Let { .. }
        | Expression::Dict { .. } => Err(DesugarError::NonLiteralValue(expr.to_string())),
    }
}

/// Fold already-encoded values into a proper list.
pub fn encode_list(values: Vec<SExpValue>) -> SExpValue {
    SExpValue::list(values)
}

/// Quote an arbitrary dictionary-free expression as data.
///
/// Atoms and `Literal` payloads encode as in [`encode`]. References become
/// symbols and compound forms become lists headed by their keyword, so
/// `(lambda (x) (+ x 1))` quotes to the list `(lambda (x) (+ x 1))`. A
/// `Literal` nested inside a compound form is kept as `(quote payload)`.
pub fn quote(expr: &Expression) -> Result<SExpValue, DesugarError> {
    match expr {
        Expression::Literal(value) => Ok(value.clone()),
        _ => quote_form(expr),
    }
}

fn quote_form(expr: &Expression) -> Result<SExpValue, DesugarError> {
    match expr {
        Expression::Number(_) | Expression::Bool(_) | Expression::Str(_) => encode(expr),
        Expression::Var(name) | Expression::PrimOp(name) => Ok(SExpValue::symbol(name.clone())),
        Expression::Literal(value) => Ok(SExpValue::list(vec![
            SExpValue::symbol("quote"),
            value.clone(),
        ])),
        Expression::If { test, then, alt } => Ok(SExpValue::list(vec![
            SExpValue::symbol("if"),
            quote_form(test)?,
            quote_form(then)?,
            quote_form(alt)?,
        ])),
        Expression::Proc { params, body } => {
            let mut items = vec![
                SExpValue::symbol("lambda"),
                SExpValue::list(params.iter().cloned().map(SExpValue::Symbol).collect::<Vec<_>>()),
            ];
            items.extend(quote_all(body)?);
            Ok(SExpValue::list(items))
        }
        Expression::App { rator, rands } => {
            let mut items = vec![quote_form(rator)?];
            items.extend(quote_all(rands)?);
            Ok(SExpValue::list(items))
        }
        Expression::Let { bindings, body } => {
            let bindings: Result<Vec<_>, DesugarError> = bindings
                .iter()
                .map(|b| {
                    Ok(SExpValue::list(vec![
                        SExpValue::symbol(b.name.clone()),
                        quote_form(&b.value)?,
                    ]))
                })
                .collect();
            let mut items = vec![SExpValue::symbol("let"), SExpValue::list(bindings?)];
            items.extend(quote_all(body)?);
            Ok(SExpValue::list(items))
        }
        // Dictionaries are desugared before quoting; reaching one here means
        // the caller skipped the rewrite.
        Expression::Dict { .. } => Err(DesugarError::NonLiteralValue(expr.to_string())),
    }
}

fn quote_all(exprs: &[Expression]) -> Result<Vec<SExpValue>, DesugarError> {
    exprs.iter().map(quote_form).collect()
}
