//! Dictionary literal to lookup-call desugaring.

use crate::encode::{encode, encode_list, quote};
use crate::options::{DesugarOptions, DictValuePolicy};
use crate::runtime::LOOKUP_NAME;
use crate::DesugarError;
use rhizome_sprout_ir::{DictEntry, Expression, SExpValue};
use tracing::trace;

/// Desugar the (already rewritten) entries of a dictionary literal.
///
/// `{a: 1, b: 2}` becomes `(dict '((a . 1) (b . 2)))`, a call to the lookup
/// function bound by [`crate::synthesize_lookup`].
pub fn desugar_dict(
    entries: &[DictEntry],
    options: &DesugarOptions,
) -> Result<Expression, DesugarError> {
    let pairs: Result<Vec<_>, DesugarError> = entries
        .iter()
        .map(|entry| {
            let key = dict_key(&entry.key)?;
            let value = dict_value(&entry.value, options.value_policy)?;
            Ok(SExpValue::pair(SExpValue::symbol(key), value))
        })
        .collect();
    let pairs = pairs?;
    trace!(entries = pairs.len(), "desugared dictionary literal");

    Ok(Expression::App {
        rator: Box::new(Expression::Var(LOOKUP_NAME.to_string())),
        rands: vec![Expression::Literal(encode_list(pairs))],
    })
}

/// Resolve a key to its symbol name.
fn dict_key(key: &Expression) -> Result<&str, DesugarError> {
    match key {
        Expression::Var(name) => Ok(name.as_str()),
        Expression::Literal(SExpValue::Symbol(name)) => Ok(name.as_str()),
        _ => Err(DesugarError::MalformedDictKey(key.to_string())),
    }
}

fn dict_value(value: &Expression, policy: DictValuePolicy) -> Result<SExpValue, DesugarError> {
    match policy {
        DictValuePolicy::Literal => encode(value),
        DictValuePolicy::Structural => quote(value),
    }
}
