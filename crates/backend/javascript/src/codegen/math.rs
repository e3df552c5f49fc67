//! Arithmetic and ordering operator unparsing.

use super::{unparse_infix_op, UnparseError};

/// Unparse arithmetic and comparison chains. Returns None if op doesn't match.
pub fn unparse_math(op: &str, args: &[String]) -> Result<Option<String>, UnparseError> {
    let result = match op {
        "+" | "-" | "*" | "/" | "<" | ">" => unparse_infix_op(op, op, args)?,
        _ => return Ok(None),
    };

    Ok(Some(result))
}
