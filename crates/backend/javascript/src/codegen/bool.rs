//! Equality, logical and type-predicate operator unparsing.

use super::{expect_args, unparse_infix_op, UnparseError};

/// Unparse boolean-valued operators. Returns None if op doesn't match.
pub fn unparse_bool(op: &str, args: &[String]) -> Result<Option<String>, UnparseError> {
    let result = match op {
        // Strict equality on the first two operands only
        "=" | "eq?" => {
            expect_args(op, args, 2)?;
            format!("{} === {}", args[0], args[1])
        }

        "and" => unparse_infix_op("&&", op, args)?,
        "or" => unparse_infix_op("||", op, args)?,

        "not" => {
            expect_args(op, args, 1)?;
            format!("!{}", args[0])
        }

        "number?" => {
            expect_args(op, args, 1)?;
            format!("typeof {} === 'number'", args[0])
        }

        "boolean?" => {
            expect_args(op, args, 1)?;
            format!("typeof {} === 'boolean'", args[0])
        }

        _ => return Ok(None),
    };

    Ok(Some(result))
}
