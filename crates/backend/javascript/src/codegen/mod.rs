//! Expression to JavaScript code generation.

mod bool;
mod math;

use rhizome_sprout_ir::{Expression, Program, TopLevel};
use thiserror::Error;
use tracing::trace;

/// Errors that can occur during unparsing.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum UnparseError {
    #[error("unsupported node: {0}")]
    UnsupportedNode(String),

    #[error("invalid argument count for {op}: expected {expected}, got {got}")]
    InvalidArgCount {
        op: String,
        expected: usize,
        got: usize,
    },

    #[error("procedure has an empty body: {0}")]
    EmptyBody(String),
}

/// Unparse an expression to JavaScript.
pub fn unparse(expr: &Expression) -> Result<String, UnparseError> {
    unparse_expr(expr)
}

/// Unparse a top-level form. A definition becomes a `const` declaration.
pub fn unparse_form(form: &TopLevel) -> Result<String, UnparseError> {
    match form {
        TopLevel::Define { name, value } => Ok(format!("const {} = {}", name, unparse_expr(value)?)),
        TopLevel::Expr(expr) => unparse_expr(expr),
    }
}

/// Unparse a program, one statement per form.
pub fn unparse_program(program: &Program) -> Result<String, UnparseError> {
    trace!(forms = program.forms.len(), "unparsing program");
    let forms: Result<Vec<_>, _> = program.forms.iter().map(unparse_form).collect();
    Ok(forms?.join(";\n"))
}

pub(crate) fn unparse_expr(node: &Expression) -> Result<String, UnparseError> {
    match node {
        Expression::Bool(b) => Ok(if *b { "true" } else { "false" }.to_string()),
        Expression::Number(n) => Ok(number_literal(*n)),
        Expression::Str(s) => Ok(js_string_literal(s)),
        Expression::Var(name) => Ok(name.clone()),
        Expression::PrimOp(op) => Ok(prim_op_token(op).to_string()),

        Expression::Proc { params, body } => {
            let body_code = match body.as_slice() {
                [] => return Err(UnparseError::EmptyBody(node.to_string())),
                [single] => unparse_expr(single)?,
                exprs => format!("({})", unparse_all(exprs)?.join(" ; ")),
            };
            Ok(format!("(({}) => {})", params.join(","), body_code))
        }

        Expression::If { test, then, alt } => Ok(format!(
            "({} ? {} : {})",
            unparse_branch(test)?,
            unparse_branch(then)?,
            unparse_branch(alt)?
        )),

        Expression::App { rator, rands } => {
            let args = unparse_all(rands)?;
            match rator.as_ref() {
                Expression::PrimOp(op) => unparse_prim_app(op, &args),
                _ => Ok(unparse_call(&unparse_expr(rator)?, &args)),
            }
        }

        Expression::Literal(_) | Expression::Let { .. } | Expression::Dict { .. } => {
            Err(UnparseError::UnsupportedNode(node.to_string()))
        }
    }
}

/// Token for a primitive operator referenced without being applied.
fn prim_op_token(op: &str) -> &str {
    match op {
        "=" | "eq?" => "===",
        "and" => "&&",
        "or" => "||",
        "not" => "!",
        _ => op,
    }
}

fn unparse_all(exprs: &[Expression]) -> Result<Vec<String>, UnparseError> {
    exprs.iter().map(unparse_expr).collect()
}

/// Unparse a part of `?:`.
///
/// Operator-table applications are emitted without their grouping parens.
/// Every table operator binds tighter than the conditional.
fn unparse_branch(expr: &Expression) -> Result<String, UnparseError> {
    if let Expression::App { rator, rands } = expr {
        if let Expression::PrimOp(op) = rator.as_ref() {
            let args = unparse_all(rands)?;
            return match unparse_operator(op, &args)? {
                Some(code) => Ok(code),
                None => Ok(unparse_call(op, &args)),
            };
        }
    }
    unparse_expr(expr)
}

/// Ungrouped text for an operator-table application, or None for other operators.
fn unparse_operator(op: &str, args: &[String]) -> Result<Option<String>, UnparseError> {
    if let Some(result) = math::unparse_math(op, args)? {
        return Ok(Some(result));
    }
    if let Some(result) = bool::unparse_bool(op, args)? {
        return Ok(Some(result));
    }
    Ok(None)
}

fn unparse_prim_app(op: &str, args: &[String]) -> Result<String, UnparseError> {
    match unparse_operator(op, args)? {
        Some(code) => Ok(format!("({})", code)),
        // Not in the operator table: an ordinary call
        None => Ok(unparse_call(op, args)),
    }
}

fn unparse_call(callee: &str, args: &[String]) -> String {
    format!("{}({})", callee, args.join(","))
}

/// Join two or more operands with `js_op`.
pub(crate) fn unparse_infix_op(
    js_op: &str,
    op: &str,
    args: &[String],
) -> Result<String, UnparseError> {
    expect_args(op, args, 2)?;
    Ok(args.join(&format!(" {} ", js_op)))
}

pub(crate) fn expect_args(op: &str, args: &[String], expected: usize) -> Result<(), UnparseError> {
    if args.len() < expected {
        return Err(UnparseError::InvalidArgCount {
            op: op.to_string(),
            expected,
            got: args.len(),
        });
    }
    Ok(())
}

fn number_literal(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n == f64::INFINITY {
        "Infinity".to_string()
    } else if n == f64::NEG_INFINITY {
        "-Infinity".to_string()
    } else if n == 0.0 {
        // -0 prints as 0 in JavaScript
        "0".to_string()
    } else {
        js_number_text(n)
    }
}

/// Finite, non-zero `n` in JavaScript's number-to-string format: plain
/// decimal for exponents in `-7..21`, otherwise `d.ddde+k`.
fn js_number_text(n: f64) -> String {
    // `{:e}` yields the shortest round-trip digits, e.g. `1.5e-7`
    let sci = format!("{:e}", n.abs());
    let Some((mantissa, exp)) = sci.split_once('e') else {
        return format!("{}", n);
    };
    let Ok(exp) = exp.parse::<i32>() else {
        return format!("{}", n);
    };
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let len = digits.len() as i32;
    // Position of the decimal point relative to the first digit
    let point = exp + 1;

    let body = if len <= point && point <= 21 {
        format!("{}{}", digits, "0".repeat((point - len) as usize))
    } else if 0 < point && point <= 21 {
        let (int, frac) = digits.split_at(point as usize);
        format!("{}.{}", int, frac)
    } else if -6 < point && point <= 0 {
        format!("0.{}{}", "0".repeat((-point) as usize), digits)
    } else {
        let sign = if exp < 0 { '-' } else { '+' };
        let (first, rest) = digits.split_at(1);
        if rest.is_empty() {
            format!("{}e{}{}", first, sign, exp.abs())
        } else {
            format!("{}.{}e{}{}", first, rest, sign, exp.abs())
        }
    };

    if n < 0.0 { format!("-{}", body) } else { body }
}

pub(crate) fn js_string_literal(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{08}' => out.push_str("\\b"),
            '\u{0c}' => out.push_str("\\f"),
            c if c.is_control() => out.push_str(&format!("\\u{:04x}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}
