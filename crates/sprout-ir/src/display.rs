//! Scheme surface syntax for expressions and S-expression values.
//!
//! This rendering is used for diagnostics and for the CLI's `--scheme`
//! output. It is not a pretty printer: everything is emitted on one line.

use crate::{Expression, Program, SExpValue, TopLevel};
use std::fmt::{self, Display, Formatter, Write};

fn write_string(f: &mut Formatter<'_>, s: &str) -> fmt::Result {
    f.write_char('"')?;
    for c in s.chars() {
        match c {
            '\\' => f.write_str("\\\\")?,
            '"' => f.write_str("\\\"")?,
            '\n' => f.write_str("\\n")?,
            '\r' => f.write_str("\\r")?,
            '\t' => f.write_str("\\t")?,
            _ => f.write_char(c)?,
        }
    }
    f.write_char('"')
}

fn write_seq<T: Display>(f: &mut Formatter<'_>, items: &[T]) -> fmt::Result {
    for item in items {
        write!(f, " {}", item)?;
    }
    Ok(())
}

impl Display for SExpValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            SExpValue::Symbol(name) => f.write_str(name),
            SExpValue::Number(n) => write!(f, "{}", n),
            SExpValue::Bool(b) => f.write_str(if *b { "#t" } else { "#f" }),
            SExpValue::Str(s) => write_string(f, s),
            SExpValue::Empty => f.write_str("()"),
            SExpValue::Pair(head, tail) => {
                write!(f, "({}", head)?;
                let mut cursor = tail.as_ref();
                loop {
                    match cursor {
                        SExpValue::Empty => break,
                        SExpValue::Pair(head, tail) => {
                            write!(f, " {}", head)?;
                            cursor = tail;
                        }
                        atom => {
                            write!(f, " . {}", atom)?;
                            break;
                        }
                    }
                }
                f.write_char(')')
            }
        }
    }
}

impl Display for Expression {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Number(n) => write!(f, "{}", n),
            Expression::Bool(b) => f.write_str(if *b { "#t" } else { "#f" }),
            Expression::Str(s) => write_string(f, s),
            Expression::Var(name) | Expression::PrimOp(name) => f.write_str(name),
            Expression::Literal(value) => write!(f, "'{}", value),
            Expression::If { test, then, alt } => write!(f, "(if {} {} {})", test, then, alt),
            Expression::Proc { params, body } => {
                write!(f, "(lambda ({})", params.join(" "))?;
                write_seq(f, body)?;
                f.write_char(')')
            }
            Expression::App { rator, rands } => {
                write!(f, "({}", rator)?;
                write_seq(f, rands)?;
                f.write_char(')')
            }
            Expression::Let { bindings, body } => {
                f.write_str("(let (")?;
                for (idx, binding) in bindings.iter().enumerate() {
                    if idx > 0 {
                        f.write_char(' ')?;
                    }
                    write!(f, "({} {})", binding.name, binding.value)?;
                }
                f.write_char(')')?;
                write_seq(f, body)?;
                f.write_char(')')
            }
            Expression::Dict { entries } => {
                f.write_str("(dict")?;
                for entry in entries {
                    write!(f, " ({} {})", entry.key, entry.value)?;
                }
                f.write_char(')')
            }
        }
    }
}

impl Display for TopLevel {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            TopLevel::Define { name, value } => write!(f, "(define {} {})", name, value),
            TopLevel::Expr(expr) => write!(f, "{}", expr),
        }
    }
}

impl Display for Program {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("(L32")?;
        write_seq(f, &self.forms)?;
        f.write_char(')')
    }
}
