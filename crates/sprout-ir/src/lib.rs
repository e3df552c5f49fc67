//! Expression model for Sprout.
//!
//! This crate defines the tree that the desugaring pass rewrites and the
//! JavaScript target unparses, along with the S-expression values used for
//! quoted data.
//!
//! # Expression format
//!
//! An expression is a literal, a variable or primitive-operator reference,
//! quoted data, or one of the compound forms `if`, `lambda`, application,
//! `let` and the dictionary literal. A program is an ordered list of
//! `define` forms and bare expressions.
//!
//! Example:
//! ```
//! use rhizome_sprout_ir::builders::*;
//!
//! // (if (> x 0) 1 -1)
//! let expr = if_(app(prim(">"), vec![var("x"), num(0)]), num(1), num(-1));
//! assert_eq!(expr.to_string(), "(if (> x 0) 1 -1)");
//! ```

mod ast;
mod display;
mod sexpr;
pub mod builders;

pub use ast::{Binding, DictEntry, Expression, Program, TopLevel};
pub use sexpr::{ListIter, SExpValue};
