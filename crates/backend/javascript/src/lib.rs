//! JavaScript target for Sprout.
//!
//! Unparses the core subset of the expression language (literals,
//! references, `lambda`, `if`, application and `define`) into JavaScript
//! expression text.

mod codegen;

pub use codegen::{unparse, unparse_form, unparse_program, UnparseError};
