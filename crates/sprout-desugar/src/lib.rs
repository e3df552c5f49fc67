//! Dictionary-literal desugaring for Sprout.
//!
//! Eliminates the `dict` literal by rewriting each occurrence into a call to
//! an association-list lookup function applied to quoted data, then prepends
//! the definition of that function to the program.
//!
//! ```
//! use rhizome_sprout_desugar::desugar_program;
//! use rhizome_sprout_ir::{builders::*, Program, TopLevel};
//!
//! let program = Program::new(vec![TopLevel::Expr(dict(vec![(var("a"), num(1))]))]);
//! let desugared = desugar_program(&program).unwrap();
//! assert_eq!(desugared.forms.len(), 2);
//! assert_eq!(desugared.forms[1].to_string(), "(dict '((a . 1)))");
//! ```

mod dict;
mod encode;
mod options;
mod rewrite;
mod runtime;

pub use dict::desugar_dict;
pub use encode::{encode, encode_list, quote};
pub use options::{DesugarOptions, DictValuePolicy, OptionsError};
pub use rewrite::{rewrite, rewrite_program};
pub use runtime::{synthesize_lookup, LOOKUP_NAME};

use rhizome_sprout_ir::Program;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur during desugaring.
///
/// Each variant carries the offending node in Scheme syntax.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DesugarError {
    #[error("malformed dictionary key: {0}")]
    MalformedDictKey(String),

    #[error("non-literal value cannot be quoted: {0}")]
    NonLiteralValue(String),
}

/// Desugar a whole program with default options.
pub fn desugar_program(program: &Program) -> Result<Program, DesugarError> {
    desugar_program_with(program, &DesugarOptions::default())
}

/// Desugar a whole program.
///
/// The lookup definition is always the first form of the result, whether or
/// not the input contains a dictionary.
pub fn desugar_program_with(
    program: &Program,
    options: &DesugarOptions,
) -> Result<Program, DesugarError> {
    debug!(
        forms = program.forms.len(),
        policy = ?options.value_policy,
        "desugaring program"
    );
    let rewritten = rewrite_program(program, options)?;
    let mut forms = Vec::with_capacity(rewritten.forms.len() + 1);
    forms.push(synthesize_lookup());
    forms.extend(rewritten.forms);
    Ok(Program::new(forms))
}
