//! Pass configuration.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// How dictionary values are turned into quoted data.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DictValuePolicy {
    /// Values must rewrite to an atomic literal or quoted data.
    #[default]
    Literal,
    /// Any rewritten, dictionary-free value is quoted structurally.
    Structural,
}

/// Options for the desugaring pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DesugarOptions {
    pub value_policy: DictValuePolicy,
}

/// Errors that can occur while loading options.
#[derive(Debug, Error)]
pub enum OptionsError {
    #[error("failed to read options: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid options: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Layout of an options file: the pass settings live under `[desugar]`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct OptionsFile {
    desugar: DesugarOptions,
}

impl DesugarOptions {
    pub fn with_value_policy(mut self, policy: DictValuePolicy) -> Self {
        self.value_policy = policy;
        self
    }

    /// Parse options from a TOML document.
    pub fn from_toml_str(contents: &str) -> Result<Self, OptionsError> {
        let file: OptionsFile = toml::from_str(contents)?;
        Ok(file.desugar)
    }

    /// Load options from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, OptionsError> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }
}
