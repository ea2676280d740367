//! Assignment configuration
//!
//! The only tunable is how gather/scatter paths behave when a position turns
//! out to be invalid partway through a write.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// When positions are validated relative to writes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationMode {
    /// Gather/scatter paths check each position right before writing it.
    /// A failure partway through leaves the earlier elements written.
    #[default]
    Interleaved,
    /// The assignment runs against a scratch copy and is committed only if
    /// it succeeds; a failure never mutates the destination.
    Atomic,
}

/// Configuration for an [`Assigner`](crate::assign::Assigner)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssignConfig {
    /// Validation strategy
    pub validation: ValidationMode,
}

impl AssignConfig {
    /// Configuration with atomic validation
    pub fn atomic() -> Self {
        AssignConfig {
            validation: ValidationMode::Atomic,
        }
    }

    /// Parse a configuration table, e.g. `validation = "atomic"`
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }
}
