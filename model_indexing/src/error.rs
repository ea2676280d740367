//! Error types for indexed assignment
//!
//! Every failure the engine can report names the algorithm that detected it
//! (`op`) and the variable being assigned (`name`), so the caller can turn it
//! into a terminating diagnostic without extra context.

use thiserror::Error;

/// Assignment error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssignError {
    /// A 1-based position fell outside `[1, extent]`
    #[error(
        "{op}: index {index} out of range for '{name}'; expecting index to be between 1 and {extent}"
    )]
    OutOfRange {
        /// Algorithm label
        op: &'static str,
        /// Variable name
        name: String,
        /// Extent of the addressed dimension
        extent: usize,
        /// Attempted position
        index: i64,
    },

    /// The number of selected positions differs from the value's extent
    #[error(
        "{op}: size of '{name}' selection ({expected}) and right-hand side ({actual}) must match in size"
    )]
    ShapeMismatch {
        /// Algorithm label
        op: &'static str,
        /// Variable name
        name: String,
        /// Positions selected on the left-hand side
        expected: usize,
        /// Extent of the right-hand side
        actual: usize,
    },

    /// The value (or index list) cannot address the destination at all
    #[error("{op}: cannot assign {rhs} to '{name}' of type {lhs}")]
    RankMismatch {
        /// Algorithm label
        op: &'static str,
        /// Variable name
        name: String,
        /// Destination description
        lhs: String,
        /// Value description
        rhs: String,
    },
}

impl AssignError {
    /// Create an out-of-range error
    pub fn out_of_range<S: Into<String>>(
        op: &'static str,
        name: S,
        extent: usize,
        index: i64,
    ) -> Self {
        AssignError::OutOfRange {
            op,
            name: name.into(),
            extent,
            index,
        }
    }

    /// Create a shape mismatch error
    pub fn shape_mismatch<S: Into<String>>(
        op: &'static str,
        name: S,
        expected: usize,
        actual: usize,
    ) -> Self {
        AssignError::ShapeMismatch {
            op,
            name: name.into(),
            expected,
            actual,
        }
    }

    /// Create a rank mismatch error
    pub fn rank_mismatch<S, L, R>(op: &'static str, name: S, lhs: L, rhs: R) -> Self
    where
        S: Into<String>,
        L: Into<String>,
        R: Into<String>,
    {
        AssignError::RankMismatch {
            op,
            name: name.into(),
            lhs: lhs.into(),
            rhs: rhs.into(),
        }
    }

    /// Label of the algorithm that failed
    pub fn op(&self) -> &'static str {
        match self {
            AssignError::OutOfRange { op, .. }
            | AssignError::ShapeMismatch { op, .. }
            | AssignError::RankMismatch { op, .. } => op,
        }
    }

    /// Name of the variable being assigned
    pub fn name(&self) -> &str {
        match self {
            AssignError::OutOfRange { name, .. }
            | AssignError::ShapeMismatch { name, .. }
            | AssignError::RankMismatch { name, .. } => name,
        }
    }
}

/// Result type alias for assignment operations
pub type AssignResult<T> = Result<T, AssignError>;

/// Configuration loading error
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The TOML source could not be parsed into an `AssignConfig`
    #[error("invalid assign configuration: {0}")]
    Parse(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AssignError::out_of_range("vector[uni] assign", "theta", 5, 6);
        insta::assert_snapshot!(
            err.to_string(),
            @"vector[uni] assign: index 6 out of range for 'theta'; expecting index to be between 1 and 5"
        );

        let err = AssignError::shape_mismatch("vector[multi] assign", "mu", 3, 2);
        insta::assert_snapshot!(
            err.to_string(),
            @"vector[multi] assign: size of 'mu' selection (3) and right-hand side (2) must match in size"
        );

        let err = AssignError::rank_mismatch("assign", "sigma", "real", "vector[3]");
        insta::assert_snapshot!(
            err.to_string(),
            @"assign: cannot assign vector[3] to 'sigma' of type real"
        );
    }

    #[test]
    fn test_error_accessors() {
        let err = AssignError::shape_mismatch("matrix[multi,multi] assign", "Sigma", 2, 3);
        assert_eq!(err.op(), "matrix[multi,multi] assign");
        assert_eq!(err.name(), "Sigma");
    }
}
