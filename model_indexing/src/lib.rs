//! Indexed assignment for model containers
//!
//! This crate implements the left-hand side of statements like
//! `x[2:4, j] = y` in a compiled statistical model. It includes:
//!
//! - `Index` for the addressing primitives and their resolution rules
//! - `Value` for scalars, vectors, matrices and nested arrays
//! - `assign` for bounds-checked, shape-checked writes through an index list
//! - `AssignError` for the diagnostics reported on failure
//! - `AssignConfig` for choosing interleaved or atomic validation

pub mod assign;
pub mod config;
pub mod error;
pub mod index;
pub mod validate;
pub mod value;

/// Prelude module for convenient imports
///
/// # Example
/// ```
/// use model_indexing::prelude::*;
///
/// let mut x = Value::matrix(2, 2, &[0.0, 0.0, 0.0, 0.0]);
/// assign(&mut x, &[Index::Single(1), Index::Single(2)], &Value::Scalar(5.0), "x").unwrap();
/// assert_eq!(x, Value::matrix(2, 2, &[0.0, 5.0, 0.0, 0.0]));
/// ```
pub mod prelude {
    pub use super::assign::{assign, Assigner};
    pub use super::config::{AssignConfig, ValidationMode};
    pub use super::error::{AssignError, AssignResult, ConfigError};
    pub use super::index::{position_at, resolved_size, Index, Span};
    pub use super::validate::{check_range, check_size_match, check_span, resolve_span};
    pub use super::value::Value;
}

pub use prelude::*;
