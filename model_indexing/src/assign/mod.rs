//! Assignment dispatcher
//!
//! Selects an algorithm from the destination kind and the shape of the index
//! list:
//!
//! - `vector`: index lists of length 1 on vectors and vector views
//! - `matrix`: index lists of length 1 or 2 on matrices and matrix views
//! - `array`: nested arrays, peeling one index per level
//!
//! An empty index list is a whole-value assignment.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod array;
pub mod matrix;
pub mod vector;

use nalgebra::Scalar;
use tracing::{debug, trace};

use crate::config::{AssignConfig, ValidationMode};
use crate::error::{AssignError, AssignResult};
use crate::index::Index;
use crate::value::Value;

/// Assignment entry point carrying the validation configuration
#[derive(Debug, Clone, Default)]
pub struct Assigner {
    config: AssignConfig,
}

impl Assigner {
    /// Create an assigner with the given configuration
    pub fn new(config: AssignConfig) -> Self {
        Assigner { config }
    }

    /// Get the configuration
    pub fn config(&self) -> &AssignConfig {
        &self.config
    }

    /// Write `value` into the region of `dest` selected by `idxs`.
    ///
    /// `name` is the variable name reported in diagnostics and `depth` the
    /// indexing depth the call starts at (0 for a statement-level
    /// assignment).
    pub fn assign<T: Scalar>(
        &self,
        dest: &mut Value<T>,
        idxs: &[Index],
        value: &Value<T>,
        name: &str,
        depth: usize,
    ) -> AssignResult<()> {
        let result = match self.config.validation {
            ValidationMode::Interleaved => assign_value(dest, idxs, value, name, depth),
            ValidationMode::Atomic => {
                let mut scratch = dest.clone();
                assign_value(&mut scratch, idxs, value, name, depth).map(|()| *dest = scratch)
            }
        };
        if let Err(err) = &result {
            debug!(op = err.op(), name, depth, error = %err, "assignment failed");
        }
        result
    }
}

/// Write `value` into the region of `dest` selected by `idxs` with the
/// default configuration.
///
/// # Example
/// ```
/// use model_indexing::prelude::*;
///
/// let mut x = Value::vector(vec![10.0, 20.0, 30.0, 40.0, 50.0]);
/// let value = Value::vector(vec![1.0, 2.0, 3.0]);
/// assign(&mut x, &[Index::min_max(4, 2)], &value, "x").unwrap();
/// assert_eq!(x, Value::vector(vec![10.0, 3.0, 2.0, 1.0, 50.0]));
/// ```
pub fn assign<T: Scalar>(
    dest: &mut Value<T>,
    idxs: &[Index],
    value: &Value<T>,
    name: &str,
) -> AssignResult<()> {
    Assigner::default().assign(dest, idxs, value, name, 0)
}

/// Dispatch on the destination kind. Re-entered by the array composer.
pub(crate) fn assign_value<T: Scalar>(
    dest: &mut Value<T>,
    idxs: &[Index],
    value: &Value<T>,
    name: &str,
    depth: usize,
) -> AssignResult<()> {
    let Some((head, tail)) = idxs.split_first() else {
        return assign_whole(dest, value, name, depth);
    };
    match dest {
        Value::Scalar(_) => Err(too_many_indexes("real", idxs, name)),
        Value::Vector(x) => match idxs {
            [index] => vector::assign(x, index, value, name, depth),
            _ => Err(too_many_indexes(&format!("vector[{}]", x.len()), idxs, name)),
        },
        Value::RowVector(x) => match idxs {
            [index] => vector::assign(x, index, value, name, depth),
            _ => Err(too_many_indexes(&format!("row_vector[{}]", x.len()), idxs, name)),
        },
        Value::Matrix(m) => {
            let (rows, cols) = m.shape();
            let mut view = m.view_mut((0, 0), (rows, cols));
            matrix::assign(&mut view, idxs, value, name, depth)
        }
        Value::Array(xs) => array::assign(xs, head, tail, value, name, depth),
    }
}

/// Empty index list: replace `dest` with `value`.
///
/// Dense values take the value's extents. Arrays are resized to the value's
/// length and copied element by element. Every overlapping element pair is
/// kind-checked before anything is written, so a mismatch leaves `dest`
/// untouched.
fn assign_whole<T: Scalar>(
    dest: &mut Value<T>,
    value: &Value<T>,
    name: &str,
    depth: usize,
) -> AssignResult<()> {
    check_whole(dest, value, name)?;
    trace!(op = "assign", name, depth, value = %value, "whole copy");
    copy_whole(dest, value);
    Ok(())
}

fn check_whole<T: Scalar>(dest: &Value<T>, value: &Value<T>, name: &str) -> AssignResult<()> {
    match (dest, value) {
        (Value::Array(xs), Value::Array(ys)) => xs
            .iter()
            .zip(ys)
            .try_for_each(|(x, y)| check_whole(x, y, name)),
        (dest, value) if dest.same_kind(value) => Ok(()),
        (dest, value) => Err(AssignError::rank_mismatch(
            "assign",
            name,
            dest.to_string(),
            value.to_string(),
        )),
    }
}

fn copy_whole<T: Scalar>(dest: &mut Value<T>, value: &Value<T>) {
    match (dest, value) {
        (Value::Array(xs), Value::Array(ys)) => {
            xs.truncate(ys.len());
            for (k, y) in ys.iter().enumerate() {
                if k < xs.len() {
                    copy_whole(&mut xs[k], y);
                } else {
                    xs.push(y.clone());
                }
            }
        }
        (dest, value) => dest.clone_from(value),
    }
}

fn too_many_indexes(lhs: &str, idxs: &[Index], name: &str) -> AssignError {
    AssignError::rank_mismatch("assign", name, lhs, format!("{} indexes", idxs.len()))
}
