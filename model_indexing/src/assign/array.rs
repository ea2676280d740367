//! Nested-array assignment.
//!
//! The head index addresses the array; the tail addresses the selected
//! element(s) through the top-level dispatcher.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

use nalgebra::Scalar;
use tracing::trace;

use super::assign_value;
use crate::error::{AssignError, AssignResult};
use crate::index::Index;
use crate::validate::{check_range, check_size_match};
use crate::value::Value;

/// Assign through `head` into `xs`, then through `tail` into each element.
///
/// A `Single` head passes `value` down unchanged. Any other head requires an
/// array value with one entry per selected element.
pub fn assign<T: Scalar>(
    xs: &mut [Value<T>],
    head: &Index,
    tail: &[Index],
    value: &Value<T>,
    name: &str,
    depth: usize,
) -> AssignResult<()> {
    if let Index::Single(n) = head {
        const OP: &str = "array[uni, ...] assign";
        trace!(op = OP, name, depth, "descend into element");
        let i = check_range(OP, name, xs.len(), *n)?;
        return assign_value(&mut xs[i], tail, value, name, depth + 1);
    }

    const OP: &str = "array[multi, ...] assign";
    trace!(op = OP, name, depth, kind = head.kind(), "descend into each element");
    let ys = value.as_array().ok_or_else(|| {
        AssignError::rank_mismatch(OP, name, format!("array[{}]", xs.len()), value.to_string())
    })?;
    check_size_match(OP, name, head.resolved_size(xs.len()), ys.len())?;
    for (k, y) in ys.iter().enumerate() {
        let i = check_range(OP, name, xs.len(), head.position_at(k))?;
        assign_value(&mut xs[i], tail, y, name, depth + 1)?;
    }
    Ok(())
}
