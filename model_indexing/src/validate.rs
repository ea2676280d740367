//! Bounds and size validation
//!
//! Every position is checked against `[1, extent]` before it touches storage.
//! A successful range check hands back the 0-based offset, so the single
//! decrement from 1-based addressing happens here and nowhere else.

// SAFETY: i64→usize cast happens only after `position >= 1` was checked.
#![allow(clippy::cast_sign_loss)]

use crate::error::{AssignError, AssignResult};
use crate::index::{Index, Span};

/// Check a 1-based `position` against a dimension of size `extent`.
///
/// Returns the 0-based storage offset.
pub fn check_range(
    op: &'static str,
    name: &str,
    extent: usize,
    position: i64,
) -> AssignResult<usize> {
    if position < 1 || position as u64 > extent as u64 {
        return Err(AssignError::out_of_range(op, name, extent, position));
    }
    Ok((position - 1) as usize)
}

/// Check that the selected size matches the value's extent
pub fn check_size_match(
    op: &'static str,
    name: &str,
    expected: usize,
    actual: usize,
) -> AssignResult<()> {
    if expected != actual {
        return Err(AssignError::shape_mismatch(op, name, expected, actual));
    }
    Ok(())
}

/// Check both endpoints of a contiguous span.
///
/// An empty span addresses nothing and always passes. Returns the 0-based
/// offset of the lowest position.
pub fn check_span(
    op: &'static str,
    name: &str,
    extent: usize,
    span: &Span,
) -> AssignResult<usize> {
    if span.len == 0 {
        return Ok(0);
    }
    let offset = check_range(op, name, extent, span.first)?;
    check_range(op, name, extent, span.last())?;
    Ok(offset)
}

/// Resolve a range index against `extent` and check both endpoints.
///
/// Returns the 0-based offset of the lowest position with the span. A
/// position-addressed index has no span and is a rank mismatch.
pub fn resolve_span(
    op: &'static str,
    name: &str,
    extent: usize,
    index: &Index,
) -> AssignResult<(usize, Span)> {
    let span = index.span(extent).ok_or_else(|| {
        AssignError::rank_mismatch(op, name, "contiguous range", format!("{} index", index.kind()))
    })?;
    let offset = check_span(op, name, extent, &span)?;
    Ok((offset, span))
}
