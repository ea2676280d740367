//! Vector-rank assignment (index list of length 1).
//!
//! Works on any dense vector or vector view: `DVector`, `RowDVector`, and the
//! column/row views handed down by the matrix paths. Storage is addressed
//! linearly, which is the element order for every vector shape.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

use nalgebra::{Dim, Matrix, RawStorageMut, Scalar};
use tracing::trace;

use crate::error::{AssignError, AssignResult};
use crate::index::Index;
use crate::validate::{check_range, check_size_match, resolve_span};
use crate::value::Value;

/// Assign `value` into the positions of `x` selected by `index`.
///
/// A scalar value requires a `Single` index. Every other index kind takes a
/// vector value (either orientation) whose length matches the selection.
pub fn assign<T, R, C, S>(
    x: &mut Matrix<T, R, C, S>,
    index: &Index,
    value: &Value<T>,
    name: &str,
    depth: usize,
) -> AssignResult<()>
where
    T: Scalar,
    R: Dim,
    C: Dim,
    S: RawStorageMut<T, R, C>,
{
    match (index, value) {
        (Index::Single(n), Value::Scalar(y)) => {
            const OP: &str = "vector[uni] assign";
            trace!(op = OP, name, depth, "scalar write");
            let i = check_range(OP, name, x.len(), *n)?;
            x[i] = y.clone();
            Ok(())
        }
        (Index::Single(n), _) => {
            const OP: &str = "vector[uni] assign";
            trace!(op = OP, name, depth, "single element from vector");
            let i = check_range(OP, name, x.len(), *n)?;
            let ys = elements(OP, x.len(), value, name)?;
            // The value must also cover `n`, which guarantees `ys[0]` exists.
            check_range(OP, name, ys.len(), *n)?;
            x[i] = ys[0].clone();
            Ok(())
        }
        (Index::Multiple(_), _) => scatter(x, index, value, name, depth),
        _ => assign_range(x, index, value, name, depth),
    }
}

/// Contiguous range (`Min`, `Max`, `MinMax`, `All`): validate both endpoints
/// and the size, then copy in one pass. A failure leaves `x` untouched.
fn assign_range<T, R, C, S>(
    x: &mut Matrix<T, R, C, S>,
    index: &Index,
    value: &Value<T>,
    name: &str,
    depth: usize,
) -> AssignResult<()>
where
    T: Scalar,
    R: Dim,
    C: Dim,
    S: RawStorageMut<T, R, C>,
{
    let op = range_op(index);
    trace!(op, name, depth, "contiguous copy");
    let extent = x.len();
    let ys = elements(op, extent, value, name)?;
    let (offset, span) = resolve_span(op, name, extent, index)?;
    check_size_match(op, name, span.len, ys.len())?;
    if span.reversed {
        for (k, y) in ys.iter().rev().enumerate() {
            x[offset + k] = y.clone();
        }
    } else {
        for (k, y) in ys.iter().enumerate() {
            x[offset + k] = y.clone();
        }
    }
    Ok(())
}

/// Gather/scatter through `position_at`, validating each position right
/// before it is written.
fn scatter<T, R, C, S>(
    x: &mut Matrix<T, R, C, S>,
    index: &Index,
    value: &Value<T>,
    name: &str,
    depth: usize,
) -> AssignResult<()>
where
    T: Scalar,
    R: Dim,
    C: Dim,
    S: RawStorageMut<T, R, C>,
{
    const OP: &str = "vector[multi] assign";
    trace!(op = OP, name, depth, kind = index.kind(), "element-wise scatter");
    let extent = x.len();
    let ys = elements(OP, extent, value, name)?;
    check_size_match(OP, name, index.resolved_size(extent), ys.len())?;
    for (k, y) in ys.iter().enumerate() {
        let i = check_range(OP, name, extent, index.position_at(k))?;
        x[i] = y.clone();
    }
    Ok(())
}

/// Elements of a vector right-hand side
fn elements<'v, T: Scalar>(
    op: &'static str,
    extent: usize,
    value: &'v Value<T>,
    name: &str,
) -> AssignResult<&'v [T]> {
    value.as_slice().ok_or_else(|| {
        AssignError::rank_mismatch(op, name, format!("vector[{extent}]"), value.to_string())
    })
}

fn range_op(index: &Index) -> &'static str {
    match index {
        Index::Min(_) => "vector[min] assign",
        Index::Max(_) => "vector[max] assign",
        Index::MinMax {
            ascending: false, ..
        } => "vector[reverse_min_max] assign",
        Index::All => "vector[omni] assign",
        _ => "vector[min_max] assign",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::{DMatrix, DVector};

    fn v(data: &[f64]) -> DVector<f64> {
        DVector::from_column_slice(data)
    }

    #[test]
    fn test_single_scalar() {
        let mut x = v(&[1.0, 2.0, 3.0]);
        assign(&mut x, &Index::Single(2), &Value::Scalar(9.0), "x", 0).unwrap();
        assert_eq!(x, v(&[1.0, 9.0, 3.0]));
    }

    #[test]
    fn test_single_from_one_element_vector() {
        let mut x = v(&[1.0, 2.0, 3.0]);
        assign(&mut x, &Index::Single(1), &Value::vector(vec![7.0]), "x", 0).unwrap();
        assert_eq!(x, v(&[7.0, 2.0, 3.0]));

        // Position 3 is valid for `x` but not for the one-element value
        let err = assign(&mut x, &Index::Single(3), &Value::vector(vec![9.0]), "x", 0)
            .unwrap_err();
        assert_eq!(err, AssignError::out_of_range("vector[uni] assign", "x", 1, 3));
        assert_eq!(x, v(&[7.0, 2.0, 3.0]));

        let err = assign(&mut x, &Index::Single(4), &Value::vector(vec![9.0]), "x", 0)
            .unwrap_err();
        assert_eq!(err, AssignError::out_of_range("vector[uni] assign", "x", 3, 4));

        assign(&mut x, &Index::Single(2), &Value::row_vector(vec![5.0, 6.0]), "x", 0).unwrap();
        assert_eq!(x, v(&[7.0, 5.0, 3.0]));
    }

    #[test]
    fn test_reverse_range() {
        let mut x = v(&[10.0, 20.0, 30.0, 40.0, 50.0]);
        let value = Value::vector(vec![1.0, 2.0, 3.0]);
        assign(&mut x, &Index::min_max(4, 2), &value, "x", 0).unwrap();
        assert_eq!(x, v(&[10.0, 3.0, 2.0, 1.0, 50.0]));
    }

    #[test]
    fn test_range_failure_leaves_vector_untouched() {
        let mut x = v(&[1.0, 2.0, 3.0]);
        let value = Value::vector(vec![0.0, 0.0, 0.0]);
        let err = assign(&mut x, &Index::min_max(2, 4), &value, "x", 0).unwrap_err();
        assert_eq!(err.op(), "vector[min_max] assign");
        assert!(matches!(err, AssignError::OutOfRange { index: 4, extent: 3, .. }));
        assert_eq!(x, v(&[1.0, 2.0, 3.0]));
    }

    #[test]
    fn test_multiple_with_duplicates() {
        let mut x = v(&[0.0, 0.0, 0.0]);
        let value = Value::vector(vec![1.0, 2.0, 3.0]);
        assign(&mut x, &Index::Multiple(vec![3, 1, 3]), &value, "x", 0).unwrap();
        assert_eq!(x, v(&[2.0, 0.0, 3.0]));
    }

    #[test]
    fn test_open_ranges_and_all() {
        let mut x = v(&[0.0; 4]);
        assign(&mut x, &Index::Min(3), &Value::vector(vec![1.0, 2.0]), "x", 0).unwrap();
        assert_eq!(x, v(&[0.0, 0.0, 1.0, 2.0]));

        assign(&mut x, &Index::Max(1), &Value::row_vector(vec![5.0]), "x", 0).unwrap();
        assert_eq!(x, v(&[5.0, 0.0, 1.0, 2.0]));

        let all = Value::vector(vec![4.0, 3.0, 2.0, 1.0]);
        assign(&mut x, &Index::All, &all, "x", 0).unwrap();
        assert_eq!(x, v(&[4.0, 3.0, 2.0, 1.0]));

        let err = assign(&mut x, &Index::Max(5), &Value::vector(vec![0.0; 5]), "x", 0)
            .unwrap_err();
        assert_eq!(err, AssignError::out_of_range("vector[max] assign", "x", 4, 5));
        assert_eq!(x, v(&[4.0, 3.0, 2.0, 1.0]));
    }

    #[test]
    fn test_column_view_destination() {
        let mut m = DMatrix::<f64>::zeros(3, 2);
        {
            let mut col = m.column_mut(1);
            assign(&mut col, &Index::min_max(1, 2), &Value::vector(vec![1.0, 2.0]), "m", 1)
                .unwrap();
        }
        assert_eq!(m[(0, 1)], 1.0);
        assert_eq!(m[(1, 1)], 2.0);
        assert_eq!(m[(2, 1)], 0.0);
        assert_eq!(m.column(0).sum(), 0.0);
    }

    #[test]
    fn test_rank_mismatch() {
        let mut x = v(&[0.0; 3]);
        let err = assign(&mut x, &Index::Multiple(vec![1]), &Value::Scalar(1.0), "x", 0)
            .unwrap_err();
        assert!(matches!(err, AssignError::RankMismatch { .. }));
    }
}
