//! Shared helpers for integration tests
// Each test target uses a different subset of these helpers.
#![allow(dead_code)]

use model_indexing::*;
use nalgebra::DMatrix;

/// Read back the region of `x` selected by `idxs` with the same resolution
/// rules the assignment paths use. Panics on an out-of-range position.
///
/// The result has the shape a right-hand side for that selection must have.
pub fn read_back(x: &Value<f64>, idxs: &[Index]) -> Value<f64> {
    let Some((head, tail)) = idxs.split_first() else {
        return x.clone();
    };
    match x {
        Value::Vector(v) => match head {
            Index::Single(n) => Value::Scalar(v[(*n - 1) as usize]),
            _ => Value::vector(select(head, v.len()).map(|i| v[i]).collect()),
        },
        Value::RowVector(v) => match head {
            Index::Single(n) => Value::Scalar(v[(*n - 1) as usize]),
            _ => Value::row_vector(select(head, v.len()).map(|i| v[i]).collect()),
        },
        Value::Matrix(m) => read_matrix(m, head, tail.first()),
        Value::Array(items) => match head {
            Index::Single(n) => read_back(&items[(*n - 1) as usize], tail),
            _ => Value::array(
                select(head, items.len())
                    .map(|i| read_back(&items[i], tail))
                    .collect(),
            ),
        },
        Value::Scalar(_) => panic!("cannot index a scalar"),
    }
}

fn read_matrix(m: &DMatrix<f64>, ri: &Index, ci: Option<&Index>) -> Value<f64> {
    let rows: Vec<usize> = select(ri, m.nrows()).collect();
    match (ri, ci) {
        (Index::Single(_), None) => {
            Value::row_vector((0..m.ncols()).map(|c| m[(rows[0], c)]).collect())
        }
        (_, None) => {
            let cols = m.ncols();
            Value::Matrix(DMatrix::from_fn(rows.len(), cols, |i, j| m[(rows[i], j)]))
        }
        (Index::Single(_), Some(Index::Single(j))) => Value::Scalar(m[(rows[0], (*j - 1) as usize)]),
        (_, Some(Index::Single(j))) => {
            let c = (*j - 1) as usize;
            Value::vector(rows.iter().map(|r| m[(*r, c)]).collect())
        }
        (Index::Single(_), Some(ci)) => {
            Value::row_vector(select(ci, m.ncols()).map(|c| m[(rows[0], c)]).collect())
        }
        (_, Some(ci)) => {
            let cols: Vec<usize> = select(ci, m.ncols()).collect();
            Value::Matrix(DMatrix::from_fn(rows.len(), cols.len(), |i, j| {
                m[(rows[i], cols[j])]
            }))
        }
    }
}

/// 0-based offsets selected by `index` in a dimension of size `extent`
pub fn select(index: &Index, extent: usize) -> impl Iterator<Item = usize> + '_ {
    (0..resolved_size(index, extent)).map(move |k| {
        let n = position_at(index, k);
        assert!(n >= 1 && n as usize <= extent, "position {n} outside 1..={extent}");
        (n - 1) as usize
    })
}

/// Column vector `[1, 2, ..., n]` scaled by `scale`
pub fn iota(n: usize, scale: f64) -> Vec<f64> {
    (1..=n).map(|i| i as f64 * scale).collect()
}

/// Row-major matrix filled with `1, 2, ..., rows * cols`
pub fn counting_matrix(rows: usize, cols: usize) -> Value<f64> {
    Value::matrix(rows, cols, &iota(rows * cols, 1.0))
}

/// Array of `n` zero matrices
pub fn zero_matrices(n: usize, rows: usize, cols: usize) -> Value<f64> {
    Value::array(
        (0..n)
            .map(|_| Value::Matrix(DMatrix::zeros(rows, cols)))
            .collect(),
    )
}
