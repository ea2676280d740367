//! Matrix-rank assignment (index list of length 1 or 2).
//!
//! A single index addresses rows. Two indices address (row, column). Column
//! selections that reduce to a column or a contiguous column block recurse
//! into that sub-view with the row index alone.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

use nalgebra::{DMatrix, DMatrixViewMut, Scalar};
use tracing::trace;

use super::vector;
use crate::error::{AssignError, AssignResult};
use crate::index::Index;
use crate::validate::{check_range, check_size_match, resolve_span};
use crate::value::Value;

/// Assign `value` into the region of `x` selected by `idxs`.
pub fn assign<T: Scalar>(
    x: &mut DMatrixViewMut<'_, T>,
    idxs: &[Index],
    value: &Value<T>,
    name: &str,
    depth: usize,
) -> AssignResult<()> {
    let (rows, cols) = x.shape();
    match (idxs, value) {
        ([], Value::Matrix(y)) => assign_whole(x, y, name, depth),

        // Row addressing
        ([Index::Single(i)], _) => assign_row(x, *i, value, name, depth),
        ([index @ (Index::Min(_) | Index::Max(_))], Value::Matrix(y)) => {
            assign_row_block(x, index, y, name, depth)
        }
        ([index], Value::Matrix(y)) => gather_rows(x, index, y, name, depth),

        // Cell and block addressing
        ([Index::Single(i), Index::Single(j)], Value::Scalar(y)) => {
            const OP: &str = "matrix[uni,uni] assign";
            trace!(op = OP, name, depth, "cell write");
            let r = check_range(OP, name, rows, *i)?;
            let c = check_range(OP, name, cols, *j)?;
            x[(r, c)] = y.clone();
            Ok(())
        }
        ([ri @ Index::MinMax { .. }, ci @ Index::MinMax { .. }], Value::Matrix(y)) => {
            assign_block(x, ri, ci, y, name, depth)
        }
        ([ri @ Index::Multiple(_), ci @ Index::Multiple(_)], Value::Matrix(y)) => {
            gather_cells("matrix[multi,multi] assign", x, ri, ci, y, name, depth)
        }
        ([Index::Multiple(rs), Index::Single(j)], _) => {
            scatter_column(x, rs, *j, value, name, depth)
        }

        // Column reduction, then recursion with the row index
        ([ri, Index::Single(j)], _) => {
            const OP: &str = "matrix[L, uni] assign";
            trace!(op = OP, name, depth, "recurse into column");
            let c = check_range(OP, name, cols, *j)?;
            let mut column = x.column_mut(c);
            vector::assign(&mut column, ri, value, name, depth + 1)
        }
        ([ri, ci @ (Index::Min(_) | Index::Max(_) | Index::MinMax { .. })], _) => {
            assign_column_block(x, ri, ci, value, name, depth)
        }

        ([Index::Single(i), ci], _) => scatter_row(x, *i, ci, value, name, depth),
        ([ri, ci], Value::Matrix(y)) => {
            gather_cells("matrix[multi,multi] assign", x, ri, ci, y, name, depth)
        }

        _ => Err(AssignError::rank_mismatch(
            "matrix assign",
            name,
            format!("matrix[{rows},{cols}]"),
            format!("{value} with {} indexes", idxs.len()),
        )),
    }
}

/// Empty index list against a view: the value must have the view's shape
fn assign_whole<T: Scalar>(
    x: &mut DMatrixViewMut<'_, T>,
    y: &DMatrix<T>,
    name: &str,
    depth: usize,
) -> AssignResult<()> {
    const OP: &str = "matrix assign";
    trace!(op = OP, name, depth, "whole block copy");
    check_size_match(OP, name, x.nrows(), y.nrows())?;
    check_size_match(OP, name, x.ncols(), y.ncols())?;
    x.copy_from(y);
    Ok(())
}

/// `x[i] = row`
fn assign_row<T: Scalar>(
    x: &mut DMatrixViewMut<'_, T>,
    i: i64,
    value: &Value<T>,
    name: &str,
    depth: usize,
) -> AssignResult<()> {
    const OP: &str = "matrix[uni] assign";
    trace!(op = OP, name, depth, "row overwrite");
    let (rows, cols) = x.shape();
    let ys = value.as_slice().ok_or_else(|| {
        let lhs = format!("row of matrix[{rows},{cols}]");
        AssignError::rank_mismatch(OP, name, lhs, value.to_string())
    })?;
    check_size_match(OP, name, cols, ys.len())?;
    let r = check_range(OP, name, rows, i)?;
    for (c, y) in ys.iter().enumerate() {
        x[(r, c)] = y.clone();
    }
    Ok(())
}

/// `x[min:]` / `x[:max]` with a matrix value: one block copy over all columns
fn assign_row_block<T: Scalar>(
    x: &mut DMatrixViewMut<'_, T>,
    index: &Index,
    y: &DMatrix<T>,
    name: &str,
    depth: usize,
) -> AssignResult<()> {
    let op = match index {
        Index::Min(_) => "matrix[min] assign",
        _ => "matrix[max] assign",
    };
    trace!(op, name, depth, "row block copy");
    let (rows, cols) = x.shape();
    let (r0, span) = resolve_span(op, name, rows, index)?;
    check_size_match(op, name, span.len, y.nrows())?;
    check_size_match(op, name, cols, y.ncols())?;
    x.view_mut((r0, 0), (span.len, cols)).copy_from(y);
    Ok(())
}

/// `x[L] = y` for any other row index: value row `k` goes to row
/// `position_at(k)`
fn gather_rows<T: Scalar>(
    x: &mut DMatrixViewMut<'_, T>,
    index: &Index,
    y: &DMatrix<T>,
    name: &str,
    depth: usize,
) -> AssignResult<()> {
    const OP: &str = "matrix[multi] assign";
    trace!(op = OP, name, depth, kind = index.kind(), "row gather");
    let (rows, cols) = x.shape();
    check_size_match(OP, name, index.resolved_size(rows), y.nrows())?;
    check_size_match(OP, name, cols, y.ncols())?;
    for k in 0..y.nrows() {
        let r = check_range(OP, name, rows, index.position_at(k))?;
        for c in 0..cols {
            x[(r, c)] = y[(k, c)].clone();
        }
    }
    Ok(())
}

/// Both axes contiguous: validate every endpoint, then one block copy with
/// the value flipped along each descending axis
fn assign_block<T: Scalar>(
    x: &mut DMatrixViewMut<'_, T>,
    ri: &Index,
    ci: &Index,
    y: &DMatrix<T>,
    name: &str,
    depth: usize,
) -> AssignResult<()> {
    let op = match (descending(ri), descending(ci)) {
        (false, false) => "matrix[min_max, min_max] assign",
        (false, true) => "matrix[min_max, reverse_min_max] assign",
        (true, false) => "matrix[reverse_min_max, min_max] assign",
        (true, true) => "matrix[reverse_min_max, reverse_min_max] assign",
    };
    trace!(op, name, depth, rows = %ri, cols = %ci, "block copy");
    let (rows, cols) = x.shape();
    let (r0, rspan) = resolve_span(op, name, rows, ri)?;
    let (c0, cspan) = resolve_span(op, name, cols, ci)?;
    check_size_match(op, name, rspan.len, y.nrows())?;
    check_size_match(op, name, cspan.len, y.ncols())?;
    let mut block = x.view_mut((r0, c0), (rspan.len, cspan.len));
    copy_flipped(&mut block, y, rspan.reversed, cspan.reversed);
    Ok(())
}

/// Generic two-axis gather, column-major, each position validated right
/// before its cell is written
fn gather_cells<T: Scalar>(
    op: &'static str,
    x: &mut DMatrixViewMut<'_, T>,
    ri: &Index,
    ci: &Index,
    y: &DMatrix<T>,
    name: &str,
    depth: usize,
) -> AssignResult<()> {
    trace!(op, name, depth, rows = %ri, cols = %ci, "cell gather");
    let (rows, cols) = x.shape();
    check_size_match(op, name, ri.resolved_size(rows), y.nrows())?;
    check_size_match(op, name, ci.resolved_size(cols), y.ncols())?;
    for j in 0..y.ncols() {
        let c = check_range(op, name, cols, ci.position_at(j))?;
        for i in 0..y.nrows() {
            let r = check_range(op, name, rows, ri.position_at(i))?;
            x[(r, c)] = y[(i, j)].clone();
        }
    }
    Ok(())
}

/// `x[i, L] = v` for `L` a position list or the whole row
fn scatter_row<T: Scalar>(
    x: &mut DMatrixViewMut<'_, T>,
    i: i64,
    ci: &Index,
    value: &Value<T>,
    name: &str,
    depth: usize,
) -> AssignResult<()> {
    let op = match ci {
        Index::Multiple(_) => "matrix[uni, multi] assign",
        _ => "matrix[uni, omni] assign",
    };
    trace!(op, name, depth, cols = %ci, "row scatter");
    let (rows, cols) = x.shape();
    let r = check_range(op, name, rows, i)?;
    let ys = value.as_slice().ok_or_else(|| {
        let lhs = format!("row of matrix[{rows},{cols}]");
        AssignError::rank_mismatch(op, name, lhs, value.to_string())
    })?;
    check_size_match(op, name, ci.resolved_size(cols), ys.len())?;
    for (k, y) in ys.iter().enumerate() {
        let c = check_range(op, name, cols, ci.position_at(k))?;
        x[(r, c)] = y.clone();
    }
    Ok(())
}

/// `x[ns, j] = v`
fn scatter_column<T: Scalar>(
    x: &mut DMatrixViewMut<'_, T>,
    ns: &[i64],
    j: i64,
    value: &Value<T>,
    name: &str,
    depth: usize,
) -> AssignResult<()> {
    const OP: &str = "matrix[multi, uni] assign";
    trace!(op = OP, name, depth, "column scatter");
    let (rows, cols) = x.shape();
    let c = check_range(OP, name, cols, j)?;
    let ys = value.as_slice().ok_or_else(|| {
        let lhs = format!("column of matrix[{rows},{cols}]");
        AssignError::rank_mismatch(OP, name, lhs, value.to_string())
    })?;
    check_size_match(OP, name, ns.len(), ys.len())?;
    for (n, y) in ns.iter().zip(ys) {
        let r = check_range(OP, name, rows, *n)?;
        x[(r, c)] = y.clone();
    }
    Ok(())
}

/// `x[L, min:]`, `x[L, :max]`, `x[L, a:b]`: reduce to the column block and
/// recurse with `L`. A descending column range flips the value's columns so
/// the block itself can be addressed in storage order.
fn assign_column_block<T: Scalar>(
    x: &mut DMatrixViewMut<'_, T>,
    ri: &Index,
    ci: &Index,
    value: &Value<T>,
    name: &str,
    depth: usize,
) -> AssignResult<()> {
    let op = match ci {
        Index::Min(_) => "matrix[L, min] assign",
        Index::Max(_) => "matrix[L, max] assign",
        Index::MinMax {
            ascending: false, ..
        } => "matrix[L, reverse_min_max] assign",
        _ => "matrix[L, min_max] assign",
    };
    trace!(op, name, depth, cols = %ci, "recurse into column block");
    let (rows, cols) = x.shape();
    let (c0, cspan) = resolve_span(op, name, cols, ci)?;
    let (value_cols, flipped) = match value {
        Value::Matrix(y) => {
            let n = y.ncols();
            let flipped = cspan.reversed.then(|| {
                Value::Matrix(DMatrix::from_fn(y.nrows(), n, |i, j| y[(i, n - 1 - j)].clone()))
            });
            (n, flipped)
        }
        Value::Vector(v) => {
            let flipped = cspan.reversed.then(|| Value::vector(reversed(v.as_slice())));
            (v.len(), flipped)
        }
        Value::RowVector(v) => {
            let flipped = cspan.reversed.then(|| Value::row_vector(reversed(v.as_slice())));
            (v.len(), flipped)
        }
        _ => {
            return Err(AssignError::rank_mismatch(
                op,
                name,
                format!("matrix[{rows},{cols}]"),
                value.to_string(),
            ))
        }
    };
    check_size_match(op, name, cspan.len, value_cols)?;

    let value = flipped.as_ref().unwrap_or(value);
    let mut block = x.view_mut((0, c0), (rows, cspan.len));
    assign(&mut block, std::slice::from_ref(ri), value, name, depth + 1)
}

/// Copy `y` into `block`, reading it back to front along the flipped axes
fn copy_flipped<T: Scalar>(
    block: &mut DMatrixViewMut<'_, T>,
    y: &DMatrix<T>,
    flip_rows: bool,
    flip_cols: bool,
) {
    if !flip_rows && !flip_cols {
        block.copy_from(y);
        return;
    }
    let (rows, cols) = y.shape();
    for j in 0..cols {
        let src_c = if flip_cols { cols - 1 - j } else { j };
        for i in 0..rows {
            let src_r = if flip_rows { rows - 1 - i } else { i };
            block[(i, j)] = y[(src_r, src_c)].clone();
        }
    }
}

fn descending(index: &Index) -> bool {
    matches!(index, Index::MinMax { ascending: false, .. })
}

fn reversed<T: Scalar>(ys: &[T]) -> Vec<T> {
    ys.iter().rev().cloned().collect()
}
