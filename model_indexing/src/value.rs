//! Container values
//!
//! [`Value`] is both the destination of an assignment and its right-hand
//! side. Dense storage is delegated to `nalgebra`; this module only adds the
//! tagging needed to dispatch on rank at runtime.

use std::fmt;

use nalgebra::{DMatrix, DVector, RowDVector, Scalar};

/// A model variable: scalar, dense vector or matrix, or nested array of these
#[derive(Debug, Clone, PartialEq)]
pub enum Value<T: Scalar> {
    /// Single element
    Scalar(T),
    /// Column vector
    Vector(DVector<T>),
    /// Row vector
    RowVector(RowDVector<T>),
    /// Dense matrix
    Matrix(DMatrix<T>),
    /// Ordered sequence of values, possibly nested
    Array(Vec<Value<T>>),
}

impl<T: Scalar> Value<T> {
    /// Create a column vector from its elements
    pub fn vector(data: Vec<T>) -> Self {
        Value::Vector(DVector::from_vec(data))
    }

    /// Create a row vector from its elements
    pub fn row_vector(data: Vec<T>) -> Self {
        Value::RowVector(RowDVector::from_vec(data))
    }

    /// Create a matrix from row-major data.
    ///
    /// Panics when `data.len() != rows * cols`.
    pub fn matrix(rows: usize, cols: usize, data: &[T]) -> Self {
        Value::Matrix(DMatrix::from_row_slice(rows, cols, data))
    }

    /// Create an array of values
    pub fn array(items: Vec<Value<T>>) -> Self {
        Value::Array(items)
    }

    /// Kind name used in diagnostics
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Scalar(_) => "real",
            Value::Vector(_) => "vector",
            Value::RowVector(_) => "row_vector",
            Value::Matrix(_) => "matrix",
            Value::Array(_) => "array",
        }
    }

    /// Number of top-level elements (array length, vector length, cell count)
    pub fn len(&self) -> usize {
        match self {
            Value::Scalar(_) => 1,
            Value::Vector(v) => v.len(),
            Value::RowVector(v) => v.len(),
            Value::Matrix(m) => m.len(),
            Value::Array(items) => items.len(),
        }
    }

    /// Check if the value has no elements
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether both values are the same kind of container
    pub fn same_kind(&self, other: &Value<T>) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }

    /// Try to extract as a scalar
    pub fn as_scalar(&self) -> Option<&T> {
        match self {
            Value::Scalar(x) => Some(x),
            _ => None,
        }
    }

    /// Elements of a vector of either orientation
    pub fn as_slice(&self) -> Option<&[T]> {
        match self {
            Value::Vector(v) => Some(v.as_slice()),
            Value::RowVector(v) => Some(v.as_slice()),
            _ => None,
        }
    }

    /// Try to extract as a matrix
    pub fn as_matrix(&self) -> Option<&DMatrix<T>> {
        match self {
            Value::Matrix(m) => Some(m),
            _ => None,
        }
    }

    /// Try to extract as an array
    pub fn as_array(&self) -> Option<&[Value<T>]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }
}

impl<T: Scalar> fmt::Display for Value<T> {
    /// Shape description, e.g. `array[2] of matrix[3,4]`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Scalar(_) => write!(f, "real"),
            Value::Vector(v) => write!(f, "vector[{}]", v.len()),
            Value::RowVector(v) => write!(f, "row_vector[{}]", v.len()),
            Value::Matrix(m) => write!(f, "matrix[{},{}]", m.nrows(), m.ncols()),
            Value::Array(items) => match items.first() {
                Some(first) => write!(f, "array[{}] of {first}", items.len()),
                None => write!(f, "array[0]"),
            },
        }
    }
}

impl<T: Scalar> From<DVector<T>> for Value<T> {
    fn from(v: DVector<T>) -> Self {
        Value::Vector(v)
    }
}

impl<T: Scalar> From<RowDVector<T>> for Value<T> {
    fn from(v: RowDVector<T>) -> Self {
        Value::RowVector(v)
    }
}

impl<T: Scalar> From<DMatrix<T>> for Value<T> {
    fn from(m: DMatrix<T>) -> Self {
        Value::Matrix(m)
    }
}

impl<T: Scalar> From<Vec<Value<T>>> for Value<T> {
    fn from(items: Vec<Value<T>>) -> Self {
        Value::Array(items)
    }
}
