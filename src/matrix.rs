//! Dense and jagged matrix algebra.
//!
//! All operations borrow their inputs and return freshly allocated outputs;
//! inputs are never mutated. The contraction and transposition operations
//! are data-parallel: work is partitioned by an independent output index,
//! each partition reads only the immutable inputs and writes only its own
//! output row, and rayon joins before the call returns. No locks, no shared
//! mutable state, and the result is independent of execution order.
//!
//! Shape violations are reported as [`ShapeError`] instead of being
//! silently coerced. The one deliberate exception is [`vector_product`],
//! which keeps pairwise-zip semantics and truncates to the shorter input.

use rayon::prelude::*;
use std::iter::Sum;
use std::ops::Mul;
use thiserror::Error;

/// Shape mismatch between operands, or within a single operand.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ShapeError {
    /// A matrix expected to be rectangular has rows of differing length.
    #[error("ragged matrix: expected row length {expected}, found {found}")]
    Ragged { expected: usize, found: usize },

    /// Left operand's column count does not match right operand's row count.
    #[error("inner dimension mismatch: left has {left_cols} columns, right has {right_rows} rows")]
    InnerDim { left_cols: usize, right_rows: usize },

    /// Vectors in a reduction set have differing lengths.
    #[error("vector length mismatch: expected {expected}, found {found}")]
    LengthMismatch { expected: usize, found: usize },
}

/// Row length shared by every row, or the offending row's length.
fn uniform_cols<T>(matrix: &[Vec<T>]) -> Result<usize, ShapeError> {
    let cols = matrix.first().map_or(0, Vec::len);
    match matrix.iter().find(|row| row.len() != cols) {
        Some(row) => Err(ShapeError::Ragged {
            expected: cols,
            found: row.len(),
        }),
        None => Ok(cols),
    }
}

/// Transpose a dense rectangular matrix (R x C -> C x R).
///
/// Output rows are independent of one another, so they are produced with a
/// parallel map over the column index: each worker reads the immutable
/// input and writes exactly one output row.
///
/// An empty input transposes to an empty output; ragged input is rejected.
pub fn transpose<T>(matrix: &[Vec<T>]) -> Result<Vec<Vec<T>>, ShapeError>
where
    T: Clone + Send + Sync,
{
    let cols = uniform_cols(matrix)?;
    Ok((0..cols)
        .into_par_iter()
        .map(|j| matrix.iter().map(|row| row[j].clone()).collect())
        .collect())
}

/// Transpose a jagged matrix.
///
/// The first row establishes the column count (an empty input yields an
/// empty output). Rows shorter than the first simply contribute nothing to
/// the columns they do not reach, so output rows may themselves differ in
/// length.
pub fn transpose_jagged<T: Clone>(matrix: &[Vec<T>]) -> Vec<Vec<T>> {
    let cols = matrix.first().map_or(0, Vec::len);
    (0..cols)
        .map(|j| {
            matrix
                .iter()
                .filter_map(|row| row.get(j).cloned())
                .collect()
        })
        .collect()
}

/// Lazily yield the pairwise products of two vectors.
///
/// These are the dot-product terms, not yet summed; `sum()` the iterator
/// for the scalar product. Inputs of differing length are truncated to the
/// shorter one (zip semantics, kept deliberately rather than treated as a
/// shape error).
pub fn vector_product<'a, T>(v1: &'a [T], v2: &'a [T]) -> impl Iterator<Item = T> + 'a
where
    T: Copy + Mul<Output = T> + 'a,
{
    v1.iter().zip(v2.iter()).map(|(&x, &y)| x * y)
}

/// Multiply two dense matrices sequentially.
///
/// Standard triple-nested contraction:
/// `result[i][j] = sum over k of a[i][k] * b[k][j]`.
///
/// Both operands must be rectangular and `a`'s column count must equal
/// `b`'s row count; a mismatch is a [`ShapeError::InnerDim`], never a
/// silent dimension substitution.
pub fn matrix_product<T>(a: &[Vec<T>], b: &[Vec<T>]) -> Result<Vec<Vec<T>>, ShapeError>
where
    T: Copy + Mul<Output = T> + Sum,
{
    let (inner, cols) = check_product_shapes(a, b)?;
    Ok(a.iter()
        .map(|row| product_row(row, b, inner, cols))
        .collect())
}

/// Multiply two dense matrices with a parallel fan-out over output rows.
///
/// Identical contract and result as [`matrix_product`]; each output row is
/// computed by exactly one worker against the read-only inputs, and the
/// call returns only after every row has been joined.
pub fn par_matrix_product<T>(a: &[Vec<T>], b: &[Vec<T>]) -> Result<Vec<Vec<T>>, ShapeError>
where
    T: Copy + Mul<Output = T> + Sum + Send + Sync,
{
    let (inner, cols) = check_product_shapes(a, b)?;
    Ok(a.par_iter()
        .map(|row| product_row(row, b, inner, cols))
        .collect())
}

fn check_product_shapes<T>(a: &[Vec<T>], b: &[Vec<T>]) -> Result<(usize, usize), ShapeError> {
    let left_cols = uniform_cols(a)?;
    let cols = uniform_cols(b)?;
    if left_cols != b.len() {
        return Err(ShapeError::InnerDim {
            left_cols,
            right_rows: b.len(),
        });
    }
    Ok((left_cols, cols))
}

#[inline]
fn product_row<T>(row: &[T], b: &[Vec<T>], inner: usize, cols: usize) -> Vec<T>
where
    T: Copy + Mul<Output = T> + Sum,
{
    (0..cols)
        .map(|j| (0..inner).map(|k| row[k] * b[k][j]).sum())
        .collect()
}

/// Reduce a set of equal-length vectors to their element-wise extremum.
///
/// With `is_max` true the result keeps the maximum at each position across
/// all vectors, otherwise the minimum. An empty input set yields an empty
/// vector; a length mismatch within the set is a
/// [`ShapeError::LengthMismatch`].
pub fn columnwise_extreme<T>(vectors: &[Vec<T>], is_max: bool) -> Result<Vec<T>, ShapeError>
where
    T: Copy + PartialOrd,
{
    let Some((first, rest)) = vectors.split_first() else {
        return Ok(Vec::new());
    };

    let mut extreme = first.clone();
    for vector in rest {
        if vector.len() != extreme.len() {
            return Err(ShapeError::LengthMismatch {
                expected: extreme.len(),
                found: vector.len(),
            });
        }
        for (kept, &candidate) in extreme.iter_mut().zip(vector) {
            let replace = if is_max {
                candidate > *kept
            } else {
                candidate < *kept
            };
            if replace {
                *kept = candidate;
            }
        }
    }

    Ok(extreme)
}
