//! Cell-by-cell combination of matrices of the same shape.
//!
//! Every function here checks the shapes of all its inputs before it
//! allocates anything, and fails with [`MatrixError::ShapeMismatch`] if they
//! differ. The loop over cells runs in parallel if the first input is large
//! enough (see [`parallel::is_parallelizable()`]), and the output is the same
//! either way.

use std::borrow::{Borrow};

use super::{Element, Matrix, MatrixError, Result, Shape, parallel, shape};
use super::ops::{Binary};

/// Combines two matrices of the same type.
///
/// ```
/// use gridmat::{IntMatrix, zip};
/// let a = IntMatrix::of([[1, 2], [3, 4]]).unwrap();
/// let b = IntMatrix::of([[5, 6], [7, 8]]).unwrap();
/// let c = zip::zip2(&a, &b, |x, y| x + y).unwrap();
/// assert_eq!(c, IntMatrix::of([[6, 8], [10, 12]]).unwrap());
/// ```
pub fn zip2<T: Element>(
    a: &Matrix<T>,
    b: &Matrix<T>,
    f: impl Fn(T, T) -> T + Sync + Send,
) -> Result<Matrix<T>> {
    zip2_to(a, b, f)
}

/// Combines two matrices into a matrix of a possibly different type.
///
/// ```
/// use gridmat::{BooleanMatrix, IntMatrix, zip};
/// let a = IntMatrix::of([[1, 2], [3, 4]]).unwrap();
/// let b = IntMatrix::of([[1, 0], [3, 0]]).unwrap();
/// let same: BooleanMatrix = zip::zip2_to(&a, &b, |x, y| x == y).unwrap();
/// assert_eq!(same, BooleanMatrix::of([[true, false], [true, false]]).unwrap());
/// ```
pub fn zip2_to<A: Element, B: Element, R: Element>(
    a: &Matrix<A>,
    b: &Matrix<B>,
    f: impl Fn(A, B) -> R + Sync + Send,
) -> Result<Matrix<R>> {
    shape::check_same_shape(a, b)?;
    let (a_items, b_items) = (a.as_ref(), b.as_ref());
    Ok(generate(a, |k| f(a_items[k], b_items[k])))
}

/// Combines three matrices of the same type.
pub fn zip3<T: Element>(
    a: &Matrix<T>,
    b: &Matrix<T>,
    c: &Matrix<T>,
    f: impl Fn(T, T, T) -> T + Sync + Send,
) -> Result<Matrix<T>> {
    zip3_to(a, b, c, f)
}

/// Combines three matrices into a matrix of a possibly different type.
pub fn zip3_to<A: Element, B: Element, C: Element, R: Element>(
    a: &Matrix<A>,
    b: &Matrix<B>,
    c: &Matrix<C>,
    f: impl Fn(A, B, C) -> R + Sync + Send,
) -> Result<Matrix<R>> {
    shape::check_same_shape(a, b)?;
    shape::check_same_shape(a, c)?;
    let (a_items, b_items, c_items) = (a.as_ref(), b.as_ref(), c.as_ref());
    Ok(generate(a, |k| f(a_items[k], b_items[k], c_items[k])))
}

/// Combines any number of matrices of the same type.
///
/// `f` receives, for each cell, the items of every matrix at that cell, in
/// the order the matrices are given. One matrix gives a copy of it.
///
/// - share_buffer - If `true`, and if the loop runs sequentially, a single
/// buffer is reused to pass the items to `f`. In parallel, every cell gets
/// its own buffer regardless.
///
/// Fails with [`MatrixError::InvalidArgument`] if `matrices` is empty.
///
/// ```
/// use gridmat::{IntMatrix, zip};
/// let m = IntMatrix::of([[1, 2], [3, 4]]).unwrap();
/// let total = zip::zip_all(&[&m, &m, &m], |xs| xs.iter().sum(), true).unwrap();
/// assert_eq!(total, IntMatrix::of([[3, 6], [9, 12]]).unwrap());
/// ```
pub fn zip_all<T: Element, M: Borrow<Matrix<T>> + Sync>(
    matrices: &[M],
    f: impl Fn(&[T]) -> T + Sync + Send,
    share_buffer: bool,
) -> Result<Matrix<T>> {
    check_all_same_shape(matrices)?;
    match matrices {
        [a] => Ok(matrix(a).copy()),
        [a, b] => zip2(matrix(a), matrix(b), |x, y| f(&[x, y])),
        _ => zip_all_to(matrices, f, share_buffer),
    }
}

/// Combines any number of matrices into a matrix of a possibly different
/// type. See [`zip_all()`].
pub fn zip_all_to<T: Element, R: Element, M: Borrow<Matrix<T>> + Sync>(
    matrices: &[M],
    f: impl Fn(&[T]) -> R + Sync + Send,
    share_buffer: bool,
) -> Result<Matrix<R>> {
    check_all_same_shape(matrices)?;
    let first = matrix(&matrices[0]);
    let (rows, cols) = first.dims();
    let in_parallel = parallel::is_parallelizable_by(first, matrices.len());
    log::trace!(
        "zip {} matrices of {}x{} parallel={} share_buffer={}",
        matrices.len(), rows, cols, in_parallel, share_buffer,
    );
    let cell = |k: usize, buffer: &mut Vec<T>| {
        buffer.clear();
        buffer.extend(matrices.iter().map(|m| matrix(m).as_ref()[k]));
    };
    if share_buffer && !in_parallel {
        let mut buffer = Vec::with_capacity(matrices.len());
        let items = parallel::generate_sequential(rows, cols, |i, j| {
            cell(i * cols + j, &mut buffer);
            f(&buffer)
        });
        return Ok(Matrix::new_inner(rows, cols, items));
    }
    let items = parallel::generate(rows, cols, |i, j| {
        let mut buffer = Vec::with_capacity(matrices.len());
        cell(i * cols + j, &mut buffer);
        f(&buffer)
    }, in_parallel);
    Ok(Matrix::new_inner(rows, cols, items))
}

/// Folds any number of matrices together, cell by cell, from left to right.
///
/// Fails with [`MatrixError::InvalidArgument`] if `matrices` is empty.
///
/// ```
/// use gridmat::{IntMatrix, zip};
/// let a = IntMatrix::of([[1, 9]]).unwrap();
/// let b = IntMatrix::of([[5, 2]]).unwrap();
/// let c = IntMatrix::of([[3, 4]]).unwrap();
/// assert_eq!(zip::zip_fold(&[a, b, c], i32::max).unwrap(), IntMatrix::of([[5, 9]]).unwrap());
/// ```
pub fn zip_fold<T: Element, M: Borrow<Matrix<T>> + Sync>(
    matrices: &[M],
    f: impl Fn(T, T) -> T + Sync + Send,
) -> Result<Matrix<T>> {
    check_all_same_shape(matrices)?;
    let (first, rest) = (matrix(&matrices[0]), &matrices[1..]);
    let items = first.as_ref();
    Ok(generate(first, |k| {
        rest.iter().fold(items[k], |acc, m| f(acc, matrix(m).as_ref()[k]))
    }))
}

fn check_all_same_shape<T, M: Borrow<Matrix<T>>>(matrices: &[M]) -> Result<()> {
    let Some(first) = matrices.first() else {
        return Err(MatrixError::InvalidArgument("nothing to zip".into()));
    };
    let first = matrix(first);
    match matrices.iter().map(matrix).find(|m| !shape::is_same_shape(first, *m)) {
        None => Ok(()),
        Some(m) => Err(MatrixError::shape_mismatch(first.dims(), m.dims())),
    }
}

fn matrix<T, M: Borrow<Matrix<T>>>(m: &M) -> &Matrix<T> { m.borrow() }

/// Builds a matrix shaped like `like` from `f(k)`, where `k` is the
/// row-major offset of each cell.
fn generate<R: Element>(like: &impl Shape, f: impl Fn(usize) -> R + Sync + Send) -> Matrix<R> {
    let (rows, cols) = like.dims();
    let in_parallel = parallel::is_parallelizable(like);
    Matrix::new_inner(rows, cols, parallel::generate(rows, cols, |i, j| f(i * cols + j), in_parallel))
}

// ----------------------------------------------------------------------------

impl<T: Element> Matrix<T> {
    /// Equivalent to `zip2_to(self, other, f)`.
    pub fn zip_with<U: Element, R: Element>(
        &self,
        other: &Matrix<U>,
        f: impl Fn(T, U) -> R + Sync + Send,
    ) -> Result<Matrix<R>> {
        zip2_to(self, other, f)
    }

    /// Equivalent to `zip3_to(self, b, c, f)`.
    pub fn zip_with3<U: Element, V: Element, R: Element>(
        &self,
        b: &Matrix<U>,
        c: &Matrix<V>,
        f: impl Fn(T, U, V) -> R + Sync + Send,
    ) -> Result<Matrix<R>> {
        zip3_to(self, b, c, f)
    }

    /// Combines `self` with `other` using the [`Binary`] operator `B`.
    pub fn binary<B: Binary<T, U>, U: Element>(&self, other: &Matrix<U>) -> Result<Matrix<B::Output>> where
        B::Output: Element,
    {
        zip2_to(self, other, B::call)
    }
}

// ----------------------------------------------------------------------------
