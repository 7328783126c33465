use super::{MatrixError, Result};

/// Implemented by types that have a two-dimensional, row-major shape.
///
/// All the checks in this module are written against `Shape` rather than
/// [`Matrix`], so that they can compare matrices of different element types.
///
/// [`Matrix`]: super::Matrix
pub trait Shape {
    /// The number of rows.
    fn rows(&self) -> usize;

    /// The number of columns.
    fn cols(&self) -> usize;

    /// The `(rows, cols)` pair.
    fn dims(&self) -> (usize, usize) { (self.rows(), self.cols()) }

    /// The number of cells, i.e. `rows * cols`, saturating at `usize::MAX`.
    fn count(&self) -> usize { self.rows().saturating_mul(self.cols()) }

    /// Returns `true` if there are no cells, i.e. `rows == 0 || cols == 0`.
    fn is_empty(&self) -> bool { self.rows() == 0 || self.cols() == 0 }

    /// Returns the index into a row-major buffer of cell `(i, j)`.
    ///
    /// The caller is responsible for checking that `(i, j)` is in bounds.
    #[inline(always)]
    fn offset(&self, i: usize, j: usize) -> usize { i * self.cols() + j }
}

impl<S: Shape> Shape for &S {
    #[inline(always)]
    fn rows(&self) -> usize { S::rows(self) }
    #[inline(always)]
    fn cols(&self) -> usize { S::cols(self) }
}

impl Shape for (usize, usize) {
    #[inline(always)]
    fn rows(&self) -> usize { self.0 }
    #[inline(always)]
    fn cols(&self) -> usize { self.1 }
}

// ----------------------------------------------------------------------------

/// Returns `true` if `a` and `b` have the same number of rows and columns.
///
/// ```
/// use gridmat::{IntMatrix, shape};
/// let a = IntMatrix::of([[1, 2], [3, 4]]).unwrap();
/// let b = IntMatrix::of([[1, 2, 3]]).unwrap();
/// assert!(shape::is_same_shape(&a, &a));
/// assert!(!shape::is_same_shape(&a, &b));
/// ```
pub fn is_same_shape(a: &impl Shape, b: &impl Shape) -> bool {
    a.rows() == b.rows() && a.cols() == b.cols()
}

/// Returns `true` if every item of `shapes` has the same shape as the first.
///
/// Vacuously `true` for zero or one items.
pub fn is_all_same_shape<S: Shape>(shapes: impl IntoIterator<Item=S>) -> bool {
    let mut shapes = shapes.into_iter();
    let Some(first) = shapes.next() else { return true };
    shapes.all(|s| is_same_shape(&first, &s))
}

/// Fails with [`MatrixError::ShapeMismatch`] unless `a` and `b` have the same
/// shape.
pub fn check_same_shape(a: &impl Shape, b: &impl Shape) -> Result<()> {
    if is_same_shape(a, b) { return Ok(()); }
    Err(MatrixError::shape_mismatch(a.dims(), b.dims()))
}

/// Fails with [`MatrixError::NotSquare`] if `m` is non-empty and has
/// `rows != cols`.
pub fn check_square(m: &impl Shape) -> Result<()> {
    if m.rows() == m.cols() || m.is_empty() { return Ok(()); }
    Err(MatrixError::NotSquare { rows: m.rows(), cols: m.cols() })
}

/// Fails with [`MatrixError::OutOfBounds`] unless `(i, j)` is a cell of `m`.
pub fn check_cell(m: &impl Shape, i: usize, j: usize) -> Result<()> {
    if i < m.rows() && j < m.cols() { return Ok(()); }
    Err(MatrixError::OutOfBounds(format!(
        "cell ({}, {}) is outside a {}x{} matrix", i, j, m.rows(), m.cols(),
    )))
}

/// Fails with [`MatrixError::OutOfBounds`] unless `i < m.rows()`.
pub fn check_row(m: &impl Shape, i: usize) -> Result<()> {
    if i < m.rows() { return Ok(()); }
    Err(MatrixError::OutOfBounds(format!("row {} of {}", i, m.rows())))
}

/// Fails with [`MatrixError::OutOfBounds`] unless `j < m.cols()`.
pub fn check_column(m: &impl Shape, j: usize) -> Result<()> {
    if j < m.cols() { return Ok(()); }
    Err(MatrixError::OutOfBounds(format!("column {} of {}", j, m.cols())))
}

fn check_range(what: &str, from: usize, to: usize, length: usize) -> Result<()> {
    if from <= to && to <= length { return Ok(()); }
    Err(MatrixError::OutOfBounds(format!(
        "{} range {}..{} for length {}", what, from, to, length,
    )))
}

/// Fails with [`MatrixError::OutOfBounds`] unless
/// `from <= to <= m.rows()`.
pub fn check_row_range(m: &impl Shape, from: usize, to: usize) -> Result<()> {
    check_range("row", from, to, m.rows())
}

/// Fails with [`MatrixError::OutOfBounds`] unless
/// `from <= to <= m.cols()`.
pub fn check_column_range(m: &impl Shape, from: usize, to: usize) -> Result<()> {
    check_range("column", from, to, m.cols())
}

/// Checks both [`check_row_range()`] and [`check_column_range()`].
pub fn check_region(
    m: &impl Shape,
    from_row: usize, to_row: usize,
    from_col: usize, to_col: usize,
) -> Result<()> {
    check_row_range(m, from_row, to_row)?;
    check_column_range(m, from_col, to_col)
}

// ----------------------------------------------------------------------------
