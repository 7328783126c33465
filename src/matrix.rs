use std::fmt::{Debug};
use std::hash::{Hash, Hasher};

use super::{MatrixError, Point, Result, Shape, parallel, shape};

/// Implemented by every type that can be stored in a [`Matrix`].
///
/// `Default::default()` is the "zero" value used to fill new cells, e.g. by
/// [`Matrix::extend()`] and [`Matrix::reshape()`]. `Send + Sync` allows whole
/// matrix loops to run in parallel.
pub trait Element: Copy + Default + PartialEq + Debug + Send + Sync + 'static {}

impl<T> Element for T where T: Copy + Default + PartialEq + Debug + Send + Sync + 'static {}

// ----------------------------------------------------------------------------

/// A dense, rectangular matrix of `T`s.
///
/// The items are stored row-major in a [`Box<[T]>`] of exactly
/// `rows * cols` items. This invariant is established on construction and is
/// never re-checked.
///
/// Methods that take `&mut self` update the matrix in place. Methods that
/// take `&self` and return a `Matrix` always allocate fresh storage.
#[derive(Debug, Clone)]
pub struct Matrix<T> {
    rows: usize,
    cols: usize,
    items: Box<[T]>,
}

impl<T> Matrix<T> {
    pub(crate) fn new_inner(rows: usize, cols: usize, items: Box<[T]>) -> Self {
        debug_assert_eq!(rows.checked_mul(cols), Some(items.len()));
        Self {rows, cols, items}
    }

    /// Constructs a `rows x cols` matrix given its items in row-major order.
    ///
    /// Fails with [`MatrixError::InvalidArgument`] if there are not exactly
    /// `rows * cols` items.
    ///
    /// ```
    /// use gridmat::Matrix;
    /// let m = Matrix::new(2, 3, [1, 2, 3, 4, 5, 6]).unwrap();
    /// assert_eq!(m[(1, 0)], 4);
    /// assert!(Matrix::new(2, 2, [1, 2, 3]).is_err());
    /// ```
    pub fn new(rows: usize, cols: usize, items: impl Into<Box<[T]>>) -> Result<Self> {
        let items = items.into();
        if rows.checked_mul(cols) != Some(items.len()) {
            return Err(MatrixError::InvalidArgument(format!(
                "{} items cannot fill a {}x{} matrix", items.len(), rows, cols,
            )));
        }
        Ok(Self::new_inner(rows, cols, items))
    }

    /// The canonical empty (0x0) matrix. This does not allocate.
    pub fn empty() -> Self { Self::new_inner(0, 0, Vec::new().into()) }

    /// The number of rows.
    #[inline(always)]
    pub fn rows(&self) -> usize { self.rows }

    /// The number of columns.
    #[inline(always)]
    pub fn cols(&self) -> usize { self.cols }

    /// The number of cells.
    #[inline(always)]
    pub fn count(&self) -> usize { self.items.len() }

    /// Returns `true` if `rows == 0 || cols == 0`.
    #[inline(always)]
    pub fn is_empty(&self) -> bool { self.rows == 0 || self.cols == 0 }

    /// Returns the items in row-major order.
    pub fn to_raw(self) -> Box<[T]> { self.items }

    /// Passes `self` to `f`.
    pub fn accept(&self, f: impl FnOnce(&Self)) { f(self) }

    /// Passes `self` to `f` and returns the result.
    pub fn apply<R>(&self, f: impl FnOnce(&Self) -> R) -> R { f(self) }
}

impl<T> Shape for Matrix<T> {
    #[inline(always)]
    fn rows(&self) -> usize { self.rows }
    #[inline(always)]
    fn cols(&self) -> usize { self.cols }
}

impl<T> Default for Matrix<T> {
    fn default() -> Self { Self::empty() }
}

impl<T> AsRef<[T]> for Matrix<T> {
    fn as_ref(&self) -> &[T] { &self.items }
}

impl<T> AsMut<[T]> for Matrix<T> {
    fn as_mut(&mut self) -> &mut [T] { &mut self.items }
}

impl<T> std::ops::Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    /// Panics if `(i, j)` is out of bounds. Consider [`Matrix::get()`].
    #[inline(always)]
    fn index(&self, (i, j): (usize, usize)) -> &T {
        assert!(i < self.rows && j < self.cols, "Index {:?} is out of bounds for size {:?}", (i, j), (self.rows, self.cols));
        &self.items[self.offset(i, j)]
    }
}

impl<T> std::ops::IndexMut<(usize, usize)> for Matrix<T> {
    #[inline(always)]
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut T {
        assert!(i < self.rows && j < self.cols, "Index {:?} is out of bounds for size {:?}", (i, j), (self.rows, self.cols));
        let offset = self.offset(i, j);
        &mut self.items[offset]
    }
}

impl<T> std::ops::Index<Point> for Matrix<T> {
    type Output = T;
    #[inline(always)]
    fn index(&self, p: Point) -> &T { &self[(p.row, p.col)] }
}

impl<T> std::ops::IndexMut<Point> for Matrix<T> {
    #[inline(always)]
    fn index_mut(&mut self, p: Point) -> &mut T { &mut self[(p.row, p.col)] }
}

impl<T: PartialEq> PartialEq for Matrix<T> {
    fn eq(&self, other: &Self) -> bool {
        self.rows == other.rows && self.cols == other.cols && self.items == other.items
    }
}

impl<T: Eq> Eq for Matrix<T> {}

impl<T: Hash> Hash for Matrix<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.rows.hash(state);
        self.cols.hash(state);
        self.items.hash(state);
    }
}

// ----------------------------------------------------------------------------

impl<T: Element> Matrix<T> {
    /// Constructs a matrix from its rows.
    ///
    /// Fails with [`MatrixError::IrregularShape`] if the rows have different
    /// lengths. No rows gives the empty matrix.
    ///
    /// ```
    /// use gridmat::{IntMatrix, MatrixError};
    /// let m = IntMatrix::of([[1, 2, 3], [4, 5, 6]]).unwrap();
    /// assert_eq!((m.rows(), m.cols()), (2, 3));
    /// assert_eq!(
    ///     IntMatrix::of(vec![vec![1, 2], vec![3]]),
    ///     Err(MatrixError::IrregularShape { row: 1, expected: 2, found: 1 }),
    /// );
    /// ```
    pub fn of<R: IntoIterator<Item=T>>(rows: impl IntoIterator<Item=R>) -> Result<Self> {
        let mut items = Vec::new();
        let mut num_rows = 0;
        let mut num_cols = 0;
        for (i, row) in rows.into_iter().enumerate() {
            let before = items.len();
            items.extend(row);
            let found = items.len() - before;
            if i == 0 {
                num_cols = found;
            } else if found != num_cols {
                return Err(MatrixError::IrregularShape {row: i, expected: num_cols, found});
            }
            num_rows += 1;
        }
        Ok(Self::new_inner(num_rows, num_cols, items.into()))
    }

    /// Returns the item at `(i, j)`, or [`MatrixError::OutOfBounds`].
    pub fn get(&self, i: usize, j: usize) -> Result<T> {
        shape::check_cell(&*self, i, j)?;
        Ok(self.items[self.offset(i, j)])
    }

    /// Equivalent to `self.get(p.row, p.col)`.
    pub fn get_point(&self, p: Point) -> Result<T> { self.get(p.row, p.col) }

    /// Overwrites the item at `(i, j)`, or fails with
    /// [`MatrixError::OutOfBounds`].
    pub fn set(&mut self, i: usize, j: usize, value: T) -> Result<()> {
        shape::check_cell(&*self, i, j)?;
        let offset = self.offset(i, j);
        self.items[offset] = value;
        Ok(())
    }

    /// Equivalent to `self.set(p.row, p.col, value)`.
    pub fn set_point(&mut self, p: Point, value: T) -> Result<()> { self.set(p.row, p.col, value) }

    /// Borrows row `i`. This does not copy.
    pub fn row(&self, i: usize) -> Result<&[T]> {
        shape::check_row(&*self, i)?;
        Ok(&self.items[i * self.cols..(i + 1) * self.cols])
    }

    /// Mutably borrows row `i`.
    pub fn row_mut(&mut self, i: usize) -> Result<&mut [T]> {
        shape::check_row(&*self, i)?;
        let cols = self.cols;
        Ok(&mut self.items[i * cols..(i + 1) * cols])
    }

    /// Copies column `j`, which is not contiguous in memory.
    pub fn column(&self, j: usize) -> Result<Vec<T>> {
        shape::check_column(&*self, j)?;
        Ok((0..self.rows).map(|i| self.items[self.offset(i, j)]).collect())
    }

    /// Overwrites row `i`. `row` must have exactly `cols` items.
    pub fn set_row(&mut self, i: usize, row: &[T]) -> Result<()> {
        shape::check_row(&*self, i)?;
        check_length("row", row.len(), self.cols)?;
        self.row_mut(i)?.copy_from_slice(row);
        Ok(())
    }

    /// Overwrites column `j`. `column` must have exactly `rows` items.
    pub fn set_column(&mut self, j: usize, column: &[T]) -> Result<()> {
        shape::check_column(&*self, j)?;
        check_length("column", column.len(), self.rows)?;
        for (i, &x) in column.iter().enumerate() {
            let offset = self.offset(i, j);
            self.items[offset] = x;
        }
        Ok(())
    }

    /// Replaces every item `x` of row `i` with `f(x)`.
    pub fn update_row(&mut self, i: usize, mut f: impl FnMut(T) -> T) -> Result<()> {
        for x in self.row_mut(i)? { *x = f(*x); }
        Ok(())
    }

    /// Replaces every item `x` of column `j` with `f(x)`.
    pub fn update_column(&mut self, j: usize, mut f: impl FnMut(T) -> T) -> Result<()> {
        shape::check_column(&*self, j)?;
        for i in 0..self.rows {
            let offset = self.offset(i, j);
            self.items[offset] = f(self.items[offset]);
        }
        Ok(())
    }

    /// Replaces every item `x` with `f(x)`, in parallel if the matrix is
    /// large enough.
    ///
    /// ```
    /// use gridmat::IntMatrix;
    /// let mut m = IntMatrix::of([[1, 2], [3, 4]]).unwrap();
    /// m.update_all(|x| x * 10);
    /// assert_eq!(m, IntMatrix::of([[10, 20], [30, 40]]).unwrap());
    /// ```
    pub fn update_all(&mut self, f: impl Fn(T) -> T + Sync + Send) {
        let in_parallel = parallel::is_parallelizable(&*self);
        parallel::update(&mut self.items, self.rows, self.cols, |_, _, x| f(x), in_parallel);
    }

    /// Replaces the item at every `(i, j)` with `f(i, j)`.
    pub fn update_all_indexed(&mut self, f: impl Fn(usize, usize) -> T + Sync + Send) {
        let in_parallel = parallel::is_parallelizable(&*self);
        parallel::update(&mut self.items, self.rows, self.cols, |i, j, _| f(i, j), in_parallel);
    }

    /// Replaces every item `x` for which `predicate(x)` holds with `new_value`.
    pub fn replace_if(&mut self, predicate: impl Fn(T) -> bool + Sync + Send, new_value: T) {
        self.update_all(|x| if predicate(x) { new_value } else { x });
    }

    /// Replaces the item at every `(i, j)` for which `predicate(i, j)` holds
    /// with `new_value`.
    pub fn replace_if_indexed(
        &mut self,
        predicate: impl Fn(usize, usize) -> bool + Sync + Send,
        new_value: T,
    ) {
        let in_parallel = parallel::is_parallelizable(&*self);
        parallel::update(
            &mut self.items, self.rows, self.cols,
            |i, j, x| if predicate(i, j) { new_value } else { x },
            in_parallel,
        );
    }

    /// Returns a new matrix with items `f(x)`.
    pub fn map(&self, f: impl Fn(T) -> T + Sync + Send) -> Self { self.map_to(f) }

    /// Returns a new matrix, of a possibly different element type, with items
    /// `f(x)`.
    ///
    /// ```
    /// use gridmat::{IntMatrix, BooleanMatrix};
    /// let m = IntMatrix::of([[1, 2], [3, 4]]).unwrap();
    /// let even: BooleanMatrix = m.map_to(|x| x % 2 == 0);
    /// assert_eq!(even, BooleanMatrix::of([[false, true], [false, true]]).unwrap());
    /// ```
    pub fn map_to<R: Element>(&self, f: impl Fn(T) -> R + Sync + Send) -> Matrix<R> {
        let (rows, cols) = (self.rows, self.cols);
        let items = parallel::generate(
            rows, cols,
            |i, j| f(self.items[i * cols + j]),
            parallel::is_parallelizable(self),
        );
        Matrix::new_inner(rows, cols, items)
    }

    /// Overwrites every item with `value`.
    pub fn fill(&mut self, value: T) { self.items.fill(value); }

    /// Equivalent to `self.fill_at(0, 0, patch)`.
    pub fn fill_from<R: AsRef<[T]>>(&mut self, patch: &[R]) { self.fill_at(0, 0, patch); }

    /// Copies `patch` into the matrix with its top-left corner at
    /// `(from_row, from_col)`.
    ///
    /// Cells of `patch` that fall outside the matrix are ignored. The rows of
    /// `patch` need not have the same length.
    ///
    /// ```
    /// use gridmat::IntMatrix;
    /// let mut m = IntMatrix::zeros(3, 3);
    /// m.fill_at(1, 1, &[[1, 2, 3], [4, 5, 6]]);
    /// assert_eq!(m, IntMatrix::of([[0, 0, 0], [0, 1, 2], [0, 4, 5]]).unwrap());
    /// ```
    pub fn fill_at<R: AsRef<[T]>>(&mut self, from_row: usize, from_col: usize, patch: &[R]) {
        if from_row >= self.rows || from_col >= self.cols { return; }
        let cols = self.cols;
        for (i, source) in (from_row..self.rows).zip(patch) {
            let source = source.as_ref();
            let n = source.len().min(cols - from_col);
            let start = i * cols + from_col;
            self.items[start..start + n].copy_from_slice(&source[..n]);
        }
    }

    /// Calls `f` on every item, in row-major order.
    pub fn for_each(&self, f: impl FnMut(T)) { self.items.iter().copied().for_each(f); }

    /// Calls `f` on every item of a region, in row-major order.
    pub fn for_each_in(
        &self,
        from_row: usize, to_row: usize,
        from_col: usize, to_col: usize,
        mut f: impl FnMut(T),
    ) -> Result<()> {
        shape::check_region(self, from_row, to_row, from_col, to_col)?;
        for i in from_row..to_row {
            self.items[self.offset(i, from_col)..self.offset(i, to_col)].iter().copied().for_each(&mut f);
        }
        Ok(())
    }

    /// Calls `f` once on each row, in place, e.g. to sort every row.
    ///
    /// ```
    /// use gridmat::IntMatrix;
    /// let mut m = IntMatrix::of([[3, 1, 2], [9, 8, 7]]).unwrap();
    /// m.flat_op(|row| row.sort());
    /// assert_eq!(m, IntMatrix::of([[1, 2, 3], [7, 8, 9]]).unwrap());
    /// ```
    pub fn flat_op(&mut self, mut f: impl FnMut(&mut [T])) {
        if self.cols == 0 { return; }
        self.items.chunks_mut(self.cols).for_each(&mut f);
    }

    /// Calls `f` once on all the items, in row-major order, in place.
    pub fn flat_op_all<R>(&mut self, f: impl FnOnce(&mut [T]) -> R) -> R { f(&mut self.items) }

    /// Converts every item `x` to `Some(x)`.
    pub fn boxed(&self) -> Matrix<Option<T>> { self.map_to(Some) }

    // ------------------------------------------------------------------------

    fn neighbour(&self, i: usize, j: usize, di: isize, dj: isize) -> Result<Option<Point>> {
        shape::check_cell(self, i, j)?;
        let i = i.checked_add_signed(di).filter(|&i| i < self.rows);
        let j = j.checked_add_signed(dj).filter(|&j| j < self.cols);
        Ok(i.zip(j).map(|(i, j)| Point::of(i, j)))
    }

    fn neighbour_value(&self, i: usize, j: usize, di: isize, dj: isize) -> Result<Option<T>> {
        Ok(self.neighbour(i, j, di, dj)?.map(|p| self[p]))
    }

    /// The item above `(i, j)`, if any.
    pub fn up_of(&self, i: usize, j: usize) -> Result<Option<T>> { self.neighbour_value(i, j, -1, 0) }

    /// The item below `(i, j)`, if any.
    pub fn down_of(&self, i: usize, j: usize) -> Result<Option<T>> { self.neighbour_value(i, j, 1, 0) }

    /// The item to the left of `(i, j)`, if any.
    pub fn left_of(&self, i: usize, j: usize) -> Result<Option<T>> { self.neighbour_value(i, j, 0, -1) }

    /// The item to the right of `(i, j)`, if any.
    pub fn right_of(&self, i: usize, j: usize) -> Result<Option<T>> { self.neighbour_value(i, j, 0, 1) }

    /// The cells above, right of, below and left of `(i, j)`, in that order.
    /// Cells outside the matrix are `None`.
    pub fn adjacent4_points(&self, i: usize, j: usize) -> Result<[Option<Point>; 4]> {
        Ok([
            self.neighbour(i, j, -1, 0)?,
            self.neighbour(i, j, 0, 1)?,
            self.neighbour(i, j, 1, 0)?,
            self.neighbour(i, j, 0, -1)?,
        ])
    }

    /// The eight cells surrounding `(i, j)`, clockwise from the top-left.
    /// Cells outside the matrix are `None`.
    ///
    /// ```
    /// use gridmat::{BooleanMatrix, Point};
    /// let m = BooleanMatrix::zeros(2, 2);
    /// let around: Vec<Point> = m.adjacent8_points(0, 0).unwrap().into_iter().flatten().collect();
    /// assert_eq!(around, [Point::of(0, 1), Point::of(1, 1), Point::of(1, 0)]);
    /// ```
    pub fn adjacent8_points(&self, i: usize, j: usize) -> Result<[Option<Point>; 8]> {
        Ok([
            self.neighbour(i, j, -1, -1)?,
            self.neighbour(i, j, -1, 0)?,
            self.neighbour(i, j, -1, 1)?,
            self.neighbour(i, j, 0, 1)?,
            self.neighbour(i, j, 1, 1)?,
            self.neighbour(i, j, 1, 0)?,
            self.neighbour(i, j, 1, -1)?,
            self.neighbour(i, j, 0, -1)?,
        ])
    }
}

impl<T: Element> Matrix<Option<T>> {
    /// Replaces every `None` with `default` and unwraps every `Some`.
    pub fn unbox_or(&self, default: T) -> Matrix<T> { self.map_to(|x| x.unwrap_or(default)) }
}

pub(crate) fn check_length(what: &str, found: usize, expected: usize) -> Result<()> {
    if found == expected { return Ok(()); }
    Err(MatrixError::InvalidArgument(format!(
        "{} has {} items, expected {}", what, found, expected,
    )))
}

/// Returns `rows * cols`, or fails with [`MatrixError::CapacityExceeded`] if
/// that many `T`s could not be allocated.
pub(crate) fn check_count<T>(rows: usize, cols: usize) -> Result<usize> {
    let limit = isize::MAX as usize / std::mem::size_of::<T>().max(1);
    match rows.checked_mul(cols) {
        Some(count) if count <= limit => Ok(count),
        _ => Err(MatrixError::CapacityExceeded("too many elements".into())),
    }
}

// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use std::collections::{HashSet};

    use super::*;
    use crate::{IntMatrix, BooleanMatrix, DoubleMatrix};
    use crate::parallel::{ParallelEnabled, with_parallel_enabled};

    fn m3() -> IntMatrix { IntMatrix::of([[1, 2, 3], [4, 5, 6], [7, 8, 9]]).unwrap() }

    #[test]
    fn construction() {
        let m = IntMatrix::of(Vec::<Vec<i32>>::new()).unwrap();
        assert!(m.is_empty());
        assert_eq!(m, IntMatrix::empty());
        assert_eq!(m, IntMatrix::default());
        assert_eq!(m.count(), 0);
        let m = m3();
        assert_eq!((m.rows(), m.cols(), m.count()), (3, 3, 9));
        assert_eq!(m.as_ref(), [1, 2, 3, 4, 5, 6, 7, 8, 9]);
        assert!(matches!(
            IntMatrix::of([vec![1, 2, 3], vec![4, 5, 6], vec![7]]),
            Err(MatrixError::IrregularShape { row: 2, expected: 3, found: 1 }),
        ));
        assert!(matches!(IntMatrix::new(3, 3, vec![0; 8]), Err(MatrixError::InvalidArgument(_))));
        assert_eq!(*IntMatrix::new(2, 2, vec![1, 2, 3, 4]).unwrap().to_raw(), [1, 2, 3, 4]);
    }

    #[test]
    fn get_set() {
        let mut m = m3();
        assert_eq!(m.get(1, 2), Ok(6));
        assert_eq!(m.get_point(Point::of(2, 0)), Ok(7));
        assert!(matches!(m.get(3, 0), Err(MatrixError::OutOfBounds(_))));
        m.set(0, 0, 10).unwrap();
        m.set_point(Point::of(2, 2), 90).unwrap();
        assert_eq!(m[(0, 0)], 10);
        assert_eq!(m[Point::of(2, 2)], 90);
        assert!(m.set(0, 3, 1).is_err());
        m[(1, 1)] = 50;
        assert_eq!(m.get(1, 1), Ok(50));
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn index_panics() {
        let _ = m3()[(0, 3)];
    }

    #[test]
    fn rows_and_columns() {
        let mut m = m3();
        assert_eq!(m.row(1).unwrap(), [4, 5, 6]);
        assert_eq!(m.column(2).unwrap(), [3, 6, 9]);
        assert!(m.row(3).is_err());
        assert!(m.column(3).is_err());

        m.set_row(0, &[10, 20, 30]).unwrap();
        m.set_column(2, &[-1, -2, -3]).unwrap();
        assert_eq!(m, IntMatrix::of([[10, 20, -1], [4, 5, -2], [7, 8, -3]]).unwrap());
        assert!(matches!(m.set_row(0, &[1, 2]), Err(MatrixError::InvalidArgument(_))));
        assert!(matches!(m.set_column(0, &[1, 2, 3, 4]), Err(MatrixError::InvalidArgument(_))));
        assert_eq!(m.row(0).unwrap(), [10, 20, -1]);

        m.update_row(1, |x| x * 2).unwrap();
        m.update_column(0, |x| x + 1).unwrap();
        assert_eq!(m, IntMatrix::of([[11, 20, -1], [9, 10, -4], [8, 8, -3]]).unwrap());
        assert!(m.update_row(5, |x| x).is_err());
        assert!(m.update_column(5, |x| x).is_err());
    }

    #[test]
    fn failed_writes_change_nothing() {
        let mut m = m3();
        assert!(matches!(m.set_column(1, &[0, 0]), Err(MatrixError::InvalidArgument(_))));
        assert!(matches!(m.set_column(3, &[0, 0, 0]), Err(MatrixError::OutOfBounds(_))));
        assert!(matches!(m.set_row(3, &[0, 0, 0]), Err(MatrixError::OutOfBounds(_))));
        assert!(m.set(0, 3, 0).is_err());
        assert_eq!(m, m3());
    }

    #[test]
    fn whole_matrix_updates() {
        for mode in [ParallelEnabled::Yes, ParallelEnabled::No, ParallelEnabled::Default] {
            with_parallel_enabled(mode, || {
                let mut m = m3();
                m.update_all(|x| x * x);
                assert_eq!(m, IntMatrix::of([[1, 4, 9], [16, 25, 36], [49, 64, 81]]).unwrap());
                m.update_all_indexed(|i, j| (10 * i + j) as i32);
                assert_eq!(m, IntMatrix::of([[0, 1, 2], [10, 11, 12], [20, 21, 22]]).unwrap());
                m.replace_if(|x| x > 10, -1);
                assert_eq!(m, IntMatrix::of([[0, 1, 2], [10, -1, -1], [-1, -1, -1]]).unwrap());
                m.replace_if_indexed(|i, j| i == j, 7);
                assert_eq!(m, IntMatrix::of([[7, 1, 2], [10, 7, -1], [-1, -1, 7]]).unwrap());
            });
        }
    }

    #[test]
    fn map_is_pure() {
        let m = m3();
        let doubled = m.map(|x| x * 2);
        assert_eq!(doubled.as_ref(), [2, 4, 6, 8, 10, 12, 14, 16, 18]);
        assert_eq!(m, m3());
        let halves: DoubleMatrix = m.map_to(|x| f64::from(x) / 2.0);
        assert_eq!(halves.get(0, 0), Ok(0.5));
        let empty: BooleanMatrix = IntMatrix::empty().map_to(|x| x > 0);
        assert!(empty.is_empty());
    }

    #[test]
    fn fills() {
        let mut m = IntMatrix::zeros(3, 3);
        m.fill(4);
        assert!(m.as_ref().iter().all(|&x| x == 4));
        m.fill(0);
        m.fill_from(&[[1, 2], [3, 4]]);
        assert_eq!(m, IntMatrix::of([[1, 2, 0], [3, 4, 0], [0, 0, 0]]).unwrap());
        m.fill_at(3, 0, &[[9, 9]]);
        m.fill_at(0, 3, &[[9, 9]]);
        assert_eq!(m, IntMatrix::of([[1, 2, 0], [3, 4, 0], [0, 0, 0]]).unwrap());
        m.fill_at(2, 2, &[vec![5, 6], vec![7]]);
        assert_eq!(m.get(2, 2), Ok(5));
    }

    #[test]
    fn visiting() {
        let m = m3();
        let mut all = Vec::new();
        m.for_each(|x| all.push(x));
        assert_eq!(all, [1, 2, 3, 4, 5, 6, 7, 8, 9]);
        let mut region = Vec::new();
        m.for_each_in(1, 3, 1, 3, |x| region.push(x)).unwrap();
        assert_eq!(region, [5, 6, 8, 9]);
        assert!(m.for_each_in(0, 4, 0, 1, |_| {}).is_err());
        assert!(m.for_each_in(2, 1, 0, 1, |_| {}).is_err());

        let mut seen = Vec::new();
        m.accept(|m| { seen.push(m.get(0, 0).unwrap()); seen.push(m.get(2, 2).unwrap()); });
        assert_eq!(seen, [1, 9]);
        assert_eq!(m.apply(|m| format!("{}x{}", m.rows(), m.cols())), "3x3");
    }

    #[test]
    fn flat_ops() {
        let mut m = IntMatrix::of([[3, 2, 1], [6, 5, 4]]).unwrap();
        let mut calls = 0;
        m.flat_op(|row| { calls += 1; row.reverse(); });
        assert_eq!(calls, 2);
        assert_eq!(m, IntMatrix::of([[1, 2, 3], [4, 5, 6]]).unwrap());
        let total = m.flat_op_all(|all| { all.reverse(); all.iter().sum::<i32>() });
        assert_eq!(total, 21);
        assert_eq!(m, IntMatrix::of([[6, 5, 4], [3, 2, 1]]).unwrap());
        IntMatrix::empty().flat_op(|_| panic!("no rows"));
    }

    #[test]
    fn boxing() {
        let m = IntMatrix::of([[1, 2], [3, 4]]).unwrap();
        let boxed = m.boxed();
        assert_eq!(boxed.get(1, 1), Ok(Some(4)));
        let mut holes = boxed.clone();
        holes.set(0, 1, None).unwrap();
        assert_eq!(holes.unbox_or(0), IntMatrix::of([[1, 0], [3, 4]]).unwrap());
        assert_eq!(boxed.unbox_or(0), m);
    }

    #[test]
    fn neighbours() {
        let m = m3();
        assert_eq!(m.up_of(0, 1), Ok(None));
        assert_eq!(m.up_of(1, 1), Ok(Some(2)));
        assert_eq!(m.down_of(1, 1), Ok(Some(8)));
        assert_eq!(m.down_of(2, 1), Ok(None));
        assert_eq!(m.left_of(1, 0), Ok(None));
        assert_eq!(m.left_of(1, 1), Ok(Some(4)));
        assert_eq!(m.right_of(1, 1), Ok(Some(6)));
        assert_eq!(m.right_of(1, 2), Ok(None));
        assert!(m.up_of(3, 0).is_err());

        let p = Point::of;
        assert_eq!(m.adjacent4_points(1, 1), Ok([Some(p(0, 1)), Some(p(1, 2)), Some(p(2, 1)), Some(p(1, 0))]));
        assert_eq!(m.adjacent4_points(0, 0), Ok([None, Some(p(0, 1)), Some(p(1, 0)), None]));
        let around = m.adjacent8_points(1, 1).unwrap();
        assert_eq!(around, [
            Some(p(0, 0)), Some(p(0, 1)), Some(p(0, 2)), Some(p(1, 2)),
            Some(p(2, 2)), Some(p(2, 1)), Some(p(2, 0)), Some(p(1, 0)),
        ]);
        let corner = m.adjacent8_points(2, 2).unwrap();
        assert_eq!(corner.iter().flatten().count(), 3);
        assert!(m.adjacent8_points(0, 3).is_err());
    }

    #[test]
    fn equality_and_hash() {
        let a = IntMatrix::of([[1, 2], [3, 4]]).unwrap();
        let b = IntMatrix::of([[1, 2], [3, 4]]).unwrap();
        let c = IntMatrix::of([[1, 2], [4, 3]]).unwrap();
        let d = IntMatrix::of([[1, 2, 3, 4]]).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, d);
        let set: HashSet<IntMatrix> = [a, b, c, d].into_iter().collect();
        assert_eq!(set.len(), 3);
    }
}
