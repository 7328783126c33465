//! Lazy iterators over the items and coordinates of a [`Matrix`].
//!
//! Every iterator here borrows the matrix, allocates nothing, and knows its
//! exact length. All of them can be consumed from either end, and skipping
//! with [`Iterator::nth()`] costs the same however far it skips.
//!
//! Suffixes follow the direction of travel:
//! - `h` walks horizontally, i.e. row by row.
//! - `v` walks vertically, i.e. column by column.
//! - `r` yields whole rows, and `c` whole columns.
//! - `lu2rd` walks the main diagonal and `ru2ld` the anti-diagonal.
//!
//! ```
//! use gridmat::IntMatrix;
//! let m = IntMatrix::of([[1, 2, 3], [4, 5, 6]]).unwrap();
//! assert_eq!(m.stream_h().collect::<Vec<_>>(), [1, 2, 3, 4, 5, 6]);
//! assert_eq!(m.stream_v().collect::<Vec<_>>(), [1, 4, 2, 5, 3, 6]);
//! assert_eq!(m.stream_r().map(|row| row.iter().sum::<i32>()).collect::<Vec<_>>(), [6, 15]);
//! assert_eq!(m.stream_c().map(|col| col.max().unwrap()).collect::<Vec<_>>(), [4, 5, 6]);
//! ```

use std::iter::{FusedIterator};

use super::{Element, Matrix, Point, Result, shape};

/// Walks `outer_len` lines of `inner_len` offsets each. Offset number `n`
/// is `base + (n / inner_len) * outer_stride + (n % inner_len) * inner_stride`.
#[derive(Debug, Clone)]
struct Walk {
    base: usize,
    outer_stride: usize,
    inner_len: usize,
    inner_stride: usize,
    front: usize,
    back: usize,
}

impl Walk {
    fn grid(base: usize, outer_len: usize, outer_stride: usize, inner_len: usize, inner_stride: usize) -> Self {
        let back = outer_len * inner_len;
        Self {base, outer_stride, inner_len: inner_len.max(1), inner_stride, front: 0, back}
    }

    /// Row-major offsets of a region of a matrix with `cols` columns.
    fn rows_of(cols: usize, from_row: usize, to_row: usize, from_col: usize, to_col: usize) -> Self {
        Self::grid(from_row * cols + from_col, to_row - from_row, cols, to_col - from_col, 1)
    }

    /// Column-major offsets of a region of a matrix with `cols` columns.
    fn columns_of(cols: usize, from_row: usize, to_row: usize, from_col: usize, to_col: usize) -> Self {
        Self::grid(from_row * cols + from_col, to_col - from_col, 1, to_row - from_row, cols)
    }

    /// `len` offsets `stride` apart.
    fn line(base: usize, len: usize, stride: usize) -> Self { Self::grid(base, len, stride, 1, 0) }

    #[inline(always)]
    fn offset(&self, n: usize) -> usize {
        self.base + (n / self.inner_len) * self.outer_stride + (n % self.inner_len) * self.inner_stride
    }

    fn len(&self) -> usize { self.back - self.front }

    fn next(&mut self) -> Option<usize> {
        if self.front == self.back { return None; }
        self.front += 1;
        Some(self.offset(self.front - 1))
    }

    fn next_back(&mut self) -> Option<usize> {
        if self.front == self.back { return None; }
        self.back -= 1;
        Some(self.offset(self.back))
    }

    fn nth(&mut self, n: usize) -> Option<usize> {
        self.front = self.front.saturating_add(n).min(self.back);
        self.next()
    }

    fn nth_back(&mut self, n: usize) -> Option<usize> {
        self.back = self.back.saturating_sub(n).max(self.front);
        self.next_back()
    }
}

/// Implements the iterator traits for a type with a `walk: Walk` field, by
/// projecting each offset to an item.
macro_rules! walk_iterator {
    ($name:ident<$($a:lifetime, $t:ident)?> => $item:ty, |$s:ident, $o:ident| $project:expr) => {
        impl<$($a, $t: Element)?> Iterator for $name<$($a, $t)?> {
            type Item = $item;

            fn next(&mut self) -> Option<$item> {
                let $o = self.walk.next()?;
                let $s = &*self;
                Some($project)
            }

            fn size_hint(&self) -> (usize, Option<usize>) { (self.walk.len(), Some(self.walk.len())) }

            fn count(self) -> usize { self.walk.len() }

            fn nth(&mut self, n: usize) -> Option<$item> {
                let $o = self.walk.nth(n)?;
                let $s = &*self;
                Some($project)
            }

            fn last(mut self) -> Option<$item> { self.next_back() }
        }

        impl<$($a, $t: Element)?> DoubleEndedIterator for $name<$($a, $t)?> {
            fn next_back(&mut self) -> Option<$item> {
                let $o = self.walk.next_back()?;
                let $s = &*self;
                Some($project)
            }

            fn nth_back(&mut self, n: usize) -> Option<$item> {
                let $o = self.walk.nth_back(n)?;
                let $s = &*self;
                Some($project)
            }
        }

        impl<$($a, $t: Element)?> ExactSizeIterator for $name<$($a, $t)?> {}

        impl<$($a, $t: Element)?> FusedIterator for $name<$($a, $t)?> {}
    };
}

// ----------------------------------------------------------------------------

/// Items of a [`Matrix`], in some order.
#[derive(Debug, Clone)]
pub struct Cells<'a, T> {
    items: &'a [T],
    walk: Walk,
}

walk_iterator!(Cells<'a, T> => T, |s, o| s.items[o]);

/// Coordinates of the cells of a [`Matrix`], in some order.
#[derive(Debug, Clone)]
pub struct Points {
    cols: usize,
    walk: Walk,
}

walk_iterator!(Points<> => Point, |s, o| Point::of(o / s.cols, o % s.cols));

/// Rows of a [`Matrix`], as slices.
#[derive(Debug, Clone)]
pub struct Rows<'a, T> {
    items: &'a [T],
    cols: usize,
    walk: Walk,
}

walk_iterator!(Rows<'a, T> => &'a [T], |s, o| { let items = s.items; &items[o..o + s.cols] });

/// Columns of a [`Matrix`], each as a [`Cells`].
#[derive(Debug, Clone)]
pub struct Columns<'a, T> {
    items: &'a [T],
    rows: usize,
    cols: usize,
    walk: Walk,
}

walk_iterator!(Columns<'a, T> => Cells<'a, T>, |s, o| Cells {items: s.items, walk: Walk::line(o, s.rows, s.cols)});

/// Rows or columns of a [`Matrix`], each as a [`Points`].
#[derive(Debug, Clone)]
pub struct PointLines {
    cols: usize,
    len: usize,
    stride: usize,
    walk: Walk,
}

walk_iterator!(PointLines<> => Points, |s, o| Points {cols: s.cols, walk: Walk::line(o, s.len, s.stride)});

// ----------------------------------------------------------------------------

impl<T: Element> Matrix<T> {
    fn cells(&self, walk: Walk) -> Cells<'_, T> { Cells {items: self.as_ref(), walk} }

    fn points(&self, walk: Walk) -> Points { Points {cols: self.cols(), walk} }

    fn diagonal_walk(&self, anti: bool) -> Result<Walk> {
        shape::check_square(self)?;
        let (n, cols) = (self.rows().min(self.cols()), self.cols());
        Ok(if anti { Walk::line(n.saturating_sub(1), n, cols.saturating_sub(1)) } else { Walk::line(0, n, cols + 1) })
    }

    /// All items, row by row.
    pub fn stream_h(&self) -> Cells<'_, T> { self.cells(Walk::rows_of(self.cols(), 0, self.rows(), 0, self.cols())) }

    /// The items of row `i`.
    pub fn stream_h_row(&self, i: usize) -> Result<Cells<'_, T>> {
        shape::check_row(self, i)?;
        Ok(self.cells(Walk::rows_of(self.cols(), i, i + 1, 0, self.cols())))
    }

    /// The items of rows `from_row..to_row`, row by row.
    pub fn stream_h_range(&self, from_row: usize, to_row: usize) -> Result<Cells<'_, T>> {
        shape::check_row_range(self, from_row, to_row)?;
        Ok(self.cells(Walk::rows_of(self.cols(), from_row, to_row, 0, self.cols())))
    }

    /// All items, column by column.
    pub fn stream_v(&self) -> Cells<'_, T> { self.cells(Walk::columns_of(self.cols(), 0, self.rows(), 0, self.cols())) }

    /// The items of column `j`.
    pub fn stream_v_column(&self, j: usize) -> Result<Cells<'_, T>> {
        shape::check_column(self, j)?;
        Ok(self.cells(Walk::columns_of(self.cols(), 0, self.rows(), j, j + 1)))
    }

    /// The items of columns `from_col..to_col`, column by column.
    ///
    /// ```
    /// use gridmat::IntMatrix;
    /// let m = IntMatrix::of([[1, 2, 3], [4, 5, 6]]).unwrap();
    /// assert_eq!(m.stream_v_range(1, 3).unwrap().collect::<Vec<_>>(), [2, 5, 3, 6]);
    /// ```
    pub fn stream_v_range(&self, from_col: usize, to_col: usize) -> Result<Cells<'_, T>> {
        shape::check_column_range(self, from_col, to_col)?;
        Ok(self.cells(Walk::columns_of(self.cols(), 0, self.rows(), from_col, to_col)))
    }

    /// All rows, top to bottom.
    pub fn stream_r(&self) -> Rows<'_, T> {
        Rows {items: self.as_ref(), cols: self.cols(), walk: Walk::line(0, self.rows(), self.cols())}
    }

    /// Rows `from_row..to_row`.
    pub fn stream_r_range(&self, from_row: usize, to_row: usize) -> Result<Rows<'_, T>> {
        shape::check_row_range(self, from_row, to_row)?;
        let walk = Walk::line(from_row * self.cols(), to_row - from_row, self.cols());
        Ok(Rows {items: self.as_ref(), cols: self.cols(), walk})
    }

    /// All columns, left to right.
    pub fn stream_c(&self) -> Columns<'_, T> {
        Columns {items: self.as_ref(), rows: self.rows(), cols: self.cols(), walk: Walk::line(0, self.cols(), 1)}
    }

    /// Columns `from_col..to_col`.
    pub fn stream_c_range(&self, from_col: usize, to_col: usize) -> Result<Columns<'_, T>> {
        shape::check_column_range(self, from_col, to_col)?;
        let walk = Walk::line(from_col, to_col - from_col, 1);
        Ok(Columns {items: self.as_ref(), rows: self.rows(), cols: self.cols(), walk})
    }

    /// The main diagonal, from the top-left. The matrix must be square.
    pub fn stream_lu2rd(&self) -> Result<Cells<'_, T>> { Ok(self.cells(self.diagonal_walk(false)?)) }

    /// The anti-diagonal, from the top-right. The matrix must be square.
    pub fn stream_ru2ld(&self) -> Result<Cells<'_, T>> { Ok(self.cells(self.diagonal_walk(true)?)) }

    // ------------------------------------------------------------------------

    /// The coordinates of every cell, row by row.
    ///
    /// ```
    /// use gridmat::{IntMatrix, Point};
    /// let m = IntMatrix::zeros(2, 2);
    /// assert_eq!(m.points_h().nth(2), Some(Point::of(1, 0)));
    /// assert_eq!(m.points_v().nth(2), Some(Point::of(0, 1)));
    /// ```
    pub fn points_h(&self) -> Points { self.points(Walk::rows_of(self.cols(), 0, self.rows(), 0, self.cols())) }

    /// The coordinates of the cells of rows `from_row..to_row`, row by row.
    pub fn points_h_range(&self, from_row: usize, to_row: usize) -> Result<Points> {
        shape::check_row_range(self, from_row, to_row)?;
        Ok(self.points(Walk::rows_of(self.cols(), from_row, to_row, 0, self.cols())))
    }

    /// The coordinates of every cell, column by column.
    pub fn points_v(&self) -> Points { self.points(Walk::columns_of(self.cols(), 0, self.rows(), 0, self.cols())) }

    /// The coordinates of the cells of columns `from_col..to_col`, column by
    /// column.
    pub fn points_v_range(&self, from_col: usize, to_col: usize) -> Result<Points> {
        shape::check_column_range(self, from_col, to_col)?;
        Ok(self.points(Walk::columns_of(self.cols(), 0, self.rows(), from_col, to_col)))
    }

    /// The coordinates of the cells of each row, top to bottom.
    pub fn points_r(&self) -> PointLines {
        let cols = self.cols();
        PointLines {cols, len: cols, stride: 1, walk: Walk::line(0, self.rows(), cols)}
    }

    /// The coordinates of the cells of each column, left to right.
    pub fn points_c(&self) -> PointLines {
        let cols = self.cols();
        PointLines {cols, len: self.rows(), stride: cols, walk: Walk::line(0, cols, 1)}
    }

    /// The coordinates of the main diagonal. The matrix must be square.
    pub fn points_lu2rd(&self) -> Result<Points> { Ok(self.points(self.diagonal_walk(false)?)) }

    /// The coordinates of the anti-diagonal. The matrix must be square.
    pub fn points_ru2ld(&self) -> Result<Points> { Ok(self.points(self.diagonal_walk(true)?)) }
}

// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{IntMatrix, CharMatrix, MatrixError};

    fn m34() -> IntMatrix {
        IntMatrix::of([[1, 2, 3, 4], [5, 6, 7, 8], [9, 10, 11, 12]]).unwrap()
    }

    fn all<I: Iterator>(i: I) -> Vec<I::Item> { i.collect() }

    #[test]
    fn horizontal() {
        let m = m34();
        assert_eq!(all(m.stream_h()), (1..=12).collect::<Vec<_>>());
        assert_eq!(all(m.stream_h_row(1).unwrap()), [5, 6, 7, 8]);
        assert_eq!(all(m.stream_h_range(1, 3).unwrap()), [5, 6, 7, 8, 9, 10, 11, 12]);
        assert_eq!(m.stream_h_range(2, 2).unwrap().len(), 0);
        assert!(matches!(m.stream_h_row(3), Err(MatrixError::OutOfBounds(_))));
        assert!(m.stream_h_range(2, 4).is_err());
    }

    #[test]
    fn vertical() {
        let m = m34();
        assert_eq!(all(m.stream_v()), [1, 5, 9, 2, 6, 10, 3, 7, 11, 4, 8, 12]);
        assert_eq!(all(m.stream_v_column(3).unwrap()), [4, 8, 12]);
        assert_eq!(all(m.stream_v_range(0, 2).unwrap()), [1, 5, 9, 2, 6, 10]);
        assert!(m.stream_v_column(4).is_err());
        assert!(m.stream_v_range(3, 2).is_err());
    }

    #[test]
    fn rows_and_columns() {
        let m = m34();
        let rows: Vec<&[i32]> = m.stream_r().collect();
        assert_eq!(rows, [&[1, 2, 3, 4][..], &[5, 6, 7, 8], &[9, 10, 11, 12]]);
        assert_eq!(all(m.stream_r_range(2, 3).unwrap()), [&[9, 10, 11, 12][..]]);
        let sums: Vec<i32> = m.stream_c().map(|c| c.sum()).collect();
        assert_eq!(sums, [15, 18, 21, 24]);
        let last = m.stream_c_range(1, 3).unwrap().next_back().unwrap();
        assert_eq!(all(last), [3, 7, 11]);
        assert!(m.stream_c_range(0, 5).is_err());
        assert!(m.stream_r_range(1, 0).is_err());

        let tall = IntMatrix::zeros(3, 0);
        assert_eq!(tall.stream_r().len(), 3);
        assert!(tall.stream_r().all(|row| row.is_empty()));
        assert_eq!(tall.stream_c().len(), 0);
    }

    #[test]
    fn diagonals() {
        let m = IntMatrix::of([[1, 2, 3], [4, 5, 6], [7, 8, 9]]).unwrap();
        assert_eq!(all(m.stream_lu2rd().unwrap()), [1, 5, 9]);
        assert_eq!(all(m.stream_ru2ld().unwrap()), [3, 5, 7]);
        assert_eq!(all(m.points_ru2ld().unwrap()), [Point::of(0, 2), Point::of(1, 1), Point::of(2, 0)]);
        assert_eq!(m.points_lu2rd().unwrap().last(), Some(Point::of(2, 2)));
        assert!(matches!(m34().stream_lu2rd(), Err(MatrixError::NotSquare { rows: 3, cols: 4 })));
        assert!(m34().points_ru2ld().is_err());
        assert_eq!(IntMatrix::empty().stream_ru2ld().unwrap().len(), 0);
        assert_eq!(all(IntMatrix::filled(1, 1, 7).stream_ru2ld().unwrap()), [7]);
    }

    #[test]
    fn points() {
        let m = CharMatrix::zeros(2, 3);
        let p = Point::of;
        assert_eq!(all(m.points_h()), [p(0, 0), p(0, 1), p(0, 2), p(1, 0), p(1, 1), p(1, 2)]);
        assert_eq!(all(m.points_v()), [p(0, 0), p(1, 0), p(0, 1), p(1, 1), p(0, 2), p(1, 2)]);
        assert_eq!(all(m.points_h_range(1, 2).unwrap()), [p(1, 0), p(1, 1), p(1, 2)]);
        assert_eq!(all(m.points_v_range(2, 3).unwrap()), [p(0, 2), p(1, 2)]);
        assert!(m.points_v_range(0, 4).is_err());
        let rows: Vec<Vec<Point>> = m.points_r().map(all).collect();
        assert_eq!(rows, [vec![p(0, 0), p(0, 1), p(0, 2)], vec![p(1, 0), p(1, 1), p(1, 2)]]);
        let cols: Vec<Vec<Point>> = m.points_c().map(all).collect();
        assert_eq!(cols.len(), 3);
        assert_eq!(cols[2], [p(0, 2), p(1, 2)]);
    }

    #[test]
    fn skipping_and_both_ends() {
        let m = m34();
        let mut i = m.stream_v();
        assert_eq!(i.len(), 12);
        assert_eq!(i.nth(4), Some(6));
        assert_eq!(i.len(), 7);
        assert_eq!(i.next_back(), Some(12));
        assert_eq!(i.nth_back(1), Some(4));
        assert_eq!(all(i.clone()), [10, 3, 7, 11]);
        assert_eq!(i.nth(100), None);
        assert_eq!(i.next(), None);
        assert_eq!(i.next_back(), None);
        assert_eq!(all(m.stream_h().rev().take(3)), [12, 11, 10]);
        assert_eq!(m.stream_h().skip(5).count(), 7);
        assert_eq!(m.points_h().nth(usize::MAX), None);
        assert_eq!(m.stream_r().nth(1).unwrap(), [5, 6, 7, 8]);
    }
}
