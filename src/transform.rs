//! Structural transforms.
//!
//! Everything here that returns a `Matrix` allocates fresh storage and leaves
//! `self` unchanged. The exceptions are [`Matrix::reverse_h()`] and
//! [`Matrix::reverse_v()`], which take `&mut self` and work in place.

use super::{Element, Matrix, MatrixError, Result, Shape, shape};
use super::matrix::{check_count};

impl<T: Element> Matrix<T> {
    /// Returns a deep copy of `self`.
    pub fn copy(&self) -> Self { self.clone() }

    /// Copies rows `from_row..to_row`.
    pub fn copy_rows(&self, from_row: usize, to_row: usize) -> Result<Self> {
        shape::check_row_range(self, from_row, to_row)?;
        let items = &self.as_ref()[from_row * self.cols()..to_row * self.cols()];
        Ok(Self::new_inner(to_row - from_row, self.cols(), items.into()))
    }

    /// Copies the region `from_row..to_row` x `from_col..to_col`.
    ///
    /// ```
    /// use gridmat::IntMatrix;
    /// let m = IntMatrix::of([[1, 2, 3], [4, 5, 6], [7, 8, 9]]).unwrap();
    /// assert_eq!(m.copy_region(1, 3, 1, 3).unwrap(), IntMatrix::of([[5, 6], [8, 9]]).unwrap());
    /// ```
    pub fn copy_region(
        &self,
        from_row: usize, to_row: usize,
        from_col: usize, to_col: usize,
    ) -> Result<Self> {
        shape::check_region(self, from_row, to_row, from_col, to_col)?;
        let mut items = Vec::with_capacity((to_row - from_row) * (to_col - from_col));
        for i in from_row..to_row {
            items.extend_from_slice(&self.row(i)?[from_col..to_col]);
        }
        Ok(Self::new_inner(to_row - from_row, to_col - from_col, items.into()))
    }

    /// Equivalent to `self.extend_with(new_rows, new_cols, T::default())`.
    pub fn extend(&self, new_rows: usize, new_cols: usize) -> Result<Self> {
        self.extend_with(new_rows, new_cols, T::default())
    }

    /// Returns a `new_rows x new_cols` matrix with `self` in its top-left
    /// corner and `value` everywhere else.
    ///
    /// If the new size is smaller than `self` in either direction, the excess
    /// is truncated. Fails with [`MatrixError::CapacityExceeded`] if the new
    /// size is too large to allocate.
    ///
    /// ```
    /// use gridmat::IntMatrix;
    /// let m = IntMatrix::of([[1, 2], [3, 4]]).unwrap();
    /// assert_eq!(m.extend_with(2, 3, 9).unwrap(), IntMatrix::of([[1, 2, 9], [3, 4, 9]]).unwrap());
    /// assert_eq!(m.extend_with(1, 1, 9).unwrap(), IntMatrix::of([[1]]).unwrap());
    /// ```
    pub fn extend_with(&self, new_rows: usize, new_cols: usize, value: T) -> Result<Self> {
        check_count::<T>(new_rows, new_cols)?;
        let (rows, cols) = (self.rows(), self.cols());
        Ok(Self::from_fn(new_rows, new_cols, |i, j| if i < rows && j < cols { self[(i, j)] } else { value }))
    }

    /// Equivalent to `self.extend_around_with(to_up, to_down, to_left,
    /// to_right, T::default())`.
    pub fn extend_around(
        &self,
        to_up: usize, to_down: usize,
        to_left: usize, to_right: usize,
    ) -> Result<Self> {
        self.extend_around_with(to_up, to_down, to_left, to_right, T::default())
    }

    /// Surrounds `self` with a border of `value`, `to_up` rows deep above,
    /// `to_down` below, `to_left` columns wide on the left and `to_right` on
    /// the right.
    pub fn extend_around_with(
        &self,
        to_up: usize, to_down: usize,
        to_left: usize, to_right: usize,
        value: T,
    ) -> Result<Self> {
        let (rows, cols) = (self.rows(), self.cols());
        let new_rows = rows.checked_add(to_up).and_then(|n| n.checked_add(to_down))
            .ok_or_else(|| MatrixError::CapacityExceeded("too many rows".into()))?;
        let new_cols = cols.checked_add(to_left).and_then(|n| n.checked_add(to_right))
            .ok_or_else(|| MatrixError::CapacityExceeded("too many columns".into()))?;
        check_count::<T>(new_rows, new_cols)?;
        Ok(Self::from_fn(new_rows, new_cols, |i, j| {
            let inside = (to_up..to_up + rows).contains(&i) && (to_left..to_left + cols).contains(&j);
            if inside { self[(i - to_up, j - to_left)] } else { value }
        }))
    }

    /// Reverses every row, in place.
    pub fn reverse_h(&mut self) { self.flat_op(|row| row.reverse()); }

    /// Reverses the order of the rows, in place.
    pub fn reverse_v(&mut self) {
        let (rows, cols) = (self.rows(), self.cols());
        let items = self.as_mut();
        for i in 0..rows / 2 {
            let (top, bottom) = items.split_at_mut((rows - 1 - i) * cols);
            top[i * cols..(i + 1) * cols].swap_with_slice(&mut bottom[..cols]);
        }
    }

    /// Returns a copy of `self` with every row reversed.
    pub fn flip_h(&self) -> Self {
        let mut m = self.copy();
        m.reverse_h();
        m
    }

    /// Returns a copy of `self` with the rows in reverse order.
    pub fn flip_v(&self) -> Self {
        let mut m = self.copy();
        m.reverse_v();
        m
    }

    /// Rotates clockwise by a quarter turn.
    ///
    /// ```
    /// use gridmat::IntMatrix;
    /// let m = IntMatrix::of([[1, 2, 3], [4, 5, 6]]).unwrap();
    /// assert_eq!(m.rotate90(), IntMatrix::of([[4, 1], [5, 2], [6, 3]]).unwrap());
    /// ```
    pub fn rotate90(&self) -> Self {
        let rows = self.rows();
        Self::from_fn(self.cols(), rows, |i, j| self[(rows - 1 - j, i)])
    }

    /// Rotates by a half turn.
    pub fn rotate180(&self) -> Self {
        let (rows, cols) = (self.rows(), self.cols());
        Self::from_fn(rows, cols, |i, j| self[(rows - 1 - i, cols - 1 - j)])
    }

    /// Rotates anticlockwise by a quarter turn.
    pub fn rotate270(&self) -> Self {
        let cols = self.cols();
        Self::from_fn(cols, self.rows(), |i, j| self[(j, cols - 1 - i)])
    }

    /// Swaps rows with columns.
    pub fn transpose(&self) -> Self {
        Self::from_fn(self.cols(), self.rows(), |i, j| self[(j, i)])
    }

    /// Reinterprets the items, in row-major order, as a
    /// `new_rows x new_cols` matrix.
    ///
    /// Surplus items are dropped. If there are too few, the remaining cells
    /// are `T::default()`. Fails with [`MatrixError::CapacityExceeded`] if
    /// the new size is too large to allocate.
    ///
    /// ```
    /// use gridmat::IntMatrix;
    /// let m = IntMatrix::of([[1, 2, 3], [4, 5, 6]]).unwrap();
    /// assert_eq!(m.reshape(3, 2).unwrap(), IntMatrix::of([[1, 2], [3, 4], [5, 6]]).unwrap());
    /// assert_eq!(m.reshape(2, 4).unwrap(), IntMatrix::of([[1, 2, 3, 4], [5, 6, 0, 0]]).unwrap());
    /// assert_eq!(m.reshape(1, 2).unwrap(), IntMatrix::of([[1, 2]]).unwrap());
    /// ```
    pub fn reshape(&self, new_rows: usize, new_cols: usize) -> Result<Self> {
        let count = check_count::<T>(new_rows, new_cols)?;
        let items: Box<[T]> = self.as_ref().iter().copied()
            .chain(std::iter::repeat(T::default()))
            .take(count)
            .collect();
        Ok(Self::new_inner(new_rows, new_cols, items))
    }

    /// Expands every item into a `row_repeats x col_repeats` block.
    ///
    /// Fails with [`MatrixError::InvalidArgument`] if either count is zero,
    /// and with [`MatrixError::CapacityExceeded`] if the result would be too
    /// large to allocate.
    ///
    /// ```
    /// use gridmat::DoubleMatrix;
    /// let m = DoubleMatrix::of([[1.0, 2.0], [3.0, 4.0]]).unwrap();
    /// let big = m.repelem(2, 3).unwrap();
    /// assert_eq!((big.rows(), big.cols()), (4, 6));
    /// assert_eq!(big.get(0, 2), Ok(1.0));
    /// assert_eq!(big.get(0, 3), Ok(2.0));
    /// ```
    pub fn repelem(&self, row_repeats: usize, col_repeats: usize) -> Result<Self> {
        let (new_rows, new_cols) = self.repeated_dims(row_repeats, col_repeats)?;
        Ok(Self::from_fn(new_rows, new_cols, |i, j| self[(i / row_repeats, j / col_repeats)]))
    }

    /// Tiles `self` `row_repeats` times vertically and `col_repeats` times
    /// horizontally. Fails like [`Matrix::repelem()`].
    pub fn repmat(&self, row_repeats: usize, col_repeats: usize) -> Result<Self> {
        let (rows, cols) = (self.rows(), self.cols());
        let (new_rows, new_cols) = self.repeated_dims(row_repeats, col_repeats)?;
        Ok(Self::from_fn(new_rows, new_cols, |i, j| self[(i % rows, j % cols)]))
    }

    fn repeated_dims(&self, row_repeats: usize, col_repeats: usize) -> Result<(usize, usize)> {
        if row_repeats == 0 || col_repeats == 0 {
            return Err(MatrixError::InvalidArgument(format!(
                "repeat counts must be positive, got {}x{}", row_repeats, col_repeats,
            )));
        }
        let new_rows = self.rows().checked_mul(row_repeats)
            .ok_or_else(|| MatrixError::CapacityExceeded("too many rows".into()))?;
        let new_cols = self.cols().checked_mul(col_repeats)
            .ok_or_else(|| MatrixError::CapacityExceeded("too many columns".into()))?;
        check_count::<T>(new_rows, new_cols)?;
        Ok((new_rows, new_cols))
    }

    /// Copies the items into a `Vec`, in row-major order.
    pub fn flatten(&self) -> Vec<T> { self.as_ref().to_vec() }

    /// Places `other` below `self`. The column counts must match.
    ///
    /// ```
    /// use gridmat::IntMatrix;
    /// let a = IntMatrix::of([[1, 2], [3, 4]]).unwrap();
    /// let b = IntMatrix::of([[5, 6], [7, 8]]).unwrap();
    /// let v = a.vstack(&b).unwrap();
    /// assert_eq!((v.rows(), v.cols()), (4, 2));
    /// assert_eq!(v.row(2).unwrap(), [5, 6]);
    /// let h = a.hstack(&b).unwrap();
    /// assert_eq!((h.rows(), h.cols()), (2, 4));
    /// assert_eq!(h.get(0, 2), Ok(5));
    /// ```
    pub fn vstack(&self, other: &Self) -> Result<Self> {
        if self.cols() != other.cols() {
            return Err(MatrixError::shape_mismatch(self.dims(), other.dims()));
        }
        let items: Box<[T]> = [self.as_ref(), other.as_ref()].concat().into();
        Ok(Self::new_inner(self.rows() + other.rows(), self.cols(), items))
    }

    /// Places `other` to the right of `self`. The row counts must match.
    pub fn hstack(&self, other: &Self) -> Result<Self> {
        if self.rows() != other.rows() {
            return Err(MatrixError::shape_mismatch(self.dims(), other.dims()));
        }
        let mut items = Vec::with_capacity(self.count() + other.count());
        for i in 0..self.rows() {
            items.extend_from_slice(self.row(i)?);
            items.extend_from_slice(other.row(i)?);
        }
        Ok(Self::new_inner(self.rows(), self.cols() + other.cols(), items.into()))
    }
}

// ----------------------------------------------------------------------------
