//! Arithmetic on matrices of numbers.
//!
//! Integer overflow behaves as it does for the element type: it panics in
//! debug builds and wraps in release builds.

use num_traits::{Bounded, Num, ToPrimitive};

use super::{Element, Matrix, MatrixError, Result, parallel, zip};

impl<T: Element + Num> Matrix<T> {
    /// The `n x n` identity matrix.
    pub fn identity(n: usize) -> Self {
        Self::from_fn(n, n, |i, j| if i == j { T::one() } else { T::zero() })
    }

    /// A `1 x n` matrix counting up by one from `start` until just before
    /// `end`.
    ///
    /// ```
    /// use gridmat::IntMatrix;
    /// assert_eq!(IntMatrix::range(0, 5).unwrap(), IntMatrix::of([[0, 1, 2, 3, 4]]).unwrap());
    /// assert!(IntMatrix::range(5, 5).unwrap().is_empty());
    /// ```
    pub fn range(start: T, end: T) -> Result<Self> where T: PartialOrd + Bounded {
        Self::range_step(start, end, T::one())
    }

    /// A `1 x n` matrix counting from `start` by `step` until just before
    /// `end`. A negative `step` counts down.
    ///
    /// Fails with [`MatrixError::InvalidArgument`] if `step` is zero.
    ///
    /// ```
    /// use gridmat::IntMatrix;
    /// assert_eq!(IntMatrix::range_step(0, 10, 2).unwrap(), IntMatrix::of([[0, 2, 4, 6, 8]]).unwrap());
    /// assert_eq!(IntMatrix::range_step(10, 0, -2).unwrap(), IntMatrix::of([[10, 8, 6, 4, 2]]).unwrap());
    /// ```
    pub fn range_step(start: T, end: T, step: T) -> Result<Self> where T: PartialOrd + Bounded {
        Self::count_by(start, step, |x| if step > T::zero() { x < end } else { x > end })
    }

    /// Like [`Matrix::range()`], but includes `end`.
    pub fn range_closed(start: T, end: T) -> Result<Self> where T: PartialOrd + Bounded {
        Self::range_closed_step(start, end, T::one())
    }

    /// Like [`Matrix::range_step()`], but includes `end` if the count lands
    /// on it.
    pub fn range_closed_step(start: T, end: T, step: T) -> Result<Self> where T: PartialOrd + Bounded {
        Self::count_by(start, step, |x| if step > T::zero() { x <= end } else { x >= end })
    }

    fn count_by(start: T, step: T, in_range: impl Fn(T) -> bool) -> Result<Self> where T: PartialOrd + Bounded {
        if step == T::zero() {
            return Err(MatrixError::InvalidArgument("range step must be non-zero".into()));
        }
        let mut items = Vec::new();
        let mut x = start;
        while in_range(x) {
            items.push(x);
            // Stop where `x + step` would overflow.
            let room = if step > T::zero() { x <= T::max_value() - step } else { x >= T::min_value() - step };
            if !room { break; }
            x = x + step;
        }
        Ok(Self::new_inner(1, items.len(), items.into()))
    }

    /// Cell-by-cell sum.
    pub fn add(&self, other: &Self) -> Result<Self> { zip::zip2(self, other, |x, y| x + y) }

    /// Cell-by-cell difference.
    pub fn subtract(&self, other: &Self) -> Result<Self> { zip::zip2(self, other, |x, y| x - y) }

    /// The matrix product `self * other`.
    ///
    /// Fails with [`MatrixError::ShapeMismatch`] unless
    /// `self.cols() == other.rows()`.
    ///
    /// ```
    /// use gridmat::IntMatrix;
    /// let a = IntMatrix::of([[1, 2, 3], [4, 5, 6]]).unwrap();
    /// let b = IntMatrix::of([[7, 8], [9, 10], [11, 12]]).unwrap();
    /// assert_eq!(a.multiply(&b).unwrap(), IntMatrix::of([[58, 64], [139, 154]]).unwrap());
    /// ```
    pub fn multiply(&self, other: &Self) -> Result<Self> {
        if self.cols() != other.rows() {
            return Err(MatrixError::shape_mismatch((self.rows(), self.cols()), (other.rows(), other.cols())));
        }
        let (rows, cols, n) = (self.rows(), other.cols(), self.cols());
        let in_parallel = parallel::is_parallelizable_by(&(rows, cols), n);
        let items = parallel::generate(rows, cols, |i, j| {
            (0..n).fold(T::zero(), |acc, k| acc + self[(i, k)] * other[(k, j)])
        }, in_parallel);
        Ok(Self::new_inner(rows, cols, items))
    }

    /// Multiplies every item by `factor`.
    pub fn scale(&self, factor: T) -> Self { self.map(|x| x * factor) }

    /// The sum of all the items. Zero for an empty matrix.
    pub fn sum(&self) -> T { self.as_ref().iter().fold(T::zero(), |acc, &x| acc + x) }
}

impl<T: Element + ToPrimitive> Matrix<T> {
    /// The mean of all the items, or `None` if the matrix is empty or an item
    /// has no `f64` representation.
    ///
    /// ```
    /// use gridmat::IntMatrix;
    /// assert_eq!(IntMatrix::of([[1, 2], [3, 4]]).unwrap().average(), Some(2.5));
    /// assert_eq!(IntMatrix::empty().average(), None);
    /// ```
    pub fn average(&self) -> Option<f64> {
        if self.is_empty() { return None; }
        let total: f64 = self.as_ref().iter().map(|x| x.to_f64()).sum::<Option<f64>>()?;
        Some(total / self.count() as f64)
    }
}

impl<T: Element + PartialOrd> Matrix<T> {
    /// The smallest item, or `None` if the matrix is empty.
    pub fn min(&self) -> Option<T> {
        self.as_ref().iter().copied().reduce(|a, b| if b < a { b } else { a })
    }

    /// The largest item, or `None` if the matrix is empty.
    pub fn max(&self) -> Option<T> {
        self.as_ref().iter().copied().reduce(|a, b| if b > a { b } else { a })
    }
}

// ----------------------------------------------------------------------------
