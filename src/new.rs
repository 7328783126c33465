use rand::{Rng};
use rand::distr::{Distribution, StandardUniform};

use super::{Element, Matrix, MatrixError, Result, parallel};
use super::matrix::{check_count};

impl<T: Element> Matrix<T> {
    /// Constructs a `rows x cols` matrix with items `f(i, j)`.
    ///
    /// `f` may be called in parallel, in any order, if the matrix is large
    /// enough.
    ///
    /// # Panics
    ///
    /// Panics if `rows * cols` items would not fit in memory, like
    /// [`Vec::with_capacity()`].
    ///
    /// ```
    /// use gridmat::IntMatrix;
    /// let m = IntMatrix::from_fn(2, 3, |i, j| (10 * i + j) as i32);
    /// assert_eq!(m, IntMatrix::of([[0, 1, 2], [10, 11, 12]]).unwrap());
    /// ```
    pub fn from_fn(rows: usize, cols: usize, f: impl Fn(usize, usize) -> T + Sync + Send) -> Self {
        allocation_count::<T>(rows, cols);
        let in_parallel = parallel::is_parallelizable(&(rows, cols));
        Self::new_inner(rows, cols, parallel::generate(rows, cols, f, in_parallel))
    }

    /// Constructs a `rows x cols` matrix with every item equal to `value`.
    /// Panics like [`Matrix::from_fn()`].
    pub fn filled(rows: usize, cols: usize, value: T) -> Self {
        let count = allocation_count::<T>(rows, cols);
        Self::new_inner(rows, cols, vec![value; count].into())
    }

    /// Constructs a `rows x cols` matrix of `T::default()`.
    pub fn zeros(rows: usize, cols: usize) -> Self { Self::filled(rows, cols, T::default()) }

    /// Constructs a `1 x len` matrix with every item equal to `value`.
    pub fn repeat(value: T, len: usize) -> Self { Self::filled(1, len, value) }

    /// Constructs a square matrix with the given diagonals and
    /// `T::default()` elsewhere.
    ///
    /// - lu2rd - The main diagonal, from the top-left to the bottom-right.
    /// - ru2ld - The anti-diagonal, from the top-right to the bottom-left.
    ///
    /// The size of the result is the length of whichever diagonal is given.
    /// Where the diagonals cross, `lu2rd` wins. Giving neither returns the
    /// empty matrix. Fails with [`MatrixError::InvalidArgument`] if both are
    /// given and their lengths differ.
    ///
    /// ```
    /// use gridmat::BooleanMatrix;
    /// let m = BooleanMatrix::diagonal(Some(&[true, true, true]), None).unwrap();
    /// assert_eq!(m, BooleanMatrix::of([
    ///     [true, false, false],
    ///     [false, true, false],
    ///     [false, false, true],
    /// ]).unwrap());
    /// ```
    pub fn diagonal(lu2rd: Option<&[T]>, ru2ld: Option<&[T]>) -> Result<Self> {
        let n = match (lu2rd, ru2ld) {
            (None, None) => return Ok(Self::empty()),
            (Some(a), Some(b)) if a.len() != b.len() => {
                return Err(MatrixError::InvalidArgument(format!(
                    "diagonals have lengths {} and {}", a.len(), b.len(),
                )));
            },
            (Some(a), _) => a.len(),
            (None, Some(b)) => b.len(),
        };
        let mut m = Self::zeros(n, n);
        if let Some(b) = ru2ld {
            for (i, &x) in b.iter().enumerate() { m[(i, n - 1 - i)] = x; }
        }
        if let Some(a) = lu2rd {
            for (i, &x) in a.iter().enumerate() { m[(i, i)] = x; }
        }
        Ok(m)
    }

    /// Constructs a square matrix with main diagonal `lu2rd`.
    pub fn diagonal_lu2rd(lu2rd: &[T]) -> Self {
        let n = lu2rd.len();
        Self::from_fn(n, n, |i, j| if i == j { lu2rd[i] } else { T::default() })
    }

    /// Constructs a square matrix with anti-diagonal `ru2ld`.
    pub fn diagonal_ru2ld(ru2ld: &[T]) -> Self {
        let n = ru2ld.len();
        Self::from_fn(n, n, |i, j| if i + j + 1 == n { ru2ld[i] } else { T::default() })
    }
}

impl<T: Element> Matrix<T> where StandardUniform: Distribution<T> {
    /// Constructs a `rows x cols` matrix of random items, drawn from the
    /// thread-local generator. Panics like [`Matrix::from_fn()`].
    ///
    /// Integers are uniform over the whole type, floats are uniform in
    /// `[0, 1)` and `char`s are uniform over the valid code points.
    ///
    /// ```
    /// use gridmat::DoubleMatrix;
    /// let m = DoubleMatrix::random(2, 3);
    /// assert_eq!((m.rows(), m.cols()), (2, 3));
    /// assert!(m.as_ref().iter().all(|x| (0.0..1.0).contains(x)));
    /// ```
    pub fn random(rows: usize, cols: usize) -> Self {
        Self::random_with_rng(rows, cols, &mut rand::rng())
    }

    /// Constructs a `1 x len` matrix of random items.
    pub fn random_row(len: usize) -> Self { Self::random(1, len) }

    /// Like [`Matrix::random()`], but draws from `rng`, in row-major order.
    pub fn random_with_rng(rows: usize, cols: usize, rng: &mut impl Rng) -> Self {
        let count = allocation_count::<T>(rows, cols);
        let items: Box<[T]> = (0..count).map(|_| rng.random()).collect();
        Self::new_inner(rows, cols, items)
    }
}

/// The infallible constructors panic where the fallible ones return
/// [`MatrixError::CapacityExceeded`].
fn allocation_count<T>(rows: usize, cols: usize) -> usize {
    match check_count::<T>(rows, cols) {
        Ok(count) => count,
        Err(e) => panic!("{} for a {}x{} matrix", e, rows, cols),
    }
}

// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng};
    use rand::rngs::{SmallRng};

    use crate::{IntMatrix, CharMatrix, DoubleMatrix, BooleanMatrix, LongMatrix};
    use crate::parallel::{ParallelEnabled, with_parallel_enabled};

    #[test]
    fn from_fn_modes() {
        let expected = IntMatrix::of([[0, 1, 2, 3], [10, 11, 12, 13], [20, 21, 22, 23]]).unwrap();
        for mode in [ParallelEnabled::Yes, ParallelEnabled::No] {
            let m = with_parallel_enabled(mode, || IntMatrix::from_fn(3, 4, |i, j| (10 * i + j) as i32));
            assert_eq!(m, expected);
        }
        let big = IntMatrix::from_fn(200, 100, |i, j| (i * 100 + j) as i32);
        assert!(big.as_ref().iter().enumerate().all(|(k, &x)| x == k as i32));
    }

    #[test]
    fn filled_and_zeros() {
        assert_eq!(CharMatrix::filled(1, 3, 'x'), CharMatrix::of([['x', 'x', 'x']]).unwrap());
        assert_eq!(DoubleMatrix::zeros(2, 2).as_ref(), [0.0; 4]);
        assert_eq!(IntMatrix::repeat(7, 3), IntMatrix::of([[7, 7, 7]]).unwrap());
        assert!(IntMatrix::zeros(0, 5).is_empty());
        assert_eq!(IntMatrix::zeros(0, 5).cols(), 5);
        assert!(IntMatrix::zeros(usize::MAX, 0).is_empty());
    }

    #[test]
    #[should_panic(expected = "capacity exceeded: too many elements")]
    fn filled_too_large() {
        IntMatrix::filled(usize::MAX / 2 + 1, 2, 1);
    }

    #[test]
    #[should_panic(expected = "capacity exceeded: too many elements")]
    fn from_fn_too_large() {
        IntMatrix::from_fn(usize::MAX, 2, |_, _| 0);
    }

    #[test]
    fn diagonals() {
        let m = IntMatrix::diagonal(Some(&[1, 2, 3]), Some(&[4, 5, 6])).unwrap();
        assert_eq!(m, IntMatrix::of([[1, 0, 4], [0, 2, 0], [6, 0, 3]]).unwrap());
        assert_eq!(IntMatrix::diagonal(None, None), Ok(IntMatrix::empty()));
        assert!(matches!(
            IntMatrix::diagonal(Some(&[1, 2]), Some(&[1])),
            Err(MatrixError::InvalidArgument(_)),
        ));
        let anti = IntMatrix::diagonal(None, Some(&[1, 2])).unwrap();
        assert_eq!(anti, IntMatrix::of([[0, 1], [2, 0]]).unwrap());
        assert_eq!(IntMatrix::diagonal_ru2ld(&[1, 2]), anti);
        assert_eq!(IntMatrix::diagonal_lu2rd(&[1, 2]), IntMatrix::of([[1, 0], [0, 2]]).unwrap());
        assert!(IntMatrix::diagonal_lu2rd(&[]).is_empty());
    }

    #[test]
    fn random_shapes_and_values() {
        let m = IntMatrix::random(2, 3);
        assert_eq!((m.rows(), m.cols()), (2, 3));
        let row = CharMatrix::random_row(5);
        assert_eq!((row.rows(), row.cols()), (1, 5));
        let empty = DoubleMatrix::random_row(0);
        assert_eq!((empty.rows(), empty.cols()), (1, 0));
        assert!(DoubleMatrix::random(0, 0).is_empty());

        let big = LongMatrix::random(20, 20);
        let first = big.as_ref()[0];
        assert!(big.as_ref().iter().any(|&x| x != first));
        let bits = BooleanMatrix::random(20, 20);
        assert!(bits.as_ref().contains(&true) && bits.as_ref().contains(&false));
        assert!(DoubleMatrix::random(10, 10).as_ref().iter().all(|x| (0.0..1.0).contains(x)));
    }

    #[test]
    fn random_is_reproducible() {
        let a = IntMatrix::random_with_rng(3, 4, &mut SmallRng::seed_from_u64(42));
        let b = IntMatrix::random_with_rng(3, 4, &mut SmallRng::seed_from_u64(42));
        let c = IntMatrix::random_with_rng(3, 4, &mut SmallRng::seed_from_u64(43));
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
