//! Access to the two diagonals of a square matrix.
//!
//! "lu2rd" is the main diagonal, from the top-left to the bottom-right.
//! "ru2ld" is the anti-diagonal, from the top-right to the bottom-left. Every
//! operation here fails with [`MatrixError::NotSquare`] unless the matrix is
//! square or empty.

use super::{Element, Matrix, MatrixError, Result, shape};

impl<T: Element> Matrix<T> {
    /// Copies the main diagonal.
    ///
    /// ```
    /// use gridmat::IntMatrix;
    /// let m = IntMatrix::of([[1, 2, 3], [4, 5, 6], [7, 8, 9]]).unwrap();
    /// assert_eq!(m.get_lu2rd().unwrap(), [1, 5, 9]);
    /// assert_eq!(m.get_ru2ld().unwrap(), [3, 5, 7]);
    /// ```
    pub fn get_lu2rd(&self) -> Result<Vec<T>> {
        shape::check_square(self)?;
        Ok((0..self.diagonal_len()).map(|i| self[(i, i)]).collect())
    }

    /// Copies the anti-diagonal, starting at the top-right.
    pub fn get_ru2ld(&self) -> Result<Vec<T>> {
        shape::check_square(self)?;
        let n = self.diagonal_len();
        Ok((0..n).map(|i| self[(i, n - 1 - i)]).collect())
    }

    /// Overwrites the main diagonal with the first `rows` items of `values`.
    pub fn set_lu2rd(&mut self, values: &[T]) -> Result<()> {
        self.check_diagonal_values(values)?;
        for i in 0..self.diagonal_len() { self[(i, i)] = values[i]; }
        Ok(())
    }

    /// Overwrites the anti-diagonal with the first `rows` items of `values`.
    pub fn set_ru2ld(&mut self, values: &[T]) -> Result<()> {
        self.check_diagonal_values(values)?;
        let n = self.diagonal_len();
        for i in 0..n { self[(i, n - 1 - i)] = values[i]; }
        Ok(())
    }

    /// Replaces every item `x` on the main diagonal with `f(x)`.
    pub fn update_lu2rd(&mut self, mut f: impl FnMut(T) -> T) -> Result<()> {
        shape::check_square(&*self)?;
        for i in 0..self.diagonal_len() { self[(i, i)] = f(self[(i, i)]); }
        Ok(())
    }

    /// Replaces every item `x` on the anti-diagonal with `f(x)`.
    pub fn update_ru2ld(&mut self, mut f: impl FnMut(T) -> T) -> Result<()> {
        shape::check_square(&*self)?;
        let n = self.diagonal_len();
        for i in 0..n { self[(i, n - 1 - i)] = f(self[(i, n - 1 - i)]); }
        Ok(())
    }

    fn diagonal_len(&self) -> usize { self.rows().min(self.cols()) }

    fn check_diagonal_values(&self, values: &[T]) -> Result<()> {
        shape::check_square(self)?;
        if values.len() < self.diagonal_len() {
            return Err(MatrixError::InvalidArgument(format!(
                "{} values for a diagonal of length {}", values.len(), self.diagonal_len(),
            )));
        }
        Ok(())
    }
}

// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{IntMatrix};

    #[test]
    fn read_and_write() {
        let mut m = IntMatrix::zeros(3, 3);
        m.set_lu2rd(&[1, 2, 3]).unwrap();
        m.set_ru2ld(&[7, 8, 9, 10]).unwrap();
        assert_eq!(m, IntMatrix::of([[1, 0, 7], [0, 8, 0], [9, 0, 3]]).unwrap());
        assert_eq!(m.get_lu2rd().unwrap(), [1, 8, 3]);
        assert_eq!(m.get_ru2ld().unwrap(), [7, 8, 9]);
        assert!(matches!(m.set_lu2rd(&[1, 2]), Err(MatrixError::InvalidArgument(_))));
        assert_eq!(m.get_lu2rd().unwrap(), [1, 8, 3]);
    }

    #[test]
    fn updates() {
        let mut m = IntMatrix::of([[1, 2], [3, 4]]).unwrap();
        m.update_lu2rd(|x| x * 10).unwrap();
        m.update_ru2ld(|x| -x).unwrap();
        assert_eq!(m, IntMatrix::of([[10, -2], [-3, 40]]).unwrap());
    }

    #[test]
    fn requires_square() {
        let mut m = IntMatrix::zeros(2, 3);
        let not_square = Err(MatrixError::NotSquare { rows: 2, cols: 3 });
        assert_eq!(m.get_lu2rd(), not_square.clone());
        assert_eq!(m.get_ru2ld(), not_square.clone());
        assert_eq!(m.set_lu2rd(&[1, 2, 3]), Err(MatrixError::NotSquare { rows: 2, cols: 3 }));
        assert!(m.update_ru2ld(|x| x).is_err());
        assert_eq!(IntMatrix::empty().get_lu2rd(), Ok(vec![]));
        assert_eq!(IntMatrix::zeros(0, 4).get_ru2ld(), Ok(vec![]));
        assert_eq!(IntMatrix::zeros(4, 0).get_ru2ld(), Ok(vec![]));
    }

    #[test]
    fn short_values_change_nothing() {
        let original = IntMatrix::of([[1, 2, 3], [4, 5, 6], [7, 8, 9]]).unwrap();
        let mut m = original.copy();
        assert!(matches!(m.set_ru2ld(&[0, 0]), Err(MatrixError::InvalidArgument(_))));
        assert!(matches!(m.set_lu2rd(&[]), Err(MatrixError::InvalidArgument(_))));
        assert_eq!(m, original);
        let mut wide = IntMatrix::zeros(2, 3);
        assert!(wide.set_ru2ld(&[1]).is_err());
        assert_eq!(wide, IntMatrix::zeros(2, 3));
    }
}
