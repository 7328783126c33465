use std::fmt::{Display, Formatter};

use super::{Matrix};

/// Formats as nested brackets, one pair per row.
///
/// ```
/// use gridmat::{CharMatrix, IntMatrix};
/// assert_eq!(IntMatrix::of([[1, 2], [3, 4]]).unwrap().to_string(), "[[1, 2], [3, 4]]");
/// assert_eq!(CharMatrix::of([['a', 'b']]).unwrap().to_string(), "[[a, b]]");
/// assert_eq!(IntMatrix::empty().to_string(), "[]");
/// ```
impl<T: Display> Display for Matrix<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for i in 0..self.rows() {
            if i > 0 { write!(f, ", ")?; }
            write!(f, "[")?;
            for j in 0..self.cols() {
                if j > 0 { write!(f, ", ")?; }
                self[(i, j)].fmt(f)?;
            }
            write!(f, "]")?;
        }
        write!(f, "]")
    }
}

impl<T: Display> Matrix<T> {
    /// Writes `self` and a newline to standard output.
    pub fn println(&self) { println!("{}", self); }
}

// ----------------------------------------------------------------------------
