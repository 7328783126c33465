use std::fmt::{Display, Formatter};

/// An immutable `(row, col)` coordinate in a matrix.
#[derive(Debug, Default, Copy, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Point {
    pub row: usize,
    pub col: usize,
}

impl Point {
    /// Constructs the `Point` at row `row` and column `col`.
    pub const fn of(row: usize, col: usize) -> Self { Self {row, col} }

    /// The row index.
    pub const fn row(self) -> usize { self.row }

    /// The column index.
    pub const fn col(self) -> usize { self.col }
}

impl From<(usize, usize)> for Point {
    fn from((row, col): (usize, usize)) -> Self { Self {row, col} }
}

impl From<Point> for (usize, usize) {
    fn from(p: Point) -> Self { (p.row, p.col) }
}

impl Display for Point {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
