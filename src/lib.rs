//! Dense, rectangular matrices of primitive values.
//!
//! [`Matrix<T>`] stores `rows * cols` items of type `T` in a single
//! [`Box<[T]>`], in row-major order. Its shape is fixed when it is
//! constructed, and every row has exactly `cols` items. There is one
//! implementation for all element types; the aliases [`IntMatrix`],
//! [`DoubleMatrix`] and so on merely name the common instantiations.
//!
//! Methods come in two flavours:
//! - Methods that take `&mut self`, such as [`Matrix::set()`],
//! [`Matrix::update_all()`] and [`Matrix::reverse_h()`], update the matrix
//! in place.
//! - Methods that take `&self` and return a `Matrix`, such as
//! [`Matrix::transpose()`], [`Matrix::reshape()`] and [`Matrix::map()`],
//! allocate a fresh one and leave `self` alone.
//!
//! Operations that visit every cell may run in parallel, using [`rayon`].
//! Whether they do is decided per call by [`parallel::is_parallelizable()`],
//! which can be overridden for the current thread with a
//! [`parallel::ParallelGuard`]. The result never depends on the decision.
//!
//! Fallible operations return a [`Result`] with a [`MatrixError`]. They check
//! their arguments before allocating or mutating anything.
//!
//! ```
//! use gridmat::{IntMatrix, zip};
//! let a = IntMatrix::of([[1, 2, 3], [4, 5, 6]]).unwrap();
//! let b = a.rotate90();
//! assert_eq!(b, IntMatrix::of([[4, 1], [5, 2], [6, 3]]).unwrap());
//! let c = zip::zip2(&a, &b.transpose().flip_v(), |x, y| x * y).unwrap();
//! assert_eq!(c.to_string(), "[[1, 4, 9], [16, 25, 36]]");
//! ```

mod error;
pub use error::{MatrixError, Result};

pub mod shape;
pub use shape::{Shape};

pub mod parallel;
pub use parallel::{ParallelEnabled, ParallelGuard};

mod point;
pub use point::{Point};

mod matrix;
pub use matrix::{Element, Matrix};

mod new;
mod diagonal;
mod transform;
mod numeric;
mod display;

pub mod ops;

pub mod zip;

pub mod stream;

#[cfg(test)]
mod property_tests;

// ----------------------------------------------------------------------------

pub type BooleanMatrix = Matrix<bool>;
pub type CharMatrix = Matrix<char>;
pub type ByteMatrix = Matrix<i8>;
pub type ShortMatrix = Matrix<i16>;
pub type IntMatrix = Matrix<i32>;
pub type LongMatrix = Matrix<i64>;
pub type FloatMatrix = Matrix<f32>;
pub type DoubleMatrix = Matrix<f64>;
