//! Generic programming over binary operators.
//!
//! For each binary operator in [`std::ops`] this module contains a type of the
//! same name that cannot be instantiated and that implements [`Binary`]. For
//! example, [`Add`] corresponds to [`std::ops::Add`]. Pass one as a type
//! parameter to [`Matrix::binary()`] to combine two matrices cell by cell.
//!
//! The same operators are available on references to matrices, e.g.
//! `&a + &b`. Since the shapes might not match, the output is a [`Result`].
//!
//! ```
//! use gridmat::{IntMatrix, ops};
//! let a = IntMatrix::of([[1, 2], [3, 4]]).unwrap();
//! let b = IntMatrix::of([[5, 6], [7, 8]]).unwrap();
//! let sum = a.binary::<ops::Add, _>(&b).unwrap();
//! assert_eq!(sum, IntMatrix::of([[6, 8], [10, 12]]).unwrap());
//! assert_eq!((&a + &b).unwrap(), sum);
//! ```

use super::{Element, Matrix, Result};

/// A function that combines `T` with `U`.
///
/// This trait has no methods that take `self`. It makes sense to implement it
/// for types that cannot be instantiated, such as empty enumerations.
pub trait Binary<T, U> {
    type Output;

    fn call(t: T, u: U) -> Self::Output;
}

// ----------------------------------------------------------------------------

/// An implementation of [`Binary`] that constructs a pair.
pub enum Pair {}

impl<T, U> Binary<T, U> for Pair {
    type Output = (T, U);
    #[inline(always)]
    fn call(t: T, u: U) -> Self::Output { (t, u) }
}

// ----------------------------------------------------------------------------

/// The smaller of two items. Incomparable pairs give the first.
pub enum Min {}

impl<T: PartialOrd> Binary<T, T> for Min {
    type Output = T;
    #[inline(always)]
    fn call(t: T, u: T) -> T { if u < t { u } else { t } }
}

/// The larger of two items. Incomparable pairs give the first.
pub enum Max {}

impl<T: PartialOrd> Binary<T, T> for Max {
    type Output = T;
    #[inline(always)]
    fn call(t: T, u: T) -> T { if u > t { u } else { t } }
}

// ----------------------------------------------------------------------------

macro_rules! binary_op {
    ($op:ident { $method:ident }) => {
        pub enum $op {}

        impl<T, U> Binary<T, U> for $op where T: std::ops::$op<U> {
            type Output = T::Output;
            #[inline(always)]
            fn call(t: T, u: U) -> Self::Output { t.$method(u) }
        }

        impl<'a, T: Element, U: Element> std::ops::$op<&'a Matrix<U>> for &'a Matrix<T> where
            T: std::ops::$op<U>,
            T::Output: Element,
        {
            type Output = Result<Matrix<T::Output>>;
            fn $method(self, other: &'a Matrix<U>) -> Self::Output { self.binary::<$op, U>(other) }
        }
    };
}

binary_op!(Add { add });
binary_op!(Sub { sub });
binary_op!(Mul { mul });
binary_op!(Div { div });
binary_op!(Rem { rem });
binary_op!(BitAnd { bitand });
binary_op!(BitOr { bitor });
binary_op!(BitXor { bitxor });

// ----------------------------------------------------------------------------
