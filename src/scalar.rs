// src/scalar.rs

//! Scalar component types.
//!
//! Three tiers, each adding capabilities on top of the previous one:
//! - [`Scalar`]: anything that can sit in a tuple and be compared exactly.
//! - [`Numeric`]: scalars with a zero value (integers and floats).
//! - [`Real`]: floating-point scalars, the only ones with tolerance and
//!   finiteness semantics.

use std::fmt::Debug;

/// A tuple component compared with exact (`==`) equality.
///
/// Booleans and characters only ever take part in exact comparisons. Any
/// other `Copy + PartialEq` value type can opt in with an empty impl.
pub trait Scalar: Copy + PartialEq + Debug {}

/// A scalar with an additive zero.
pub trait Numeric: Scalar {
    const ZERO: Self;

    /// Exact zero test. For floats `-0.0` is zero and NaN is not.
    #[inline]
    fn is_zero(self) -> bool {
        self == Self::ZERO
    }
}

/// A floating-point scalar.
pub trait Real: Numeric + PartialOrd {
    /// Neither infinite nor NaN.
    fn is_finite(self) -> bool;

    fn is_nan(self) -> bool;

    /// Absolute difference `|a - b|`. NaN if either side is NaN, or if both
    /// are the same infinity.
    fn distance(self, other: Self) -> Self;
}

impl Scalar for bool {}
impl Scalar for char {}

macro_rules! impl_numeric {
    ($($t:ty),* $(,)?) => {
        $(
            impl Scalar for $t {}

            impl Numeric for $t {
                const ZERO: Self = 0 as $t;
            }
        )*
    };
}

impl_numeric!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

macro_rules! impl_real {
    ($($t:ty),*) => {
        $(
            impl Real for $t {
                #[inline]
                fn is_finite(self) -> bool {
                    <$t>::is_finite(self)
                }

                #[inline]
                fn is_nan(self) -> bool {
                    <$t>::is_nan(self)
                }

                #[inline]
                fn distance(self, other: Self) -> Self {
                    (self - other).abs()
                }
            }
        )*
    };
}

impl_real!(f32, f64);
