// src/tolerance.rs

//! Scalar tolerance tests.
//!
//! Every approximate comparison in the crate goes through [`almost_equal`]
//! or [`almost_zero`]; nothing else encodes numeric policy.

use crate::scalar::{Numeric, Real};

/// True iff `a` and `b` are within `tolerance` of each other.
///
/// Exact equality always counts, so a tolerance of zero behaves exactly like
/// `==`: `+0.0` equals `-0.0`, an infinity equals itself, and NaN equals
/// nothing. A negative or NaN tolerance admits nothing beyond `==`.
#[inline]
pub fn almost_equal<T: Real>(tolerance: T, a: T, b: T) -> bool {
    a == b || a.distance(b) <= tolerance
}

/// True iff `a` is within `tolerance` of zero.
#[inline]
pub fn almost_zero<T: Real>(tolerance: T, a: T) -> bool {
    almost_equal(tolerance, a, T::ZERO)
}

/// Exact zero test for any numeric scalar.
#[inline]
pub fn is_exact_zero<T: Numeric>(a: T) -> bool {
    a.is_zero()
}
