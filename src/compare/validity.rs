// src/compare/validity.rs

//! Single-operand checks: finiteness and (near-)zero.

use crate::error::Result;
use crate::scalar::{Numeric, Real};
use crate::tolerance::{almost_zero, is_exact_zero};
use crate::tuple::TupleView;

/// True iff every component is finite (neither infinite nor NaN).
/// An empty tuple is vacuously finite.
pub fn is_finite<V>(a: &V) -> bool
where
    V: TupleView + ?Sized,
    V::Scalar: Real,
{
    a.components().all(|x| x.is_finite())
}

/// Finiteness of the component at `index`.
///
/// # Errors
/// [`IndexOutOfRange`](crate::error::TupleError::IndexOutOfRange) if `index`
/// is outside `[0, size)`.
pub fn is_finite_at<V>(index: usize, a: &V) -> Result<bool>
where
    V: TupleView + ?Sized,
    V::Scalar: Real,
{
    Ok(a.component_at(index)?.is_finite())
}

/// True iff every component is exactly zero (`-0.0` counts, NaN does not).
pub fn is_zero<V>(a: &V) -> bool
where
    V: TupleView + ?Sized,
    V::Scalar: Numeric,
{
    a.components().all(is_exact_zero)
}

/// True iff every component is within `tolerance` of zero.
pub fn is_zero_within<V>(tolerance: V::Scalar, a: &V) -> bool
where
    V: TupleView + ?Sized,
    V::Scalar: Real,
{
    a.components().all(|x| almost_zero(tolerance, x))
}

/// Exact zero test of the component at `index`.
///
/// # Errors
/// [`IndexOutOfRange`](crate::error::TupleError::IndexOutOfRange) if `index`
/// is outside `[0, size)`.
pub fn is_zero_at<V>(index: usize, a: &V) -> Result<bool>
where
    V: TupleView + ?Sized,
    V::Scalar: Numeric,
{
    Ok(is_exact_zero(a.component_at(index)?))
}

/// Tolerance variant of [`is_zero_at`].
pub fn is_zero_at_within<V>(tolerance: V::Scalar, index: usize, a: &V) -> Result<bool>
where
    V: TupleView + ?Sized,
    V::Scalar: Real,
{
    Ok(almost_zero(tolerance, a.component_at(index)?))
}
