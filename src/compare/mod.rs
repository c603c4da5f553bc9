// src/compare/mod.rs

//! Cross-representation comparison and validity checks.
//!
//! Every operation here is written once against [`TupleView`], so any pair of
//! representations (fixed tuple, [`TupleN`](crate::tuple::TupleN), raw array,
//! slice, vector, positional scalars) compares through the same code path.
//!
//! Two-operand operations accept an [`Operand`]: either `&V`, which is always
//! present, or `Option<&V>`, which may be absent. Checks run in a fixed order:
//!
//! 1. Null rule: both absent is `true`, exactly one absent is `false`.
//! 2. Dimensionality: differing sizes give `false`, never an error.
//! 3. Index (indexed forms only): outside `[0, size)` is
//!    [`TupleError::IndexOutOfRange`](crate::error::TupleError).
//! 4. Components, exactly or through [`almost_equal`].

use crate::error::Result;
use crate::scalar::{Real, Scalar};
use crate::tolerance::almost_equal;
use crate::tuple::{Components2, Components3, Components4, TupleView};

mod validity;

pub use validity::{
    is_finite, is_finite_at, is_zero, is_zero_at, is_zero_at_within, is_zero_within,
};

/// A possibly-absent tuple operand.
pub trait Operand {
    type Scalar: Scalar;
    type View: TupleView<Scalar = Self::Scalar> + ?Sized;

    /// The tuple, or `None` if the operand is absent.
    fn view(&self) -> Option<&Self::View>;
}

impl<V: TupleView + ?Sized> Operand for &V {
    type Scalar = V::Scalar;
    type View = V;

    #[inline]
    fn view(&self) -> Option<&V> {
        Some(*self)
    }
}

impl<V: TupleView + ?Sized> Operand for Option<&V> {
    type Scalar = V::Scalar;
    type View = V;

    #[inline]
    fn view(&self) -> Option<&V> {
        *self
    }
}

/// Outcome of the null and dimensionality checks shared by every
/// two-operand operation.
enum Paired<'a, A: ?Sized, B: ?Sized> {
    Settled(bool),
    Compare(&'a A, &'a B),
}

fn pair<'a, A, B>(a: &'a A, b: &'a B) -> Paired<'a, A::View, B::View>
where
    A: Operand,
    B: Operand<Scalar = A::Scalar>,
{
    match (a.view(), b.view()) {
        (None, None) => Paired::Settled(true),
        (None, Some(_)) | (Some(_), None) => Paired::Settled(false),
        (Some(a), Some(b)) => {
            if a.size() != b.size() {
                log::trace!("dimension mismatch: {} vs {}", a.size(), b.size());
                return Paired::Settled(false);
            }
            Paired::Compare(a, b)
        }
    }
}

fn all_components<A, B, F>(a: A, b: B, same: F) -> bool
where
    A: Operand,
    B: Operand<Scalar = A::Scalar>,
    F: Fn(A::Scalar, A::Scalar) -> bool,
{
    match pair(&a, &b) {
        Paired::Settled(result) => result,
        Paired::Compare(a, b) => a
            .components()
            .zip(b.components())
            .all(|(x, y)| same(x, y)),
    }
}

fn component<A, B, F>(index: usize, a: A, b: B, same: F) -> Result<bool>
where
    A: Operand,
    B: Operand<Scalar = A::Scalar>,
    F: Fn(A::Scalar, A::Scalar) -> bool,
{
    match pair(&a, &b) {
        Paired::Settled(result) => Ok(result),
        Paired::Compare(a, b) => Ok(same(a.component_at(index)?, b.component_at(index)?)),
    }
}

fn named<A, B, F>(
    a: A,
    b: B,
    pick_a: fn(&A::View) -> A::Scalar,
    pick_b: fn(&B::View) -> A::Scalar,
    same: F,
) -> bool
where
    A: Operand,
    B: Operand<Scalar = A::Scalar>,
    F: Fn(A::Scalar, A::Scalar) -> bool,
{
    match pair(&a, &b) {
        Paired::Settled(result) => result,
        Paired::Compare(a, b) => same(pick_a(a), pick_b(b)),
    }
}

/// Exact whole-tuple equality.
///
/// ```
/// use ntuple::compare::equals;
/// use ntuple::tuple::Tuple3;
///
/// let t = Tuple3::new(1.0, 2.0, 3.0);
/// assert!(equals(&t, &[1.0, 2.0, 3.0]));
/// assert!(!equals(&t, &[1.0, 2.0, 3.0, 4.0]));
/// assert!(equals(None::<&Tuple3<f64>>, None::<&Vec<f64>>));
/// ```
pub fn equals<A, B>(a: A, b: B) -> bool
where
    A: Operand,
    B: Operand<Scalar = A::Scalar>,
{
    all_components(a, b, |x, y| x == y)
}

/// Whole-tuple equality with every component pair compared by
/// [`almost_equal`].
pub fn equals_within<A, B>(tolerance: A::Scalar, a: A, b: B) -> bool
where
    A: Operand,
    A::Scalar: Real,
    B: Operand<Scalar = A::Scalar>,
{
    all_components(a, b, |x, y| almost_equal(tolerance, x, y))
}

/// Exact equality of the component at `index`.
///
/// # Errors
/// [`IndexOutOfRange`](crate::error::TupleError::IndexOutOfRange) when both
/// operands are present, have the same size, and `index` is outside it.
pub fn equals_at<A, B>(index: usize, a: A, b: B) -> Result<bool>
where
    A: Operand,
    B: Operand<Scalar = A::Scalar>,
{
    component(index, a, b, |x, y| x == y)
}

/// Tolerance variant of [`equals_at`].
pub fn equals_at_within<A, B>(tolerance: A::Scalar, index: usize, a: A, b: B) -> Result<bool>
where
    A: Operand,
    A::Scalar: Real,
    B: Operand<Scalar = A::Scalar>,
{
    component(index, a, b, |x, y| almost_equal(tolerance, x, y))
}

// Named per-component sugar. The accessor traits guarantee the index exists,
// so these cannot fail.
macro_rules! named_equals {
    ($($exact:ident, $within:ident, $bound:ident, $accessor:ident);* $(;)?) => {
        $(
            #[doc = concat!("Exact equality of `", stringify!($accessor), "`.")]
            pub fn $exact<A, B>(a: A, b: B) -> bool
            where
                A: Operand,
                A::View: $bound,
                B: Operand<Scalar = A::Scalar>,
                B::View: $bound,
            {
                named(a, b, |v| v.$accessor(), |v| v.$accessor(), |x, y| x == y)
            }

            #[doc = concat!("Tolerance equality of `", stringify!($accessor), "`.")]
            pub fn $within<A, B>(tolerance: A::Scalar, a: A, b: B) -> bool
            where
                A: Operand,
                A::Scalar: Real,
                A::View: $bound,
                B: Operand<Scalar = A::Scalar>,
                B::View: $bound,
            {
                named(a, b, |v| v.$accessor(), |v| v.$accessor(), |x, y| {
                    almost_equal(tolerance, x, y)
                })
            }
        )*
    };
}

named_equals! {
    equals_v0, equals_v0_within, Components2, v0;
    equals_v1, equals_v1_within, Components2, v1;
    equals_v2, equals_v2_within, Components3, v2;
    equals_v3, equals_v3_within, Components4, v3;
}

#[cfg(test)]
mod tests;
