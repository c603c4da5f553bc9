// src/tuple/dynamic.rs

//! Variable-arity tuple. The arity is chosen at construction and never changes.

use super::TupleView;
use crate::scalar::Scalar;

/// A tuple whose dimensionality is fixed when it is built.
///
/// Backed by a boxed slice, so there is no way to grow or shrink it after
/// construction.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TupleN<T> {
    components: Box<[T]>,
}

impl<T: Scalar> TupleN<T> {
    pub fn new(components: Vec<T>) -> Self {
        TupleN {
            components: components.into_boxed_slice(),
        }
    }

    pub fn from_slice(components: &[T]) -> Self {
        TupleN {
            components: components.into(),
        }
    }

    /// A tuple of `size` copies of `value`.
    pub fn filled(size: usize, value: T) -> Self {
        TupleN::new(vec![value; size])
    }

    pub fn size(&self) -> usize {
        self.components.len()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.components
    }

    pub fn into_vec(self) -> Vec<T> {
        self.components.into_vec()
    }
}

impl<T: Scalar> From<Vec<T>> for TupleN<T> {
    fn from(components: Vec<T>) -> Self {
        TupleN::new(components)
    }
}

impl<T: Scalar, const N: usize> From<[T; N]> for TupleN<T> {
    fn from(components: [T; N]) -> Self {
        TupleN::from_slice(&components)
    }
}

impl<T: Scalar> FromIterator<T> for TupleN<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        TupleN::new(iter.into_iter().collect())
    }
}

impl<T: Scalar> TupleView for TupleN<T> {
    type Scalar = T;

    #[inline]
    fn size(&self) -> usize {
        self.components.len()
    }

    #[inline]
    fn get(&self, index: usize) -> Option<T> {
        self.components.get(index).copied()
    }
}
