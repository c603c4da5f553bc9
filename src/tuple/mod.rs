// src/tuple/mod.rs

//! The scalar accessor contract and the tuple representations that implement it.
//!
//! A tuple is anything that can report its dimensionality and hand out a
//! scalar per index. The comparison protocol in [`crate::compare`] is written
//! only against [`TupleView`], so fixed tuples ([`Tuple2`], [`Tuple3`],
//! [`Tuple4`]), the dynamic [`TupleN`], raw arrays/slices/vectors and plain
//! Rust tuples of scalars all compare against each other through one code path.

use std::iter::FusedIterator;

use crate::error::{Result, TupleError};
use crate::scalar::Scalar;

mod dynamic;
mod fixed;
mod raw;

pub use dynamic::TupleN;
pub use fixed::{Tuple2, Tuple3, Tuple4};

/// Read-only view over the components of a tuple.
pub trait TupleView {
    type Scalar: Scalar;

    /// Number of components.
    fn size(&self) -> usize;

    /// Component at `index`, or `None` outside `[0, size)`.
    fn get(&self, index: usize) -> Option<Self::Scalar>;

    /// Component at `index`.
    ///
    /// # Errors
    /// [`TupleError::IndexOutOfRange`] if `index` is outside `[0, size)`.
    fn component_at(&self, index: usize) -> Result<Self::Scalar> {
        self.get(index).ok_or_else(|| {
            let size = self.size();
            log::trace!("component_at({}) on tuple of size {}", index, size);
            TupleError::IndexOutOfRange { index, size }
        })
    }

    /// Iterates the components in index order.
    fn components(&self) -> Components<'_, Self> {
        Components {
            view: self,
            front: 0,
            back: self.size(),
        }
    }
}

/// Named access to the first two components.
pub trait Components2: TupleView {
    fn v0(&self) -> Self::Scalar;
    fn v1(&self) -> Self::Scalar;
}

/// Named access to the first three components.
pub trait Components3: Components2 {
    fn v2(&self) -> Self::Scalar;
}

/// Named access to all four components.
pub trait Components4: Components3 {
    fn v3(&self) -> Self::Scalar;
}

/// Iterator returned by [`TupleView::components`].
pub struct Components<'a, V: TupleView + ?Sized> {
    view: &'a V,
    front: usize,
    back: usize,
}

impl<V: TupleView + ?Sized> Iterator for Components<'_, V> {
    type Item = V::Scalar;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let item = self.view.get(self.front);
        self.front += 1;
        item
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<V: TupleView + ?Sized> DoubleEndedIterator for Components<'_, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        self.view.get(self.back)
    }
}

impl<V: TupleView + ?Sized> ExactSizeIterator for Components<'_, V> {}
impl<V: TupleView + ?Sized> FusedIterator for Components<'_, V> {}
