// src/tuple/raw.rs

//! Accessor impls for raw scalar storage and positional scalars.
//!
//! Arrays, slices and vectors carry their dimensionality as their length.
//! Plain Rust tuples `(x, y)`, `(x, y, z)` and `(x, y, z, w)` stand in for
//! scalars passed positionally.

use super::{Components2, Components3, Components4, TupleView};
use crate::scalar::Scalar;

impl<T: Scalar> TupleView for [T] {
    type Scalar = T;

    #[inline]
    fn size(&self) -> usize {
        self.len()
    }

    #[inline]
    fn get(&self, index: usize) -> Option<T> {
        <[T]>::get(self, index).copied()
    }
}

impl<T: Scalar, const N: usize> TupleView for [T; N] {
    type Scalar = T;

    #[inline]
    fn size(&self) -> usize {
        N
    }

    #[inline]
    fn get(&self, index: usize) -> Option<T> {
        self.as_slice().get(index).copied()
    }
}

impl<T: Scalar> TupleView for Vec<T> {
    type Scalar = T;

    #[inline]
    fn size(&self) -> usize {
        self.len()
    }

    #[inline]
    fn get(&self, index: usize) -> Option<T> {
        self.as_slice().get(index).copied()
    }
}

macro_rules! array_components {
    ($($n:literal),*) => {
        $(
            impl<T: Scalar> Components2 for [T; $n] {
                #[inline]
                fn v0(&self) -> T {
                    self[0]
                }

                #[inline]
                fn v1(&self) -> T {
                    self[1]
                }
            }
        )*
    };
}

array_components!(2, 3, 4);

impl<T: Scalar> Components3 for [T; 3] {
    #[inline]
    fn v2(&self) -> T {
        self[2]
    }
}

impl<T: Scalar> Components3 for [T; 4] {
    #[inline]
    fn v2(&self) -> T {
        self[2]
    }
}

impl<T: Scalar> Components4 for [T; 4] {
    #[inline]
    fn v3(&self) -> T {
        self[3]
    }
}

// --- Positional scalars ---

impl<T: Scalar> TupleView for (T, T) {
    type Scalar = T;

    #[inline]
    fn size(&self) -> usize {
        2
    }

    #[inline]
    fn get(&self, index: usize) -> Option<T> {
        match index {
            0 => Some(self.0),
            1 => Some(self.1),
            _ => None,
        }
    }
}

impl<T: Scalar> TupleView for (T, T, T) {
    type Scalar = T;

    #[inline]
    fn size(&self) -> usize {
        3
    }

    #[inline]
    fn get(&self, index: usize) -> Option<T> {
        match index {
            0 => Some(self.0),
            1 => Some(self.1),
            2 => Some(self.2),
            _ => None,
        }
    }
}

impl<T: Scalar> TupleView for (T, T, T, T) {
    type Scalar = T;

    #[inline]
    fn size(&self) -> usize {
        4
    }

    #[inline]
    fn get(&self, index: usize) -> Option<T> {
        match index {
            0 => Some(self.0),
            1 => Some(self.1),
            2 => Some(self.2),
            3 => Some(self.3),
            _ => None,
        }
    }
}

impl<T: Scalar> Components2 for (T, T) {
    #[inline]
    fn v0(&self) -> T {
        self.0
    }

    #[inline]
    fn v1(&self) -> T {
        self.1
    }
}

impl<T: Scalar> Components2 for (T, T, T) {
    #[inline]
    fn v0(&self) -> T {
        self.0
    }

    #[inline]
    fn v1(&self) -> T {
        self.1
    }
}

impl<T: Scalar> Components3 for (T, T, T) {
    #[inline]
    fn v2(&self) -> T {
        self.2
    }
}

impl<T: Scalar> Components2 for (T, T, T, T) {
    #[inline]
    fn v0(&self) -> T {
        self.0
    }

    #[inline]
    fn v1(&self) -> T {
        self.1
    }
}

impl<T: Scalar> Components3 for (T, T, T, T) {
    #[inline]
    fn v2(&self) -> T {
        self.2
    }
}

impl<T: Scalar> Components4 for (T, T, T, T) {
    #[inline]
    fn v3(&self) -> T {
        self.3
    }
}
