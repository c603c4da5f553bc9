// src/tuple/fixed.rs

//! Fixed-arity tuples. The arity is part of the type.

use super::{Components2, Components3, Components4, TupleView};
use crate::scalar::Scalar;

/// A 2-component tuple.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Tuple2<T> {
    v0: T,
    v1: T,
}

/// A 3-component tuple.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Tuple3<T> {
    v0: T,
    v1: T,
    v2: T,
}

/// A 4-component tuple.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Tuple4<T> {
    v0: T,
    v1: T,
    v2: T,
    v3: T,
}

impl<T: Scalar> Tuple2<T> {
    pub const ARITY: usize = 2;

    pub const fn new(v0: T, v1: T) -> Self {
        Tuple2 { v0, v1 }
    }

    pub fn to_array(self) -> [T; 2] {
        [self.v0, self.v1]
    }
}

impl<T: Scalar> Tuple3<T> {
    pub const ARITY: usize = 3;

    pub const fn new(v0: T, v1: T, v2: T) -> Self {
        Tuple3 { v0, v1, v2 }
    }

    pub fn to_array(self) -> [T; 3] {
        [self.v0, self.v1, self.v2]
    }
}

impl<T: Scalar> Tuple4<T> {
    pub const ARITY: usize = 4;

    pub const fn new(v0: T, v1: T, v2: T, v3: T) -> Self {
        Tuple4 { v0, v1, v2, v3 }
    }

    pub fn to_array(self) -> [T; 4] {
        [self.v0, self.v1, self.v2, self.v3]
    }
}

impl<T: Scalar> From<[T; 2]> for Tuple2<T> {
    fn from([v0, v1]: [T; 2]) -> Self {
        Tuple2::new(v0, v1)
    }
}

impl<T: Scalar> From<[T; 3]> for Tuple3<T> {
    fn from([v0, v1, v2]: [T; 3]) -> Self {
        Tuple3::new(v0, v1, v2)
    }
}

impl<T: Scalar> From<[T; 4]> for Tuple4<T> {
    fn from([v0, v1, v2, v3]: [T; 4]) -> Self {
        Tuple4::new(v0, v1, v2, v3)
    }
}

impl<T: Scalar> TupleView for Tuple2<T> {
    type Scalar = T;

    #[inline]
    fn size(&self) -> usize {
        Self::ARITY
    }

    #[inline]
    fn get(&self, index: usize) -> Option<T> {
        match index {
            0 => Some(self.v0),
            1 => Some(self.v1),
            _ => None,
        }
    }
}

impl<T: Scalar> TupleView for Tuple3<T> {
    type Scalar = T;

    #[inline]
    fn size(&self) -> usize {
        Self::ARITY
    }

    #[inline]
    fn get(&self, index: usize) -> Option<T> {
        match index {
            0 => Some(self.v0),
            1 => Some(self.v1),
            2 => Some(self.v2),
            _ => None,
        }
    }
}

impl<T: Scalar> TupleView for Tuple4<T> {
    type Scalar = T;

    #[inline]
    fn size(&self) -> usize {
        Self::ARITY
    }

    #[inline]
    fn get(&self, index: usize) -> Option<T> {
        match index {
            0 => Some(self.v0),
            1 => Some(self.v1),
            2 => Some(self.v2),
            3 => Some(self.v3),
            _ => None,
        }
    }
}

// Named accessors. Each struct implements every level its arity reaches.
macro_rules! components2 {
    ($($ty:ident),*) => {
        $(
            impl<T: Scalar> Components2 for $ty<T> {
                #[inline]
                fn v0(&self) -> T {
                    self.v0
                }

                #[inline]
                fn v1(&self) -> T {
                    self.v1
                }
            }
        )*
    };
}

components2!(Tuple2, Tuple3, Tuple4);

impl<T: Scalar> Components3 for Tuple3<T> {
    #[inline]
    fn v2(&self) -> T {
        self.v2
    }
}

impl<T: Scalar> Components3 for Tuple4<T> {
    #[inline]
    fn v2(&self) -> T {
        self.v2
    }
}

impl<T: Scalar> Components4 for Tuple4<T> {
    #[inline]
    fn v3(&self) -> T {
        self.v3
    }
}
