// src/lib.rs

//! Small numeric tuples and a comparison protocol that works across every
//! way a caller might hold one.
//!
//! A tuple can be a fixed-arity struct ([`Tuple2`], [`Tuple3`], [`Tuple4`]),
//! a dynamic [`TupleN`], a raw array, slice or `Vec`, or plain positional
//! scalars such as `(x, y, z)`. Any two of them can be compared exactly or
//! within a tolerance, per component or as a whole, and any one of them can
//! be checked for finiteness or (near-)zero.
//!
//! ```
//! use ntuple::prelude::*;
//!
//! let t = Tuple3::new(1.0, 2.0, 3.0005);
//! assert!(equals_within(0.001, &t, &[1.0, 2.0, 3.0]));
//! assert!(!equals(&t, &vec![1.0, 2.0, 3.0, 4.0]));
//! assert!(equals_at(3, &t, &t).is_err());
//! assert!(is_zero(&Tuple3::new(0.0, -0.0, 0.0)));
//! ```

pub mod cli;
pub mod compare;
pub mod config;
pub mod error;
pub mod scalar;
pub mod tolerance;
pub mod tuple;

pub use error::{Result, TupleError};
pub use tuple::{Tuple2, Tuple3, Tuple4, TupleN};

/// Everything needed to build tuples and compare them.
pub mod prelude {
    pub use crate::compare::*;
    pub use crate::error::TupleError;
    pub use crate::scalar::{Numeric, Real, Scalar};
    pub use crate::tolerance::{almost_equal, almost_zero, is_exact_zero};
    pub use crate::tuple::{
        Components2, Components3, Components4, Tuple2, Tuple3, Tuple4, TupleN, TupleView,
    };
}
