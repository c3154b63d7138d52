//! # kore-hypercomplex
//!
//! Axis-tagged hypercomplex numbers for Kore.
//!
//! Provides real scalars, complex numbers, 3-vectors and quaternions built
//! from directed values (a magnitude on one of the axes `1, i, j, k`):
//! - Type-level axis tags, so cross-axis `+` does not build
//! - Compile-time Cayley table for the axis product
//! - One generic Distributor for every composite product
//! - Assignment by axis for construction and compound assignment
//! - Auto-widening of unlike axes through [`combine`]
//! - Mixed-precision operands promote to the wider magnitude
//!
//! ```
//! use kore_hypercomplex::{ijk, Quaternion};
//!
//! let q1 = Quaternion::from_components((1.0, ijk!(2 i), ijk!(3 j), ijk!(4 k)));
//! let q2 = Quaternion::new(5.0, 6.0, 7.0, 8.0);
//!
//! assert_eq!(q1.to_string(), "{1, 2, 3, 4}");
//! assert_eq!(q1 * q2, Quaternion::new(-60.0, 12.0, 30.0, 24.0));
//! assert_eq!(q2 * q1, Quaternion::new(-60.0, 20.0, 14.0, 32.0));
//! ```
//!
//! Operands of different precision meet at the wider one:
//!
//! ```
//! use kore_hypercomplex::{Complex, Quaternion, K};
//!
//! let z: Complex<f64> = 3.0f32 * Complex::new(1.0f64, 1.0);
//! assert_eq!(z, Complex::new(3.0, 3.0));
//!
//! let q: Quaternion<f64> = Quaternion::new(1.0f32, 0.0, 0.0, 0.0) + K::new(2.0f64);
//! assert_eq!(q.to_string(), "{1, 0, 0, 2}");
//! ```
//!
//! Invalid arithmetic is rejected by the compiler. Two arguments on one axis:
//!
//! ```compile_fail
//! use kore_hypercomplex::{Quaternion, I};
//! let q: Quaternion<f64> = Quaternion::from_components((I::new(1.0), I::new(2.0)));
//! ```
//!
//! An argument on an axis the shape does not have:
//!
//! ```compile_fail
//! use kore_hypercomplex::{Vector, J};
//! let v: Vector<f64> = Vector::from_components((1.0, J::new(2.0)));
//! ```
//!
//! Adding values on different axes without [`combine`]:
//!
//! ```compile_fail
//! use kore_hypercomplex::{I, J};
//! let x = I::new(1.0) + J::new(2.0);
//! ```
//!
//! Adding a scalar to a shape with no real slot:
//!
//! ```compile_fail
//! use kore_hypercomplex::Vector;
//! let v = 1.0 + Vector::new(1.0, 2.0, 3.0);
//! ```
//!
//! Distributing a product into a shape that would drop terms:
//!
//! ```compile_fail
//! use kore_hypercomplex::distribute::product;
//! use kore_hypercomplex::{Complex, I, J};
//! let z: Complex<f64> = product(&I::new(1.0), &J::new(1.0));
//! ```

pub mod assign;
pub mod axis;
pub mod combine;
pub mod complex;
pub mod directed;
pub mod distribute;
pub mod error;
pub mod literal;
pub mod magnitude;
pub mod parse;
pub mod quaternion;
pub mod shape;
pub mod tag;
pub mod vector;

pub use axis::{Axis, AxisProduct, Sign, CAYLEY};
pub use combine::{combine, combine_sub, Combine};
pub use complex::Complex;
pub use directed::{Directed, Re, I, J, K};
pub use error::{ParseError, Result};
pub use magnitude::{Common, Magnitude, Promote};
pub use quaternion::Quaternion;
pub use vector::Vector;

#[doc(hidden)]
pub use half;
