//! Zero-sized axis markers and the type-level product table.
//!
//! Each marker names one [`Axis`] at the type level, so that
//! `Directed<T, I> + Directed<T, J>` is a type error rather than a runtime
//! check, and `Directed<T, I> * Directed<T, J>` has type `Directed<T, K>`.

use std::fmt::Debug;
use std::hash::Hash;

use crate::assign::Component;
use crate::axis::Axis;
use crate::directed::Directed;
use crate::magnitude::Magnitude;

mod sealed {
    pub trait Sealed {}
}

/// Compile-time identity of an axis.
pub trait AxisTag:
    sealed::Sealed + Copy + Default + Debug + Eq + Hash + Send + Sync + 'static
{
    const AXIS: Axis;

    /// What a value landing on this axis looks like: the bare magnitude for
    /// `Real`, a [`Directed`] value otherwise.
    type Value<T: Magnitude>: Component<T>;

    fn wrap<T: Magnitude>(value: T) -> Self::Value<T>;
}

/// Marker for the real axis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Real;

/// Marker for the `i` axis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct I;

/// Marker for the `j` axis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct J;

/// Marker for the `k` axis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct K;

impl sealed::Sealed for Real {}

impl AxisTag for Real {
    const AXIS: Axis = Axis::Real;
    type Value<T: Magnitude> = T;

    #[inline]
    fn wrap<T: Magnitude>(value: T) -> T {
        value
    }
}

macro_rules! imaginary_tag {
    ($($tag:ident => $axis:ident),*) => {$(
        impl sealed::Sealed for $tag {}

        impl AxisTag for $tag {
            const AXIS: Axis = Axis::$axis;
            type Value<T: Magnitude> = Directed<T, $tag>;

            #[inline]
            fn wrap<T: Magnitude>(value: T) -> Directed<T, $tag> {
                Directed::new(value)
            }
        }
    )*};
}

imaginary_tag!(I => I, J => J, K => K);

/// Axes that are slots of a [`Complex`](crate::Complex).
pub trait ComplexAxis: AxisTag {}
impl ComplexAxis for Real {}
impl ComplexAxis for I {}

/// Axes that are slots of a [`Vector`](crate::Vector).
pub trait VectorAxis: AxisTag {}
impl VectorAxis for I {}
impl VectorAxis for J {}
impl VectorAxis for K {}

/// Type-level axis product: `Self * Rhs` lands on `Output`.
///
/// The sign is not part of the type; it is read from
/// [`CAYLEY`](crate::axis::CAYLEY) when the value is computed.
pub trait TagProduct<Rhs: AxisTag>: AxisTag {
    type Output: AxisTag;
}

macro_rules! tag_product {
    ($($lhs:ident * $rhs:ident => $out:ident),* $(,)?) => {
        $(impl TagProduct<$rhs> for $lhs {
            type Output = $out;
        })*
    };
}

tag_product! {
    Real * Real => Real,
    Real * I => I,
    Real * J => J,
    Real * K => K,
    I * Real => I,
    J * Real => J,
    K * Real => K,
    I * I => Real,
    J * J => Real,
    K * K => Real,
    I * J => K,
    J * K => I,
    K * I => J,
    J * I => K,
    K * J => I,
    I * K => J,
}
