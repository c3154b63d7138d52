//! Magnitude types carried by directed values and composite slots.

use std::fmt::{Debug, Display};
use std::str::FromStr;

use half::f16;
use num_traits::{Float, NumAssign};

/// A floating-point magnitude.
///
/// Implemented for `f16` (reduced), `f32`, and `f64` (default precision).
/// IEEE NaN/Infinity propagate through every operation untouched.
pub trait Magnitude:
    Float + NumAssign + Default + Debug + Display + FromStr + Send + Sync + 'static
{
    /// Short name, as accepted by the CLI `--precision` flag.
    const NAME: &'static str;
}

impl Magnitude for f16 {
    const NAME: &'static str = "f16";
}

impl Magnitude for f32 {
    const NAME: &'static str = "f32";
}

impl Magnitude for f64 {
    const NAME: &'static str = "f64";
}

/// Common type of two magnitudes: the wider of the two.
///
/// Both operands convert losslessly into `Common`. Every magnitude promotes
/// to itself, so generic code over one `T` needs no extra bounds.
pub trait Promote<Rhs: Magnitude>: Magnitude {
    type Common: Magnitude + From<Self> + From<Rhs>;
}

/// Common magnitude type of `T` and `U`.
pub type Common<T, U> = <T as Promote<U>>::Common;

impl<T: Magnitude> Promote<T> for T {
    type Common = T;
}

macro_rules! promote {
    ($($lhs:ty, $rhs:ty => $out:ty;)*) => {
        $(impl Promote<$rhs> for $lhs {
            type Common = $out;
        })*
    };
}

promote! {
    f16, f32 => f32;
    f16, f64 => f64;
    f32, f16 => f32;
    f32, f64 => f64;
    f64, f16 => f64;
    f64, f32 => f64;
}

/// Left operand of a mixed pair, widened to the common type.
#[inline]
pub fn widen_lhs<T: Promote<U>, U: Magnitude>(value: T) -> Common<T, U> {
    <Common<T, U> as From<T>>::from(value)
}

/// Right operand of a mixed pair, widened to the common type.
#[inline]
pub fn widen_rhs<T: Promote<U>, U: Magnitude>(value: U) -> Common<T, U> {
    <Common<T, U> as From<U>>::from(value)
}
