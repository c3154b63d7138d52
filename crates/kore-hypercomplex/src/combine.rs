//! Auto-widening: two single-axis values on different axes become the
//! smallest composite whose slots cover both.
//!
//! | axes        | shape        |
//! |-------------|--------------|
//! | Real, I     | `Complex`    |
//! | I, J, K     | `Vector`     |
//! | Real, J / K | `Quaternion` |
//!
//! `+` between two directed values on different axes stays a type error;
//! widening is always spelled [`combine`] (or [`combine_sub`] for `-`).
//! Components of different precision widen to the common magnitude.

use crate::assign::{AxisAssign, Component};
use crate::complex::Complex;
use crate::directed::Directed;
use crate::magnitude::{Common, Magnitude, Promote};
use crate::quaternion::Quaternion;
use crate::shape::Composite;
use crate::tag::{self, AxisTag};
use crate::vector::Vector;

/// Smallest composite covering `Self` and `Rhs`. Defined for distinct axes
/// only; same-axis values add with `+`.
pub trait Widen<Rhs: AxisTag>: AxisTag {
    type Shape<T: Magnitude>: Composite<T>;
}

macro_rules! widen {
    ($($a:ident + $b:ident => $shape:ident),* $(,)?) => {$(
        impl Widen<tag::$b> for tag::$a {
            type Shape<T: Magnitude> = $shape<T>;
        }
    )*};
}

widen! {
    Real + I => Complex,
    I + Real => Complex,
    Real + J => Quaternion,
    J + Real => Quaternion,
    Real + K => Quaternion,
    K + Real => Quaternion,
    I + J => Vector,
    J + I => Vector,
    J + K => Vector,
    K + J => Vector,
    I + K => Vector,
    K + I => Vector,
}

/// A single component that can take part in widening: a bare magnitude
/// (tagged `Real`) or a directed value.
pub trait Combine<T: Magnitude>: Component<T> {
    type Tag: AxisTag;

    /// Method form of [`combine`].
    fn combine<U, B>(self, rhs: B) -> Widened<T, U, Self, B>
    where
        T: Promote<U>,
        U: Magnitude,
        B: Combine<U>,
        Self::Tag: Widen<B::Tag>,
    {
        combine::<T, U, Self, B>(self, rhs)
    }

    /// Method form of [`combine_sub`].
    fn combine_sub<U, B>(self, rhs: B) -> Widened<T, U, Self, B>
    where
        T: Promote<U>,
        U: Magnitude,
        B: Combine<U>,
        Self::Tag: Widen<B::Tag>,
    {
        combine_sub::<T, U, Self, B>(self, rhs)
    }
}

impl<T: Magnitude> Combine<T> for T {
    type Tag = tag::Real;
}

impl<T: Magnitude, A: AxisTag> Combine<T> for Directed<T, A> {
    type Tag = A;
}

/// Result shape of `combine(a, b)`: the widened shape over the common
/// magnitude of `T` and `U`.
pub type Widened<T, U, A, B> =
    <<A as Combine<T>>::Tag as Widen<<B as Combine<U>>::Tag>>::Shape<Common<T, U>>;

/// Fold two components on different axes into their smallest common
/// composite. Every other slot is zero.
///
/// ```
/// use kore_hypercomplex::{combine, Complex, Vector, I, J, K};
///
/// let z: Complex<f64> = combine(1.5, I::new(2.0));
/// assert_eq!(z, Complex::new(1.5, 2.0));
///
/// let v: Vector<f64> = combine(K::new(3.0), J::new(1.0));
/// assert_eq!(v.to_string(), "{0, 1, 3}");
/// ```
pub fn combine<T, U, A, B>(a: A, b: B) -> Widened<T, U, A, B>
where
    T: Promote<U>,
    U: Magnitude,
    A: Combine<T>,
    B: Combine<U>,
    A::Tag: Widen<B::Tag>,
{
    let mut out: Widened<T, U, A, B> = Default::default();
    out.add_assign_by_axis::<T, A>(a);
    out.add_assign_by_axis::<U, B>(b);
    out
}

/// `a - b` across two axes: like [`combine`], with `b` negated.
///
/// ```
/// use kore_hypercomplex::{combine_sub, Quaternion, J};
///
/// let q: Quaternion<f64> = combine_sub(2.0, J::new(3.0));
/// assert_eq!(q.to_string(), "{2, 0, -3, 0}");
/// ```
pub fn combine_sub<T, U, A, B>(a: A, b: B) -> Widened<T, U, A, B>
where
    T: Promote<U>,
    U: Magnitude,
    A: Combine<T>,
    B: Combine<U>,
    A::Tag: Widen<B::Tag>,
{
    let mut out: Widened<T, U, A, B> = Default::default();
    out.add_assign_by_axis::<T, A>(a);
    out.sub_assign_by_axis::<U, B>(b);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directed::{I, J, K};

    #[test]
    fn test_real_and_i_is_complex() {
        let z: Complex<f64> = combine(2.0, I::new(3.0));
        assert_eq!(z, Complex::new(2.0, 3.0));
        let w: Complex<f64> = combine(I::new(3.0), 2.0);
        assert_eq!(w, z);
    }

    #[test]
    fn test_imaginary_pairs_are_vectors() {
        let v: Vector<f32> = combine(I::new(1.0f32), J::new(2.0f32));
        assert_eq!(v, Vector::new(1.0f32, 2.0, 0.0));
        let v: Vector<f32> = combine(K::new(3.0f32), I::new(1.0f32));
        assert_eq!(v, Vector::new(1.0f32, 0.0, 3.0));
    }

    #[test]
    fn test_real_and_jk_is_quaternion() {
        let q: Quaternion<f64> = combine(1.0, K::new(4.0));
        assert_eq!(q, Quaternion::new(1.0, 0.0, 0.0, 4.0));
        let q: Quaternion<f64> = combine(J::new(3.0), 1.0);
        assert_eq!(q, Quaternion::new(1.0, 0.0, 3.0, 0.0));
    }

    #[test]
    fn test_method_form() {
        let v = I::new(1.0).combine(K::new(2.0));
        assert_eq!(v, Vector::new(1.0, 0.0, 2.0));
    }

    #[test]
    fn test_mixed_precision() {
        let z: Complex<f64> = combine(2.0f32, I::new(3.0f64));
        assert_eq!(z, Complex::new(2.0, 3.0));
        let v: Vector<f32> = combine(J::new(half::f16::ONE), K::new(2.5f32));
        assert_eq!(v, Vector::new(0.0f32, 1.0, 2.5));
    }

    #[test]
    fn test_sub_across_axes() {
        let q: Quaternion<f64> = combine_sub(K::new(4.0), 1.0);
        assert_eq!(q, Quaternion::new(-1.0, 0.0, 0.0, 4.0));
        let v: Vector<f64> = combine_sub(I::new(1.0), J::new(2.0));
        assert_eq!(v, Vector::new(1.0, -2.0, 0.0));
        let w = J::new(1.0f32).combine_sub(I::new(1.0f32));
        assert_eq!(w, Vector::new(-1.0f32, 1.0, 0.0));
        let z: Complex<f64> = combine_sub(I::new(2.0f64), -3.0f32);
        assert_eq!(z, Complex::new(3.0, 2.0));
    }

    #[test]
    fn test_fold_continues_with_plus() {
        let q = combine(1.0, J::new(3.0)) + I::new(2.0) + K::new(4.0);
        assert_eq!(q.to_string(), "{1, 2, 3, 4}");
    }
}
