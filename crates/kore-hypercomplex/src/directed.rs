//! Directed values: a magnitude tagged with one axis.
//!
//! `Directed<T, A>` carries its axis only in the type. Same-axis addition and
//! subtraction are plain `+`/`-`; cross-axis addition has no impl and fails to
//! build. Multiplication resolves through the axis-product table, so
//! `I * J` is a `K` and `I * I` is a bare `T`.

use std::cmp::Ordering;
use std::fmt;
use std::marker::PhantomData;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use half::f16;

use crate::axis::Axis;
use crate::magnitude::{widen_lhs, widen_rhs, Common, Magnitude, Promote};
use crate::tag::{self, AxisTag, TagProduct};

/// A magnitude paired with a fixed axis.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        transparent,
        bound(serialize = "T: serde::Serialize", deserialize = "T: serde::Deserialize<'de>")
    )
)]
pub struct Directed<T, A> {
    value: T,
    #[cfg_attr(feature = "serde", serde(skip))]
    axis: PhantomData<A>,
}

/// Real-axis carrier. Products never produce it; they yield bare `T`.
pub type Re<T> = Directed<T, tag::Real>;
pub type I<T> = Directed<T, tag::I>;
pub type J<T> = Directed<T, tag::J>;
pub type K<T> = Directed<T, tag::K>;

impl<T: Magnitude, A: AxisTag> Directed<T, A> {
    #[inline]
    pub const fn new(value: T) -> Self {
        Self { value, axis: PhantomData }
    }

    pub fn zero() -> Self {
        Self::new(T::zero())
    }

    #[inline]
    pub fn value(self) -> T {
        self.value
    }

    pub fn axis(self) -> Axis {
        A::AXIS
    }

    /// Convert to a wider magnitude type, keeping the axis.
    pub fn cast<U: Magnitude + From<T>>(self) -> Directed<U, A> {
        Directed::new(<U as From<T>>::from(self.value))
    }

    #[inline]
    pub(crate) fn value_mut(&mut self) -> &mut T {
        &mut self.value
    }
}

impl<T: Clone, A> Clone for Directed<T, A> {
    fn clone(&self) -> Self {
        Self { value: self.value.clone(), axis: PhantomData }
    }
}

impl<T: Copy, A> Copy for Directed<T, A> {}

impl<T: Magnitude, A: AxisTag> Default for Directed<T, A> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<T: fmt::Debug, A: AxisTag> fmt::Debug for Directed<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Directed").field(&self.value).field(&A::AXIS).finish()
    }
}

/// Renders as `<magnitude><axis-letter>`, e.g. `2.5j`.
impl<T: Magnitude, A: AxisTag> fmt::Display for Directed<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)?;
        f.write_str(A::AXIS.letter())
    }
}

impl<T: Promote<U>, U: Magnitude, A: AxisTag> PartialEq<Directed<U, A>> for Directed<T, A> {
    fn eq(&self, other: &Directed<U, A>) -> bool {
        widen_lhs::<T, U>(self.value) == widen_rhs::<T, U>(other.value)
    }
}

impl<T: Promote<U>, U: Magnitude, A: AxisTag> PartialOrd<Directed<U, A>> for Directed<T, A> {
    fn partial_cmp(&self, other: &Directed<U, A>) -> Option<Ordering> {
        widen_lhs::<T, U>(self.value).partial_cmp(&widen_rhs::<T, U>(other.value))
    }
}

impl<T: Magnitude, A: AxisTag> Neg for Directed<T, A> {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.value)
    }
}

impl<T: Promote<U>, U: Magnitude, A: AxisTag> Add<Directed<U, A>> for Directed<T, A> {
    type Output = Directed<Common<T, U>, A>;
    fn add(self, rhs: Directed<U, A>) -> Self::Output {
        Directed::new(widen_lhs::<T, U>(self.value) + widen_rhs::<T, U>(rhs.value))
    }
}

impl<T: Promote<U>, U: Magnitude, A: AxisTag> Sub<Directed<U, A>> for Directed<T, A> {
    type Output = Directed<Common<T, U>, A>;
    fn sub(self, rhs: Directed<U, A>) -> Self::Output {
        Directed::new(widen_lhs::<T, U>(self.value) - widen_rhs::<T, U>(rhs.value))
    }
}

impl<T: Magnitude, A: AxisTag> AddAssign for Directed<T, A> {
    fn add_assign(&mut self, rhs: Self) {
        self.value += rhs.value;
    }
}

impl<T: Magnitude, A: AxisTag> SubAssign for Directed<T, A> {
    fn sub_assign(&mut self, rhs: Self) {
        self.value -= rhs.value;
    }
}

/// `a * b` with both operands tagged: magnitude is `sign * a * b` in the
/// common type, landing on the axis the product table assigns to `(A, B)`.
impl<T, U, A, B> Mul<Directed<U, B>> for Directed<T, A>
where
    T: Promote<U>,
    U: Magnitude,
    A: TagProduct<B>,
    B: AxisTag,
{
    type Output = <<A as TagProduct<B>>::Output as AxisTag>::Value<Common<T, U>>;
    fn mul(self, rhs: Directed<U, B>) -> Self::Output {
        let entry = crate::axis::lookup(A::AXIS, B::AXIS);
        let value = widen_lhs::<T, U>(self.value) * widen_rhs::<T, U>(rhs.value);
        <<A as TagProduct<B>>::Output as AxisTag>::wrap(entry.sign.apply(value))
    }
}

impl<T: Magnitude, A: AxisTag> Mul<T> for Directed<T, A> {
    type Output = Self;
    fn mul(self, rhs: T) -> Self {
        Self::new(self.value * rhs)
    }
}

impl<T: Magnitude, A: AxisTag> Div<T> for Directed<T, A> {
    type Output = Self;
    fn div(self, rhs: T) -> Self {
        Self::new(self.value / rhs)
    }
}

impl<T: Magnitude, A: AxisTag> MulAssign<T> for Directed<T, A> {
    fn mul_assign(&mut self, rhs: T) {
        self.value *= rhs;
    }
}

impl<T: Magnitude, A: AxisTag> DivAssign<T> for Directed<T, A> {
    fn div_assign(&mut self, rhs: T) {
        self.value /= rhs;
    }
}

macro_rules! scalar_lhs_mul {
    ($($t:ty),*) => {$(
        impl<A: AxisTag> Mul<Directed<$t, A>> for $t {
            type Output = Directed<$t, A>;
            fn mul(self, rhs: Directed<$t, A>) -> Directed<$t, A> {
                Directed::new(self * rhs.value)
            }
        }
    )*};
}

scalar_lhs_mul!(f16, f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    const PLUS_I: I<f64> = I::new(1.0);
    const PLUS_J: J<f64> = J::new(1.0);
    const PLUS_K: K<f64> = K::new(1.0);

    #[test]
    fn test_equality() {
        assert_eq!(PLUS_I, I::new(1.0));
        assert_ne!(PLUS_I, I::new(123.456));
        assert_eq!(PLUS_J, -J::new(-1.0));
    }

    #[test]
    fn test_same_axis_add_sub() {
        assert_eq!(PLUS_K + PLUS_K, K::new(2.0));
        assert_eq!(K::new(3.0) - PLUS_K, K::new(2.0));
        assert_eq!(PLUS_K - PLUS_K, K::<f64>::zero());
        assert_eq!(PLUS_K + PLUS_K, 2.0 * PLUS_K);
    }

    #[test]
    fn test_axis_identities() {
        assert_eq!(PLUS_J * PLUS_K, PLUS_I);
        assert_eq!(PLUS_K * PLUS_J, -PLUS_I);
        assert_eq!(PLUS_I * PLUS_K, -PLUS_J);
        assert_eq!(PLUS_K * PLUS_I, PLUS_J);
        assert_eq!(PLUS_I * PLUS_J, PLUS_K);
        assert_eq!(PLUS_J * PLUS_I, -PLUS_K);
    }

    #[test]
    fn test_same_axis_product_is_bare_scalar() {
        let sq: f64 = I::new(1.0) * I::new(2.0);
        assert_eq!(sq, -2.0);
        let sq: f64 = K::new(3.0) * K::new(3.0);
        assert_eq!(sq, -9.0);
    }

    #[test]
    fn test_triple_product() {
        let ijk: f64 = PLUS_I * PLUS_J * PLUS_K;
        assert_eq!(ijk, -1.0);
    }

    #[test]
    fn test_real_tag_product() {
        let r: Re<f64> = Re::new(2.0);
        let j: J<f64> = r * J::new(3.0);
        assert_eq!(j, J::new(6.0));
        let rr: f64 = r * r;
        assert_eq!(rr, 4.0);
    }

    #[test]
    fn test_scalar_mul() {
        assert_eq!(PLUS_I * 3.0, I::new(3.0));
        assert_eq!(3.0 * PLUS_I, I::new(3.0));
        assert_eq!(2.0f32 * J::new(1.5f32), J::new(3.0f32));
        assert_eq!(I::new(3.0) / 2.0, I::new(1.5));
    }

    #[test]
    fn test_promotion() {
        let sum = J::new(1.0f32) + J::new(0.5f64);
        let widened: J<f64> = sum;
        assert_eq!(widened, J::new(1.5f64));
        assert_eq!(J::new(1.0f32), J::new(1.0f64));
        assert_eq!(I::new(f16::ONE).cast::<f64>(), I::new(1.0));
    }

    #[test]
    fn test_mixed_precision_product() {
        let k: K<f64> = I::new(2.0f32) * J::new(1.5f64);
        assert_eq!(k, K::new(3.0));
        let sq: f32 = J::new(f16::from_f32(2.0)) * J::new(3.0f32);
        assert_eq!(sq, -6.0);
        let r: f64 = Re::new(2.0f64) * Re::new(0.5f32);
        assert_eq!(r, 1.0);
    }

    #[test]
    fn test_ordering() {
        assert!(I::new(1.0) < I::new(2.0));
        assert!(K::new(-1.0f32) < K::new(0.0f64));
        assert_eq!(I::new(f64::NAN).partial_cmp(&I::new(0.0)), None);
    }

    #[test]
    fn test_compound_assign() {
        let mut v = J::new(1.0);
        v += J::new(2.0);
        v -= J::new(0.5);
        v *= 2.0;
        v /= 5.0;
        assert_eq!(v, J::new(1.0));
    }

    #[test]
    fn test_display() {
        assert_eq!(I::new(2.0).to_string(), "2i");
        assert_eq!(J::new(-1.5).to_string(), "-1.5j");
        assert_eq!(format!("{:.2}", K::new(0.5)), "0.50k");
        assert_eq!(Re::new(3.0).to_string(), "3");
    }

    #[test]
    fn test_axis() {
        assert_eq!(PLUS_K.axis(), Axis::K);
        assert_eq!(Re::<f32>::zero().axis(), Axis::Real);
    }

    #[test]
    fn test_nan_propagates() {
        let n = I::new(f64::NAN) * J::new(1.0f64);
        assert!(n.value().is_nan());
    }
}
