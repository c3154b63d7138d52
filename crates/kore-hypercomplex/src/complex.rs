//! Complex numbers: a real slot and an `i` slot.

use std::ops::{Div, MulAssign};

use half::f16;

use crate::assign::{self, component_ops, scalar_ops, Components};
use crate::axis::Axis;
use crate::directed::I;
use crate::distribute::{component_mul, distributed_mul, scalar_lhs_mul};
use crate::magnitude::Magnitude;
use crate::shape::{slotwise_ops, AxisMap, Composite, Operand};
use crate::tag::ComplexAxis;

/// `real + imag·i`.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(bound(serialize = "T: serde::Serialize", deserialize = "T: serde::Deserialize<'de>"))
)]
pub struct Complex<T> {
    pub real: T,
    pub imag: I<T>,
}

impl<T: Magnitude> Complex<T> {
    pub fn new(real: T, imag: T) -> Self {
        Self { real, imag: I::new(imag) }
    }

    pub fn zero() -> Self {
        Self::new(T::zero(), T::zero())
    }

    /// Build from up to two components on distinct axes, e.g.
    /// `Complex::from_components((I::new(2.0), 1.0))`.
    pub fn from_components<C: Components<T>>(args: C) -> Self {
        assign::from_components(args)
    }

    pub fn to_array(self) -> [T; 2] {
        [self.real, self.imag.value()]
    }

    pub fn from_array([real, imag]: [T; 2]) -> Self {
        Self::new(real, imag)
    }

    pub fn cast<U: Magnitude + From<T>>(self) -> Complex<U> {
        Complex { real: <U as From<T>>::from(self.real), imag: self.imag.cast() }
    }

    /// `real - imag·i`.
    pub fn conjugate(self) -> Self {
        Self { real: self.real, imag: -self.imag }
    }

    /// `z · z̄`, which is real.
    pub fn norm_squared(self) -> T {
        (self * self.conjugate()).real
    }

    pub fn norm(self) -> T {
        self.norm_squared().sqrt()
    }

    /// `z̄ / |z|²`. Zero maps to non-finite slots.
    pub fn inverse(self) -> Self {
        self.conjugate() / self.norm_squared()
    }
}

impl<T: Magnitude> Operand<T> for Complex<T> {
    const AXES: &'static [Axis] = &[Axis::Real, Axis::I];

    fn slot(&self, axis: Axis) -> T {
        match axis {
            Axis::Real => self.real,
            Axis::I => self.imag.value(),
            Axis::J | Axis::K => T::zero(),
        }
    }
}

impl<T: Magnitude> Composite<T> for Complex<T> {
    fn slot_mut(&mut self, axis: Axis) -> Option<&mut T> {
        match axis {
            Axis::Real => Some(&mut self.real),
            Axis::I => Some(self.imag.value_mut()),
            Axis::J | Axis::K => None,
        }
    }

    fn from_map(map: AxisMap<T>) -> Self {
        Self::new(map[Axis::Real], map[Axis::I])
    }
}

slotwise_ops!(Complex);
component_ops!(Complex, ComplexAxis);
scalar_ops!(Complex; f16, f32, f64);

distributed_mul! {
    Complex * Complex => Complex,
}

component_mul!(Complex * <A: ComplexAxis> => Complex);
scalar_lhs_mul!(Complex => Complex; f16, f32, f64);

impl<T: Magnitude> MulAssign for Complex<T> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<T: Magnitude> MulAssign<T> for Complex<T> {
    fn mul_assign(&mut self, rhs: T) {
        *self = *self * rhs;
    }
}

impl<T: Magnitude> Div for Complex<T> {
    type Output = Self;
    fn div(self, rhs: Self) -> Self {
        self * rhs.inverse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combine::combine;

    fn comp() -> Complex<f64> {
        Complex::new(1.0, 1.0)
    }

    #[test]
    fn test_construction() {
        let z = Complex::from_components((I::new(-456.0f32), 789.0));
        assert_eq!(z, Complex::new(789.0f32, -456.0));
        assert_eq!(Complex::<f64>::from_components(()), Complex::<f64>::zero());
        assert_eq!(Complex::from_components((2.0,)), Complex::new(2.0, 0.0));
    }

    #[test]
    fn test_scalar_plus_imaginary_widens() {
        let z: Complex<f64> = combine(123.456, I::new(3.0));
        assert_eq!(z, Complex::new(123.456, 3.0));
    }

    #[test]
    fn test_add_components() {
        assert_eq!(comp() + I::new(2.0), Complex::new(1.0, 3.0));
        assert_eq!(I::new(3.0) + comp() + I::new(4.0), Complex::new(1.0, 8.0));
        assert_eq!(4.5f64 + comp(), Complex::new(5.5, 1.0));
        assert_eq!(comp() - 1.0, Complex::new(0.0, 1.0));
        assert_eq!(2.0f64 - comp(), Complex::new(1.0, -1.0));
        assert_eq!(I::new(1.0) - comp(), Complex::new(-1.0, 0.0));
    }

    #[test]
    fn test_add_complex() {
        let a = Complex::new(1.0, 2.0);
        let b = Complex::new(3.0, -4.0);
        assert_eq!(a + b, Complex::new(4.0, -2.0));
        assert_eq!(a - b, Complex::new(-2.0, 6.0));
        assert_eq!(a - a, Complex::<f64>::zero());
    }

    #[test]
    fn test_mixed_precision_add() {
        let a = Complex::new(1.0f32, 2.0f32);
        let b = Complex::new(0.5f64, 0.25f64);
        let c: Complex<f64> = a + b;
        assert_eq!(c, Complex::new(1.5f64, 2.25));
        assert_eq!(a, Complex::new(1.0f64, 2.0));
    }

    #[test]
    fn test_mixed_precision_ops() {
        let z = Complex::new(1.0f64, 1.0);
        let scaled: Complex<f64> = 3.0f32 * z;
        assert_eq!(scaled, Complex::new(3.0f64, 3.0));
        assert_eq!(z * 2.0f32, Complex::new(2.0f64, 2.0));

        let shifted: Complex<f64> = z + I::new(0.5f32) - 1.0f32;
        assert_eq!(shifted, Complex::new(0.0f64, 1.5));
        assert_eq!(2.0f32 + z, Complex::new(3.0f64, 1.0));

        let h = Complex::new(f16::ONE, f16::ONE);
        let p: Complex<f32> = Complex::new(2.0f32, 0.0) * h;
        assert_eq!(p, Complex::new(2.0f32, 2.0));
        let rot: Complex<f64> = I::new(f16::ONE) * z;
        assert_eq!(rot, Complex::new(-1.0f64, 1.0));

        let mut acc = Complex::<f64>::zero();
        acc += 1.5f32;
        acc += I::new(f16::ONE);
        assert_eq!(acc, Complex::new(1.5f64, 1.0));
    }

    #[test]
    fn test_mul() {
        // (2+3i)(1+2i) = 2+4i+3i+6i² = -4+7i
        let z = Complex::new(2.0, 3.0) * Complex::new(1.0, 2.0);
        assert_eq!(z, Complex::new(-4.0, 7.0));
        assert_eq!(comp() * comp(), Complex::new(0.0, 2.0));
    }

    #[test]
    fn test_scalar_mul() {
        assert_eq!(comp() * 2.0, Complex::new(2.0, 2.0));
        assert_eq!(3.0f32 * Complex::new(1.0f32, 1.0), Complex::new(3.0f32, 3.0));
        assert_eq!(comp() * 1.0, comp());
    }

    #[test]
    fn test_mul_imaginary() {
        assert_eq!(comp() * I::new(3.0), Complex::new(-3.0, 3.0));
        assert_eq!(I::new(4.0) * comp(), Complex::new(-4.0, 4.0));
    }

    #[test]
    fn test_conjugate() {
        let z = Complex::new(3.0, -2.0);
        assert_eq!(z.conjugate(), Complex::new(3.0, 2.0));
        assert_eq!(z.conjugate().conjugate(), z);
        let zz = z * z.conjugate();
        assert_eq!(zz.imag, I::<f64>::zero());
        assert_eq!(zz.real, 13.0);
    }

    #[test]
    fn test_norm_and_inverse() {
        let z = Complex::new(3.0f64, 4.0);
        assert_eq!(z.norm_squared(), 25.0);
        assert_eq!(z.norm(), 5.0);
        let one = z * z.inverse();
        assert!((one.real - 1.0).abs() < 1e-12);
        assert!(one.imag.value().abs() < 1e-12);
        let q = Complex::new(-4.0f64, 7.0) / Complex::new(1.0, 2.0);
        assert!((q - Complex::new(2.0f64, 3.0)).to_array().iter().all(|c| c.abs() < 1e-12));
    }

    #[test]
    fn test_compound_assign() {
        let mut z = comp();
        z += 1.0;
        z += I::new(1.0);
        z -= Complex::new(0.5, 0.5);
        z *= 2.0;
        assert_eq!(z, Complex::new(3.0, 3.0));
        z *= Complex::new(0.0, 1.0);
        assert_eq!(z, Complex::new(-3.0, 3.0));
        z /= 3.0;
        assert_eq!(z, Complex::new(-1.0, 1.0));
    }

    #[test]
    fn test_ordering_is_slot_order() {
        assert!(Complex::new(1.0, 5.0) < Complex::new(2.0, 0.0));
        assert!(Complex::new(1.0, 1.0) < Complex::new(1.0, 2.0));
    }

    #[test]
    fn test_display() {
        assert_eq!(Complex::new(1.0, -2.5).to_string(), "{1, -2.5}");
        assert_eq!(format!("{:.1}", Complex::new(1.0, 2.0)), "{1.0, 2.0}");
    }

    #[test]
    fn test_half_precision() {
        let z = Complex::new(f16::ONE, f16::ONE);
        let zz = z * z;
        assert_eq!(zz, Complex::new(0.0f32, 2.0));
    }
}
