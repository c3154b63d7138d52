//! Quaternions: `w + i·i + j·j + k·k`.
//!
//! Every axis is a slot, so the quaternion is closed under the Distributor
//! against any operand. It is the landing shape for mixed products that
//! leave Complex or Vector, e.g. `Complex * Vector` or `Complex * J`.

use std::ops::{Div, MulAssign};

use half::f16;

use crate::assign::{self, component_ops, scalar_ops, Components};
use crate::axis::Axis;
use crate::complex::Complex;
use crate::directed::{Directed, I, J, K};
use crate::distribute::{component_mul, distributed_mul, scalar_lhs_mul};
use crate::magnitude::Magnitude;
use crate::shape::{slotwise_ops, AxisMap, Composite, Operand};
use crate::tag::AxisTag;
use crate::vector::Vector;

/// `w + i·i + j·j + k·k`, slots in that order.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(bound(serialize = "T: serde::Serialize", deserialize = "T: serde::Deserialize<'de>"))
)]
pub struct Quaternion<T> {
    pub w: T,
    pub i: I<T>,
    pub j: J<T>,
    pub k: K<T>,
}

impl<T: Magnitude> Quaternion<T> {
    pub fn new(w: T, i: T, j: T, k: T) -> Self {
        Self { w, i: I::new(i), j: J::new(j), k: K::new(k) }
    }

    pub fn zero() -> Self {
        Self::new(T::zero(), T::zero(), T::zero(), T::zero())
    }

    /// Build from up to four components on distinct axes, in any order.
    /// A bare magnitude fills `w`.
    pub fn from_components<C: Components<T>>(args: C) -> Self {
        assign::from_components(args)
    }

    pub fn to_array(self) -> [T; 4] {
        [self.w, self.i.value(), self.j.value(), self.k.value()]
    }

    pub fn from_array([w, i, j, k]: [T; 4]) -> Self {
        Self::new(w, i, j, k)
    }

    pub fn cast<U: Magnitude + From<T>>(self) -> Quaternion<U> {
        Quaternion { w: <U as From<T>>::from(self.w), i: self.i.cast(), j: self.j.cast(), k: self.k.cast() }
    }

    pub fn scalar_part(self) -> T {
        self.w
    }

    pub fn vector_part(self) -> Vector<T> {
        Vector { x: self.i, y: self.j, z: self.k }
    }

    pub fn conjugate(self) -> Self {
        Self { w: self.w, i: -self.i, j: -self.j, k: -self.k }
    }

    /// `q · q̄`, the real slot of which is `w² + i² + j² + k²`.
    pub fn norm_squared(self) -> T {
        (self * self.conjugate()).w
    }

    pub fn norm(self) -> T {
        self.norm_squared().sqrt()
    }

    /// `q̄ / |q|²`. Zero maps to non-finite slots.
    pub fn inverse(self) -> Self {
        self.conjugate() / self.norm_squared()
    }
}

impl<T: Magnitude> Operand<T> for Quaternion<T> {
    const AXES: &'static [Axis] = &Axis::ALL;

    #[inline]
    fn slot(&self, axis: Axis) -> T {
        match axis {
            Axis::Real => self.w,
            Axis::I => self.i.value(),
            Axis::J => self.j.value(),
            Axis::K => self.k.value(),
        }
    }
}

impl<T: Magnitude> Composite<T> for Quaternion<T> {
    #[inline]
    fn slot_mut(&mut self, axis: Axis) -> Option<&mut T> {
        Some(match axis {
            Axis::Real => &mut self.w,
            Axis::I => self.i.value_mut(),
            Axis::J => self.j.value_mut(),
            Axis::K => self.k.value_mut(),
        })
    }

    fn from_map(map: AxisMap<T>) -> Self {
        Self::from_array(map.0)
    }
}

slotwise_ops!(Quaternion);

impl<T: Magnitude> From<Complex<T>> for Quaternion<T> {
    fn from(z: Complex<T>) -> Self {
        Self { w: z.real, i: z.imag, ..Self::zero() }
    }
}

impl<T: Magnitude> From<Vector<T>> for Quaternion<T> {
    fn from(v: Vector<T>) -> Self {
        Self { w: T::zero(), i: v.x, j: v.y, k: v.z }
    }
}

component_ops!(Quaternion, AxisTag);
scalar_ops!(Quaternion; f16, f32, f64);

distributed_mul! {
    Quaternion * Quaternion => Quaternion,
    Quaternion * Complex => Quaternion,
    Complex * Quaternion => Quaternion,
    Quaternion * Vector => Quaternion,
    Vector * Quaternion => Quaternion,
    Complex * Vector => Quaternion,
    Vector * Complex => Quaternion,
}

component_mul!(Quaternion * <A: AxisTag> => Quaternion);
scalar_lhs_mul!(Quaternion => Quaternion; f16, f32, f64);

// `Complex * J`, `K * Complex` and friends: the `j`/`k` axes take a
// complex number out of its own shape.
component_mul!(Complex * J => Quaternion);
component_mul!(Complex * K => Quaternion);

impl<T: Magnitude> MulAssign for Quaternion<T> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<T: Magnitude> MulAssign<T> for Quaternion<T> {
    fn mul_assign(&mut self, rhs: T) {
        *self = *self * rhs;
    }
}

impl<T: Magnitude, A: AxisTag> MulAssign<Directed<T, A>> for Quaternion<T> {
    fn mul_assign(&mut self, rhs: Directed<T, A>) {
        *self = *self * rhs;
    }
}

/// Right division: `p / q = p · q⁻¹`.
impl<T: Magnitude> Div for Quaternion<T> {
    type Output = Self;
    fn div(self, rhs: Self) -> Self {
        self * rhs.inverse()
    }
}
