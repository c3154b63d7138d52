//! 3-vectors: `x·i + y·j + z·k`, no real slot.

use std::ops::MulAssign;

use half::f16;

use crate::assign::{self, component_ops, Components};
use crate::axis::Axis;
use crate::directed::{I, J, K};
use crate::distribute::{component_mul, distributed_mul, scalar_lhs_mul};
use crate::magnitude::Magnitude;
use crate::quaternion::Quaternion;
use crate::shape::{slotwise_ops, AxisMap, Composite, Operand};
use crate::tag::VectorAxis;

/// A pure-imaginary quaternion: `x·i + y·j + z·k`.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(bound(serialize = "T: serde::Serialize", deserialize = "T: serde::Deserialize<'de>"))
)]
pub struct Vector<T> {
    pub x: I<T>,
    pub y: J<T>,
    pub z: K<T>,
}

impl<T: Magnitude> Vector<T> {
    pub fn new(x: T, y: T, z: T) -> Self {
        Self { x: I::new(x), y: J::new(y), z: K::new(z) }
    }

    pub fn zero() -> Self {
        Self::new(T::zero(), T::zero(), T::zero())
    }

    /// Build from up to three components on distinct axes, in any order.
    pub fn from_components<C: Components<T>>(args: C) -> Self {
        assign::from_components(args)
    }

    pub fn to_array(self) -> [T; 3] {
        [self.x.value(), self.y.value(), self.z.value()]
    }

    pub fn from_array([x, y, z]: [T; 3]) -> Self {
        Self::new(x, y, z)
    }

    pub fn cast<U: Magnitude + From<T>>(self) -> Vector<U> {
        Vector { x: self.x.cast(), y: self.y.cast(), z: self.z.cast() }
    }

    /// Dot product, read off the quaternion product: `a·b = -(ab)_w`.
    pub fn dot(self, rhs: Self) -> T {
        -(self * rhs).w
    }

    /// Cross product, read off the quaternion product: `a×b = (ab)_ijk`.
    pub fn cross(self, rhs: Self) -> Self {
        (self * rhs).vector_part()
    }

    /// Negates every slot: a vector has no real part to keep.
    pub fn conjugate(self) -> Self {
        -self
    }

    pub fn norm_squared(self) -> T {
        self.dot(self)
    }

    pub fn norm(self) -> T {
        self.norm_squared().sqrt()
    }
}

impl<T: Magnitude> Operand<T> for Vector<T> {
    const AXES: &'static [Axis] = &[Axis::I, Axis::J, Axis::K];

    fn slot(&self, axis: Axis) -> T {
        match axis {
            Axis::Real => T::zero(),
            Axis::I => self.x.value(),
            Axis::J => self.y.value(),
            Axis::K => self.z.value(),
        }
    }
}

impl<T: Magnitude> Composite<T> for Vector<T> {
    fn slot_mut(&mut self, axis: Axis) -> Option<&mut T> {
        match axis {
            Axis::Real => None,
            Axis::I => Some(self.x.value_mut()),
            Axis::J => Some(self.y.value_mut()),
            Axis::K => Some(self.z.value_mut()),
        }
    }

    fn from_map(map: AxisMap<T>) -> Self {
        Self::new(map[Axis::I], map[Axis::J], map[Axis::K])
    }
}

slotwise_ops!(Vector);
component_ops!(Vector, VectorAxis);

impl<T: Magnitude> MulAssign<T> for Vector<T> {
    fn mul_assign(&mut self, rhs: T) {
        *self = *self * rhs;
    }
}

distributed_mul! {
    Vector * Vector => Quaternion,
}

component_mul!(Vector * <A: VectorAxis> => Quaternion);
component_mul!(Vector * Real => Vector);
scalar_lhs_mul!(Vector => Vector; f16, f32, f64);
