//! Slot layout shared by every operand of the algebra.
//!
//! An operand is a linear combination of the four axes:
//! `x = a₀·1 + a₁·i + a₂·j + a₃·k`, where only the axes in its shape may be
//! non-zero. [`AxisMap`] is the dense form with one coefficient per axis.

use std::fmt;
use std::ops::{Index, IndexMut};

use crate::axis::Axis;
use crate::directed::Directed;
use crate::magnitude::{widen_lhs, widen_rhs, Common, Magnitude, Promote};
use crate::tag::AxisTag;

/// Anything that can stand on either side of a product.
pub trait Operand<T: Magnitude>: Copy {
    /// Declared axes, in slot order.
    const AXES: &'static [Axis];

    /// Coefficient on `axis`, zero when the axis is not declared.
    fn slot(&self, axis: Axis) -> T;
}

/// A fixed-shape aggregate with one writable slot per declared axis.
///
/// `Default` is the additive identity.
pub trait Composite<T: Magnitude>: Operand<T> + Default {
    /// Mutable access to the slot on `axis`, `None` when not declared.
    fn slot_mut(&mut self, axis: Axis) -> Option<&mut T>;

    /// Read the declared axes out of a dense map; other axes are dropped.
    fn from_map(map: AxisMap<T>) -> Self;
}

impl<T: Magnitude> Operand<T> for T {
    const AXES: &'static [Axis] = &[Axis::Real];

    #[inline]
    fn slot(&self, axis: Axis) -> T {
        match axis {
            Axis::Real => *self,
            _ => T::zero(),
        }
    }
}

impl<T: Magnitude, A: AxisTag> Operand<T> for Directed<T, A> {
    const AXES: &'static [Axis] = &[A::AXIS];

    #[inline]
    fn slot(&self, axis: Axis) -> T {
        if axis == A::AXIS {
            self.value()
        } else {
            T::zero()
        }
    }
}

/// Dense coefficients indexed by [`Axis`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisMap<T>(pub [T; 4]);

impl<T: Magnitude> AxisMap<T> {
    pub fn zero() -> Self {
        Self([T::zero(); 4])
    }

    /// Dense form of any operand.
    pub fn from_operand<O: Operand<T>>(operand: &O) -> Self {
        let mut map = Self::zero();
        for &axis in O::AXES {
            map[axis] = operand.slot(axis);
        }
        map
    }

    /// Whether every coefficient is within `eps` of zero.
    pub fn is_zero(&self, eps: T) -> bool {
        self.0.iter().all(|c| c.abs() < eps)
    }
}

impl<T> Index<Axis> for AxisMap<T> {
    type Output = T;

    #[inline]
    fn index(&self, axis: Axis) -> &T {
        &self.0[axis.index()]
    }
}

impl<T> IndexMut<Axis> for AxisMap<T> {
    #[inline]
    fn index_mut(&mut self, axis: Axis) -> &mut T {
        &mut self.0[axis.index()]
    }
}

/// Write `{a, b, c}`, forwarding the caller's format flags to every slot.
pub(crate) fn write_slots<T: fmt::Display>(f: &mut fmt::Formatter<'_>, slots: &[T]) -> fmt::Result {
    f.write_str("{")?;
    for (n, slot) in slots.iter().enumerate() {
        if n > 0 {
            f.write_str(", ")?;
        }
        fmt::Display::fmt(slot, f)?;
    }
    f.write_str("}")
}

/// Both slot arrays of a mixed pair, widened to the common type.
pub(crate) fn promote_pair<T: Promote<U>, U: Magnitude, const N: usize>(
    lhs: [T; N],
    rhs: [U; N],
) -> ([Common<T, U>; N], [Common<T, U>; N]) {
    (lhs.map(widen_lhs::<T, U>), rhs.map(widen_rhs::<T, U>))
}

/// Slot-wise impls shared by every composite: equality and ordering after
/// promotion, `+`/`-` between equal shapes, negation, `Default`, `Display`.
///
/// The shape must provide `zero`, `to_array` and `from_array`.
macro_rules! slotwise_ops {
    ($shape:ident) => {
        impl<T: $crate::magnitude::Magnitude> Default for $shape<T> {
            fn default() -> Self {
                Self::zero()
            }
        }

        impl<T, U> PartialEq<$shape<U>> for $shape<T>
        where
            T: $crate::magnitude::Promote<U>,
            U: $crate::magnitude::Magnitude,
        {
            fn eq(&self, other: &$shape<U>) -> bool {
                let (lhs, rhs) = $crate::shape::promote_pair(self.to_array(), other.to_array());
                lhs == rhs
            }
        }

        impl<T, U> PartialOrd<$shape<U>> for $shape<T>
        where
            T: $crate::magnitude::Promote<U>,
            U: $crate::magnitude::Magnitude,
        {
            fn partial_cmp(&self, other: &$shape<U>) -> Option<std::cmp::Ordering> {
                let (lhs, rhs) = $crate::shape::promote_pair(self.to_array(), other.to_array());
                lhs.partial_cmp(&rhs)
            }
        }

        impl<T, U> std::ops::Add<$shape<U>> for $shape<T>
        where
            T: $crate::magnitude::Promote<U>,
            U: $crate::magnitude::Magnitude,
        {
            type Output = $shape<$crate::magnitude::Common<T, U>>;
            fn add(self, rhs: $shape<U>) -> Self::Output {
                let (mut out, rhs) = $crate::shape::promote_pair(self.to_array(), rhs.to_array());
                for (o, r) in out.iter_mut().zip(rhs) {
                    *o += r;
                }
                $shape::from_array(out)
            }
        }

        impl<T, U> std::ops::Sub<$shape<U>> for $shape<T>
        where
            T: $crate::magnitude::Promote<U>,
            U: $crate::magnitude::Magnitude,
        {
            type Output = $shape<$crate::magnitude::Common<T, U>>;
            fn sub(self, rhs: $shape<U>) -> Self::Output {
                let (mut out, rhs) = $crate::shape::promote_pair(self.to_array(), rhs.to_array());
                for (o, r) in out.iter_mut().zip(rhs) {
                    *o -= r;
                }
                $shape::from_array(out)
            }
        }

        impl<T: $crate::magnitude::Magnitude> std::ops::AddAssign for $shape<T> {
            fn add_assign(&mut self, rhs: Self) {
                *self = *self + rhs;
            }
        }

        impl<T: $crate::magnitude::Magnitude> std::ops::SubAssign for $shape<T> {
            fn sub_assign(&mut self, rhs: Self) {
                *self = *self - rhs;
            }
        }

        impl<T: $crate::magnitude::Magnitude> std::ops::Neg for $shape<T> {
            type Output = Self;
            fn neg(self) -> Self {
                Self::from_array(self.to_array().map(|c| -c))
            }
        }

        impl<T: $crate::magnitude::Magnitude> std::ops::Div<T> for $shape<T> {
            type Output = Self;
            fn div(self, rhs: T) -> Self {
                Self::from_array(self.to_array().map(|c| c / rhs))
            }
        }

        impl<T: $crate::magnitude::Magnitude> std::ops::DivAssign<T> for $shape<T> {
            fn div_assign(&mut self, rhs: T) {
                *self = *self / rhs;
            }
        }

        /// Renders as `{a, b, ...}`: bare magnitudes in slot order.
        impl<T: $crate::magnitude::Magnitude> std::fmt::Display for $shape<T> {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                $crate::shape::write_slots(f, &self.to_array())
            }
        }
    };
}

pub(crate) use slotwise_ops;
