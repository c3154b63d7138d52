//! Assignment by axis.
//!
//! A composite is a set of slots, one per declared axis. Writing an
//! axis-tagged value into a composite touches the single slot on the same
//! axis, and does nothing when the composite has no such slot. Strict
//! construction layers build-time checks on top of that; the auto-widening
//! in [`combine`](crate::combine) relies on the no-op.

use crate::axis::{self, Axis};
use crate::directed::Directed;
use crate::magnitude::Magnitude;
use crate::shape::Composite;
use crate::tag::AxisTag;

/// A single value on exactly one axis. Bare magnitudes are on `Real`.
pub trait Component<T: Magnitude>: Copy {
    const AXIS: Axis;

    fn magnitude(self) -> T;
}

impl<T: Magnitude> Component<T> for T {
    const AXIS: Axis = Axis::Real;

    #[inline]
    fn magnitude(self) -> T {
        self
    }
}

impl<T: Magnitude, A: AxisTag> Component<T> for Directed<T, A> {
    const AXIS: Axis = A::AXIS;

    #[inline]
    fn magnitude(self) -> T {
        self.value()
    }
}

/// Scatter of single components into the slots of a composite.
///
/// A component of narrower magnitude widens into the slot type.
pub trait AxisAssign<T: Magnitude>: Composite<T> {
    /// Overwrite the slot on `C::AXIS`; no-op if this shape lacks it.
    fn assign_by_axis<U: Magnitude, C: Component<U>>(&mut self, value: C)
    where
        T: From<U>,
    {
        if let Some(slot) = self.slot_mut(C::AXIS) {
            *slot = <T as From<U>>::from(<C as Component<U>>::magnitude(value));
        }
    }

    /// Add into the slot on `C::AXIS`; no-op if this shape lacks it.
    fn add_assign_by_axis<U: Magnitude, C: Component<U>>(&mut self, value: C)
    where
        T: From<U>,
    {
        if let Some(slot) = self.slot_mut(C::AXIS) {
            *slot += <T as From<U>>::from(<C as Component<U>>::magnitude(value));
        }
    }

    /// Subtract from the slot on `C::AXIS`; no-op if this shape lacks it.
    fn sub_assign_by_axis<U: Magnitude, C: Component<U>>(&mut self, value: C)
    where
        T: From<U>,
    {
        if let Some(slot) = self.slot_mut(C::AXIS) {
            *slot -= <T as From<U>>::from(<C as Component<U>>::magnitude(value));
        }
    }
}

impl<T: Magnitude, S: Composite<T>> AxisAssign<T> for S {}

/// `+`/`-` between a composite and a directed value on one of its axes, in
/// both orders, plus the compound forms. Results carry the common magnitude;
/// compound forms accept any component that widens into the slot type.
macro_rules! component_ops {
    ($shape:ident, $bound:path) => {
        impl<T, U, A: $bound> std::ops::Add<$crate::directed::Directed<U, A>> for $shape<T>
        where
            T: $crate::magnitude::Promote<U>,
            U: $crate::magnitude::Magnitude,
        {
            type Output = $shape<$crate::magnitude::Common<T, U>>;
            fn add(self, rhs: $crate::directed::Directed<U, A>) -> Self::Output {
                let mut out = self.cast::<$crate::magnitude::Common<T, U>>();
                $crate::assign::AxisAssign::add_assign_by_axis(&mut out, rhs);
                out
            }
        }

        impl<T, U, A: $bound> std::ops::Sub<$crate::directed::Directed<U, A>> for $shape<T>
        where
            T: $crate::magnitude::Promote<U>,
            U: $crate::magnitude::Magnitude,
        {
            type Output = $shape<$crate::magnitude::Common<T, U>>;
            fn sub(self, rhs: $crate::directed::Directed<U, A>) -> Self::Output {
                let mut out = self.cast::<$crate::magnitude::Common<T, U>>();
                $crate::assign::AxisAssign::sub_assign_by_axis(&mut out, rhs);
                out
            }
        }

        impl<T, U, A: $bound> std::ops::Add<$shape<U>> for $crate::directed::Directed<T, A>
        where
            T: $crate::magnitude::Promote<U>,
            U: $crate::magnitude::Magnitude,
        {
            type Output = $shape<$crate::magnitude::Common<T, U>>;
            fn add(self, rhs: $shape<U>) -> Self::Output {
                let mut out = rhs.cast::<$crate::magnitude::Common<T, U>>();
                $crate::assign::AxisAssign::add_assign_by_axis(&mut out, self);
                out
            }
        }

        impl<T, U, A: $bound> std::ops::Sub<$shape<U>> for $crate::directed::Directed<T, A>
        where
            T: $crate::magnitude::Promote<U>,
            U: $crate::magnitude::Magnitude,
        {
            type Output = $shape<$crate::magnitude::Common<T, U>>;
            fn sub(self, rhs: $shape<U>) -> Self::Output {
                let mut out = (-rhs).cast::<$crate::magnitude::Common<T, U>>();
                $crate::assign::AxisAssign::add_assign_by_axis(&mut out, self);
                out
            }
        }

        impl<T, U, A: $bound> std::ops::AddAssign<$crate::directed::Directed<U, A>> for $shape<T>
        where
            T: $crate::magnitude::Magnitude + From<U>,
            U: $crate::magnitude::Magnitude,
        {
            fn add_assign(&mut self, rhs: $crate::directed::Directed<U, A>) {
                $crate::assign::AxisAssign::add_assign_by_axis(self, rhs);
            }
        }

        impl<T, U, A: $bound> std::ops::SubAssign<$crate::directed::Directed<U, A>> for $shape<T>
        where
            T: $crate::magnitude::Magnitude + From<U>,
            U: $crate::magnitude::Magnitude,
        {
            fn sub_assign(&mut self, rhs: $crate::directed::Directed<U, A>) {
                $crate::assign::AxisAssign::sub_assign_by_axis(self, rhs);
            }
        }
    };
}

/// `+`/`-` with a bare magnitude, for shapes with a real slot. Covers the
/// scalar on either side for every magnitude type.
macro_rules! scalar_ops {
    ($shape:ident; $($t:ty),*) => {
        impl<T, U> std::ops::Add<U> for $shape<T>
        where
            T: $crate::magnitude::Promote<U>,
            U: $crate::magnitude::Magnitude,
        {
            type Output = $shape<$crate::magnitude::Common<T, U>>;
            fn add(self, rhs: U) -> Self::Output {
                let mut out = self.cast::<$crate::magnitude::Common<T, U>>();
                $crate::assign::AxisAssign::add_assign_by_axis(&mut out, rhs);
                out
            }
        }

        impl<T, U> std::ops::Sub<U> for $shape<T>
        where
            T: $crate::magnitude::Promote<U>,
            U: $crate::magnitude::Magnitude,
        {
            type Output = $shape<$crate::magnitude::Common<T, U>>;
            fn sub(self, rhs: U) -> Self::Output {
                let mut out = self.cast::<$crate::magnitude::Common<T, U>>();
                $crate::assign::AxisAssign::sub_assign_by_axis(&mut out, rhs);
                out
            }
        }

        impl<T, U> std::ops::AddAssign<U> for $shape<T>
        where
            T: $crate::magnitude::Magnitude + From<U>,
            U: $crate::magnitude::Magnitude,
        {
            fn add_assign(&mut self, rhs: U) {
                $crate::assign::AxisAssign::add_assign_by_axis(self, rhs);
            }
        }

        impl<T, U> std::ops::SubAssign<U> for $shape<T>
        where
            T: $crate::magnitude::Magnitude + From<U>,
            U: $crate::magnitude::Magnitude,
        {
            fn sub_assign(&mut self, rhs: U) {
                $crate::assign::AxisAssign::sub_assign_by_axis(self, rhs);
            }
        }

        $(
            impl<U: $crate::magnitude::Magnitude> std::ops::Add<$shape<U>> for $t
            where
                $t: $crate::magnitude::Promote<U>,
            {
                type Output = $shape<$crate::magnitude::Common<$t, U>>;
                fn add(self, rhs: $shape<U>) -> Self::Output {
                    let mut out = rhs.cast::<$crate::magnitude::Common<$t, U>>();
                    $crate::assign::AxisAssign::add_assign_by_axis(&mut out, self);
                    out
                }
            }

            impl<U: $crate::magnitude::Magnitude> std::ops::Sub<$shape<U>> for $t
            where
                $t: $crate::magnitude::Promote<U>,
            {
                type Output = $shape<$crate::magnitude::Common<$t, U>>;
                fn sub(self, rhs: $shape<U>) -> Self::Output {
                    let mut out = (-rhs).cast::<$crate::magnitude::Common<$t, U>>();
                    $crate::assign::AxisAssign::add_assign_by_axis(&mut out, self);
                    out
                }
            }
        )*
    };
}

pub(crate) use component_ops;
pub(crate) use scalar_ops;

/// An argument list of components, as a tuple of up to four.
pub trait Components<T: Magnitude> {
    /// Axis of each argument, in argument order.
    const AXES: &'static [Axis];

    fn scatter<S: AxisAssign<T>>(self, target: &mut S);
}

impl<T: Magnitude> Components<T> for () {
    const AXES: &'static [Axis] = &[];

    fn scatter<S: AxisAssign<T>>(self, _target: &mut S) {}
}

macro_rules! tuple_components {
    ($($name:ident $arg:ident),+) => {
        impl<T: Magnitude, $($name: Component<T>),+> Components<T> for ($($name,)+) {
            const AXES: &'static [Axis] = &[$($name::AXIS),+];

            fn scatter<S: AxisAssign<T>>(self, target: &mut S) {
                let ($($arg,)+) = self;
                $(target.assign_by_axis::<T, $name>($arg);)+
            }
        }
    };
}

tuple_components!(A a);
tuple_components!(A a, B b);
tuple_components!(A a, B b, C c);
tuple_components!(A a, B b, C c, D d);

/// Build `S` from an argument list, one value per declared axis.
///
/// Omitted axes are zero. Two arguments on one axis, or an argument on an
/// axis `S` does not declare, fail the build.
pub fn from_components<T: Magnitude, S: Composite<T>, C: Components<T>>(args: C) -> S {
    const {
        assert!(axis::all_distinct(C::AXES), "two arguments share an axis");
        assert!(axis::covers(S::AXES, C::AXES), "argument axis is not a slot of this shape");
    };
    let mut out = S::default();
    args.scatter(&mut out);
    out
}
