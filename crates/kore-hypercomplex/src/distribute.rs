//! The Distributor: products of operands of any shape.
//!
//! For operands L and R:
//! (L * R)_c = Σ_ab CAYLEY[a][b].sign * L_a * R_b  (where CAYLEY[a][b].axis == c)
//!
//! The double loop runs over the declared axes only, so a scalar times a
//! quaternion costs four multiply-adds and a quaternion product sixteen.

use crate::axis::{self, lookup};
use crate::magnitude::Magnitude;
use crate::shape::{AxisMap, Composite, Operand};

/// Sum every pairwise slot product of `lhs × rhs`, accumulated per axis.
pub fn distribute<T: Magnitude, L: Operand<T>, R: Operand<T>>(lhs: &L, rhs: &R) -> AxisMap<T> {
    let mut acc = AxisMap::zero();

    for &a in L::AXES {
        let left = lhs.slot(a);
        for &b in R::AXES {
            let entry = lookup(a, b);
            acc[entry.axis] += entry.sign.apply(left * rhs.slot(b));
        }
    }

    acc
}

/// Distribute `lhs × rhs` into the shape `Out`.
///
/// Fails the build when some pairwise product lands on an axis `Out` does
/// not declare.
pub fn product<T, L, R, Out>(lhs: &L, rhs: &R) -> Out
where
    T: Magnitude,
    L: Operand<T>,
    R: Operand<T>,
    Out: Composite<T>,
{
    const {
        assert!(
            axis::closes(Out::AXES, L::AXES, R::AXES),
            "product has terms outside the result shape"
        );
    };
    Out::from_map(distribute(lhs, rhs))
}

/// Operator impls that forward to [`product`], for shapes generic over `T`.
///
/// Both operands widen to their common magnitude before the product.
macro_rules! distributed_mul {
    ($($lhs:ident * $rhs:ident => $out:ident),* $(,)?) => {$(
        impl<T, U> std::ops::Mul<$rhs<U>> for $lhs<T>
        where
            T: $crate::magnitude::Promote<U>,
            U: $crate::magnitude::Magnitude,
        {
            type Output = $out<$crate::magnitude::Common<T, U>>;
            fn mul(self, rhs: $rhs<U>) -> Self::Output {
                $crate::distribute::product(
                    &self.cast::<$crate::magnitude::Common<T, U>>(),
                    &rhs.cast::<$crate::magnitude::Common<T, U>>(),
                )
            }
        }
    )*};
}

/// `shape * scalar`, `shape * directed` and `directed * shape`.
///
/// The directed operand is either any tag with the given bound
/// (`Complex * <A: ComplexAxis> => Complex`) or one named tag
/// (`Complex * J => Quaternion`).
macro_rules! component_mul {
    ($shape:ident * <A: $bound:path> => $out:ident) => {
        impl<T, U> std::ops::Mul<U> for $shape<T>
        where
            T: $crate::magnitude::Promote<U>,
            U: $crate::magnitude::Magnitude,
        {
            type Output = $shape<$crate::magnitude::Common<T, U>>;
            fn mul(self, rhs: U) -> Self::Output {
                $crate::distribute::product(
                    &self.cast::<$crate::magnitude::Common<T, U>>(),
                    &$crate::magnitude::widen_rhs::<T, U>(rhs),
                )
            }
        }

        $crate::distribute::component_mul!(@directed $shape, A, A: $bound => $out);
    };
    ($shape:ident * $tag:ident => $out:ident) => {
        $crate::distribute::component_mul!(@directed $shape, $crate::tag::$tag, => $out);
    };
    (@directed $shape:ident, $a:ty, $($param:ident: $bound:path)? => $out:ident) => {
        impl<T, U, $($param: $bound)?> std::ops::Mul<$crate::directed::Directed<U, $a>> for $shape<T>
        where
            T: $crate::magnitude::Promote<U>,
            U: $crate::magnitude::Magnitude,
        {
            type Output = $out<$crate::magnitude::Common<T, U>>;
            fn mul(self, rhs: $crate::directed::Directed<U, $a>) -> Self::Output {
                $crate::distribute::product(
                    &self.cast::<$crate::magnitude::Common<T, U>>(),
                    &rhs.cast::<$crate::magnitude::Common<T, U>>(),
                )
            }
        }

        impl<T, U, $($param: $bound)?> std::ops::Mul<$shape<U>> for $crate::directed::Directed<T, $a>
        where
            T: $crate::magnitude::Promote<U>,
            U: $crate::magnitude::Magnitude,
        {
            type Output = $out<$crate::magnitude::Common<T, U>>;
            fn mul(self, rhs: $shape<U>) -> Self::Output {
                $crate::distribute::product(
                    &self.cast::<$crate::magnitude::Common<T, U>>(),
                    &rhs.cast::<$crate::magnitude::Common<T, U>>(),
                )
            }
        }
    };
}

/// Operator impls with a bare scalar on the left, one per magnitude type.
macro_rules! scalar_lhs_mul {
    ($shape:ident => $out:ident; $($t:ty),*) => {$(
        impl<U: $crate::magnitude::Magnitude> std::ops::Mul<$shape<U>> for $t
        where
            $t: $crate::magnitude::Promote<U>,
        {
            type Output = $out<$crate::magnitude::Common<$t, U>>;
            fn mul(self, rhs: $shape<U>) -> Self::Output {
                $crate::distribute::product(
                    &$crate::magnitude::widen_lhs::<$t, U>(self),
                    &rhs.cast::<$crate::magnitude::Common<$t, U>>(),
                )
            }
        }
    )*};
}

pub(crate) use component_mul;
pub(crate) use distributed_mul;
pub(crate) use scalar_lhs_mul;
