//! Axis identities and the axis-product (Cayley) table.
//!
//! The four axes are the basis units of the quaternion algebra:
//! - `Real` is the multiplicative identity
//! - `I`, `J`, `K` each square to -1
//! - `IJ = K`, `JK = I`, `KI = J`, and reversing either factor flips the sign
//!
//! Everything here is `const`, so the table and the set helpers below can be
//! evaluated by the compiler when checking argument lists and product shapes.

use std::fmt;

/// One of the four orthogonal algebraic directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Axis {
    Real = 0,
    I = 1,
    J = 2,
    K = 3,
}

/// Sign result from multiplying two axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    Pos,
    Neg,
}

impl Sign {
    pub const fn flip(self) -> Self {
        match self {
            Sign::Pos => Sign::Neg,
            Sign::Neg => Sign::Pos,
        }
    }

    /// Apply the sign to a value.
    #[inline]
    pub fn apply<T: std::ops::Neg<Output = T>>(self, value: T) -> T {
        match self {
            Sign::Pos => value,
            Sign::Neg => -value,
        }
    }
}

impl std::ops::Mul for Sign {
    type Output = Sign;
    fn mul(self, rhs: Sign) -> Sign {
        match (self, rhs) {
            (Sign::Pos, s) | (s, Sign::Pos) => s,
            (Sign::Neg, Sign::Neg) => Sign::Pos,
        }
    }
}

/// Entry in the axis-product table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisProduct {
    /// Resulting axis.
    pub axis: Axis,
    /// Sign of the product.
    pub sign: Sign,
}

impl Axis {
    /// All axes in slot order.
    pub const ALL: [Axis; 4] = [Axis::Real, Axis::I, Axis::J, Axis::K];

    /// Position of this axis in an [`AxisMap`](crate::shape::AxisMap).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Suffix used when rendering a directed value. The real axis has none.
    pub const fn letter(self) -> &'static str {
        match self {
            Axis::Real => "",
            Axis::I => "i",
            Axis::J => "j",
            Axis::K => "k",
        }
    }

    /// Multiply two axes: `self * rhs`.
    ///
    /// Total over all 16 ordered pairs. `Real` commutes with everything, equal
    /// imaginary axes give `-Real`, and distinct imaginary axes follow the
    /// cyclic order `I → J → K → I`.
    pub const fn product(self, rhs: Axis) -> AxisProduct {
        let (axis, sign) = match (self, rhs) {
            (Axis::Real, other) | (other, Axis::Real) => (other, Sign::Pos),
            (Axis::I, Axis::I) | (Axis::J, Axis::J) | (Axis::K, Axis::K) => (Axis::Real, Sign::Neg),
            (Axis::I, Axis::J) => (Axis::K, Sign::Pos),
            (Axis::J, Axis::K) => (Axis::I, Sign::Pos),
            (Axis::K, Axis::I) => (Axis::J, Sign::Pos),
            (Axis::J, Axis::I) => (Axis::K, Sign::Neg),
            (Axis::K, Axis::J) => (Axis::I, Sign::Neg),
            (Axis::I, Axis::K) => (Axis::J, Sign::Neg),
        };
        AxisProduct { axis, sign }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Axis::Real => "1",
            other => other.letter(),
        })
    }
}

/// Precomputed Cayley table: `CAYLEY[a][b]` = result of `axis_a * axis_b`.
pub const CAYLEY: [[AxisProduct; 4]; 4] = {
    let mut table = [[AxisProduct { axis: Axis::Real, sign: Sign::Pos }; 4]; 4];
    let mut a = 0;
    while a < 4 {
        let mut b = 0;
        while b < 4 {
            table[a][b] = Axis::ALL[a].product(Axis::ALL[b]);
            b += 1;
        }
        a += 1;
    }
    table
};

/// Table lookup for `a * b`.
#[inline]
pub fn lookup(a: Axis, b: Axis) -> AxisProduct {
    CAYLEY[a.index()][b.index()]
}

/// Whether `axis` is one of `set`.
pub const fn contains(set: &[Axis], axis: Axis) -> bool {
    let mut n = 0;
    while n < set.len() {
        if set[n] as u8 == axis as u8 {
            return true;
        }
        n += 1;
    }
    false
}

/// Whether no axis appears twice in `axes`.
pub const fn all_distinct(axes: &[Axis]) -> bool {
    let mut a = 0;
    while a < axes.len() {
        let mut b = a + 1;
        while b < axes.len() {
            if axes[a] as u8 == axes[b] as u8 {
                return false;
            }
            b += 1;
        }
        a += 1;
    }
    true
}

/// Whether every axis of `axes` is one of `set`.
pub const fn covers(set: &[Axis], axes: &[Axis]) -> bool {
    let mut n = 0;
    while n < axes.len() {
        if !contains(set, axes[n]) {
            return false;
        }
        n += 1;
    }
    true
}

/// Whether every pairwise product of `lhs × rhs` lands on an axis of `out`.
pub const fn closes(out: &[Axis], lhs: &[Axis], rhs: &[Axis]) -> bool {
    let mut a = 0;
    while a < lhs.len() {
        let mut b = 0;
        while b < rhs.len() {
            if !contains(out, lhs[a].product(rhs[b]).axis) {
                return false;
            }
            b += 1;
        }
        a += 1;
    }
    true
}
