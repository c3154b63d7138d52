//! `FromStr` for every value type, accepting exactly what `Display` writes:
//! `2.5j` for a directed value, `{1, 2, 3, 4}` for a composite.

use std::str::FromStr;

use crate::axis::Axis;
use crate::complex::Complex;
use crate::directed::Directed;
use crate::error::{ParseError, Result};
use crate::magnitude::Magnitude;
use crate::quaternion::Quaternion;
use crate::tag::AxisTag;
use crate::vector::Vector;

fn parse_magnitude<T: Magnitude>(text: &str, slot: usize) -> Result<T> {
    text.trim().parse::<T>().map_err(|_| ParseError::InvalidMagnitude {
        slot,
        text: text.trim().to_owned(),
    })
}

/// Strip the axis letter. `Real` has none, so the text is taken whole.
fn strip_axis(text: &str, axis: Axis) -> Result<&str> {
    let letter = axis.letter();
    if letter.is_empty() {
        return Ok(text);
    }
    text.strip_suffix(letter).ok_or_else(|| ParseError::AxisSuffix {
        expected: axis,
        found: text.to_owned(),
    })
}

/// Split `{a, b, ...}` into exactly `N` magnitudes.
fn parse_slots<T: Magnitude, const N: usize>(text: &str) -> Result<[T; N]> {
    let trimmed = text.trim();
    let inner = trimmed
        .strip_prefix('{')
        .and_then(|rest| rest.strip_suffix('}'))
        .ok_or_else(|| ParseError::MissingBraces(trimmed.to_owned()))?;

    let parts: Vec<&str> = if inner.trim().is_empty() {
        Vec::new()
    } else {
        inner.split(',').collect()
    };
    if parts.len() != N {
        return Err(ParseError::SlotCount { expected: N, found: parts.len() });
    }

    let mut slots = [T::zero(); N];
    for (slot, (out, part)) in slots.iter_mut().zip(parts).enumerate() {
        *out = parse_magnitude(part, slot)?;
    }
    tracing::trace!("parsed {} {} slots from '{}'", N, T::NAME, trimmed);
    Ok(slots)
}

impl<T: Magnitude, A: AxisTag> FromStr for Directed<T, A> {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self> {
        let parsed = strip_axis(s.trim(), A::AXIS).and_then(|body| parse_magnitude(body, 0));
        match parsed {
            Ok(value) => Ok(Self::new(value)),
            Err(err) => {
                tracing::debug!("rejected directed value '{}': {}", s, err);
                Err(err)
            }
        }
    }
}

macro_rules! composite_from_str {
    ($($shape:ident),*) => {$(
        impl<T: Magnitude> FromStr for $shape<T> {
            type Err = ParseError;

            fn from_str(s: &str) -> Result<Self> {
                parse_slots(s).map(Self::from_array).map_err(|err| {
                    tracing::debug!("rejected {} '{}': {}", stringify!($shape), s, err);
                    err
                })
            }
        }
    )*};
}

composite_from_str!(Complex, Vector, Quaternion);

#[cfg(test)]
mod tests {
    use half::f16;

    use super::*;
    use crate::directed::{Re, I, J, K};

    #[test]
    fn test_directed() {
        assert_eq!("2.5j".parse::<J<f64>>(), Ok(J::new(2.5)));
        assert_eq!(" -1i ".parse::<I<f32>>(), Ok(I::new(-1.0f32)));
        assert_eq!("3".parse::<Re<f64>>(), Ok(Re::new(3.0)));
        assert_eq!("0.5k".parse::<K<f16>>(), Ok(K::new(f16::from_f32(0.5))));
    }

    #[test]
    fn test_directed_wrong_axis() {
        assert_eq!(
            "2.5j".parse::<K<f64>>(),
            Err(ParseError::AxisSuffix { expected: Axis::K, found: "2.5j".to_owned() })
        );
        assert!(matches!(
            "xk".parse::<K<f64>>(),
            Err(ParseError::InvalidMagnitude { slot: 0, .. })
        ));
    }

    #[test]
    fn test_composites() {
        assert_eq!("{1, 2, 3, 4}".parse::<Quaternion<f64>>(), Ok(Quaternion::new(1.0, 2.0, 3.0, 4.0)));
        assert_eq!("{0.5,-1}".parse::<Complex<f32>>(), Ok(Complex::new(0.5f32, -1.0)));
        assert_eq!("  {1, 0, 0}  ".parse::<Vector<f64>>(), Ok(Vector::new(1.0, 0.0, 0.0)));
    }

    #[test]
    fn test_display_round_trip() {
        let q = Quaternion::new(-0.25, 1e-3, 7.0, f64::INFINITY);
        assert_eq!(q.to_string().parse::<Quaternion<f64>>(), Ok(q));
        let j = J::new(-2.75f32);
        assert_eq!(j.to_string().parse::<J<f32>>(), Ok(j));
    }

    #[test]
    fn test_composite_errors() {
        assert_eq!(
            "1, 2".parse::<Complex<f64>>(),
            Err(ParseError::MissingBraces("1, 2".to_owned()))
        );
        assert_eq!(
            "{1, 2}".parse::<Vector<f64>>(),
            Err(ParseError::SlotCount { expected: 3, found: 2 })
        );
        assert_eq!("{}".parse::<Complex<f64>>(), Err(ParseError::SlotCount { expected: 2, found: 0 }));
        assert_eq!(
            "{1, two}".parse::<Complex<f64>>(),
            Err(ParseError::InvalidMagnitude { slot: 1, text: "two".to_owned() })
        );
    }

    #[test]
    fn test_error_messages() {
        let err = ParseError::SlotCount { expected: 4, found: 1 };
        assert_eq!(err.to_string(), "expected 4 slots, found 1");
        let err = ParseError::AxisSuffix { expected: Axis::I, found: "3".to_owned() };
        assert_eq!(err.to_string(), "'3' does not end in the I axis letter");
    }
}
