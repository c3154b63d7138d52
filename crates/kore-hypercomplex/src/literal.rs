//! Literal shorthand: a number followed by an axis letter.
//!
//! `ijk!(2 j)` is `J::<f64>::new(2.0)`. A second letter picks a reduced
//! precision: `f` for `f32`, `h` for `half::f16`.

/// Build a directed value from a numeric literal and an axis suffix.
///
/// ```
/// use kore_hypercomplex::{ijk, I, J, K};
///
/// assert_eq!(ijk!(2 i), I::new(2.0f64));
/// assert_eq!(ijk!(1.5 jf), J::new(1.5f32));
/// assert_eq!(ijk!(-3 k) * ijk!(1 k), 3.0);
/// assert_eq!(ijk!(4), 4.0f64);
/// ```
#[macro_export]
macro_rules! ijk {
    ($value:literal) => {
        ($value as f64)
    };
    ($value:literal i) => {
        $crate::I::<f64>::new($value as f64)
    };
    ($value:literal j) => {
        $crate::J::<f64>::new($value as f64)
    };
    ($value:literal k) => {
        $crate::K::<f64>::new($value as f64)
    };
    ($value:literal if) => {
        $crate::I::<f32>::new($value as f32)
    };
    ($value:literal jf) => {
        $crate::J::<f32>::new($value as f32)
    };
    ($value:literal kf) => {
        $crate::K::<f32>::new($value as f32)
    };
    ($value:literal ih) => {
        $crate::I::new($crate::half::f16::from_f64($value as f64))
    };
    ($value:literal jh) => {
        $crate::J::new($crate::half::f16::from_f64($value as f64))
    };
    ($value:literal kh) => {
        $crate::K::new($crate::half::f16::from_f64($value as f64))
    };
}
