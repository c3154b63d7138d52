//! Errors for the text surface. Arithmetic has no runtime error path.

use crate::axis::Axis;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("expected '{{' ... '}}' around composite slots, got '{0}'")]
    MissingBraces(String),

    #[error("expected {expected} slots, found {found}")]
    SlotCount { expected: usize, found: usize },

    #[error("slot {slot}: '{text}' is not a number")]
    InvalidMagnitude { slot: usize, text: String },

    #[error("'{found}' does not end in the {expected:?} axis letter")]
    AxisSuffix { expected: Axis, found: String },
}

pub type Result<T> = std::result::Result<T, ParseError>;
