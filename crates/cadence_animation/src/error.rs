//! Animation error types

use thiserror::Error;

use crate::config::MAX_STEPS;
use crate::value::ValueKind;

/// Errors raised while building or combining keyframe animations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnimationError {
    /// A track needs at least one step to reach both endpoints
    #[error("Invalid step count: {0} (must be between 1 and {max})", max = MAX_STEPS)]
    InvalidStepCount(usize),

    /// The animated property has no name
    #[error("Key path must not be empty")]
    EmptyKeyPath,

    /// Nothing to concatenate
    #[error("Cannot concatenate an empty list of animations")]
    EmptyConcatenation,

    /// Concatenated animations target different properties
    #[error("Key path mismatch: expected '{expected}', found '{found}'")]
    MismatchedKeyPath { expected: String, found: String },

    /// Endpoint values are of different kinds
    #[error("Value kind mismatch: cannot interpolate {from} to {to}")]
    MismatchedValueKind { from: ValueKind, to: ValueKind },

    /// A descriptor read from outside the builder breaks the track layout
    #[error("Invalid keyframe descriptor: {0}")]
    InvalidDescriptor(String),
}

/// Result type for animation construction
pub type Result<T> = std::result::Result<T, AnimationError>;
