//! Cadence Animation System
//!
//! Parametric keyframe animations: sample a time function and a value
//! function into evenly spaced keyframes a playback engine can consume.
//!
//! # Features
//!
//! - **Typed builders**: scalars, points, sizes, rects, colors and transforms
//! - **Custom curves**: any `Fn(f64) -> f64` time function, or a built-in [`Easing`]
//! - **Custom values**: any value function over the [`AnimatableValue`] set
//! - **Concatenation**: chain tracks on one property, equal or duration-weighted
//! - **Presets**: fades, pops, slides, pulses and Ken Burns drifts

pub mod builder;
pub mod config;
pub mod easing;
pub mod error;
pub mod keyframe;
pub mod presets;
pub mod value;

pub use builder::{
    build_color, build_generic, build_point, build_rect, build_scalar, build_size,
    build_transform, KeyframeBuilder,
};
pub use config::{KeyframeConfig, DEFAULT_STEPS, MAX_STEPS};
pub use easing::{Easing, TimeFn};
pub use error::{AnimationError, Result};
pub use keyframe::{concatenate, Keyframe, KeyframeAnimation};
pub use presets::AnimationPreset;
pub use value::{AnimatableValue, Lerp, ValueKind};
