//! Cadence Core Types
//!
//! The value types keyframe animations interpolate between:
//!
//! - **Geometry**: [`Point`], [`Size`], [`Rect`]
//! - **Color**: straight-alpha RGBA [`Color`]
//! - **Transforms**: column-major 4x4 [`Mat4`]
//!
//! # Example
//!
//! ```rust
//! use cadence_core::{Mat4, Point, Rect};
//!
//! let frame = Rect::new(0.0, 0.0, 320.0, 240.0);
//! let moved = Mat4::translation(10.0, 20.0, 0.0).transform_point(frame.origin);
//! assert_eq!(moved, Point::new(10.0, 20.0));
//! ```

pub mod color;
pub mod geometry;

pub use color::Color;
pub use geometry::{Mat4, Point, Rect, Size};
