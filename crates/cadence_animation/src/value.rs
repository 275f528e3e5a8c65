//! Animatable values and their default interpolation
//!
//! [`Lerp`] is the default value-interpolation function for each value type.
//! [`AnimatableValue`] is the closed set of values a keyframe track can hold.

use cadence_core::{Color, Mat4, Point, Rect, Size};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{AnimationError, Result};

/// Linear interpolation between two values of the same type
///
/// `t` is not clamped: values outside 0..1 extrapolate, which is what lets
/// overshooting easings overshoot.
pub trait Lerp: Sized {
    fn lerp(&self, to: &Self, t: f64) -> Self;
}

/// `from + (to - from) * t`, arranged so `t == 0` and `t == 1` hit the
/// endpoints exactly
#[inline]
fn lerp_f64(from: f64, to: f64, t: f64) -> f64 {
    from * (1.0 - t) + to * t
}

impl Lerp for f64 {
    fn lerp(&self, to: &Self, t: f64) -> Self {
        lerp_f64(*self, *to, t)
    }
}

impl Lerp for Point {
    fn lerp(&self, to: &Self, t: f64) -> Self {
        Point::new(lerp_f64(self.x, to.x, t), lerp_f64(self.y, to.y, t))
    }
}

impl Lerp for Size {
    fn lerp(&self, to: &Self, t: f64) -> Self {
        Size::new(
            lerp_f64(self.width, to.width, t),
            lerp_f64(self.height, to.height, t),
        )
    }
}

impl Lerp for Rect {
    fn lerp(&self, to: &Self, t: f64) -> Self {
        Rect::from_origin_size(self.origin.lerp(&to.origin, t), self.size.lerp(&to.size, t))
    }
}

/// Per-channel blend of straight RGBA
impl Lerp for Color {
    fn lerp(&self, to: &Self, t: f64) -> Self {
        Color::rgba(
            lerp_f64(self.r, to.r, t),
            lerp_f64(self.g, to.g, t),
            lerp_f64(self.b, to.b, t),
            lerp_f64(self.a, to.a, t),
        )
    }
}

/// Entry-wise blend of all 16 matrix entries.
///
/// This is not a decomposed (scale/rotate/translate) interpolation: halfway
/// between two rotations is generally not a rotation.
impl Lerp for Mat4 {
    fn lerp(&self, to: &Self, t: f64) -> Self {
        let mut cols = self.cols;
        for (col, to_col) in cols.iter_mut().zip(to.cols.iter()) {
            for (cell, to_cell) in col.iter_mut().zip(to_col.iter()) {
                *cell = lerp_f64(*cell, *to_cell, t);
            }
        }
        Mat4 { cols }
    }
}

/// Discriminant of an [`AnimatableValue`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ValueKind {
    Scalar,
    Point,
    Size,
    Rect,
    Color,
    Transform,
}

impl std::fmt::Display for ValueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ValueKind::Scalar => "scalar",
            ValueKind::Point => "point",
            ValueKind::Size => "size",
            ValueKind::Rect => "rect",
            ValueKind::Color => "color",
            ValueKind::Transform => "transform",
        };
        f.write_str(name)
    }
}

/// A single keyframe value
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", content = "value", rename_all = "snake_case"))]
pub enum AnimatableValue {
    Scalar(f64),
    Point(Point),
    Size(Size),
    Rect(Rect),
    Color(Color),
    Transform(Mat4),
}

impl AnimatableValue {
    pub fn kind(&self) -> ValueKind {
        match self {
            AnimatableValue::Scalar(_) => ValueKind::Scalar,
            AnimatableValue::Point(_) => ValueKind::Point,
            AnimatableValue::Size(_) => ValueKind::Size,
            AnimatableValue::Rect(_) => ValueKind::Rect,
            AnimatableValue::Color(_) => ValueKind::Color,
            AnimatableValue::Transform(_) => ValueKind::Transform,
        }
    }

    /// Interpolate towards `to` with the default interpolation for the kind
    ///
    /// Fails with [`AnimationError::MismatchedValueKind`] when the kinds differ.
    pub fn lerp(&self, to: &Self, t: f64) -> Result<Self> {
        use AnimatableValue as V;

        Ok(match (self, to) {
            (V::Scalar(a), V::Scalar(b)) => V::Scalar(a.lerp(b, t)),
            (V::Point(a), V::Point(b)) => V::Point(a.lerp(b, t)),
            (V::Size(a), V::Size(b)) => V::Size(a.lerp(b, t)),
            (V::Rect(a), V::Rect(b)) => V::Rect(a.lerp(b, t)),
            (V::Color(a), V::Color(b)) => V::Color(a.lerp(b, t)),
            (V::Transform(a), V::Transform(b)) => V::Transform(a.lerp(b, t)),
            _ => {
                return Err(AnimationError::MismatchedValueKind {
                    from: self.kind(),
                    to: to.kind(),
                })
            }
        })
    }

    pub fn as_scalar(&self) -> Option<f64> {
        match self {
            AnimatableValue::Scalar(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_point(&self) -> Option<Point> {
        match self {
            AnimatableValue::Point(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_size(&self) -> Option<Size> {
        match self {
            AnimatableValue::Size(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_rect(&self) -> Option<Rect> {
        match self {
            AnimatableValue::Rect(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_color(&self) -> Option<Color> {
        match self {
            AnimatableValue::Color(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_transform(&self) -> Option<Mat4> {
        match self {
            AnimatableValue::Transform(v) => Some(*v),
            _ => None,
        }
    }
}

impl From<f64> for AnimatableValue {
    fn from(value: f64) -> Self {
        AnimatableValue::Scalar(value)
    }
}

impl From<Point> for AnimatableValue {
    fn from(value: Point) -> Self {
        AnimatableValue::Point(value)
    }
}

impl From<Size> for AnimatableValue {
    fn from(value: Size) -> Self {
        AnimatableValue::Size(value)
    }
}

impl From<Rect> for AnimatableValue {
    fn from(value: Rect) -> Self {
        AnimatableValue::Rect(value)
    }
}

impl From<Color> for AnimatableValue {
    fn from(value: Color) -> Self {
        AnimatableValue::Color(value)
    }
}

impl From<Mat4> for AnimatableValue {
    fn from(value: Mat4) -> Self {
        AnimatableValue::Transform(value)
    }
}
