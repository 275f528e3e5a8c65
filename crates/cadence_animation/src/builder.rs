//! Parametric keyframe construction
//!
//! Turns a time function, a value function and two endpoints into a
//! [`KeyframeAnimation`]. Sampling is uniform in real time: key time `i` is
//! always `i / steps`. The time function only warps the progress handed to
//! the value function, so easing shapes the values and never the grid.
//!
//! # Example
//!
//! ```rust
//! use cadence_animation::{build_scalar, Easing, KeyframeAnimation};
//!
//! let fade = build_scalar("opacity", |t| t, 0.0, 1.0).unwrap();
//! assert_eq!(fade.len(), 101);
//!
//! let slide = KeyframeAnimation::builder("position.x")
//!     .easing(Easing::EaseOutCubic)
//!     .steps(30)
//!     .scalar(0.0, 240.0)
//!     .unwrap();
//! assert_eq!(slide.key_times().len(), 31);
//! ```

use std::fmt;
use std::sync::Arc;

use cadence_core::{Color, Mat4, Point, Rect, Size};
use tracing::{debug, trace};

use crate::config::{KeyframeConfig, DEFAULT_STEPS, MAX_STEPS};
use crate::easing::{Easing, TimeFn};
use crate::error::{AnimationError, Result};
use crate::keyframe::KeyframeAnimation;
use crate::value::{AnimatableValue, Lerp};

/// Fluent builder for parametric keyframe animations
///
/// Terminal methods borrow the builder, so one configured builder can
/// produce several tracks.
///
/// # Example
///
/// ```ignore
/// let builder = KeyframeBuilder::new("bounds")
///     .easing(Easing::EaseInOut)
///     .steps(60)
///     .duration_ms(400);
///
/// let grow = builder.rect(small, large)?;
/// let shrink = builder.rect(large, small)?;
/// ```
#[derive(Clone)]
pub struct KeyframeBuilder {
    key_path: String,
    /// Overrides `config.easing` when set
    time_fn: Option<TimeFn>,
    config: KeyframeConfig,
    duration_ms: Option<u32>,
}

impl fmt::Debug for KeyframeBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyframeBuilder")
            .field("key_path", &self.key_path)
            .field("custom_time_fn", &self.time_fn.is_some())
            .field("config", &self.config)
            .field("duration_ms", &self.duration_ms)
            .finish()
    }
}

impl KeyframeBuilder {
    /// Create a builder for the given key path with default config
    pub fn new(key_path: impl Into<String>) -> Self {
        Self {
            key_path: key_path.into(),
            time_fn: None,
            config: KeyframeConfig::default(),
            duration_ms: None,
        }
    }

    /// Use a built-in easing curve as the time function
    pub fn easing(mut self, easing: Easing) -> Self {
        self.config.easing = easing;
        self.time_fn = None;
        self
    }

    /// Use a custom time function
    pub fn time_fn<F>(mut self, time_fn: F) -> Self
    where
        F: Fn(f64) -> f64 + Send + Sync + 'static,
    {
        self.time_fn = Some(Arc::new(time_fn));
        self
    }

    /// Set the number of steps (`steps + 1` keyframes), 1 to [`MAX_STEPS`]
    pub fn steps(mut self, steps: usize) -> Self {
        self.config.steps = steps;
        self
    }

    /// Replace step count and easing at once
    pub fn config(mut self, config: KeyframeConfig) -> Self {
        self.config = config;
        self.time_fn = None;
        self
    }

    /// Attach a duration to the built animation
    pub fn duration_ms(mut self, duration_ms: u32) -> Self {
        self.duration_ms = Some(duration_ms);
        self
    }

    /// Key path every track from this builder will carry
    pub fn key_path(&self) -> &str {
        &self.key_path
    }

    /// Configured step count, validated only when a track is built
    pub fn step_count(&self) -> usize {
        self.config.steps
    }

    /// Build with a caller-supplied value function
    pub fn generic<T, F>(&self, value_fn: F, from: T, to: T) -> Result<KeyframeAnimation>
    where
        T: Into<AnimatableValue>,
        F: Fn(&T, &T, f64) -> T,
    {
        self.sample(|t| Ok(value_fn(&from, &to, t).into()))
    }

    /// Build from two dynamically typed values with the default interpolation
    ///
    /// Both values must be of the same kind.
    pub fn values(&self, from: AnimatableValue, to: AnimatableValue) -> Result<KeyframeAnimation> {
        if from.kind() != to.kind() {
            return Err(AnimationError::MismatchedValueKind {
                from: from.kind(),
                to: to.kind(),
            });
        }
        self.sample(|t| from.lerp(&to, t))
    }

    pub fn scalar(&self, from: f64, to: f64) -> Result<KeyframeAnimation> {
        self.lerped(from, to)
    }

    pub fn point(&self, from: Point, to: Point) -> Result<KeyframeAnimation> {
        self.lerped(from, to)
    }

    pub fn size(&self, from: Size, to: Size) -> Result<KeyframeAnimation> {
        self.lerped(from, to)
    }

    pub fn rect(&self, from: Rect, to: Rect) -> Result<KeyframeAnimation> {
        self.lerped(from, to)
    }

    /// Per-channel RGBA blend
    pub fn color(&self, from: Color, to: Color) -> Result<KeyframeAnimation> {
        self.lerped(from, to)
    }

    /// Entry-wise matrix blend, see [`Lerp for Mat4`](crate::value::Lerp)
    pub fn transform(&self, from: Mat4, to: Mat4) -> Result<KeyframeAnimation> {
        self.lerped(from, to)
    }

    fn lerped<T>(&self, from: T, to: T) -> Result<KeyframeAnimation>
    where
        T: Lerp + Into<AnimatableValue>,
    {
        self.generic(T::lerp, from, to)
    }

    fn sample<V>(&self, mut value_at: V) -> Result<KeyframeAnimation>
    where
        V: FnMut(f64) -> Result<AnimatableValue>,
    {
        if self.key_path.trim().is_empty() {
            return Err(AnimationError::EmptyKeyPath);
        }
        let steps = self.config.steps;
        if steps == 0 || steps > MAX_STEPS {
            return Err(AnimationError::InvalidStepCount(steps));
        }

        let easing = self.config.easing;
        let remap = |p: f64| match &self.time_fn {
            Some(time_fn) => (**time_fn)(p),
            None => easing.apply(p),
        };

        let mut values = Vec::with_capacity(steps + 1);
        let mut key_times = Vec::with_capacity(steps + 1);
        for i in 0..=steps {
            let progress = i as f64 / steps as f64;
            let eased = remap(progress);
            values.push(value_at(eased)?);
            key_times.push(progress);
        }

        trace!(
            "sampled '{}': first={:?} last={:?}",
            self.key_path,
            values.first(),
            values.last()
        );
        debug!(
            "built keyframe animation '{}' with {} steps",
            self.key_path, steps
        );

        Ok(KeyframeAnimation::from_parts(
            self.key_path.clone(),
            values,
            key_times,
            self.duration_ms,
        ))
    }
}

// ============================================================================
// Free-function entry points
// ============================================================================

fn builder_with<F>(path: &str, time_fn: F, steps: Option<usize>) -> KeyframeBuilder
where
    F: Fn(f64) -> f64 + Send + Sync + 'static,
{
    KeyframeBuilder::new(path)
        .steps(steps.unwrap_or(DEFAULT_STEPS))
        .time_fn(time_fn)
}

/// Build an animation with a caller-supplied value function
///
/// `steps` defaults to [`DEFAULT_STEPS`].
pub fn build_generic<T, TF, VF>(
    path: &str,
    time_fn: TF,
    value_fn: VF,
    from: T,
    to: T,
    steps: Option<usize>,
) -> Result<KeyframeAnimation>
where
    T: Into<AnimatableValue>,
    TF: Fn(f64) -> f64 + Send + Sync + 'static,
    VF: Fn(&T, &T, f64) -> T,
{
    builder_with(path, time_fn, steps).generic(value_fn, from, to)
}

/// Animate a scalar between `from` and `to`
pub fn build_scalar<F>(path: &str, time_fn: F, from: f64, to: f64) -> Result<KeyframeAnimation>
where
    F: Fn(f64) -> f64 + Send + Sync + 'static,
{
    builder_with(path, time_fn, None).scalar(from, to)
}

/// Animate a point between `from` and `to`
pub fn build_point<F>(path: &str, time_fn: F, from: Point, to: Point) -> Result<KeyframeAnimation>
where
    F: Fn(f64) -> f64 + Send + Sync + 'static,
{
    builder_with(path, time_fn, None).point(from, to)
}

/// Animate a size between `from` and `to`
pub fn build_size<F>(path: &str, time_fn: F, from: Size, to: Size) -> Result<KeyframeAnimation>
where
    F: Fn(f64) -> f64 + Send + Sync + 'static,
{
    builder_with(path, time_fn, None).size(from, to)
}

/// Animate a rect between `from` and `to`
pub fn build_rect<F>(path: &str, time_fn: F, from: Rect, to: Rect) -> Result<KeyframeAnimation>
where
    F: Fn(f64) -> f64 + Send + Sync + 'static,
{
    builder_with(path, time_fn, None).rect(from, to)
}

/// Animate a color between `from` and `to`
pub fn build_color<F>(path: &str, time_fn: F, from: Color, to: Color) -> Result<KeyframeAnimation>
where
    F: Fn(f64) -> f64 + Send + Sync + 'static,
{
    builder_with(path, time_fn, None).color(from, to)
}

/// Animate a transform between `from` and `to`
pub fn build_transform<F>(
    path: &str,
    time_fn: F,
    from: Mat4,
    to: Mat4,
) -> Result<KeyframeAnimation>
where
    F: Fn(f64) -> f64 + Send + Sync + 'static,
{
    builder_with(path, time_fn, None).transform(from, to)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity(t: f64) -> f64 {
        t
    }

    fn scalars(animation: &KeyframeAnimation) -> Vec<f64> {
        animation
            .values()
            .iter()
            .filter_map(AnimatableValue::as_scalar)
            .collect()
    }

    #[test]
    fn test_scalar_four_steps() {
        let anim = KeyframeBuilder::new("opacity")
            .time_fn(identity)
            .steps(4)
            .scalar(0.0, 10.0)
            .unwrap();

        assert_eq!(anim.key_path(), "opacity");
        assert_eq!(scalars(&anim), vec![0.0, 2.5, 5.0, 7.5, 10.0]);
        assert_eq!(anim.key_times(), &[0.0, 0.25, 0.5, 0.75, 1.0]);
    }

    #[test]
    fn test_default_step_count() {
        let anim = build_scalar("x", identity, 0.0, 1.0).unwrap();
        assert_eq!(anim.len(), DEFAULT_STEPS + 1);
        assert_eq!(anim.key_times().first(), Some(&0.0));
        assert_eq!(anim.key_times().last(), Some(&1.0));
    }

    #[test]
    fn test_key_times_ignore_time_fn() {
        let anim = KeyframeBuilder::new("x")
            .easing(Easing::EaseInQuad)
            .steps(2)
            .scalar(0.0, 100.0)
            .unwrap();

        assert_eq!(anim.key_times(), &[0.0, 0.5, 1.0]);
        assert_eq!(scalars(&anim), vec![0.0, 25.0, 100.0]);
    }

    #[test]
    fn test_zero_steps_rejected() {
        let builder = KeyframeBuilder::new("x").steps(0);
        assert_eq!(
            builder.scalar(0.0, 1.0),
            Err(AnimationError::InvalidStepCount(0))
        );
        assert_eq!(
            build_generic("x", identity, |a: &f64, b: &f64, t| a.lerp(b, t), 0.0, 1.0, Some(0)),
            Err(AnimationError::InvalidStepCount(0))
        );
    }

    #[test]
    fn test_oversized_step_count_rejected() {
        assert_eq!(
            KeyframeBuilder::new("x").steps(usize::MAX).scalar(0.0, 1.0),
            Err(AnimationError::InvalidStepCount(usize::MAX))
        );
        assert_eq!(
            build_generic(
                "x",
                identity,
                |a: &f64, b: &f64, t| a.lerp(b, t),
                0.0,
                1.0,
                Some(MAX_STEPS + 1)
            ),
            Err(AnimationError::InvalidStepCount(MAX_STEPS + 1))
        );

        let anim = KeyframeBuilder::new("x")
            .steps(MAX_STEPS)
            .scalar(0.0, 1.0)
            .unwrap();
        assert_eq!(anim.len(), MAX_STEPS + 1);
    }

    #[test]
    fn test_builder_getters() {
        let builder = KeyframeBuilder::new("bounds.size").steps(8);
        assert_eq!(builder.key_path(), "bounds.size");
        assert_eq!(builder.step_count(), 8);

        let builder = builder.config(KeyframeConfig::smooth());
        assert_eq!(builder.step_count(), 60);
        assert_eq!(KeyframeBuilder::new("x").step_count(), DEFAULT_STEPS);
    }

    #[test]
    fn test_empty_key_path_rejected() {
        assert_eq!(
            build_scalar("", identity, 0.0, 1.0),
            Err(AnimationError::EmptyKeyPath)
        );
        assert_eq!(
            build_scalar("   ", identity, 0.0, 1.0),
            Err(AnimationError::EmptyKeyPath)
        );
    }

    #[test]
    fn test_custom_value_fn() {
        // Step function: jump to `to` halfway through
        let anim = build_generic(
            "visible",
            identity,
            |from: &f64, to: &f64, t| if t < 0.5 { *from } else { *to },
            0.0,
            1.0,
            Some(4),
        )
        .unwrap();

        assert_eq!(scalars(&anim), vec![0.0, 0.0, 1.0, 1.0, 1.0]);
    }

    #[test]
    fn test_values_mismatched_kind() {
        let err = KeyframeBuilder::new("x")
            .values(AnimatableValue::Scalar(0.0), Color::RED.into())
            .unwrap_err();
        assert!(matches!(err, AnimationError::MismatchedValueKind { .. }));
    }

    #[test]
    fn test_values_dynamic() {
        let anim = KeyframeBuilder::new("position")
            .steps(2)
            .values(Point::ZERO.into(), Point::new(10.0, 20.0).into())
            .unwrap();
        assert_eq!(anim.values()[1], AnimatableValue::Point(Point::new(5.0, 10.0)));
    }

    #[test]
    fn test_overshoot_is_not_clamped() {
        let anim = KeyframeBuilder::new("x")
            .easing(Easing::EaseOutBack)
            .steps(20)
            .scalar(0.0, 100.0)
            .unwrap();

        let peak = scalars(&anim).into_iter().fold(f64::MIN, f64::max);
        assert!(peak > 100.0);
        assert_eq!(anim.last_value(), Some(&AnimatableValue::Scalar(100.0)));
    }

    #[test]
    fn test_config_resets_custom_time_fn() {
        let builder = KeyframeBuilder::new("x")
            .time_fn(|_| 0.0)
            .config(KeyframeConfig::new(2, Easing::Linear));
        let anim = builder.scalar(0.0, 10.0).unwrap();
        assert_eq!(scalars(&anim), vec![0.0, 5.0, 10.0]);
    }

    #[test]
    fn test_duration_is_carried() {
        let anim = KeyframeBuilder::new("x")
            .duration_ms(250)
            .steps(1)
            .scalar(0.0, 1.0)
            .unwrap();
        assert_eq!(anim.duration_ms(), Some(250));
    }
}
