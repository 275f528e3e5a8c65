//! Animation presets for common effects
//!
//! Pre-built keyframe animations on conventional key paths. Each one goes
//! through [`KeyframeBuilder`] like any caller-built animation.

use cadence_core::{Color, Mat4, Point, Rect};

use crate::builder::KeyframeBuilder;
use crate::config::KeyframeConfig;
use crate::easing::Easing;
use crate::error::Result;
use crate::keyframe::{concatenate, KeyframeAnimation};

/// Pre-built animation presets for common patterns
pub struct AnimationPreset;

impl AnimationPreset {
    // ========================================================================
    // Fade animations
    // ========================================================================

    /// Fade in from transparent to opaque
    pub fn fade_in(duration_ms: u32) -> Result<KeyframeAnimation> {
        KeyframeBuilder::new("opacity")
            .config(KeyframeConfig::coarse().with_easing(Easing::EaseOut))
            .duration_ms(duration_ms)
            .scalar(0.0, 1.0)
    }

    /// Fade out from opaque to transparent
    pub fn fade_out(duration_ms: u32) -> Result<KeyframeAnimation> {
        KeyframeBuilder::new("opacity")
            .config(KeyframeConfig::coarse().with_easing(Easing::EaseIn))
            .duration_ms(duration_ms)
            .scalar(1.0, 0.0)
    }

    // ========================================================================
    // Motion
    // ========================================================================

    /// Pop in from nothing with a slight overshoot
    pub fn pop_in(duration_ms: u32) -> Result<KeyframeAnimation> {
        KeyframeBuilder::new("transform.scale")
            .config(KeyframeConfig::smooth().with_easing(Easing::EaseOutBack))
            .duration_ms(duration_ms)
            .scalar(0.0, 1.0)
    }

    /// Slide a layer's position between two points
    pub fn slide(from: Point, to: Point, duration_ms: u32) -> Result<KeyframeAnimation> {
        KeyframeBuilder::new("position")
            .config(KeyframeConfig::smooth().with_easing(Easing::EaseInOutCubic))
            .duration_ms(duration_ms)
            .point(from, to)
    }

    /// Blend to `to` and back to `from`, each half taking `duration_ms / 2`
    pub fn color_pulse(from: Color, to: Color, duration_ms: u32) -> Result<KeyframeAnimation> {
        let half = duration_ms / 2;
        let builder = KeyframeBuilder::new("backgroundColor")
            .config(KeyframeConfig::smooth().with_easing(Easing::EaseInOutSine))
            .duration_ms(half);

        concatenate(&[builder.color(from, to)?, builder.color(to, from)?])
    }

    // ========================================================================
    // Ken Burns
    // ========================================================================

    /// Slow zoom-and-pan over an image filling `frame`
    ///
    /// Scales from 1 to `zoom` while the origin drifts into the slack the zoom
    /// creates. `pan` picks where the drift heads, each component from 0.0
    /// (stay on the leading edge) to 1.0 (travel to the trailing edge).
    pub fn ken_burns(
        frame: Rect,
        zoom: f64,
        pan: Point,
        duration_ms: u32,
        easing: Easing,
    ) -> Result<KeyframeAnimation> {
        let slack_x = (1.0 - zoom) * frame.width();
        let slack_y = (1.0 - zoom) * frame.height();
        let end = Mat4::translation(slack_x * pan.x, slack_y * pan.y, 0.0)
            .mul(&Mat4::scale(zoom, zoom, 1.0));

        KeyframeBuilder::new("transform")
            .config(KeyframeConfig::precise().with_easing(easing))
            .duration_ms(duration_ms)
            .transform(Mat4::IDENTITY, end)
    }

    /// Opacity track for a Ken Burns image: hold, then fade out at the end
    pub fn ken_burns_fade(duration_ms: u32, fade_out_ms: u32) -> Result<KeyframeAnimation> {
        let hold_ms = duration_ms.saturating_sub(fade_out_ms);
        let fade_ms = duration_ms - hold_ms;

        let fade = KeyframeBuilder::new("opacity")
            .config(KeyframeConfig::coarse())
            .duration_ms(fade_ms)
            .scalar(1.0, 0.0)?;
        if hold_ms == 0 {
            return Ok(fade);
        }

        let hold = KeyframeBuilder::new("opacity")
            .steps(1)
            .duration_ms(hold_ms)
            .scalar(1.0, 1.0)?;

        concatenate(&[hold, fade])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::AnimatableValue;

    #[test]
    fn test_fades() {
        let fade_in = AnimationPreset::fade_in(300).unwrap();
        assert_eq!(fade_in.key_path(), "opacity");
        assert_eq!(fade_in.first_value(), Some(&AnimatableValue::Scalar(0.0)));
        assert_eq!(fade_in.last_value(), Some(&AnimatableValue::Scalar(1.0)));
        assert_eq!(fade_in.duration_ms(), Some(300));

        let fade_out = AnimationPreset::fade_out(300).unwrap();
        assert_eq!(fade_out.last_value(), Some(&AnimatableValue::Scalar(0.0)));
    }

    #[test]
    fn test_pop_in_overshoots() {
        let pop = AnimationPreset::pop_in(250).unwrap();
        let overshoots = pop
            .values()
            .iter()
            .filter_map(AnimatableValue::as_scalar)
            .any(|v| v > 1.0);
        assert!(overshoots);
    }

    #[test]
    fn test_color_pulse_returns_home() {
        let pulse = AnimationPreset::color_pulse(Color::BLACK, Color::WHITE, 1000).unwrap();
        assert_eq!(pulse.duration_ms(), Some(1000));
        assert_eq!(pulse.first_value(), Some(&AnimatableValue::Color(Color::BLACK)));
        assert_eq!(pulse.last_value(), Some(&AnimatableValue::Color(Color::BLACK)));
        assert_eq!(pulse.sample_at(0.5), Some(AnimatableValue::Color(Color::WHITE)));
    }

    #[test]
    fn test_ken_burns_end_state() {
        let frame = Rect::new(0.0, 0.0, 400.0, 300.0);
        let anim = AnimationPreset::ken_burns(
            frame,
            1.5,
            Point::new(1.0, 0.5),
            18_000,
            Easing::EaseOutCubic,
        )
        .unwrap();

        let end = anim.last_value().and_then(AnimatableValue::as_transform).unwrap();
        // Top-left corner drifts by the full horizontal slack, half the vertical
        assert_eq!(end.transform_point(Point::ZERO), Point::new(-200.0, -75.0));
        // Bottom-right corner stays outside the frame
        let corner = end.transform_point(Point::new(400.0, 300.0));
        assert!(corner.x >= 400.0 && corner.y >= 300.0);
    }

    #[test]
    fn test_ken_burns_fade() {
        let fade = AnimationPreset::ken_burns_fade(10_000, 2_000).unwrap();
        assert_eq!(fade.duration_ms(), Some(10_000));
        assert_eq!(fade.sample_at(0.5), Some(AnimatableValue::Scalar(1.0)));
        assert_eq!(fade.sample_at(0.8), Some(AnimatableValue::Scalar(1.0)));
        assert_eq!(fade.last_value(), Some(&AnimatableValue::Scalar(0.0)));

        // Fade longer than the whole animation: just the fade
        let fade_only = AnimationPreset::ken_burns_fade(1_000, 5_000).unwrap();
        assert_eq!(fade_only.duration_ms(), Some(1_000));
        assert_eq!(fade_only.first_value(), Some(&AnimatableValue::Scalar(1.0)));
    }
}
