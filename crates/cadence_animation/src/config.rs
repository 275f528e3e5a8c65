//! Builder defaults

use crate::easing::Easing;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of steps used when none is given (`steps + 1` keyframes)
pub const DEFAULT_STEPS: usize = 100;

/// Largest accepted step count
pub const MAX_STEPS: usize = 100_000;

/// Sampling defaults for a [`KeyframeBuilder`](crate::builder::KeyframeBuilder)
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct KeyframeConfig {
    /// Number of intervals between the first and last keyframe
    pub steps: usize,
    /// Time function used when the builder is not given one
    pub easing: Easing,
}

impl KeyframeConfig {
    pub fn new(steps: usize, easing: Easing) -> Self {
        Self { steps, easing }
    }

    /// Few samples, for short UI transitions
    pub fn coarse() -> Self {
        Self::new(20, Easing::Linear)
    }

    /// Enough samples that linear playback between them reads as a curve
    pub fn smooth() -> Self {
        Self::new(60, Easing::EaseInOut)
    }

    /// Dense sampling for long or springy motion
    pub fn precise() -> Self {
        Self::new(240, Easing::Linear)
    }

    pub fn with_steps(mut self, steps: usize) -> Self {
        self.steps = steps;
        self
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }
}

impl Default for KeyframeConfig {
    fn default() -> Self {
        Self::new(DEFAULT_STEPS, Easing::Linear)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = KeyframeConfig::default();
        assert_eq!(config.steps, DEFAULT_STEPS);
        assert_eq!(config.easing, Easing::Linear);
    }

    #[test]
    fn test_presets_are_ordered_by_density() {
        assert!(KeyframeConfig::coarse().steps < KeyframeConfig::smooth().steps);
        assert!(KeyframeConfig::smooth().steps < KeyframeConfig::precise().steps);
    }

    #[test]
    fn test_builders() {
        let config = KeyframeConfig::coarse()
            .with_steps(7)
            .with_easing(Easing::EaseOutExpo);
        assert_eq!(config, KeyframeConfig::new(7, Easing::EaseOutExpo));
    }
}
