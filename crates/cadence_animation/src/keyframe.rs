//! Keyframe animation descriptors
//!
//! A [`KeyframeAnimation`] is the finished product of the builder: the key path
//! of the animated property, one value per keyframe and the matching key times.
//! It carries no playback state; a playback engine reads it and owns the
//! timing from there.

#[cfg(feature = "serde")]
use std::cmp::Ordering;

use tracing::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{AnimationError, Result};
use crate::value::{AnimatableValue, ValueKind};

/// A single keyframe: a value at a normalized time
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Keyframe {
    /// Time position (0.0 to 1.0)
    pub time: f64,
    /// Value at this keyframe
    pub value: AnimatableValue,
}

/// An immutable keyframe animation
///
/// Key times and values always have the same length, key times never
/// decrease, the first is 0.0 and the last is 1.0.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawKeyframeAnimation"))]
pub struct KeyframeAnimation {
    key_path: String,
    values: Vec<AnimatableValue>,
    key_times: Vec<f64>,
    /// Duration in milliseconds, if the caller tracks one
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    duration_ms: Option<u32>,
}

/// Wire shape of [`KeyframeAnimation`], checked before it becomes one
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawKeyframeAnimation {
    key_path: String,
    values: Vec<AnimatableValue>,
    key_times: Vec<f64>,
    #[serde(default)]
    duration_ms: Option<u32>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawKeyframeAnimation> for KeyframeAnimation {
    type Error = AnimationError;

    fn try_from(raw: RawKeyframeAnimation) -> Result<Self> {
        if raw.key_path.trim().is_empty() {
            return Err(AnimationError::EmptyKeyPath);
        }
        if raw.values.len() != raw.key_times.len() {
            return Err(AnimationError::InvalidDescriptor(format!(
                "{} values but {} key times",
                raw.values.len(),
                raw.key_times.len()
            )));
        }

        let (Some(&first), Some(&last)) = (raw.key_times.first(), raw.key_times.last()) else {
            return Err(AnimationError::InvalidDescriptor("no keyframes".into()));
        };
        if first != 0.0 || last != 1.0 {
            return Err(AnimationError::InvalidDescriptor(format!(
                "key times run from {first} to {last}, expected 0 to 1"
            )));
        }
        let out_of_order = raw.key_times.windows(2).any(|pair| {
            matches!(
                pair[0].partial_cmp(&pair[1]),
                None | Some(Ordering::Greater)
            )
        });
        if out_of_order {
            return Err(AnimationError::InvalidDescriptor("key times decrease".into()));
        }

        let kind = raw.values[0].kind();
        if let Some(other) = raw.values.iter().find(|v| v.kind() != kind) {
            return Err(AnimationError::MismatchedValueKind {
                from: kind,
                to: other.kind(),
            });
        }

        Ok(Self::from_parts(
            raw.key_path,
            raw.values,
            raw.key_times,
            raw.duration_ms,
        ))
    }
}

impl KeyframeAnimation {
    /// Callers guarantee the length and ordering invariants
    pub(crate) fn from_parts(
        key_path: String,
        values: Vec<AnimatableValue>,
        key_times: Vec<f64>,
        duration_ms: Option<u32>,
    ) -> Self {
        debug_assert_eq!(values.len(), key_times.len());
        Self {
            key_path,
            values,
            key_times,
            duration_ms,
        }
    }

    /// Start a builder for the given key path
    pub fn builder(key_path: impl Into<String>) -> crate::builder::KeyframeBuilder {
        crate::builder::KeyframeBuilder::new(key_path)
    }

    /// Concatenate animations of the same property into one
    ///
    /// See [`concatenate`].
    pub fn concatenate(animations: &[KeyframeAnimation]) -> Result<KeyframeAnimation> {
        concatenate(animations)
    }

    /// Name of the animated property
    pub fn key_path(&self) -> &str {
        &self.key_path
    }

    /// Keyframe values, in order
    pub fn values(&self) -> &[AnimatableValue] {
        &self.values
    }

    /// Normalized key times (0.0 to 1.0), in order
    pub fn key_times(&self) -> &[f64] {
        &self.key_times
    }

    pub fn duration_ms(&self) -> Option<u32> {
        self.duration_ms
    }

    /// Copy of this animation carrying a duration
    pub fn with_duration_ms(mut self, duration_ms: u32) -> Self {
        self.duration_ms = Some(duration_ms);
        self
    }

    /// Number of keyframes
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Kind shared by every value in the track
    pub fn value_kind(&self) -> Option<ValueKind> {
        self.values.first().map(AnimatableValue::kind)
    }

    pub fn first_value(&self) -> Option<&AnimatableValue> {
        self.values.first()
    }

    pub fn last_value(&self) -> Option<&AnimatableValue> {
        self.values.last()
    }

    /// Iterate over `(time, value)` pairs
    pub fn keyframes(&self) -> impl Iterator<Item = Keyframe> + '_ {
        self.key_times
            .iter()
            .zip(self.values.iter())
            .map(|(&time, &value)| Keyframe { time, value })
    }

    /// Sample the track at a specific progress (0.0 to 1.0)
    ///
    /// Reads the track the way a linear playback engine would: straight-line
    /// interpolation between the two bracketing keyframes. Where two keyframes
    /// share a time (a concatenation seam) the later one wins.
    pub fn sample_at(&self, progress: f64) -> Option<AnimatableValue> {
        let progress = progress.clamp(0.0, 1.0);

        // Number of keyframes at or before `progress`
        let next = self.key_times.partition_point(|&t| t <= progress);
        if next == 0 {
            return self.values.first().copied();
        }
        if next >= self.key_times.len().min(self.values.len()) {
            return self.values.last().copied();
        }

        let prev = next - 1;
        let (t0, t1) = (self.key_times[prev], self.key_times[next]);
        let local_progress = (progress - t0) / (t1 - t0);
        self.values[prev].lerp(&self.values[next], local_progress).ok()
    }
}

/// Concatenate animations of the same property into one track
///
/// Each input keeps all of its keyframes and is squeezed into a contiguous
/// slice of 0..1, in order. When every input carries a duration the slices
/// are proportional to the durations and the result carries their sum;
/// otherwise every input gets an equal slice. Seams keep both boundary
/// frames, so the combined key times repeat at each seam.
pub fn concatenate(animations: &[KeyframeAnimation]) -> Result<KeyframeAnimation> {
    let first = animations
        .first()
        .ok_or(AnimationError::EmptyConcatenation)?;

    let kind = first.value_kind();
    for animation in &animations[1..] {
        if animation.key_path != first.key_path {
            return Err(AnimationError::MismatchedKeyPath {
                expected: first.key_path.clone(),
                found: animation.key_path.clone(),
            });
        }
        if let (Some(expected), Some(found)) = (kind, animation.value_kind()) {
            if expected != found {
                return Err(AnimationError::MismatchedValueKind {
                    from: expected,
                    to: found,
                });
            }
        }
    }

    let durations: Option<Vec<u32>> = animations.iter().map(|a| a.duration_ms).collect();
    let total_ms: u64 = durations
        .as_ref()
        .map(|d| d.iter().map(|&ms| ms as u64).sum())
        .unwrap_or(0);

    let weights: Vec<f64> = match &durations {
        Some(durations) if total_ms > 0 => durations.iter().map(|&ms| ms as f64).collect(),
        _ => vec![1.0; animations.len()],
    };
    let total_weight: f64 = weights.iter().sum();

    let frame_count = animations.iter().map(KeyframeAnimation::len).sum();
    let mut values = Vec::with_capacity(frame_count);
    let mut key_times = Vec::with_capacity(frame_count);

    let mut offset = 0.0;
    for (animation, weight) in animations.iter().zip(&weights) {
        let start = offset / total_weight;
        let width = weight / total_weight;
        key_times.extend(animation.key_times.iter().map(|t| start + t * width));
        values.extend_from_slice(&animation.values);
        offset += weight;
    }

    if let Some(last) = key_times.last_mut() {
        *last = 1.0;
    }

    let duration_ms = match durations {
        Some(_) if total_ms > 0 => Some(total_ms.min(u32::MAX as u64) as u32),
        _ => None,
    };

    debug!(
        "concatenated {} animations on '{}' into {} keyframes",
        animations.len(),
        first.key_path,
        values.len()
    );

    Ok(KeyframeAnimation::from_parts(
        first.key_path.clone(),
        values,
        key_times,
        duration_ms,
    ))
}
