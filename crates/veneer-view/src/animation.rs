//! Animation curves, options and keyframe descriptions.

use bitflags::bitflags;

/// Timing curve for a single animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnimationCurve {
    /// Slow start and slow end.
    #[default]
    EaseInOut,
    /// Slow start.
    EaseIn,
    /// Slow end.
    EaseOut,
    /// Constant pace.
    Linear,
}

impl AnimationCurve {
    /// Evaluates the curve at `t` in `[0, 1]` (clamped), returning eased
    /// progress in `[0, 1]`. Quadratic easing.
    pub fn value_at(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseIn => t * t,
            Self::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
            Self::EaseInOut => t * t * (3.0 - 2.0 * t),
        }
    }
}

bitflags! {
    /// Animation option flags.
    ///
    /// The curve occupies bits 16-17; ease-in-out is the all-zero default,
    /// so it is represented by an empty set.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct AnimationOptions: u32 {
        /// Lay out subviews at commit time alongside the animation.
        const LAYOUT_SUBVIEWS = 1 << 0;
        /// Allow user interaction while animating.
        const ALLOW_USER_INTERACTION = 1 << 1;
        /// Repeat the animation indefinitely.
        const REPEAT = 1 << 3;
        /// Run the animation backwards and forwards alternately.
        const AUTOREVERSE = 1 << 4;
        /// Ease-in timing curve.
        const CURVE_EASE_IN = 1 << 16;
        /// Ease-out timing curve.
        const CURVE_EASE_OUT = 2 << 16;
        /// Linear timing curve.
        const CURVE_LINEAR = 3 << 16;
    }
}

impl From<AnimationCurve> for AnimationOptions {
    fn from(curve: AnimationCurve) -> Self {
        match curve {
            AnimationCurve::EaseInOut => Self::empty(),
            AnimationCurve::EaseIn => Self::CURVE_EASE_IN,
            AnimationCurve::EaseOut => Self::CURVE_EASE_OUT,
            AnimationCurve::Linear => Self::CURVE_LINEAR,
        }
    }
}

/// An animation attached to a view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Animation {
    /// Duration in seconds.
    pub duration: f32,
    /// Timing curve.
    pub curve: AnimationCurve,
}

impl Animation {
    /// Creates an animation with the given duration and curve.
    pub const fn new(duration: f32, curve: AnimationCurve) -> Self {
        Self { duration, curve }
    }
}

/// Duration of the popup appearance keyframe animation, in seconds.
const POPUP_APPEARANCE_DURATION: f32 = 0.5;

/// Duration of the popup disappearance keyframe animation, in seconds.
const POPUP_DISAPPEARANCE_DURATION: f32 = 0.18;

/// A scalar keyframe animation: values sampled at normalized key times.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyframeAnimation {
    /// Normalized key times in `[0, 1]`, ascending.
    pub key_times: Vec<f32>,
    /// Value at each key time.
    pub values: Vec<f32>,
    /// Total duration in seconds.
    pub duration: f32,
    /// Whether the final value is held after the animation completes.
    pub fill_forwards: bool,
    /// Whether the animation is removed once it completes.
    pub removed_on_completion: bool,
}

impl KeyframeAnimation {
    /// Creates a keyframe animation.
    ///
    /// # Panics
    ///
    /// Panics when `key_times` and `values` differ in length or are empty;
    /// a keyframe animation without keyframes is a programmer error.
    pub fn new(key_times: Vec<f32>, values: Vec<f32>, duration: f32) -> Self {
        assert!(
            !key_times.is_empty() && key_times.len() == values.len(),
            "key times and values must be non-empty and of equal length"
        );
        Self {
            key_times,
            values,
            duration,
            fill_forwards: false,
            removed_on_completion: true,
        }
    }

    /// Popup appearance animation: an overshoot-and-settle scale.
    pub fn popup_appearance() -> Self {
        let mut animation = Self::new(
            vec![0.0, 0.5, 0.9, 1.0],
            vec![0.5, 1.2, 0.9, 1.0],
            POPUP_APPEARANCE_DURATION,
        );
        animation.fill_forwards = true;
        animation.removed_on_completion = false;
        animation
    }

    /// Popup disappearance animation: a collapse to near-zero scale.
    pub fn popup_disappearance() -> Self {
        let mut animation = Self::new(
            vec![0.0, 1.0],
            vec![1.0, 0.01],
            POPUP_DISAPPEARANCE_DURATION,
        );
        animation.fill_forwards = true;
        animation.removed_on_completion = false;
        animation
    }

    /// Samples the animation at the given time in seconds, interpolating
    /// linearly between keyframes and clamping outside the duration.
    pub fn value_at(&self, seconds: f32) -> f32 {
        let progress = if self.duration > 0.0 {
            (seconds / self.duration).clamp(0.0, 1.0)
        } else {
            1.0
        };

        if progress <= self.key_times[0] {
            return self.values[0];
        }

        for window in 0..self.key_times.len() - 1 {
            let (t0, t1) = (self.key_times[window], self.key_times[window + 1]);
            if progress <= t1 {
                let span = t1 - t0;
                let local = if span > 0.0 { (progress - t0) / span } else { 1.0 };
                let (v0, v1) = (self.values[window], self.values[window + 1]);
                return v0 + (v1 - v0) * local;
            }
        }

        *self.values.last().expect("keyframes are never empty")
    }
}
