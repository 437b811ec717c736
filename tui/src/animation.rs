//! Animation
//!
//! Frame-rate independent tweens with easing. A tween is advanced by the
//! render loop's frame delta and can be retargeted mid-flight, in which case
//! it restarts from whatever value it is currently showing.

use std::time::Duration;

/// Easing functions for smooth animation
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum EasingFunction {
    /// No easing (constant speed)
    Linear,

    /// Cubic ease out
    #[default]
    EaseOutCubic,
}

impl EasingFunction {
    /// Apply the easing function to a progress value (0.0 to 1.0)
    #[must_use]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);

        match self {
            Self::Linear => t,
            Self::EaseOutCubic => 1.0 - (1.0 - t).powi(3),
        }
    }
}

/// An eased transition between two scalar values
#[derive(Clone, Debug, PartialEq)]
pub struct Tween {
    from: f32,
    to: f32,
    elapsed: Duration,
    duration: Duration,
    easing: EasingFunction,
}

impl Tween {
    /// A tween already resting at `value`
    pub fn settled(value: f32, duration: Duration) -> Self {
        Self {
            from: value,
            to: value,
            elapsed: duration,
            duration,
            easing: EasingFunction::default(),
        }
    }

    /// Use a different easing curve
    #[must_use]
    pub fn with_easing(mut self, easing: EasingFunction) -> Self {
        self.easing = easing;
        self
    }

    /// Start moving toward `target` from the current value
    pub fn retarget(&mut self, target: f32) {
        self.from = self.value();
        self.to = target;
        self.elapsed = Duration::ZERO;
    }

    /// Advance by one frame
    pub fn update(&mut self, delta: Duration) {
        self.elapsed = (self.elapsed + delta).min(self.duration);
    }

    /// Jump to the end of the transition
    pub fn finish(&mut self) {
        self.elapsed = self.duration;
    }

    /// Linear progress through the transition (1.0 when settled)
    pub fn progress(&self) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (self.elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }

    /// Value shown this frame
    pub fn value(&self) -> f32 {
        if self.is_settled() {
            return self.to;
        }
        let eased = self.easing.apply(self.progress());
        self.from + (self.to - self.from) * eased
    }

    /// Has the transition reached its target?
    pub fn is_settled(&self) -> bool {
        self.elapsed >= self.duration
    }
}
