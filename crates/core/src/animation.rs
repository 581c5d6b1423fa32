//! Scale animation for drop zone feedback.
//!
//! Animations are advanced by the game loop's fixed timestep rather than by
//! wall-clock time, which keeps them deterministic under test.

use crate::types::{NEUTRAL_SCALE, OVERSHOOT_TENSION, SCALE_ANIMATION_DURATION_MS};

/// Interpolator that shoots past the target and settles back.
///
/// `f(t) = (t - 1)^2 * ((tension + 1) * (t - 1) + tension) + 1`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OvershootInterpolator {
    tension: f32,
}

impl Default for OvershootInterpolator {
    fn default() -> Self {
        Self::new(OVERSHOOT_TENSION)
    }
}

impl OvershootInterpolator {
    pub fn new(tension: f32) -> Self {
        Self { tension }
    }

    /// Map linear progress `t` in `[0, 1]` to eased progress.
    pub fn interpolate(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0) - 1.0;
        t * t * ((self.tension + 1.0) * t + self.tension) + 1.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Tween {
    from: f32,
    to: f32,
    elapsed_ms: u32,
}

/// Animated scale factor.
///
/// Starting a new animation supersedes the running one, continuing from the
/// current visual value. When an animation completes the scale is exactly the
/// target.
#[derive(Debug, Clone, PartialEq)]
pub struct ScaleAnimator {
    scale: f32,
    target: f32,
    duration_ms: u32,
    interpolator: OvershootInterpolator,
    tween: Option<Tween>,
}

impl Default for ScaleAnimator {
    fn default() -> Self {
        Self::new(SCALE_ANIMATION_DURATION_MS, OvershootInterpolator::default())
    }
}

impl ScaleAnimator {
    pub fn new(duration_ms: u32, interpolator: OvershootInterpolator) -> Self {
        Self {
            scale: NEUTRAL_SCALE,
            target: NEUTRAL_SCALE,
            duration_ms,
            interpolator,
            tween: None,
        }
    }

    /// Current visual scale.
    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Scale the animator is heading to (or resting at).
    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn is_running(&self) -> bool {
        self.tween.is_some()
    }

    pub fn duration_ms(&self) -> u32 {
        self.duration_ms
    }

    /// Start animating towards `target`.
    pub fn animate_to(&mut self, target: f32) {
        self.target = target;
        if self.duration_ms == 0 {
            self.scale = target;
            self.tween = None;
            return;
        }
        self.tween = Some(Tween {
            from: self.scale,
            to: target,
            elapsed_ms: 0,
        });
    }

    /// Advance the running animation by `dt_ms`.
    pub fn tick(&mut self, dt_ms: u32) {
        let Some(mut tween) = self.tween else {
            return;
        };

        tween.elapsed_ms = tween.elapsed_ms.saturating_add(dt_ms);
        if tween.elapsed_ms >= self.duration_ms {
            self.scale = tween.to;
            self.tween = None;
            return;
        }

        let t = tween.elapsed_ms as f32 / self.duration_ms as f32;
        let eased = self.interpolator.interpolate(t);
        self.scale = tween.from + (tween.to - tween.from) * eased;
        self.tween = Some(tween);
    }
}
