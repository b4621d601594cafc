//! Tween domain: fixed-duration timers and idle oscillators.
//!
//! Every animated sequence in the game is a small state object that owns one
//! or more [`Tween`]s and is advanced by a system with the frame delta.
//! Curves come from [`EaseFunction`].

#[cfg(test)]
mod tests;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::f32::consts::TAU;
use std::time::Duration;

/// Shortest duration a tween may have. Keeps progress finite.
const MIN_TWEEN_DURATION: f32 = 0.0001;

/// Remaining time under which a tween counts as finished. Absorbs the
/// rounding of f32 frame deltas into `Duration`.
const FINISH_TOLERANCE: f32 = 0.00001;

/// One-shot [`Timer`] driving a fixed-duration interpolation.
#[derive(Debug, Clone, PartialEq)]
pub struct Tween {
    timer: Timer,
}

impl Tween {
    pub fn new(duration: f32) -> Self {
        Self {
            timer: Timer::from_seconds(duration.max(MIN_TWEEN_DURATION), TimerMode::Once),
        }
    }

    /// Advance by `delta` seconds and return linear progress in [0, 1].
    pub fn tick(&mut self, delta: f32) -> f32 {
        self.timer.tick(Duration::from_secs_f32(delta.max(0.0)));
        if !self.timer.is_finished() && self.timer.remaining_secs() < FINISH_TOLERANCE {
            let remaining = self.timer.remaining();
            self.timer.tick(remaining);
        }
        self.progress()
    }

    pub fn progress(&self) -> f32 {
        self.timer.fraction()
    }

    /// Progress shaped by `ease`.
    pub fn eased(&self, ease: EaseFunction) -> f32 {
        ease.sample_clamped(self.progress())
    }

    pub fn finished(&self) -> bool {
        self.timer.is_finished()
    }

    pub fn duration(&self) -> f32 {
        self.timer.duration().as_secs_f32()
    }
}

/// Fade of a single alpha value towards a target.
#[derive(Debug, Clone, PartialEq)]
pub struct AlphaFade {
    pub alpha: f32,
    from: f32,
    to: f32,
    tween: Option<Tween>,
}

impl AlphaFade {
    pub fn new(alpha: f32) -> Self {
        Self {
            alpha,
            from: alpha,
            to: alpha,
            tween: None,
        }
    }

    /// Start fading from the current alpha to `target`, replacing any fade
    /// already running.
    pub fn fade_to(&mut self, target: f32, duration: f32) {
        self.from = self.alpha;
        self.to = target;
        self.tween = Some(Tween::new(duration));
    }

    pub fn tick(&mut self, delta: f32) {
        let Some(tween) = self.tween.as_mut() else {
            return;
        };
        tween.tick(delta);
        self.alpha = self.from.lerp(self.to, tween.eased(EaseFunction::CubicOut));
        if tween.finished() {
            self.alpha = self.to;
            self.tween = None;
        }
    }

    #[cfg(test)]
    pub fn is_fading(&self) -> bool {
        self.tween.is_some()
    }
}

/// Sinusoidal idle motion: vertical float, tilt and breathing scale.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize, Reflect)]
pub struct Oscillation {
    pub float_amplitude: f32,
    pub float_speed: f32,
    pub rot_amplitude: f32,
    pub rot_speed: f32,
    pub scale_amplitude: f32,
    pub scale_speed: f32,
}

impl Default for Oscillation {
    fn default() -> Self {
        Self {
            float_amplitude: 10.0,
            float_speed: 0.6,
            rot_amplitude: 1.5,
            rot_speed: 0.35,
            scale_amplitude: 0.01,
            scale_speed: 0.5,
        }
    }
}

/// One sample of an [`Oscillation`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OscillationSample {
    pub offset_y: f32,
    /// Degrees
    pub rotation: f32,
    pub scale: f32,
}

impl Oscillation {
    /// Sample with angular speeds in radians per second. Phase offsets are
    /// spread across channels so they do not move in lockstep.
    pub fn sample(&self, time: f32, phase: f32) -> OscillationSample {
        OscillationSample {
            offset_y: (time * self.float_speed + phase).sin() * self.float_amplitude,
            rotation: (time * self.rot_speed + phase * 0.8).sin() * self.rot_amplitude,
            scale: 1.0 + (time * self.scale_speed + phase * 0.6).sin() * self.scale_amplitude,
        }
    }

    /// Sample with speeds in cycles per second.
    pub fn sample_cycles(&self, time: f32, phase: f32) -> OscillationSample {
        let t = time * TAU;
        OscillationSample {
            offset_y: (t * self.float_speed + phase).sin() * self.float_amplitude,
            rotation: (t * self.rot_speed + phase * 0.5).sin() * self.rot_amplitude,
            scale: 1.0 + (t * self.scale_speed + phase * 0.25).sin() * self.scale_amplitude,
        }
    }
}

/// Random phase so several idle items desynchronize.
pub fn random_phase(rng: &mut impl rand::Rng) -> f32 {
    rng.random::<f32>() * TAU
}

/// Random offset inside a circle of `radius`.
pub fn random_in_circle(rng: &mut impl rand::Rng, radius: f32) -> Vec2 {
    if radius <= 0.0 {
        return Vec2::ZERO;
    }
    let angle = rng.random::<f32>() * TAU;
    let distance = rng.random::<f32>().sqrt() * radius;
    Vec2::new(angle.cos(), angle.sin()) * distance
}

/// Continuously cycling outline hue in degrees.
pub fn cycling_hue(time: f32, hue_speed: f32) -> f32 {
    (time * hue_speed).rem_euclid(1.0) * 360.0
}
