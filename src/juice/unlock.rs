//! Juice domain: the shake-then-pop animation played when an item unlocks.

use bevy::prelude::*;
use rand::Rng;

use crate::tween::{Tween, random_in_circle};

#[derive(Debug, Clone, PartialEq)]
pub enum UnlockPhase {
    Shaking(Tween),
    PopUp(Tween),
    PopDown(Tween),
    Done,
}

/// Scale path of the pop: `from` up to `peak`, then settle on `to`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PopCurve {
    pub from: f32,
    pub peak: f32,
    pub to: f32,
    /// Settle with ease-in instead of ease-out
    pub ease_in_settle: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UnlockAnimation {
    pub phase: UnlockPhase,
    max_shake: f32,
    pop_duration: f32,
    curve: PopCurve,
    pub shake_offset: Vec2,
    /// Eased shake progress, 0 at start and 1 when shaking ends
    pub intensity: f32,
    pub scale: f32,
}

impl UnlockAnimation {
    pub fn new(shake_duration: f32, max_shake: f32, pop_duration: f32, curve: PopCurve) -> Self {
        Self {
            phase: UnlockPhase::Shaking(Tween::new(shake_duration)),
            max_shake,
            pop_duration,
            curve,
            shake_offset: Vec2::ZERO,
            intensity: 0.0,
            scale: curve.from,
        }
    }

    pub fn is_shaking(&self) -> bool {
        matches!(self.phase, UnlockPhase::Shaking(_))
    }

    pub fn is_finished(&self) -> bool {
        self.phase == UnlockPhase::Done
    }

    pub fn tick(&mut self, delta: f32, rng: &mut impl Rng) {
        let half_pop = self.pop_duration * 0.5;
        match &mut self.phase {
            UnlockPhase::Shaking(tween) => {
                tween.tick(delta);
                self.intensity = tween.eased(EaseFunction::CubicIn);
                if tween.finished() {
                    self.intensity = 1.0;
                    self.shake_offset = Vec2::ZERO;
                    self.phase = UnlockPhase::PopUp(Tween::new(half_pop));
                } else {
                    self.shake_offset = random_in_circle(rng, self.intensity * self.max_shake);
                }
            }
            UnlockPhase::PopUp(tween) => {
                tween.tick(delta);
                let s = tween.eased(EaseFunction::CubicOut);
                self.scale = self.curve.from.lerp(self.curve.peak, s);
                if tween.finished() {
                    self.phase = UnlockPhase::PopDown(Tween::new(half_pop));
                }
            }
            UnlockPhase::PopDown(tween) => {
                tween.tick(delta);
                let eased = tween.eased(if self.curve.ease_in_settle {
                    EaseFunction::CubicIn
                } else {
                    EaseFunction::CubicOut
                });
                self.scale = self.curve.peak.lerp(self.curve.to, eased);
                if tween.finished() {
                    self.scale = self.curve.to;
                    self.phase = UnlockPhase::Done;
                }
            }
            UnlockPhase::Done => {}
        }
    }
}
