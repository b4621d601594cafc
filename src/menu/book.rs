//! Menu domain: per-book lock, selection, idle motion and unlock visuals.

use bevy::prelude::*;
use rand::Rng;

use crate::content::{BookDef, BookTuning, rgb};
use crate::juice::{PopCurve, UnlockAnimation};
use crate::tween::{AlphaFade, cycling_hue};

/// Books below this alpha ignore clicks
const CLICKABLE_ALPHA: f32 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemPose {
    pub offset: Vec2,
    /// Degrees
    pub rotation: f32,
    pub scale: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Outline {
    pub color: Color,
    pub distance: f32,
}

#[derive(Component, Debug, Clone)]
pub struct BookSelector {
    pub index: usize,
    pub name: String,
    pub scene: String,
    pub color: Color,
    /// Position inside the shelf
    pub base: Vec2,
    pub locked: bool,
    pub selected: bool,
    pub phase: f32,
    pub fade: AlphaFade,
    pub unlock: Option<UnlockAnimation>,
}

impl BookSelector {
    pub fn new(def: &BookDef, index: usize, base: Vec2, locked: bool, phase: f32) -> Self {
        Self {
            index,
            name: def.name.clone(),
            scene: def.scene.clone(),
            color: rgb(def.color),
            base,
            locked,
            selected: false,
            phase,
            fade: AlphaFade::new(1.0),
            unlock: None,
        }
    }

    /// Locked, faded-out books and books clicked mid-transition do nothing.
    pub fn accepts_click(&self, menu_busy: bool) -> bool {
        !self.locked && !menu_busy && self.fade.alpha >= CLICKABLE_ALPHA
    }

    pub fn select(&mut self) {
        self.selected = true;
    }

    pub fn deselect(&mut self) {
        self.selected = false;
    }

    /// Play the unlock animation for a book that was locked at spawn.
    pub fn begin_unlock(&mut self, tuning: &BookTuning) {
        self.locked = false;
        self.unlock = Some(UnlockAnimation::new(
            tuning.shake_duration,
            tuning.max_shake,
            tuning.pop_duration,
            PopCurve {
                from: 1.0,
                peak: tuning.pop_scale,
                to: 1.0,
                ease_in_settle: false,
            },
        ));
    }

    #[cfg(test)]
    pub fn is_unlocking(&self) -> bool {
        self.unlock.is_some()
    }

    pub fn tick(&mut self, delta: f32, rng: &mut impl Rng) {
        self.fade.tick(delta);
        if let Some(unlock) = self.unlock.as_mut() {
            unlock.tick(delta, rng);
            if unlock.is_finished() {
                self.unlock = None;
            }
        }
    }

    pub fn pose(&self, time: f32, tuning: &BookTuning) -> ItemPose {
        if let Some(unlock) = &self.unlock {
            return ItemPose {
                offset: unlock.shake_offset,
                rotation: 0.0,
                scale: unlock.scale,
            };
        }

        let motion = if self.selected {
            tuning.selected
        } else {
            tuning.idle
        };
        let sample = motion.sample(time, self.phase);
        ItemPose {
            offset: Vec2::new(0.0, sample.offset_y),
            rotation: sample.rotation,
            scale: sample.scale,
        }
    }

    pub fn tint(&self, tuning: &BookTuning) -> Color {
        let shaking = self.unlock.as_ref().is_some_and(UnlockAnimation::is_shaking);
        if self.locked || shaking {
            rgb(tuning.locked_color)
        } else {
            self.color
        }
    }

    /// White glow ramping up while unlocking, cycling rainbow while selected.
    pub fn outline(&self, time: f32, tuning: &BookTuning) -> Option<Outline> {
        if let Some(unlock) = self.unlock.as_ref().filter(|u| u.is_shaking()) {
            return Some(Outline {
                color: Color::WHITE,
                distance: tuning
                    .min_outline_distance
                    .lerp(tuning.max_outline_distance, unlock.intensity),
            });
        }
        if !self.selected || self.locked {
            return None;
        }

        let pulse = (time * tuning.outline_distance_speed).sin() * 0.5 + 0.5;
        Some(Outline {
            color: Color::hsv(
                cycling_hue(time, tuning.outline_hue_speed),
                tuning.outline_saturation,
                tuning.outline_value,
            ),
            distance: tuning.min_outline_distance.lerp(
                tuning.max_outline_distance,
                EaseFunction::CubicOut.sample_clamped(pulse),
            ),
        })
    }
}
