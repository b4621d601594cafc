//! Worlds domain: per-world lock, selection scale, bump and unlock visuals.

use bevy::color::Mix;
use bevy::prelude::*;
use rand::Rng;

use crate::content::{WorldDef, WorldTuning, rgb};
use crate::juice::{PopCurve, UnlockAnimation};
use crate::tween::{Tween, cycling_hue};

pub const LOCKED_LABEL: &str = "LOCKED";

#[derive(Debug, Clone, PartialEq)]
pub enum ScaleMotion {
    Steady,
    /// Linear scale change after selection changes
    Easing { from: f32, to: f32, tween: Tween },
    BumpUp { rest: f32, peak: f32, tween: Tween },
    BumpDown { rest: f32, peak: f32, tween: Tween },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldPose {
    pub offset: Vec2,
    /// Degrees
    pub rotation: f32,
    pub scale: f32,
}

#[derive(Component, Debug, Clone)]
pub struct WorldItem {
    pub index: usize,
    pub world_id: String,
    pub name: String,
    pub scene: String,
    pub progress: String,
    pub color: Color,
    /// Position inside the slider
    pub base: Vec2,
    pub locked: bool,
    pub selected: bool,
    pub phase: f32,
    pub scale: f32,
    pub motion: ScaleMotion,
    pub unlock: Option<UnlockAnimation>,
    selected_scale: f32,
}

impl WorldItem {
    pub fn new(
        def: &WorldDef,
        index: usize,
        base: Vec2,
        locked: bool,
        selected: bool,
        phase: f32,
        tuning: &WorldTuning,
    ) -> Self {
        Self {
            index,
            world_id: def.id.clone(),
            name: def.name.clone(),
            scene: def.scene.clone(),
            progress: def.progress.clone(),
            color: rgb(def.color),
            base,
            locked,
            selected,
            phase,
            scale: if selected { tuning.selected_scale } else { 1.0 },
            motion: ScaleMotion::Steady,
            unlock: None,
            selected_scale: tuning.selected_scale,
        }
    }

    pub fn select(&mut self, tuning: &WorldTuning) {
        self.selected = true;
        self.scale_to(tuning.selected_scale, tuning.scale_duration);
    }

    pub fn deselect(&mut self, tuning: &WorldTuning) {
        self.selected = false;
        self.scale_to(1.0, tuning.scale_duration);
    }

    /// Replaces whatever scale motion is running.
    fn scale_to(&mut self, target: f32, duration: f32) {
        self.motion = ScaleMotion::Easing {
            from: self.scale,
            to: target,
            tween: Tween::new(duration),
        };
    }

    /// Punch feedback when the play button is pressed. Only the selected,
    /// unlocked world reacts.
    pub fn bump(&mut self, tuning: &WorldTuning) -> bool {
        if !self.selected || self.locked || self.unlock.is_some() {
            return false;
        }
        let rest = self.selected_scale;
        self.motion = ScaleMotion::BumpUp {
            rest,
            peak: rest * tuning.bump_scale,
            tween: Tween::new(tuning.bump_duration),
        };
        true
    }

    /// Shake, then pop past the selected scale and settle on the scale the
    /// world's current selection calls for.
    pub fn begin_unlock(&mut self, tuning: &WorldTuning) {
        self.locked = false;
        self.motion = ScaleMotion::Steady;
        let settle = if self.selected {
            tuning.selected_scale
        } else {
            1.0
        };
        self.unlock = Some(UnlockAnimation::new(
            tuning.shake_duration,
            tuning.max_shake,
            tuning.pop_duration,
            PopCurve {
                from: 1.0,
                peak: tuning.selected_scale * tuning.pop_overshoot,
                to: settle,
                ease_in_settle: true,
            },
        ));
    }

    #[cfg(test)]
    pub fn is_unlocking(&self) -> bool {
        self.unlock.is_some()
    }

    fn is_shaking(&self) -> bool {
        self.unlock.as_ref().is_some_and(UnlockAnimation::is_shaking)
    }

    pub fn can_play(&self) -> bool {
        !self.locked
    }

    pub fn progress_label(&self) -> &str {
        if self.locked { LOCKED_LABEL } else { &self.progress }
    }

    pub fn tick(&mut self, delta: f32, rng: &mut impl Rng) {
        if let Some(unlock) = self.unlock.as_mut() {
            unlock.tick(delta, rng);
            if !unlock.is_shaking() {
                self.scale = unlock.scale;
            }
            if unlock.is_finished() {
                self.unlock = None;
            }
            return;
        }

        match &mut self.motion {
            ScaleMotion::Steady => {}
            ScaleMotion::Easing { from, to, tween } => {
                self.scale = from.lerp(*to, tween.tick(delta));
                if tween.finished() {
                    self.scale = *to;
                    self.motion = ScaleMotion::Steady;
                }
            }
            ScaleMotion::BumpUp { rest, peak, tween } => {
                tween.tick(delta);
                self.scale = rest.lerp(*peak, tween.eased(EaseFunction::CubicOut));
                if tween.finished() {
                    self.motion = ScaleMotion::BumpDown {
                        rest: *rest,
                        peak: *peak,
                        tween: Tween::new(tween.duration()),
                    };
                }
            }
            ScaleMotion::BumpDown { rest, peak, tween } => {
                tween.tick(delta);
                self.scale = peak.lerp(*rest, tween.eased(EaseFunction::CubicIn));
                if tween.finished() {
                    self.scale = *rest;
                    self.motion = ScaleMotion::Steady;
                }
            }
        }
    }

    pub fn pose(&self, time: f32, tuning: &WorldTuning) -> WorldPose {
        let sample = tuning.float.sample(time, self.phase);
        let shake = self
            .unlock
            .as_ref()
            .map(|unlock| unlock.shake_offset)
            .unwrap_or(Vec2::ZERO);

        WorldPose {
            offset: Vec2::new(0.0, sample.offset_y) + shake,
            rotation: sample.rotation,
            scale: self.scale,
        }
    }

    /// Highlight tint multiplied into the world color.
    pub fn tint(&self, tuning: &WorldTuning) -> Color {
        let highlight = if let Some(unlock) = self.unlock.as_ref().filter(|u| u.is_shaking()) {
            mix(
                rgb(tuning.locked_color),
                rgb(tuning.unselected_color),
                unlock.intensity,
            )
        } else if self.locked {
            return rgb(tuning.locked_color);
        } else if self.selected {
            rgb(tuning.selected_color)
        } else {
            rgb(tuning.unselected_color)
        };
        modulate(self.color, highlight)
    }

    /// Rainbow outline for the selected unlocked world.
    pub fn outline(&self, time: f32, tuning: &WorldTuning) -> Option<Color> {
        if !self.selected || self.locked || self.is_shaking() {
            return None;
        }
        Some(Color::hsv(
            cycling_hue(time, tuning.outline_hue_speed),
            tuning.outline_saturation,
            tuning.outline_value,
        ))
    }
}

fn mix(from: Color, to: Color, t: f32) -> Color {
    from.to_srgba().mix(&to.to_srgba(), t).into()
}

fn modulate(color: Color, tint: Color) -> Color {
    let (a, b) = (color.to_srgba(), tint.to_srgba());
    Color::srgba(a.red * b.red, a.green * b.green, a.blue * b.blue, a.alpha * b.alpha)
}
