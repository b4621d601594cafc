//! Juice domain: idle float with hover tilt and an optional bump.

use bevy::prelude::*;

use crate::tween::{Oscillation, Tween};

/// Rotation kick decay after a bump, degrees per second
const ROTATION_DECAY: f32 = 90.0;

#[derive(Debug, Clone, PartialEq)]
enum BumpStage {
    Out { tween: Tween, start: f32, peak: f32 },
    Back { tween: Tween, top: f32 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloatPose {
    pub offset_y: f32,
    /// Degrees
    pub rotation: f32,
    pub scale: f32,
}

/// Gentle floating motion for titles and buttons.
#[derive(Component, Debug, Clone)]
pub struct UiFloat {
    pub motion: Oscillation,
    pub phase: f32,
    pub base: Vec2,
    pub base_scale: f32,
    pub hover_enabled: bool,
    pub hover_scale: f32,
    pub hover_rotation: f32,
    pub hover_speed: f32,
    pub bump_enabled: bool,
    pub bump_height: f32,
    pub bump_out: f32,
    pub bump_back: f32,
    pub bump_rotate: f32,
    hovering: bool,
    hover_scale_offset: f32,
    hover_rot_offset: f32,
    extra_y: f32,
    extra_rot: f32,
    bump: Option<BumpStage>,
}

impl UiFloat {
    pub fn new(base: Vec2, motion: Oscillation, phase: f32) -> Self {
        Self {
            motion,
            phase,
            base,
            base_scale: 1.0,
            hover_enabled: true,
            hover_scale: 1.1,
            hover_rotation: 5.0,
            hover_speed: 10.0,
            bump_enabled: false,
            bump_height: 12.0,
            bump_out: 0.10,
            bump_back: 0.22,
            bump_rotate: 2.0,
            hovering: false,
            hover_scale_offset: 1.0,
            hover_rot_offset: 0.0,
            extra_y: 0.0,
            extra_rot: 0.0,
            bump: None,
        }
    }

    pub fn with_bump(mut self) -> Self {
        self.bump_enabled = true;
        self
    }

    pub fn without_hover(mut self) -> Self {
        self.hover_enabled = false;
        self
    }

    pub fn set_hovering(&mut self, hovering: bool) {
        self.hovering = self.hover_enabled && hovering;
    }

    #[cfg(test)]
    pub fn is_hovering(&self) -> bool {
        self.hovering
    }

    #[cfg(test)]
    pub fn is_bumping(&self) -> bool {
        self.bump.is_some()
    }

    /// Hop upward. Repeated bumps stack from the current height.
    pub fn trigger_bump(&mut self) -> bool {
        if !self.bump_enabled {
            return false;
        }
        let start = self.extra_y;
        let peak = self.bump_height.max(start + self.bump_height * 0.7);
        self.bump = Some(BumpStage::Out {
            tween: Tween::new(self.bump_out),
            start,
            peak,
        });
        true
    }

    pub fn tick(&mut self, time: f32, delta: f32) -> FloatPose {
        let sample = self.motion.sample_cycles(time, self.phase);

        let (target_scale, target_rot) = if self.hovering {
            (self.hover_scale, self.hover_rotation)
        } else {
            (1.0, 0.0)
        };
        let rate = (delta * self.hover_speed).clamp(0.0, 1.0);
        self.hover_scale_offset = self.hover_scale_offset.lerp(target_scale, rate);
        self.hover_rot_offset = self.hover_rot_offset.lerp(target_rot, rate);

        self.tick_bump(delta);
        if self.bump.is_none() && self.extra_rot.abs() > 0.001 {
            let step = (delta * ROTATION_DECAY).min(self.extra_rot.abs());
            self.extra_rot -= self.extra_rot.signum() * step;
        }

        FloatPose {
            offset_y: sample.offset_y + self.extra_y,
            rotation: sample.rotation + self.extra_rot + self.hover_rot_offset,
            scale: self.base_scale * sample.scale * self.hover_scale_offset,
        }
    }

    fn tick_bump(&mut self, delta: f32) {
        match &mut self.bump {
            Some(BumpStage::Out { tween, start, peak }) => {
                let u = tween.tick(delta);
                self.extra_y = start.lerp(*peak, tween.eased(EaseFunction::CubicOut));
                self.extra_rot = self.bump_rotate * (1.0 - u);
                if tween.finished() {
                    self.bump = Some(BumpStage::Back {
                        tween: Tween::new(self.bump_back),
                        top: self.extra_y,
                    });
                }
            }
            Some(BumpStage::Back { tween, top }) => {
                tween.tick(delta);
                self.extra_y = top.lerp(0.0, tween.eased(EaseFunction::CubicOut));
                if tween.finished() {
                    self.extra_y = 0.0;
                    self.bump = None;
                }
            }
            None => {}
        }
    }
}
