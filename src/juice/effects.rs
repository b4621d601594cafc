//! Juice domain: fade-in on enter, press squish and background wiggle.

use bevy::prelude::*;

use crate::tween::Tween;

/// Fades an element in and slides it up into place after a short delay.
#[derive(Component, Debug, Clone)]
pub struct FadeIn {
    pub slide_distance: f32,
    pub final_y: f32,
    delay: Tween,
    tween: Tween,
}

impl FadeIn {
    pub fn new(final_y: f32) -> Self {
        Self {
            slide_distance: 50.0,
            final_y,
            delay: Tween::new(0.1),
            tween: Tween::new(0.6),
        }
    }

    pub fn with_delay(mut self, delay: f32) -> Self {
        self.delay = Tween::new(delay);
        self
    }

    pub fn is_finished(&self) -> bool {
        self.tween.finished()
    }

    /// Returns (alpha, y position).
    pub fn tick(&mut self, delta: f32) -> (f32, f32) {
        if !self.delay.finished() {
            self.delay.tick(delta);
            return (0.0, self.final_y - self.slide_distance);
        }
        self.tween.tick(delta);
        let eased = self.tween.eased(EaseFunction::CubicOut);
        let y = self.final_y - self.slide_distance * (1.0 - eased);
        (eased, y)
    }
}

/// Shrinks a UI button while it is held down.
#[derive(Component, Debug, Clone, Copy)]
pub struct PressSquish {
    pub scale_on_press: f32,
    pub base_size: Vec2,
}

impl PressSquish {
    pub fn new(base_size: Vec2) -> Self {
        Self {
            scale_on_press: 0.9,
            base_size,
        }
    }

    pub fn size_for(&self, interaction: Interaction) -> Vec2 {
        match interaction {
            Interaction::Pressed => self.base_size * self.scale_on_press,
            Interaction::Hovered | Interaction::None => self.base_size,
        }
    }
}

/// Rotation wobble that springs back to rest after each kick.
#[derive(Component, Debug, Clone)]
pub struct BackgroundWiggle {
    /// Current wobble amplitude in degrees
    pub energy: f32,
    pub frequency: f32,
    pub damping: f32,
    elapsed: f32,
}

impl Default for BackgroundWiggle {
    fn default() -> Self {
        Self {
            energy: 0.0,
            frequency: 18.0,
            damping: 4.0,
            elapsed: 0.0,
        }
    }
}

impl BackgroundWiggle {
    pub fn kick(&mut self, amount: f32) {
        if self.energy < 0.01 {
            self.elapsed = 0.0;
        }
        self.energy += amount.abs();
    }

    pub fn is_resting(&self) -> bool {
        self.energy == 0.0
    }

    /// Returns the rotation in degrees.
    pub fn tick(&mut self, delta: f32) -> f32 {
        if self.is_resting() {
            return 0.0;
        }
        self.elapsed += delta;
        self.energy *= (-self.damping * delta).exp();
        if self.energy < 0.01 {
            self.energy = 0.0;
            return 0.0;
        }
        self.energy * (self.elapsed * self.frequency).sin()
    }
}
