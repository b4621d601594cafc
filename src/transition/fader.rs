//! Transition domain: the fade-out, load, fade-in sequence.

use bevy::prelude::*;

use crate::content::FaderTuning;
use crate::core::GameState;
use crate::tween::Tween;

#[derive(Debug, Clone, PartialEq)]
pub enum FadePhase {
    Idle,
    FadingOut(Tween),
    Holding(Tween),
    /// Waiting for the target state to become active
    Loading,
    FadingIn(Tween),
}

/// Single shared black overlay used for every scene change.
#[derive(Resource, Debug)]
pub struct SceneFader {
    pub phase: FadePhase,
    pub alpha: f32,
    target: Option<GameState>,
    fade_out: f32,
    fade_in: f32,
    hold: f32,
}

impl Default for SceneFader {
    fn default() -> Self {
        Self::new(&FaderTuning::default())
    }
}

impl SceneFader {
    pub fn new(tuning: &FaderTuning) -> Self {
        Self {
            phase: FadePhase::Idle,
            alpha: 0.0,
            target: None,
            fade_out: tuning.fade_out.max(0.01),
            fade_in: tuning.fade_in.max(0.01),
            hold: tuning.hold.max(0.0),
        }
    }

    pub fn is_busy(&self) -> bool {
        self.phase != FadePhase::Idle
    }

    #[cfg(test)]
    pub fn target(&self) -> Option<GameState> {
        self.target
    }

    /// Start a fade to `target`. Ignored while another fade is in flight.
    pub fn fade_to(&mut self, target: GameState) -> bool {
        if self.is_busy() {
            debug!("Scene fade to {:?} ignored, fader busy", target);
            return false;
        }
        self.target = Some(target);
        self.phase = FadePhase::FadingOut(Tween::new(self.fade_out));
        true
    }

    /// Start a fade to a scene named in content data.
    pub fn fade_to_scene(&mut self, scene_name: &str) -> bool {
        match GameState::from_scene_name(scene_name) {
            Some(target) => self.fade_to(target),
            None => {
                error!("Unknown scene '{}', cannot load it", scene_name);
                false
            }
        }
    }

    /// Advance the fade. Returns the state to load on the frame the screen
    /// is fully black and the hold has elapsed.
    pub fn tick(&mut self, delta: f32, current: GameState) -> Option<GameState> {
        match &mut self.phase {
            FadePhase::Idle => None,
            FadePhase::FadingOut(tween) => {
                tween.tick(delta);
                self.alpha = tween.eased(EaseFunction::CubicOut);
                if !tween.finished() {
                    return None;
                }
                self.alpha = 1.0;
                if self.hold > 0.0 {
                    self.phase = FadePhase::Holding(Tween::new(self.hold));
                    None
                } else {
                    self.begin_load()
                }
            }
            FadePhase::Holding(tween) => {
                tween.tick(delta);
                if tween.finished() {
                    self.begin_load()
                } else {
                    None
                }
            }
            FadePhase::Loading => {
                if self.target == Some(current) {
                    self.phase = FadePhase::FadingIn(Tween::new(self.fade_in));
                }
                None
            }
            FadePhase::FadingIn(tween) => {
                tween.tick(delta);
                self.alpha = 1.0 - tween.eased(EaseFunction::CubicOut);
                if tween.finished() {
                    self.alpha = 0.0;
                    self.phase = FadePhase::Idle;
                    self.target = None;
                }
                None
            }
        }
    }

    fn begin_load(&mut self) -> Option<GameState> {
        self.phase = FadePhase::Loading;
        self.target
    }
}
