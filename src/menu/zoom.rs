//! Menu domain: zoom-to-focus onto a selected book.

use bevy::prelude::*;

use crate::content::MenuTuning;
use crate::tween::Tween;

#[derive(Debug, Clone, PartialEq)]
pub enum ZoomPhase {
    Idle,
    Zooming(Tween),
    OverlayIn(Tween),
    Focused,
    OverlayOut(Tween),
    Unzooming(Tween),
}

/// Shelf position and scale while focusing, plus the focus overlay fade.
#[derive(Debug, Clone)]
pub struct ZoomFocus {
    pub phase: ZoomPhase,
    pub root_position: Vec2,
    pub root_scale: f32,
    pub overlay_alpha: f32,
    pub overlay_interactable: bool,
    pub header_visible: bool,
    /// Book the shelf is focused on
    pub selected: Option<usize>,
    rest_position: Vec2,
    rest_scale: f32,
    from_position: Vec2,
    from_scale: f32,
    target_position: Vec2,
    target_scale: f32,
    overlay_from: f32,
    focus_scale: f32,
    focus_duration: f32,
    overlay_duration: f32,
}

impl ZoomFocus {
    pub fn new(root_position: Vec2, root_scale: f32, tuning: &MenuTuning) -> Self {
        Self {
            phase: ZoomPhase::Idle,
            root_position,
            root_scale,
            overlay_alpha: 0.0,
            overlay_interactable: false,
            header_visible: true,
            selected: None,
            rest_position: root_position,
            rest_scale: root_scale,
            from_position: root_position,
            from_scale: root_scale,
            target_position: root_position,
            target_scale: root_scale,
            overlay_from: 0.0,
            focus_scale: tuning.focus_scale,
            focus_duration: tuning.focus_duration,
            overlay_duration: tuning.focus_ui_duration,
        }
    }

    pub fn is_zoomed(&self) -> bool {
        self.phase != ZoomPhase::Idle
    }

    pub fn is_animating(&self) -> bool {
        !matches!(self.phase, ZoomPhase::Idle | ZoomPhase::Focused)
    }

    pub fn is_focused(&self) -> bool {
        self.phase == ZoomPhase::Focused
    }

    pub fn sibling_fade_out_duration(&self) -> f32 {
        self.focus_duration * 0.5
    }

    pub fn sibling_fade_in_duration(&self) -> f32 {
        self.focus_duration * 0.8
    }

    /// Center the shelf on the book at `item_local` (its position inside the
    /// shelf) and magnify it.
    pub fn focus_on(&mut self, index: usize, item_local: Vec2) -> bool {
        if self.is_zoomed() {
            return false;
        }
        self.selected = Some(index);
        self.header_visible = false;
        self.from_position = self.root_position;
        self.from_scale = self.root_scale;
        self.target_position = -item_local * self.focus_scale;
        self.target_scale = self.focus_scale;
        self.phase = ZoomPhase::Zooming(Tween::new(self.focus_duration));
        true
    }

    /// Fade the overlay out then ease the shelf back. Returns the book that
    /// was focused.
    pub fn reset(&mut self) -> Option<usize> {
        if !self.is_focused() {
            return None;
        }
        self.overlay_interactable = false;
        self.overlay_from = self.overlay_alpha;
        self.phase = ZoomPhase::OverlayOut(Tween::new(self.overlay_duration));
        self.selected
    }

    pub fn tick(&mut self, delta: f32) {
        match &mut self.phase {
            ZoomPhase::Idle | ZoomPhase::Focused => {}
            ZoomPhase::Zooming(tween) => {
                tween.tick(delta);
                let s = tween.eased(EaseFunction::CubicOut);
                self.root_position = self.from_position.lerp(self.target_position, s);
                self.root_scale = self.from_scale.lerp(self.target_scale, s);
                if tween.finished() {
                    self.root_position = self.target_position;
                    self.root_scale = self.target_scale;
                    self.phase = ZoomPhase::OverlayIn(Tween::new(self.overlay_duration));
                }
            }
            ZoomPhase::OverlayIn(tween) => {
                tween.tick(delta);
                self.overlay_alpha = tween.eased(EaseFunction::CubicOut);
                if tween.finished() {
                    self.overlay_alpha = 1.0;
                    self.overlay_interactable = true;
                    self.phase = ZoomPhase::Focused;
                }
            }
            ZoomPhase::OverlayOut(tween) => {
                tween.tick(delta);
                let s = tween.eased(EaseFunction::CubicOut);
                self.overlay_alpha = self.overlay_from.lerp(0.0, s);
                if tween.finished() {
                    self.overlay_alpha = 0.0;
                    self.from_position = self.root_position;
                    self.from_scale = self.root_scale;
                    self.phase = ZoomPhase::Unzooming(Tween::new(self.focus_duration));
                }
            }
            ZoomPhase::Unzooming(tween) => {
                tween.tick(delta);
                let s = tween.eased(EaseFunction::CubicOut);
                self.root_position = self.from_position.lerp(self.rest_position, s);
                self.root_scale = self.from_scale.lerp(self.rest_scale, s);
                if tween.finished() {
                    self.root_position = self.rest_position;
                    self.root_scale = self.rest_scale;
                    self.header_visible = true;
                    self.selected = None;
                    self.phase = ZoomPhase::Idle;
                }
            }
        }
    }
}
