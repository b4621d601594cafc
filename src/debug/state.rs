//! Debug domain: state and action definitions for dev tooling.

use bevy::prelude::*;

/// Resource tracking the dev tools panel
#[derive(Resource, Debug, Default)]
pub struct DebugState {
    /// Whether the panel is visible
    pub ui_visible: bool,
    /// Message shown in the panel until its timer runs out
    pub status_message: Option<(String, f32)>,
}

impl DebugState {
    /// Set a status message that clears after `duration` seconds
    pub fn set_message(&mut self, message: impl Into<String>, duration: f32) {
        self.status_message = Some((message.into(), duration));
    }

    pub fn tick_message(&mut self, delta: f32) {
        if let Some((_, remaining)) = self.status_message.as_mut() {
            *remaining -= delta;
            if *remaining <= 0.0 {
                self.status_message = None;
            }
        }
    }

    pub fn message(&self) -> &str {
        self.status_message
            .as_ref()
            .map(|(message, _)| message.as_str())
            .unwrap_or("")
    }
}

/// Actions that can be triggered from the dev tools panel or hotkeys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DebugAction {
    UnlockAll,
    ResetProgress,
    WarpToMenu,
    WarpToWorlds,
    WarpToBattle,
    Close,
}
