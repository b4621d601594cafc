//! Dev tools for fast iteration, compiled with the `dev-tools` feature.
//!
//! Features:
//! - Unlock every book and world, or lock them all again
//! - Warp straight to the menu, world select or a battle
//!
//! Toggle the panel with F1 or backtick; hotkeys work with Ctrl held.

mod state;
mod systems;
mod ui;

#[cfg(test)]
mod tests;

use bevy::prelude::*;

use crate::content::ContentRegistry;
use crate::debug::state::DebugState;
use crate::debug::systems::{handle_debug_input, toggle_debug_ui, update_status_message};
use crate::progress::ProgressStore;

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>().add_systems(
            Update,
            (toggle_debug_ui, handle_debug_input, update_status_message).chain(),
        );
    }
}

/// Unlock every save key the content uses. Returns how many changed.
pub fn unlock_all(store: &mut ProgressStore, registry: &ContentRegistry) -> usize {
    let mut changed = 0;
    for key in registry.save_keys() {
        if !store.is_unlocked(key) {
            store.set_unlocked(key, true);
            changed += 1;
        }
    }
    changed
}

/// Lock every save key again. Items that start unlocked re-unlock on their
/// next spawn. Returns how many changed.
pub fn reset_progress(store: &mut ProgressStore, registry: &ContentRegistry) -> usize {
    let mut changed = 0;
    for key in registry.save_keys() {
        if store.is_unlocked(key) {
            store.set_unlocked(key, false);
            changed += 1;
        }
    }
    changed
}
