//! Core domain: boot flow and camera setup.

use bevy::prelude::*;

use crate::core::state::GameState;

/// Leave the boot state once startup content is in place.
pub(crate) fn finish_boot(mut game_state: ResMut<NextState<GameState>>) {
    info!("Boot complete, entering main menu");
    game_state.set(GameState::MainMenu);
}

pub(crate) fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}
