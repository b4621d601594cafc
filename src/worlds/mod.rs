//! Worlds domain: the world select slider and its unlockable worlds.

mod components;
mod item;
mod slider;
mod spawn;
mod systems;

#[cfg(test)]
mod tests;

use bevy::prelude::*;

use crate::core::GameState;
use crate::worlds::slider::WorldSlider;
use crate::worlds::spawn::{cleanup_world_select, spawn_world_select};
use crate::worlds::systems::{
    animate_worlds, handle_world_input, refresh_world_buttons, tick_world_slider,
};

pub struct WorldsPlugin;

impl Plugin for WorldsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(GameState::WorldSelect), spawn_world_select)
            .add_systems(OnExit(GameState::WorldSelect), cleanup_world_select)
            .add_systems(
                Update,
                (
                    handle_world_input,
                    tick_world_slider,
                    animate_worlds,
                    refresh_world_buttons,
                )
                    .chain()
                    .run_if(in_state(GameState::WorldSelect).and(resource_exists::<WorldSlider>)),
            );
    }
}
