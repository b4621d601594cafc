//! Core domain: scene states, shared resources and cross-domain events.

mod events;
mod resources;
mod state;
mod systems;


pub use events::{BackgroundKickEvent, TitleBumpEvent, WorldCompletedEvent};
pub use resources::{ActiveWorld, RunConfig};
pub use state::GameState;

use bevy::prelude::*;

use crate::core::systems::{finish_boot, setup_camera};

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<GameState>()
            .init_resource::<RunConfig>()
            .init_resource::<ActiveWorld>()
            .add_message::<WorldCompletedEvent>()
            .add_message::<BackgroundKickEvent>()
            .add_message::<TitleBumpEvent>()
            .add_systems(Startup, setup_camera)
            .add_systems(Update, finish_boot.run_if(in_state(GameState::Boot)));
    }
}
