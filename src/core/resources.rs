//! Core domain: shared resources for session configuration.

use bevy::prelude::*;
use rand::Rng;

#[derive(Resource, Debug)]
pub struct RunConfig {
    pub seed: u64,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            seed: rand::rng().random(),
        }
    }
}

/// The world the player launched the current battle from.
#[derive(Resource, Debug, Default)]
pub struct ActiveWorld {
    pub world_id: Option<String>,
}

impl ActiveWorld {
    pub fn enter(&mut self, world_id: impl Into<String>) {
        self.world_id = Some(world_id.into());
    }

    pub fn clear(&mut self) {
        self.world_id = None;
    }
}
