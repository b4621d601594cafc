//! Progress domain: persisted unlock flags for books and worlds.

mod backend;
mod store;

#[cfg(test)]
mod tests;

pub use store::ProgressStore;

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::content::ContentRegistry;
use crate::core::WorldCompletedEvent;
use crate::progress::backend::RonFileBackend;

pub const PROGRESS_FILE: &str = "quested_progress.ron";

pub struct ProgressPlugin;

impl Plugin for ProgressPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(PreStartup, open_progress_store)
            .add_systems(Update, handle_world_completed);
    }
}

fn open_progress_store(mut commands: Commands) {
    let backend = match RonFileBackend::open(PROGRESS_FILE) {
        Ok(backend) => backend,
        Err(e) => {
            error!("{}. Starting with empty progress.", e);
            RonFileBackend::empty(PROGRESS_FILE)
        }
    };
    commands.insert_resource(ProgressStore::new(backend));
}

/// Unlock whatever the completed world leads to.
pub fn complete_world(store: &mut ProgressStore, registry: &ContentRegistry, world_id: &str) {
    let Some(world) = registry.world(world_id) else {
        warn!("Completed unknown world '{}'", world_id);
        return;
    };

    match &world.unlocks {
        Some(next_key) => store.set_unlocked(next_key, true),
        None => info!("World '{}' completed, nothing left to unlock", world.name),
    }
}

fn handle_world_completed(
    mut events: MessageReader<WorldCompletedEvent>,
    store: Option<ResMut<ProgressStore>>,
    registry: Option<Res<ContentRegistry>>,
) {
    let (Some(mut store), Some(registry)) = (store, registry) else {
        return;
    };

    for event in events.read() {
        complete_world(&mut store, &registry, &event.world_id);
    }
}
