//! Content domain: RON-backed rosters, books, worlds and tuning.

mod data;
mod loader;
mod registry;
mod validation;

#[cfg(test)]
mod tests;

pub use data::{
    AttackTuning, BattleTuning, BookDef, BookTuning, EnemyDifficulty, EnemyProfile, FaderTuning,
    GameTuning, MenuTuning, SliderTuning, WorldDef, WorldTuning, rgb,
};
pub use registry::ContentRegistry;

use bevy::prelude::*;
use std::path::Path;

use crate::content::loader::load_all_content;
use crate::content::validation::validate_content;

pub const CONTENT_DIR: &str = "assets/data";

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<EnemyProfile>()
            .register_type::<EnemyDifficulty>()
            .register_type::<BookDef>()
            .register_type::<WorldDef>()
            .add_systems(Startup, load_content);
    }
}

fn load_content(mut commands: Commands) {
    let (registry, tuning, errors) = load_all_content(Path::new(CONTENT_DIR));

    for error in &errors {
        error!("{}", error);
    }
    if !errors.is_empty() {
        warn!("Content loaded with {} error(s), builtin data filled the gaps", errors.len());
    }

    for problem in validate_content(&registry) {
        warn!("{}", problem);
    }

    info!("{}", registry.summary());
    commands.insert_resource(registry);
    commands.insert_resource(tuning);
}
