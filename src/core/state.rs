//! Core domain: game state definitions for the scene flow.

use bevy::prelude::*;

/// Top-level scenes. Each variant stands in for a named scene that the
/// fader hands off to.
#[derive(States, Debug, Hash, Eq, PartialEq, Clone, Copy, Default)]
pub enum GameState {
    #[default]
    Boot,
    MainMenu,
    WorldSelect,
    QuizBattle,
}

impl GameState {
    /// Resolve a scene name from content data into a state.
    pub fn from_scene_name(name: &str) -> Option<Self> {
        match name {
            "MainMenu" => Some(GameState::MainMenu),
            "WorldSelect" => Some(GameState::WorldSelect),
            "QuizBattle" => Some(GameState::QuizBattle),
            _ => None,
        }
    }

    pub fn scene_name(self) -> &'static str {
        match self {
            GameState::Boot => "Boot",
            GameState::MainMenu => "MainMenu",
            GameState::WorldSelect => "WorldSelect",
            GameState::QuizBattle => "QuizBattle",
        }
    }
}
