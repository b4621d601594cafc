//! ContentRegistry resource holding the ordered content lists.

use bevy::prelude::*;

use super::data::*;

/// Central registry for loaded content. Lists keep file order, which is the
/// battle roster order and the on-screen order of books and worlds.
#[derive(Resource, Debug, Clone, Default)]
pub struct ContentRegistry {
    pub enemies: Vec<EnemyProfile>,
    pub books: Vec<BookDef>,
    pub worlds: Vec<WorldDef>,
}

impl ContentRegistry {
    /// Returns a summary of loaded content counts for logging.
    pub fn summary(&self) -> String {
        format!(
            "ContentRegistry loaded:\n\
             - Enemies: {}\n\
             - Books: {}\n\
             - Worlds: {}",
            self.enemies.len(),
            self.books.len(),
            self.worlds.len()
        )
    }

    pub fn world(&self, id: &str) -> Option<&WorldDef> {
        self.worlds.iter().find(|w| w.id == id)
    }

    /// Every save key any item reads, for dev tools and validation.
    pub fn save_keys(&self) -> Vec<&str> {
        self.books
            .iter()
            .map(|b| b.save_key.as_str())
            .chain(self.worlds.iter().map(|w| w.save_key.as_str()))
            .collect()
    }

    /// Compiled-in content used when the data files are missing or broken.
    pub fn builtin() -> Self {
        Self {
            enemies: vec![
                EnemyProfile {
                    id: "enemy_goblin".to_string(),
                    name: "Goblin".to_string(),
                    max_hp: 2,
                    difficulty: EnemyDifficulty::Easy,
                    size_modifier: 0.8,
                    color: [0.35, 0.7, 0.3],
                },
                EnemyProfile {
                    id: "enemy_orc".to_string(),
                    name: "Orc".to_string(),
                    max_hp: 3,
                    difficulty: EnemyDifficulty::Medium,
                    size_modifier: 1.0,
                    color: [0.55, 0.45, 0.25],
                },
                EnemyProfile {
                    id: "enemy_troll".to_string(),
                    name: "Troll".to_string(),
                    max_hp: 3,
                    difficulty: EnemyDifficulty::Hard,
                    size_modifier: 1.15,
                    color: [0.4, 0.5, 0.65],
                },
                EnemyProfile {
                    id: "enemy_dragon".to_string(),
                    name: "Dragon".to_string(),
                    max_hp: 4,
                    difficulty: EnemyDifficulty::Boss,
                    size_modifier: 1.4,
                    color: [0.8, 0.2, 0.2],
                },
            ],
            books: vec![
                BookDef {
                    id: "book_math".to_string(),
                    name: "Math".to_string(),
                    save_key: "Book_Math".to_string(),
                    scene: "WorldSelect".to_string(),
                    start_unlocked: true,
                    color: [0.25, 0.5, 0.85],
                },
                BookDef {
                    id: "book_english".to_string(),
                    name: "English".to_string(),
                    save_key: "Book_English".to_string(),
                    scene: "WorldSelect".to_string(),
                    start_unlocked: false,
                    color: [0.85, 0.35, 0.3],
                },
                BookDef {
                    id: "book_science".to_string(),
                    name: "Science".to_string(),
                    save_key: "Book_Science".to_string(),
                    scene: "WorldSelect".to_string(),
                    start_unlocked: false,
                    color: [0.3, 0.7, 0.35],
                },
            ],
            worlds: vec![
                WorldDef {
                    id: "world_ice".to_string(),
                    name: "Ice World".to_string(),
                    save_key: "World_Ice_Unlocked".to_string(),
                    scene: "QuizBattle".to_string(),
                    start_unlocked: true,
                    progress: "0/15".to_string(),
                    color: [0.6, 0.85, 1.0],
                    unlocks: Some("World_Fire_Unlocked".to_string()),
                },
                WorldDef {
                    id: "world_fire".to_string(),
                    name: "Fire World".to_string(),
                    save_key: "World_Fire_Unlocked".to_string(),
                    scene: "QuizBattle".to_string(),
                    start_unlocked: false,
                    progress: "0/15".to_string(),
                    color: [1.0, 0.5, 0.2],
                    unlocks: Some("World_Jungle_Unlocked".to_string()),
                },
                WorldDef {
                    id: "world_jungle".to_string(),
                    name: "Jungle World".to_string(),
                    save_key: "World_Jungle_Unlocked".to_string(),
                    scene: "QuizBattle".to_string(),
                    start_unlocked: false,
                    progress: "0/15".to_string(),
                    color: [0.3, 0.8, 0.35],
                    unlocks: None,
                },
            ],
        }
    }
}
