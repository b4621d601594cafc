//! Content domain: tests for parsing, builtin content and validation.

use super::loader::{parse_data_file, parse_single_file};
use super::validation::validate_content;
use super::{BookDef, ContentRegistry, EnemyDifficulty, EnemyProfile, GameTuning};

// -----------------------------------------------------------------------------
// Parsing tests
// -----------------------------------------------------------------------------

#[test]
fn test_parse_enemy_roster() {
    let src = r#"(
        items: [
            (
                id: "enemy_slime",
                name: "Slime",
                max_hp: 2,
                difficulty: Easy,
                color: (0.2, 0.8, 0.3),
            ),
            (
                id: "enemy_king",
                name: "Slime King",
                max_hp: 5,
                difficulty: Boss,
                size_modifier: 1.5,
                color: (0.8, 0.2, 0.8),
            ),
        ],
    )"#;

    let enemies: Vec<EnemyProfile> = parse_data_file("enemies.ron", src).unwrap();
    assert_eq!(enemies.len(), 2);
    assert_eq!(enemies[0].size_modifier, 1.0);
    assert_eq!(enemies[1].difficulty, EnemyDifficulty::Boss);
    assert_eq!(enemies[1].size_modifier, 1.5);
}

#[test]
fn test_parse_error_names_the_file() {
    let result: Result<Vec<BookDef>, _> = parse_data_file("books.ron", "(items: [ (id: ");
    let error = result.unwrap_err();
    assert_eq!(error.file, "books.ron");
    assert!(error.to_string().starts_with("Failed to load books.ron"));
}

#[test]
fn test_partial_tuning_keeps_defaults() {
    let src = r#"(
        menu: (
            focus_scale: 2.0,
        ),
    )"#;

    let tuning: GameTuning = parse_single_file("tuning.ron", src).unwrap();
    assert_eq!(tuning.menu.focus_scale, 2.0);
    assert_eq!(tuning.menu.transition_duration, 0.25);
    assert_eq!(tuning.battle.player_hearts, 3);
    assert_eq!(tuning.fader.fade_out, 0.35);
}

#[test]
fn test_world_unlocks_is_optional() {
    let src = r#"(
        items: [
            (
                id: "world_a",
                name: "A",
                save_key: "World_A",
                scene: "QuizBattle",
                progress: "0/15",
                color: (1.0, 1.0, 1.0),
                unlocks: "World_B",
            ),
            (
                id: "world_b",
                name: "B",
                save_key: "World_B",
                scene: "QuizBattle",
                progress: "0/15",
                color: (1.0, 1.0, 1.0),
            ),
        ],
    )"#;

    let worlds: Vec<super::WorldDef> = parse_data_file("worlds.ron", src).unwrap();
    assert_eq!(worlds[0].unlocks.as_deref(), Some("World_B"));
    assert!(worlds[1].unlocks.is_none());
    assert!(!worlds[1].start_unlocked);
}

// -----------------------------------------------------------------------------
// Difficulty tests
// -----------------------------------------------------------------------------

#[test]
fn test_damage_on_miss_per_tier() {
    assert_eq!(EnemyDifficulty::Easy.damage_on_miss(), 0.5);
    assert_eq!(EnemyDifficulty::Medium.damage_on_miss(), 1.0);
    assert_eq!(EnemyDifficulty::Hard.damage_on_miss(), 1.5);
    assert_eq!(EnemyDifficulty::Boss.damage_on_miss(), 2.0);
}

// -----------------------------------------------------------------------------
// Validation tests
// -----------------------------------------------------------------------------

#[test]
fn test_builtin_content_is_valid() {
    let registry = ContentRegistry::builtin();
    let errors = validate_content(&registry);
    assert!(errors.is_empty(), "unexpected errors: {:?}", errors);
}

#[test]
fn test_validation_catches_bad_scene_and_duplicate_key() {
    let mut registry = ContentRegistry::builtin();
    registry.books[0].scene = "YourSceneNameHere".to_string();
    registry.books[1].save_key = registry.books[2].save_key.clone();

    let errors = validate_content(&registry);
    assert!(errors.iter().any(|e| e.field == "scene"));
    assert!(
        errors
            .iter()
            .any(|e| e.field == "save_key" && e.problem.contains("duplicate"))
    );
}

#[test]
fn test_validation_catches_zero_hp_and_dangling_unlock() {
    let mut registry = ContentRegistry::builtin();
    registry.enemies[0].max_hp = 0;
    registry.worlds[0].unlocks = Some("World_Nowhere".to_string());

    let errors = validate_content(&registry);
    assert!(errors.iter().any(|e| e.field == "max_hp"));
    assert!(errors.iter().any(|e| e.field == "unlocks"));
}

#[test]
fn test_registry_lookups() {
    let registry = ContentRegistry::builtin();
    assert_eq!(
        registry.world("world_fire").map(|w| w.name.as_str()),
        Some("Fire World")
    );
    assert!(registry.books.iter().any(|b| b.id == "book_math" && b.start_unlocked));
    assert!(registry.world("world_void").is_none());
    assert_eq!(
        registry.save_keys().len(),
        registry.books.len() + registry.worlds.len()
    );
}
