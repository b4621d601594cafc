//! Validation for content definitions and their cross-references.

use std::collections::HashSet;

use super::registry::ContentRegistry;
use crate::core::GameState;

/// A validation error with context about what failed.
#[derive(Debug)]
pub struct ValidationError {
    pub source_type: &'static str,
    pub source_id: String,
    pub field: &'static str,
    pub problem: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} '{}' has invalid field '{}': {}",
            self.source_type, self.source_id, self.field, self.problem
        )
    }
}

/// Helper macro for recording a failed check
macro_rules! check {
    ($errors:expr, $cond:expr, $source_type:expr, $source_id:expr, $field:expr, $problem:expr) => {
        if !$cond {
            $errors.push(ValidationError {
                source_type: $source_type,
                source_id: $source_id.to_string(),
                field: $field,
                problem: $problem.to_string(),
            });
        }
    };
}

/// Validate all content in the registry.
/// Returns a list of validation errors, empty if everything is usable.
pub fn validate_content(registry: &ContentRegistry) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    check!(
        errors,
        !registry.enemies.is_empty(),
        "Roster",
        "enemies",
        "items",
        "battle roster is empty"
    );

    for enemy in &registry.enemies {
        check!(
            errors,
            enemy.max_hp > 0,
            "Enemy",
            enemy.id,
            "max_hp",
            "must be positive"
        );
        check!(
            errors,
            enemy.size_modifier > 0.0,
            "Enemy",
            enemy.id,
            "size_modifier",
            "must be positive"
        );
    }

    let mut seen_keys = HashSet::new();

    for book in &registry.books {
        check!(
            errors,
            GameState::from_scene_name(&book.scene).is_some(),
            "Book",
            book.id,
            "scene",
            format!("unknown scene '{}'", book.scene)
        );
        check!(
            errors,
            !book.save_key.is_empty(),
            "Book",
            book.id,
            "save_key",
            "is empty"
        );
        check!(
            errors,
            seen_keys.insert(book.save_key.as_str()),
            "Book",
            book.id,
            "save_key",
            format!("duplicate save key '{}'", book.save_key)
        );
    }

    for world in &registry.worlds {
        check!(
            errors,
            GameState::from_scene_name(&world.scene).is_some(),
            "World",
            world.id,
            "scene",
            format!("unknown scene '{}'", world.scene)
        );
        check!(
            errors,
            !world.save_key.is_empty(),
            "World",
            world.id,
            "save_key",
            "is empty"
        );
        check!(
            errors,
            seen_keys.insert(world.save_key.as_str()),
            "World",
            world.id,
            "save_key",
            format!("duplicate save key '{}'", world.save_key)
        );
    }

    for world in &registry.worlds {
        if let Some(unlocks) = &world.unlocks {
            check!(
                errors,
                registry.worlds.iter().any(|w| &w.save_key == unlocks),
                "World",
                world.id,
                "unlocks",
                format!("references missing world key '{}'", unlocks)
            );
        }
    }

    errors
}
