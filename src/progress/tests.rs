//! Progress domain: tests for unlock flags, persistence and world completion.

use std::path::PathBuf;

use super::{ProgressStore, RonFileBackend, complete_world};
use crate::content::ContentRegistry;

fn temp_progress_path(name: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push(format!(
        "quested_test_{}_{}.ron",
        name,
        std::process::id()
    ));
    let _ = std::fs::remove_file(&path);
    path
}

// -----------------------------------------------------------------------------
// Store semantics
// -----------------------------------------------------------------------------

#[test]
fn test_unknown_and_empty_keys_are_locked() {
    let store = ProgressStore::in_memory();
    assert!(!store.is_unlocked("World_Ice_Unlocked"));
    assert!(!store.is_unlocked(""));
}

#[test]
fn test_set_unlocked_round_trip() {
    let mut store = ProgressStore::in_memory();
    store.set_unlocked("Book_English", true);
    assert!(store.is_unlocked("Book_English"));

    store.set_unlocked("Book_English", false);
    assert!(!store.is_unlocked("Book_English"));
}

#[test]
fn test_empty_key_is_never_written() {
    let mut store = ProgressStore::in_memory();
    store.set_unlocked("", true);
    assert!(!store.is_unlocked(""));
    assert!(!store.take_fresh_unlock(""));
}

#[test]
fn test_fresh_unlock_is_reported_once() {
    let mut store = ProgressStore::in_memory();
    store.set_unlocked("World_Fire_Unlocked", true);

    assert!(store.take_fresh_unlock("World_Fire_Unlocked"));
    assert!(!store.take_fresh_unlock("World_Fire_Unlocked"));
}

#[test]
fn test_reunlocking_is_not_fresh() {
    let mut store = ProgressStore::in_memory();
    store.set_unlocked("World_Fire_Unlocked", true);
    store.take_fresh_unlock("World_Fire_Unlocked");

    store.set_unlocked("World_Fire_Unlocked", true);
    assert!(!store.take_fresh_unlock("World_Fire_Unlocked"));
}

#[test]
fn test_ensure_unlocked_owes_no_animation() {
    let mut store = ProgressStore::in_memory();
    store.ensure_unlocked("Book_Math");
    assert!(store.is_unlocked("Book_Math"));
    assert!(!store.take_fresh_unlock("Book_Math"));
}

#[test]
fn test_flag_or_uses_default_until_written() {
    let mut store = ProgressStore::in_memory();
    assert!(store.flag_or("Quested_Sound", true));

    store.set_flag("Quested_Sound", false);
    assert!(!store.flag_or("Quested_Sound", true));
}

// -----------------------------------------------------------------------------
// Persistence
// -----------------------------------------------------------------------------

#[test]
fn test_unlock_survives_restart() {
    let path = temp_progress_path("restart");

    {
        let backend = RonFileBackend::open(&path).unwrap();
        let mut store = ProgressStore::new(backend);
        assert!(!store.is_unlocked("X"));
        store.set_unlocked("X", true);
    }

    let reopened = ProgressStore::new(RonFileBackend::open(&path).unwrap());
    assert!(reopened.is_unlocked("X"));
    assert!(!reopened.is_unlocked("Y"));

    let _ = std::fs::remove_file(&path);
}

#[test]
fn test_corrupt_progress_file_reports_error() {
    let path = temp_progress_path("corrupt");
    std::fs::write(&path, "(flags: {\"X\": maybe})").unwrap();

    let error = RonFileBackend::open(&path).unwrap_err();
    assert!(error.to_string().contains("Progress file"));

    let _ = std::fs::remove_file(&path);
}

// -----------------------------------------------------------------------------
// World completion
// -----------------------------------------------------------------------------

#[test]
fn test_completing_worlds_unlocks_the_chain() {
    let registry = ContentRegistry::builtin();
    let mut store = ProgressStore::in_memory();

    complete_world(&mut store, &registry, "world_ice");
    assert!(store.is_unlocked("World_Fire_Unlocked"));
    assert!(!store.is_unlocked("World_Jungle_Unlocked"));

    complete_world(&mut store, &registry, "world_fire");
    assert!(store.is_unlocked("World_Jungle_Unlocked"));
}

#[test]
fn test_completing_last_or_unknown_world_is_harmless() {
    let registry = ContentRegistry::builtin();
    let mut store = ProgressStore::in_memory();

    complete_world(&mut store, &registry, "world_jungle");
    complete_world(&mut store, &registry, "world_void");
    assert!(!store.is_unlocked("World_Fire_Unlocked"));
}
