//! Debug domain: tests for the progress shortcuts and status line.

use super::{DebugState, reset_progress, unlock_all};
use crate::content::ContentRegistry;
use crate::progress::ProgressStore;

// -----------------------------------------------------------------------------
// Progress shortcuts
// -----------------------------------------------------------------------------

#[test]
fn test_unlock_all_marks_every_key_fresh() {
    let registry = ContentRegistry::builtin();
    let mut store = ProgressStore::in_memory();
    store.ensure_unlocked("Book_Math");

    let changed = unlock_all(&mut store, &registry);
    assert_eq!(changed, registry.save_keys().len() - 1);
    for key in registry.save_keys() {
        assert!(store.is_unlocked(key));
    }
    assert!(store.take_fresh_unlock("World_Fire_Unlocked"));
    assert!(!store.take_fresh_unlock("Book_Math"));
}

#[test]
fn test_unlock_all_twice_changes_nothing() {
    let registry = ContentRegistry::builtin();
    let mut store = ProgressStore::in_memory();
    unlock_all(&mut store, &registry);
    assert_eq!(unlock_all(&mut store, &registry), 0);
}

#[test]
fn test_reset_locks_everything() {
    let registry = ContentRegistry::builtin();
    let mut store = ProgressStore::in_memory();
    unlock_all(&mut store, &registry);

    let changed = reset_progress(&mut store, &registry);
    assert_eq!(changed, registry.save_keys().len());
    for key in registry.save_keys() {
        assert!(!store.is_unlocked(key));
        assert!(!store.take_fresh_unlock(key));
    }
}

// -----------------------------------------------------------------------------
// Status line
// -----------------------------------------------------------------------------

#[test]
fn test_status_message_expires() {
    let mut state = DebugState::default();
    assert_eq!(state.message(), "");

    state.set_message("Unlocked 5 items", 1.0);
    state.tick_message(0.5);
    assert_eq!(state.message(), "Unlocked 5 items");

    state.tick_message(0.6);
    assert_eq!(state.message(), "");
    assert!(state.status_message.is_none());
}
