//! Progress domain: the injected unlock store.

use bevy::prelude::*;
use std::collections::HashSet;

#[cfg(test)]
use super::backend::MemoryBackend;
use super::backend::ProgressBackend;

/// Persisted unlock flags plus the keys unlocked during this session whose
/// items have not yet played their unlock animation.
#[derive(Resource)]
pub struct ProgressStore {
    backend: Box<dyn ProgressBackend>,
    fresh_unlocks: HashSet<String>,
}

impl ProgressStore {
    pub fn new(backend: impl ProgressBackend) -> Self {
        Self {
            backend: Box::new(backend),
            fresh_unlocks: HashSet::new(),
        }
    }

    #[cfg(test)]
    pub fn in_memory() -> Self {
        Self::new(MemoryBackend::default())
    }

    /// Unknown and empty keys read as locked.
    pub fn is_unlocked(&self, key: &str) -> bool {
        if key.is_empty() {
            return false;
        }
        self.backend.get(key).unwrap_or(false)
    }

    /// Persist an unlock flag immediately. Empty keys are ignored.
    pub fn set_unlocked(&mut self, key: &str, unlocked: bool) {
        if key.is_empty() {
            return;
        }

        let was_unlocked = self.is_unlocked(key);
        if !self.write(key, unlocked) {
            return;
        }

        info!("Progress saved: {} = {}", key, unlocked);
        if unlocked && !was_unlocked {
            self.fresh_unlocks.insert(key.to_string());
        } else if !unlocked {
            self.fresh_unlocks.remove(key);
        }
    }

    /// Mark an item that starts unlocked. No unlock animation is owed.
    pub fn ensure_unlocked(&mut self, key: &str) {
        if key.is_empty() || self.is_unlocked(key) {
            return;
        }
        self.write(key, true);
    }

    /// Read a setting flag with a default for keys never written.
    pub fn flag_or(&self, key: &str, default: bool) -> bool {
        self.backend.get(key).unwrap_or(default)
    }

    pub fn set_flag(&mut self, key: &str, value: bool) {
        if key.is_empty() {
            return;
        }
        self.write(key, value);
    }

    /// True once for each key unlocked this session. The caller plays the
    /// unlock animation for it.
    pub fn take_fresh_unlock(&mut self, key: &str) -> bool {
        self.fresh_unlocks.remove(key)
    }

    fn write(&mut self, key: &str, value: bool) -> bool {
        match self.backend.set(key, value) {
            Ok(()) => true,
            Err(e) => {
                error!("Failed to save progress: {}", e);
                false
            }
        }
    }
}
