//! Progress domain: storage backends for persisted boolean flags.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Error type for progress persistence failures.
#[derive(Debug)]
pub struct ProgressError {
    pub path: String,
    pub message: String,
}

impl std::fmt::Display for ProgressError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Progress file {}: {}", self.path, self.message)
    }
}

/// Key/value flag storage. Writes are expected to persist immediately.
pub trait ProgressBackend: Send + Sync + 'static {
    fn get(&self, key: &str) -> Option<bool>;
    fn set(&mut self, key: &str, value: bool) -> Result<(), ProgressError>;
}

/// Flags kept only for the lifetime of the process.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryBackend {
    flags: BTreeMap<String, bool>,
}

#[cfg(test)]
impl ProgressBackend for MemoryBackend {
    fn get(&self, key: &str) -> Option<bool> {
        self.flags.get(key).copied()
    }

    fn set(&mut self, key: &str, value: bool) -> Result<(), ProgressError> {
        self.flags.insert(key.to_string(), value);
        Ok(())
    }
}

/// On-disk layout of the progress file.
#[derive(Debug, Default, Serialize, Deserialize)]
struct ProgressFile {
    #[serde(default)]
    flags: BTreeMap<String, bool>,
}

/// Flags persisted as a RON file, rewritten on every change.
#[derive(Debug)]
pub struct RonFileBackend {
    path: PathBuf,
    file: ProgressFile,
}

impl RonFileBackend {
    /// Open the progress file, treating a missing file as empty progress.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, ProgressError> {
        let path = path.into();

        if !path.exists() {
            info!("No progress file found at {:?}. Starting fresh.", path);
            return Ok(Self::empty(path));
        }

        let contents = std::fs::read_to_string(&path).map_err(|e| error_at(&path, e))?;
        let file = ron::from_str::<ProgressFile>(&contents).map_err(|e| error_at(&path, e))?;
        info!(
            "Loaded {} progress flag(s) from {:?}",
            file.flags.len(),
            path
        );

        Ok(Self { path, file })
    }

    /// A backend that writes to `path` without reading it first.
    pub fn empty(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            file: ProgressFile::default(),
        }
    }

    fn write(&self) -> Result<(), ProgressError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| error_at(&self.path, e))?;
            }
        }

        let pretty = ron::ser::PrettyConfig::default();
        let serialized =
            ron::ser::to_string_pretty(&self.file, pretty).map_err(|e| error_at(&self.path, e))?;
        std::fs::write(&self.path, serialized).map_err(|e| error_at(&self.path, e))
    }
}

impl ProgressBackend for RonFileBackend {
    fn get(&self, key: &str) -> Option<bool> {
        self.file.flags.get(key).copied()
    }

    fn set(&mut self, key: &str, value: bool) -> Result<(), ProgressError> {
        self.file.flags.insert(key.to_string(), value);
        self.write()
    }
}

fn error_at(path: &Path, error: impl std::fmt::Display) -> ProgressError {
    ProgressError {
        path: path.display().to_string(),
        message: error.to_string(),
    }
}
