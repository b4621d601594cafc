//! Loader for RON content files at startup.

use ron::Options;
use std::fs;
use std::path::Path;

use super::data::*;
use super::registry::ContentRegistry;

/// Error type for content loading failures.
#[derive(Debug)]
pub struct ContentLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for ContentLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

fn read_file(path: &Path) -> Result<String, ContentLoadError> {
    fs::read_to_string(path).map_err(|e| ContentLoadError {
        file: path.display().to_string(),
        message: format!("IO error: {}", e),
    })
}

/// Parse a RON string containing a DataFile<T> wrapper.
pub fn parse_data_file<T>(file_name: &str, contents: &str) -> Result<Vec<T>, ContentLoadError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    let data: DataFile<T> = ron_options()
        .from_str(contents)
        .map_err(|e| ContentLoadError {
            file: file_name.to_string(),
            message: format!("Parse error: {}", e),
        })?;

    Ok(data.items)
}

/// Parse a single RON struct (not wrapped in DataFile).
pub fn parse_single_file<T>(file_name: &str, contents: &str) -> Result<T, ContentLoadError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    ron_options()
        .from_str(contents)
        .map_err(|e| ContentLoadError {
            file: file_name.to_string(),
            message: format!("Parse error: {}", e),
        })
}

/// Load all content from assets/data/*.ron.
///
/// Missing list files fall back to the matching builtin list so a partial
/// data directory still boots; a missing tuning file falls back to defaults.
/// Every failure is reported so the caller can log it.
pub fn load_all_content(
    base_path: &Path,
) -> (ContentRegistry, GameTuning, Vec<ContentLoadError>) {
    let mut errors = Vec::new();

    let mut read_or_record = |file: &str| -> Option<String> {
        match read_file(&base_path.join(file)) {
            Ok(contents) => Some(contents),
            Err(e) => {
                errors.push(e);
                None
            }
        }
    };

    let enemies_src = read_or_record("enemies.ron");
    let books_src = read_or_record("books.ron");
    let worlds_src = read_or_record("worlds.ron");
    let tuning_src = read_or_record("tuning.ron");

    let mut registry = ContentRegistry::builtin();

    macro_rules! parse_into {
        ($field:ident, $src:expr, $file:expr, $type:ty) => {
            if let Some(contents) = $src {
                match parse_data_file::<$type>($file, &contents) {
                    Ok(items) => registry.$field = items,
                    Err(e) => errors.push(e),
                }
            }
        };
    }

    parse_into!(enemies, enemies_src, "enemies.ron", EnemyProfile);
    parse_into!(books, books_src, "books.ron", BookDef);
    parse_into!(worlds, worlds_src, "worlds.ron", WorldDef);

    let tuning = match tuning_src {
        Some(contents) => match parse_single_file::<GameTuning>("tuning.ron", &contents) {
            Ok(tuning) => tuning,
            Err(e) => {
                errors.push(e);
                GameTuning::default()
            }
        },
        None => GameTuning::default(),
    };

    (registry, tuning, errors)
}
