//! Loader for RON content files at startup.

use ron::Options;
use std::fs;
use std::path::Path;

use super::data::*;

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

/// Parse a RON document, tagging errors with the name it came from.
pub(crate) fn parse_ron<T>(file_name: &str, contents: &str) -> Result<T, ContentLoadError>
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

fn read_file(path: &Path) -> Result<String, ContentLoadError> {
    fs::read_to_string(path).map_err(|e| ContentLoadError {
        file: path.display().to_string(),
        message: format!("IO error: {}", e),
    })
}

/// Load a RON file containing a DataFile<T> wrapper.
fn load_data_file<T>(path: &Path) -> Result<Vec<T>, ContentLoadError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    let contents = read_file(path)?;
    let data: DataFile<T> = parse_ron(&path.display().to_string(), &contents)?;
    Ok(data.items)
}

/// Load a single RON struct (not wrapped in DataFile).
fn load_single_file<T>(path: &Path) -> Result<T, ContentLoadError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    let contents = read_file(path)?;
    parse_ron(&path.display().to_string(), &contents)
}

/// Load tuning and the level sequence from assets/data/.
/// Returns every file error encountered rather than stopping at the first.
pub fn load_all_content(
    base_path: &Path,
) -> Result<(GameplayTuning, Vec<LevelDef>), Vec<ContentLoadError>> {
    let mut errors = Vec::new();

    let tuning = match load_single_file::<GameplayTuning>(&base_path.join("tuning.ron")) {
        Ok(tuning) => Some(tuning),
        Err(e) => {
            errors.push(e);
            None
        }
    };

    let levels = match load_data_file::<LevelDef>(&base_path.join("levels.ron")) {
        Ok(levels) => Some(levels),
        Err(e) => {
            errors.push(e);
            None
        }
    };

    match (tuning, levels) {
        (Some(tuning), Some(levels)) => Ok((tuning, levels)),
        _ => Err(errors),
    }
}
