//! Content domain: RON-backed tuning and level definitions.

mod data;
mod loader;
mod validation;


pub use data::{
    DataFile, GameplayTuning, LevelDef, PickupSpawnDef, SpikerSpawnDef, TileRect, WallDef,
};
pub(crate) use data::to_vec2;
pub use loader::{ContentLoadError, load_all_content};
pub use validation::{ValidationError, validate_levels};

use bevy::prelude::*;
use std::path::Path;

use crate::core::{GameRng, GameState, LevelSequence};

const CONTENT_DIR: &str = "assets/data";
const BUILTIN_TUNING: &str = include_str!("../../assets/data/tuning.ron");
const BUILTIN_LEVELS: &str = include_str!("../../assets/data/levels.ron");

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, load_content);
    }
}

/// Content compiled into the binary, used when the on-disk files are unusable.
pub fn builtin_content() -> (GameplayTuning, Vec<LevelDef>) {
    let tuning = loader::parse_ron::<GameplayTuning>("builtin tuning.ron", BUILTIN_TUNING)
        .unwrap_or_else(|e| {
            warn!("{}", e);
            GameplayTuning::default()
        });
    let levels = loader::parse_ron::<DataFile<LevelDef>>("builtin levels.ron", BUILTIN_LEVELS)
        .map(|file| file.items)
        .unwrap_or_else(|e| {
            warn!("{}", e);
            Vec::new()
        });
    (tuning, levels)
}

fn load_content(mut commands: Commands, mut next_state: ResMut<NextState<GameState>>) {
    let (tuning, levels) = match load_all_content(Path::new(CONTENT_DIR)) {
        Ok(content) => content,
        Err(errors) => {
            for error in &errors {
                warn!("{}", error);
            }
            warn!("Falling back to builtin content");
            builtin_content()
        }
    };

    let problems = validate_levels(&levels, &tuning.rooms);
    for problem in &problems {
        warn!("Content validation: {}", problem);
    }

    info!(
        "Loaded {} level(s): {}",
        levels.len(),
        levels
            .iter()
            .map(|level| level.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    );

    commands.insert_resource(GameRng::from_seed_option(tuning.seed));
    commands.insert_resource(LevelSequence::new(levels));
    commands.insert_resource(tuning);
    next_state.set(GameState::Loading);
}
