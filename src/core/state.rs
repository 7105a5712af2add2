//! Core domain: game state definitions for the level flow.

use bevy::prelude::*;

#[derive(States, Debug, Hash, Eq, PartialEq, Clone, Default)]
pub enum GameState {
    /// Content is being read from disk.
    #[default]
    Booting,
    /// Transient state between levels; tears the old level down.
    Loading,
    Playing,
    GameOver,
}

/// How the last run ended, for the game-over screen.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunOutcome {
    #[default]
    Defeated,
    Completed,
}
