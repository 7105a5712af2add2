//! Core domain: game states, the level sequence, and the game clock.

mod clock;
mod events;
mod resources;
mod state;
mod systems;
mod ui;


pub use clock::GameClock;
pub use events::SceneRequest;
pub use resources::{GameRng, LevelSequence};
pub use state::{GameState, RunOutcome};
pub use systems::LevelScoped;

use bevy::prelude::*;

use crate::core::clock::advance_game_clock;
use crate::core::systems::{
    cleanup_level, finish_loading, handle_scene_requests, pause_clock, resume_clock, setup_camera,
};
use crate::core::ui::game_over::{
    cleanup_game_over_screen, handle_game_over_input, spawn_game_over_screen,
};

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<GameState>()
            .init_resource::<GameClock>()
            .init_resource::<RunOutcome>()
            .init_resource::<LevelSequence>()
            .add_message::<SceneRequest>()
            .add_systems(Startup, setup_camera)
            .add_systems(First, advance_game_clock)
            .add_systems(OnEnter(GameState::Loading), finish_loading)
            .add_systems(OnEnter(GameState::Playing), resume_clock)
            .add_systems(OnExit(GameState::Playing), (pause_clock, cleanup_level))
            .add_systems(OnEnter(GameState::GameOver), spawn_game_over_screen)
            .add_systems(OnExit(GameState::GameOver), cleanup_game_over_screen)
            .add_systems(
                Update,
                handle_game_over_input.run_if(in_state(GameState::GameOver)),
            )
            .add_systems(Last, handle_scene_requests);
    }
}
