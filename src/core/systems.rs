//! Core domain: level flow systems and setup.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::core::events::SceneRequest;
use crate::core::resources::LevelSequence;
use crate::core::state::{GameState, RunOutcome};
use crate::core::clock::GameClock;

/// Loading only exists so leaving `Playing` runs its teardown; move straight on.
pub(crate) fn finish_loading(
    sequence: Res<LevelSequence>,
    mut outcome: ResMut<RunOutcome>,
    mut game_state: ResMut<NextState<GameState>>,
) {
    if sequence.current().is_some() {
        game_state.set(GameState::Playing);
    } else {
        warn!("No level to load; ending the run");
        *outcome = RunOutcome::Completed;
        game_state.set(GameState::GameOver);
    }
}

pub(crate) fn handle_scene_requests(
    mut requests: MessageReader<SceneRequest>,
    mut sequence: ResMut<LevelSequence>,
    mut outcome: ResMut<RunOutcome>,
    mut game_state: ResMut<NextState<GameState>>,
) {
    // Only the first request of a frame counts; later ones refer to a level
    // that is already being torn down.
    let Some(request) = requests.read().next().copied() else {
        return;
    };

    match request {
        SceneRequest::GameOver => {
            info!("Avatar defeated on level {}", sequence.current_index() + 1);
            *outcome = RunOutcome::Defeated;
            game_state.set(GameState::GameOver);
        }
        SceneRequest::NextLevel => {
            if sequence.advance() {
                info!("Advancing to level {}", sequence.current_index() + 1);
                game_state.set(GameState::Loading);
            } else {
                info!("Final level cleared");
                *outcome = RunOutcome::Completed;
                game_state.set(GameState::GameOver);
            }
        }
        SceneRequest::Restart => {
            info!("Restarting from the first level");
            sequence.restart();
            game_state.set(GameState::Loading);
        }
    }
}

/// Freeze gameplay timers while no level is running.
pub(crate) fn pause_clock(mut clock: ResMut<GameClock>) {
    clock.set_paused(true);
}

pub(crate) fn resume_clock(mut clock: ResMut<GameClock>) {
    clock.set_paused(false);
}

pub(crate) fn setup_camera(mut commands: Commands) {
    commands.spawn((
        Camera2d,
        // One tile is 60 pixels, so a 16x11 room fills the window.
        Transform::from_scale(Vec3::splat(1.0 / 60.0)),
    ));
}

/// Everything spawned for a level; despawned when the level is left.
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct LevelScoped;

pub(crate) fn cleanup_level(mut commands: Commands, query: Query<Entity, With<LevelScoped>>) {
    let mut count = 0;
    for entity in query.iter() {
        commands.entity(entity).despawn();
        count += 1;
    }
    debug!("Despawned {} level entities", count);
}
