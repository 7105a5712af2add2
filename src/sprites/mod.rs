//! Sprites module for pose playback and sprite tinting.
//!
//! Actors carry a `Pose` that their mode machines update every frame; this
//! module only advances playback and colors the placeholder sprites.

mod animation;
mod tint;

#[cfg(test)]
mod tests;

pub use animation::{Pose, PoseClip};
pub use tint::Tint;

use bevy::prelude::*;

use crate::core::GameState;
use crate::sprites::animation::advance_poses;
use crate::sprites::tint::apply_tints;

pub struct SpritesPlugin;

impl Plugin for SpritesPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            PostUpdate,
            (advance_poses, apply_tints)
                .chain()
                .run_if(in_state(GameState::Playing)),
        );
    }
}
