//! Movement domain: the avatar, its mode machine, and the facing model.

mod avatar;
mod bootstrap;
mod components;
mod facing;
mod resources;
mod systems;


pub use avatar::{
    AvatarContext, AvatarFrame, AvatarMode, AvatarState, PoseUpdate, RoomTransition,
};
pub use bootstrap::spawn_avatar;
pub use components::{Avatar, GameLayer, Loadout, Sword};
pub use facing::Facing;
pub use resources::{ActionInput, AvatarTuning, KeyBindings};

use bevy::prelude::*;

use crate::core::GameState;
use crate::movement::systems::{
    apply_avatar_hits, check_room_transitions, drive_avatar, read_action_input, sync_sword,
};

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<KeyBindings>()
            .init_resource::<ActionInput>()
            .add_systems(
                Update,
                (
                    read_action_input,
                    apply_avatar_hits,
                    drive_avatar,
                    check_room_transitions,
                    sync_sword,
                )
                    .chain()
                    .run_if(in_state(GameState::Playing)),
            );
    }
}
