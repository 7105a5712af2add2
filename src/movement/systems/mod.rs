//! Movement domain: system modules for the avatar.

pub(crate) mod collisions;
pub(crate) mod input;
pub(crate) mod movement;

pub(crate) use collisions::apply_avatar_hits;
pub(crate) use input::read_action_input;
pub(crate) use movement::{check_room_transitions, drive_avatar, sync_sword};
