//! Rooms domain: room grid, terrain, and level geometry.

mod components;
mod grid;
mod spawn;
mod systems;
mod terrain;

#[cfg(test)]
mod tests;

pub use components::{AnchorWall, HazardTile, Wall};
pub use grid::{ActiveRoom, RoomGrid, RoomLayout, RoomQuery};
pub use terrain::{TerrainQuery, TileMap};

use bevy::prelude::*;

use crate::core::GameState;
use crate::rooms::spawn::spawn_level;
use crate::rooms::systems::snap_camera_to_room;

pub struct RoomsPlugin;

impl Plugin for RoomsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<RoomGrid>()
            .init_resource::<TileMap>()
            .init_resource::<ActiveRoom>()
            .add_systems(OnEnter(GameState::Playing), spawn_level)
            .add_systems(
                PostUpdate,
                snap_camera_to_room.run_if(in_state(GameState::Playing)),
            );
    }
}
