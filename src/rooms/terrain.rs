//! Rooms domain: per-tile terrain lookups.

use bevy::prelude::*;
use std::collections::HashSet;

use crate::content::TileRect;

/// Terrain queries consumed by gadgets.
pub trait TerrainQuery {
    fn is_hazardous(&self, world: Vec2) -> bool;
}

/// Hazard tiles of the loaded level.
#[derive(Resource, Debug, Clone, Default)]
pub struct TileMap {
    hazards: HashSet<IVec2>,
}

impl TileMap {
    pub fn from_hazards<'a>(rects: impl IntoIterator<Item = &'a TileRect>) -> Self {
        Self {
            hazards: rects.into_iter().flat_map(|rect| rect.tiles()).collect(),
        }
    }

    pub fn tile_at(world: Vec2) -> IVec2 {
        world.floor().as_ivec2()
    }

    pub fn hazard_count(&self) -> usize {
        self.hazards.len()
    }
}

impl TerrainQuery for TileMap {
    fn is_hazardous(&self, world: Vec2) -> bool {
        self.hazards.contains(&Self::tile_at(world))
    }
}
