//! Data definitions for the RON content files.
//!
//! These structs mirror the structure in assets/data/*.ron. Domain tuning
//! structs (avatar, grappler, spiker, ...) deserialize directly and fall back
//! to their `Default` values for any field a file omits.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::combat::{EnemyStats, SpikerTuning};
use crate::gadgets::GrappleTuning;
use crate::movement::AvatarTuning;
use crate::pickups::{PickupKind, PickupTuning};
use crate::rooms::RoomLayout;

// ============================================================================
// Common wrapper for RON files with schema_version and items
// ============================================================================

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DataFile<T> {
    pub schema_version: u32,
    pub items: Vec<T>,
}

// ============================================================================
// Tuning (tuning.ron)
// ============================================================================

/// Every gameplay constant in one file.
#[derive(Resource, Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct GameplayTuning {
    /// Fixed RNG seed for reproducible runs; a fresh seed is drawn when absent.
    pub seed: Option<u64>,
    pub avatar: AvatarTuning,
    pub grappler: GrappleTuning,
    pub enemy: EnemyStats,
    pub spiker: SpikerTuning,
    pub pickups: PickupTuning,
    pub rooms: RoomLayout,
}

// ============================================================================
// Levels (levels.ron)
// ============================================================================

/// Axis-aligned block of tiles, inclusive on both corners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct TileRect {
    pub min: (i32, i32),
    pub max: (i32, i32),
}

impl TileRect {
    pub fn tiles(&self) -> impl Iterator<Item = IVec2> + '_ {
        let (x0, y0) = self.min;
        let (x1, y1) = self.max;
        (y0..=y1).flat_map(move |y| (x0..=x1).map(move |x| IVec2::new(x, y)))
    }

    pub fn center(&self) -> Vec2 {
        let min = Vec2::new(self.min.0 as f32, self.min.1 as f32);
        let max = Vec2::new(self.max.0 as f32 + 1.0, self.max.1 as f32 + 1.0);
        (min + max) * 0.5
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(
            (self.max.0 - self.min.0 + 1) as f32,
            (self.max.1 - self.min.1 + 1) as f32,
        )
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WallDef {
    pub rect: TileRect,
    /// Grapple hooks latch onto anchor walls and pull their owner in.
    #[serde(default)]
    pub anchor: bool,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SpikerSpawnDef {
    pub position: (f32, f32),
    #[serde(default)]
    pub guaranteed_drop: Option<PickupKind>,
    /// Uniformly sampled on death; `None` entries drop nothing.
    #[serde(default)]
    pub random_drops: Vec<Option<PickupKind>>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PickupSpawnDef {
    pub kind: PickupKind,
    pub position: (f32, f32),
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LevelDef {
    pub id: String,
    pub name: String,
    /// Number of rooms along x and y.
    pub rooms: (i32, i32),
    pub avatar_start: (f32, f32),
    #[serde(default)]
    pub start_with_grappler: bool,
    #[serde(default)]
    pub walls: Vec<WallDef>,
    /// Tiles that punish a grapple landing.
    #[serde(default)]
    pub hazards: Vec<TileRect>,
    #[serde(default)]
    pub spikers: Vec<SpikerSpawnDef>,
    #[serde(default)]
    pub pickups: Vec<PickupSpawnDef>,
}

pub(crate) fn to_vec2(pair: (f32, f32)) -> Vec2 {
    Vec2::new(pair.0, pair.1)
}
