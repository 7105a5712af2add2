//! Movement domain: the shared four-way direction model.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Cardinal facing. The discriminant doubles as the index into every
/// per-direction table (door anchors, poses, movement bindings).
#[derive(
    Component, Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize, Reflect,
)]
pub enum Facing {
    #[default]
    Right = 0,
    Up = 1,
    Left = 2,
    Down = 3,
}

impl Facing {
    pub const ALL: [Facing; 4] = [Facing::Right, Facing::Up, Facing::Left, Facing::Down];

    pub fn index(self) -> usize {
        self as usize
    }

    /// Indices wrap, so `from_index(5)` is `Up`.
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % 4]
    }

    pub fn unit(self) -> Vec2 {
        match self {
            Facing::Right => Vec2::X,
            Facing::Up => Vec2::Y,
            Facing::Left => Vec2::NEG_X,
            Facing::Down => Vec2::NEG_Y,
        }
    }

    /// Step between neighbouring rooms.
    pub fn grid_step(self) -> IVec2 {
        match self {
            Facing::Right => IVec2::X,
            Facing::Up => IVec2::Y,
            Facing::Left => IVec2::NEG_X,
            Facing::Down => IVec2::NEG_Y,
        }
    }

    pub fn opposite(self) -> Self {
        Self::from_index(self.index() + 2)
    }

    /// Z rotation that points a +X-aligned sprite along this facing.
    pub fn rotation(self) -> Quat {
        Quat::from_rotation_z(std::f32::consts::FRAC_PI_2 * self.index() as f32)
    }
}
