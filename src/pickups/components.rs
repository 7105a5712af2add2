//! Pickups domain: pickup kinds and tuning.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
pub enum PickupKind {
    /// Placeholder left by a level author; collecting it is an error.
    #[default]
    Unassigned,
    Key,
    Health,
    Grappler,
    /// Ends the level.
    Flag,
}

impl PickupKind {
    pub fn color(self) -> Color {
        match self {
            PickupKind::Unassigned => Color::srgb(0.5, 0.5, 0.5),
            PickupKind::Key => Color::srgb(0.95, 0.8, 0.2),
            PickupKind::Health => Color::srgb(0.9, 0.25, 0.3),
            PickupKind::Grappler => Color::srgb(0.6, 0.5, 0.35),
            PickupKind::Flag => Color::srgb(0.3, 0.55, 0.95),
        }
    }
}

#[derive(Component, Debug, Clone, Copy)]
pub struct Pickup {
    pub kind: PickupKind,
    /// The pickup cannot be collected before this time.
    pub armed_at: f64,
}

impl Pickup {
    pub fn new(kind: PickupKind, armed_at: f64) -> Self {
        Self { kind, armed_at }
    }

    pub fn is_armed(&self, now: f64) -> bool {
        now >= self.armed_at
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct PickupTuning {
    pub heal_amount: i32,
    /// Delay before a freshly spawned pickup can be collected.
    pub arm_delay: f32,
    pub size: f32,
}

impl Default for PickupTuning {
    fn default() -> Self {
        Self {
            heal_amount: 2,
            arm_delay: 0.5,
            size: 0.5,
        }
    }
}
