//! Pickups domain: keys, health, gadgets, and level flags lying in the world.

mod components;
mod spawn;
mod systems;

#[cfg(test)]
mod tests;

pub use components::{Pickup, PickupKind, PickupTuning};
pub use spawn::spawn_pickup;
pub use systems::{PickupOutcome, apply_pickup};

use bevy::prelude::*;

use crate::core::GameState;
use crate::pickups::systems::collect_pickups;

pub struct PickupsPlugin;

impl Plugin for PickupsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            collect_pickups.run_if(in_state(GameState::Playing)),
        );
    }
}
