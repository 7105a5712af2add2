//! Gadgets domain: swappable tools that can take over the avatar's movement.

mod gadget;
mod grappler;
mod spawn;
mod systems;

#[cfg(test)]
mod tests;

pub use gadget::{Gadget, GadgetSignal};
pub use grappler::{GrappleMode, GrappleTuning, Grappler, HookContact};
pub use spawn::spawn_grappler;
pub use systems::{HookContacts, Tether, TetherLine};

use bevy::prelude::*;

use crate::core::GameState;
use crate::gadgets::systems::{render_tethers, step_grapplers, sync_tethers};

pub struct GadgetsPlugin;

impl Plugin for GadgetsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            FixedUpdate,
            step_grapplers.run_if(in_state(GameState::Playing)),
        )
        .add_systems(
            PostUpdate,
            (sync_tethers, render_tethers)
                .chain()
                .run_if(in_state(GameState::Playing)),
        );
    }
}
