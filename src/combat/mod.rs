//! Combat domain: shared damage rules, enemies, and the Spiker.

mod ai;
mod components;
mod events;
mod resolver;
mod spawn;
mod systems;

#[cfg(test)]
mod tests;

pub use ai::spiker::{Spiker, SpikerFrame, SpikerMode, SpikerTuning};
pub use components::{DamageSource, DropTable, Enemy, EnemyStats, Knockback, Team, Vitals};
pub use events::{DeathEvent, HitEvent};
pub use resolver::{Hit, HitOutcome, HitResponse, knockback_axis, resolve_hit};
pub use spawn::spawn_spiker;

use bevy::prelude::*;

use crate::combat::systems::{
    apply_enemy_hits, handle_enemy_deaths, route_contact_hits, update_spikers,
};
use crate::core::GameState;

pub struct CombatPlugin;

impl Plugin for CombatPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<HitEvent>()
            .add_message::<DeathEvent>()
            .add_systems(
                Update,
                (
                    route_contact_hits,
                    apply_enemy_hits,
                    handle_enemy_deaths,
                    update_spikers,
                )
                    .chain()
                    .run_if(in_state(GameState::Playing)),
            );
    }
}
