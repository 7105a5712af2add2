//! UI domain: in-level HUD.

mod hud_player;

#[cfg(test)]
mod tests;

use bevy::prelude::*;

use crate::core::GameState;
use crate::ui::hud_player::{spawn_hud, update_healthbar, update_key_count};

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(GameState::Playing), spawn_hud)
            .add_systems(
                Update,
                (update_healthbar, update_key_count).run_if(in_state(GameState::Playing)),
            );
    }
}
