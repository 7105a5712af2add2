//! Gadgets domain: gadget spawn helpers.

use bevy::prelude::*;

use crate::combat::{DamageSource, Team};
use crate::core::LevelScoped;
use crate::gadgets::grappler::{GrappleTuning, Grappler};
use crate::gadgets::systems::{HookContacts, Tether, TetherLine};

const HOOK_COLOR: Color = Color::srgb(0.8, 0.8, 0.85);
const TETHER_COLOR: Color = Color::srgb(0.75, 0.7, 0.55);

/// Spawn the hook head for `owner` and its tether sprite. Both stay hidden
/// until fired.
pub fn spawn_grappler(commands: &mut Commands, owner: Entity, tuning: &GrappleTuning) -> Entity {
    let radius = tuning.head_radius;
    let hook = commands
        .spawn((
            Grappler::new(tuning.clone()),
            HookContacts::default(),
            Tether::default(),
            DamageSource {
                damage: tuning.damage,
                knockback: true,
                team: Team::Player,
                owner: Some(owner),
            },
            LevelScoped,
            Sprite {
                color: HOOK_COLOR,
                custom_size: Some(Vec2::new(radius * 3.0, radius * 2.0)),
                ..default()
            },
            Transform::from_xyz(0.0, 0.0, 2.0),
            Visibility::Hidden,
        ))
        .id();

    commands.spawn((
        TetherLine { hook },
        LevelScoped,
        Sprite {
            color: TETHER_COLOR,
            custom_size: Some(Vec2::ZERO),
            ..default()
        },
        Transform::from_xyz(0.0, 0.0, 1.5),
        Visibility::Hidden,
    ));

    hook
}
