//! Combat domain: enemy spawn helpers.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::combat::ai::spiker::Spiker;
use crate::combat::components::{DamageSource, DropTable, Enemy, EnemyStats, Knockback, Team, Vitals};
use crate::content::{SpikerSpawnDef, to_vec2};
use crate::core::LevelScoped;
use crate::movement::{Facing, GameLayer};
use crate::sprites::{Pose, PoseClip, Tint};

const SPIKER_COLOR: Color = Color::srgb(0.7, 0.3, 0.6);

pub fn spawn_spiker(commands: &mut Commands, def: &SpikerSpawnDef, stats: &EnemyStats) -> Entity {
    let position = to_vec2(def.position);
    commands
        .spawn((
            (
                Enemy,
                Spiker::default(),
                Team::Enemy,
                Vitals::new(stats.max_health),
                Knockback::default(),
                Facing::default(),
                DamageSource {
                    damage: stats.contact_damage,
                    knockback: true,
                    team: Team::Enemy,
                    owner: None,
                },
                DropTable {
                    guaranteed: def.guaranteed_drop,
                    random: def.random_drops.clone(),
                },
                LevelScoped,
            ),
            // Rendering
            (
                Sprite {
                    color: SPIKER_COLOR,
                    custom_size: Some(Vec2::splat(stats.radius * 2.0)),
                    ..default()
                },
                Tint::new(SPIKER_COLOR),
                Pose::new("spiker", PoseClip::Walk, Facing::default()),
                Transform::from_translation(position.extend(1.0)),
            ),
            // Physics
            (
                RigidBody::Dynamic,
                Collider::circle(stats.radius),
                LockedAxes::ROTATION_LOCKED,
                LinearVelocity::default(),
                GravityScale(0.0),
                Friction::new(0.0),
                CollisionEventsEnabled,
                CollisionLayers::new(
                    GameLayer::Enemy,
                    [
                        GameLayer::Wall,
                        GameLayer::Anchor,
                        GameLayer::Hazard,
                        GameLayer::Player,
                        GameLayer::PlayerHitbox,
                    ],
                ),
            ),
        ))
        .id()
}
