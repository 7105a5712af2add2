//! Movement domain: avatar spawn.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::combat::{DamageSource, Team, Vitals};
use crate::core::LevelScoped;
use crate::movement::avatar::AvatarState;
use crate::movement::components::{Avatar, GameLayer, Sword};
use crate::movement::resources::AvatarTuning;
use crate::movement::Facing;
use crate::sprites::{Pose, PoseClip, Tint};

const AVATAR_COLOR: Color = Color::srgb(0.35, 0.75, 0.4);
const SWORD_COLOR: Color = Color::srgb(0.85, 0.85, 0.9);

/// Spawn the avatar at full health, idle and facing up. The caller adds the
/// `Loadout` once its gadgets exist.
pub fn spawn_avatar(commands: &mut Commands, position: Vec2, tuning: &AvatarTuning) -> Entity {
    let facing = Facing::Up;
    let avatar = commands
        .spawn((
            (
                Avatar,
                AvatarState::new(position, facing),
                Vitals::new(tuning.max_health),
                Team::Player,
                facing,
                LevelScoped,
            ),
            // Rendering
            (
                Sprite {
                    color: AVATAR_COLOR,
                    custom_size: Some(Vec2::splat(tuning.radius * 2.0)),
                    ..default()
                },
                Tint::new(AVATAR_COLOR),
                Pose::new("avatar", PoseClip::Walk, facing),
                Transform::from_translation(position.extend(1.0)),
            ),
            // Physics
            (
                RigidBody::Dynamic,
                Collider::circle(tuning.radius),
                LockedAxes::ROTATION_LOCKED,
                LinearVelocity::default(),
                GravityScale(0.0),
                Friction::new(0.0),
                CollisionEventsEnabled,
                CollisionLayers::new(
                    GameLayer::Player,
                    [
                        GameLayer::Wall,
                        GameLayer::Anchor,
                        GameLayer::Hazard,
                        GameLayer::Enemy,
                        GameLayer::Item,
                    ],
                ),
            ),
        ))
        .id();

    let reach = tuning.radius * 2.0;
    commands.entity(avatar).with_children(|parent| {
        parent.spawn((
            Sword,
            DamageSource {
                damage: tuning.sword_damage,
                knockback: true,
                team: Team::Player,
                owner: Some(avatar),
            },
            Sprite {
                color: SWORD_COLOR,
                custom_size: Some(Vec2::new(reach, reach * 0.3)),
                ..default()
            },
            Transform::from_translation((facing.unit() * reach).extend(0.5))
                .with_rotation(facing.rotation()),
            Visibility::Hidden,
            Collider::rectangle(reach, reach * 0.3),
            Sensor,
            ColliderDisabled,
            CollisionEventsEnabled,
            CollisionLayers::new(GameLayer::PlayerHitbox, [GameLayer::Enemy]),
        ));
    });

    info!("Avatar spawned at {:?}", position);
    avatar
}
