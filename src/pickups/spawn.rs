//! Pickups domain: spawn helper shared by level setup and enemy drops.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::core::LevelScoped;
use crate::movement::GameLayer;
use crate::pickups::components::{Pickup, PickupKind, PickupTuning};

pub fn spawn_pickup(
    commands: &mut Commands,
    kind: PickupKind,
    position: Vec2,
    armed_at: f64,
    tuning: &PickupTuning,
) -> Entity {
    let entity = commands
        .spawn((
            Pickup::new(kind, armed_at),
            LevelScoped,
            Sprite {
                color: kind.color(),
                custom_size: Some(Vec2::splat(tuning.size)),
                ..default()
            },
            Transform::from_translation(position.extend(0.5)),
            // The grapple hook drags pickups around by their transform.
            RigidBody::Kinematic,
            Collider::rectangle(tuning.size, tuning.size),
            Sensor,
            CollidingEntities::default(),
            CollisionLayers::new(GameLayer::Item, [GameLayer::Player]),
        ))
        .id();
    debug!("Spawned {:?} pickup at {:?}", kind, position);
    entity
}
