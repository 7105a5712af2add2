//! Pickups domain: collection.

use avian2d::prelude::*;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::combat::Vitals;
use crate::content::GameplayTuning;
use crate::core::{GameClock, SceneRequest};
use crate::movement::{Avatar, AvatarState, Loadout};
use crate::pickups::components::{Pickup, PickupKind, PickupTuning};

/// Result of touching a pickup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickupOutcome {
    /// Applied; remove the pickup.
    Consumed,
    /// Applied; remove the pickup and move on to the next level.
    LevelComplete,
    /// Nothing happened; leave the pickup where it is.
    Rejected,
}

/// Apply a pickup's effect to the avatar.
pub fn apply_pickup(
    kind: PickupKind,
    vitals: &mut Vitals,
    loadout: &mut Loadout,
    tuning: &PickupTuning,
) -> PickupOutcome {
    match kind {
        PickupKind::Unassigned => {
            error!("Touched a pickup with no kind assigned");
            PickupOutcome::Rejected
        }
        PickupKind::Key => {
            loadout.keys += 1;
            PickupOutcome::Consumed
        }
        PickupKind::Health => {
            vitals.heal(tuning.heal_amount);
            PickupOutcome::Consumed
        }
        PickupKind::Grappler => {
            loadout.equip_grappler();
            PickupOutcome::Consumed
        }
        PickupKind::Flag => PickupOutcome::LevelComplete,
    }
}

/// Collect armed pickups the avatar is overlapping.
pub(crate) fn collect_pickups(
    mut commands: Commands,
    clock: Res<GameClock>,
    tuning: Res<GameplayTuning>,
    mut requests: MessageWriter<SceneRequest>,
    mut avatars: Query<(Entity, &AvatarState, &mut Vitals, &mut Loadout), With<Avatar>>,
    pickups: Query<(Entity, &Pickup, &CollidingEntities)>,
) {
    let Ok((avatar, state, mut vitals, mut loadout)) = avatars.single_mut() else {
        return;
    };
    if state.is_controlled() {
        return;
    }

    let now = clock.now();
    for (entity, pickup, touching) in &pickups {
        if !touching.contains(&avatar) || !pickup.is_armed(now) {
            continue;
        }

        let outcome = apply_pickup(pickup.kind, &mut vitals, &mut loadout, &tuning.pickups);
        match outcome {
            PickupOutcome::Rejected => continue,
            PickupOutcome::Consumed => {
                debug!("Collected {:?}", pickup.kind);
            }
            PickupOutcome::LevelComplete => {
                info!("Level flag reached");
                requests.write(SceneRequest::NextLevel);
            }
        }
        commands.entity(entity).despawn();
    }
}
