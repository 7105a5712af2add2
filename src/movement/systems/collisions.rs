//! Movement domain: damage taken by the avatar.

use avian2d::prelude::*;
use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::combat::{DamageSource, Hit, HitEvent, Vitals};
use crate::content::GameplayTuning;
use crate::core::GameClock;
use crate::gadgets::{Gadget, Grappler};
use crate::movement::avatar::AvatarState;
use crate::movement::{Avatar, Facing, Loadout};

pub(crate) fn apply_avatar_hits(
    mut hits: MessageReader<HitEvent>,
    clock: Res<GameClock>,
    tuning: Res<GameplayTuning>,
    sources: Query<(&DamageSource, &GlobalTransform)>,
    facings: Query<&Facing>,
    mut avatars: Query<
        (
            &mut AvatarState,
            &mut Vitals,
            &mut LinearVelocity,
            &Transform,
            Option<&Loadout>,
        ),
        With<Avatar>,
    >,
    mut gadgets: Query<&mut Grappler>,
) {
    for event in hits.read() {
        let Ok((mut state, mut vitals, mut velocity, transform, loadout)) =
            avatars.get_mut(event.target)
        else {
            continue;
        };
        let Ok((source, source_transform)) = sources.get(event.source) else {
            continue;
        };

        let hit = Hit {
            damage: source.damage,
            knockback: source.knockback,
            target: transform.translation.truncate(),
            source: source_transform.translation().truncate(),
            mover_facing: source.owner.and_then(|owner| facings.get(owner).ok().copied()),
        };

        let mut gadget = loadout
            .and_then(Loadout::current_gadget)
            .and_then(|g| gadgets.get_mut(g).ok());
        if let Some(knockback) = state.on_hit(
            &mut vitals,
            &hit,
            clock.now(),
            &tuning.avatar,
            gadget.as_deref_mut().map(|g| g as &mut dyn Gadget),
        ) {
            velocity.0 = knockback;
        }
    }
}
