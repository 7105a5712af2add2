//! Combat domain: contact routing, enemy damage, deaths, and enemy AI.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::combat::ai::spiker::Spiker;
use crate::combat::components::{DamageSource, DropTable, Enemy, Knockback, Team, Vitals};
use crate::combat::events::{DeathEvent, HitEvent};
use crate::combat::resolver::{Hit, HitResponse, resolve_hit};
use crate::content::GameplayTuning;
use crate::core::{GameClock, GameRng};
use crate::movement::{Avatar, Facing};
use crate::pickups::spawn_pickup;
use crate::rooms::{RoomGrid, RoomQuery};
use crate::sprites::Pose;

/// Turn physics contacts between damage sources and opposing actors into hits.
pub(crate) fn route_contact_hits(
    mut collision_events: MessageReader<CollisionStart>,
    mut hits: MessageWriter<HitEvent>,
    sources: Query<&DamageSource>,
    targets: Query<&Team, With<Vitals>>,
) {
    for event in collision_events.read() {
        let pairs = [
            (event.collider1, event.collider2),
            (event.collider2, event.collider1),
        ];

        for (target, source) in pairs {
            let Ok(team) = targets.get(target) else {
                continue;
            };
            let Ok(damage) = sources.get(source) else {
                continue;
            };
            if damage.team == *team {
                continue;
            }
            hits.write(HitEvent { target, source });
        }
    }
}

/// Resolve hits against enemies.
pub(crate) fn apply_enemy_hits(
    mut hits: MessageReader<HitEvent>,
    mut deaths: MessageWriter<DeathEvent>,
    clock: Res<GameClock>,
    tuning: Res<GameplayTuning>,
    sources: Query<(&DamageSource, &GlobalTransform)>,
    facings: Query<&Facing>,
    mut enemies: Query<
        (&mut Vitals, &mut Knockback, &mut LinearVelocity, &Transform),
        With<Enemy>,
    >,
) {
    let now = clock.now();
    let stats = &tuning.enemy;
    let response = HitResponse {
        invincible_duration: stats.invincible_duration,
        knockback_speed: stats.knockback_speed,
    };

    for event in hits.read() {
        let Ok((mut vitals, mut knockback, mut velocity, transform)) =
            enemies.get_mut(event.target)
        else {
            continue;
        };
        let Ok((source, source_transform)) = sources.get(event.source) else {
            continue;
        };

        let position = transform.translation.truncate();
        let hit = Hit {
            damage: source.damage,
            knockback: source.knockback,
            target: position,
            source: source_transform.translation().truncate(),
            mover_facing: source.owner.and_then(|owner| facings.get(owner).ok().copied()),
        };

        let Some(outcome) = resolve_hit(&mut vitals, &hit, now, &response) else {
            continue;
        };

        debug!(
            "Enemy {:?} hit for {} ({} left)",
            event.target,
            hit.damage,
            vitals.health()
        );

        if let Some(kb) = outcome.knockback {
            knockback.start(kb, now + stats.knockback_duration as f64);
            velocity.0 = kb;
        }

        if outcome.died {
            deaths.write(DeathEvent {
                entity: event.target,
                position,
            });
        }
    }
}

/// Drop loot and despawn dead enemies.
pub(crate) fn handle_enemy_deaths(
    mut commands: Commands,
    mut deaths: MessageReader<DeathEvent>,
    mut rng: ResMut<GameRng>,
    clock: Res<GameClock>,
    tuning: Res<GameplayTuning>,
    drops: Query<&DropTable>,
) {
    for death in deaths.read() {
        if let Ok(table) = drops.get(death.entity)
            && let Some(kind) = table.roll(&mut rng.0)
        {
            debug!("Enemy dropped {:?} at {:?}", kind, death.position);
            spawn_pickup(
                &mut commands,
                kind,
                death.position,
                clock.after(tuning.pickups.arm_delay),
                &tuning.pickups,
            );
        }

        commands.entity(death.entity).despawn();
        info!("Enemy {:?} defeated", death.entity);
    }
}

/// Drive every Spiker, or its knockback while one is running.
pub(crate) fn update_spikers(
    time: Res<Time>,
    clock: Res<GameClock>,
    tuning: Res<GameplayTuning>,
    grid: Res<RoomGrid>,
    mut rng: ResMut<GameRng>,
    avatar_query: Query<&Transform, (With<Avatar>, Without<Spiker>)>,
    mut spikers: Query<(
        &mut Spiker,
        &mut Transform,
        &mut LinearVelocity,
        &mut Facing,
        &mut Pose,
        &Knockback,
    )>,
) {
    let now = clock.now();
    let dt = time.delta_secs();
    let avatar = avatar_query.single().ok().map(|t| t.translation.truncate());

    for (mut spiker, mut transform, mut velocity, mut facing, mut pose, knockback) in &mut spikers {
        let position = transform.translation.truncate();
        let knocked_back = knockback.is_active(now);
        if knocked_back {
            velocity.0 = knockback.velocity;
        }

        let sighting = avatar.filter(|a| grid.room_of(*a) == grid.room_of(position));
        let Some(frame) = spiker.update(
            now,
            dt,
            position,
            sighting,
            knocked_back,
            &tuning.spiker,
            &mut rng.0,
        ) else {
            pose.rate = 0.0;
            continue;
        };

        if let Some(at) = frame.snap_to {
            transform.translation.x = at.x;
            transform.translation.y = at.y;
        }
        velocity.0 = frame.velocity;
        *facing = spiker.facing();
        pose.facing = *facing;
        pose.rate = frame.anim_rate;
    }
}
