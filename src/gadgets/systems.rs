//! Gadgets domain: fixed-step hook motion, contacts, and the tether line.

use avian2d::prelude::*;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::combat::{Enemy, HitEvent, Vitals};
use crate::content::GameplayTuning;
use crate::core::GameClock;
use crate::gadgets::gadget::GadgetSignal;
use crate::gadgets::grappler::{GrappleMode, Grappler, HookContact};
use crate::movement::{AvatarState, Facing, GameLayer, Loadout};
use crate::pickups::Pickup;
use crate::rooms::{AnchorWall, TileMap};

/// Entities the head overlapped last step, so each contact is reported once.
#[derive(Component, Debug, Default)]
pub struct HookContacts(pub Vec<Entity>);

/// Endpoints of the line between the owner and the hook head.
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct Tether {
    pub start: Vec2,
    pub end: Vec2,
}

/// Sprite drawn along a hook's tether.
#[derive(Component, Debug)]
pub struct TetherLine {
    pub hook: Entity,
}

const TETHER_WIDTH: f32 = 0.06;

/// Everything the hook's head reacts to.
fn hook_filter() -> SpatialQueryFilter {
    SpatialQueryFilter::from_mask([
        GameLayer::Wall,
        GameLayer::Anchor,
        GameLayer::Enemy,
        GameLayer::Item,
    ])
}

pub(crate) fn step_grapplers(
    mut commands: Commands,
    time: Res<Time>,
    clock: Res<GameClock>,
    tuning: Res<GameplayTuning>,
    tiles: Res<TileMap>,
    spatial_query: SpatialQuery,
    mut hits: MessageWriter<HitEvent>,
    mut hooks: Query<(
        Entity,
        &mut Grappler,
        &mut HookContacts,
        &mut Tether,
        &mut Transform,
        &mut Visibility,
    )>,
    mut owners: Query<
        (&mut AvatarState, &mut Vitals, &mut Facing, &mut Transform, &Loadout),
        Without<Grappler>,
    >,
    mut carried: Query<&mut Transform, (With<Pickup>, Without<Grappler>, Without<AvatarState>)>,
    anchors: Query<(), With<AnchorWall>>,
    pickups: Query<(), With<Pickup>>,
    enemies: Query<(), With<Enemy>>,
) {
    let dt = time.delta_secs();
    let now = clock.now();

    for (hook, mut grappler, mut contacts, mut tether, mut transform, mut visibility) in &mut hooks
    {
        if grappler.mode() == GrappleMode::Idle {
            *visibility = Visibility::Hidden;
            contacts.0.clear();
            continue;
        }

        let mut signals = grappler.fixed_step(dt, tiles.as_ref());

        if matches!(
            grappler.mode(),
            GrappleMode::Extending | GrappleMode::Retracting
        ) {
            let shape = Collider::circle(grappler.tuning().head_radius);
            let touching =
                spatial_query.shape_intersections(&shape, grappler.head(), 0.0, &hook_filter());

            for entity in touching.iter().copied() {
                if contacts.0.contains(&entity) {
                    continue;
                }
                let contact = if anchors.contains(entity) {
                    HookContact::Anchor
                } else if pickups.contains(entity) {
                    HookContact::Pickup(entity)
                } else if enemies.contains(entity) {
                    hits.write(HitEvent {
                        target: entity,
                        source: hook,
                    });
                    HookContact::Enemy
                } else {
                    HookContact::Scenery
                };
                signals.extend(grappler.on_contact(contact));
            }
            contacts.0 = touching;
        }

        if let Some(owner) = grappler.owner()
            && let Ok((mut state, mut vitals, mut facing, mut owner_transform, loadout)) =
                owners.get_mut(owner)
        {
            for signal in signals {
                match signal {
                    GadgetSignal::SeizeControl => {
                        state.take_control(hook);
                        commands
                            .entity(owner)
                            .insert((RigidBodyDisabled, ColliderDisabled));
                    }
                    GadgetSignal::MoveOwner(to) => {
                        owner_transform.translation.x = to.x;
                        owner_transform.translation.y = to.y;
                    }
                    GadgetSignal::HazardLanding { penalty } => {
                        let safe = state.reset_in_room(
                            &mut vitals,
                            &mut facing,
                            now,
                            penalty,
                            &tuning.avatar,
                        );
                        owner_transform.translation.x = safe.x;
                        owner_transform.translation.y = safe.y;
                    }
                    GadgetSignal::ReleaseControl => {
                        state.release_control();
                        commands
                            .entity(owner)
                            .remove::<(RigidBodyDisabled, ColliderDisabled)>();
                    }
                    GadgetSignal::Done => {
                        state.gadget_done(hook, loadout.current_gadget());
                    }
                }
            }
        }

        for item in grappler.carried() {
            if let Ok(mut item_transform) = carried.get_mut(*item) {
                item_transform.translation.x = grappler.head().x;
                item_transform.translation.y = grappler.head().y;
            }
        }

        transform.translation.x = grappler.head().x;
        transform.translation.y = grappler.head().y;
        transform.rotation = grappler.facing().rotation();
        *visibility = if grappler.mode() == GrappleMode::Idle {
            Visibility::Hidden
        } else {
            Visibility::Inherited
        };

        tether.start = grappler.origin();
        tether.end = transform.translation.truncate();
    }
}

/// Keep the tether's far end on the head once per rendered frame.
pub(crate) fn sync_tethers(mut hooks: Query<(&Grappler, &Transform, &mut Tether)>) {
    for (grappler, transform, mut tether) in &mut hooks {
        tether.start = grappler.origin();
        tether.end = transform.translation.truncate();
    }
}

/// Stretch each tether sprite between the owner and the head.
pub(crate) fn render_tethers(
    hooks: Query<(&Grappler, &Tether)>,
    mut lines: Query<
        (&TetherLine, &mut Sprite, &mut Transform, &mut Visibility),
        Without<Grappler>,
    >,
) {
    for (line, mut sprite, mut transform, mut visibility) in &mut lines {
        let Ok((grappler, tether)) = hooks.get(line.hook) else {
            continue;
        };
        if grappler.mode() == GrappleMode::Idle {
            *visibility = Visibility::Hidden;
            continue;
        }

        let span = tether.end - tether.start;
        let mid = (tether.start + tether.end) * 0.5;
        transform.translation = mid.extend(transform.translation.z);
        transform.rotation = Quat::from_rotation_z(span.to_angle());
        sprite.custom_size = Some(Vec2::new(span.length(), TETHER_WIDTH));
        *visibility = Visibility::Inherited;
    }
}
