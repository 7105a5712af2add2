//! Movement domain: avatar mode updates, doors, and the sword.

use avian2d::prelude::*;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::combat::Vitals;
use crate::content::GameplayTuning;
use crate::core::{GameClock, SceneRequest};
use crate::gadgets::{Gadget, Grappler};
use crate::movement::avatar::{AvatarContext, AvatarMode, AvatarState, PoseUpdate};
use crate::movement::{ActionInput, Avatar, Facing, Loadout, Sword};
use crate::rooms::{ActiveRoom, RoomGrid};
use crate::sprites::Pose;

pub(crate) fn drive_avatar(
    clock: Res<GameClock>,
    input: Res<ActionInput>,
    tuning: Res<GameplayTuning>,
    mut requests: MessageWriter<SceneRequest>,
    mut avatars: Query<
        (
            Entity,
            &mut AvatarState,
            &mut Facing,
            &mut Transform,
            &mut LinearVelocity,
            &mut Pose,
            &Vitals,
            Option<&Loadout>,
        ),
        With<Avatar>,
    >,
    mut gadgets: Query<&mut Grappler, Without<Avatar>>,
) {
    for (entity, mut state, mut facing, mut transform, mut velocity, mut pose, vitals, loadout) in
        &mut avatars
    {
        let ctx = AvatarContext {
            now: clock.now(),
            owner: entity,
            position: transform.translation.truncate(),
            health: vitals.health(),
            input: &input,
            tuning: &tuning.avatar,
        };

        let mut gadget = loadout
            .and_then(Loadout::current_gadget)
            .and_then(|g| gadgets.get_mut(g).ok());
        let frame = state.update(
            &ctx,
            &mut facing,
            gadget.as_deref_mut().map(|g| g as &mut dyn Gadget),
        );

        if let Some(v) = frame.velocity {
            velocity.0 = v;
        }
        if let Some(at) = frame.hold_at {
            transform.translation.x = at.x;
            transform.translation.y = at.y;
        }
        match frame.pose {
            Some(PoseUpdate::Freeze) => pose.rate = 0.0,
            Some(PoseUpdate::Play { clip, rate }) => {
                pose.clip = clip;
                pose.rate = rate;
            }
            None => {}
        }
        pose.facing = *facing;

        if frame.request_game_over {
            info!("Avatar has fallen");
            requests.write(SceneRequest::GameOver);
        }
    }
}

pub(crate) fn check_room_transitions(
    clock: Res<GameClock>,
    tuning: Res<GameplayTuning>,
    grid: Res<RoomGrid>,
    mut active: ResMut<ActiveRoom>,
    mut avatars: Query<
        (&mut AvatarState, &Facing, &mut Transform, &mut LinearVelocity),
        With<Avatar>,
    >,
) {
    for (mut state, facing, mut transform, mut velocity) in &mut avatars {
        let position = transform.translation.truncate();
        let Some(transition) = state.check_room_transition(
            grid.as_ref(),
            position,
            *facing,
            clock.now(),
            &tuning.avatar,
        ) else {
            continue;
        };

        transform.translation.x = transition.position.x;
        transform.translation.y = transition.position.y;
        velocity.0 = Vec2::ZERO;
        if active.0 != transition.room {
            active.0 = transition.room;
        }
        info!("Avatar entered room {:?}", transition.room);
    }
}

/// Show the sword, pointing along the avatar's facing, only while attacking.
pub(crate) fn sync_sword(
    mut commands: Commands,
    tuning: Res<GameplayTuning>,
    avatars: Query<(&AvatarState, &Facing), With<Avatar>>,
    mut swords: Query<
        (Entity, &ChildOf, &mut Transform, &mut Visibility, Has<ColliderDisabled>),
        With<Sword>,
    >,
) {
    let reach = tuning.avatar.radius * 2.0;

    for (sword, child_of, mut transform, mut visibility, disabled) in &mut swords {
        let Ok((state, facing)) = avatars.get(child_of.parent()) else {
            continue;
        };

        let active = state.mode() == AvatarMode::Attack;
        transform.translation = (facing.unit() * reach).extend(0.5);
        transform.rotation = facing.rotation();

        if active && disabled {
            commands.entity(sword).remove::<ColliderDisabled>();
            *visibility = Visibility::Inherited;
        } else if !active && !disabled {
            commands.entity(sword).insert(ColliderDisabled);
            *visibility = Visibility::Hidden;
        }
    }
}
