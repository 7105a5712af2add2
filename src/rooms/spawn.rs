//! Rooms domain: builds a level from its definition.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::combat::spawn_spiker;
use crate::content::{GameplayTuning, TileRect, to_vec2};
use crate::core::{GameClock, LevelScoped, LevelSequence};
use crate::gadgets::spawn_grappler;
use crate::movement::{GameLayer, Loadout, spawn_avatar};
use crate::pickups::spawn_pickup;
use crate::rooms::components::{AnchorWall, HazardTile, Wall};
use crate::rooms::grid::{ActiveRoom, RoomGrid, RoomQuery};
use crate::rooms::terrain::TileMap;

const WALL_COLOR: Color = Color::srgb(0.25, 0.25, 0.35);
const ANCHOR_COLOR: Color = Color::srgb(0.55, 0.45, 0.25);
const HAZARD_COLOR: Color = Color::srgb(0.85, 0.3, 0.1);
const FLOOR_COLOR: Color = Color::srgb(0.12, 0.13, 0.12);

pub(crate) fn spawn_level(
    mut commands: Commands,
    sequence: Res<LevelSequence>,
    tuning: Res<GameplayTuning>,
    clock: Res<GameClock>,
) {
    let Some(level) = sequence.current() else {
        warn!("No current level to spawn");
        return;
    };

    let grid = RoomGrid::new(
        tuning.rooms.clone(),
        IVec2::new(level.rooms.0, level.rooms.1),
    );
    let tiles = TileMap::from_hazards(&level.hazards);
    let start = to_vec2(level.avatar_start);

    info!(
        "Spawning level '{}' ({}x{} rooms, {} hazard tiles)",
        level.name,
        grid.rooms.x,
        grid.rooms.y,
        tiles.hazard_count()
    );

    // Floors
    for y in 0..grid.rooms.y {
        for x in 0..grid.rooms.x {
            let room = IVec2::new(x, y);
            let size = grid.layout.room_size();
            commands.spawn((
                LevelScoped,
                Sprite {
                    color: FLOOR_COLOR,
                    custom_size: Some(size),
                    ..default()
                },
                Transform::from_translation(grid.room_center(room).extend(-10.0)),
            ));

            for rect in grid.perimeter_walls(room) {
                spawn_block(&mut commands, &rect, false);
            }
        }
    }

    for wall in &level.walls {
        spawn_block(&mut commands, &wall.rect, wall.anchor);
    }

    let hazard_layers =
        CollisionLayers::new(GameLayer::Hazard, [GameLayer::Player, GameLayer::Enemy]);
    for rect in &level.hazards {
        commands.spawn((
            HazardTile,
            LevelScoped,
            Sprite {
                color: HAZARD_COLOR,
                custom_size: Some(rect.size()),
                ..default()
            },
            Transform::from_translation(rect.center().extend(-5.0)),
            RigidBody::Static,
            Collider::rectangle(rect.size().x, rect.size().y),
            hazard_layers,
        ));
    }

    for spiker in &level.spikers {
        spawn_spiker(&mut commands, spiker, &tuning.enemy);
    }

    let armed_at = clock.after(tuning.pickups.arm_delay);
    for pickup in &level.pickups {
        spawn_pickup(
            &mut commands,
            pickup.kind,
            to_vec2(pickup.position),
            armed_at,
            &tuning.pickups,
        );
    }

    let avatar = spawn_avatar(&mut commands, start, &tuning.avatar);
    let grappler = spawn_grappler(&mut commands, avatar, &tuning.grappler);
    commands
        .entity(avatar)
        .insert(Loadout::new(grappler, level.start_with_grappler));

    commands.insert_resource(ActiveRoom(grid.room_of(start)));
    commands.insert_resource(tiles);
    commands.insert_resource(grid);
}

fn spawn_block(commands: &mut Commands, rect: &TileRect, anchor: bool) {
    let size = rect.size();
    let mut block = commands.spawn((
        Wall,
        LevelScoped,
        Sprite {
            color: if anchor { ANCHOR_COLOR } else { WALL_COLOR },
            custom_size: Some(size),
            ..default()
        },
        Transform::from_translation(rect.center().extend(0.0)),
        RigidBody::Static,
        Collider::rectangle(size.x, size.y),
    ));

    if anchor {
        block.insert((
            AnchorWall,
            CollisionLayers::new(GameLayer::Anchor, [GameLayer::Player, GameLayer::Enemy]),
        ));
    } else {
        block.insert(CollisionLayers::new(
            GameLayer::Wall,
            [GameLayer::Player, GameLayer::Enemy],
        ));
    }
}
