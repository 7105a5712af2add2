//! Rooms domain: room grid layout and the world/room coordinate transform.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::content::TileRect;
use crate::movement::Facing;

/// Shape shared by every room of a level.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RoomLayout {
    /// Tiles per room along x and y.
    pub room_tiles: (i32, i32),
    /// Room-local door anchors, indexed by `Facing`.
    pub doors: [(f32, f32); 4],
    /// Cell size used when matching positions against door anchors.
    pub grid_mult: f32,
}

impl Default for RoomLayout {
    fn default() -> Self {
        Self {
            room_tiles: (16, 11),
            doors: [(15.0, 5.5), (8.0, 10.0), (1.0, 5.5), (8.0, 1.0)],
            grid_mult: 0.25,
        }
    }
}

impl RoomLayout {
    pub fn room_size(&self) -> Vec2 {
        Vec2::new(self.room_tiles.0 as f32, self.room_tiles.1 as f32)
    }

    pub fn door_anchor(&self, door: Facing) -> Vec2 {
        let (x, y) = self.doors[door.index()];
        Vec2::new(x, y)
    }

    /// Snap a room-local position to integer grid cells.
    pub fn grid_cell(&self, pos_in_room: Vec2) -> IVec2 {
        (pos_in_room / self.grid_mult).round().as_ivec2()
    }
}

/// Room coordinate queries consumed by room-aware actors.
pub trait RoomQuery {
    fn layout(&self) -> &RoomLayout;

    /// Whether `room` lies inside the map.
    fn contains(&self, room: IVec2) -> bool;

    fn room_of(&self, world: Vec2) -> IVec2 {
        (world / self.layout().room_size()).floor().as_ivec2()
    }

    fn pos_in_room(&self, world: Vec2) -> Vec2 {
        world - self.room_origin(self.room_of(world))
    }

    fn room_origin(&self, room: IVec2) -> Vec2 {
        room.as_vec2() * self.layout().room_size()
    }

    fn world_from(&self, room: IVec2, pos_in_room: Vec2) -> Vec2 {
        self.room_origin(room) + pos_in_room
    }

    fn room_center(&self, room: IVec2) -> Vec2 {
        self.world_from(room, self.layout().room_size() * 0.5)
    }

    /// Position rounded to the quarter grid, in grid units.
    fn grid_cell(&self, world: Vec2) -> IVec2 {
        self.layout().grid_cell(self.pos_in_room(world))
    }

    /// The door whose anchor shares `world`'s grid cell, if any.
    fn door_at(&self, world: Vec2) -> Option<Facing> {
        let layout = self.layout();
        let cell = self.grid_cell(world);
        Facing::ALL
            .into_iter()
            .find(|door| layout.grid_cell(layout.door_anchor(*door)) == cell)
    }

    fn neighbor(&self, room: IVec2, door: Facing) -> Option<IVec2> {
        let next = room + door.grid_step();
        self.contains(next).then_some(next)
    }
}

/// The room grid of the loaded level.
#[derive(Resource, Debug, Clone, Default)]
pub struct RoomGrid {
    pub layout: RoomLayout,
    /// Room count along x and y.
    pub rooms: IVec2,
}

impl RoomGrid {
    pub fn new(layout: RoomLayout, rooms: IVec2) -> Self {
        Self { layout, rooms }
    }

    /// Wall tiles around `room`, leaving a gap at every door that leads
    /// to a neighbouring room.
    pub fn perimeter_walls(&self, room: IVec2) -> Vec<TileRect> {
        let (w, h) = self.layout.room_tiles;
        let origin = room * IVec2::new(w, h);
        let mut rects = Vec::new();

        for door in Facing::ALL {
            let open = self.neighbor(room, door).is_some();
            let anchor = self.layout.door_anchor(door);
            match door {
                Facing::Right | Facing::Left => {
                    let x = if door == Facing::Right { w - 1 } else { 0 };
                    let gap = anchor.y.floor() as i32;
                    push_split(&mut rects, open, (1, h - 2), (gap, gap), |a, b| {
                        ((x, a), (x, b))
                    });
                }
                Facing::Up | Facing::Down => {
                    let y = if door == Facing::Up { h - 1 } else { 0 };
                    let mid = anchor.x.round() as i32;
                    push_split(&mut rects, open, (0, w - 1), (mid - 1, mid), |a, b| {
                        ((a, y), (b, y))
                    });
                }
            }
        }

        rects
            .into_iter()
            .map(|(min, max)| TileRect {
                min: (origin.x + min.0, origin.y + min.1),
                max: (origin.x + max.0, origin.y + max.1),
            })
            .collect()
    }
}

type Span = ((i32, i32), (i32, i32));

fn push_split(
    rects: &mut Vec<Span>,
    open: bool,
    (start, end): (i32, i32),
    (gap_start, gap_end): (i32, i32),
    make: impl Fn(i32, i32) -> Span,
) {
    if !open {
        rects.push(make(start, end));
        return;
    }
    if gap_start > start {
        rects.push(make(start, gap_start - 1));
    }
    if gap_end < end {
        rects.push(make(gap_end + 1, end));
    }
}

impl RoomQuery for RoomGrid {
    fn layout(&self) -> &RoomLayout {
        &self.layout
    }

    fn contains(&self, room: IVec2) -> bool {
        room.x >= 0 && room.y >= 0 && room.x < self.rooms.x && room.y < self.rooms.y
    }
}

/// Room the avatar currently occupies; the camera frames this room.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActiveRoom(pub IVec2);
