//! Rooms domain: tests for room coordinates, doors, and terrain.

use bevy::prelude::*;

use super::{RoomGrid, RoomLayout, RoomQuery, TerrainQuery, TileMap};
use crate::content::TileRect;
use crate::movement::Facing;

fn grid(x: i32, y: i32) -> RoomGrid {
    RoomGrid::new(RoomLayout::default(), IVec2::new(x, y))
}

// -----------------------------------------------------------------------------
// Coordinate tests
// -----------------------------------------------------------------------------

#[test]
fn test_room_of_and_local_position() {
    let grid = grid(3, 2);
    let world = Vec2::new(20.5, 13.0);
    assert_eq!(grid.room_of(world), IVec2::new(1, 1));
    assert_eq!(grid.pos_in_room(world), Vec2::new(4.5, 2.0));
    assert_eq!(grid.world_from(IVec2::new(1, 1), Vec2::new(4.5, 2.0)), world);
}

#[test]
fn test_room_center() {
    let grid = grid(2, 1);
    assert_eq!(grid.room_center(IVec2::new(1, 0)), Vec2::new(24.0, 5.5));
}

#[test]
fn test_contains_respects_bounds() {
    let grid = grid(2, 2);
    assert!(grid.contains(IVec2::new(0, 0)));
    assert!(grid.contains(IVec2::new(1, 1)));
    assert!(!grid.contains(IVec2::new(2, 0)));
    assert!(!grid.contains(IVec2::new(0, -1)));
}

#[test]
fn test_neighbor_out_of_bounds_is_none() {
    let grid = grid(2, 1);
    assert_eq!(
        grid.neighbor(IVec2::ZERO, Facing::Right),
        Some(IVec2::new(1, 0))
    );
    assert_eq!(grid.neighbor(IVec2::ZERO, Facing::Left), None);
    assert_eq!(grid.neighbor(IVec2::ZERO, Facing::Up), None);
}

// -----------------------------------------------------------------------------
// Door tests
// -----------------------------------------------------------------------------

#[test]
fn test_door_at_matches_quarter_cells_exactly() {
    let grid = grid(2, 1);
    assert_eq!(grid.door_at(Vec2::new(15.0, 5.5)), Some(Facing::Right));
    // Rounds into the same quarter cell.
    assert_eq!(grid.door_at(Vec2::new(15.1, 5.4)), Some(Facing::Right));
    // One quarter cell away is no longer a door.
    assert_eq!(grid.door_at(Vec2::new(15.25, 5.5)), None);
    assert_eq!(grid.door_at(Vec2::new(16.0 + 8.0, 10.0)), Some(Facing::Up));
    assert_eq!(grid.door_at(Vec2::new(1.0, 5.5)), Some(Facing::Left));
    assert_eq!(grid.door_at(Vec2::new(8.0, 1.0)), Some(Facing::Down));
    assert_eq!(grid.door_at(Vec2::new(8.0, 5.5)), None);
}

#[test]
fn test_every_door_maps_to_its_opposite() {
    let layout = RoomLayout::default();
    for door in Facing::ALL {
        let anchor = layout.door_anchor(door);
        let entry = layout.door_anchor(door.opposite());
        assert_ne!(anchor, entry);
        assert_eq!(door.opposite().opposite(), door);
    }
}

// -----------------------------------------------------------------------------
// Perimeter tests
// -----------------------------------------------------------------------------

fn covers(rects: &[TileRect], tile: IVec2) -> bool {
    rects.iter().any(|rect| rect.tiles().any(|t| t == tile))
}

#[test]
fn test_closed_room_has_no_gaps() {
    let grid = grid(1, 1);
    let rects = grid.perimeter_walls(IVec2::ZERO);
    for x in 0..16 {
        assert!(covers(&rects, IVec2::new(x, 0)));
        assert!(covers(&rects, IVec2::new(x, 10)));
    }
    for y in 0..11 {
        assert!(covers(&rects, IVec2::new(0, y)));
        assert!(covers(&rects, IVec2::new(15, y)));
    }
}

#[test]
fn test_doors_open_towards_neighbours_only() {
    let grid = grid(2, 1);
    let left = grid.perimeter_walls(IVec2::ZERO);
    assert!(!covers(&left, IVec2::new(15, 5)));
    assert!(covers(&left, IVec2::new(0, 5)));
    assert!(covers(&left, IVec2::new(7, 10)));

    let right = grid.perimeter_walls(IVec2::new(1, 0));
    assert!(!covers(&right, IVec2::new(16, 5)));
    assert!(covers(&right, IVec2::new(31, 5)));
}

#[test]
fn test_vertical_door_gap_is_two_tiles_wide() {
    let grid = grid(1, 2);
    let bottom = grid.perimeter_walls(IVec2::ZERO);
    assert!(covers(&bottom, IVec2::new(6, 10)));
    assert!(!covers(&bottom, IVec2::new(7, 10)));
    assert!(!covers(&bottom, IVec2::new(8, 10)));
    assert!(covers(&bottom, IVec2::new(9, 10)));
}

// -----------------------------------------------------------------------------
// Terrain tests
// -----------------------------------------------------------------------------

#[test]
fn test_hazard_lookup_floors_positions() {
    let rects = [TileRect {
        min: (20, 1),
        max: (22, 9),
    }];
    let tiles = TileMap::from_hazards(&rects);
    assert_eq!(tiles.hazard_count(), 27);
    assert!(tiles.is_hazardous(Vec2::new(20.0, 1.0)));
    assert!(tiles.is_hazardous(Vec2::new(22.99, 9.99)));
    assert!(!tiles.is_hazardous(Vec2::new(23.0, 5.0)));
    assert!(!tiles.is_hazardous(Vec2::new(19.99, 5.0)));
}
