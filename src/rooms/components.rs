//! Rooms domain: markers for level geometry.

use bevy::prelude::*;

/// Solid wall block.
#[derive(Component, Debug)]
pub struct Wall;

/// Wall block a grapple hook latches onto.
#[derive(Component, Debug)]
pub struct AnchorWall;

/// Tiles that block walking and punish a grapple landing.
#[derive(Component, Debug)]
pub struct HazardTile;
