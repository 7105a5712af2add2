//! Movement domain: components and physics layers for the avatar.

use avian2d::prelude::*;
use bevy::prelude::*;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Solid room walls
    Wall,
    /// Walls a grapple hook can latch onto
    Anchor,
    /// Lava and pits; block walking, not grappling
    Hazard,
    /// The avatar's body
    Player,
    /// Enemy bodies
    Enemy,
    /// Pickups
    Item,
    /// Player hitboxes (damage enemies)
    PlayerHitbox,
}

#[derive(Component, Debug)]
pub struct Avatar;

/// The avatar's sword hitbox, a child of the avatar.
#[derive(Component, Debug)]
pub struct Sword;

/// Keys and gadgets the avatar carries.
#[derive(Component, Debug, Clone)]
pub struct Loadout {
    pub keys: u32,
    grappler: Entity,
    current_gadget: Option<Entity>,
}

impl Loadout {
    pub fn new(grappler: Entity, equipped: bool) -> Self {
        Self {
            keys: 0,
            grappler,
            current_gadget: equipped.then_some(grappler),
        }
    }

    pub fn current_gadget(&self) -> Option<Entity> {
        self.current_gadget
    }

    pub fn equip_grappler(&mut self) {
        self.current_gadget = Some(self.grappler);
    }
}
