//! Combat domain: combat-related events.

use bevy::ecs::message::Message;
use bevy::prelude::*;

/// A damage source touched something that can be hurt.
#[derive(Debug, Clone, Copy)]
pub struct HitEvent {
    pub target: Entity,
    pub source: Entity,
}

impl Message for HitEvent {}

/// An enemy's health reached zero.
#[derive(Debug, Clone, Copy)]
pub struct DeathEvent {
    pub entity: Entity,
    pub position: Vec2,
}

impl Message for DeathEvent {}
