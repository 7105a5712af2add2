//! Combat domain: health, knockback, and damage-source components.

use bevy::prelude::*;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::pickups::PickupKind;

/// Health plus the invincibility window that follows a hit.
#[derive(Component, Debug, Clone)]
pub struct Vitals {
    health: i32,
    max_health: i32,
    invincible_until: f64,
}

impl Vitals {
    pub fn new(max_health: i32) -> Self {
        let max_health = max_health.max(1);
        Self {
            health: max_health,
            max_health,
            invincible_until: f64::NEG_INFINITY,
        }
    }

    pub fn health(&self) -> i32 {
        self.health
    }

    pub fn max_health(&self) -> i32 {
        self.max_health
    }

    pub fn percent(&self) -> f32 {
        self.health as f32 / self.max_health as f32
    }

    pub fn is_dead(&self) -> bool {
        self.health <= 0
    }

    pub fn is_invincible(&self, now: f64) -> bool {
        now < self.invincible_until
    }

    pub fn invincible_until(&self) -> f64 {
        self.invincible_until
    }

    /// Subtract `amount`, never going below zero. Returns true if this hit
    /// brought health to zero.
    pub fn apply_damage(&mut self, amount: i32) -> bool {
        let was_alive = !self.is_dead();
        self.health = (self.health - amount.max(0)).clamp(0, self.max_health);
        was_alive && self.is_dead()
    }

    pub fn heal(&mut self, amount: i32) {
        self.health = (self.health + amount.max(0)).min(self.max_health);
    }

    pub fn grant_invincibility(&mut self, until: f64) {
        self.invincible_until = self.invincible_until.max(until);
    }
}

/// Knockback currently applied to an enemy. Suspends its AI until `until`.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Knockback {
    pub velocity: Vec2,
    pub until: f64,
}

impl Knockback {
    pub fn is_active(&self, now: f64) -> bool {
        now < self.until
    }

    pub fn start(&mut self, velocity: Vec2, until: f64) {
        self.velocity = velocity;
        self.until = until;
    }
}

#[derive(Component, Debug)]
pub struct Enemy;

#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Team {
    Player,
    Enemy,
}

/// Anything that hurts on contact.
#[derive(Component, Debug, Clone, Copy)]
pub struct DamageSource {
    pub damage: i32,
    pub knockback: bool,
    pub team: Team,
    /// Entity whose facing steers the knockback, when the source is held by
    /// a mover (a sword or hook). `None` means knockback follows positions.
    pub owner: Option<Entity>,
}

/// Base enemy stats.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct EnemyStats {
    pub max_health: i32,
    pub knockback_speed: f32,
    pub knockback_duration: f32,
    pub invincible_duration: f32,
    pub contact_damage: i32,
    pub radius: f32,
}

impl Default for EnemyStats {
    fn default() -> Self {
        Self {
            max_health: 1,
            knockback_speed: 10.0,
            knockback_duration: 0.25,
            invincible_duration: 0.5,
            contact_damage: 1,
            radius: 0.4,
        }
    }
}

/// What an enemy leaves behind.
#[derive(Component, Debug, Clone, Default)]
pub struct DropTable {
    pub guaranteed: Option<PickupKind>,
    /// Sampled uniformly; `None` entries drop nothing.
    pub random: Vec<Option<PickupKind>>,
}

impl DropTable {
    pub fn roll(&self, rng: &mut impl Rng) -> Option<PickupKind> {
        if self.guaranteed.is_some() {
            return self.guaranteed;
        }
        if self.random.is_empty() {
            return None;
        }
        self.random[rng.random_range(0..self.random.len())]
    }
}
