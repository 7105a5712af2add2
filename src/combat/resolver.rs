//! Combat domain: the damage and knockback rules shared by every actor.

use bevy::prelude::*;

use crate::combat::components::Vitals;
use crate::movement::Facing;

/// One contact with a damage source, as seen by the target.
#[derive(Debug, Clone, Copy)]
pub struct Hit {
    pub damage: i32,
    pub knockback: bool,
    pub target: Vec2,
    pub source: Vec2,
    /// Facing of the mover holding the source, if it has one.
    pub mover_facing: Option<Facing>,
}

/// How the target responds to being hit.
#[derive(Debug, Clone, Copy)]
pub struct HitResponse {
    pub invincible_duration: f32,
    pub knockback_speed: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitOutcome {
    pub died: bool,
    pub knockback: Option<Vec2>,
}

/// Cardinal unit vector a hit pushes its target along.
///
/// A mover's facing wins. Otherwise the larger component of
/// `target - source` picks the axis, with ties going horizontal.
pub fn knockback_axis(target: Vec2, source: Vec2, mover_facing: Option<Facing>) -> Vec2 {
    if let Some(facing) = mover_facing {
        return facing.unit();
    }

    let delta = target - source;
    let sign = |v: f32| if v > 0.0 { 1.0 } else { -1.0 };
    if delta.x.abs() >= delta.y.abs() {
        Vec2::new(sign(delta.x), 0.0)
    } else {
        Vec2::new(0.0, sign(delta.y))
    }
}

/// Apply a hit. Returns `None` when the target is invincible and nothing
/// happened.
pub fn resolve_hit(
    vitals: &mut Vitals,
    hit: &Hit,
    now: f64,
    response: &HitResponse,
) -> Option<HitOutcome> {
    if vitals.is_invincible(now) {
        return None;
    }

    let died = vitals.apply_damage(hit.damage);
    vitals.grant_invincibility(now + response.invincible_duration as f64);

    let knockback = hit.knockback.then(|| {
        knockback_axis(hit.target, hit.source, hit.mover_facing) * response.knockback_speed
    });

    Some(HitOutcome { died, knockback })
}
