//! Placeholder sprite coloring driven by pose and invincibility.

use bevy::color::Luminance;
use bevy::prelude::*;

use crate::combat::Vitals;
use crate::core::GameClock;
use crate::sprites::animation::{Pose, PoseClip};

const HURT_COLOR: Color = Color::srgb(0.95, 0.15, 0.15);

/// Base color of an actor's sprite.
#[derive(Component, Debug, Clone, Copy)]
pub struct Tint {
    pub base: Color,
}

impl Tint {
    pub fn new(base: Color) -> Self {
        Self { base }
    }

    /// Color to draw with. Invincible actors flash red.
    pub fn resolve(&self, pose: Option<&Pose>, invincible: bool) -> Color {
        if invincible {
            return HURT_COLOR;
        }

        let Some(pose) = pose else {
            return self.base;
        };
        match pose.clip {
            PoseClip::Attack => self.base.lighter(0.15),
            PoseClip::Walk if pose.frame() % 2 == 1 => self.base.darker(0.08),
            PoseClip::Walk => self.base,
        }
    }
}

pub(crate) fn apply_tints(
    clock: Res<GameClock>,
    mut sprites: Query<(&Tint, &mut Sprite, Option<&Pose>, Option<&Vitals>)>,
) {
    let now = clock.now();
    for (tint, mut sprite, pose, vitals) in &mut sprites {
        let invincible = vitals.is_some_and(|v| v.is_invincible(now));
        let color = tint.resolve(pose, invincible);
        if sprite.color != color {
            sprite.color = color;
        }
    }
}
