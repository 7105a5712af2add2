//! Movement domain: tuning and input resources.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::movement::Facing;

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AvatarTuning {
    pub move_speed: f32,
    pub dodge_speed: f32,
    pub attack_duration: f32,
    /// Minimum time between the starts of two attacks.
    pub attack_delay: f32,
    pub dodge_duration: f32,
    pub room_transition_delay: f32,
    pub max_health: i32,
    pub knockback_speed: f32,
    pub knockback_duration: f32,
    pub invincible_duration: f32,
    pub sword_damage: i32,
    pub radius: f32,
}

impl Default for AvatarTuning {
    fn default() -> Self {
        Self {
            move_speed: 5.0,
            dodge_speed: 20.0,
            attack_duration: 0.25,
            attack_delay: 0.5,
            dodge_duration: 0.2,
            room_transition_delay: 0.5,
            max_health: 10,
            knockback_speed: 10.0,
            knockback_duration: 0.25,
            invincible_duration: 0.5,
            sword_damage: 1,
            radius: 0.4,
        }
    }
}

/// Keyboard layout. Movement keys are scanned in order; index `i` moves
/// along `Facing::from_index(i)`.
#[derive(Resource, Debug, Clone)]
pub struct KeyBindings {
    pub movement: [KeyCode; 8],
    pub attack: KeyCode,
    pub gadget: KeyCode,
    pub dodge: KeyCode,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            movement: [
                KeyCode::ArrowRight,
                KeyCode::ArrowUp,
                KeyCode::ArrowLeft,
                KeyCode::ArrowDown,
                KeyCode::KeyD,
                KeyCode::KeyW,
                KeyCode::KeyA,
                KeyCode::KeyS,
            ],
            attack: KeyCode::KeyZ,
            gadget: KeyCode::KeyX,
            dodge: KeyCode::Space,
        }
    }
}

/// Input snapshot for one frame.
#[derive(Resource, Debug, Clone, Default)]
pub struct ActionInput {
    /// Held state of each movement binding.
    pub held: [bool; 8],
    /// Movement bindings pressed this frame.
    pub pressed: [bool; 8],
    pub attack: bool,
    pub gadget: bool,
    pub dodge: bool,
}

impl ActionInput {
    /// Direction of the last held binding, arrows first then WASD.
    pub fn held_direction(&self) -> Option<Facing> {
        self.held
            .iter()
            .rposition(|held| *held)
            .map(Facing::from_index)
    }

    pub fn pressed_direction(&self) -> Option<Facing> {
        self.pressed
            .iter()
            .rposition(|pressed| *pressed)
            .map(Facing::from_index)
    }

    pub fn hold(mut self, facing: Facing) -> Self {
        self.held[facing.index()] = true;
        self
    }

    pub fn press(mut self, facing: Facing) -> Self {
        self.pressed[facing.index()] = true;
        self
    }
}
