//! Combat domain: the Spiker's search, lunge, and retract behaviour.

use bevy::prelude::*;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::movement::Facing;

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SpikerTuning {
    /// The avatar must be closer than this to trigger a lunge.
    pub sensor_range: f32,
    pub wander_speed: f32,
    pub attack_speed: f32,
    pub retract_speed: f32,
    pub think_min: f32,
    pub think_max: f32,
    pub attack_timeout: f32,
    pub arrive_epsilon: f32,
    pub attack_anim_rate: f32,
    pub retract_anim_rate: f32,
}

impl Default for SpikerTuning {
    fn default() -> Self {
        Self {
            sensor_range: 1.0,
            wander_speed: 2.0,
            attack_speed: 10.0,
            retract_speed: 15.0,
            think_min: 1.0,
            think_max: 4.0,
            attack_timeout: 1.5,
            arrive_epsilon: 0.1,
            attack_anim_rate: 3.0,
            retract_anim_rate: 2.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpikerMode {
    #[default]
    Search,
    Attack,
    Retract,
}

/// What the Spiker wants this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpikerFrame {
    pub velocity: Vec2,
    pub anim_rate: f32,
    /// Exact position to teleport to on arrival.
    pub snap_to: Option<Vec2>,
}

impl SpikerFrame {
    fn moving(velocity: Vec2, anim_rate: f32) -> Self {
        Self {
            velocity,
            anim_rate,
            snap_to: None,
        }
    }

    fn arrived(at: Vec2) -> Self {
        Self {
            velocity: Vec2::ZERO,
            anim_rate: 1.0,
            snap_to: Some(at),
        }
    }
}

#[derive(Component, Debug, Clone, Default)]
pub struct Spiker {
    mode: SpikerMode,
    /// `None` means standing still.
    wander: Option<Facing>,
    next_decision_at: f64,
    home: Vec2,
    target: Vec2,
    attack_started_at: f64,
}

impl Spiker {
    pub fn mode(&self) -> SpikerMode {
        self.mode
    }

    pub fn wander(&self) -> Option<Facing> {
        self.wander
    }

    pub fn facing(&self) -> Facing {
        self.wander.unwrap_or_default()
    }

    pub fn home(&self) -> Vec2 {
        self.home
    }

    pub fn target(&self) -> Vec2 {
        self.target
    }

    /// Advance one frame. `avatar` is the avatar's position when it shares
    /// this Spiker's room. Returns `None` while knockback owns the body.
    pub fn update(
        &mut self,
        now: f64,
        dt: f32,
        position: Vec2,
        avatar: Option<Vec2>,
        knocked_back: bool,
        tuning: &SpikerTuning,
        rng: &mut impl Rng,
    ) -> Option<SpikerFrame> {
        if knocked_back {
            self.mode = SpikerMode::Search;
            return None;
        }

        let frame = match self.mode {
            SpikerMode::Search => {
                let Some(avatar) = avatar else {
                    return Some(SpikerFrame::moving(Vec2::ZERO, 1.0));
                };

                if position.distance(avatar) < tuning.sensor_range {
                    self.home = position;
                    self.target = avatar;
                    self.attack_started_at = now;
                    self.mode = SpikerMode::Attack;
                    debug!("Spiker lunging from {:?} to {:?}", position, avatar);
                    return Some(SpikerFrame::moving(Vec2::ZERO, tuning.attack_anim_rate));
                }

                if now >= self.next_decision_at {
                    self.decide(now, tuning, rng);
                }

                let velocity = self
                    .wander
                    .map_or(Vec2::ZERO, |facing| facing.unit() * tuning.wander_speed);
                SpikerFrame::moving(velocity, 1.0)
            }
            SpikerMode::Attack => {
                let tolerance = tuning.arrive_epsilon.max(tuning.attack_speed * dt);
                if position.distance(self.target) < tolerance {
                    self.mode = SpikerMode::Retract;
                    SpikerFrame::arrived(self.target)
                } else if now - self.attack_started_at > tuning.attack_timeout as f64 {
                    debug!("Spiker lunge timed out");
                    self.mode = SpikerMode::Retract;
                    SpikerFrame::moving(Vec2::ZERO, tuning.retract_anim_rate)
                } else {
                    let direction = (self.target - position).normalize_or_zero();
                    SpikerFrame::moving(direction * tuning.attack_speed, tuning.attack_anim_rate)
                }
            }
            SpikerMode::Retract => {
                let tolerance = tuning.arrive_epsilon.max(tuning.retract_speed * dt);
                if position.distance(self.home) < tolerance {
                    self.mode = SpikerMode::Search;
                    SpikerFrame::arrived(self.home)
                } else {
                    let direction = (self.home - position).normalize_or_zero();
                    SpikerFrame::moving(direction * tuning.retract_speed, tuning.retract_anim_rate)
                }
            }
        };

        Some(frame)
    }

    /// Pick a new wander direction (or none) and the time to think again.
    fn decide(&mut self, now: f64, tuning: &SpikerTuning, rng: &mut impl Rng) {
        let choice = rng.random_range(0..5);
        self.wander = (choice < 4).then(|| Facing::from_index(choice));

        let think = if tuning.think_max > tuning.think_min {
            rng.random_range(tuning.think_min..tuning.think_max)
        } else {
            tuning.think_min
        };
        self.next_decision_at = now + think as f64;
    }
}
