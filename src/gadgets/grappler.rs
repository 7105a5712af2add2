//! Gadgets domain: the grappling hook's extend, retract, and pull motion.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::gadgets::gadget::{Gadget, GadgetSignal};
use crate::movement::Facing;
use crate::rooms::TerrainQuery;

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct GrappleTuning {
    /// Extend speed. Retracting runs at twice this.
    pub speed: f32,
    pub max_length: f32,
    /// Gap kept between the owner and the head.
    pub min_length: f32,
    pub hazard_penalty: i32,
    /// Offset from the landing point to the terrain sample.
    pub hazard_probe: (f32, f32),
    pub head_radius: f32,
    pub damage: i32,
}

impl Default for GrappleTuning {
    fn default() -> Self {
        Self {
            speed: 10.0,
            max_length: 7.25,
            min_length: 0.375,
            hazard_penalty: 2,
            hazard_probe: (0.0, -0.25),
            head_radius: 0.2,
            damage: 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GrappleMode {
    #[default]
    Idle,
    Extending,
    Retracting,
    Pulling,
}

/// What the head ran into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookContact {
    Anchor,
    Pickup(Entity),
    Enemy,
    Scenery,
}

#[derive(Component, Debug, Clone)]
pub struct Grappler {
    mode: GrappleMode,
    owner: Option<Entity>,
    facing: Facing,
    /// Owner end of the line. Advances towards the head while pulling.
    origin: Vec2,
    head: Vec2,
    velocity: Vec2,
    carried: Vec<Entity>,
    tuning: GrappleTuning,
}

impl Grappler {
    pub fn new(tuning: GrappleTuning) -> Self {
        Self {
            mode: GrappleMode::Idle,
            owner: None,
            facing: Facing::default(),
            origin: Vec2::ZERO,
            head: Vec2::ZERO,
            velocity: Vec2::ZERO,
            carried: Vec::new(),
            tuning,
        }
    }

    pub fn mode(&self) -> GrappleMode {
        self.mode
    }

    pub fn owner(&self) -> Option<Entity> {
        self.owner
    }

    pub fn facing(&self) -> Facing {
        self.facing
    }

    pub fn origin(&self) -> Vec2 {
        self.origin
    }

    pub fn head(&self) -> Vec2 {
        self.head
    }

    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    pub fn carried(&self) -> &[Entity] {
        &self.carried
    }

    pub fn tuning(&self) -> &GrappleTuning {
        &self.tuning
    }

    /// Advance the head, or the owner while pulling, by one fixed step.
    pub fn fixed_step(&mut self, dt: f32, terrain: &impl TerrainQuery) -> Vec<GadgetSignal> {
        let mut signals = Vec::new();
        let dir = self.facing.unit();

        match self.mode {
            GrappleMode::Idle => {}
            GrappleMode::Extending => {
                self.head += self.velocity * dt;
                if (self.head - self.origin).length() >= self.tuning.max_length {
                    self.head = self.origin + dir * self.tuning.max_length;
                    self.start_retract();
                }
            }
            GrappleMode::Retracting => {
                self.head += self.velocity * dt;
                if (self.head - self.origin).dot(dir) <= 0.0 {
                    debug!("Grapple retracted");
                    self.go_idle(&mut signals);
                    signals.push(GadgetSignal::Done);
                }
            }
            GrappleMode::Pulling => {
                let remaining = (self.head - self.origin).length() - self.tuning.min_length;
                let step = self.tuning.speed * dt;
                if remaining > step {
                    self.origin += dir * step;
                    signals.push(GadgetSignal::MoveOwner(self.origin));
                } else {
                    // Within one step of the stopping point: land exactly on it.
                    self.origin = self.head - dir * self.tuning.min_length;
                    signals.push(GadgetSignal::MoveOwner(self.origin));

                    let probe = self.origin + Vec2::from(self.tuning.hazard_probe);
                    if terrain.is_hazardous(probe) {
                        debug!("Grapple landed on a hazard at {:?}", probe);
                        signals.push(GadgetSignal::HazardLanding {
                            penalty: self.tuning.hazard_penalty,
                        });
                    }

                    self.go_idle(&mut signals);
                    signals.push(GadgetSignal::Done);
                }
            }
        }

        signals
    }

    /// React to the head touching something.
    pub fn on_contact(&mut self, contact: HookContact) -> Vec<GadgetSignal> {
        let mut signals = Vec::new();

        match (self.mode, contact) {
            (GrappleMode::Extending | GrappleMode::Retracting, HookContact::Anchor) => {
                debug!("Grapple latched at {:?}", self.head);
                self.mode = GrappleMode::Pulling;
                self.velocity = Vec2::ZERO;
                signals.push(GadgetSignal::SeizeControl);
            }
            (GrappleMode::Extending | GrappleMode::Retracting, HookContact::Pickup(item)) => {
                if !self.carried.contains(&item) {
                    self.carried.push(item);
                }
                if self.mode == GrappleMode::Extending {
                    self.start_retract();
                }
            }
            (GrappleMode::Extending, HookContact::Enemy | HookContact::Scenery) => {
                self.start_retract();
            }
            _ => {}
        }

        signals
    }

    fn start_retract(&mut self) {
        self.mode = GrappleMode::Retracting;
        self.velocity = -self.facing.unit() * self.tuning.speed * 2.0;
    }

    fn go_idle(&mut self, signals: &mut Vec<GadgetSignal>) {
        if self.mode == GrappleMode::Pulling {
            signals.push(GadgetSignal::ReleaseControl);
        }
        self.mode = GrappleMode::Idle;
        self.velocity = Vec2::ZERO;
        self.carried.clear();
    }
}

impl Gadget for Grappler {
    fn try_use(&mut self, owner: Entity, origin: Vec2, facing: Facing) -> bool {
        if self.mode != GrappleMode::Idle {
            return false;
        }

        self.owner = Some(owner);
        self.facing = facing;
        self.origin = origin;
        self.head = origin + facing.unit() * self.tuning.min_length;
        self.velocity = facing.unit() * self.tuning.speed;
        self.mode = GrappleMode::Extending;
        debug!("Grapple fired {:?} from {:?}", facing, origin);
        true
    }

    fn cancel(&mut self) -> bool {
        if self.mode == GrappleMode::Pulling {
            return false;
        }
        let mut signals = Vec::new();
        self.go_idle(&mut signals);
        true
    }

    fn is_idle(&self) -> bool {
        self.mode == GrappleMode::Idle
    }

    fn name(&self) -> &'static str {
        "grappler"
    }
}
