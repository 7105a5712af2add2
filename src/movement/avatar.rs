//! Movement domain: the avatar's mode machine.
//!
//! `AvatarState` is plain data driven by an input snapshot and the game
//! clock. Systems feed it and apply the `AvatarFrame` it returns, so the
//! machine itself never touches the ECS.

use bevy::prelude::*;

use crate::combat::{Hit, HitResponse, Vitals, resolve_hit};
use crate::gadgets::Gadget;
use crate::movement::Facing;
use crate::movement::resources::{ActionInput, AvatarTuning};
use crate::rooms::RoomQuery;
use crate::sprites::PoseClip;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AvatarMode {
    #[default]
    Idle,
    Move,
    Attack,
    RoomTransition,
    Knockback,
    Gadget,
    Dodge,
}

/// Animation change requested for this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PoseUpdate {
    /// Keep the current clip, stopped.
    Freeze,
    Play { clip: PoseClip, rate: f32 },
}

/// Outputs of one update. `None` fields leave the current value alone.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AvatarFrame {
    pub velocity: Option<Vec2>,
    pub pose: Option<PoseUpdate>,
    /// Pin the avatar to this world position.
    pub hold_at: Option<Vec2>,
    pub request_game_over: bool,
}

/// Everything the machine reads besides its own state.
pub struct AvatarContext<'a> {
    pub now: f64,
    pub owner: Entity,
    pub position: Vec2,
    pub health: i32,
    pub input: &'a ActionInput,
    pub tuning: &'a AvatarTuning,
}

/// Where a door sent the avatar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoomTransition {
    pub room: IVec2,
    pub position: Vec2,
}

#[derive(Component, Debug, Clone)]
pub struct AvatarState {
    mode: AvatarMode,
    dir_held: Option<Facing>,
    last_dir_pressed: Option<Facing>,
    attack_done_at: f64,
    next_attack_at: f64,
    dodge_done_at: f64,
    knockback_done_at: f64,
    knockback_velocity: Vec2,
    room_transition_done_at: f64,
    room_transition_hold: Vec2,
    controlled_by: Option<Entity>,
    physics_enabled: bool,
    last_safe_position: Vec2,
    last_safe_facing: Facing,
    game_over_requested: bool,
}

impl AvatarState {
    pub fn new(position: Vec2, facing: Facing) -> Self {
        Self {
            mode: AvatarMode::Idle,
            dir_held: None,
            last_dir_pressed: None,
            attack_done_at: 0.0,
            next_attack_at: 0.0,
            dodge_done_at: 0.0,
            knockback_done_at: 0.0,
            knockback_velocity: Vec2::ZERO,
            room_transition_done_at: 0.0,
            room_transition_hold: position,
            controlled_by: None,
            physics_enabled: true,
            last_safe_position: position,
            last_safe_facing: facing,
            game_over_requested: false,
        }
    }

    pub fn mode(&self) -> AvatarMode {
        self.mode
    }

    pub fn controlled_by(&self) -> Option<Entity> {
        self.controlled_by
    }

    pub fn is_controlled(&self) -> bool {
        self.controlled_by.is_some()
    }

    pub fn physics_enabled(&self) -> bool {
        self.physics_enabled
    }

    pub fn last_safe(&self) -> (Vec2, Facing) {
        (self.last_safe_position, self.last_safe_facing)
    }

    pub fn knockback_done_at(&self) -> f64 {
        self.knockback_done_at
    }

    pub fn room_transition_done_at(&self) -> f64 {
        self.room_transition_done_at
    }

    /// One logic pass.
    pub fn update(
        &mut self,
        ctx: &AvatarContext,
        facing: &mut Facing,
        gadget: Option<&mut dyn Gadget>,
    ) -> AvatarFrame {
        if self.is_controlled() {
            return AvatarFrame::default();
        }

        let now = ctx.now;

        if self.mode == AvatarMode::Knockback {
            if now < self.knockback_done_at {
                return AvatarFrame {
                    velocity: Some(self.knockback_velocity),
                    ..default()
                };
            }
            self.set_mode(AvatarMode::Idle);
        }

        if self.mode == AvatarMode::RoomTransition {
            if now < self.room_transition_done_at {
                return AvatarFrame {
                    velocity: Some(Vec2::ZERO),
                    pose: Some(PoseUpdate::Freeze),
                    hold_at: Some(self.room_transition_hold),
                    ..default()
                };
            }
            self.set_mode(AvatarMode::Idle);
        }

        if ctx.health <= 0 {
            let first = !self.game_over_requested;
            self.game_over_requested = true;
            return AvatarFrame {
                velocity: Some(Vec2::ZERO),
                pose: Some(PoseUpdate::Freeze),
                request_game_over: first,
                ..default()
            };
        }

        if self.mode == AvatarMode::Attack && now >= self.attack_done_at {
            self.set_mode(AvatarMode::Idle);
        }
        if self.mode == AvatarMode::Dodge && now >= self.dodge_done_at {
            self.set_mode(AvatarMode::Idle);
        }

        if matches!(self.mode, AvatarMode::Idle | AvatarMode::Move) {
            self.read_input(ctx, facing, gadget);
        }

        let tuning = ctx.tuning;
        let (velocity, clip, rate) = match self.mode {
            AvatarMode::Move => {
                let dir = self.dir_held.unwrap_or(*facing);
                (dir.unit() * tuning.move_speed, PoseClip::Walk, 1.0)
            }
            AvatarMode::Dodge => {
                let dir = self.dir_held.unwrap_or(*facing);
                (dir.unit() * tuning.dodge_speed, PoseClip::Attack, 0.0)
            }
            AvatarMode::Attack | AvatarMode::Gadget => (Vec2::ZERO, PoseClip::Attack, 0.0),
            _ => (Vec2::ZERO, PoseClip::Walk, 0.0),
        };

        AvatarFrame {
            velocity: Some(velocity),
            pose: Some(PoseUpdate::Play { clip, rate }),
            ..default()
        }
    }

    fn read_input(
        &mut self,
        ctx: &AvatarContext,
        facing: &mut Facing,
        gadget: Option<&mut dyn Gadget>,
    ) {
        let input = ctx.input;
        let now = ctx.now;

        self.dir_held = input.held_direction();
        if let Some(pressed) = input.pressed_direction() {
            self.last_dir_pressed = Some(pressed);
        }

        match self.dir_held {
            Some(dir) => {
                *facing = dir;
                self.set_mode(AvatarMode::Move);
            }
            None => self.set_mode(AvatarMode::Idle),
        }

        if input.dodge
            && let Some(dir) = self.last_dir_pressed.or(self.dir_held)
        {
            *facing = dir;
            self.dir_held = Some(dir);
            self.dodge_done_at = now + ctx.tuning.dodge_duration as f64;
            self.set_mode(AvatarMode::Dodge);
        }

        if input.gadget {
            match gadget {
                Some(gadget) => {
                    if gadget.try_use(ctx.owner, ctx.position, *facing) {
                        self.set_mode(AvatarMode::Gadget);
                        return;
                    }
                    debug!("Gadget {} is busy", gadget.name());
                }
                None => debug!("No gadget equipped"),
            }
        }

        if input.attack && now >= self.next_attack_at {
            self.attack_done_at = now + ctx.tuning.attack_duration as f64;
            self.next_attack_at = now + ctx.tuning.attack_delay as f64;
            self.set_mode(AvatarMode::Attack);
        }
    }

    /// Check whether the avatar walked into a door it is facing. Runs after
    /// the mode update on the post-movement position.
    pub fn check_room_transition(
        &mut self,
        rooms: &impl RoomQuery,
        position: Vec2,
        facing: Facing,
        now: f64,
        tuning: &AvatarTuning,
    ) -> Option<RoomTransition> {
        if self.is_controlled() {
            return None;
        }

        let door = rooms.door_at(position)?;
        if door != facing {
            return None;
        }
        let room = rooms.neighbor(rooms.room_of(position), door)?;

        let entry = rooms.world_from(room, rooms.layout().door_anchor(door.opposite()));
        self.room_transition_hold = entry;
        self.room_transition_done_at = now + tuning.room_transition_delay as f64;
        self.last_safe_position = entry;
        self.last_safe_facing = facing;
        self.set_mode(AvatarMode::RoomTransition);

        Some(RoomTransition {
            room,
            position: entry,
        })
    }

    /// Take a hit from a damage source. Returns the knockback velocity to
    /// apply right away, if any.
    pub fn on_hit(
        &mut self,
        vitals: &mut Vitals,
        hit: &Hit,
        now: f64,
        tuning: &AvatarTuning,
        gadget: Option<&mut dyn Gadget>,
    ) -> Option<Vec2> {
        if self.is_controlled() {
            return None;
        }

        let response = HitResponse {
            invincible_duration: tuning.invincible_duration,
            knockback_speed: tuning.knockback_speed,
        };
        let outcome = resolve_hit(vitals, hit, now, &response)?;
        debug!(
            "Avatar took {} damage ({} left)",
            hit.damage,
            vitals.health()
        );

        let velocity = outcome.knockback?;
        self.knockback_velocity = velocity;

        let cancelled = self.mode != AvatarMode::Gadget
            || gadget.is_none_or(|gadget| gadget.cancel());
        if cancelled {
            self.knockback_done_at = now + tuning.knockback_duration as f64;
            self.set_mode(AvatarMode::Knockback);
        }

        Some(velocity)
    }

    /// The current gadget finished; hand movement back to the avatar.
    pub fn gadget_done(&mut self, gadget: Entity, current: Option<Entity>) {
        if current != Some(gadget) {
            error!(
                "Gadget {:?} reported done but the current gadget is {:?}",
                gadget, current
            );
        }
        self.controlled_by = None;
        self.physics_enabled = true;
        self.set_mode(AvatarMode::Idle);
    }

    pub fn take_control(&mut self, gadget: Entity) {
        self.controlled_by = Some(gadget);
        self.physics_enabled = false;
    }

    pub fn release_control(&mut self) {
        self.controlled_by = None;
        self.physics_enabled = true;
    }

    /// Return to the last safe spot, losing `penalty` health. Returns the
    /// position to move to.
    pub fn reset_in_room(
        &mut self,
        vitals: &mut Vitals,
        facing: &mut Facing,
        now: f64,
        penalty: i32,
        tuning: &AvatarTuning,
    ) -> Vec2 {
        *facing = self.last_safe_facing;
        vitals.apply_damage(penalty);
        vitals.grant_invincibility(now + tuning.invincible_duration as f64);
        debug!(
            "Avatar reset to {:?} losing {} health",
            self.last_safe_position, penalty
        );
        self.last_safe_position
    }

    fn set_mode(&mut self, mode: AvatarMode) {
        if self.mode != mode {
            trace!("Avatar mode {:?} -> {:?}", self.mode, mode);
            self.mode = mode;
        }
    }
}
