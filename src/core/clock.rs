//! Core domain: the monotonic game clock every deadline is measured against.

use bevy::prelude::*;

/// Absolute game time in seconds.
///
/// Gameplay timers store deadlines (`now + duration`) rather than countdowns,
/// so freezing this clock freezes every timer at once.
#[derive(Resource, Debug, Default, Clone, Copy)]
pub struct GameClock {
    now: f64,
    paused: bool,
}

impl GameClock {
    pub fn starting_at(now: f64) -> Self {
        Self { now, paused: false }
    }

    pub fn now(&self) -> f64 {
        self.now
    }

    pub fn advance(&mut self, delta_secs: f64) {
        if !self.paused && delta_secs > 0.0 {
            self.now += delta_secs;
        }
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Deadline `duration` seconds from now.
    pub fn after(&self, duration: f32) -> f64 {
        self.now + duration as f64
    }
}

pub(crate) fn advance_game_clock(time: Res<Time>, mut clock: ResMut<GameClock>) {
    clock.advance(time.delta_secs_f64());
}
