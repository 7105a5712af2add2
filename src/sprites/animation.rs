//! Pose playback.
//!
//! A pose is a clip played in one of four directions. The name of the
//! current frame follows `<sheet>_<clip>_<facing index>`.

use bevy::prelude::*;

use crate::movement::Facing;

/// Seconds per frame at playback rate 1.
const FRAME_DURATION: f32 = 0.15;
const FRAMES_PER_CLIP: u32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PoseClip {
    #[default]
    Walk,
    Attack,
}

impl PoseClip {
    pub fn as_str(self) -> &'static str {
        match self {
            PoseClip::Walk => "walk",
            PoseClip::Attack => "attack",
        }
    }
}

#[derive(Component, Debug, Clone)]
pub struct Pose {
    pub sheet: &'static str,
    pub clip: PoseClip,
    pub facing: Facing,
    /// Playback speed; 0 holds the current frame.
    pub rate: f32,
    frame: u32,
    frame_timer: f32,
}

impl Pose {
    pub fn new(sheet: &'static str, clip: PoseClip, facing: Facing) -> Self {
        Self {
            sheet,
            clip,
            facing,
            rate: 0.0,
            frame: 0,
            frame_timer: 0.0,
        }
    }

    /// Direction-qualified name, e.g. `avatar_walk_1`.
    pub fn name(&self) -> String {
        format!(
            "{}_{}_{}",
            self.sheet,
            self.clip.as_str(),
            self.facing.index()
        )
    }

    pub fn frame(&self) -> u32 {
        self.frame
    }

    pub fn advance(&mut self, dt: f32) {
        if self.rate <= 0.0 {
            return;
        }

        self.frame_timer += dt * self.rate;
        while self.frame_timer >= FRAME_DURATION {
            self.frame_timer -= FRAME_DURATION;
            self.frame = (self.frame + 1) % FRAMES_PER_CLIP;
        }
    }
}

pub(crate) fn advance_poses(time: Res<Time>, mut poses: Query<&mut Pose>) {
    let dt = time.delta_secs();
    for mut pose in &mut poses {
        if pose.rate > 0.0 {
            pose.advance(dt);
        }
    }
}
