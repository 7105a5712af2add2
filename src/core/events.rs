//! Core domain: requests that change the loaded level.

use bevy::ecs::message::Message;

/// Scene change requested by gameplay code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneRequest {
    /// The avatar ran out of health.
    GameOver,
    /// The avatar reached the level's flag.
    NextLevel,
    /// Start again from the first level.
    Restart,
}

impl Message for SceneRequest {}
