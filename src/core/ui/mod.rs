//! Core domain: full-screen UI for the level flow.

pub(crate) mod game_over;
