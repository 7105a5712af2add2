//! Sprites module: tests for pose playback and tinting.

use bevy::prelude::*;

use super::*;
use crate::movement::Facing;

const BASE: Color = Color::srgb(0.35, 0.75, 0.4);

#[test]
fn test_pose_name_is_direction_qualified() {
    let mut pose = Pose::new("avatar", PoseClip::Walk, Facing::Up);
    assert_eq!(pose.name(), "avatar_walk_1");

    pose.clip = PoseClip::Attack;
    pose.facing = Facing::Down;
    assert_eq!(pose.name(), "avatar_attack_3");
}

#[test]
fn test_zero_rate_holds_frame() {
    let mut pose = Pose::new("spiker", PoseClip::Walk, Facing::Right);
    pose.advance(1.0);
    assert_eq!(pose.frame(), 0);
}

#[test]
fn test_rate_scales_playback() {
    let mut pose = Pose::new("spiker", PoseClip::Walk, Facing::Right);
    pose.rate = 1.0;
    pose.advance(0.1);
    assert_eq!(pose.frame(), 0);
    pose.advance(0.1);
    assert_eq!(pose.frame(), 1);

    let mut fast = Pose::new("spiker", PoseClip::Walk, Facing::Right);
    fast.rate = 2.0;
    fast.advance(0.1);
    assert_eq!(fast.frame(), 1);
}

#[test]
fn test_invincible_tint_is_red() {
    let tint = Tint::new(BASE);
    let pose = Pose::new("avatar", PoseClip::Attack, Facing::Up);
    assert_ne!(tint.resolve(Some(&pose), true), BASE);
    assert_eq!(tint.resolve(Some(&pose), true), tint.resolve(None, true));
}

#[test]
fn test_idle_walk_tint_is_base() {
    let tint = Tint::new(BASE);
    let pose = Pose::new("avatar", PoseClip::Walk, Facing::Up);
    assert_eq!(tint.resolve(Some(&pose), false), BASE);
    assert_eq!(tint.resolve(None, false), BASE);
}

#[test]
fn test_attack_tint_differs_from_base() {
    let tint = Tint::new(BASE);
    let pose = Pose::new("avatar", PoseClip::Attack, Facing::Up);
    assert_ne!(tint.resolve(Some(&pose), false), BASE);
}
