//! Gadgets domain: tests for the grapple state machine and the gadget protocol.

use bevy::prelude::*;

use super::*;
use crate::content::TileRect;
use crate::movement::Facing;
use crate::rooms::TileMap;

const DT: f32 = 0.02;

fn owner() -> Entity {
    Entity::from_bits(42)
}

fn safe_ground() -> TileMap {
    TileMap::default()
}

fn fired(origin: Vec2, facing: Facing) -> Grappler {
    let mut grappler = Grappler::new(GrappleTuning::default());
    assert!(grappler.try_use(owner(), origin, facing));
    grappler
}

// -----------------------------------------------------------------------------
// Use / cancel tests
// -----------------------------------------------------------------------------

#[test]
fn test_use_places_head_one_min_length_ahead() {
    let grappler = fired(Vec2::new(5.0, 5.0), Facing::Up);
    assert_eq!(grappler.mode(), GrappleMode::Extending);
    assert_eq!(grappler.owner(), Some(owner()));
    assert_eq!(grappler.head(), Vec2::new(5.0, 5.375));
    assert_eq!(grappler.velocity(), Vec2::new(0.0, 10.0));
}

#[test]
fn test_second_use_fails_and_leaves_session_untouched() {
    let mut grappler = fired(Vec2::new(5.0, 5.0), Facing::Up);
    let before = grappler.clone();

    let other = Entity::from_bits(7);
    assert!(!grappler.try_use(other, Vec2::ZERO, Facing::Left));

    assert_eq!(grappler.owner(), before.owner());
    assert_eq!(grappler.head(), before.head());
    assert_eq!(grappler.facing(), Facing::Up);
    assert_eq!(grappler.mode(), GrappleMode::Extending);
}

#[test]
fn test_cancel_succeeds_while_extending_or_retracting() {
    let mut grappler = fired(Vec2::ZERO, Facing::Right);
    assert!(grappler.cancel());
    assert!(grappler.is_idle());

    let mut grappler = fired(Vec2::ZERO, Facing::Right);
    grappler.on_contact(HookContact::Scenery);
    assert_eq!(grappler.mode(), GrappleMode::Retracting);
    assert!(grappler.cancel());
    assert!(grappler.is_idle());

    // Idle accepts a cancel and stays idle.
    assert!(grappler.cancel());
    assert!(grappler.is_idle());
}

#[test]
fn test_cancel_is_refused_while_pulling() {
    let mut grappler = fired(Vec2::ZERO, Facing::Right);
    let signals = grappler.on_contact(HookContact::Anchor);
    assert_eq!(signals, vec![GadgetSignal::SeizeControl]);
    assert_eq!(grappler.mode(), GrappleMode::Pulling);

    assert!(!grappler.cancel());
    assert_eq!(grappler.mode(), GrappleMode::Pulling);
}

#[test]
fn test_cancel_emits_no_done() {
    let mut grappler = fired(Vec2::ZERO, Facing::Right);
    grappler.cancel();
    let signals = grappler.fixed_step(DT, &safe_ground());
    assert!(signals.is_empty());
}

// -----------------------------------------------------------------------------
// Motion tests
// -----------------------------------------------------------------------------

#[test]
fn test_unobstructed_shot_retracts_and_finishes_once() {
    let origin = Vec2::new(5.0, 5.0);
    let mut grappler = fired(origin, Facing::Up);
    let ground = safe_ground();

    let mut steps = 0;
    while grappler.mode() == GrappleMode::Extending {
        assert!(grappler.fixed_step(DT, &ground).is_empty());
        steps += 1;
        assert!(steps < 1000);
    }

    assert_eq!(grappler.mode(), GrappleMode::Retracting);
    assert_eq!(grappler.head(), Vec2::new(5.0, 5.0 + 7.25));
    assert_eq!(grappler.velocity(), Vec2::new(0.0, -20.0));

    let mut done = 0;
    for _ in 0..1000 {
        let signals = grappler.fixed_step(DT, &ground);
        done += signals.iter().filter(|s| **s == GadgetSignal::Done).count();
        assert!(!signals.contains(&GadgetSignal::ReleaseControl));
        if grappler.is_idle() {
            break;
        }
    }

    assert!(grappler.is_idle());
    assert_eq!(done, 1);
    assert!((grappler.head() - origin).dot(Vec2::Y) <= 0.0);

    // Nothing more once idle.
    assert!(grappler.fixed_step(DT, &ground).is_empty());
}

#[test]
fn test_scenery_and_enemies_turn_the_hook_around() {
    for contact in [HookContact::Scenery, HookContact::Enemy] {
        let mut grappler = fired(Vec2::ZERO, Facing::Left);
        assert!(grappler.on_contact(contact).is_empty());
        assert_eq!(grappler.mode(), GrappleMode::Retracting);
        assert_eq!(grappler.velocity(), Vec2::new(20.0, 0.0));
    }
}

#[test]
fn test_pickups_ride_the_head_until_idle() {
    let item = Entity::from_bits(99);
    let mut grappler = fired(Vec2::ZERO, Facing::Right);

    grappler.on_contact(HookContact::Pickup(item));
    assert_eq!(grappler.mode(), GrappleMode::Retracting);
    assert_eq!(grappler.carried(), &[item]);

    let ground = safe_ground();
    while !grappler.is_idle() {
        grappler.fixed_step(DT, &ground);
    }
    assert!(grappler.carried().is_empty());
}

#[test]
fn test_anchor_while_retracting_starts_pull() {
    let mut grappler = fired(Vec2::ZERO, Facing::Right);
    grappler.on_contact(HookContact::Scenery);
    let signals = grappler.on_contact(HookContact::Anchor);
    assert_eq!(signals, vec![GadgetSignal::SeizeControl]);
    assert_eq!(grappler.mode(), GrappleMode::Pulling);
}

fn pull_to_completion(grappler: &mut Grappler, ground: &TileMap) -> Vec<GadgetSignal> {
    let mut all = Vec::new();
    for _ in 0..1000 {
        all.extend(grappler.fixed_step(DT, ground));
        if grappler.is_idle() {
            break;
        }
    }
    all
}

#[test]
fn test_pull_moves_owner_and_stops_short_of_head() {
    let origin = Vec2::new(2.5, 5.5);
    let mut grappler = fired(origin, Facing::Right);
    let ground = safe_ground();
    for _ in 0..10 {
        grappler.fixed_step(DT, &ground);
    }
    let head = grappler.head();
    grappler.on_contact(HookContact::Anchor);

    let signals = pull_to_completion(&mut grappler, &ground);

    let moves: Vec<Vec2> = signals
        .iter()
        .filter_map(|s| match s {
            GadgetSignal::MoveOwner(to) => Some(*to),
            _ => None,
        })
        .collect();
    assert!(!moves.is_empty());
    // Never past the stopping point.
    let stop = head - Vec2::X * 0.375;
    for to in &moves {
        assert!(to.x <= stop.x + 1e-5);
        assert_eq!(to.y, origin.y);
    }
    assert_eq!(*moves.last().unwrap(), stop);

    let tail: Vec<_> = signals.iter().rev().take(2).copied().collect();
    assert_eq!(tail, vec![GadgetSignal::Done, GadgetSignal::ReleaseControl]);
    assert_eq!(
        signals
            .iter()
            .filter(|s| **s == GadgetSignal::Done)
            .count(),
        1
    );
    assert!(
        !signals
            .iter()
            .any(|s| matches!(s, GadgetSignal::HazardLanding { .. }))
    );
}

#[test]
fn test_pull_onto_hazard_reports_penalty() {
    let origin = Vec2::new(2.5, 5.5);
    let mut grappler = fired(origin, Facing::Right);
    let ground = safe_ground();
    for _ in 0..10 {
        grappler.fixed_step(DT, &ground);
    }
    grappler.on_contact(HookContact::Anchor);

    // Everything between the owner and the head is dangerous.
    let hazards = [TileRect {
        min: (0, 0),
        max: (20, 10),
    }];
    let lava = TileMap::from_hazards(&hazards);
    let signals = pull_to_completion(&mut grappler, &lava);

    assert!(signals.contains(&GadgetSignal::HazardLanding { penalty: 2 }));
    let landing = signals
        .iter()
        .position(|s| matches!(s, GadgetSignal::HazardLanding { .. }))
        .unwrap();
    let release = signals
        .iter()
        .position(|s| *s == GadgetSignal::ReleaseControl)
        .unwrap();
    assert!(landing < release);
}
