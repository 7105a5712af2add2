//! Pickups domain: tests for pickup effects and arming.

use bevy::prelude::*;

use super::*;
use crate::combat::Vitals;
use crate::movement::Loadout;

fn setup() -> (Vitals, Loadout, PickupTuning) {
    (
        Vitals::new(10),
        Loadout::new(Entity::from_bits(42), false),
        PickupTuning::default(),
    )
}

#[test]
fn test_health_pickup_heals_clamped() {
    let (mut vitals, mut loadout, tuning) = setup();
    vitals.apply_damage(3);

    let outcome = apply_pickup(PickupKind::Health, &mut vitals, &mut loadout, &tuning);
    assert_eq!(outcome, PickupOutcome::Consumed);
    assert_eq!(vitals.health(), 9);

    apply_pickup(PickupKind::Health, &mut vitals, &mut loadout, &tuning);
    assert_eq!(vitals.health(), 10);
}

#[test]
fn test_key_pickup_counts_up() {
    let (mut vitals, mut loadout, tuning) = setup();
    apply_pickup(PickupKind::Key, &mut vitals, &mut loadout, &tuning);
    apply_pickup(PickupKind::Key, &mut vitals, &mut loadout, &tuning);
    assert_eq!(loadout.keys, 2);
}

#[test]
fn test_grappler_pickup_equips_gadget() {
    let (mut vitals, mut loadout, tuning) = setup();
    assert_eq!(loadout.current_gadget(), None);
    apply_pickup(PickupKind::Grappler, &mut vitals, &mut loadout, &tuning);
    assert_eq!(loadout.current_gadget(), Some(Entity::from_bits(42)));
}

#[test]
fn test_flag_completes_level() {
    let (mut vitals, mut loadout, tuning) = setup();
    let outcome = apply_pickup(PickupKind::Flag, &mut vitals, &mut loadout, &tuning);
    assert_eq!(outcome, PickupOutcome::LevelComplete);
}

#[test]
fn test_unassigned_pickup_is_rejected() {
    let (mut vitals, mut loadout, tuning) = setup();
    vitals.apply_damage(3);
    let outcome = apply_pickup(PickupKind::Unassigned, &mut vitals, &mut loadout, &tuning);

    assert_eq!(outcome, PickupOutcome::Rejected);
    assert_eq!(vitals.health(), 7);
    assert_eq!(loadout.keys, 0);
    assert_eq!(loadout.current_gadget(), None);
}

#[test]
fn test_pickup_arms_after_delay() {
    let pickup = Pickup::new(PickupKind::Key, 2.5);
    assert!(!pickup.is_armed(2.0));
    assert!(pickup.is_armed(2.5));
    assert!(pickup.is_armed(3.0));
}

#[test]
fn test_pickup_kind_defaults_to_unassigned() {
    assert_eq!(PickupKind::default(), PickupKind::Unassigned);
}
