//! Combat domain: tests for the damage rules, drops, and the Spiker.

use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use super::*;
use crate::movement::Facing;
use crate::pickups::PickupKind;

fn response() -> HitResponse {
    HitResponse {
        invincible_duration: 0.5,
        knockback_speed: 10.0,
    }
}

fn hit_from(source: Vec2, damage: i32) -> Hit {
    Hit {
        damage,
        knockback: true,
        target: Vec2::new(5.0, 5.0),
        source,
        mover_facing: None,
    }
}

// -----------------------------------------------------------------------------
// Vitals tests
// -----------------------------------------------------------------------------

#[test]
fn test_heal_at_max_is_unchanged() {
    let mut vitals = Vitals::new(10);
    vitals.heal(2);
    assert_eq!(vitals.health(), 10);
}

#[test]
fn test_heal_clamps_to_max() {
    let mut vitals = Vitals::new(10);
    vitals.apply_damage(1);
    vitals.heal(2);
    assert_eq!(vitals.health(), 10);
}

#[test]
fn test_lethal_damage_never_goes_negative() {
    let mut vitals = Vitals::new(3);
    assert!(vitals.apply_damage(7));
    assert_eq!(vitals.health(), 0);
    assert!(vitals.is_dead());
    // Already dead: no second death.
    assert!(!vitals.apply_damage(1));
    assert_eq!(vitals.health(), 0);
}

#[test]
fn test_invincibility_is_a_deadline() {
    let mut vitals = Vitals::new(3);
    vitals.grant_invincibility(2.0);
    assert!(vitals.is_invincible(1.99));
    assert!(!vitals.is_invincible(2.0));
}

// -----------------------------------------------------------------------------
// Resolver tests
// -----------------------------------------------------------------------------

#[test]
fn test_hit_from_the_east_knocks_west() {
    let mut vitals = Vitals::new(10);
    let outcome = resolve_hit(&mut vitals, &hit_from(Vec2::new(6.0, 5.0), 3), 1.0, &response())
        .expect("hit should land");

    assert_eq!(vitals.health(), 7);
    assert!(vitals.is_invincible(1.0));
    assert!(!outcome.died);
    assert_eq!(outcome.knockback, Some(Vec2::new(-10.0, 0.0)));
}

#[test]
fn test_invincible_target_ignores_hits() {
    let mut vitals = Vitals::new(10);
    vitals.grant_invincibility(5.0);
    let outcome = resolve_hit(&mut vitals, &hit_from(Vec2::ZERO, 3), 1.0, &response());
    assert!(outcome.is_none());
    assert_eq!(vitals.health(), 10);
}

#[test]
fn test_hit_without_knockback_flag() {
    let mut vitals = Vitals::new(10);
    let mut hit = hit_from(Vec2::ZERO, 1);
    hit.knockback = false;
    let outcome = resolve_hit(&mut vitals, &hit, 0.0, &response()).unwrap();
    assert_eq!(outcome.knockback, None);
    assert_eq!(vitals.health(), 9);
}

#[test]
fn test_lethal_hit_reports_death() {
    let mut vitals = Vitals::new(1);
    let outcome = resolve_hit(&mut vitals, &hit_from(Vec2::ZERO, 1), 0.0, &response()).unwrap();
    assert!(outcome.died);
}

#[test]
fn test_knockback_axis_is_always_cardinal() {
    let target = Vec2::new(5.0, 5.0);
    for x in -4..=4 {
        for y in -4..=4 {
            let source = target + Vec2::new(x as f32 * 0.3, y as f32 * 0.7);
            let axis = knockback_axis(target, source, None);
            assert!(
                (axis.x == 0.0) != (axis.y == 0.0),
                "axis {:?} is not cardinal",
                axis
            );
            assert_eq!(axis.length(), 1.0);
        }
    }
}

#[test]
fn test_knockback_axis_ties_go_horizontal() {
    let axis = knockback_axis(Vec2::new(1.0, 1.0), Vec2::ZERO, None);
    assert_eq!(axis, Vec2::X);
    let axis = knockback_axis(Vec2::new(-1.0, 1.0), Vec2::ZERO, None);
    assert_eq!(axis, Vec2::NEG_X);
}

#[test]
fn test_knockback_axis_on_top_of_source() {
    assert_eq!(knockback_axis(Vec2::ONE, Vec2::ONE, None), Vec2::NEG_X);
}

#[test]
fn test_mover_facing_overrides_position() {
    let axis = knockback_axis(Vec2::new(0.0, -3.0), Vec2::ZERO, Some(Facing::Up));
    assert_eq!(axis, Vec2::Y);
}

// -----------------------------------------------------------------------------
// Drop table tests
// -----------------------------------------------------------------------------

#[test]
fn test_guaranteed_drop_wins() {
    let table = DropTable {
        guaranteed: Some(PickupKind::Key),
        random: vec![Some(PickupKind::Health)],
    };
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    for _ in 0..10 {
        assert_eq!(table.roll(&mut rng), Some(PickupKind::Key));
    }
}

#[test]
fn test_empty_table_drops_nothing() {
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    assert_eq!(DropTable::default().roll(&mut rng), None);
}

#[test]
fn test_random_drops_sample_every_entry() {
    let table = DropTable {
        guaranteed: None,
        random: vec![Some(PickupKind::Health), None],
    };
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let rolls: Vec<_> = (0..200).map(|_| table.roll(&mut rng)).collect();
    assert!(rolls.contains(&Some(PickupKind::Health)));
    assert!(rolls.contains(&None));
}

// -----------------------------------------------------------------------------
// Spiker tests
// -----------------------------------------------------------------------------

const DT: f32 = 1.0 / 60.0;

fn spiker_rng() -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(11)
}

#[test]
fn test_spiker_idles_without_avatar_in_room() {
    let mut spiker = Spiker::default();
    let tuning = SpikerTuning::default();
    let frame = spiker
        .update(0.0, DT, Vec2::ZERO, None, false, &tuning, &mut spiker_rng())
        .unwrap();
    assert_eq!(frame.velocity, Vec2::ZERO);
    assert_eq!(spiker.mode(), SpikerMode::Search);
}

#[test]
fn test_spiker_wanders_along_a_facing_or_stands() {
    let mut spiker = Spiker::default();
    let tuning = SpikerTuning::default();
    let mut rng = spiker_rng();
    let far = Some(Vec2::new(10.0, 0.0));

    for step in 0..20 {
        let now = step as f64;
        let frame = spiker
            .update(now, DT, Vec2::ZERO, far, false, &tuning, &mut rng)
            .unwrap();
        match spiker.wander() {
            Some(facing) => assert_eq!(frame.velocity, facing.unit() * tuning.wander_speed),
            None => assert_eq!(frame.velocity, Vec2::ZERO),
        }
    }
}

#[test]
fn test_spiker_lunges_and_snaps_to_target() {
    let mut spiker = Spiker::default();
    let tuning = SpikerTuning::default();
    let mut rng = spiker_rng();
    let home = Vec2::new(3.0, 3.0);
    let avatar = Vec2::new(3.8, 3.0);

    spiker.update(0.0, DT, home, Some(avatar), false, &tuning, &mut rng);
    assert_eq!(spiker.mode(), SpikerMode::Attack);
    assert_eq!(spiker.home(), home);
    assert_eq!(spiker.target(), avatar);

    let frame = spiker
        .update(0.1, DT, home, Some(avatar), false, &tuning, &mut rng)
        .unwrap();
    assert_eq!(frame.velocity, Vec2::new(tuning.attack_speed, 0.0));
    assert_eq!(frame.anim_rate, tuning.attack_anim_rate);

    let frame = spiker
        .update(0.2, DT, Vec2::new(3.75, 3.0), Some(avatar), false, &tuning, &mut rng)
        .unwrap();
    assert_eq!(frame.snap_to, Some(avatar));
    assert_eq!(spiker.mode(), SpikerMode::Retract);

    let frame = spiker
        .update(0.3, DT, avatar, None, false, &tuning, &mut rng)
        .unwrap();
    assert_eq!(frame.velocity, Vec2::new(-tuning.retract_speed, 0.0));
    assert_eq!(frame.anim_rate, tuning.retract_anim_rate);

    let frame = spiker
        .update(0.4, DT, Vec2::new(3.05, 3.0), None, false, &tuning, &mut rng)
        .unwrap();
    assert_eq!(frame.snap_to, Some(home));
    assert_eq!(spiker.mode(), SpikerMode::Search);
}

#[test]
fn test_spiker_attack_times_out() {
    let mut spiker = Spiker::default();
    let tuning = SpikerTuning::default();
    let mut rng = spiker_rng();
    let avatar = Vec2::new(0.5, 0.0);

    spiker.update(0.0, DT, Vec2::ZERO, Some(avatar), false, &tuning, &mut rng);
    assert_eq!(spiker.mode(), SpikerMode::Attack);

    // Stuck against something and never arrives.
    spiker.update(1.5, DT, Vec2::ZERO, Some(avatar), false, &tuning, &mut rng);
    assert_eq!(spiker.mode(), SpikerMode::Attack);
    spiker.update(1.6, DT, Vec2::ZERO, Some(avatar), false, &tuning, &mut rng);
    assert_eq!(spiker.mode(), SpikerMode::Retract);
}

#[test]
fn test_knockback_preempts_spiker() {
    let mut spiker = Spiker::default();
    let tuning = SpikerTuning::default();
    let mut rng = spiker_rng();

    spiker.update(0.0, DT, Vec2::ZERO, Some(Vec2::new(0.5, 0.0)), false, &tuning, &mut rng);
    assert_eq!(spiker.mode(), SpikerMode::Attack);

    let frame = spiker.update(0.1, DT, Vec2::ZERO, None, true, &tuning, &mut rng);
    assert!(frame.is_none());
    assert_eq!(spiker.mode(), SpikerMode::Search);
}
