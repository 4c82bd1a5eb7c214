//! Player domain: tests for decision helpers and tuning loading.

use bevy::prelude::Vec2;

use super::control::{
    counter_force, is_falling, jump_impulse_for, jump_impulse_vec, knockback_direction,
    knockback_impulse, landed, next_facing, run_cue_audible, run_velocity, wall_contact,
    wants_jump_impulse, FALLING_VELOCITY_THRESHOLD,
};
use super::resources::{parse_tuning, PlayerTuning};
use super::{Facing, PlayerMotion};

// -----------------------------------------------------------------------------
// Run tests
// -----------------------------------------------------------------------------

#[test]
fn test_run_velocity_scales_axis_by_max_speed() {
    for axis in [-1.0, -0.5, 0.0, 0.25, 1.0] {
        let v = run_velocity(axis, 10.0, Vec2::new(3.0, -7.0));
        assert_eq!(v.x, axis * 10.0);
    }
}

#[test]
fn test_run_velocity_leaves_vertical_untouched() {
    let v = run_velocity(1.0, 10.0, Vec2::new(0.0, -123.4));
    assert_eq!(v, Vec2::new(10.0, -123.4));
}

#[test]
fn test_run_velocity_full_axis_hits_cap() {
    assert_eq!(run_velocity(1.0, 10.0, Vec2::ZERO).x, 10.0);
    assert_eq!(run_velocity(-1.0, 10.0, Vec2::ZERO).x, -10.0);
}

// -----------------------------------------------------------------------------
// Jump tests
// -----------------------------------------------------------------------------

#[test]
fn test_jump_impulse_matches_apex_formula() {
    // sqrt(2 * 9.8 * 1.0) ~= 4.427
    let impulse = jump_impulse_for(9.8, 1.0);
    assert!((impulse - 4.427).abs() < 1e-3);
}

#[test]
fn test_jump_impulse_is_deterministic() {
    assert_eq!(jump_impulse_for(980.0, 120.0), jump_impulse_for(980.0, 120.0));
}

#[test]
fn test_jump_impulse_vec_is_upward_and_mass_scaled() {
    let impulse = jump_impulse_vec(4.43, 2.0);
    assert_eq!(impulse, Vec2::new(0.0, 8.86));
}

#[test]
fn test_jump_fires_only_on_press_edge_while_grounded() {
    assert!(wants_jump_impulse(true, true));
    // Held key, no new edge: must not re-trigger.
    assert!(!wants_jump_impulse(false, true));
    // Press edge mid-air: latches the key but no impulse.
    assert!(!wants_jump_impulse(true, false));
    assert!(!wants_jump_impulse(false, false));
}

// -----------------------------------------------------------------------------
// Partial-jump regulator tests
// -----------------------------------------------------------------------------

#[test]
fn test_counter_force_applied_after_release_while_ascending() {
    let cf = Vec2::new(0.0, -20.0);
    assert_eq!(counter_force(true, false, 5.0, cf), Some(cf));
}

#[test]
fn test_counter_force_held_key_does_nothing() {
    let cf = Vec2::new(0.0, -20.0);
    assert_eq!(counter_force(true, true, 5.0, cf), None);
}

#[test]
fn test_counter_force_stops_once_descending() {
    let cf = Vec2::new(0.0, -20.0);
    assert_eq!(counter_force(true, false, 0.0, cf), None);
    assert_eq!(counter_force(true, false, -3.0, cf), None);
}

#[test]
fn test_counter_force_inactive_on_ground() {
    let cf = Vec2::new(0.0, -20.0);
    assert_eq!(counter_force(false, false, 5.0, cf), None);
}

// -----------------------------------------------------------------------------
// Landing edge tests
// -----------------------------------------------------------------------------

#[test]
fn test_landing_edge_fires_exactly_on_transition() {
    assert!(landed(false, true));
    assert!(!landed(true, true)); // sustained grounded
    assert!(!landed(false, false)); // sustained airborne
    assert!(!landed(true, false)); // leaving ground
}

// -----------------------------------------------------------------------------
// Wall contact tests
// -----------------------------------------------------------------------------

#[test]
fn test_wall_contact_requires_both_sides() {
    // Literal AND semantics: a single-side hit is not wall contact.
    assert!(wall_contact(true, true));
    assert!(!wall_contact(true, false));
    assert!(!wall_contact(false, true));
    assert!(!wall_contact(false, false));
}

// -----------------------------------------------------------------------------
// Falling tests
// -----------------------------------------------------------------------------

#[test]
fn test_falling_threshold() {
    assert!(is_falling(-0.6));
    assert!(!is_falling(FALLING_VELOCITY_THRESHOLD));
    assert!(!is_falling(-0.4));
    assert!(!is_falling(0.0));
    assert!(!is_falling(3.0));
}

// -----------------------------------------------------------------------------
// Facing and knockback tests
// -----------------------------------------------------------------------------

#[test]
fn test_facing_follows_velocity_sign() {
    assert_eq!(next_facing(Facing::Left, 5.0), Facing::Right);
    assert_eq!(next_facing(Facing::Right, -5.0), Facing::Left);
}

#[test]
fn test_facing_holds_when_stationary() {
    assert_eq!(next_facing(Facing::Left, 0.0), Facing::Left);
    assert_eq!(next_facing(Facing::Right, 0.0), Facing::Right);
}

#[test]
fn test_knockback_opposes_facing() {
    assert_eq!(knockback_direction(Facing::Right), Vec2::NEG_X);
    assert_eq!(knockback_direction(Facing::Left), Vec2::X);
}

#[test]
fn test_knockback_impulse_is_mass_scaled_and_opposes_facing() {
    assert_eq!(
        knockback_impulse(Facing::Right, 300.0, 2.0),
        Vec2::new(-600.0, 0.0)
    );
    assert_eq!(
        knockback_impulse(Facing::Left, 300.0, 0.5),
        Vec2::new(150.0, 0.0)
    );
}

#[test]
fn test_knockback_does_not_alter_facing() {
    let facing = Facing::Right;
    let _ = knockback_direction(facing);
    assert_eq!(facing, Facing::Right);
}

// -----------------------------------------------------------------------------
// Run cue tests
// -----------------------------------------------------------------------------

#[test]
fn test_run_cue_needs_ground_and_motion() {
    assert!(run_cue_audible(true, 5.0));
    assert!(!run_cue_audible(true, 0.0));
    // Stops immediately on leaving ground, even while still moving.
    assert!(!run_cue_audible(false, 5.0));
}

// -----------------------------------------------------------------------------
// Motion state tests
// -----------------------------------------------------------------------------

#[test]
fn test_motion_state_defaults() {
    let motion = PlayerMotion::default();
    assert!(!motion.is_grounded);
    assert!(!motion.grounded_prev);
    assert!(!motion.jump_key_held);
    assert!(!motion.is_against_wall);
    assert_eq!(motion.facing, Facing::Right);
    assert_eq!(motion.jump_impulse, 0.0);
}

// -----------------------------------------------------------------------------
// Tuning tests
// -----------------------------------------------------------------------------

#[test]
fn test_default_tuning_validates() {
    assert!(PlayerTuning::default().validate().is_ok());
}

#[test]
fn test_tuning_rejects_nonpositive_speed() {
    let mut tuning = PlayerTuning::default();
    tuning.max_speed = 0.0;
    assert!(tuning.validate().is_err());
}

#[test]
fn test_tuning_rejects_upward_counter_force() {
    let mut tuning = PlayerTuning::default();
    tuning.counter_jump_force = Vec2::new(0.0, 5.0);
    assert!(tuning.validate().is_err());
}

#[test]
fn test_parse_tuning_roundtrip() {
    let contents = r#"(
        max_speed: 220.0,
        jump_height: 120.0,
        counter_jump_force: (0.0, -2200.0),
        knockback_force: 300.0,
        ground_cast_distance: 4.0,
        wall_cast_distance: 4.0,
        ground_cast_skin: 2.0,
        jump_volume: 0.8,
        landing_volume: 0.6,
    )"#;

    let tuning = parse_tuning("player.ron", contents).expect("sample tuning should parse");
    assert_eq!(tuning.max_speed, 220.0);
    assert_eq!(tuning.counter_jump_force, Vec2::new(0.0, -2200.0));
}

#[test]
fn test_parse_tuning_reports_file_on_error() {
    let err = parse_tuning("player.ron", "not ron at all").unwrap_err();
    assert_eq!(err.file, "player.ron");
    assert!(err.message.contains("Parse error"));
}

#[test]
fn test_parse_tuning_rejects_invalid_values() {
    let contents = r#"(
        max_speed: -10.0,
        jump_height: 120.0,
        counter_jump_force: (0.0, -2200.0),
        knockback_force: 300.0,
        ground_cast_distance: 4.0,
        wall_cast_distance: 4.0,
        ground_cast_skin: 2.0,
        jump_volume: 0.8,
        landing_volume: 0.6,
    )"#;

    assert!(parse_tuning("player.ron", contents).is_err());
}
