//! Animation domain: tests for the controller state machine.

use super::controller::{AnimationController, PlayerAnimState};
use crate::combat::AttackVariant;

#[test]
fn test_default_controller_idles_and_loops() {
    let controller = AnimationController::default();
    assert_eq!(controller.state, PlayerAnimState::Idle);
    assert!(controller.looping);
    assert!(!controller.finished);
}

#[test]
fn test_set_state_resets_playback() {
    let mut controller = AnimationController::default();
    controller.current_frame = 3;
    controller.frame_timer = 0.1;

    controller.set_state(PlayerAnimState::Run);
    assert_eq!(controller.current_frame, 0);
    assert_eq!(controller.frame_timer, 0.0);
    assert_eq!(controller.previous_state, PlayerAnimState::Idle);
}

#[test]
fn test_set_state_same_state_is_a_no_op() {
    let mut controller = AnimationController::default();
    controller.current_frame = 2;
    controller.set_state(PlayerAnimState::Idle);
    assert_eq!(controller.current_frame, 2);
}

#[test]
fn test_attack_animation_is_non_looping() {
    let mut controller = AnimationController::default();
    controller.set_state(PlayerAnimState::Attack(AttackVariant::One));
    assert!(!controller.looping);
    assert_eq!(controller.total_frames, 3);
    assert!(controller.frame_duration < 0.15);
}

#[test]
fn test_attack_active_until_playback_finishes() {
    let mut controller = AnimationController::default();
    controller.set_state(PlayerAnimState::Attack(AttackVariant::Two));
    assert!(controller.is_attack_active());

    // Play the whole swing through.
    controller.advance(1.0);
    assert!(controller.finished);
    assert!(!controller.is_attack_active());
}

#[test]
fn test_looping_animation_wraps_frames() {
    let mut controller = AnimationController::default();
    controller.set_state(PlayerAnimState::Run);

    // 6 frames at 0.15s; 1.0s lands past one full cycle.
    controller.advance(1.0);
    assert!(!controller.finished);
    assert!(controller.current_frame < controller.total_frames);
}

#[test]
fn test_non_looping_animation_holds_last_frame() {
    let mut controller = AnimationController::default();
    controller.set_state(PlayerAnimState::Jump);
    controller.advance(10.0);
    assert!(controller.finished);
    assert_eq!(controller.current_frame, controller.total_frames - 1);
}

#[test]
fn test_attack_variant_suffixes_are_distinct() {
    let mut one = AnimationController::default();
    one.set_state(PlayerAnimState::Attack(AttackVariant::One));
    let mut two = AnimationController::default();
    two.set_state(PlayerAnimState::Attack(AttackVariant::Two));

    assert_eq!(one.animation_suffix(), "attack_1");
    assert_eq!(two.animation_suffix(), "attack_2");
    assert_ne!(one.animation_suffix(), two.animation_suffix());
}
