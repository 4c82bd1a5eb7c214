//! Player domain: pure per-tick decision helpers.
//!
//! Every branch the controller takes lives here as a plain function of
//! its inputs, so the systems in `systems/` stay thin adapters around
//! engine reads and writes.

use bevy::prelude::*;

use crate::player::Facing;

/// Vertical velocity below which the actor counts as falling.
pub const FALLING_VELOCITY_THRESHOLD: f32 = -0.5;

/// Horizontal speed above which the actor counts as running.
pub const RUN_EPSILON: f32 = f32::EPSILON;

/// Impulse per unit mass that reaches `jump_height` at apex under
/// gravity of magnitude `gravity`: `sqrt(2 * g * h)`.
pub fn jump_impulse_for(gravity: f32, jump_height: f32) -> f32 {
    (2.0 * gravity * jump_height).sqrt()
}

/// Horizontal velocity is assigned outright from the input axis; the
/// vertical component is left to the physics integration.
pub fn run_velocity(axis: f32, max_speed: f32, current: Vec2) -> Vec2 {
    Vec2::new(axis * max_speed, current.y)
}

/// A jump impulse fires only on the press edge while grounded.
pub fn wants_jump_impulse(jump_just_pressed: bool, is_grounded: bool) -> bool {
    jump_just_pressed && is_grounded
}

/// The applied jump impulse: upward, scaled by body mass.
pub fn jump_impulse_vec(jump_impulse: f32, mass: f32) -> Vec2 {
    Vec2::Y * jump_impulse * mass
}

/// The applied knockback impulse: opposite facing, scaled by body mass.
pub fn knockback_impulse(facing: Facing, knockback_force: f32, mass: f32) -> Vec2 {
    knockback_direction(facing) * knockback_force * mass
}

/// Counter-force for an abandoned ascent: active while airborne from a
/// jump, the key is no longer held, and the actor is still moving up.
pub fn counter_force(
    is_jumping: bool,
    jump_key_held: bool,
    vertical_velocity: f32,
    counter_jump_force: Vec2,
) -> Option<Vec2> {
    if is_jumping && !jump_key_held && vertical_velocity > 0.0 {
        Some(counter_jump_force)
    } else {
        None
    }
}

pub fn is_falling(vertical_velocity: f32) -> bool {
    vertical_velocity < FALLING_VELOCITY_THRESHOLD
}

/// The landing edge: airborne last tick, grounded this tick.
pub fn landed(grounded_prev: bool, grounded: bool) -> bool {
    !grounded_prev && grounded
}

/// Wall contact requires BOTH lateral casts to hit.
///
/// This reproduces the original behavior literally: it detects being
/// wedged between two walls, not touching a single wall. Suspected to
/// be an intended OR upstream; kept as-is and pinned by a regression
/// test.
pub fn wall_contact(left_hit: bool, right_hit: bool) -> bool {
    left_hit && right_hit
}

/// Facing follows the sign of horizontal velocity while moving faster
/// than [`RUN_EPSILON`], and holds its last value otherwise.
pub fn next_facing(current: Facing, horizontal_velocity: f32) -> Facing {
    if horizontal_velocity.abs() > RUN_EPSILON {
        if horizontal_velocity > 0.0 {
            Facing::Right
        } else {
            Facing::Left
        }
    } else {
        current
    }
}

/// Knockback pushes opposite the current facing and never changes it.
pub fn knockback_direction(facing: Facing) -> Vec2 {
    match facing {
        Facing::Right => Vec2::NEG_X,
        Facing::Left => Vec2::X,
    }
}

/// The looping run cue is audible only while grounded and moving.
pub fn run_cue_audible(is_grounded: bool, horizontal_velocity: f32) -> bool {
    is_grounded && horizontal_velocity.abs() > RUN_EPSILON
}
