//! Player domain: locomotion decisions and force application.

use avian2d::prelude::*;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::player::control;
use crate::player::{JumpedEvent, LandedEvent, Player, PlayerInput, PlayerMotion, PlayerTuning};

/// Horizontal velocity is assigned outright every tick; no acceleration
/// curve. Vertical velocity is left to the physics integration.
pub(crate) fn apply_run(
    input: Res<PlayerInput>,
    tuning: Res<PlayerTuning>,
    mut query: Query<&mut LinearVelocity, With<Player>>,
) {
    for mut velocity in &mut query {
        velocity.0 = control::run_velocity(input.axis, tuning.max_speed, velocity.0);
    }
}

/// Jump key latching and the grounded jump impulse.
///
/// The press edge latches `jump_key_held` whether grounded or not; the
/// release edge clears it regardless of state, so the partial-jump
/// regulator sees releases that happen mid-air.
pub(crate) fn apply_jump(
    input: Res<PlayerInput>,
    mut query: Query<(Entity, &mut PlayerMotion, &ComputedMass, Forces), With<Player>>,
    mut jumped: MessageWriter<JumpedEvent>,
) {
    for (entity, mut motion, mass, mut forces) in &mut query {
        if input.jump_just_pressed {
            motion.jump_key_held = true;

            if motion.is_grounded {
                motion.is_jumping = true;
                forces.apply_linear_impulse(control::jump_impulse_vec(
                    motion.jump_impulse,
                    mass.value(),
                ));
                jumped.write(JumpedEvent { entity });
                debug!("Jump: impulse={:.1} mass={:.2}", motion.jump_impulse, mass.value());
            }
        } else if input.jump_just_released {
            motion.jump_key_held = false;
        }
    }
}

/// Facing follows the sign of horizontal velocity while moving; it
/// holds its last value when (near-)stationary.
pub(crate) fn update_facing(
    mut query: Query<(&LinearVelocity, &mut PlayerMotion), With<Player>>,
) {
    for (velocity, mut motion) in &mut query {
        motion.facing = control::next_facing(motion.facing, velocity.x);
    }
}

/// Emit the landing edge. Runs before `capture_grounded_prev`, which is
/// what makes the edge one-tick-wide.
pub(crate) fn emit_ground_edges(
    query: Query<(Entity, &PlayerMotion), With<Player>>,
    mut landed: MessageWriter<LandedEvent>,
) {
    for (entity, motion) in &query {
        if control::landed(motion.grounded_prev, motion.is_grounded) {
            landed.write(LandedEvent { entity });
            debug!("Landed");
        } else if motion.grounded_prev && !motion.is_grounded {
            debug!("Left ground");
        }
    }
}

/// End-of-tick capture of the grounded flag for next tick's edge checks.
pub(crate) fn capture_grounded_prev(mut query: Query<&mut PlayerMotion, With<Player>>) {
    for mut motion in &mut query {
        motion.grounded_prev = motion.is_grounded;
    }
}

/// Partial-jump regulation on the fixed physics step.
///
/// While airborne from a jump with the key released and still
/// ascending, a continuous counter-force shortens the arc, so apex
/// height tracks how long the key was held.
pub(crate) fn regulate_partial_jump(
    tuning: Res<PlayerTuning>,
    mut query: Query<(&PlayerMotion, &LinearVelocity, &ComputedMass, Forces), With<Player>>,
) {
    for (motion, velocity, mass, mut forces) in &mut query {
        if let Some(counter) = control::counter_force(
            motion.is_jumping,
            motion.jump_key_held,
            velocity.y,
            tuning.counter_jump_force,
        ) {
            forces.apply_force(counter * mass.value());
        }
    }
}
