//! Animation domain: state selection, frame stepping, and mirroring.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::anim::{AnimationController, PlayerAnimState};
use crate::combat::AttackTriggeredEvent;
use crate::player::control::RUN_EPSILON;
use crate::player::{Player, PlayerMotion};

use avian2d::prelude::LinearVelocity;

/// Pick the next animation state from motion state and attack triggers.
/// An in-flight attack holds the state until its last frame.
pub(crate) fn drive_player_state(
    mut attacks: MessageReader<AttackTriggeredEvent>,
    mut query: Query<(Entity, &PlayerMotion, &LinearVelocity, &mut AnimationController), With<Player>>,
) {
    for event in attacks.read() {
        if let Ok((_, _, _, mut controller)) = query.get_mut(event.entity) {
            controller.set_state(PlayerAnimState::Attack(event.variant));
            debug!("Animation: {}", controller.animation_suffix());
        }
    }

    for (_, motion, velocity, mut controller) in &mut query {
        if controller.is_attack_active() {
            continue;
        }

        let next = if motion.is_against_wall && !motion.is_grounded {
            PlayerAnimState::WallPress
        } else if motion.is_falling {
            PlayerAnimState::Fall
        } else if motion.is_jumping {
            PlayerAnimState::Jump
        } else if velocity.x.abs() > RUN_EPSILON {
            PlayerAnimState::Run
        } else {
            PlayerAnimState::Idle
        };

        if next != controller.state {
            controller.set_state(next);
            debug!("Animation: {}", controller.animation_suffix());
        }
    }
}

pub(crate) fn advance_frames(time: Res<Time>, mut query: Query<&mut AnimationController>) {
    let dt = time.delta_secs();
    for mut controller in &mut query {
        controller.advance(dt);
    }
}

/// Mirror the sprite to match facing.
pub(crate) fn mirror_sprite(mut query: Query<(&PlayerMotion, &mut Sprite), With<Player>>) {
    for (motion, mut sprite) in &mut query {
        sprite.flip_x = matches!(motion.facing, crate::player::Facing::Left);
    }
}
