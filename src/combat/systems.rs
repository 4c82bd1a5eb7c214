//! Combat domain: attack triggering, slash effect, and knockback.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::anim::AnimationController;
use crate::combat::components::{
    should_start_attack, AttackState, AttackVariant, Slash, SlashLifetime, TrainingDummy,
    WeaponAnchor, SLASH_FRAME, SLASH_LIFETIME, SLASH_SIZE, WEAPON_ANCHOR_OFFSET,
};
use crate::combat::events::{AttackTriggeredEvent, KnockbackEvent};
use crate::combat::resources::AttackRng;
use crate::player::control;
use crate::player::{GameLayer, Player, PlayerInput, PlayerMotion, PlayerTuning};

/// Start a swing on the attack press edge, unless an attack animation
/// is already playing. Variant choice is uniform between the two swings.
pub(crate) fn trigger_attack(
    input: Res<PlayerInput>,
    mut rng: ResMut<AttackRng>,
    mut query: Query<(Entity, &AnimationController, &mut AttackState), With<Player>>,
    mut attacks: MessageWriter<AttackTriggeredEvent>,
) {
    for (entity, controller, mut attack_state) in &mut query {
        if should_start_attack(input.attack_just_pressed, controller.is_attack_active()) {
            let variant = AttackVariant::random(&mut rng.0);
            attack_state.slash_spawned = false;
            attacks.write(AttackTriggeredEvent { entity, variant });
            debug!("Attack triggered: {:?}", variant);
        }
    }
}

/// Keep the weapon anchor on the side the player faces.
pub(crate) fn mirror_weapon_anchor(
    player: Query<&PlayerMotion, With<Player>>,
    mut anchors: Query<&mut Transform, With<WeaponAnchor>>,
) {
    let Ok(motion) = player.single() else {
        return;
    };
    for mut transform in &mut anchors {
        transform.translation.x = WEAPON_ANCHOR_OFFSET * motion.facing.sign();
    }
}

/// Spawn the slash effect when the swing reaches its strike frame.
///
/// The effect is a sensor hitbox parented to the weapon anchor and
/// carries its owner entity directly.
pub(crate) fn spawn_slash(
    mut commands: Commands,
    mut players: Query<(Entity, &AnimationController, &mut AttackState), With<Player>>,
    anchors: Query<Entity, With<WeaponAnchor>>,
) {
    let Ok(anchor) = anchors.single() else {
        return;
    };

    for (owner, controller, mut attack_state) in &mut players {
        if !controller.is_attack_active()
            || attack_state.slash_spawned
            || controller.current_frame < SLASH_FRAME
        {
            continue;
        }

        attack_state.slash_spawned = true;
        commands.spawn((
            Slash { owner },
            SlashLifetime(SLASH_LIFETIME),
            Sprite {
                color: Color::srgba(1.0, 1.0, 0.8, 0.5),
                custom_size: Some(SLASH_SIZE),
                ..default()
            },
            Transform::default(),
            Collider::rectangle(SLASH_SIZE.x, SLASH_SIZE.y),
            Sensor,
            CollisionEventsEnabled,
            CollisionLayers::new(GameLayer::Hitbox, [GameLayer::Target]),
            ChildOf(anchor),
        ));
        debug!("Slash spawned");
    }
}

/// Tick down and despawn expired slashes.
pub(crate) fn tick_slash_lifetimes(
    mut commands: Commands,
    time: Res<Time>,
    mut query: Query<(Entity, &mut SlashLifetime)>,
) {
    let dt = time.delta_secs();
    for (entity, mut lifetime) in &mut query {
        lifetime.0 -= dt;
        if lifetime.0 <= 0.0 {
            commands.entity(entity).despawn();
        }
    }
}

/// A slash overlapping a target knocks its owner back.
pub(crate) fn detect_slash_hits(
    mut collisions: MessageReader<CollisionStart>,
    slashes: Query<&Slash>,
    targets: Query<(), With<TrainingDummy>>,
    mut knockbacks: MessageWriter<KnockbackEvent>,
) {
    for event in collisions.read() {
        let pairs = [
            (event.collider1, event.collider2),
            (event.collider2, event.collider1),
        ];

        for (slash_entity, target_entity) in pairs {
            if let Ok(slash) = slashes.get(slash_entity) {
                if targets.get(target_entity).is_ok() {
                    debug!("Sword hit");
                    knockbacks.write(KnockbackEvent {
                        target: slash.owner,
                    });
                }
            }
        }
    }
}

/// Apply the knockback impulse opposite facing. Facing itself is left
/// untouched.
pub(crate) fn apply_knockback(
    mut knockbacks: MessageReader<KnockbackEvent>,
    tuning: Res<PlayerTuning>,
    mut query: Query<(&PlayerMotion, &ComputedMass, Forces)>,
) {
    for event in knockbacks.read() {
        if let Ok((motion, mass, mut forces)) = query.get_mut(event.target) {
            let impulse =
                control::knockback_impulse(motion.facing, tuning.knockback_force, mass.value());
            forces.apply_linear_impulse(impulse);
            debug!("Knockback: impulse={:?}", impulse);
        }
    }
}
