//! Player domain: tuning load and actor bootstrap.

use avian2d::prelude::*;
use bevy::prelude::*;
use std::path::Path;

use crate::anim::AnimationController;
use crate::combat::{AttackState, WeaponAnchor, WEAPON_ANCHOR_OFFSET};
use crate::player::control;
use crate::player::resources::load_tuning;
use crate::player::{GameLayer, Player, PlayerMotion, PlayerTuning};

const TUNING_PATH: &str = "assets/data/player.ron";

pub(crate) const PLAYER_SIZE: Vec2 = Vec2::new(24.0, 48.0);

/// Load player tuning from RON, falling back to defaults on any error.
pub(crate) fn load_player_tuning(mut commands: Commands) {
    let tuning = match load_tuning(Path::new(TUNING_PATH)) {
        Ok(tuning) => {
            info!("Loaded player tuning from {}", TUNING_PATH);
            tuning
        }
        Err(e) => {
            warn!("{}; using default tuning", e);
            PlayerTuning::default()
        }
    };
    commands.insert_resource(tuning);
}

/// Spawn the player actor with its weapon anchor.
///
/// The jump impulse is derived here, once, from ambient gravity and the
/// configured apex height; it stays fixed for the session.
pub(crate) fn spawn_player(
    mut commands: Commands,
    tuning: Res<PlayerTuning>,
    gravity: Res<Gravity>,
) {
    let jump_impulse = control::jump_impulse_for(gravity.0.length(), tuning.jump_height);
    info!(
        "Spawning player: max_speed={}, jump_height={}, jump_impulse={:.1}",
        tuning.max_speed, tuning.jump_height, jump_impulse
    );

    let player = commands
        .spawn((
            // Identity & motion
            (
                Player,
                PlayerMotion {
                    jump_impulse,
                    ..default()
                },
                AttackState::default(),
                AnimationController::default(),
            ),
            // Rendering
            Sprite {
                color: Color::srgb(0.9, 0.9, 0.9),
                custom_size: Some(PLAYER_SIZE),
                ..default()
            },
            Transform::from_xyz(0.0, 0.0, 0.0),
            // Physics
            (
                RigidBody::Dynamic,
                Collider::rectangle(PLAYER_SIZE.x, PLAYER_SIZE.y),
                LockedAxes::ROTATION_LOCKED,
                LinearVelocity::default(),
                Friction::new(0.0),
                CollisionLayers::new(
                    GameLayer::Player,
                    [GameLayer::Platform, GameLayer::Target],
                ),
            ),
        ))
        .id();

    // The slash effect parents to this anchor, so it rides the sword.
    commands.spawn((
        WeaponAnchor,
        Transform::from_xyz(WEAPON_ANCHOR_OFFSET, 0.0, 0.0),
        Visibility::default(),
        ChildOf(player),
    ));
}
