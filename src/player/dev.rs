//! Player domain: test room spawn.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::combat::TrainingDummy;
use crate::player::{GameLayer, Platform};

pub(crate) fn spawn_test_room(mut commands: Commands) {
    let wall_color = Color::srgb(0.3, 0.3, 0.4);
    let ground_color = Color::srgb(0.4, 0.5, 0.4);
    let platform_color = Color::srgb(0.5, 0.4, 0.3);

    let platform_layers =
        CollisionLayers::new(GameLayer::Platform, [GameLayer::Player]);

    // Ground
    commands.spawn((
        Platform,
        Sprite {
            color: ground_color,
            custom_size: Some(Vec2::new(1000.0, 40.0)),
            ..default()
        },
        Transform::from_xyz(0.0, -220.0, 0.0),
        RigidBody::Static,
        Collider::rectangle(1000.0, 40.0),
        platform_layers,
    ));

    // Left wall
    commands.spawn((
        Platform,
        Sprite {
            color: wall_color,
            custom_size: Some(Vec2::new(40.0, 520.0)),
            ..default()
        },
        Transform::from_xyz(-520.0, 40.0, 0.0),
        RigidBody::Static,
        Collider::rectangle(40.0, 520.0),
        platform_layers,
    ));

    // Right wall
    commands.spawn((
        Platform,
        Sprite {
            color: wall_color,
            custom_size: Some(Vec2::new(40.0, 520.0)),
            ..default()
        },
        Transform::from_xyz(520.0, 40.0, 0.0),
        RigidBody::Static,
        Collider::rectangle(40.0, 520.0),
        platform_layers,
    ));

    // Low platform
    commands.spawn((
        Platform,
        Sprite {
            color: platform_color,
            custom_size: Some(Vec2::new(160.0, 20.0)),
            ..default()
        },
        Transform::from_xyz(-260.0, -80.0, 0.0),
        RigidBody::Static,
        Collider::rectangle(160.0, 20.0),
        platform_layers,
    ));

    // High platform
    commands.spawn((
        Platform,
        Sprite {
            color: platform_color,
            custom_size: Some(Vec2::new(160.0, 20.0)),
            ..default()
        },
        Transform::from_xyz(260.0, 40.0, 0.0),
        RigidBody::Static,
        Collider::rectangle(160.0, 20.0),
        platform_layers,
    ));

    // Training dummy for sword-hit knockback
    commands.spawn((
        TrainingDummy,
        Sprite {
            color: Color::srgb(0.8, 0.4, 0.4),
            custom_size: Some(Vec2::new(24.0, 48.0)),
            ..default()
        },
        Transform::from_xyz(160.0, -176.0, 0.0),
        RigidBody::Static,
        Collider::rectangle(24.0, 48.0),
        CollisionLayers::new(GameLayer::Target, [GameLayer::Player, GameLayer::Hitbox]),
    ));
}
