//! Player domain: environment sensing via shape casts.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::player::control;
use crate::player::{GameLayer, Player, PlayerMotion, PlayerTuning};

/// Collider half extents, with a cuboid fallback matching the spawned shape.
fn half_extents(collider: &Collider) -> Vec2 {
    match collider.shape_scaled().as_cuboid() {
        Some(c) => Vec2::new(c.half_extents.x, c.half_extents.y),
        None => Vec2::new(12.0, 24.0),
    }
}

/// Box-cast downward against the platform layer.
///
/// The cast box is the collider's bounds shrunk by a skin and lowered
/// slightly, so standing flush against a wall does not read as ground.
pub(crate) fn detect_ground(
    spatial_query: SpatialQuery,
    tuning: Res<PlayerTuning>,
    mut query: Query<(&Transform, &Collider, &mut PlayerMotion), With<Player>>,
) {
    let platform_filter = SpatialQueryFilter::from_mask(GameLayer::Platform);

    for (transform, collider, mut motion) in &mut query {
        let half = half_extents(collider);
        let skin = tuning.ground_cast_skin;
        let cast_half = (half - Vec2::splat(skin)).max(Vec2::splat(1.0));
        let cast_shape = Collider::rectangle(cast_half.x * 2.0, cast_half.y * 2.0);
        let origin = transform.translation.truncate() - Vec2::new(0.0, skin);

        let hit = spatial_query.cast_shape(
            &cast_shape,
            origin,
            0.0,
            Dir2::NEG_Y,
            &ShapeCastConfig::from_max_distance(tuning.ground_cast_distance),
            &platform_filter,
        );

        motion.is_grounded = hit.is_some();
        motion.is_jumping = !motion.is_grounded;
    }
}

/// Box-cast left and right against the platform layer, full collider
/// bounds. Contact requires hits on BOTH sides (`control::wall_contact`).
pub(crate) fn detect_walls(
    spatial_query: SpatialQuery,
    tuning: Res<PlayerTuning>,
    mut query: Query<(&Transform, &Collider, &mut PlayerMotion), With<Player>>,
) {
    let platform_filter = SpatialQueryFilter::from_mask(GameLayer::Platform);

    for (transform, collider, mut motion) in &mut query {
        let half = half_extents(collider);
        let cast_shape = Collider::rectangle(half.x * 2.0, half.y * 2.0);
        let origin = transform.translation.truncate();
        let config = ShapeCastConfig::from_max_distance(tuning.wall_cast_distance);

        let left_hit = spatial_query
            .cast_shape(&cast_shape, origin, 0.0, Dir2::NEG_X, &config, &platform_filter)
            .is_some();
        let right_hit = spatial_query
            .cast_shape(&cast_shape, origin, 0.0, Dir2::X, &config, &platform_filter)
            .is_some();

        motion.is_against_wall = control::wall_contact(left_hit, right_hit);
    }
}

/// Falling is derived from vertical velocity, not from a cast.
pub(crate) fn update_fall_state(
    mut query: Query<(&LinearVelocity, &mut PlayerMotion), With<Player>>,
) {
    for (velocity, mut motion) in &mut query {
        motion.is_falling = control::is_falling(velocity.y);
    }
}
