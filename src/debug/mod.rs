//! Debug overlay: sensor-cast gizmo rays (dev-tools builds only).

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::player::{Player, PlayerMotion};

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, draw_ground_cast_rays);
    }
}

/// Three rays framing the grounded box cast: one down each side of the
/// collider, one across the bottom. Green while grounded, red while not.
fn draw_ground_cast_rays(
    mut gizmos: Gizmos,
    query: Query<(&Transform, &Collider, &PlayerMotion), With<Player>>,
) {
    for (transform, collider, motion) in &query {
        let half = match collider.shape_scaled().as_cuboid() {
            Some(c) => Vec2::new(c.half_extents.x, c.half_extents.y),
            None => Vec2::new(12.0, 24.0),
        };
        let center = transform.translation.truncate();
        let color = if motion.is_grounded {
            Color::srgb(0.0, 1.0, 0.0)
        } else {
            Color::srgb(1.0, 0.0, 0.0)
        };

        let right_top = center + Vec2::new(half.x, 0.0);
        let left_top = center - Vec2::new(half.x, 0.0);
        let bottom_left = center - half;

        gizmos.line_2d(right_top, right_top - Vec2::new(0.0, half.y), color);
        gizmos.line_2d(left_top, left_top - Vec2::new(0.0, half.y), color);
        gizmos.line_2d(bottom_left, bottom_left + Vec2::new(half.x * 2.0, 0.0), color);
    }
}
