//! Core domain: tick ordering, camera, and world constants.

use bevy::prelude::*;

/// Ambient gravity magnitude in world units (pixels) per second squared.
pub const GRAVITY_MAGNITUDE: f32 = 980.0;

/// Ordering of the variable-rate tick.
///
/// Sensors must run before any system that consumes their output, and
/// previous-tick state is captured only after every edge check has seen
/// it. Landing/falling transitions come out wrong under any other order.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TickSet {
    /// Environment queries (ground, walls) and input sampling.
    Sense,
    /// Velocity assignment, jump impulses, attack selection.
    Decide,
    /// Downstream reactions: animation, audio, knockback.
    React,
    /// End-of-tick bookkeeping (previous-grounded capture).
    Capture,
}

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            Update,
            (
                TickSet::Sense,
                TickSet::Decide,
                TickSet::React,
                TickSet::Capture,
            )
                .chain(),
        )
        .add_systems(Startup, setup_camera);
    }
}

fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}
