//! Player domain: sensing, locomotion, and the partial-jump regulator.
//!
//! The per-tick loop is: sense ground/walls, decide velocity and
//! impulses from input edges, emit landing edges, then capture
//! previous-tick state. The partial-jump counter-force runs on the
//! fixed physics step.

mod bootstrap;
mod components;
pub mod control;
mod dev;
mod events;
mod resources;
mod systems;
#[cfg(test)]
mod tests;

pub use components::{Facing, GameLayer, Platform, Player, PlayerMotion};
pub use events::{JumpedEvent, LandedEvent};
pub use resources::{PlayerInput, PlayerTuning};

use bevy::prelude::*;

use crate::core::TickSet;

pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PlayerInput>()
            .add_message::<JumpedEvent>()
            .add_message::<LandedEvent>()
            .add_systems(
                Startup,
                (
                    bootstrap::load_player_tuning,
                    bootstrap::spawn_player,
                    dev::spawn_test_room,
                )
                    .chain(),
            )
            .add_systems(
                Update,
                (
                    systems::read_input,
                    systems::detect_ground,
                    systems::detect_walls,
                    systems::update_fall_state,
                )
                    .chain()
                    .in_set(TickSet::Sense),
            )
            .add_systems(
                Update,
                (
                    systems::apply_run,
                    systems::apply_jump,
                    systems::update_facing,
                    systems::emit_ground_edges,
                )
                    .chain()
                    .in_set(TickSet::Decide),
            )
            .add_systems(Update, systems::capture_grounded_prev.in_set(TickSet::Capture))
            .add_systems(FixedUpdate, systems::regulate_partial_jump);
    }
}
