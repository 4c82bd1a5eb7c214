//! Animation domain: the player's animation state machine.

mod controller;
mod systems;
#[cfg(test)]
mod tests;

pub use controller::{AnimationController, PlayerAnimState};

use bevy::prelude::*;

use crate::core::TickSet;

pub struct AnimPlugin;

impl Plugin for AnimPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (
                systems::drive_player_state,
                systems::advance_frames,
                systems::mirror_sprite,
            )
                .chain()
                .in_set(TickSet::React),
        );
    }
}
