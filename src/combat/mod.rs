//! Combat domain: attack combo triggering and the slash hit effect.

mod components;
mod events;
mod resources;
mod systems;

pub use components::{
    should_start_attack, AttackState, AttackVariant, Slash, SlashLifetime, TrainingDummy,
    WeaponAnchor, SLASH_FRAME, SLASH_LIFETIME, WEAPON_ANCHOR_OFFSET,
};
pub use events::{AttackTriggeredEvent, KnockbackEvent};
pub use resources::AttackRng;

use bevy::prelude::*;

use crate::core::TickSet;

pub struct CombatPlugin;

impl Plugin for CombatPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<AttackRng>()
            .add_message::<AttackTriggeredEvent>()
            .add_message::<KnockbackEvent>()
            .add_systems(Update, systems::trigger_attack.in_set(TickSet::Decide))
            .add_systems(
                Update,
                (
                    systems::mirror_weapon_anchor,
                    systems::spawn_slash,
                    systems::tick_slash_lifetimes,
                    systems::detect_slash_hits,
                    systems::apply_knockback,
                )
                    .chain()
                    .in_set(TickSet::React),
            );
    }
}
