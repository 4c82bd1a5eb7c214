//! Combat domain: attack variants, slash effect, and anchors.

use bevy::prelude::*;
use rand::Rng;

/// Local offset of the weapon anchor from the player's center.
pub const WEAPON_ANCHOR_OFFSET: f32 = 16.0;

/// Seconds a slash effect lives before self-destructing.
pub const SLASH_LIFETIME: f32 = 0.5;

/// Attack-animation frame on which the slash effect spawns.
pub const SLASH_FRAME: u32 = 1;

pub const SLASH_SIZE: Vec2 = Vec2::new(28.0, 20.0);

/// The two sword swing variants, selected uniformly at random.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttackVariant {
    One,
    Two,
}

impl AttackVariant {
    pub fn random(rng: &mut impl Rng) -> Self {
        if rng.random_range(0..2) == 0 {
            AttackVariant::One
        } else {
            AttackVariant::Two
        }
    }
}

/// An attack starts only on a press edge while no attack animation is
/// active. Held keys and repeat ticks do not re-trigger.
pub fn should_start_attack(just_pressed: bool, attack_active: bool) -> bool {
    just_pressed && !attack_active
}

/// Per-attack bookkeeping on the player.
#[derive(Component, Debug, Default)]
pub struct AttackState {
    /// Set once the current swing has spawned its slash effect.
    pub slash_spawned: bool,
}

/// Attachment point for the slash effect, child of the player.
#[derive(Component, Debug)]
pub struct WeaponAnchor;

/// Short-lived hit-detection effect. Carries an explicit handle to its
/// owner; no scene lookup involved.
#[derive(Component, Debug)]
pub struct Slash {
    pub owner: Entity,
}

/// Countdown to slash despawn, in seconds.
#[derive(Component, Debug)]
pub struct SlashLifetime(pub f32);

/// Static target the slash can collide with.
#[derive(Component, Debug)]
pub struct TrainingDummy;
