//! Player domain: components and physics layers for the controllable actor.

use avian2d::prelude::*;
use bevy::prelude::*;

/// Physics layers for collision and shape-cast filtering.
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Collidable ground and wall geometry.
    Platform,
    /// Player character.
    Player,
    /// Short-lived attack hitboxes.
    Hitbox,
    /// Things a slash can hit (training dummies for now).
    Target,
}

#[derive(Component, Debug)]
pub struct Player;

/// Marker for platform colliders (ground, walls, ledges).
#[derive(Component, Debug)]
pub struct Platform;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

impl Facing {
    /// Sign of the facing direction (+1 right, -1 left).
    pub fn sign(self) -> f32 {
        match self {
            Facing::Right => 1.0,
            Facing::Left => -1.0,
        }
    }
}

/// Per-tick motion state of the player actor.
///
/// Owned exclusively by the player entity and overwritten every tick.
/// `grounded_prev` trails `is_grounded` by exactly one tick and exists
/// only to edge-detect landings; it is captured in [`crate::core::TickSet::Capture`],
/// after every system that compares the two has run.
#[derive(Component, Debug, Default)]
pub struct PlayerMotion {
    pub is_grounded: bool,
    pub grounded_prev: bool,
    /// Airborne flag. Mirrors `!is_grounded` except on the tick a jump
    /// impulse is applied, where it is set true pre-emptively.
    pub is_jumping: bool,
    /// Latched between the jump press edge and release edge, tracked
    /// even mid-air so the partial-jump regulator can react.
    pub jump_key_held: bool,
    pub is_falling: bool,
    /// Literal both-sides wall contact. See `control::wall_contact`.
    pub is_against_wall: bool,
    pub facing: Facing,
    /// Upward impulse per unit mass, derived once at bootstrap from
    /// gravity and the configured jump height. Never recomputed.
    pub jump_impulse: f32,
}
