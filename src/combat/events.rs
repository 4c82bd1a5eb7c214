//! Combat domain: attack and knockback events.

use bevy::ecs::message::Message;
use bevy::prelude::*;

use crate::combat::AttackVariant;

/// Fired when an attack press edge passes the re-trigger gate.
#[derive(Debug)]
pub struct AttackTriggeredEvent {
    pub entity: Entity,
    pub variant: AttackVariant,
}

impl Message for AttackTriggeredEvent {}

/// Request a knockback impulse on `target`, opposite its facing.
/// Sent by the slash effect on overlap; applied next tick.
#[derive(Debug)]
pub struct KnockbackEvent {
    pub target: Entity,
}

impl Message for KnockbackEvent {}
