//! Player domain: motion edge events.

use bevy::ecs::message::Message;
use bevy::prelude::*;

/// Fired on the tick a grounded jump impulse is applied.
#[derive(Debug)]
pub struct JumpedEvent {
    pub entity: Entity,
}

impl Message for JumpedEvent {}

/// Fired exactly once on the tick grounded transitions false -> true.
#[derive(Debug)]
pub struct LandedEvent {
    pub entity: Entity,
}

impl Message for LandedEvent {}
