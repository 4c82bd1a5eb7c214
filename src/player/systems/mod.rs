//! Player domain: system modules for the per-tick control loop.

pub(crate) mod input;
pub(crate) mod locomotion;
pub(crate) mod sensors;

pub(crate) use input::read_input;
pub(crate) use locomotion::{
    apply_jump, apply_run, capture_grounded_prev, emit_ground_edges, regulate_partial_jump,
    update_facing,
};
pub(crate) use sensors::{detect_ground, detect_walls, update_fall_state};
