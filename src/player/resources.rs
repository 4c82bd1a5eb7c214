//! Player domain: input sampling and tuning resources.

use bevy::prelude::*;
use ron::Options;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Edge-detected and level input state, sampled once per tick.
#[derive(Resource, Debug, Default)]
pub struct PlayerInput {
    /// Horizontal axis in [-1, 1].
    pub axis: f32,
    pub jump_just_pressed: bool,
    pub jump_just_released: bool,
    pub attack_just_pressed: bool,
}

/// Numeric tunables for the player actor, fixed at initialization.
#[derive(Resource, Debug, Clone)]
pub struct PlayerTuning {
    /// Horizontal speed cap.
    pub max_speed: f32,
    /// Desired apex height above ground for a full jump.
    pub jump_height: f32,
    /// Continuous deceleration applied during an abandoned ascent.
    pub counter_jump_force: Vec2,
    /// Impulse magnitude applied per unit mass on a sword hit.
    pub knockback_force: f32,
    /// Extra distance of the downward ground cast.
    pub ground_cast_distance: f32,
    /// Extra distance of the lateral wall casts.
    pub wall_cast_distance: f32,
    /// Shrink applied to the ground-cast box to avoid edge false-positives.
    pub ground_cast_skin: f32,
    pub jump_volume: f32,
    pub landing_volume: f32,
}

impl Default for PlayerTuning {
    fn default() -> Self {
        Self {
            max_speed: 220.0,
            jump_height: 120.0,
            counter_jump_force: Vec2::new(0.0, -2200.0),
            knockback_force: 300.0,
            ground_cast_distance: 4.0,
            wall_cast_distance: 4.0,
            ground_cast_skin: 2.0,
            jump_volume: 0.8,
            landing_volume: 0.6,
        }
    }
}

impl PlayerTuning {
    /// Check for values that would break the controller outright.
    pub fn validate(&self) -> Result<(), String> {
        if self.max_speed <= 0.0 {
            return Err(format!("max_speed must be positive, got {}", self.max_speed));
        }
        if self.jump_height <= 0.0 {
            return Err(format!(
                "jump_height must be positive, got {}",
                self.jump_height
            ));
        }
        if self.counter_jump_force.y >= 0.0 {
            return Err(format!(
                "counter_jump_force must point downward, got {:?}",
                self.counter_jump_force
            ));
        }
        if self.knockback_force < 0.0 {
            return Err(format!(
                "knockback_force must not be negative, got {}",
                self.knockback_force
            ));
        }
        if self.ground_cast_distance <= 0.0 || self.wall_cast_distance <= 0.0 {
            return Err("cast distances must be positive".to_string());
        }
        Ok(())
    }
}

/// On-disk form of [`PlayerTuning`] (`assets/data/player.ron`).
#[derive(Debug, Deserialize)]
pub struct PlayerTuningDef {
    pub max_speed: f32,
    pub jump_height: f32,
    pub counter_jump_force: (f32, f32),
    pub knockback_force: f32,
    pub ground_cast_distance: f32,
    pub wall_cast_distance: f32,
    pub ground_cast_skin: f32,
    pub jump_volume: f32,
    pub landing_volume: f32,
}

impl From<PlayerTuningDef> for PlayerTuning {
    fn from(def: PlayerTuningDef) -> Self {
        Self {
            max_speed: def.max_speed,
            jump_height: def.jump_height,
            counter_jump_force: Vec2::new(def.counter_jump_force.0, def.counter_jump_force.1),
            knockback_force: def.knockback_force,
            ground_cast_distance: def.ground_cast_distance,
            wall_cast_distance: def.wall_cast_distance,
            ground_cast_skin: def.ground_cast_skin,
            jump_volume: def.jump_volume,
            landing_volume: def.landing_volume,
        }
    }
}

/// Error type for tuning-file load failures.
#[derive(Debug)]
pub struct TuningLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for TuningLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Parse a tuning file's contents and validate the result.
pub fn parse_tuning(file: &str, contents: &str) -> Result<PlayerTuning, TuningLoadError> {
    let def: PlayerTuningDef = ron_options()
        .from_str(contents)
        .map_err(|e| TuningLoadError {
            file: file.to_string(),
            message: format!("Parse error: {}", e),
        })?;

    let tuning = PlayerTuning::from(def);
    tuning.validate().map_err(|message| TuningLoadError {
        file: file.to_string(),
        message,
    })?;

    Ok(tuning)
}

/// Load tuning from a RON file on disk.
pub fn load_tuning(path: &Path) -> Result<PlayerTuning, TuningLoadError> {
    let file = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| TuningLoadError {
        file: file.clone(),
        message: format!("IO error: {}", e),
    })?;
    parse_tuning(&file, &contents)
}
