//! Animation state machine and frame playback for the player sprite.

use bevy::prelude::*;

use crate::combat::AttackVariant;

/// Animation states for the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlayerAnimState {
    #[default]
    Idle,
    Run,
    Jump,
    Fall,
    /// Wedged between walls on both sides while airborne.
    WallPress,
    Attack(AttackVariant),
}

/// Frame-stepped animation playback.
///
/// Doubles as the animation-layer query surface: attack re-triggering
/// is gated on [`AnimationController::is_attack_active`].
#[derive(Component, Debug)]
pub struct AnimationController {
    pub state: PlayerAnimState,
    pub previous_state: PlayerAnimState,
    /// Current frame index (0-based).
    pub current_frame: u32,
    pub total_frames: u32,
    pub frame_timer: f32,
    /// Seconds per frame.
    pub frame_duration: f32,
    pub looping: bool,
    /// Set once a non-looping animation has shown its last frame.
    pub finished: bool,
}

impl Default for AnimationController {
    fn default() -> Self {
        Self {
            state: PlayerAnimState::Idle,
            previous_state: PlayerAnimState::Idle,
            current_frame: 0,
            total_frames: 4,
            frame_timer: 0.0,
            frame_duration: 0.15,
            looping: true,
            finished: false,
        }
    }
}

impl AnimationController {
    /// Switch state, resetting playback if the state actually changed.
    pub fn set_state(&mut self, state: PlayerAnimState) {
        if self.state == state {
            return;
        }
        self.previous_state = self.state;
        self.state = state;
        self.current_frame = 0;
        self.frame_timer = 0.0;
        self.finished = false;

        self.looping = matches!(
            state,
            PlayerAnimState::Idle | PlayerAnimState::Run | PlayerAnimState::WallPress
        );

        self.total_frames = match state {
            PlayerAnimState::Idle => 4,
            PlayerAnimState::Run => 6,
            PlayerAnimState::Jump => 2,
            PlayerAnimState::Fall => 2,
            PlayerAnimState::WallPress => 2,
            PlayerAnimState::Attack(_) => 3,
        };

        self.frame_duration = match state {
            PlayerAnimState::Attack(_) => 0.08,
            _ => 0.15,
        };
    }

    /// Whether an attack animation is currently playing. Used to
    /// suppress attack re-triggering mid-swing.
    pub fn is_attack_active(&self) -> bool {
        matches!(self.state, PlayerAnimState::Attack(_)) && !self.finished
    }

    /// Sprite-sheet name suffix for the current state.
    pub fn animation_suffix(&self) -> &'static str {
        match self.state {
            PlayerAnimState::Idle => "idle",
            PlayerAnimState::Run => "run",
            PlayerAnimState::Jump => "jump",
            PlayerAnimState::Fall => "fall",
            PlayerAnimState::WallPress => "wall_press",
            PlayerAnimState::Attack(AttackVariant::One) => "attack_1",
            PlayerAnimState::Attack(AttackVariant::Two) => "attack_2",
        }
    }

    /// Advance playback by `dt` seconds.
    pub fn advance(&mut self, dt: f32) {
        if self.finished {
            return;
        }

        self.frame_timer += dt;
        while self.frame_timer >= self.frame_duration {
            self.frame_timer -= self.frame_duration;
            self.current_frame += 1;

            if self.current_frame >= self.total_frames {
                if self.looping {
                    self.current_frame = 0;
                } else {
                    self.current_frame = self.total_frames - 1;
                    self.finished = true;
                    break;
                }
            }
        }
    }
}
