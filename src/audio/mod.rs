//! Audio domain: jump/landing cues and the looping footsteps bed.

use avian2d::prelude::LinearVelocity;
use bevy::audio::Volume;
use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::core::TickSet;
use crate::player::control;
use crate::player::{JumpedEvent, LandedEvent, Player, PlayerMotion, PlayerTuning};

/// Loaded audio handles.
#[derive(Resource)]
pub struct GameAudio {
    pub jump: Handle<AudioSource>,
    pub landing: Handle<AudioSource>,
    pub footsteps: Handle<AudioSource>,
}

/// Marker for the persistent footsteps loop entity.
#[derive(Component)]
struct FootstepsLoop;

pub struct AudioPlugin;

impl Plugin for AudioPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_audio).add_systems(
            Update,
            (play_jump_cue, play_landing_cue, gate_footsteps).in_set(TickSet::React),
        );
    }
}

fn setup_audio(mut commands: Commands, asset_server: Res<AssetServer>) {
    let audio = GameAudio {
        jump: asset_server.load("audio/jump.ogg"),
        landing: asset_server.load("audio/landing.ogg"),
        footsteps: asset_server.load("audio/footsteps.ogg"),
    };

    // The footsteps loop exists for the whole session; it is paused and
    // resumed rather than respawned.
    commands.spawn((
        FootstepsLoop,
        AudioPlayer::new(audio.footsteps.clone()),
        PlaybackSettings {
            paused: true,
            ..PlaybackSettings::LOOP
        },
    ));

    commands.insert_resource(audio);
}

fn play_jump_cue(
    mut commands: Commands,
    mut jumped: MessageReader<JumpedEvent>,
    audio: Res<GameAudio>,
    tuning: Res<PlayerTuning>,
) {
    for _ in jumped.read() {
        commands.spawn((
            AudioPlayer::new(audio.jump.clone()),
            PlaybackSettings::DESPAWN.with_volume(Volume::Linear(tuning.jump_volume)),
        ));
    }
}

/// One landing cue per landing edge; the edge itself fires exactly once.
fn play_landing_cue(
    mut commands: Commands,
    mut landed: MessageReader<LandedEvent>,
    audio: Res<GameAudio>,
    tuning: Res<PlayerTuning>,
) {
    for _ in landed.read() {
        commands.spawn((
            AudioPlayer::new(audio.landing.clone()),
            PlaybackSettings::DESPAWN.with_volume(Volume::Linear(tuning.landing_volume)),
        ));
    }
}

/// Footsteps play only while grounded and moving; they stop the moment
/// either condition fails, including the tick the player leaves ground.
fn gate_footsteps(
    players: Query<(&PlayerMotion, &LinearVelocity), With<Player>>,
    sinks: Query<&AudioSink, With<FootstepsLoop>>,
) {
    let Ok((motion, velocity)) = players.single() else {
        return;
    };
    let Ok(sink) = sinks.single() else {
        return;
    };

    if control::run_cue_audible(motion.is_grounded, velocity.x) {
        if sink.is_paused() {
            sink.play();
        }
    } else if !sink.is_paused() {
        sink.pause();
    }
}
