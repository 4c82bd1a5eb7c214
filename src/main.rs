mod anim;
mod audio;
mod combat;
mod core;
#[cfg(feature = "dev-tools")]
mod debug;
mod player;

use avian2d::prelude::*;
use bevy::prelude::*;

fn main() {
    let mut app = App::new();
    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Hollowridge".to_string(),
            resolution: (1280, 720).into(),
            resizable: true,
            ..default()
        }),
        ..default()
    }))
    .add_plugins(PhysicsPlugins::default())
    .insert_resource(Gravity(Vec2::NEG_Y * core::GRAVITY_MAGNITUDE))
    .add_plugins((
        core::CorePlugin,
        player::PlayerPlugin,
        combat::CombatPlugin,
        anim::AnimPlugin,
        audio::AudioPlugin,
    ));

    #[cfg(feature = "dev-tools")]
    app.add_plugins(debug::DebugPlugin);

    app.run();
}
