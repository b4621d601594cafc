mod battle;
mod content;
mod core;
#[cfg(feature = "dev-tools")]
mod debug;
mod juice;
mod menu;
mod progress;
mod transition;
mod tween;
mod worlds;

use bevy::prelude::*;

fn main() {
    let mut app = App::new();
    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Quested".to_string(),
            resolution: (1280, 720).into(),
            resizable: true,
            ..default()
        }),
        ..default()
    }))
    .insert_resource(ClearColor(Color::BLACK))
    .add_plugins((
        core::CorePlugin,
        content::ContentPlugin,
        progress::ProgressPlugin,
        transition::TransitionPlugin,
        juice::JuicePlugin,
        menu::MenuPlugin,
        worlds::WorldsPlugin,
        battle::BattlePlugin,
    ));

    #[cfg(feature = "dev-tools")]
    app.add_plugins(debug::DebugPlugin);

    app.run();
}
