use bevy::prelude::*;
use bevy::window::PresentMode;
use bevy::winit::WinitSettings;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Taxitown".to_string(),
                resolution: (1280.0, 720.0).into(),
                present_mode: PresentMode::AutoVsync,
                ..default()
            }),
            ..default()
        }))
        // Continuous redraw: vehicle motion advances per frame, so the app
        // must render even without input events.
        .insert_resource(WinitSettings::game())
        .add_plugins((world::WorldPlugin, rendering::RenderingPlugin, ui::UiPlugin))
        .run();
}
