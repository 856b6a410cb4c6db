use bevy::prelude::*;
use bevy_egui::EguiPlugin;

pub mod destination_panel;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(EguiPlugin)
            .init_resource::<destination_panel::DestinationPanel>()
            .add_systems(
                Update,
                (
                    destination_panel::sync_keyboard_capture
                        .before(world::vehicle::drive_vehicle),
                    destination_panel::destination_panel_ui,
                ),
            );
    }
}
