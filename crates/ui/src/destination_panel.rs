//! Destination lookup panel: a text field resolving free-text names to
//! world coordinates. A hit sets the target destination and sends the
//! marker event; a miss shows a notice and mutates nothing else.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use world::destinations::{lookup, DestinationChosen, TargetDestination};
use world::vehicle::KeyboardCapture;

const NOT_FOUND: &str = "Destination not found.";

/// Panel state: the query text and the current miss notice, if any.
#[derive(Resource, Default)]
pub struct DestinationPanel {
    pub query: String,
    pub notice: Option<String>,
}

/// Hand the keyboard to the panel while egui owns it, so arrow keys edit
/// text instead of driving the vehicle.
pub fn sync_keyboard_capture(mut contexts: EguiContexts, mut capture: ResMut<KeyboardCapture>) {
    capture.0 = contexts.ctx_mut().wants_keyboard_input();
}

pub fn destination_panel_ui(
    mut contexts: EguiContexts,
    mut panel: ResMut<DestinationPanel>,
    mut target: ResMut<TargetDestination>,
    mut chosen: EventWriter<DestinationChosen>,
) {
    egui::Window::new("Destination")
        .anchor(egui::Align2::LEFT_TOP, [16.0, 16.0])
        .resizable(false)
        .collapsible(false)
        .show(contexts.ctx_mut(), |ui| {
            let mut submitted = false;
            ui.horizontal(|ui| {
                let response = ui.text_edit_singleline(&mut panel.query);
                submitted = response.lost_focus()
                    && ui.input(|input| input.key_pressed(egui::Key::Enter));
                submitted |= ui.button("Go").clicked();
            });
            if submitted {
                match lookup(&panel.query) {
                    Some(coord) => {
                        panel.notice = None;
                        target.0 = Some(coord);
                        chosen.send(DestinationChosen(coord));
                        info!("destination set to ({}, {})", coord.x, coord.y);
                    }
                    None => panel.notice = Some(NOT_FOUND.to_string()),
                }
            }
            if let Some(notice) = &panel.notice {
                ui.colored_label(egui::Color32::from_rgb(230, 80, 80), notice);
            }
        });
}
