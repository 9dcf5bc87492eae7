use crate::app::{AppIntent, EditorMode, UiState};

/// Namensabfrage für ein fertig gezeichnetes Raum-Polygon.
pub fn show_room_name_dialog(
    ctx: &egui::Context,
    ui_state: &mut UiState,
    mode: &EditorMode,
) -> Vec<AppIntent> {
    let mut events = Vec::new();

    let EditorMode::Rooms {
        pending_name: Some(path),
        ..
    } = mode
    else {
        return events;
    };

    let mut confirmed = false;
    let mut cancelled = false;
    let dialog = &mut ui_state.room_name_dialog;

    egui::Window::new("New Room")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.set_min_width(260.0);
            ui.label(format!("Corners: {}", path.len()));
            ui.add_space(6.0);

            ui.horizontal(|ui| {
                ui.label("Name:");
                let response = ui.text_edit_singleline(&mut dialog.name);
                response.request_focus();
                if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                    confirmed = true;
                }
            });

            ui.add_space(8.0);
            ui.horizontal(|ui| {
                let has_name = !dialog.name.trim().is_empty();
                if ui.add_enabled(has_name, egui::Button::new("OK")).clicked() {
                    confirmed = true;
                }
                if ui.button("Cancel").clicked() || ui.input(|i| i.key_pressed(egui::Key::Escape))
                {
                    cancelled = true;
                }
            });
        });

    if confirmed && !dialog.name.trim().is_empty() {
        events.push(AppIntent::RoomNameConfirmed {
            name: dialog.name.trim().to_string(),
        });
    } else if cancelled {
        events.push(AppIntent::RoomNameCancelled);
    }

    events
}
