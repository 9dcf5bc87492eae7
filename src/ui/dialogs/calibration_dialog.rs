use crate::app::{AppIntent, EditorMode, UiState};

/// Zeigt die Distanz-Eingabe, sobald beide Kalibrierpunkte gesetzt sind.
pub fn show_calibration_dialog(
    ctx: &egui::Context,
    ui_state: &mut UiState,
    mode: &EditorMode,
) -> Vec<AppIntent> {
    let mut events = Vec::new();

    let EditorMode::Calibrate {
        points,
        awaiting_distance: true,
        ..
    } = mode
    else {
        return events;
    };

    let pixels = match points[..] {
        [a, b] => a.distance(b),
        _ => return events,
    };

    let mut confirmed = false;
    let mut cancelled = false;
    let dialog = &mut ui_state.calibration_dialog;

    egui::Window::new("Set Scale")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.set_min_width(280.0);

            ui.label(format!("Measured line: {:.0} px", pixels));
            ui.add_space(6.0);

            ui.horizontal(|ui| {
                ui.label("Real distance:");
                let response = ui.text_edit_singleline(&mut dialog.input);
                response.request_focus();
                if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                    confirmed = true;
                }
            });
            ui.small("e.g. 10' 6\", 12 ft, 3.5 m, 350 cm (bare number = meters)");

            if let Some(error) = &dialog.error {
                ui.add_space(4.0);
                ui.colored_label(egui::Color32::from_rgb(230, 80, 60), error);
            }

            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if ui.button("Set Scale").clicked() {
                    confirmed = true;
                }
                if ui.button("Cancel").clicked() || ui.input(|i| i.key_pressed(egui::Key::Escape))
                {
                    cancelled = true;
                }
            });
        });

    if confirmed {
        events.push(AppIntent::CalibrationDistanceSubmitted {
            input: dialog.input.clone(),
        });
    } else if cancelled {
        events.push(AppIntent::CalibrationDistanceCancelled);
    }

    events
}
