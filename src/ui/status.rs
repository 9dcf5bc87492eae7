//! Status-Bar am unteren Bildschirmrand und HUD-Meldungen.

use crate::app::AppState;
use crate::core::format_feet_inches;
use std::time::Instant;

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            if let Some(image) = &state.view.base_image {
                let (w, h) = image.dimensions();
                ui.label(format!("{} ({}×{})", image.source_label(), w, h));
            } else {
                ui.label("No floor plan loaded");
            }

            ui.separator();

            ui.label(format!(
                "Rooms: {} | Masks: {} | Devices: {}",
                state.plan.rooms.len(),
                state.plan.masks.len(),
                state.plan.devices.len()
            ));

            ui.separator();

            ui.label(format!(
                "Zoom: {:.0}% | Pan: ({:.0}, {:.0})",
                state.view.transform.scale * 100.0,
                state.view.transform.pan.x,
                state.view.transform.pan.y
            ));

            if let Some(pointer) = state.view.pointer_natural {
                ui.separator();
                let feet = state
                    .plan
                    .calibration
                    .pixels_to_feet(pointer.x)
                    .ok()
                    .zip(state.plan.calibration.pixels_to_feet(pointer.y).ok());
                match feet {
                    Some((x, y)) => ui.label(format!(
                        "({}, {})",
                        format_feet_inches(x),
                        format_feet_inches(y)
                    )),
                    None => ui.label(format!("({:.0}, {:.0}) px", pointer.x, pointer.y)),
                };
            }

            ui.separator();
            ui.label(format!("Mode: {}", state.mode.label()));

            if state.persistence.has_pending() {
                ui.separator();
                ui.label("Saving…");
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if let Some(message) = state.ui.visible_message(Instant::now()) {
                    let color = if message.is_warning {
                        egui::Color32::from_rgb(230, 80, 60)
                    } else {
                        egui::Color32::from_rgb(90, 170, 250)
                    };
                    ui.label(egui::RichText::new(&message.text).color(color).strong());
                }
            });
        });
    });
}
