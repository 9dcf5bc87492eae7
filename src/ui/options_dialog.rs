//! Optionen-Dialog für Zoom, Radien, Speichern und Farben.

use crate::app::{AppIntent, AppState};

/// Zeigt den Options-Dialog und gibt erzeugte Events zurück.
pub fn show_options_dialog(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    if !state.ui.show_options_dialog {
        return events;
    }

    // Arbeitskopie der Optionen für Live-Bearbeitung
    let mut opts = state.options.clone();
    let mut changed = false;

    egui::Window::new("Options")
        .collapsible(true)
        .resizable(true)
        .default_width(360.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .max_height(500.0)
                .show(ui, |ui| {
                    // ── Ansicht ─────────────────────────────────────
                    ui.collapsing("View", |ui| {
                        changed |= drag_row(ui, "Max zoom:", &mut opts.view_scale_max, 1.0..=50.0, 0.1);
                        changed |= drag_row(
                            ui,
                            "Wheel factor:",
                            &mut opts.wheel_zoom_factor,
                            1.01..=2.0,
                            0.005,
                        );
                        changed |= drag_row(
                            ui,
                            "Button zoom step:",
                            &mut opts.button_zoom_step,
                            1.01..=3.0,
                            0.01,
                        );
                        changed |= drag_row(
                            ui,
                            "Wheel pixels per step:",
                            &mut opts.wheel_pixels_per_unit,
                            1.0..=500.0,
                            1.0,
                        );
                    });

                    // ── Zeichnen ────────────────────────────────────
                    ui.collapsing("Drawing", |ui| {
                        changed |= drag_row(
                            ui,
                            "Vertex snap (px):",
                            &mut opts.snap_vertex_threshold,
                            0.0..=100.0,
                            0.5,
                        );
                        changed |= drag_row(
                            ui,
                            "Edge snap (px):",
                            &mut opts.snap_edge_threshold,
                            0.0..=100.0,
                            0.5,
                        );
                        changed |= drag_row(
                            ui,
                            "Close distance (px):",
                            &mut opts.polygon_close_threshold,
                            1.0..=100.0,
                            0.5,
                        );
                        changed |= drag_row(
                            ui,
                            "Min mask size (px):",
                            &mut opts.mask_min_size,
                            1.0..=200.0,
                            0.5,
                        );
                    });

                    // ── Auswahl ─────────────────────────────────────
                    ui.collapsing("Picking", |ui| {
                        changed |= drag_row(
                            ui,
                            "Device radius (px):",
                            &mut opts.device_pick_radius,
                            1.0..=100.0,
                            0.5,
                        );
                        changed |= drag_row(
                            ui,
                            "Calibration re-edit (px):",
                            &mut opts.calibration_reedit_radius,
                            1.0..=200.0,
                            0.5,
                        );
                        changed |= drag_row(
                            ui,
                            "Handle radius (screen px):",
                            &mut opts.handle_pick_radius_px,
                            2.0..=50.0,
                            0.5,
                        );
                    });

                    // ── Speichern ───────────────────────────────────
                    ui.collapsing("Saving", |ui| {
                        ui.horizontal(|ui| {
                            ui.label("Debounce (ms):");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.save_debounce_ms)
                                        .range(0..=10_000)
                                        .speed(10.0),
                                )
                                .changed();
                        });
                        ui.horizontal(|ui| {
                            ui.label("Message duration (ms):");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.hud_message_ms)
                                        .range(500..=30_000)
                                        .speed(50.0),
                                )
                                .changed();
                        });
                    });

                    // ── Farben ──────────────────────────────────────
                    ui.collapsing("Colors", |ui| {
                        changed |= color_edit(ui, "Room outline:", &mut opts.room_outline_color);
                        changed |= color_edit(ui, "Selection:", &mut opts.selection_color);
                        changed |= color_edit(ui, "Devices:", &mut opts.device_color);
                        changed |= color_edit(ui, "Connections:", &mut opts.connection_color);
                        changed |= color_edit(ui, "Annotations:", &mut opts.annotation_color);
                    });
                });

            ui.separator();

            ui.horizontal(|ui| {
                if ui.button("Defaults").clicked() {
                    events.push(AppIntent::ResetOptionsRequested);
                }
                if ui.button("Close").clicked() {
                    events.push(AppIntent::CloseOptionsDialogRequested);
                }
            });
        });

    // Änderungen sofort anwenden (Live-Preview)
    if changed {
        events.push(AppIntent::OptionsChanged {
            options: Box::new(opts),
        });
    }

    events
}

/// Beschriftete DragValue-Zeile.
fn drag_row(
    ui: &mut egui::Ui,
    label: &str,
    value: &mut f32,
    range: std::ops::RangeInclusive<f32>,
    speed: f64,
) -> bool {
    ui.horizontal(|ui| {
        ui.label(label);
        ui.add(egui::DragValue::new(value).range(range).speed(speed))
            .changed()
    })
    .inner
}

/// Hilfsfunktion: Farb-Editor für [f32; 4] mit Alpha.
fn color_edit(ui: &mut egui::Ui, label: &str, color: &mut [f32; 4]) -> bool {
    let mut changed = false;
    ui.horizontal(|ui| {
        ui.label(label);
        let mut c = egui::Color32::from_rgba_unmultiplied(
            (color[0] * 255.0) as u8,
            (color[1] * 255.0) as u8,
            (color[2] * 255.0) as u8,
            (color[3] * 255.0) as u8,
        );
        if ui.color_edit_button_srgba(&mut c).changed() {
            let [r, g, b, a] = c.to_srgba_unmultiplied();
            *color = [r, g, b, a].map(|v| f32::from(v) / 255.0);
            changed = true;
        }
    });
    changed
}
