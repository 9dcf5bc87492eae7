//! Toolbar für Modus- und Werkzeugauswahl.

use crate::app::{AppIntent, AppState, DeviceTool, EditorMode, MaskTool};
use crate::core::LayerId;

/// Layer, die über die Toolbar einen Bearbeitungsmodus aktivieren.
const MODE_BUTTONS: [(LayerId, &str); 5] = [
    (LayerId::Base, "Navigate"),
    (LayerId::Overlay, "Overlay"),
    (LayerId::Rooms, "Rooms"),
    (LayerId::Masks, "Masks"),
    (LayerId::Devices, "Devices"),
];

/// Rendert die Toolbar und gibt erzeugte Events zurück.
pub fn render_toolbar(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label("Mode:");
            let active = state.mode.active_layer();
            for (layer, label) in MODE_BUTTONS {
                let selected = active == layer && !is_annotation_tool(&state.mode);
                if ui.selectable_label(selected, label).clicked() {
                    events.push(AppIntent::LayerActivated { layer });
                }
            }

            ui.separator();

            let calibrating = matches!(state.mode, EditorMode::Calibrate { .. });
            if ui.selectable_label(calibrating, "Calibrate").clicked() {
                events.push(AppIntent::CalibrateToolRequested);
            }
            let measuring = matches!(state.mode, EditorMode::Measure { .. });
            if ui.selectable_label(measuring, "Measure").clicked() {
                events.push(AppIntent::MeasureToolRequested);
            }

            ui.separator();
            render_mode_tools(ui, state, &mut events);

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Reset View").clicked() {
                    events.push(AppIntent::ResetViewRequested);
                }
                if ui.button("−").on_hover_text("Zoom out (-)").clicked() {
                    events.push(AppIntent::ZoomOutRequested);
                }
                if ui.button("+").on_hover_text("Zoom in (+)").clicked() {
                    events.push(AppIntent::ZoomInRequested);
                }
                ui.separator();
                if ui
                    .add_enabled(state.can_redo(), egui::Button::new("Redo"))
                    .clicked()
                {
                    events.push(AppIntent::RedoRequested);
                }
                if ui
                    .add_enabled(state.can_undo(), egui::Button::new("Undo"))
                    .clicked()
                {
                    events.push(AppIntent::UndoRequested);
                }
            });
        });
    });

    events
}

fn is_annotation_tool(mode: &EditorMode) -> bool {
    matches!(mode, EditorMode::Calibrate { .. } | EditorMode::Measure { .. })
}

/// Werkzeuge des aktiven Modus.
fn render_mode_tools(ui: &mut egui::Ui, state: &AppState, events: &mut Vec<AppIntent>) {
    match &state.mode {
        EditorMode::Rooms { drawing, .. } => {
            let label = if drawing.is_active() {
                "Stop Drawing"
            } else {
                "Draw New Room"
            };
            if ui.selectable_label(drawing.is_active(), label).clicked() {
                events.push(AppIntent::DrawRoomToggled);
            }
        }
        EditorMode::Masks { tool, .. } => {
            for (candidate, label) in [
                (MaskTool::Polygon, "Polygon"),
                (MaskTool::Rectangle, "Rectangle"),
            ] {
                if ui.selectable_label(*tool == candidate, label).clicked() {
                    events.push(AppIntent::MaskToolSelected { tool: candidate });
                }
            }
        }
        EditorMode::Devices { tool, .. } => {
            for (candidate, label) in [(DeviceTool::Place, "Place"), (DeviceTool::Route, "Route")] {
                if ui.selectable_label(*tool == candidate, label).clicked() {
                    events.push(AppIntent::DeviceToolSelected { tool: candidate });
                }
            }
        }
        EditorMode::Overlay { .. } => {
            let locked = state.plan.overlay.locked;
            let label = if locked { "🔒 Locked" } else { "🔓 Unlocked" };
            if ui.selectable_label(locked, label).clicked() {
                events.push(AppIntent::OverlayLockToggled);
            }
        }
        EditorMode::Calibrate { points, .. } => {
            ui.label(match points.len() {
                0 => "Click the first point of a known distance",
                1 => "Click the second point",
                _ => "Enter the distance",
            });
        }
        EditorMode::Measure { .. } => {
            ui.label("Click two points to measure");
        }
        EditorMode::Navigate => {}
    }
}
