//! Properties-Panel (rechte Seitenleiste) für Selektion, Geräte-Vorlage und Höhen.

mod devices;
mod heights;

use crate::app::{AppIntent, AppState, EditorMode};
use crate::core::{format_feet_inches, OverlayMask, Room};

/// Rendert das Properties-Panel und gibt erzeugte Events zurück.
pub fn render_properties_panel(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::SidePanel::right("properties_panel")
        .default_width(240.0)
        .min_width(200.0)
        .resizable(true)
        .show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.heading("Properties");
                ui.separator();

                render_selection_info(ui, state, &mut events);

                if let EditorMode::Devices { .. } = state.mode {
                    ui.separator();
                    devices::render_template(ui, &state.device_template, &mut events);
                }
                if let EditorMode::Overlay { .. } = state.mode {
                    ui.separator();
                    render_overlay_info(ui, state);
                }

                ui.separator();
                heights::render_height_settings(ui, &state.plan.heights, &mut events);

                ui.separator();
                render_scale_info(ui, state);
            });
        });

    events
}

fn render_selection_info(ui: &mut egui::Ui, state: &AppState, events: &mut Vec<AppIntent>) {
    if let Some(room) = state.mode.selected_room().and_then(|id| state.plan.rooms.get(id)) {
        render_room(ui, room, events);
    } else if let Some(mask) = state.mode.selected_mask().and_then(|id| state.plan.masks.get(id)) {
        render_mask(ui, mask);
    } else if let Some(device) = state.mode.selected_device().and_then(|id| state.plan.device(id)) {
        devices::render_selected_device(ui, device, &state.plan, events);
    } else {
        ui.label("No selection");
    }
}

fn render_room(ui: &mut egui::Ui, room: &Room, events: &mut Vec<AppIntent>) {
    ui.label(format!("Room: {}", room.id));

    // Bearbeitungspuffer lebt im egui-Memory, bis Enter/Fokusverlust
    let buffer_id = egui::Id::new(("room_name", &room.id));
    let mut name = ui.data_mut(|d| {
        d.get_temp_mut_or_insert_with(buffer_id, || room.name.clone())
            .clone()
    });
    ui.horizontal(|ui| {
        ui.label("Name:");
        let response = ui.text_edit_singleline(&mut name);
        if response.lost_focus() {
            let trimmed = name.trim().to_string();
            if !trimmed.is_empty() && trimmed != room.name {
                events.push(AppIntent::RoomRenamed {
                    id: room.id.clone(),
                    name: trimmed,
                });
            }
            ui.data_mut(|d| d.remove::<String>(buffer_id));
        } else {
            ui.data_mut(|d| d.insert_temp(buffer_id, name.clone()));
        }
    });
    ui.label(format!("Corners: {}", room.path.len()));
    ui.label(format!("Label rotation: {:.0}°", room.label_rotation));
    ui.small("R: rotate label 45° · ←/→: 1° · Del: delete");
}

fn render_mask(ui: &mut egui::Ui, mask: &OverlayMask) {
    ui.label(format!("Mask: {}", mask.id));
    ui.label(format!(
        "Center: ({:.0}, {:.0})",
        mask.rect.center.x, mask.rect.center.y
    ));
    ui.label(format!(
        "Size: {:.0} × {:.0} px",
        mask.rect.width, mask.rect.height
    ));
    ui.label(format!("Rotation: {:.0}°", mask.rect.rotation));
    ui.small("R: rotate 45° · ←/→: 1° · Del: delete");
}

fn render_overlay_info(ui: &mut egui::Ui, state: &AppState) {
    let overlay = &state.plan.overlay;
    ui.label("Overlay");
    ui.label(format!("Scale: {:.2}", overlay.scale));
    ui.label(format!("Rotation: {:.1}°", overlay.rotation_degrees));
    ui.label(format!(
        "Offset: ({:.0}, {:.0})",
        overlay.offset.x, overlay.offset.y
    ));
    ui.small("Arrows: move · [ ]: rotate · - =: scale · Shift: coarse · L: lock");
}

fn render_scale_info(ui: &mut egui::Ui, state: &AppState) {
    match state.plan.calibration.pixels_per_foot {
        Some(ppf) => {
            ui.label(format!("Scale: {:.2} px/ft", ppf));
            ui.label(format!("1 px = {}", format_feet_inches(1.0 / ppf)));
        }
        None => {
            ui.label("Scale: not calibrated");
        }
    }
}
