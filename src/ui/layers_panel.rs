//! Layer-Panel (linke Seitenleiste): Sichtbarkeit, Deckkraft, Raum-/Masken-/Geräteliste.

use crate::app::{AppIntent, AppState};
use crate::core::LayerId;

/// Rendert das Layer-Panel und gibt erzeugte Events zurück.
pub fn render_layers_panel(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::SidePanel::left("layers_panel")
        .default_width(220.0)
        .min_width(180.0)
        .resizable(true)
        .show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.heading("Layers");
                ui.separator();

                // Oberster Layer zuerst
                for layer in LayerId::ALL.into_iter().rev() {
                    render_layer_row(ui, state, layer, &mut events);
                }

                ui.separator();
                render_room_list(ui, state, &mut events);
                ui.separator();
                render_mask_list(ui, state, &mut events);
                ui.separator();
                render_device_list(ui, state, &mut events);
            });
        });

    events
}

fn render_layer_row(
    ui: &mut egui::Ui,
    state: &AppState,
    layer: LayerId,
    events: &mut Vec<AppIntent>,
) {
    let config = state.view.layers.get(layer);
    let active = state.mode.active_layer() == layer;

    ui.horizontal(|ui| {
        let mut visible = config.visible;
        if ui.checkbox(&mut visible, "").changed() {
            events.push(AppIntent::LayerVisibilityToggled { layer });
        }
        if ui.selectable_label(active, layer.label()).clicked() {
            events.push(AppIntent::LayerActivated { layer });
        }
    });

    let mut opacity = config.opacity;
    let slider = egui::Slider::new(&mut opacity, 0..=100).suffix(" %");
    if ui.add_enabled(config.visible, slider).changed() {
        events.push(AppIntent::LayerOpacityChanged { layer, opacity });
    }
}

fn render_room_list(ui: &mut egui::Ui, state: &AppState, events: &mut Vec<AppIntent>) {
    ui.collapsing(format!("Rooms ({})", state.plan.rooms.len()), |ui| {
        for room in state.rooms() {
            ui.horizontal(|ui| {
                let mut visible = room.visible;
                if ui.checkbox(&mut visible, &room.name).changed() {
                    events.push(AppIntent::RoomVisibilityToggled {
                        id: room.id.clone(),
                    });
                }
            });
        }
    });
}

fn render_mask_list(ui: &mut egui::Ui, state: &AppState, events: &mut Vec<AppIntent>) {
    ui.collapsing(format!("Masks ({})", state.plan.masks.len()), |ui| {
        for mask in state.plan.masks.values() {
            let mut visible = mask.visible;
            if ui.checkbox(&mut visible, &mask.id).changed() {
                events.push(AppIntent::MaskVisibilityToggled {
                    id: mask.id.clone(),
                });
            }
        }
    });
}

fn render_device_list(ui: &mut egui::Ui, state: &AppState, events: &mut Vec<AppIntent>) {
    ui.collapsing(format!("Devices ({})", state.devices().len()), |ui| {
        for device in state.devices() {
            ui.horizontal(|ui| {
                if ui.small_button("⌖").on_hover_text("Locate").clicked() {
                    events.push(AppIntent::LocateDeviceRequested {
                        id: device.id.clone(),
                    });
                }
                ui.label(device.id.as_str());
            });
        }
    });
}
