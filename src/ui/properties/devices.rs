//! Geräte-Vorlage und Details des selektierten Geräts inkl. Kabellängen.

use crate::app::AppIntent;
use crate::core::{
    estimate_between, format_feet_inches, CableEstimate, Device, DeviceTemplate, FloorPlan,
    MountingHeight, Topology, Uncalibrated,
};

/// Montagehöhen-Varianten für die Auswahl (Custom mit Platzhalterwert).
const HEIGHT_CHOICES: [MountingHeight; 4] = [
    MountingHeight::Ceiling,
    MountingHeight::Switch,
    MountingHeight::ExteriorSconce,
    MountingHeight::Custom(8.0),
];

/// Beschriftung einer Kabellängen-Schätzung.
pub fn cable_label(estimate: Result<CableEstimate, Uncalibrated>) -> String {
    match estimate {
        Ok(estimate) => format!(
            "{} ({} bend{})",
            format_feet_inches(estimate.total_feet()),
            estimate.bends,
            if estimate.bends == 1 { "" } else { "s" }
        ),
        Err(Uncalibrated) => "uncalibrated".to_string(),
    }
}

/// Vorlage für neu platzierte Geräte.
pub(super) fn render_template(
    ui: &mut egui::Ui,
    template: &DeviceTemplate,
    events: &mut Vec<AppIntent>,
) {
    ui.label("New device");
    let mut next = template.clone();

    egui::ComboBox::from_id_salt("template_topology")
        .selected_text(next.topology.label())
        .show_ui(ui, |ui| {
            for topology in Topology::ALL {
                if ui
                    .selectable_label(next.topology == topology, topology.label())
                    .clicked()
                    && next.topology != topology
                {
                    // Topologie-Wechsel setzt Typ und Netzwerk zurück
                    next = DeviceTemplate {
                        mounting_height: next.mounting_height,
                        ..DeviceTemplate::for_topology(topology)
                    };
                }
            }
        });

    let type_label = next
        .topology
        .device_types()
        .iter()
        .find(|t| t.id == next.device_type)
        .map_or(next.device_type.as_str(), |t| t.label);
    egui::ComboBox::from_id_salt("template_type")
        .selected_text(type_label)
        .show_ui(ui, |ui| {
            for info in next.topology.device_types() {
                if ui
                    .selectable_label(next.device_type == info.id, info.label)
                    .clicked()
                {
                    next.device_type = info.id.to_string();
                }
            }
        });

    egui::ComboBox::from_id_salt("template_network")
        .selected_text(next.network.as_str())
        .show_ui(ui, |ui| {
            for network in next.topology.networks() {
                if ui
                    .selectable_label(next.network == *network, *network)
                    .clicked()
                {
                    next.network = network.to_string();
                }
            }
        });

    if let Some(height) = height_selector(ui, "template_height", next.mounting_height) {
        next.mounting_height = height;
    }

    if next != *template {
        events.push(AppIntent::DeviceTemplateChanged { template: next });
    }
}

/// Details des selektierten Geräts.
pub(super) fn render_selected_device(
    ui: &mut egui::Ui,
    device: &Device,
    plan: &FloorPlan,
    events: &mut Vec<AppIntent>,
) {
    ui.label(format!("Device: {}", device.id));
    ui.label(format!("Topology: {}", device.topology.label()));
    ui.label(format!("Network: {}", device.network));
    ui.label(format!(
        "Room: {}",
        device.room_name.as_deref().unwrap_or("—")
    ));

    if let Some(height) = height_selector(ui, "device_height", device.mounting_height) {
        events.push(AppIntent::DeviceMountingHeightChanged {
            id: device.id.clone(),
            height,
        });
    }
    ui.label(format!(
        "Height: {}",
        format_feet_inches(device.mounting_height.resolve(&plan.heights))
    ));

    ui.separator();
    ui.label(format!("Connections: {}", device.connections.len()));
    for peer_id in &device.connections {
        let Some(peer) = plan.device(peer_id) else {
            continue;
        };
        let estimate = estimate_between(device, peer, &plan.calibration, &plan.heights);
        ui.horizontal(|ui| {
            ui.small(peer_id.as_str());
            ui.label(cable_label(estimate));
        });
    }
}

/// Auswahl der Montagehöhe; `Some` wenn geändert.
fn height_selector(
    ui: &mut egui::Ui,
    id_salt: &str,
    current: MountingHeight,
) -> Option<MountingHeight> {
    let mut selected = current;
    egui::ComboBox::from_id_salt(id_salt)
        .selected_text(current.label())
        .show_ui(ui, |ui| {
            for choice in HEIGHT_CHOICES {
                let is_current =
                    std::mem::discriminant(&choice) == std::mem::discriminant(&current);
                if ui.selectable_label(is_current, choice.label()).clicked() && !is_current {
                    selected = choice;
                }
            }
        });

    if let MountingHeight::Custom(mut feet) = selected {
        ui.horizontal(|ui| {
            ui.label("Custom (ft):");
            if ui
                .add(
                    egui::DragValue::new(&mut feet)
                        .range(0.0..=100.0)
                        .speed(0.1),
                )
                .changed()
            {
                selected = MountingHeight::Custom(feet);
            }
        });
    }

    (selected != current).then_some(selected)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cable_label_without_scale() {
        assert_eq!(cable_label(Err(Uncalibrated)), "uncalibrated");
    }

    #[test]
    fn test_cable_label_lists_bends() {
        let estimate = CableEstimate {
            horizontal_feet: 10.0,
            vertical_feet: 6.0,
            bends: 2,
            slack_feet: 1.0,
        };
        assert_eq!(cable_label(Ok(estimate)), "17' (2 bends)");
    }
}
