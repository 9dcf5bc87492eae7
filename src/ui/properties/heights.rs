use crate::app::AppIntent;
use crate::core::HeightSettings;

/// Standard-Montagehöhen und Biegezuschlag.
pub(super) fn render_height_settings(
    ui: &mut egui::Ui,
    heights: &HeightSettings,
    events: &mut Vec<AppIntent>,
) {
    ui.label("Heights (ft)");
    let mut next = *heights;
    let mut changed = false;

    egui::Grid::new("height_settings").num_columns(2).show(ui, |ui| {
        for (label, value) in [
            ("Ceiling:", &mut next.ceiling_height),
            ("Switch:", &mut next.switch_height),
            ("Exterior sconce:", &mut next.exterior_sconce_height),
            ("Slack per bend:", &mut next.bend_slack_per_bend),
        ] {
            ui.label(label);
            changed |= ui
                .add(egui::DragValue::new(value).range(0.0..=100.0).speed(0.1))
                .changed();
            ui.end_row();
        }
    });

    if changed {
        events.push(AppIntent::HeightSettingsChanged { heights: next });
    }
}
