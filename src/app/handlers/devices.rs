//! Handler für Geräte und Verkettung.

use crate::app::state::DeviceTool;
use crate::app::use_cases;
use crate::app::AppState;
use crate::core::{DeviceTemplate, HeightSettings, MountingHeight};
use glam::Vec2;

/// Wählt das Geräte-Werkzeug.
pub fn set_tool(state: &mut AppState, tool: DeviceTool) {
    use_cases::devices::set_tool(state, tool);
}

/// Setzt die Vorlage für neue Geräte.
pub fn set_template(state: &mut AppState, template: DeviceTemplate) {
    use_cases::devices::set_template(state, template);
}

/// Platziert ein Gerät.
pub fn place(state: &mut AppState, point: Vec2) {
    use_cases::devices::place(state, point);
}

/// Selektiert ein Gerät.
pub fn select(state: &mut AppState, id: Option<String>) {
    use_cases::devices::select(state, id);
}

/// Beginnt das Ziehen des selektierten Geräts.
pub fn begin_drag(state: &mut AppState) {
    use_cases::devices::begin_drag(state);
}

/// Verschiebt das gezogene Gerät.
pub fn update_drag(state: &mut AppState, point: Vec2) {
    use_cases::devices::update_drag(state, point);
}

/// Lässt das Gerät los.
pub fn end_drag(state: &mut AppState) {
    use_cases::devices::end_drag(state);
}

/// Nimmt ein Gerät in die laufende Verkettung auf.
pub fn route_click(state: &mut AppState, id: &str) {
    use_cases::devices::route_click(state, id);
}

/// Verwirft die laufende Verkettung.
pub fn cancel_route(state: &mut AppState) {
    use_cases::devices::cancel_route(state);
}

/// Setzt die Montagehöhe eines Geräts.
pub fn set_mounting_height(state: &mut AppState, id: &str, height: MountingHeight) {
    use_cases::devices::set_mounting_height(state, id, height);
}

/// Setzt die Standard-Höhen.
pub fn set_heights(state: &mut AppState, heights: HeightSettings) {
    use_cases::devices::set_heights(state, heights);
}

/// Springt zu einem Gerät.
pub fn locate(state: &mut AppState, id: &str) {
    use_cases::devices::locate(state, id);
}
