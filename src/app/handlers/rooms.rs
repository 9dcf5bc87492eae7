//! Handler für Räume.

use crate::app::use_cases;
use crate::app::AppState;
use glam::Vec2;

/// Startet oder beendet das Raum-Zeichnen.
pub fn toggle_drawing(state: &mut AppState) {
    use_cases::rooms::toggle_drawing(state);
}

/// Bestätigt den Namen des wartenden Raums.
pub fn confirm_name(state: &mut AppState, name: String) {
    use_cases::rooms::confirm_name(state, name);
}

/// Verwirft das wartende Polygon.
pub fn cancel_name(state: &mut AppState) {
    use_cases::rooms::cancel_name(state);
}

/// Selektiert einen Raum.
pub fn select(state: &mut AppState, id: Option<String>) {
    use_cases::rooms::select(state, id);
}

/// Greift einen Eckpunkt des selektierten Raums.
pub fn begin_corner_drag(state: &mut AppState, index: usize) {
    use_cases::rooms::begin_corner_drag(state, index);
}

/// Verschiebt den gegriffenen Eckpunkt.
pub fn update_corner_drag(state: &mut AppState, point: Vec2) {
    use_cases::rooms::update_corner_drag(state, point);
}

/// Lässt den Eckpunkt los.
pub fn end_corner_drag(state: &mut AppState) {
    use_cases::rooms::end_corner_drag(state);
}

/// Benennt einen Raum um.
pub fn rename(state: &mut AppState, id: &str, name: String) {
    use_cases::rooms::rename(state, id, name);
}

/// Blendet einen Raum ein oder aus.
pub fn set_visibility(state: &mut AppState, id: &str, visible: bool) {
    use_cases::rooms::set_visibility(state, id, visible);
}
