//! Handler für die Polygon-Engine.

use crate::app::use_cases;
use crate::app::AppState;
use glam::Vec2;

/// Fügt einen Punkt hinzu.
pub fn add_point(state: &mut AppState, point: Vec2) {
    use_cases::drawing::add_point(state, point);
}

/// Schließt das Polygon.
pub fn finish(state: &mut AppState) {
    use_cases::drawing::finish(state);
}

/// Entfernt den letzten Punkt.
pub fn undo_point(state: &mut AppState) {
    use_cases::drawing::undo_point(state);
}
