//! Handler für das Overlay-Bild.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::OverlayAdjust;
use glam::Vec2;

/// Passt das Overlay schrittweise an.
pub fn adjust(state: &mut AppState, adjust: OverlayAdjust) {
    use_cases::overlay::adjust(state, adjust);
}

/// Schaltet die Overlay-Sperre um.
pub fn toggle_lock(state: &mut AppState) {
    use_cases::overlay::toggle_lock(state);
}

/// Beginnt das Ziehen des Overlays.
pub fn begin_drag(state: &mut AppState, point: Vec2) {
    use_cases::overlay::begin_drag(state, point);
}

/// Setzt das Ziehen fort.
pub fn update_drag(state: &mut AppState, point: Vec2) {
    use_cases::overlay::update_drag(state, point);
}

/// Beendet das Ziehen.
pub fn end_drag(state: &mut AppState) {
    use_cases::overlay::end_drag(state);
}
