//! Handler für Layer, Modi und Werkzeugwahl.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::LayerId;

/// Aktiviert einen Layer (wechselt den Modus).
pub fn activate(state: &mut AppState, layer: LayerId) {
    use_cases::layers::activate_layer(state, layer);
}

/// Setzt die Sichtbarkeit eines Layers.
pub fn set_visibility(state: &mut AppState, layer: LayerId, visible: bool) {
    use_cases::layers::set_visibility(state, layer, visible);
}

/// Setzt die Deckkraft eines Layers (0..=100).
pub fn set_opacity(state: &mut AppState, layer: LayerId, opacity: u8) {
    use_cases::layers::set_opacity(state, layer, opacity);
}

/// Startet das Kalibrier-Werkzeug.
pub fn enter_calibrate(state: &mut AppState) {
    use_cases::layers::enter_calibrate(state);
}

/// Startet das Mess-Werkzeug.
pub fn enter_measure(state: &mut AppState) {
    use_cases::layers::enter_measure(state);
}
