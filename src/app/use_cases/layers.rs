//! Use-Case-Funktionen für Layer-Aktivierung, Sichtbarkeit und Deckkraft.

use crate::app::persistence::RecordKind;
use crate::app::state::{CalibrationDialogState, EditorMode, Gesture, RoomNameDialogState};
use crate::app::AppState;
use crate::core::LayerId;

/// Ersetzt den aktiven Modus; der Zustand des vorherigen Modus wird verworfen.
pub fn set_mode(state: &mut AppState, mode: EditorMode) {
    log::debug!("Modus: {} → {}", state.mode.label(), mode.label());
    state.mode = mode;
    state.view.gesture = Gesture::None;
    state.ui.room_name_dialog = RoomNameDialogState::default();
    state.ui.calibration_dialog = CalibrationDialogState::default();
}

/// Aktiviert einen Layer und wechselt in den zugehörigen Modus.
pub fn activate_layer(state: &mut AppState, layer: LayerId) {
    set_mode(state, EditorMode::for_layer(layer));
}

/// Startet das Kalibrier-Werkzeug.
pub fn enter_calibrate(state: &mut AppState) {
    set_mode(state, EditorMode::calibrate());
}

/// Startet das Mess-Werkzeug.
pub fn enter_measure(state: &mut AppState) {
    set_mode(state, EditorMode::measure());
}

/// Setzt die Sichtbarkeit eines Layers.
pub fn set_visibility(state: &mut AppState, layer: LayerId, visible: bool) {
    state.view.layers.set_visible(layer, visible);
}

/// Setzt die Deckkraft eines Layers.
///
/// Die Overlay-Deckkraft gehört zur gespeicherten Overlay-Transformation.
pub fn set_opacity(state: &mut AppState, layer: LayerId, opacity: u8) {
    state.view.layers.set_opacity(layer, opacity);
    if layer == LayerId::Overlay {
        state.plan_mut().overlay.opacity = f32::from(opacity.min(100)) / 100.0;
        state.mark_dirty(RecordKind::Overlay);
    }
}

/// Übernimmt die gespeicherte Overlay-Deckkraft in den Layer-Stapel.
pub fn sync_overlay_opacity(state: &mut AppState) {
    let opacity = (state.plan.overlay.opacity.clamp(0.0, 1.0) * 100.0).round() as u8;
    state.view.layers.set_opacity(LayerId::Overlay, opacity);
}
