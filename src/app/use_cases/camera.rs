//! Use-Case-Funktionen für Pan und Zoom des Viewports.

use crate::app::state::Gesture;
use crate::app::AppState;
use crate::core::ViewTransform;
use glam::Vec2;

/// Setzt die Ansicht auf Default zurück (eingepasst, ohne Pan).
pub fn reset_view(state: &mut AppState) {
    state.view.transform = ViewTransform::new();
    state.view.gesture = Gesture::None;
}

/// Zoomt stufenweise hinein.
pub fn zoom_in(state: &mut AppState) {
    state.view.transform.zoom_by(
        state.options.button_zoom_step,
        state.options.view_scale_min,
        state.options.view_scale_max,
    );
}

/// Zoomt stufenweise heraus.
pub fn zoom_out(state: &mut AppState) {
    state.view.transform.zoom_by(
        1.0 / state.options.button_zoom_step,
        state.options.view_scale_min,
        state.options.view_scale_max,
    );
}

/// Wendet ein normalisiertes Mausrad-Delta an (Pan bleibt unverändert).
pub fn apply_wheel(state: &mut AppState, delta: f32) {
    state.view.transform.apply_wheel(
        delta,
        state.options.wheel_zoom_factor,
        state.options.view_scale_min,
        state.options.view_scale_max,
    );
}

/// Verschiebt die Ansicht um ein Bildschirm-Delta.
pub fn pan(state: &mut AppState, delta: Vec2) {
    state.view.transform.pan_by(delta);
}

/// Beginnt eine Pan-Geste an der Zeigerposition.
pub fn start_pan(state: &mut AppState, pointer: Vec2) {
    state.view.gesture = Gesture::Panning {
        start_pointer: pointer,
        start_pan: state.view.transform.pan,
    };
}

/// Setzt den Pan relativ zum Gestenstart.
pub fn update_pan(state: &mut AppState, pointer: Vec2) {
    if let Gesture::Panning {
        start_pointer,
        start_pan,
    } = state.view.gesture
    {
        state.view.transform.pan = start_pan + (pointer - start_pointer);
    }
}

/// Beendet eine laufende Pan-Geste.
pub fn end_pan(state: &mut AppState) {
    state.view.gesture = Gesture::None;
}

/// Rückt einen Bildpunkt in die Viewport-Mitte (Zoom bleibt).
///
/// Gibt `false` zurück, solange der Viewport keine Fläche hat.
pub fn center_on(state: &mut AppState, natural: Vec2) -> bool {
    let Some(geometry) = state.view.geometry() else {
        return false;
    };
    state.view.transform.pan = geometry.pan_centering(natural);
    true
}
