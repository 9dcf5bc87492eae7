//! Handler für Pan, Zoom und Viewport.

use crate::app::use_cases;
use crate::app::AppState;
use glam::Vec2;

/// Setzt die Ansicht auf den Standardzustand zurück.
pub fn reset_view(state: &mut AppState) {
    use_cases::camera::reset_view(state);
}

/// Zoomt stufenweise hinein.
pub fn zoom_in(state: &mut AppState) {
    use_cases::camera::zoom_in(state);
}

/// Zoomt stufenweise heraus.
pub fn zoom_out(state: &mut AppState) {
    use_cases::camera::zoom_out(state);
}

/// Wendet das gesammelte Mausrad-Delta eines Frames an.
pub fn apply_wheel_zoom(state: &mut AppState, delta: f32) {
    use_cases::camera::apply_wheel(state, delta);
}

/// Aktualisiert die Viewport-Größe im State.
pub fn set_viewport_size(state: &mut AppState, size: [f32; 2]) {
    use_cases::viewport::resize(state, size);
}

/// Verschiebt die Ansicht um ein Bildschirm-Delta.
pub fn pan(state: &mut AppState, delta: Vec2) {
    use_cases::camera::pan(state, delta);
}

/// Beginnt eine Pan-Geste.
pub fn start_pan(state: &mut AppState, pointer: Vec2) {
    use_cases::camera::start_pan(state, pointer);
}

/// Setzt die Pan-Geste fort.
pub fn update_pan(state: &mut AppState, pointer: Vec2) {
    use_cases::camera::update_pan(state, pointer);
}

/// Beendet die Pan-Geste.
pub fn end_pan(state: &mut AppState) {
    use_cases::camera::end_pan(state);
}

/// Merkt die Zeigerposition in Bildpixeln.
pub fn set_pointer_position(state: &mut AppState, natural: Option<Vec2>) {
    use_cases::viewport::set_pointer_position(state, natural);
}
