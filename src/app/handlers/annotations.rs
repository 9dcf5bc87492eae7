//! Handler für Kalibrierung und Messen.

use crate::app::use_cases;
use crate::app::AppState;
use glam::Vec2;

/// Setzt einen Kalibrierpunkt.
pub fn add_calibration_point(state: &mut AppState, point: Vec2) {
    use_cases::calibration::add_point(state, point);
}

/// Greift einen Kalibrierpunkt.
pub fn begin_calibration_point_drag(state: &mut AppState, index: usize) {
    use_cases::calibration::begin_point_drag(state, index);
}

/// Verschiebt den gegriffenen Kalibrierpunkt.
pub fn update_calibration_point_drag(state: &mut AppState, point: Vec2) {
    use_cases::calibration::update_point_drag(state, point);
}

/// Lässt den Kalibrierpunkt los.
pub fn end_calibration_point_drag(state: &mut AppState) {
    use_cases::calibration::end_point_drag(state);
}

/// Entfernt den letzten Kalibrierpunkt.
pub fn remove_last_calibration_point(state: &mut AppState) {
    use_cases::calibration::remove_last_point(state);
}

/// Übernimmt die eingegebene Distanz.
pub fn submit_calibration_distance(state: &mut AppState, input: &str) {
    use_cases::calibration::submit_distance(state, input);
}

/// Schließt die Distanz-Eingabe.
pub fn cancel_calibration_distance(state: &mut AppState) {
    use_cases::calibration::cancel_distance(state);
}

/// Setzt einen Messpunkt.
pub fn add_measure_point(state: &mut AppState, point: Vec2) {
    use_cases::measure::add_point(state, point);
}

/// Verwirft die Messung.
pub fn clear_measurement(state: &mut AppState) {
    use_cases::measure::clear(state);
}
