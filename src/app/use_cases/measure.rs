//! Use-Case-Funktionen für das Mess-Werkzeug.

use crate::app::state::EditorMode;
use crate::app::AppState;
use crate::core::{format_feet_inches, ScaleCalibration};
use glam::Vec2;

/// Setzt einen Messpunkt; ein dritter Klick beginnt eine neue Messung.
pub fn add_point(state: &mut AppState, point: Vec2) {
    let EditorMode::Measure { points, hover } = &mut state.mode else {
        return;
    };
    if points.len() >= 2 {
        points.clear();
    }
    points.push(point);
    *hover = None;
    if let [a, b] = points[..] {
        let label = measure_label(a.distance(b), &state.plan.calibration);
        log::info!("Messung: {}", label);
        state.show_info(label);
    }
}

/// Verwirft die aktuelle Messung.
pub fn clear(state: &mut AppState) {
    if let EditorMode::Measure { points, hover } = &mut state.mode {
        points.clear();
        *hover = None;
    }
}

/// Beschriftung einer gemessenen Strecke.
pub fn measure_label(pixels: f32, calibration: &ScaleCalibration) -> String {
    match calibration.pixels_to_feet(pixels) {
        Ok(feet) => format_feet_inches(feet),
        Err(_) => format!("{:.0} px (no scale set)", pixels),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_depends_on_calibration() {
        assert_eq!(
            measure_label(123.4, &ScaleCalibration::default()),
            "123 px (no scale set)"
        );
        let calibrated = ScaleCalibration::with_pixels_per_foot(30.0);
        assert_eq!(measure_label(300.0, &calibrated), "10'");
    }

    #[test]
    fn test_third_click_starts_new_measurement() {
        let mut state = AppState::new();
        state.mode = EditorMode::measure();
        add_point(&mut state, Vec2::ZERO);
        add_point(&mut state, Vec2::new(300.0, 0.0));
        assert!(state.ui.message.is_some());
        add_point(&mut state, Vec2::new(10.0, 10.0));
        match &state.mode {
            EditorMode::Measure { points, .. } => assert_eq!(points, &vec![Vec2::new(10.0, 10.0)]),
            other => panic!("unerwarteter Modus: {:?}", other),
        }
    }
}
