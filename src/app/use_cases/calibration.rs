//! Use-Case-Funktionen für die Maßstabs-Kalibrierung.

use super::layers;
use crate::app::persistence::RecordKind;
use crate::app::state::{CalibrationDialogState, EditorMode};
use crate::app::AppState;
use crate::core::{pixels_per_foot, ScaleCalibration};
use glam::Vec2;

/// Setzt einen Kalibrierpunkt; der zweite öffnet die Distanz-Eingabe.
pub fn add_point(state: &mut AppState, point: Vec2) {
    let EditorMode::Calibrate {
        points,
        awaiting_distance,
        ..
    } = &mut state.mode
    else {
        return;
    };
    if *awaiting_distance || points.len() >= 2 {
        return;
    }
    points.push(point);
    if points.len() == 2 {
        *awaiting_distance = true;
        state.ui.calibration_dialog = CalibrationDialogState::default();
        log::debug!("Kalibrierpunkte gesetzt, warte auf Distanz");
    }
}

/// Greift einen bestehenden Kalibrierpunkt.
pub fn begin_point_drag(state: &mut AppState, index: usize) {
    if let EditorMode::Calibrate {
        points, dragging, ..
    } = &mut state.mode
    {
        if index < points.len() {
            *dragging = Some(index);
        }
    }
}

/// Verschiebt den gegriffenen Kalibrierpunkt.
pub fn update_point_drag(state: &mut AppState, point: Vec2) {
    if let EditorMode::Calibrate {
        points,
        dragging: Some(index),
        ..
    } = &mut state.mode
    {
        if let Some(p) = points.get_mut(*index) {
            *p = point;
        }
    }
}

/// Lässt den Kalibrierpunkt los.
pub fn end_point_drag(state: &mut AppState) {
    if let EditorMode::Calibrate { dragging, .. } = &mut state.mode {
        *dragging = None;
    }
}

/// Entfernt den zuletzt gesetzten Punkt.
pub fn remove_last_point(state: &mut AppState) {
    if let EditorMode::Calibrate {
        points,
        dragging,
        awaiting_distance,
    } = &mut state.mode
    {
        points.pop();
        *dragging = None;
        *awaiting_distance = false;
    }
}

/// Übernimmt die eingegebene Distanz und setzt den Maßstab.
///
/// Ungültige Eingaben lassen den Dialog mit Fehlermeldung offen.
pub fn submit_distance(state: &mut AppState, input: &str) {
    let EditorMode::Calibrate {
        points,
        awaiting_distance: true,
        ..
    } = &state.mode
    else {
        return;
    };
    let [a, b] = points[..] else {
        return;
    };

    match pixels_per_foot(a, b, input) {
        Ok(ppf) => {
            state.record_undo_snapshot();
            state.plan_mut().calibration = ScaleCalibration::with_pixels_per_foot(ppf);
            state.mark_dirty(RecordKind::Scale);
            log::info!("Maßstab gesetzt: {:.3} px/ft", ppf);
            state.show_info(format!("Scale set: {:.2} px per foot", ppf));
            layers::set_mode(state, EditorMode::Navigate);
        }
        Err(e) => {
            let text = e.to_string();
            state.ui.calibration_dialog.error = Some(text.clone());
            state.show_warning(text);
        }
    }
}

/// Schließt die Distanz-Eingabe; der zweite Punkt wird verworfen.
pub fn cancel_distance(state: &mut AppState) {
    remove_last_point(state);
    state.ui.calibration_dialog = CalibrationDialogState::default();
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn calibrating(a: Vec2, b: Vec2) -> AppState {
        let mut state = AppState::new();
        layers::enter_calibrate(&mut state);
        add_point(&mut state, a);
        add_point(&mut state, b);
        state
    }

    #[test]
    fn test_two_points_and_ten_feet_give_thirty_px_per_foot() {
        let mut state = calibrating(Vec2::new(100.0, 100.0), Vec2::new(400.0, 100.0));
        assert!(state.mode.awaits_text_input());

        submit_distance(&mut state, "10 ft");

        let ppf = state.plan.calibration.pixels_per_foot.expect("kalibriert");
        assert_relative_eq!(ppf, 30.0, epsilon = 1e-4);
        assert_eq!(state.mode, EditorMode::Navigate);
    }

    #[test]
    fn test_invalid_distance_keeps_prompt_and_scale() {
        let mut state = calibrating(Vec2::ZERO, Vec2::new(300.0, 0.0));
        submit_distance(&mut state, "ten feet");
        assert!(!state.plan.calibration.is_calibrated());
        assert!(state.mode.awaits_text_input());
        assert!(state.ui.calibration_dialog.error.is_some());
    }

    #[test]
    fn test_third_click_is_ignored_while_awaiting() {
        let mut state = calibrating(Vec2::ZERO, Vec2::new(300.0, 0.0));
        add_point(&mut state, Vec2::new(50.0, 50.0));
        match &state.mode {
            EditorMode::Calibrate { points, .. } => assert_eq!(points.len(), 2),
            other => panic!("unerwarteter Modus: {:?}", other),
        }
    }

    #[test]
    fn test_dragging_point_moves_it() {
        let mut state = calibrating(Vec2::ZERO, Vec2::new(300.0, 0.0));
        begin_point_drag(&mut state, 1);
        update_point_drag(&mut state, Vec2::new(600.0, 0.0));
        end_point_drag(&mut state);
        submit_distance(&mut state, "20'");
        let ppf = state.plan.calibration.pixels_per_foot.expect("kalibriert");
        assert_relative_eq!(ppf, 30.0, epsilon = 1e-4);
    }

    #[test]
    fn test_cancel_removes_second_point() {
        let mut state = calibrating(Vec2::ZERO, Vec2::new(300.0, 0.0));
        cancel_distance(&mut state);
        match &state.mode {
            EditorMode::Calibrate {
                points,
                awaiting_distance,
                ..
            } => {
                assert_eq!(points.len(), 1);
                assert!(!awaiting_distance);
            }
            other => panic!("unerwarteter Modus: {:?}", other),
        }
    }
}
