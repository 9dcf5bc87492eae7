//! Builder für Render-Szenen aus dem AppState.

use crate::app::state::EditorMode;
use crate::app::use_cases::measure::measure_label;
use crate::app::AppState;
use crate::core::{format_feet_inches, ScaleCalibration, ViewportGeometry};
use crate::shared::{DrawingPreview, MeasureLine, RenderScene, ScaleBar};

/// Kandidaten für die Länge des Maßstabsbalkens in Fuß.
const SCALE_BAR_STEPS_FEET: [f32; 9] = [1.0, 2.0, 5.0, 10.0, 20.0, 50.0, 100.0, 200.0, 500.0];
/// Mindestlänge des Maßstabsbalkens auf dem Bildschirm.
const SCALE_BAR_MIN_SCREEN_PX: f32 = 80.0;

/// Baut eine RenderScene aus dem aktuellen AppState.
pub fn build(state: &AppState, viewport_size: [f32; 2]) -> RenderScene {
    let geometry = state.view.geometry();

    let drawing = state
        .mode
        .drawing()
        .filter(|d| d.has_points())
        .map(|d| {
            let cursor = state.view.pointer_natural;
            DrawingPreview {
                points: d.points().to_vec(),
                cursor,
                closes: cursor.is_some_and(|c| {
                    d.is_near_start(c, state.options.polygon_close_threshold)
                }),
            }
        });

    let (rect_draft, calibration_points, measure) = match &state.mode {
        EditorMode::Masks { rect_draft, .. } => (*rect_draft, Vec::new(), None),
        EditorMode::Calibrate { points, .. } => (None, points.clone(), None),
        EditorMode::Measure { points, hover } => {
            let end = points.get(1).copied().or(*hover);
            let line = points.first().zip(end).map(|(&start, end)| MeasureLine {
                start,
                end,
                label: measure_label(start.distance(end), &state.plan.calibration),
            });
            (None, Vec::new(), line)
        }
        _ => (None, Vec::new(), None),
    };

    RenderScene {
        plan: state.plan.clone(),
        geometry,
        viewport_size,
        layers: state.view.layers.clone(),
        base_size: state.view.base_image.as_ref().map(|i| i.natural_size()),
        overlay_size: state.view.overlay_image.as_ref().map(|i| i.natural_size()),
        selected_room: state.mode.selected_room().map(str::to_string),
        selected_mask: state.mode.selected_mask().map(str::to_string),
        selected_device: state.mode.selected_device().map(str::to_string),
        route: state.mode.route().to_vec(),
        drawing,
        rect_draft,
        calibration_points,
        measure,
        scale_bar: geometry.and_then(|g| scale_bar(&state.plan.calibration, &g)),
        options: state.options.clone(),
    }
}

/// Wählt die kürzeste runde Balkenlänge, die auf dem Bildschirm lesbar ist.
fn scale_bar(calibration: &ScaleCalibration, geometry: &ViewportGeometry) -> Option<ScaleBar> {
    let ppf = calibration.pixels_per_foot.filter(|p| *p > 0.0)?;
    let screen_per_foot = ppf * geometry.screen_per_natural();
    let feet = SCALE_BAR_STEPS_FEET
        .into_iter()
        .find(|feet| feet * screen_per_foot >= SCALE_BAR_MIN_SCREEN_PX)
        .unwrap_or(SCALE_BAR_STEPS_FEET[SCALE_BAR_STEPS_FEET.len() - 1]);
    Some(ScaleBar {
        natural_length: feet * ppf,
        label: format_feet_inches(feet),
    })
}

#[cfg(test)]
mod tests {
    use super::build;
    use crate::app::state::EditorMode;
    use crate::app::AppState;
    use crate::core::ScaleCalibration;
    use glam::Vec2;

    #[test]
    fn test_scale_bar_only_when_calibrated() {
        let mut state = AppState::new();
        state.view.viewport_size = Vec2::new(1000.0, 1000.0);
        let scene = build(&state, [1000.0, 1000.0]);
        assert!(scene.scale_bar.is_none());

        state.plan_mut().calibration = ScaleCalibration::with_pixels_per_foot(30.0);
        let scene = build(&state, [1000.0, 1000.0]);
        let bar = scene.scale_bar.expect("Maßstabsbalken");
        // 1:1 ohne Bild → 5 ft = 150 px ist die erste Stufe ≥ 80 px
        assert_eq!(bar.label, "5'");
        assert!((bar.natural_length - 150.0).abs() < 1e-3);
    }

    #[test]
    fn test_measure_line_follows_hover() {
        let mut state = AppState::new();
        state.mode = EditorMode::Measure {
            points: vec![Vec2::ZERO],
            hover: Some(Vec2::new(90.0, 0.0)),
        };
        let scene = build(&state, [800.0, 600.0]);
        let line = scene.measure.expect("Messlinie");
        assert_eq!(line.end, Vec2::new(90.0, 0.0));
        assert_eq!(line.label, "90 px (no scale set)");
    }

    #[test]
    fn test_selection_is_copied_from_mode() {
        let mut state = AppState::new();
        state.mode = EditorMode::Rooms {
            drawing: Default::default(),
            selected: Some("room-1".into()),
            corner_drag: None,
            pending_name: None,
        };
        let scene = build(&state, [800.0, 600.0]);
        assert_eq!(scene.selected_room.as_deref(), Some("room-1"));
        assert!(scene.drawing.is_none());
    }
}
