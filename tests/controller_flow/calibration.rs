use super::common::{click, draw_room, editor, rect, send, use_device_template};
use approx::assert_relative_eq;
use floorplan_editor::app::DeviceTool;
use floorplan_editor::core::estimate_between;
use floorplan_editor::{AppIntent, EditorMode, Topology};
use glam::Vec2;

#[test]
fn test_two_points_300px_apart_with_10_ft_give_30_px_per_foot() {
    let (mut controller, mut state) = editor();

    send(&mut controller, &mut state, AppIntent::CalibrateToolRequested);
    click(&mut controller, &mut state, Vec2::new(100.0, 200.0));
    click(&mut controller, &mut state, Vec2::new(400.0, 200.0));

    assert!(matches!(
        state.mode,
        EditorMode::Calibrate {
            awaiting_distance: true,
            ..
        }
    ));
    assert!(state.mode.awaits_text_input());

    send(
        &mut controller,
        &mut state,
        AppIntent::CalibrationDistanceSubmitted {
            input: "10 ft".into(),
        },
    );

    let ppf = state
        .plan
        .calibration
        .pixels_per_foot
        .expect("Maßstab sollte gesetzt sein");
    assert_relative_eq!(ppf, 30.0, epsilon = 1e-4);
    assert!(matches!(state.mode, EditorMode::Navigate));
}

#[test]
fn test_invalid_distance_keeps_dialog_open_with_error() {
    let (mut controller, mut state) = editor();

    send(&mut controller, &mut state, AppIntent::CalibrateToolRequested);
    click(&mut controller, &mut state, Vec2::new(100.0, 100.0));
    click(&mut controller, &mut state, Vec2::new(300.0, 100.0));
    send(
        &mut controller,
        &mut state,
        AppIntent::CalibrationDistanceSubmitted {
            input: "abc".into(),
        },
    );

    assert!(!state.plan.calibration.is_calibrated());
    assert!(state.ui.calibration_dialog.error.is_some());
    assert!(state.mode.awaits_text_input());
}

#[test]
fn test_cancel_distance_drops_second_point_only() {
    let (mut controller, mut state) = editor();

    send(&mut controller, &mut state, AppIntent::CalibrateToolRequested);
    click(&mut controller, &mut state, Vec2::new(100.0, 100.0));
    click(&mut controller, &mut state, Vec2::new(300.0, 100.0));
    send(
        &mut controller,
        &mut state,
        AppIntent::CalibrationDistanceCancelled,
    );

    match &state.mode {
        EditorMode::Calibrate {
            points,
            awaiting_distance,
            ..
        } => {
            assert_eq!(points, &vec![Vec2::new(100.0, 100.0)]);
            assert!(!awaiting_distance);
        }
        other => panic!("Unerwarteter Modus: {other:?}"),
    }
}

#[test]
fn test_cable_estimate_after_calibration() {
    let (mut controller, mut state) = editor();

    send(&mut controller, &mut state, AppIntent::CalibrateToolRequested);
    click(&mut controller, &mut state, Vec2::new(100.0, 50.0));
    click(&mut controller, &mut state, Vec2::new(400.0, 50.0));
    send(
        &mut controller,
        &mut state,
        AppIntent::CalibrationDistanceSubmitted {
            input: "10'".into(),
        },
    );

    draw_room(
        &mut controller,
        &mut state,
        "Hall",
        &rect(Vec2::new(50.0, 200.0), Vec2::new(700.0, 200.0)),
    );
    use_device_template(
        &mut controller,
        &mut state,
        Topology::Dali,
        "dt-downlight",
        "lcp-1:1",
    );
    click(&mut controller, &mut state, Vec2::new(100.0, 300.0));
    click(&mut controller, &mut state, Vec2::new(700.0, 300.0));

    let [a, b] = &state.plan.devices[..] else {
        panic!("Es sollten genau zwei Geräte existieren");
    };
    let estimate = estimate_between(a, b, &state.plan.calibration, &state.plan.heights)
        .expect("kalibriert");

    // 600 px horizontal, gleiche Höhe, ein Bogen
    assert_eq!(estimate.bends, 1);
    assert_relative_eq!(
        estimate.total_feet(),
        600.0 / 30.0 + state.plan.heights.bend_slack_per_bend,
        epsilon = 1e-3
    );

    send(
        &mut controller,
        &mut state,
        AppIntent::DeviceToolSelected {
            tool: DeviceTool::Route,
        },
    );
    assert!(state.mode.route().is_empty());
}

#[test]
fn test_cable_estimate_without_calibration_is_uncalibrated() {
    let (mut controller, mut state) = editor();

    draw_room(
        &mut controller,
        &mut state,
        "Hall",
        &rect(Vec2::new(50.0, 50.0), Vec2::new(500.0, 300.0)),
    );
    use_device_template(
        &mut controller,
        &mut state,
        Topology::Knx,
        "dt-switch",
        "knx-lcp-1",
    );
    click(&mut controller, &mut state, Vec2::new(100.0, 100.0));
    click(&mut controller, &mut state, Vec2::new(300.0, 200.0));

    let [a, b] = &state.plan.devices[..] else {
        panic!("Es sollten genau zwei Geräte existieren");
    };
    assert!(estimate_between(a, b, &state.plan.calibration, &state.plan.heights).is_err());
}
