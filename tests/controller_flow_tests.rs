use floorplan_editor::{AppCommand, AppController, AppIntent, AppState, EditorMode, LayerId};

mod controller_flow;

#[test]
fn test_exit_requested_sets_exit_flag_and_logs_command() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    assert!(!state.should_exit);

    controller
        .handle_intent(&mut state, AppIntent::ExitRequested)
        .expect("ExitRequested sollte ohne Fehler durchlaufen");

    assert!(state.should_exit);

    let last = state
        .command_log
        .entries()
        .last()
        .expect("Es sollte ein Command geloggt sein");

    match last {
        AppCommand::RequestExit => {}
        other => panic!("Unerwarteter letzter Command: {other:?}"),
    }
}

#[test]
fn test_frame_tick_is_not_logged() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(
            &mut state,
            AppIntent::FrameTick {
                now: std::time::Instant::now(),
            },
        )
        .expect("FrameTick sollte ohne Fehler durchlaufen");

    assert!(state.command_log.is_empty());
}

#[test]
fn test_layer_activation_switches_mode_and_keeps_visibility() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let visible_before = state.view.layers.is_visible(LayerId::Devices);

    controller
        .handle_intent(
            &mut state,
            AppIntent::LayerActivated {
                layer: LayerId::Devices,
            },
        )
        .expect("LayerActivated sollte ohne Fehler durchlaufen");

    assert!(matches!(state.mode, EditorMode::Devices { .. }));
    assert_eq!(state.mode.active_layer(), LayerId::Devices);
    assert_eq!(
        state.view.layers.is_visible(LayerId::Devices),
        visible_before
    );
}

#[test]
fn test_missing_base_image_returns_error_and_keeps_state() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    let result = controller.handle_intent(
        &mut state,
        AppIntent::BaseImageSelected {
            path: "/nonexistent/floorplan.png".into(),
        },
    );

    assert!(result.is_err());
    assert!(state.view.base_image.is_none());
}
