use super::*;
use crate::app::{DeviceTool, MaskTool};
use crate::core::OverlayAdjust;

fn key_event(key: egui::Key, modifiers: egui::Modifiers) -> egui::Event {
    egui::Event::Key {
        key,
        physical_key: None,
        pressed: true,
        repeat: false,
        modifiers,
    }
}

fn collect_with_key_event(event: egui::Event, mode: &EditorMode) -> Vec<AppIntent> {
    let ctx = egui::Context::default();
    let mut raw_input = egui::RawInput::default();
    if let egui::Event::Key { modifiers, .. } = &event {
        raw_input.modifiers = *modifiers;
    }
    raw_input.events.push(event);

    let mut events = Vec::new();
    let _ = ctx.run(raw_input, |ctx| {
        egui::CentralPanel::default().show(ctx, |ui| {
            events = collect_keyboard_intents(ui, mode);
        });
    });

    events
}

fn press(key: egui::Key, mode: &EditorMode) -> Vec<AppIntent> {
    collect_with_key_event(key_event(key, egui::Modifiers::default()), mode)
}

fn mask_mode_with_selection() -> EditorMode {
    EditorMode::Masks {
        tool: MaskTool::Rectangle,
        drawing: Default::default(),
        rect_draft: None,
        selected: Some("mask-1".into()),
        manipulation: None,
    }
}

#[test]
fn test_ctrl_z_emits_undo() {
    let events = collect_with_key_event(
        key_event(egui::Key::Z, egui::Modifiers::COMMAND),
        &EditorMode::Navigate,
    );

    assert_eq!(events.len(), 1);
    assert!(matches!(events[0], AppIntent::UndoRequested));
}

#[test]
fn test_ctrl_shift_z_emits_redo() {
    let events = collect_with_key_event(
        key_event(
            egui::Key::Z,
            egui::Modifiers::COMMAND | egui::Modifiers::SHIFT,
        ),
        &EditorMode::Navigate,
    );

    assert!(events
        .iter()
        .any(|event| matches!(event, AppIntent::RedoRequested)));
    assert!(!events
        .iter()
        .any(|event| matches!(event, AppIntent::UndoRequested)));
}

#[test]
fn test_r_rotates_selected_mask_by_45_degrees() {
    let events = press(egui::Key::R, &mask_mode_with_selection());

    assert!(events.iter().any(|event| matches!(
        event,
        AppIntent::RotateSelectionRequested { degrees } if (*degrees - 45.0).abs() < 1e-6
    )));
}

#[test]
fn test_arrow_left_rotates_selected_mask_counter_clockwise() {
    let events = press(egui::Key::ArrowLeft, &mask_mode_with_selection());

    assert!(events.iter().any(|event| matches!(
        event,
        AppIntent::RotateSelectionRequested { degrees } if (*degrees + 1.0).abs() < 1e-6
    )));
}

#[test]
fn test_delete_with_selected_device_emits_delete_intent() {
    let mode = EditorMode::Devices {
        tool: DeviceTool::Place,
        selected: Some("dev".into()),
        dragging: false,
        route: Vec::new(),
    };

    let events = press(egui::Key::Delete, &mode);

    assert!(events
        .iter()
        .any(|event| matches!(event, AppIntent::DeleteSelectionRequested)));
}

#[test]
fn test_delete_without_selection_is_ignored() {
    let events = press(egui::Key::Delete, &EditorMode::rooms());

    assert!(events.is_empty());
}

#[test]
fn test_enter_while_drawing_finishes_polygon() {
    let mut mode = EditorMode::masks(MaskTool::Polygon);
    if let Some(drawing) = mode.drawing_mut() {
        let _ = drawing.add_point(glam::Vec2::new(5.0, 5.0), 10.0);
    }

    let events = press(egui::Key::Enter, &mode);
    assert!(events
        .iter()
        .any(|event| matches!(event, AppIntent::FinishDrawingRequested)));

    let events = press(egui::Key::Escape, &mode);
    assert!(events
        .iter()
        .any(|event| matches!(event, AppIntent::UndoDrawingPointRequested)));
    assert!(!events
        .iter()
        .any(|event| matches!(event, AppIntent::CancelRequested)));
}

#[test]
fn test_escape_without_drawing_emits_cancel() {
    let events = press(egui::Key::Escape, &mask_mode_with_selection());

    assert_eq!(events.len(), 1);
    assert!(matches!(events[0], AppIntent::CancelRequested));
}

#[test]
fn test_overlay_arrow_with_shift_moves_ten_pixels() {
    let mode = EditorMode::Overlay { drag_last: None };

    let events = collect_with_key_event(
        key_event(egui::Key::ArrowRight, egui::Modifiers::SHIFT),
        &mode,
    );

    assert_eq!(events.len(), 1);
    assert!(matches!(
        events[0],
        AppIntent::OverlayNudged {
            adjust: OverlayAdjust::Move(delta)
        } if delta == glam::Vec2::new(10.0, 0.0)
    ));
}

#[test]
fn test_overlay_minus_scales_instead_of_zooming() {
    let mode = EditorMode::Overlay { drag_last: None };

    let events = press(egui::Key::Minus, &mode);

    assert!(events.iter().any(|event| matches!(
        event,
        AppIntent::OverlayNudged {
            adjust: OverlayAdjust::Scale(delta)
        } if (*delta + 0.01).abs() < 1e-6
    )));
    assert!(!events
        .iter()
        .any(|event| matches!(event, AppIntent::ZoomOutRequested)));
}

#[test]
fn test_l_toggles_overlay_lock() {
    let events = press(egui::Key::L, &EditorMode::Overlay { drag_last: None });

    assert!(events
        .iter()
        .any(|event| matches!(event, AppIntent::OverlayLockToggled)));
}

#[test]
fn test_zero_resets_view() {
    let events = press(egui::Key::Num0, &EditorMode::Navigate);

    assert!(events
        .iter()
        .any(|event| matches!(event, AppIntent::ResetViewRequested)));
}
