//! Mapping von UI-Intents auf mutierende App-Commands.
//!
//! Zeiger-Intents werden hier in Bildpixel umgerechnet und anhand des
//! aktiven Modus und der Treffertests in Commands übersetzt.

use super::state::{DeviceTool, EditorMode, Gesture, MaskTool};
use super::{AppCommand, AppIntent, AppState};
use crate::core::geometry::point_in_polygon;
use crate::core::LayerId;
use glam::Vec2;

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
        AppIntent::FrameTick { now } => vec![AppCommand::PersistenceTick { now }],
        AppIntent::LoadRecordsRequested => vec![AppCommand::LoadRecords],

        AppIntent::OpenBaseImageRequested => vec![AppCommand::RequestBaseImageDialog],
        AppIntent::OpenOverlayImageRequested => vec![AppCommand::RequestOverlayImageDialog],
        AppIntent::BaseImageSelected { path } => vec![AppCommand::LoadBaseImage { path }],
        AppIntent::OverlayImageSelected { path } => vec![AppCommand::LoadOverlayImage { path }],

        AppIntent::ViewportResized { size } => vec![AppCommand::SetViewportSize { size }],
        AppIntent::PointerPressed { pos } => pointer_pressed(state, pos),
        AppIntent::PointerMoved { pos } => pointer_moved(state, pos),
        AppIntent::PointerReleased { pos } => pointer_released(state, pos),
        AppIntent::PointerLeft => vec![AppCommand::SetPointerPosition { natural: None }],
        AppIntent::ViewPanned { delta } => vec![AppCommand::PanView { delta }],
        AppIntent::WheelScrolled { delta } => vec![AppCommand::ApplyWheelZoom { delta }],
        AppIntent::ZoomInRequested => vec![AppCommand::ZoomIn],
        AppIntent::ZoomOutRequested => vec![AppCommand::ZoomOut],
        AppIntent::ResetViewRequested => vec![AppCommand::ResetView],

        AppIntent::LayerActivated { layer } => vec![AppCommand::ActivateLayer { layer }],
        AppIntent::LayerVisibilityToggled { layer } => vec![AppCommand::SetLayerVisibility {
            layer,
            visible: !state.view.layers.is_visible(layer),
        }],
        AppIntent::LayerOpacityChanged { layer, opacity } => {
            vec![AppCommand::SetLayerOpacity {
                layer,
                opacity: opacity.min(100),
            }]
        }
        AppIntent::CalibrateToolRequested => vec![AppCommand::EnterCalibrate],
        AppIntent::MeasureToolRequested => vec![AppCommand::EnterMeasure],
        AppIntent::CalibrationDistanceSubmitted { input } => {
            vec![AppCommand::SubmitCalibrationDistance { input }]
        }
        AppIntent::CalibrationDistanceCancelled => vec![AppCommand::CancelCalibrationDistance],

        AppIntent::DrawRoomToggled => vec![AppCommand::ToggleRoomDrawing],
        AppIntent::RoomNameConfirmed { name } => vec![AppCommand::ConfirmRoomName { name }],
        AppIntent::RoomNameCancelled => vec![AppCommand::CancelRoomName],
        AppIntent::RoomRenamed { id, name } => vec![AppCommand::RenameRoom { id, name }],
        AppIntent::RoomVisibilityToggled { id } => match state.plan.rooms.get(&id) {
            Some(room) => vec![AppCommand::SetRoomVisibility {
                visible: !room.visible,
                id,
            }],
            None => vec![],
        },

        AppIntent::MaskToolSelected { tool } => vec![AppCommand::SetMaskTool { tool }],
        AppIntent::MaskVisibilityToggled { id } => match state.plan.masks.get(&id) {
            Some(mask) => vec![AppCommand::SetMaskVisibility {
                visible: !mask.visible,
                id,
            }],
            None => vec![],
        },

        AppIntent::DeviceToolSelected { tool } => vec![AppCommand::SetDeviceTool { tool }],
        AppIntent::DeviceTemplateChanged { template } => {
            vec![AppCommand::SetDeviceTemplate { template }]
        }
        AppIntent::DeviceMountingHeightChanged { id, height } => {
            vec![AppCommand::SetDeviceMountingHeight { id, height }]
        }
        AppIntent::HeightSettingsChanged { heights } => {
            vec![AppCommand::SetHeightSettings { heights }]
        }
        AppIntent::LocateDeviceRequested { id } => vec![AppCommand::LocateDevice { id }],

        AppIntent::OverlayNudged { adjust } => vec![AppCommand::AdjustOverlay { adjust }],
        AppIntent::OverlayLockToggled => vec![AppCommand::ToggleOverlayLock],

        AppIntent::FinishDrawingRequested => vec![AppCommand::FinishDrawing],
        AppIntent::UndoDrawingPointRequested => vec![AppCommand::UndoDrawingPoint],
        AppIntent::RotateSelectionRequested { degrees } => {
            vec![AppCommand::RotateSelection { degrees }]
        }
        AppIntent::DeleteSelectionRequested => vec![AppCommand::DeleteSelection],
        AppIntent::CancelRequested => cancel_cascade(state),
        AppIntent::UndoRequested => vec![AppCommand::Undo],
        AppIntent::RedoRequested => vec![AppCommand::Redo],

        AppIntent::OpenOptionsDialogRequested => vec![AppCommand::OpenOptionsDialog],
        AppIntent::CloseOptionsDialogRequested => vec![AppCommand::CloseOptionsDialog],
        AppIntent::OptionsChanged { options } => vec![AppCommand::ApplyOptions { options }],
        AppIntent::ResetOptionsRequested => vec![AppCommand::ResetOptions],
    }
}

/// Pick-Radius für Handles (Raum-Ecken, Masken-Ecken) in Bildpixeln.
fn handle_radius(state: &AppState) -> f32 {
    let px = state.options.handle_pick_radius_px;
    state.view.screen_len_to_natural(px).unwrap_or(px)
}

fn pointer_pressed(state: &AppState, pos: Vec2) -> Vec<AppCommand> {
    let Some(point) = state.view.screen_to_natural(pos) else {
        return vec![];
    };
    let pan = AppCommand::StartPan { pointer: pos };

    match &state.mode {
        EditorMode::Navigate => vec![pan],

        EditorMode::Overlay { .. } => {
            let overlay = &state.plan.overlay;
            let hit = state.view.overlay_image.as_ref().is_some_and(|image| {
                point_in_polygon(point, &overlay.corners(image.natural_size()))
            });
            if hit && !overlay.locked {
                vec![AppCommand::BeginOverlayDrag { point }]
            } else {
                vec![pan]
            }
        }

        EditorMode::Rooms {
            drawing,
            selected,
            pending_name,
            ..
        } => {
            if pending_name.is_some() {
                return vec![];
            }
            if drawing.is_active() {
                return vec![AppCommand::AddDrawingPoint { point }];
            }
            let corner = selected
                .as_ref()
                .and_then(|id| state.plan.rooms.get(id))
                .and_then(|room| room.vertex_near(point, handle_radius(state)));
            if let Some(index) = corner {
                return vec![AppCommand::BeginRoomCornerDrag { index }];
            }
            match state.plan.room_at(point) {
                Some(room) => vec![AppCommand::SelectRoom {
                    id: Some(room.id.clone()),
                }],
                None => vec![AppCommand::SelectRoom { id: None }, pan],
            }
        }

        EditorMode::Masks {
            tool,
            drawing,
            selected,
            ..
        } => {
            let selected_mask = selected.as_ref().and_then(|id| state.plan.masks.get(id));
            if let Some(mask) = selected_mask {
                if let Some(corner) = mask.corner_near(point, handle_radius(state)) {
                    return vec![AppCommand::BeginMaskResize { corner, point }];
                }
                if mask.contains(point) {
                    return vec![AppCommand::BeginMaskMove { point }];
                }
            }
            if drawing.has_points() {
                return vec![AppCommand::AddDrawingPoint { point }];
            }
            if let Some(mask) = state.plan.mask_at(point) {
                return vec![
                    AppCommand::SelectMask {
                        id: Some(mask.id.clone()),
                    },
                    AppCommand::BeginMaskMove { point },
                ];
            }
            let create = match tool {
                MaskTool::Polygon => AppCommand::AddDrawingPoint { point },
                MaskTool::Rectangle => AppCommand::BeginMaskRect { point },
            };
            if selected.is_some() {
                vec![AppCommand::SelectMask { id: None }, create]
            } else {
                vec![create]
            }
        }

        EditorMode::Devices { tool, .. } => {
            let hit = state
                .plan
                .device_near(point, state.options.device_pick_radius)
                .map(|d| d.id.clone());
            match (tool, hit) {
                (DeviceTool::Place, Some(id)) => vec![
                    AppCommand::SelectDevice { id: Some(id) },
                    AppCommand::BeginDeviceDrag,
                ],
                (DeviceTool::Place, None) => vec![AppCommand::PlaceDevice { point }],
                (DeviceTool::Route, Some(id)) => vec![AppCommand::RouteClick { id }],
                (DeviceTool::Route, None) => vec![pan],
            }
        }

        EditorMode::Calibrate {
            points,
            awaiting_distance,
            ..
        } => {
            let radius = state.options.calibration_reedit_radius;
            let grabbed = points
                .iter()
                .enumerate()
                .map(|(i, p)| (i, p.distance(point)))
                .filter(|(_, d)| *d <= radius)
                .min_by(|a, b| a.1.total_cmp(&b.1))
                .map(|(i, _)| i);
            match grabbed {
                Some(index) => vec![AppCommand::BeginCalibrationPointDrag { index }],
                None if !awaiting_distance && points.len() < 2 => {
                    vec![AppCommand::AddCalibrationPoint { point }]
                }
                None => vec![pan],
            }
        }

        EditorMode::Measure { .. } => vec![AppCommand::AddMeasurePoint { point }],
    }
}

fn pointer_moved(state: &AppState, pos: Vec2) -> Vec<AppCommand> {
    let natural = state.view.screen_to_natural(pos);
    let mut commands = vec![AppCommand::SetPointerPosition { natural }];

    if matches!(state.view.gesture, Gesture::Panning { .. }) {
        commands.push(AppCommand::UpdatePan { pointer: pos });
        return commands;
    }
    let Some(point) = natural else {
        return commands;
    };
    let update = match &state.mode {
        EditorMode::Overlay {
            drag_last: Some(_),
        } => Some(AppCommand::UpdateOverlayDrag { point }),
        EditorMode::Rooms {
            corner_drag: Some(_),
            ..
        } => Some(AppCommand::UpdateRoomCornerDrag { point }),
        EditorMode::Masks {
            manipulation: Some(_),
            ..
        } => Some(AppCommand::UpdateMaskManipulation { point }),
        EditorMode::Masks {
            rect_draft: Some(_),
            ..
        } => Some(AppCommand::UpdateMaskRect { point }),
        EditorMode::Devices { dragging: true, .. } => Some(AppCommand::UpdateDeviceDrag { point }),
        EditorMode::Calibrate {
            dragging: Some(_),
            ..
        } => Some(AppCommand::UpdateCalibrationPointDrag { point }),
        _ => None,
    };
    commands.extend(update);
    commands
}

fn pointer_released(state: &AppState, pos: Vec2) -> Vec<AppCommand> {
    if matches!(state.view.gesture, Gesture::Panning { .. }) {
        return vec![AppCommand::EndPan];
    }
    match &state.mode {
        EditorMode::Overlay {
            drag_last: Some(_),
        } => vec![AppCommand::EndOverlayDrag],
        EditorMode::Rooms {
            corner_drag: Some(_),
            ..
        } => vec![AppCommand::EndRoomCornerDrag],
        EditorMode::Masks {
            manipulation: Some(_),
            ..
        } => vec![AppCommand::EndMaskManipulation],
        EditorMode::Masks {
            rect_draft: Some(_),
            ..
        } => {
            let mut commands: Vec<_> = state
                .view
                .screen_to_natural(pos)
                .map(|point| AppCommand::UpdateMaskRect { point })
                .into_iter()
                .collect();
            commands.push(AppCommand::EndMaskRect);
            commands
        }
        EditorMode::Devices { dragging: true, .. } => vec![AppCommand::EndDeviceDrag],
        EditorMode::Calibrate {
            dragging: Some(_),
            ..
        } => vec![AppCommand::EndCalibrationPointDrag],
        _ => vec![],
    }
}

/// Escape: bricht schrittweise ab, vom Innersten zum Modus selbst.
fn cancel_cascade(state: &AppState) -> Vec<AppCommand> {
    let back_to_navigate = AppCommand::ActivateLayer {
        layer: LayerId::Base,
    };
    match &state.mode {
        EditorMode::Rooms {
            pending_name: Some(_),
            ..
        } => return vec![AppCommand::CancelRoomName],
        EditorMode::Calibrate {
            points,
            awaiting_distance,
            ..
        } => {
            return if *awaiting_distance {
                vec![AppCommand::CancelCalibrationDistance]
            } else if !points.is_empty() {
                vec![AppCommand::RemoveLastCalibrationPoint]
            } else {
                vec![back_to_navigate]
            };
        }
        _ => {}
    }

    if state.mode.is_drawing_polygon() {
        return vec![AppCommand::UndoDrawingPoint];
    }
    if let EditorMode::Rooms { drawing, .. } = &state.mode {
        if drawing.is_active() {
            return vec![AppCommand::ToggleRoomDrawing];
        }
    }
    if !state.mode.route().is_empty() {
        return vec![AppCommand::CancelRoute];
    }
    let has_selection = state.mode.selected_room().is_some()
        || state.mode.selected_mask().is_some()
        || state.mode.selected_device().is_some();
    if has_selection {
        return vec![AppCommand::ClearSelection];
    }
    match &state.mode {
        EditorMode::Measure { points, .. } if !points.is_empty() => {
            vec![AppCommand::ClearMeasurement]
        }
        EditorMode::Navigate => vec![],
        _ => vec![back_to_navigate],
    }
}
