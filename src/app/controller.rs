//! Application Controller für zentrale Event-Verarbeitung.

use super::render_scene;
use super::{AppCommand, AppIntent, AppState};
use crate::shared::RenderScene;

/// Orchestriert UI-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        // Frame-Ticks nicht loggen
        if !matches!(command, AppCommand::PersistenceTick { .. }) {
            state.command_log.record(&command);
        }
        use super::handlers;

        match command {
            // === Anwendung & Persistenz ===
            AppCommand::RequestExit => handlers::dialog::request_exit(state),
            AppCommand::PersistenceTick { now } => handlers::persistence::tick(state, now),
            AppCommand::LoadRecords => handlers::persistence::load_records(state),

            // === Datei-I/O ===
            AppCommand::RequestBaseImageDialog => handlers::file_io::request_base_image(state),
            AppCommand::RequestOverlayImageDialog => {
                handlers::file_io::request_overlay_image(state)
            }
            AppCommand::LoadBaseImage { path } => handlers::file_io::load_base_image(state, path)?,
            AppCommand::LoadOverlayImage { path } => {
                handlers::file_io::load_overlay_image(state, path)?
            }

            // === Ansicht & Viewport ===
            AppCommand::SetViewportSize { size } => handlers::view::set_viewport_size(state, size),
            AppCommand::StartPan { pointer } => handlers::view::start_pan(state, pointer),
            AppCommand::UpdatePan { pointer } => handlers::view::update_pan(state, pointer),
            AppCommand::EndPan => handlers::view::end_pan(state),
            AppCommand::PanView { delta } => handlers::view::pan(state, delta),
            AppCommand::ApplyWheelZoom { delta } => handlers::view::apply_wheel_zoom(state, delta),
            AppCommand::ZoomIn => handlers::view::zoom_in(state),
            AppCommand::ZoomOut => handlers::view::zoom_out(state),
            AppCommand::ResetView => handlers::view::reset_view(state),
            AppCommand::SetPointerPosition { natural } => {
                handlers::view::set_pointer_position(state, natural)
            }

            // === Layer & Modus ===
            AppCommand::ActivateLayer { layer } => handlers::layers::activate(state, layer),
            AppCommand::SetLayerVisibility { layer, visible } => {
                handlers::layers::set_visibility(state, layer, visible)
            }
            AppCommand::SetLayerOpacity { layer, opacity } => {
                handlers::layers::set_opacity(state, layer, opacity)
            }
            AppCommand::EnterCalibrate => handlers::layers::enter_calibrate(state),
            AppCommand::EnterMeasure => handlers::layers::enter_measure(state),

            // === Polygon-Zeichnen ===
            AppCommand::AddDrawingPoint { point } => handlers::drawing::add_point(state, point),
            AppCommand::FinishDrawing => handlers::drawing::finish(state),
            AppCommand::UndoDrawingPoint => handlers::drawing::undo_point(state),

            // === Räume ===
            AppCommand::ToggleRoomDrawing => handlers::rooms::toggle_drawing(state),
            AppCommand::ConfirmRoomName { name } => handlers::rooms::confirm_name(state, name),
            AppCommand::CancelRoomName => handlers::rooms::cancel_name(state),
            AppCommand::SelectRoom { id } => handlers::rooms::select(state, id),
            AppCommand::BeginRoomCornerDrag { index } => {
                handlers::rooms::begin_corner_drag(state, index)
            }
            AppCommand::UpdateRoomCornerDrag { point } => {
                handlers::rooms::update_corner_drag(state, point)
            }
            AppCommand::EndRoomCornerDrag => handlers::rooms::end_corner_drag(state),
            AppCommand::RenameRoom { id, name } => handlers::rooms::rename(state, &id, name),
            AppCommand::SetRoomVisibility { id, visible } => {
                handlers::rooms::set_visibility(state, &id, visible)
            }

            // === Masken ===
            AppCommand::SetMaskTool { tool } => handlers::masks::set_tool(state, tool),
            AppCommand::SelectMask { id } => handlers::masks::select(state, id),
            AppCommand::BeginMaskMove { point } => handlers::masks::begin_move(state, point),
            AppCommand::BeginMaskResize { corner, point } => {
                handlers::masks::begin_resize(state, corner, point)
            }
            AppCommand::UpdateMaskManipulation { point } => {
                handlers::masks::update_manipulation(state, point)
            }
            AppCommand::EndMaskManipulation => handlers::masks::end_manipulation(state),
            AppCommand::BeginMaskRect { point } => handlers::masks::begin_rect(state, point),
            AppCommand::UpdateMaskRect { point } => handlers::masks::update_rect(state, point),
            AppCommand::EndMaskRect => handlers::masks::end_rect(state),
            AppCommand::SetMaskVisibility { id, visible } => {
                handlers::masks::set_visibility(state, &id, visible)
            }

            // === Selektion ===
            AppCommand::RotateSelection { degrees } => handlers::selection::rotate(state, degrees),
            AppCommand::DeleteSelection => handlers::selection::delete(state),
            AppCommand::ClearSelection => handlers::selection::clear(state),

            // === Geräte ===
            AppCommand::SetDeviceTool { tool } => handlers::devices::set_tool(state, tool),
            AppCommand::SetDeviceTemplate { template } => {
                handlers::devices::set_template(state, template)
            }
            AppCommand::PlaceDevice { point } => handlers::devices::place(state, point),
            AppCommand::SelectDevice { id } => handlers::devices::select(state, id),
            AppCommand::BeginDeviceDrag => handlers::devices::begin_drag(state),
            AppCommand::UpdateDeviceDrag { point } => handlers::devices::update_drag(state, point),
            AppCommand::EndDeviceDrag => handlers::devices::end_drag(state),
            AppCommand::RouteClick { id } => handlers::devices::route_click(state, &id),
            AppCommand::CancelRoute => handlers::devices::cancel_route(state),
            AppCommand::SetDeviceMountingHeight { id, height } => {
                handlers::devices::set_mounting_height(state, &id, height)
            }
            AppCommand::SetHeightSettings { heights } => {
                handlers::devices::set_heights(state, heights)
            }
            AppCommand::LocateDevice { id } => handlers::devices::locate(state, &id),

            // === Overlay ===
            AppCommand::AdjustOverlay { adjust } => handlers::overlay::adjust(state, adjust),
            AppCommand::ToggleOverlayLock => handlers::overlay::toggle_lock(state),
            AppCommand::BeginOverlayDrag { point } => handlers::overlay::begin_drag(state, point),
            AppCommand::UpdateOverlayDrag { point } => {
                handlers::overlay::update_drag(state, point)
            }
            AppCommand::EndOverlayDrag => handlers::overlay::end_drag(state),

            // === Kalibrierung & Messen ===
            AppCommand::AddCalibrationPoint { point } => {
                handlers::annotations::add_calibration_point(state, point)
            }
            AppCommand::BeginCalibrationPointDrag { index } => {
                handlers::annotations::begin_calibration_point_drag(state, index)
            }
            AppCommand::UpdateCalibrationPointDrag { point } => {
                handlers::annotations::update_calibration_point_drag(state, point)
            }
            AppCommand::EndCalibrationPointDrag => {
                handlers::annotations::end_calibration_point_drag(state)
            }
            AppCommand::RemoveLastCalibrationPoint => {
                handlers::annotations::remove_last_calibration_point(state)
            }
            AppCommand::SubmitCalibrationDistance { input } => {
                handlers::annotations::submit_calibration_distance(state, &input)
            }
            AppCommand::CancelCalibrationDistance => {
                handlers::annotations::cancel_calibration_distance(state)
            }
            AppCommand::AddMeasurePoint { point } => {
                handlers::annotations::add_measure_point(state, point)
            }
            AppCommand::ClearMeasurement => handlers::annotations::clear_measurement(state),

            // === History ===
            AppCommand::Undo => handlers::history::undo(state),
            AppCommand::Redo => handlers::history::redo(state),

            // === Optionen ===
            AppCommand::OpenOptionsDialog => handlers::dialog::open_options_dialog(state),
            AppCommand::CloseOptionsDialog => handlers::dialog::close_options_dialog(state),
            AppCommand::ApplyOptions { options } => {
                handlers::dialog::apply_options(state, *options)?
            }
            AppCommand::ResetOptions => handlers::dialog::reset_options(state)?,
        }

        Ok(())
    }

    /// Springt zu einem Gerät (Einstieg für die umgebende Anwendung).
    pub fn locate_device(&mut self, state: &mut AppState, id: &str) -> anyhow::Result<()> {
        self.handle_intent(
            state,
            AppIntent::LocateDeviceRequested { id: id.to_string() },
        )
    }

    /// Baut die Render-Szene aus dem aktuellen AppState.
    pub fn build_render_scene(&self, state: &AppState, viewport_size: [f32; 2]) -> RenderScene {
        render_scene::build(state, viewport_size)
    }
}
