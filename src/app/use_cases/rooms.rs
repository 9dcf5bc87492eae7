//! Use-Case-Funktionen für Räume: Anlegen, Selektion, Eckpunkte, Beschriftung.

use super::layers;
use crate::app::persistence::RecordKind;
use crate::app::state::{EditorMode, RoomNameDialogState};
use crate::app::AppState;
use crate::core::Room;
use glam::Vec2;

/// Schaltet "Draw New Room" um; außerhalb des Raum-Modus wird dieser aktiviert.
pub fn toggle_drawing(state: &mut AppState) {
    if !matches!(state.mode, EditorMode::Rooms { .. }) {
        layers::set_mode(state, EditorMode::rooms());
    }
    if let EditorMode::Rooms {
        drawing,
        selected,
        corner_drag,
        pending_name,
    } = &mut state.mode
    {
        if pending_name.is_some() {
            return;
        }
        if drawing.is_active() {
            drawing.cancel();
            log::debug!("Raum-Zeichnen beendet");
        } else {
            drawing.start();
            *selected = None;
            *corner_drag = None;
            log::debug!("Raum-Zeichnen gestartet");
        }
    }
}

/// Ein geschlossenes Polygon wartet auf seinen Namen.
pub fn polygon_completed(state: &mut AppState, points: Vec<Vec2>) {
    if let EditorMode::Rooms { pending_name, .. } = &mut state.mode {
        log::debug!("Raum-Polygon mit {} Punkten geschlossen", points.len());
        *pending_name = Some(points);
        state.ui.room_name_dialog = RoomNameDialogState::default();
    }
}

/// Legt den wartenden Raum mit `name` an und zeichnet den nächsten.
pub fn confirm_name(state: &mut AppState, name: String) {
    let name = name.trim().to_string();
    if name.is_empty() {
        state.show_warning("Please enter a room name");
        return;
    }
    let EditorMode::Rooms { pending_name, .. } = &mut state.mode else {
        return;
    };
    let Some(points) = pending_name.take() else {
        return;
    };

    let id = state.plan.next_room_id();
    let color_index = state.plan.rooms.len();
    let Some(room) = Room::from_polygon(id.clone(), name.clone(), points, color_index) else {
        log::warn!("Raum-Polygon ohne Fläche, verworfen");
        state.show_warning("Room outline has no area");
        state.ui.room_name_dialog = RoomNameDialogState::default();
        if let EditorMode::Rooms { drawing, .. } = &mut state.mode {
            drawing.start();
        }
        return;
    };
    state.record_undo_snapshot();
    state.plan_mut().add_room(room);
    state.mark_dirty(RecordKind::Rooms);
    state.ui.room_name_dialog = RoomNameDialogState::default();
    log::info!("Raum '{}' angelegt ({})", name, id);

    if let EditorMode::Rooms { drawing, .. } = &mut state.mode {
        drawing.start();
    }
}

/// Verwirft das wartende Polygon; das Zeichnen endet.
pub fn cancel_name(state: &mut AppState) {
    if let EditorMode::Rooms { pending_name, .. } = &mut state.mode {
        if pending_name.take().is_some() {
            log::debug!("Raum-Polygon verworfen");
        }
    }
    state.ui.room_name_dialog = RoomNameDialogState::default();
}

/// Selektiert einen Raum oder hebt die Selektion auf.
pub fn select(state: &mut AppState, id: Option<String>) {
    if let EditorMode::Rooms {
        selected,
        corner_drag,
        ..
    } = &mut state.mode
    {
        *selected = id.filter(|id| state.plan.rooms.contains_key(id));
        *corner_drag = None;
    }
}

/// Greift einen Eckpunkt des selektierten Raums.
pub fn begin_corner_drag(state: &mut AppState, index: usize) {
    let valid = state
        .mode
        .selected_room()
        .and_then(|id| state.plan.rooms.get(id))
        .is_some_and(|room| index < room.path.len());
    if !valid {
        return;
    }
    state.record_undo_snapshot();
    if let EditorMode::Rooms { corner_drag, .. } = &mut state.mode {
        *corner_drag = Some(index);
    }
}

/// Verschiebt den gegriffenen Eckpunkt.
pub fn update_corner_drag(state: &mut AppState, point: Vec2) {
    let EditorMode::Rooms {
        selected: Some(id),
        corner_drag: Some(index),
        ..
    } = &state.mode
    else {
        return;
    };
    let (id, index) = (id.clone(), *index);
    if let Some(room) = state.plan_mut().rooms.get_mut(&id) {
        room.move_vertex(index, point);
        state.mark_dirty(RecordKind::Rooms);
    }
}

/// Lässt den Eckpunkt los.
pub fn end_corner_drag(state: &mut AppState) {
    if let EditorMode::Rooms { corner_drag, .. } = &mut state.mode {
        *corner_drag = None;
    }
}

/// Benennt einen Raum um; Geräte behalten ihre eingefrorene ID.
pub fn rename(state: &mut AppState, id: &str, name: String) {
    let name = name.trim().to_string();
    if name.is_empty() || !state.plan.rooms.contains_key(id) {
        return;
    }
    state.record_undo_snapshot();
    let plan = state.plan_mut();
    if let Some(room) = plan.rooms.get_mut(id) {
        room.name = name.clone();
    }
    for device in plan
        .devices
        .iter_mut()
        .filter(|d| d.room_id.as_deref() == Some(id))
    {
        device.room_name = Some(name.clone());
    }
    state.mark_dirty(RecordKind::Rooms);
    state.mark_dirty(RecordKind::Devices);
    log::info!("Raum {} umbenannt in '{}'", id, name);
}

/// Blendet einen Raum ein oder aus (unsichtbare Räume zählen nicht für Geräte).
pub fn set_visibility(state: &mut AppState, id: &str, visible: bool) {
    if !state.plan.rooms.contains_key(id) {
        return;
    }
    state.record_undo_snapshot();
    if let Some(room) = state.plan_mut().rooms.get_mut(id) {
        room.visible = visible;
    }
    state.mark_dirty(RecordKind::Rooms);
}

/// Dreht die Beschriftung des selektierten Raums.
pub fn rotate_selected_label(state: &mut AppState, degrees: f32) {
    let Some(id) = state.mode.selected_room().map(str::to_string) else {
        return;
    };
    state.record_undo_snapshot();
    if let Some(room) = state.plan_mut().rooms.get_mut(&id) {
        room.rotate_label(degrees);
    }
    state.mark_dirty(RecordKind::Rooms);
}

/// Löscht den selektierten Raum.
pub fn delete_selected(state: &mut AppState) {
    let Some(id) = state.mode.selected_room().map(str::to_string) else {
        return;
    };
    state.record_undo_snapshot();
    if let Some(room) = state.plan_mut().remove_room(&id) {
        log::info!("Raum '{}' gelöscht", room.name);
    }
    select(state, None);
    state.mark_dirty(RecordKind::Rooms);
}
