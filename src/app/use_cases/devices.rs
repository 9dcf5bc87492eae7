//! Use-Case-Funktionen für Geräte: Platzieren, Verschieben, Verketten.

use super::{camera, layers};
use crate::app::persistence::RecordKind;
use crate::app::state::{DeviceTool, EditorMode};
use crate::app::AppState;
use crate::core::{DeviceTemplate, HeightSettings, MountingHeight};
use glam::Vec2;

/// Wählt das Geräte-Werkzeug (Platzieren oder Verketten).
pub fn set_tool(state: &mut AppState, tool: DeviceTool) {
    match &mut state.mode {
        EditorMode::Devices {
            tool: current,
            dragging,
            route,
            ..
        } => {
            *current = tool;
            *dragging = false;
            route.clear();
        }
        _ => layers::set_mode(state, EditorMode::devices(tool)),
    }
}

/// Übernimmt die Vorlage für neue Geräte.
pub fn set_template(state: &mut AppState, template: DeviceTemplate) {
    state.device_template = template;
}

/// Platziert ein Gerät an `point`; außerhalb aller Räume nur eine Warnung.
pub fn place(state: &mut AppState, point: Vec2) {
    if state.plan.room_at(point).is_none() {
        state.show_warning(crate::core::PlacementError.to_string());
        return;
    }
    state.record_undo_snapshot();
    let template = state.device_template.clone();
    let placed = state
        .plan_mut()
        .place_device(&template, point)
        .map(|device| device.id.clone());
    match placed {
        Ok(id) => {
            log::info!("Gerät {} platziert", id);
            state.mark_dirty(RecordKind::Devices);
            if let EditorMode::Devices { selected, .. } = &mut state.mode {
                *selected = Some(id);
            }
        }
        Err(e) => state.show_warning(e.to_string()),
    }
}

/// Selektiert ein Gerät oder hebt die Selektion auf.
pub fn select(state: &mut AppState, id: Option<String>) {
    if let EditorMode::Devices {
        selected, dragging, ..
    } = &mut state.mode
    {
        *selected = id.filter(|id| state.plan.device(id).is_some());
        *dragging = false;
    }
}

/// Beginnt das Ziehen des selektierten Geräts.
pub fn begin_drag(state: &mut AppState) {
    if state.mode.selected_device().is_none() {
        return;
    }
    state.record_undo_snapshot();
    if let EditorMode::Devices { dragging, .. } = &mut state.mode {
        *dragging = true;
    }
}

/// Verschiebt das gezogene Gerät; die Raumzuordnung folgt.
pub fn update_drag(state: &mut AppState, point: Vec2) {
    let EditorMode::Devices {
        selected: Some(id),
        dragging: true,
        ..
    } = &state.mode
    else {
        return;
    };
    let id = id.clone();
    if state.plan_mut().move_device(&id, point) {
        state.mark_dirty(RecordKind::Devices);
    }
}

/// Lässt das gezogene Gerät los.
pub fn end_drag(state: &mut AppState) {
    if let EditorMode::Devices { dragging, .. } = &mut state.mode {
        *dragging = false;
    }
}

/// Klick auf ein Gerät im Verkettungs-Werkzeug.
///
/// Ein Gerät, das bereits im Pfad steht, kürzt den Pfad bis dorthin.
/// Sonst wird es mit dem letzten Pfadgerät verbunden und angehängt;
/// Geräte aus anderen Netzwerken werden abgelehnt.
pub fn route_click(state: &mut AppState, id: &str) {
    if state.plan.device(id).is_none() {
        return;
    }
    let EditorMode::Devices { route, .. } = &mut state.mode else {
        return;
    };
    if let Some(index) = route.iter().position(|r| r == id) {
        route.truncate(index + 1);
        log::debug!("Pfad gekürzt auf {} Geräte", route.len());
        return;
    }
    let Some(previous) = route.last().cloned() else {
        route.push(id.to_string());
        log::debug!("Pfad beginnt bei {}", id);
        return;
    };

    if let Err(e) = state.plan.check_link(&previous, id) {
        state.show_warning(e.to_string());
        return;
    }
    if state.plan.are_connected(&previous, id) {
        log::debug!("Verbindung {} → {} besteht bereits", previous, id);
    } else {
        state.record_undo_snapshot();
        match state.plan_mut().link_devices(&previous, id) {
            Ok(_) => {
                log::info!("Verbindung {} → {}", previous, id);
                state.mark_dirty(RecordKind::Devices);
            }
            Err(e) => {
                state.show_warning(e.to_string());
                return;
            }
        }
    }
    if let EditorMode::Devices { route, .. } = &mut state.mode {
        route.push(id.to_string());
    }
}

/// Bricht die laufende Verkettung ab (bestehende Verbindungen bleiben).
pub fn cancel_route(state: &mut AppState) {
    if let EditorMode::Devices { route, .. } = &mut state.mode {
        route.clear();
    }
}

/// Setzt die Montagehöhe eines Geräts.
pub fn set_mounting_height(state: &mut AppState, id: &str, height: MountingHeight) {
    if state.plan.device(id).is_none() {
        return;
    }
    state.record_undo_snapshot();
    if let Some(device) = state.plan_mut().device_mut(id) {
        device.mounting_height = height;
    }
    state.mark_dirty(RecordKind::Devices);
}

/// Übernimmt neue Standard-Höhen.
pub fn set_heights(state: &mut AppState, heights: HeightSettings) {
    state.plan_mut().heights = heights.sanitized();
    state.mark_dirty(RecordKind::Heights);
}

/// Löscht das selektierte Gerät samt aller Verweise.
pub fn delete_selected(state: &mut AppState) {
    let Some(id) = state.mode.selected_device().map(str::to_string) else {
        return;
    };
    state.record_undo_snapshot();
    if state.plan_mut().remove_device(&id).is_some() {
        log::info!("Gerät {} gelöscht", id);
    }
    if let EditorMode::Devices {
        selected,
        dragging,
        route,
        ..
    } = &mut state.mode
    {
        *selected = None;
        *dragging = false;
        route.retain(|r| *r != id);
    }
    state.mark_dirty(RecordKind::Devices);
}

/// Springt zu einem Gerät: Geräte-Modus, Selektion, zentrierte Ansicht.
pub fn locate(state: &mut AppState, id: &str) {
    let Some(position) = state.plan.device(id).map(|d| d.position) else {
        log::info!("Gerät {} nicht gefunden", id);
        return;
    };
    if !matches!(state.mode, EditorMode::Devices { .. }) {
        layers::set_mode(state, EditorMode::devices(DeviceTool::Place));
    }
    select(state, Some(id.to_string()));
    if !camera::center_on(state, position) {
        log::debug!("Viewport ohne Fläche, Zentrieren übersprungen");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Room, Topology};

    fn state_with_rooms() -> AppState {
        let mut state = AppState::new();
        let square = |x: f32| {
            vec![
                Vec2::new(x, 0.0),
                Vec2::new(x + 200.0, 0.0),
                Vec2::new(x + 200.0, 200.0),
                Vec2::new(x, 200.0),
            ]
        };
        let plan = state.plan_mut();
        for (i, (name, x)) in [("Living Room", 0.0), ("Hall", 300.0)].into_iter().enumerate() {
            let id = format!("room-{}", i + 1);
            if let Some(room) = Room::from_polygon(id, name.into(), square(x), i) {
                plan.add_room(room);
            }
        }
        state.mode = EditorMode::devices(DeviceTool::Place);
        state
    }

    #[test]
    fn test_place_inside_room_assigns_semantic_id() {
        let mut state = state_with_rooms();
        place(&mut state, Vec2::new(50.0, 50.0));
        place(&mut state, Vec2::new(60.0, 50.0));
        let ids: Vec<_> = state.devices().iter().map(|d| d.id.as_str()).collect();
        assert_eq!(
            ids,
            vec![
                "downlight-living-room-lcp-1:1:1",
                "downlight-living-room-lcp-1:1:2"
            ]
        );
        assert_eq!(
            state.mode.selected_device(),
            Some("downlight-living-room-lcp-1:1:2")
        );
    }

    #[test]
    fn test_place_outside_rooms_warns_without_change() {
        let mut state = state_with_rooms();
        place(&mut state, Vec2::new(250.0, 50.0));
        assert!(state.devices().is_empty());
        assert!(!state.can_undo());
        let message = state.ui.message.as_ref().expect("HUD-Meldung");
        assert!(message.is_warning);
        assert_eq!(message.text, "Device must be placed inside a room");
    }

    #[test]
    fn test_drag_updates_room_and_keeps_it_outside() {
        let mut state = state_with_rooms();
        place(&mut state, Vec2::new(50.0, 50.0));
        begin_drag(&mut state);
        update_drag(&mut state, Vec2::new(350.0, 50.0));
        assert_eq!(state.devices()[0].room_name.as_deref(), Some("Hall"));
        update_drag(&mut state, Vec2::new(250.0, 500.0));
        end_drag(&mut state);
        assert_eq!(state.devices()[0].room_name.as_deref(), Some("Hall"));
        assert_eq!(state.devices()[0].position, Vec2::new(250.0, 500.0));
    }

    #[test]
    fn test_route_links_same_network_and_truncates_on_backtrack() {
        let mut state = state_with_rooms();
        for x in [20.0, 60.0, 100.0] {
            place(&mut state, Vec2::new(x, 50.0));
        }
        let ids: Vec<String> = state.devices().iter().map(|d| d.id.clone()).collect();
        set_tool(&mut state, DeviceTool::Route);

        for id in &ids {
            route_click(&mut state, id);
        }
        assert_eq!(state.mode.route(), &ids[..]);
        assert_eq!(state.plan.device(&ids[1]).expect("b").connections, vec![ids[0].clone()]);
        assert_eq!(state.plan.device(&ids[2]).expect("c").connections, vec![ids[1].clone()]);

        route_click(&mut state, &ids[0]);
        assert_eq!(state.mode.route(), &ids[..1]);
    }

    #[test]
    fn test_cross_network_route_is_rejected() {
        let mut state = state_with_rooms();
        set_template(&mut state, DeviceTemplate::for_topology(Topology::Knx));
        place(&mut state, Vec2::new(20.0, 50.0));
        let mut other = DeviceTemplate::for_topology(Topology::Knx);
        other.network = "knx-lcp-2".into();
        set_template(&mut state, other);
        place(&mut state, Vec2::new(60.0, 50.0));
        let ids: Vec<String> = state.devices().iter().map(|d| d.id.clone()).collect();
        set_tool(&mut state, DeviceTool::Route);

        route_click(&mut state, &ids[0]);
        route_click(&mut state, &ids[1]);

        assert!(state.devices().iter().all(|d| d.connections.is_empty()));
        assert_eq!(state.mode.route(), &ids[..1]);
        assert!(state.ui.message.as_ref().is_some_and(|m| m.is_warning));
    }

    #[test]
    fn test_delete_removes_device_from_peers_and_route() {
        let mut state = state_with_rooms();
        place(&mut state, Vec2::new(20.0, 50.0));
        place(&mut state, Vec2::new(60.0, 50.0));
        let ids: Vec<String> = state.devices().iter().map(|d| d.id.clone()).collect();
        set_tool(&mut state, DeviceTool::Route);
        route_click(&mut state, &ids[0]);
        route_click(&mut state, &ids[1]);

        select(&mut state, Some(ids[0].clone()));
        delete_selected(&mut state);

        assert_eq!(state.devices().len(), 1);
        assert!(state.devices()[0].connections.is_empty());
        assert_eq!(state.mode.route(), &ids[1..]);
    }

    #[test]
    fn test_locate_switches_mode_and_centers() {
        let mut state = state_with_rooms();
        place(&mut state, Vec2::new(50.0, 50.0));
        let id = state.devices()[0].id.clone();
        state.mode = EditorMode::Navigate;
        state.view.viewport_size = Vec2::new(800.0, 600.0);
        state.view.transform.scale = 4.0;

        locate(&mut state, &id);

        assert_eq!(state.mode.selected_device(), Some(id.as_str()));
        let geometry = state.view.geometry().expect("Geometrie");
        let screen = geometry.natural_to_screen(Vec2::new(50.0, 50.0));
        assert!((screen - Vec2::new(400.0, 300.0)).length() < 1e-2);

        locate(&mut state, "unbekannt");
        assert_eq!(state.mode.selected_device(), Some(id.as_str()));
    }
}
