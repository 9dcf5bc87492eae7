use super::common::{click, draw_room, editor, rect, send};
use approx::assert_relative_eq;
use floorplan_editor::core::geometry::vertex_centroid;
use floorplan_editor::{AppIntent, EditorMode};
use glam::Vec2;

#[test]
fn test_four_point_room_closed_on_first_point_is_named_office() {
    let (mut controller, mut state) = editor();
    let corners = rect(Vec2::new(100.0, 100.0), Vec2::new(200.0, 150.0));

    draw_room(&mut controller, &mut state, "Office", &corners);

    assert_eq!(state.plan.rooms.len(), 1);
    let room = state.rooms().next().expect("Raum sollte existieren");
    assert_eq!(room.name, "Office");
    assert_eq!(room.path.len(), 4);

    let centroid = vertex_centroid(&room.path).expect("Polygon hat Punkte");
    assert_relative_eq!(room.label_position.x, centroid.x, epsilon = 1e-4);
    assert_relative_eq!(room.label_position.y, centroid.y, epsilon = 1e-4);
    assert_relative_eq!(room.label_position.x, 200.0, epsilon = 1e-4);
    assert_relative_eq!(room.label_position.y, 175.0, epsilon = 1e-4);

    // Nach dem Anlegen beginnt direkt die nächste Zeichnung
    assert!(state.mode.is_drawing_polygon());
}

#[test]
fn test_cancelled_room_name_discards_polygon() {
    let (mut controller, mut state) = editor();

    send(&mut controller, &mut state, AppIntent::DrawRoomToggled);
    for corner in rect(Vec2::new(100.0, 100.0), Vec2::new(200.0, 150.0)) {
        click(&mut controller, &mut state, corner);
    }
    send(&mut controller, &mut state, AppIntent::FinishDrawingRequested);
    assert!(state.mode.awaits_text_input());

    send(&mut controller, &mut state, AppIntent::RoomNameCancelled);

    assert!(state.plan.rooms.is_empty());
    assert!(matches!(
        state.mode,
        EditorMode::Rooms {
            pending_name: None,
            ..
        }
    ));
}

#[test]
fn test_undo_and_redo_room_creation() {
    let (mut controller, mut state) = editor();

    draw_room(
        &mut controller,
        &mut state,
        "Office",
        &rect(Vec2::new(100.0, 100.0), Vec2::new(200.0, 150.0)),
    );
    assert_eq!(state.plan.rooms.len(), 1);

    send(&mut controller, &mut state, AppIntent::UndoRequested);
    assert!(state.plan.rooms.is_empty());

    send(&mut controller, &mut state, AppIntent::RedoRequested);
    assert_eq!(state.plan.rooms.len(), 1);
}

#[test]
fn test_second_room_snaps_to_shared_wall() {
    let (mut controller, mut state) = editor();

    draw_room(
        &mut controller,
        &mut state,
        "Office",
        &rect(Vec2::new(100.0, 100.0), Vec2::new(200.0, 200.0)),
    );
    // Knapp neben den Ecken des ersten Raums
    let corners = [
        Vec2::new(303.0, 102.0),
        Vec2::new(500.0, 100.0),
        Vec2::new(500.0, 300.0),
        Vec2::new(302.0, 297.0),
    ];
    draw_room(&mut controller, &mut state, "Kitchen", &corners);

    let kitchen = state
        .rooms()
        .find(|r| r.name == "Kitchen")
        .expect("Küche sollte existieren");
    assert_eq!(kitchen.path[0], Vec2::new(300.0, 100.0));
    assert_eq!(kitchen.path[3], Vec2::new(300.0, 300.0));
}
