use super::common::{draw_room, editor_with_state, rect, send};
use floorplan_editor::app::{MemoryStore, RecordKind};
use floorplan_editor::{AppIntent, AppState, Persistence};
use glam::Vec2;
use std::time::{Duration, Instant};

const DEBOUNCE: Duration = Duration::from_millis(500);

fn state_over(store: &MemoryStore) -> AppState {
    AppState::with_persistence(Persistence::new(Box::new(store.clone()), DEBOUNCE))
}

fn tick(
    controller: &mut floorplan_editor::AppController,
    state: &mut AppState,
    now: Instant,
) {
    send(controller, state, AppIntent::FrameTick { now });
}

#[test]
fn test_edits_before_first_load_are_not_written() {
    let store = MemoryStore::new().with_value("rooms", "[]");
    let (mut controller, mut state) = editor_with_state(state_over(&store));

    draw_room(
        &mut controller,
        &mut state,
        "Office",
        &rect(Vec2::new(100.0, 100.0), Vec2::new(200.0, 150.0)),
    );
    let start = Instant::now();
    tick(&mut controller, &mut state, start);
    tick(&mut controller, &mut state, start + DEBOUNCE * 2);

    assert_eq!(store.save_count(RecordKind::Rooms.key()), 0);
    assert_eq!(store.value("rooms").as_deref(), Some("[]"));
}

#[test]
fn test_rapid_edits_produce_single_debounced_write() {
    let store = MemoryStore::new();
    let (mut controller, mut state) = editor_with_state(state_over(&store));
    send(&mut controller, &mut state, AppIntent::LoadRecordsRequested);

    draw_room(
        &mut controller,
        &mut state,
        "Office",
        &rect(Vec2::new(100.0, 100.0), Vec2::new(200.0, 150.0)),
    );
    let id = state.rooms().next().expect("Raum").id.clone();

    let start = Instant::now();
    tick(&mut controller, &mut state, start);
    for (i, name) in ["Of", "Offi", "Office 2"].into_iter().enumerate() {
        send(
            &mut controller,
            &mut state,
            AppIntent::RoomRenamed {
                id: id.clone(),
                name: name.to_string(),
            },
        );
        tick(
            &mut controller,
            &mut state,
            start + Duration::from_millis(100 * (i as u64 + 1)),
        );
    }
    assert_eq!(store.save_count("rooms"), 0);
    assert!(state.persistence.has_pending());

    tick(
        &mut controller,
        &mut state,
        start + Duration::from_millis(300) + DEBOUNCE,
    );

    assert_eq!(store.save_count("rooms"), 1);
    assert!(!state.persistence.has_pending());
    let saved = store.value("rooms").expect("Räume gespeichert");
    assert!(saved.contains("Office 2"));
}

#[test]
fn test_saved_records_load_into_new_session() {
    let store = MemoryStore::new();
    {
        let (mut controller, mut state) = editor_with_state(state_over(&store));
        send(&mut controller, &mut state, AppIntent::LoadRecordsRequested);

        send(&mut controller, &mut state, AppIntent::CalibrateToolRequested);
        for x in [100.0, 400.0] {
            send(
                &mut controller,
                &mut state,
                AppIntent::PointerPressed {
                    pos: Vec2::new(x, 50.0),
                },
            );
            send(
                &mut controller,
                &mut state,
                AppIntent::PointerReleased {
                    pos: Vec2::new(x, 50.0),
                },
            );
        }
        send(
            &mut controller,
            &mut state,
            AppIntent::CalibrationDistanceSubmitted {
                input: "10 ft".into(),
            },
        );
        draw_room(
            &mut controller,
            &mut state,
            "Office",
            &rect(Vec2::new(100.0, 100.0), Vec2::new(200.0, 150.0)),
        );

        let start = Instant::now();
        tick(&mut controller, &mut state, start);
        tick(&mut controller, &mut state, start + DEBOUNCE);
    }

    let (mut controller, mut state) = editor_with_state(state_over(&store));
    send(&mut controller, &mut state, AppIntent::LoadRecordsRequested);

    assert_eq!(state.plan.calibration.pixels_per_foot, Some(30.0));
    let room = state.rooms().next().expect("Raum sollte geladen sein");
    assert_eq!(room.name, "Office");
    assert_eq!(room.path.len(), 4);
    assert!(RecordKind::ALL
        .into_iter()
        .all(|kind| state.persistence.is_loaded(kind)));
}

#[test]
fn test_failed_write_keeps_editor_state() {
    let store = MemoryStore::new();
    let (mut controller, mut state) = editor_with_state(state_over(&store));
    send(&mut controller, &mut state, AppIntent::LoadRecordsRequested);
    store.set_fail_saves(true);

    draw_room(
        &mut controller,
        &mut state,
        "Office",
        &rect(Vec2::new(100.0, 100.0), Vec2::new(200.0, 150.0)),
    );
    let start = Instant::now();
    tick(&mut controller, &mut state, start);
    tick(&mut controller, &mut state, start + DEBOUNCE);

    assert_eq!(store.save_count("rooms"), 0);
    assert_eq!(state.plan.rooms.len(), 1);
}
