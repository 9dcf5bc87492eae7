use super::common::{click, draw_room, editor, rect, send, use_device_template};
use floorplan_editor::app::DeviceTool;
use floorplan_editor::{AppIntent, Topology};
use glam::Vec2;
use std::time::Instant;

#[test]
fn test_third_downlight_in_kitchen_gets_sequence_number_3() {
    let (mut controller, mut state) = editor();

    draw_room(
        &mut controller,
        &mut state,
        "Kitchen",
        &rect(Vec2::new(100.0, 100.0), Vec2::new(400.0, 300.0)),
    );
    use_device_template(
        &mut controller,
        &mut state,
        Topology::Dali,
        "dt-downlight",
        "lcp-1:1",
    );

    for x in [150.0, 250.0, 350.0] {
        click(&mut controller, &mut state, Vec2::new(x, 200.0));
    }

    let ids: Vec<&str> = state.devices().iter().map(|d| d.id.as_str()).collect();
    assert_eq!(
        ids,
        vec![
            "downlight-kitchen-lcp-1:1:1",
            "downlight-kitchen-lcp-1:1:2",
            "downlight-kitchen-lcp-1:1:3",
        ]
    );
    assert_eq!(
        state.mode.selected_device(),
        Some("downlight-kitchen-lcp-1:1:3")
    );
}

#[test]
fn test_placement_outside_rooms_is_rejected_with_message() {
    let (mut controller, mut state) = editor();

    draw_room(
        &mut controller,
        &mut state,
        "Kitchen",
        &rect(Vec2::new(100.0, 100.0), Vec2::new(200.0, 200.0)),
    );
    use_device_template(
        &mut controller,
        &mut state,
        Topology::Dali,
        "dt-downlight",
        "lcp-1:1",
    );
    click(&mut controller, &mut state, Vec2::new(600.0, 500.0));

    assert!(state.devices().is_empty());
    let message = state
        .ui
        .visible_message(Instant::now())
        .expect("Ablehnung sollte angezeigt werden");
    assert!(message.is_warning);
}

#[test]
fn test_cross_network_route_is_rejected() {
    let (mut controller, mut state) = editor();

    draw_room(
        &mut controller,
        &mut state,
        "Living Room",
        &rect(Vec2::new(100.0, 100.0), Vec2::new(500.0, 300.0)),
    );
    use_device_template(
        &mut controller,
        &mut state,
        Topology::Knx,
        "dt-switch",
        "knx-lcp-1",
    );
    click(&mut controller, &mut state, Vec2::new(200.0, 200.0));
    use_device_template(
        &mut controller,
        &mut state,
        Topology::Knx,
        "dt-switch",
        "knx-lcp-2",
    );
    click(&mut controller, &mut state, Vec2::new(400.0, 200.0));
    assert_eq!(state.devices().len(), 2);

    send(
        &mut controller,
        &mut state,
        AppIntent::DeviceToolSelected {
            tool: DeviceTool::Route,
        },
    );
    click(&mut controller, &mut state, Vec2::new(200.0, 200.0));
    click(&mut controller, &mut state, Vec2::new(400.0, 200.0));

    assert!(state.devices().iter().all(|d| d.connections.is_empty()));
    assert_eq!(state.mode.route().len(), 1);
    let message = state
        .ui
        .visible_message(Instant::now())
        .expect("Ablehnung sollte angezeigt werden");
    assert!(message.is_warning);
}

#[test]
fn test_route_connects_same_network_in_both_directions() {
    let (mut controller, mut state) = editor();

    draw_room(
        &mut controller,
        &mut state,
        "Office",
        &rect(Vec2::new(100.0, 100.0), Vec2::new(500.0, 300.0)),
    );
    use_device_template(
        &mut controller,
        &mut state,
        Topology::Dali,
        "dt-downlight",
        "lcp-2:1",
    );
    for x in [150.0, 300.0, 450.0] {
        click(&mut controller, &mut state, Vec2::new(x, 250.0));
    }

    send(
        &mut controller,
        &mut state,
        AppIntent::DeviceToolSelected {
            tool: DeviceTool::Route,
        },
    );
    for x in [150.0, 300.0, 450.0] {
        click(&mut controller, &mut state, Vec2::new(x, 250.0));
    }

    assert!(state
        .plan
        .are_connected("downlight-office-lcp-2:1:1", "downlight-office-lcp-2:1:2"));
    assert!(state
        .plan
        .are_connected("downlight-office-lcp-2:1:2", "downlight-office-lcp-2:1:3"));
    assert!(!state
        .plan
        .are_connected("downlight-office-lcp-2:1:1", "downlight-office-lcp-2:1:3"));
    assert_eq!(state.plan.connection_pairs().len(), 2);

    // Escape beendet nur den Pfad, Verbindungen bleiben
    send(&mut controller, &mut state, AppIntent::CancelRequested);
    assert!(state.mode.route().is_empty());
    assert_eq!(state.plan.connection_pairs().len(), 2);
}

#[test]
fn test_dragged_device_follows_room_and_keeps_id() {
    let (mut controller, mut state) = editor();

    draw_room(
        &mut controller,
        &mut state,
        "Office",
        &rect(Vec2::new(50.0, 50.0), Vec2::new(250.0, 250.0)),
    );
    draw_room(
        &mut controller,
        &mut state,
        "Kitchen",
        &rect(Vec2::new(400.0, 50.0), Vec2::new(250.0, 250.0)),
    );
    use_device_template(
        &mut controller,
        &mut state,
        Topology::Dali,
        "dt-downlight",
        "lcp-1:1",
    );
    click(&mut controller, &mut state, Vec2::new(150.0, 150.0));
    let id = state.devices()[0].id.clone();

    send(
        &mut controller,
        &mut state,
        AppIntent::PointerPressed {
            pos: Vec2::new(150.0, 150.0),
        },
    );
    send(
        &mut controller,
        &mut state,
        AppIntent::PointerMoved {
            pos: Vec2::new(500.0, 150.0),
        },
    );
    send(
        &mut controller,
        &mut state,
        AppIntent::PointerReleased {
            pos: Vec2::new(500.0, 150.0),
        },
    );

    let device = &state.devices()[0];
    assert_eq!(device.id, id);
    assert_eq!(device.position, Vec2::new(500.0, 150.0));
    assert_eq!(device.room_name.as_deref(), Some("Kitchen"));
}
