use floorplan_editor::{AppController, AppIntent, AppState, DeviceTemplate, LayerId, Topology};
use glam::Vec2;

/// Editor mit 800x600-Viewport ohne Bild: Bildschirm-Pixel == Bildpixel.
pub fn editor() -> (AppController, AppState) {
    editor_with_state(AppState::new())
}

pub fn editor_with_state(mut state: AppState) -> (AppController, AppState) {
    let mut controller = AppController::new();
    controller
        .handle_intent(
            &mut state,
            AppIntent::ViewportResized {
                size: [800.0, 600.0],
            },
        )
        .expect("ViewportResized sollte ohne Fehler durchlaufen");
    (controller, state)
}

pub fn send(controller: &mut AppController, state: &mut AppState, intent: AppIntent) {
    let label = format!("{intent:?}");
    controller
        .handle_intent(state, intent)
        .unwrap_or_else(|e| panic!("{label} fehlgeschlagen: {e:#}"));
}

/// Primärklick ohne Bewegung.
pub fn click(controller: &mut AppController, state: &mut AppState, pos: Vec2) {
    send(controller, state, AppIntent::PointerPressed { pos });
    send(controller, state, AppIntent::PointerReleased { pos });
}

/// Zeichnet einen Raum über die Polygon-Engine und bestätigt den Namen.
///
/// Der letzte Klick trifft den Startpunkt und schließt das Polygon.
pub fn draw_room(
    controller: &mut AppController,
    state: &mut AppState,
    name: &str,
    corners: &[Vec2],
) {
    // Nach einem angelegten Raum läuft die nächste Zeichnung bereits
    if !state.mode.is_drawing_polygon() {
        send(controller, state, AppIntent::DrawRoomToggled);
    }
    for corner in corners {
        click(controller, state, *corner);
    }
    click(controller, state, corners[0]);
    send(
        controller,
        state,
        AppIntent::RoomNameConfirmed {
            name: name.to_string(),
        },
    );
}

/// Rechteck aus linker oberer Ecke und Größe.
pub fn rect(min: Vec2, size: Vec2) -> Vec<Vec2> {
    vec![
        min,
        min + Vec2::new(size.x, 0.0),
        min + size,
        min + Vec2::new(0.0, size.y),
    ]
}

/// Wechselt in den Geräte-Modus mit einer Vorlage für `network`.
pub fn use_device_template(
    controller: &mut AppController,
    state: &mut AppState,
    topology: Topology,
    device_type: &str,
    network: &str,
) {
    send(
        controller,
        state,
        AppIntent::LayerActivated {
            layer: LayerId::Devices,
        },
    );
    let mut template = DeviceTemplate::for_topology(topology);
    template.device_type = device_type.to_string();
    template.network = network.to_string();
    send(
        controller,
        state,
        AppIntent::DeviceTemplateChanged { template },
    );
}
