//! Use-Case-Funktionen für Viewport-Zustand.

use crate::app::state::EditorMode;
use crate::app::AppState;
use glam::Vec2;

/// Aktualisiert die gespeicherte Viewport-Größe.
pub fn resize(state: &mut AppState, size: [f32; 2]) {
    state.view.viewport_size = Vec2::from(size);
}

/// Merkt die letzte Zeigerposition (Zeichen- und Mess-Vorschau).
pub fn set_pointer_position(state: &mut AppState, natural: Option<Vec2>) {
    state.view.pointer_natural = natural;
    if let EditorMode::Measure { points, hover } = &mut state.mode {
        // nach abgeschlossener Messung bleibt die Linie stehen
        *hover = if points.len() == 1 { natural } else { None };
    }
}
