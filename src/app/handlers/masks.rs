//! Handler für Masken.

use crate::app::state::MaskTool;
use crate::app::use_cases;
use crate::app::AppState;
use crate::core::Corner;
use glam::Vec2;

/// Wählt das Masken-Werkzeug.
pub fn set_tool(state: &mut AppState, tool: MaskTool) {
    use_cases::masks::set_tool(state, tool);
}

/// Selektiert eine Maske.
pub fn select(state: &mut AppState, id: Option<String>) {
    use_cases::masks::select(state, id);
}

/// Beginnt das Verschieben.
pub fn begin_move(state: &mut AppState, point: Vec2) {
    use_cases::masks::begin_move(state, point);
}

/// Beginnt die Größenänderung über eine Ecke.
pub fn begin_resize(state: &mut AppState, corner: Corner, point: Vec2) {
    use_cases::masks::begin_resize(state, corner, point);
}

/// Setzt die laufende Manipulation fort.
pub fn update_manipulation(state: &mut AppState, point: Vec2) {
    use_cases::masks::update_manipulation(state, point);
}

/// Beendet die Manipulation.
pub fn end_manipulation(state: &mut AppState) {
    use_cases::masks::end_manipulation(state);
}

/// Beginnt ein Rechteck.
pub fn begin_rect(state: &mut AppState, point: Vec2) {
    use_cases::masks::begin_rect(state, point);
}

/// Zieht das Rechteck auf.
pub fn update_rect(state: &mut AppState, point: Vec2) {
    use_cases::masks::update_rect(state, point);
}

/// Schließt das Rechteck ab.
pub fn end_rect(state: &mut AppState) {
    use_cases::masks::end_rect(state);
}

/// Blendet eine Maske ein oder aus.
pub fn set_visibility(state: &mut AppState, id: &str, visible: bool) {
    use_cases::masks::set_visibility(state, id, visible);
}
