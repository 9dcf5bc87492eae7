//! Handler für modusübergreifende Selektions-Operationen.

use crate::app::use_cases;
use crate::app::AppState;

/// Dreht die Selektion.
pub fn rotate(state: &mut AppState, degrees: f32) {
    use_cases::selection::rotate(state, degrees);
}

/// Löscht die Selektion.
pub fn delete(state: &mut AppState) {
    use_cases::selection::delete(state);
}

/// Hebt die Selektion auf.
pub fn clear(state: &mut AppState) {
    use_cases::selection::clear(state);
}
