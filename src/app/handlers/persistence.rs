//! Handler für das Laden und Speichern der Datensätze.

use crate::app::use_cases;
use crate::app::AppState;
use std::time::Instant;

/// Lädt alle gespeicherten Datensätze.
pub fn load_records(state: &mut AppState) {
    use_cases::persistence::load_records(state);
}

/// Schreibt fällige Datensätze.
pub fn tick(state: &mut AppState, now: Instant) {
    use_cases::persistence::tick(state, now);
}
