//! Use-Case-Funktionen für Laden und zeitversetztes Speichern der Datensätze.

use super::layers;
use crate::app::AppState;
use std::time::Instant;

/// Lädt alle Datensätze aus dem Store in den Grundriss.
///
/// Laden markiert nichts als geändert und legt keinen Undo-Schritt an.
pub fn load_records(state: &mut AppState) {
    let mut plan = (*state.plan).clone();
    let loaded = state.persistence.load_all(&mut plan);
    state.plan = std::sync::Arc::new(plan);
    layers::sync_overlay_opacity(state);
    log::debug!("{} Datensätze übernommen", loaded);
}

/// Plant markierte Datensätze und schreibt fällige.
pub fn tick(state: &mut AppState, now: Instant) {
    let plan = std::sync::Arc::clone(&state.plan);
    state.persistence.tick(&plan, now);
}
