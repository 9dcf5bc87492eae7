//! Use-Case-Funktionen für Laufzeit-Optionen.

use crate::app::AppState;
use crate::shared::EditorOptions;
use std::path::Path;

/// Übernimmt Optionen in den State (ohne Speichern).
pub fn apply(state: &mut AppState, options: EditorOptions) {
    state.persistence.set_debounce(options.save_debounce());
    state.options = options;
}

/// Übernimmt Optionen und speichert sie unter `path`.
pub fn apply_and_save(
    state: &mut AppState,
    options: EditorOptions,
    path: &Path,
) -> anyhow::Result<()> {
    apply(state, options);
    state.options.save_to_file(path)
}
