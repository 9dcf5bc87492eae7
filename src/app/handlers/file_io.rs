//! Handler für Datei-Operationen (Planbilder).

use crate::app::use_cases;
use crate::app::AppState;

/// Öffnet den Dateidialog für den Basis-Grundriss.
pub fn request_base_image(state: &mut AppState) {
    use_cases::file_io::request_base_image(state);
}

/// Öffnet den Dateidialog für das Overlay-Bild.
pub fn request_overlay_image(state: &mut AppState) {
    use_cases::file_io::request_overlay_image(state);
}

/// Lädt den Basis-Grundriss aus dem übergebenen Pfad.
pub fn load_base_image(state: &mut AppState, path: String) -> anyhow::Result<()> {
    use_cases::file_io::load_base_image(state, path)
}

/// Lädt das Overlay-Bild aus dem übergebenen Pfad.
pub fn load_overlay_image(state: &mut AppState, path: String) -> anyhow::Result<()> {
    use_cases::file_io::load_overlay_image(state, path)
}
