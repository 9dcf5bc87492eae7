//! Use-Case-Funktionen für Dateiaktionen.
//! Alle Dateisystem-Operationen (I/O) sind hier zentralisiert.

use super::camera;
use crate::app::AppState;
use crate::core::{LayerId, PlanImage};
use anyhow::Context;
use std::sync::Arc;

/// Öffnet den Dateidialog für den Basis-Grundriss über UI-State.
pub fn request_base_image(state: &mut AppState) {
    state.ui.show_base_image_dialog = true;
}

/// Öffnet den Dateidialog für das Overlay-Bild über UI-State.
pub fn request_overlay_image(state: &mut AppState) {
    state.ui.show_overlay_image_dialog = true;
}

fn load_image(path: &str) -> anyhow::Result<Arc<PlanImage>> {
    let image = PlanImage::load_from_file(path)
        .with_context(|| format!("Planbild konnte nicht geladen werden: {}", path))?;
    let (w, h) = image.dimensions();
    log::info!("Planbild geladen: {} ({}×{})", path, w, h);
    Ok(Arc::new(image))
}

/// Lädt den Basis-Grundriss und setzt die Ansicht zurück.
///
/// Gespeicherte Koordinaten beziehen sich auf die natürlichen Bildpixel
/// und bleiben daher gültig.
pub fn load_base_image(state: &mut AppState, path: String) -> anyhow::Result<()> {
    let image = load_image(&path)?;
    state.view.base_image = Some(image);
    state.view.images_dirty = true;
    camera::reset_view(state);
    Ok(())
}

/// Lädt das Overlay-Bild und blendet den Overlay-Layer ein.
pub fn load_overlay_image(state: &mut AppState, path: String) -> anyhow::Result<()> {
    let image = load_image(&path)?;
    state.view.overlay_image = Some(image);
    state.view.images_dirty = true;
    state.view.layers.set_visible(LayerId::Overlay, true);
    Ok(())
}
