use crate::app::{AppIntent, UiState};

/// Unterstützte Rasterformate für Grundriss und Overlay.
const IMAGE_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];

fn path_to_ui_string(path: &std::path::Path) -> String {
    path.to_string_lossy().into_owned()
}

/// Verarbeitet ausstehende Datei-Dialoge und gibt AppIntents zurück.
pub fn handle_file_dialogs(ui_state: &mut UiState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    // Basis-Grundriss
    if ui_state.show_base_image_dialog {
        ui_state.show_base_image_dialog = false;

        if let Some(path) = rfd::FileDialog::new()
            .set_title("Open Floor Plan")
            .add_filter("Floor Plan Image", &IMAGE_EXTENSIONS)
            .pick_file()
        {
            events.push(AppIntent::BaseImageSelected {
                path: path_to_ui_string(&path),
            });
        }
    }

    // Overlay-Planbild
    if ui_state.show_overlay_image_dialog {
        ui_state.show_overlay_image_dialog = false;

        if let Some(path) = rfd::FileDialog::new()
            .set_title("Open Electrical Overlay")
            .add_filter("Overlay Image", &IMAGE_EXTENSIONS)
            .pick_file()
        {
            events.push(AppIntent::OverlayImageSelected {
                path: path_to_ui_string(&path),
            });
        }
    }

    events
}
