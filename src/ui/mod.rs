//! UI-Komponenten: Menü, Toolbar, Panels, Input-Handling, Dialoge.
//!
//! Komponenten liefern `AppIntent`s zurück und ändern höchstens Eingabepuffer.

pub mod compositor;
pub mod dialogs;
pub mod input;
mod keyboard;
pub mod layers_panel;
pub mod menu;
pub mod options_dialog;
pub mod properties;
pub mod status;
pub mod toolbar;

pub use compositor::{paint_scene, ViewportTextures};
pub use dialogs::{handle_file_dialogs, show_calibration_dialog, show_room_name_dialog};
pub use input::InputState;
pub use layers_panel::render_layers_panel;
pub use menu::render_menu;
pub use options_dialog::show_options_dialog;
pub use properties::render_properties_panel;
pub use status::render_status_bar;
pub use toolbar::render_toolbar;
