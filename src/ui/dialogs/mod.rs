//! Datei-Dialoge und modale Fenster.

mod calibration_dialog;
mod file_dialogs;
mod room_name_dialog;

pub use calibration_dialog::show_calibration_dialog;
pub use file_dialogs::handle_file_dialogs;
pub use room_name_dialog::show_room_name_dialog;
