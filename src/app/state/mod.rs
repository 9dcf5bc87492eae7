//! Application State: Grundriss, Modus, Ansicht, UI und Persistenz.

mod app_state;
mod dialogs;
mod editor;
mod view;

pub use app_state::AppState;
pub use dialogs::{CalibrationDialogState, HudMessage, RoomNameDialogState, UiState};
pub use editor::{DeviceTool, EditorMode, Gesture, MaskManipulation, MaskTool};
pub use view::ViewState;
