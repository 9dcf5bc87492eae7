//! Application-Layer: Controller, State, Events und Use-Cases.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
pub mod history;
mod intent_mapping;
/// Debounced Speichern der Datensätze in einem Key-Value-Store
pub mod persistence;
pub mod render_scene;
/// Application State
///
/// Dieses Modul verwaltet den Zustand der Anwendung (Grundriss, Modus, View, Dialoge).
pub mod state;
pub mod tools;
pub mod use_cases;

pub use command_log::CommandLog;
pub use controller::AppController;
pub use events::{AppCommand, AppIntent};
pub use persistence::{JsonFileStore, KeyValueStore, MemoryStore, Persistence, RecordKind};
pub use render_scene::build as build_render_scene;
pub use state::{
    AppState, DeviceTool, EditorMode, Gesture, MaskManipulation, MaskTool, UiState, ViewState,
};
