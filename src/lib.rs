//! FloorPlan Editor Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod shared;
pub mod ui;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, EditorMode, Persistence, UiState, ViewState,
};
pub use core::{
    CableEstimate, Device, DeviceTemplate, FloorPlan, LayerId, OverlayMask, PlanImage,
    ScaleCalibration, Room, Topology,
};
pub use shared::{EditorOptions, RenderScene};
