//! Core-Domänentypen: Grundriss, Räume, Masken, Geräte, Maßstab, Ansicht.

pub mod cable;
pub mod calibration;
pub mod camera;
pub mod coordinates;
pub mod device;
/// Reine 2D-Geometrie ohne Zustand
pub mod geometry;
pub mod heights;
pub mod layers;
pub mod mask;
pub mod overlay;
pub mod plan_image;
pub mod room;
pub mod snapping;
/// Container für alle dauerhaften Datensätze
///
/// - FloorPlan: Räume, Masken, Geräte, Maßstab, Overlay, Höhen
/// - Raumerkennung, Geräte-Platzierung, Verkettung
pub mod floor_plan;

pub use cable::{estimate_between, estimate_run, CableEstimate};
pub use calibration::{
    format_feet_inches, parse_distance_feet, pixels_per_foot, CalibrationError,
    DistanceParseError, ScaleCalibration, Uncalibrated,
};
pub use camera::ViewTransform;
pub use coordinates::{ImageFit, ViewportGeometry};
pub use device::{
    semantic_device_id, slugify, Device, DeviceTemplate, DeviceTypeInfo, MountingHeight, Topology,
};
pub use floor_plan::{FloorPlan, PlacementError, RoutingError};
pub use heights::HeightSettings;
pub use layers::{LayerConfig, LayerId, LayerStack};
pub use mask::{resize_rotated_rect, Corner, OverlayMask, RotatedRect};
pub use overlay::{OverlayAdjust, OverlayTransform, OVERLAY_SCALE_MAX, OVERLAY_SCALE_MIN};
pub use plan_image::PlanImage;
pub use room::{room_fill_color, Rgba, Room};
pub use snapping::{resolve_snap, SnapConfig, SnapKind, SnapResult};
