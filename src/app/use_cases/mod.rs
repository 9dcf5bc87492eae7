//! Use-Cases der Application-Layer-Orchestrierung.

pub mod calibration;
pub mod camera;
pub mod devices;
pub mod drawing;
pub mod file_io;
pub mod layers;
pub mod masks;
pub mod measure;
pub mod options;
pub mod overlay;
pub mod persistence;
pub mod rooms;
pub mod selection;
pub mod viewport;
