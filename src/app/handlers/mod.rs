//! Feature-Handler für AppCommand-Verarbeitung.
//!
//! Jeder Handler gruppiert die Command-Ausführung eines Feature-Bereichs.
//! Der Controller dispatcht an die passende Handler-Funktion.

pub mod annotations;
pub mod devices;
pub mod dialog;
pub mod drawing;
pub mod file_io;
pub mod history;
pub mod layers;
pub mod masks;
pub mod overlay;
pub mod persistence;
pub mod rooms;
pub mod selection;
pub mod view;
