//! Interaktive Werkzeuge mit eigenem Zustandsautomaten.

pub mod polygon;

pub use polygon::{DrawingOutcome, PolygonDrawing, POLYGON_MIN_POINTS};
