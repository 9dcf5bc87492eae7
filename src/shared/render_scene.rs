//! Render-Szene als expliziter Übergabevertrag zwischen App und Compositor.
//!
//! Lebt im shared-Modul, da `app` sie baut und `ui` sie konsumiert.

use super::options::EditorOptions;
use crate::core::{FloorPlan, LayerStack, ViewportGeometry};
use glam::Vec2;
use std::sync::Arc;

/// Laufende Polygon-Zeichnung (Räume oder Masken).
#[derive(Debug, Clone, PartialEq)]
pub struct DrawingPreview {
    /// Bereits gesetzte Punkte
    pub points: Vec<Vec2>,
    /// Zeigerposition für das Gummiband-Segment
    pub cursor: Option<Vec2>,
    /// Zeiger liegt im Schließ-Radius des ersten Punkts
    pub closes: bool,
}

/// Messlinie mit Beschriftung.
#[derive(Debug, Clone, PartialEq)]
pub struct MeasureLine {
    /// Startpunkt
    pub start: Vec2,
    /// Endpunkt (fest oder Zeiger)
    pub end: Vec2,
    /// Beschriftung (Fuß/Zoll oder Pixel)
    pub label: String,
}

/// Maßstabsbalken im Annotations-Layer.
#[derive(Debug, Clone, PartialEq)]
pub struct ScaleBar {
    /// Länge in natürlichen Bildpixeln
    pub natural_length: f32,
    /// Beschriftung (z.B. `10'`)
    pub label: String,
}

/// Read-only Daten für einen Render-Frame.
#[derive(Clone)]
pub struct RenderScene {
    /// Grundriss (Arc für O(1)-Clone pro Frame)
    pub plan: Arc<FloorPlan>,
    /// Geometrie des Frames; `None` solange der Viewport keine Fläche hat
    pub geometry: Option<ViewportGeometry>,
    /// Viewport-Größe in Pixeln [Breite, Höhe]
    pub viewport_size: [f32; 2],
    /// Sichtbarkeit und Deckkraft je Layer
    pub layers: LayerStack,
    /// Natürliche Größe des Basisbildes, falls geladen
    pub base_size: Option<Vec2>,
    /// Natürliche Größe des Overlay-Bildes, falls geladen
    pub overlay_size: Option<Vec2>,
    /// Selektierter Raum
    pub selected_room: Option<String>,
    /// Selektierte Maske
    pub selected_mask: Option<String>,
    /// Selektiertes Gerät
    pub selected_device: Option<String>,
    /// Laufende Verkettung
    pub route: Vec<String>,
    /// Laufende Polygon-Zeichnung
    pub drawing: Option<DrawingPreview>,
    /// Aufgezogenes Masken-Rechteck (Start, aktuell)
    pub rect_draft: Option<(Vec2, Vec2)>,
    /// Kalibrierpunkte
    pub calibration_points: Vec<Vec2>,
    /// Aktuelle Messung
    pub measure: Option<MeasureLine>,
    /// Maßstabsbalken (nur kalibriert)
    pub scale_bar: Option<ScaleBar>,
    /// Laufzeit-Optionen für Farben und Radien
    pub options: EditorOptions,
}

impl RenderScene {
    /// Gibt zurück, ob ein Basis-Grundriss geladen ist.
    pub fn has_base_image(&self) -> bool {
        self.base_size.is_some()
    }

    /// Bildpixel → Bildschirm; ohne Geometrie `None`.
    pub fn to_screen(&self, natural: Vec2) -> Option<Vec2> {
        self.geometry.map(|g| g.natural_to_screen(natural))
    }
}
