use super::Gesture;
use crate::core::{LayerStack, PlanImage, ViewTransform, ViewportGeometry};
use glam::Vec2;
use std::sync::Arc;

/// View-bezogener Anwendungszustand
#[derive(Default)]
pub struct ViewState {
    /// Pan/Zoom des Viewports
    pub transform: ViewTransform,
    /// Aktuelle Container-Größe in Pixel
    pub viewport_size: Vec2,
    /// Laufende Viewport-Geste
    pub gesture: Gesture,
    /// Sichtbarkeit und Deckkraft je Layer
    pub layers: LayerStack,
    /// Basis-Grundriss (optional)
    pub base_image: Option<Arc<PlanImage>>,
    /// Overlay-Planbild (optional)
    pub overlay_image: Option<Arc<PlanImage>>,
    /// Signalisiert, dass Bild-Texturen neu hochgeladen werden müssen
    pub images_dirty: bool,
    /// Letzte Zeigerposition in Bildpixeln (Vorschau, Messung)
    pub pointer_natural: Option<Vec2>,
}

impl ViewState {
    /// Erstellt den Standard-View-Zustand.
    pub fn new() -> Self {
        Self {
            transform: ViewTransform::new(),
            viewport_size: Vec2::ZERO,
            gesture: Gesture::None,
            layers: LayerStack::new(),
            base_image: None,
            overlay_image: None,
            images_dirty: false,
            pointer_natural: None,
        }
    }

    /// Natürliche Größe des Basisbildes; ohne Bild die Container-Größe.
    pub fn natural_size(&self) -> Vec2 {
        self.base_image
            .as_ref()
            .map_or(self.viewport_size, |image| image.natural_size())
    }

    /// Geometrie des aktuellen Frames; `None` solange der Container keine Fläche hat.
    pub fn geometry(&self) -> Option<ViewportGeometry> {
        ViewportGeometry::new(self.viewport_size, self.natural_size(), self.transform)
    }

    /// Container-Position → Bildpixel.
    pub fn screen_to_natural(&self, screen: Vec2) -> Option<Vec2> {
        self.geometry().map(|g| g.screen_to_natural(screen))
    }

    /// Bildschirm-Radius → Bildpixel.
    pub fn screen_len_to_natural(&self, len: f32) -> Option<f32> {
        self.geometry().map(|g| g.screen_len_to_natural(len))
    }
}
