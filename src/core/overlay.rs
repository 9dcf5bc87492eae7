//! Transformation des zweiten Planbildes (z.B. Elektroplan) relativ zum Basisbild.

use super::geometry::{normalize_degrees, rotate_vec};
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Minimale Overlay-Skalierung.
pub const OVERLAY_SCALE_MIN: f32 = 0.5;
/// Maximale Overlay-Skalierung.
pub const OVERLAY_SCALE_MAX: f32 = 2.0;

/// Position, Drehung, Skalierung und Deckkraft des Overlay-Bildes.
///
/// Werte in natürlichen Basisbild-Pixeln, damit sie Zoom-Änderungen überstehen.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverlayTransform {
    /// Skalierung um den Bildmittelpunkt
    pub scale: f32,
    /// Drehung in Grad
    pub rotation_degrees: f32,
    /// Verschiebung in Basisbild-Pixeln
    pub offset: Vec2,
    /// Deckkraft 0.0..=1.0
    pub opacity: f32,
    /// Gesperrt: keine Änderungen per Tastatur oder Maus
    pub locked: bool,
}

impl Default for OverlayTransform {
    fn default() -> Self {
        Self {
            scale: 1.0,
            rotation_degrees: 0.0,
            offset: Vec2::ZERO,
            opacity: 0.7,
            locked: false,
        }
    }
}

/// Eine schrittweise Anpassung des Overlays.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OverlayAdjust {
    /// Verschieben um ein Pixel-Delta
    Move(Vec2),
    /// Drehen um Grad
    Rotate(f32),
    /// Skalierung additiv ändern
    Scale(f32),
}

impl OverlayTransform {
    /// Wendet eine Anpassung an; gesperrt → keine Änderung, Rückgabe `false`.
    pub fn adjust(&mut self, adjust: OverlayAdjust) -> bool {
        if self.locked {
            return false;
        }
        match adjust {
            OverlayAdjust::Move(delta) => self.offset += delta,
            OverlayAdjust::Rotate(degrees) => {
                self.rotation_degrees = normalize_degrees(self.rotation_degrees + degrees);
            }
            OverlayAdjust::Scale(delta) => {
                self.scale = (self.scale + delta).clamp(OVERLAY_SCALE_MIN, OVERLAY_SCALE_MAX);
            }
        }
        true
    }

    /// Overlay-Bildpixel → Basisbild-Pixel.
    ///
    /// Reihenfolge um den Overlay-Mittelpunkt: skalieren, drehen, verschieben.
    pub fn overlay_to_base(&self, point: Vec2, overlay_size: Vec2) -> Vec2 {
        let center = overlay_size * 0.5;
        center + self.offset + rotate_vec((point - center) * self.scale, self.rotation_degrees)
    }

    /// Die vier Ecken des Overlays in Basisbild-Pixeln (oben links im Uhrzeigersinn).
    pub fn corners(&self, overlay_size: Vec2) -> [Vec2; 4] {
        [
            Vec2::ZERO,
            Vec2::new(overlay_size.x, 0.0),
            overlay_size,
            Vec2::new(0.0, overlay_size.y),
        ]
        .map(|p| self.overlay_to_base(p, overlay_size))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_locked_overlay_ignores_adjustments() {
        let mut overlay = OverlayTransform {
            locked: true,
            ..Default::default()
        };
        assert!(!overlay.adjust(OverlayAdjust::Move(Vec2::new(10.0, 0.0))));
        assert_eq!(overlay.offset, Vec2::ZERO);
    }

    #[test]
    fn test_scale_is_clamped() {
        let mut overlay = OverlayTransform::default();
        for _ in 0..30 {
            overlay.adjust(OverlayAdjust::Scale(0.1));
        }
        assert_relative_eq!(overlay.scale, OVERLAY_SCALE_MAX);
        for _ in 0..30 {
            overlay.adjust(OverlayAdjust::Scale(-0.1));
        }
        assert_relative_eq!(overlay.scale, OVERLAY_SCALE_MIN);
    }

    #[test]
    fn test_identity_maps_corners_to_themselves() {
        let overlay = OverlayTransform::default();
        let corners = overlay.corners(Vec2::new(200.0, 100.0));
        assert_eq!(corners[2], Vec2::new(200.0, 100.0));
    }

    #[test]
    fn test_rotation_about_center() {
        let overlay = OverlayTransform {
            rotation_degrees: 180.0,
            ..Default::default()
        };
        let p = overlay.overlay_to_base(Vec2::ZERO, Vec2::new(200.0, 100.0));
        assert_relative_eq!(p.x, 200.0, epsilon = 1e-3);
        assert_relative_eq!(p.y, 100.0, epsilon = 1e-3);
    }
}
