//! Viewport-Transformation für Pan und Zoom.

use glam::Vec2;

/// Pan/Zoom-Zustand des Viewports.
///
/// Bildschirmposition eines Layout-Punkts `p` bei Containermitte `c`:
/// `c + pan + (p - c) * scale`. Zoomen verändert `pan` nicht, der
/// Fixpunkt des Zooms ist damit die Containermitte (zzgl. Pan).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewTransform {
    /// Zoom-Faktor (1.0 = eingepasst)
    pub scale: f32,
    /// Verschiebung in Bildschirm-Pixeln (unbegrenzt)
    pub pan: Vec2,
}

impl ViewTransform {
    /// Minimaler Zoom-Faktor.
    pub const SCALE_MIN: f32 = 1.0;
    /// Maximaler Zoom-Faktor.
    pub const SCALE_MAX: f32 = 10.0;

    /// Erstellt die Standard-Transformation (eingepasst, ohne Pan).
    pub fn new() -> Self {
        Self {
            scale: 1.0,
            pan: Vec2::ZERO,
        }
    }

    /// Verschiebt die Ansicht um ein Bildschirm-Delta.
    pub fn pan_by(&mut self, delta: Vec2) {
        self.pan += delta;
    }

    /// Multipliziert den Zoom mit `factor` und begrenzt auf `[min, max]`.
    pub fn zoom_by(&mut self, factor: f32, min: f32, max: f32) {
        self.scale = (self.scale * factor).clamp(min, max);
    }

    /// Wendet ein gesammeltes, normalisiertes Mausrad-Delta an.
    ///
    /// `newScale = oldScale * factor^|delta|`; positives Delta (Rad nach unten)
    /// zoomt heraus, negatives hinein.
    pub fn apply_wheel(&mut self, delta: f32, factor: f32, min: f32, max: f32) {
        if delta == 0.0 || !delta.is_finite() {
            return;
        }
        let multiplier = factor.powf(delta.abs());
        let next = if delta > 0.0 {
            self.scale / multiplier
        } else {
            self.scale * multiplier
        };
        self.scale = next.clamp(min, max);
    }

    /// Layout-Koordinate (untransformiert) → Bildschirm.
    pub fn layout_to_screen(&self, layout: Vec2, center: Vec2) -> Vec2 {
        center + self.pan + (layout - center) * self.scale
    }

    /// Bildschirm → Layout-Koordinate (untransformiert).
    pub fn screen_to_layout(&self, screen: Vec2, center: Vec2) -> Vec2 {
        center + (screen - center - self.pan) / self.scale
    }
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const MIN: f32 = ViewTransform::SCALE_MIN;
    const MAX: f32 = ViewTransform::SCALE_MAX;

    #[test]
    fn test_pan_accumulates() {
        let mut view = ViewTransform::new();
        view.pan_by(Vec2::new(10.0, 5.0));
        view.pan_by(Vec2::new(-4.0, 1.0));
        assert_relative_eq!(view.pan.x, 6.0);
        assert_relative_eq!(view.pan.y, 6.0);
    }

    #[test]
    fn test_zoom_is_clamped() {
        let mut view = ViewTransform::new();
        view.zoom_by(0.5, MIN, MAX);
        assert_relative_eq!(view.scale, 1.0);
        view.zoom_by(50.0, MIN, MAX);
        assert_relative_eq!(view.scale, 10.0);
    }

    #[test]
    fn test_wheel_zoom_inverse_returns_to_original_scale() {
        let mut view = ViewTransform::new();
        view.scale = 3.0;
        view.apply_wheel(-4.0, 1.07, MIN, MAX);
        assert!(view.scale > 3.0);
        view.apply_wheel(4.0, 1.07, MIN, MAX);
        assert_relative_eq!(view.scale, 3.0, epsilon = 1e-5);
    }

    #[test]
    fn test_wheel_zoom_direction_and_magnitude() {
        let mut view = ViewTransform::new();
        view.scale = 2.0;
        view.apply_wheel(2.0, 1.07, MIN, MAX);
        assert_relative_eq!(view.scale, 2.0 / (1.07_f32 * 1.07), epsilon = 1e-5);
    }

    #[test]
    fn test_zoom_keeps_pan() {
        let mut view = ViewTransform::new();
        view.pan = Vec2::new(30.0, -20.0);
        view.apply_wheel(-3.0, 1.07, MIN, MAX);
        assert_eq!(view.pan, Vec2::new(30.0, -20.0));
    }

    #[test]
    fn test_screen_layout_roundtrip() {
        let view = ViewTransform {
            scale: 2.5,
            pan: Vec2::new(12.0, -7.0),
        };
        let center = Vec2::new(400.0, 300.0);
        let p = Vec2::new(123.0, 456.0);
        let back = view.screen_to_layout(view.layout_to_screen(p, center), center);
        assert_relative_eq!(back.x, p.x, epsilon = 1e-3);
        assert_relative_eq!(back.y, p.y, epsilon = 1e-3);
    }

    #[test]
    fn test_container_center_is_zoom_fixpoint_without_pan() {
        let mut view = ViewTransform::new();
        let center = Vec2::new(400.0, 300.0);
        view.zoom_by(4.0, MIN, MAX);
        let s = view.layout_to_screen(center, center);
        assert_relative_eq!(s.x, center.x);
        assert_relative_eq!(s.y, center.y);
    }
}
