//! Koordinaten-Transformation Bildschirm ↔ natürliche Bildpixel.
//!
//! Kette: Bildschirm (Container-lokal) → Layout (Pan/Zoom entfernt)
//! → natürliche Bildkoordinaten (Letterbox entfernt, auf Originalauflösung skaliert).

use super::ViewTransform;
use glam::Vec2;

/// Ergebnis des "contain"-Einpassens eines Bildes in einen Container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImageFit {
    /// Versatz des angezeigten Bildes im Container (Letterbox-Rand)
    pub offset: Vec2,
    /// Angezeigte Größe des Bildes im Container
    pub size: Vec2,
    /// Natürliche Bildgröße in Pixeln
    pub natural: Vec2,
}

impl ImageFit {
    /// Passt ein Bild mit Seitenverhältnis-Erhalt in den Container ein.
    ///
    /// Ist das Bild relativ breiter als der Container, begrenzt die Breite
    /// und der Rand entsteht oben/unten, sonst begrenzt die Höhe und der
    /// Rand entsteht links/rechts. Gibt `None` bei nicht-positiven Größen zurück.
    pub fn contain(container: Vec2, natural: Vec2) -> Option<Self> {
        if container.x <= 0.0 || container.y <= 0.0 || natural.x <= 0.0 || natural.y <= 0.0 {
            return None;
        }

        let image_aspect = natural.x / natural.y;
        let container_aspect = container.x / container.y;

        let (size, offset) = if image_aspect > container_aspect {
            let height = container.x / image_aspect;
            (
                Vec2::new(container.x, height),
                Vec2::new(0.0, (container.y - height) / 2.0),
            )
        } else {
            let width = container.y * image_aspect;
            (
                Vec2::new(width, container.y),
                Vec2::new((container.x - width) / 2.0, 0.0),
            )
        };

        Some(Self {
            offset,
            size,
            natural,
        })
    }

    /// Layout-Koordinate → natürliche Bildkoordinate.
    pub fn layout_to_natural(&self, layout: Vec2) -> Vec2 {
        (layout - self.offset) / self.size * self.natural
    }

    /// Natürliche Bildkoordinate → Layout-Koordinate.
    pub fn natural_to_layout(&self, natural: Vec2) -> Vec2 {
        natural / self.natural * self.size + self.offset
    }

    /// Angezeigte Layout-Pixel pro natürlichem Bildpixel.
    pub fn layout_per_natural(&self) -> f32 {
        self.size.x / self.natural.x
    }
}

/// Vollständige Viewport-Geometrie eines Frames.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportGeometry {
    /// Container-Größe in Bildschirm-Pixeln
    pub container: Vec2,
    /// Letterbox-Einpassung des Basisbildes
    pub fit: ImageFit,
    /// Pan/Zoom
    pub transform: ViewTransform,
}

impl ViewportGeometry {
    /// Baut die Geometrie; ohne gültige Größen `None`.
    pub fn new(container: Vec2, natural: Vec2, transform: ViewTransform) -> Option<Self> {
        let fit = ImageFit::contain(container, natural)?;
        Some(Self {
            container,
            fit,
            transform,
        })
    }

    fn center(&self) -> Vec2 {
        self.container * 0.5
    }

    /// Container-lokale Bildschirmposition → natürliche Bildkoordinate.
    pub fn screen_to_natural(&self, screen: Vec2) -> Vec2 {
        let layout = self.transform.screen_to_layout(screen, self.center());
        self.fit.layout_to_natural(layout)
    }

    /// Natürliche Bildkoordinate → container-lokale Bildschirmposition.
    pub fn natural_to_screen(&self, natural: Vec2) -> Vec2 {
        let layout = self.fit.natural_to_layout(natural);
        self.transform.layout_to_screen(layout, self.center())
    }

    /// Bildschirm-Pixel pro natürlichem Bildpixel (inkl. Zoom).
    pub fn screen_per_natural(&self) -> f32 {
        self.fit.layout_per_natural() * self.transform.scale
    }

    /// Rechnet ein Bildschirm-Delta in ein Bildpixel-Delta um.
    pub fn screen_delta_to_natural(&self, delta: Vec2) -> Vec2 {
        delta / self.screen_per_natural()
    }

    /// Rechnet einen Bildschirm-Radius in Bildpixel um.
    pub fn screen_len_to_natural(&self, len: f32) -> f32 {
        len / self.screen_per_natural()
    }

    /// Pan, der `natural` in die Containermitte rückt (Zoom bleibt).
    pub fn pan_centering(&self, natural: Vec2) -> Vec2 {
        let layout = self.fit.natural_to_layout(natural);
        (self.center() - layout) * self.transform.scale
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn assert_vec_eq(a: Vec2, b: Vec2) {
        assert_relative_eq!(a.x, b.x, epsilon = 1e-2);
        assert_relative_eq!(a.y, b.y, epsilon = 1e-2);
    }

    #[test]
    fn test_wide_image_is_letterboxed_vertically() {
        let fit = ImageFit::contain(Vec2::new(800.0, 600.0), Vec2::new(2000.0, 1000.0))
            .expect("Fit sollte existieren");
        assert_vec_eq(fit.size, Vec2::new(800.0, 400.0));
        assert_vec_eq(fit.offset, Vec2::new(0.0, 100.0));
    }

    #[test]
    fn test_tall_image_is_letterboxed_horizontally() {
        let fit = ImageFit::contain(Vec2::new(800.0, 600.0), Vec2::new(1000.0, 2000.0))
            .expect("Fit sollte existieren");
        assert_vec_eq(fit.size, Vec2::new(300.0, 600.0));
        assert_vec_eq(fit.offset, Vec2::new(250.0, 0.0));
    }

    #[test]
    fn test_zero_sizes_yield_none() {
        assert!(ImageFit::contain(Vec2::ZERO, Vec2::new(10.0, 10.0)).is_none());
        assert!(ImageFit::contain(Vec2::new(10.0, 10.0), Vec2::new(0.0, 10.0)).is_none());
    }

    #[test]
    fn test_letterbox_pixel_exact_mapping() {
        // Bildmitte muss exakt auf Containermitte liegen
        let geo = ViewportGeometry::new(
            Vec2::new(800.0, 600.0),
            Vec2::new(2000.0, 1000.0),
            ViewTransform::new(),
        )
        .expect("Geometrie");
        assert_vec_eq(geo.screen_to_natural(Vec2::new(400.0, 300.0)), Vec2::new(1000.0, 500.0));
        assert_vec_eq(geo.screen_to_natural(Vec2::new(0.0, 100.0)), Vec2::ZERO);
    }

    #[test]
    fn test_roundtrip_for_both_orientations_with_pan_and_zoom() {
        let transform = ViewTransform {
            scale: 3.2,
            pan: Vec2::new(-41.0, 17.5),
        };
        for natural in [Vec2::new(2400.0, 900.0), Vec2::new(700.0, 1900.0)] {
            let geo = ViewportGeometry::new(Vec2::new(1024.0, 768.0), natural, transform)
                .expect("Geometrie");
            for p in [
                Vec2::new(1.0, 1.0),
                natural * 0.5,
                Vec2::new(natural.x - 3.0, natural.y * 0.25),
            ] {
                let back = geo.screen_to_natural(geo.natural_to_screen(p));
                assert_vec_eq(back, p);
            }
        }
    }

    #[test]
    fn test_screen_delta_scales_with_zoom() {
        let mut transform = ViewTransform::new();
        let natural = Vec2::new(1600.0, 1200.0);
        let container = Vec2::new(800.0, 600.0);
        let geo = ViewportGeometry::new(container, natural, transform).expect("Geometrie");
        assert_vec_eq(geo.screen_delta_to_natural(Vec2::new(10.0, 0.0)), Vec2::new(20.0, 0.0));

        transform.scale = 2.0;
        let geo = ViewportGeometry::new(container, natural, transform).expect("Geometrie");
        assert_vec_eq(geo.screen_delta_to_natural(Vec2::new(10.0, 0.0)), Vec2::new(10.0, 0.0));
    }

    #[test]
    fn test_pan_centering_moves_point_to_center() {
        let mut transform = ViewTransform::new();
        transform.scale = 4.0;
        let natural = Vec2::new(1000.0, 800.0);
        let container = Vec2::new(640.0, 480.0);
        let geo = ViewportGeometry::new(container, natural, transform).expect("Geometrie");
        let target = Vec2::new(250.0, 600.0);
        transform.pan = geo.pan_centering(target);
        let geo = ViewportGeometry::new(container, natural, transform).expect("Geometrie");
        assert_vec_eq(geo.natural_to_screen(target), container * 0.5);
    }
}
