//! Deckende, gedrehte Rechteck-Masken über dem Basis-Grundriss.
//!
//! Masken sind über Mittelpunkt und Ausdehnung definiert, nicht über Ecken,
//! damit Drehen und Skalieren einen stabilen Drehpunkt haben.

use super::geometry::{bounding_box, normalize_degrees, rotate_around, rotate_vec};
use super::room::Rgba;
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Standard-Maskenfarbe (deckendes Rot).
pub const MASK_DEFAULT_COLOR: Rgba = [1.0, 0.0, 0.0, 1.0];

/// Rechteck mit Mittelpunkt, Ausdehnung und Drehung (Grad).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RotatedRect {
    /// Mittelpunkt in Bildkoordinaten
    pub center: Vec2,
    /// Breite im lokalen (ungedrehten) System
    pub width: f32,
    /// Höhe im lokalen (ungedrehten) System
    pub height: f32,
    /// Drehung in Grad
    pub rotation: f32,
}

/// Ecke eines Rechtecks im lokalen (ungedrehten) System.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Corner {
    /// Oben links
    NorthWest,
    /// Oben rechts
    NorthEast,
    /// Unten links
    SouthWest,
    /// Unten rechts
    SouthEast,
}

impl Corner {
    /// Alle Ecken in Umlaufreihenfolge.
    pub const ALL: [Corner; 4] = [
        Corner::NorthWest,
        Corner::NorthEast,
        Corner::SouthEast,
        Corner::SouthWest,
    ];

    /// Vorzeichen der Ecke relativ zum Mittelpunkt (x, y).
    fn signs(self) -> Vec2 {
        match self {
            Corner::NorthWest => Vec2::new(-1.0, -1.0),
            Corner::NorthEast => Vec2::new(1.0, -1.0),
            Corner::SouthWest => Vec2::new(-1.0, 1.0),
            Corner::SouthEast => Vec2::new(1.0, 1.0),
        }
    }
}

impl RotatedRect {
    /// Ecke in globalen Koordinaten.
    pub fn corner(&self, corner: Corner) -> Vec2 {
        let half = Vec2::new(self.width, self.height) * 0.5 * corner.signs();
        self.center + rotate_vec(half, self.rotation)
    }

    /// Alle vier Ecken in Umlaufreihenfolge (für Zeichnen und Handles).
    pub fn corners(&self) -> [Vec2; 4] {
        Corner::ALL.map(|c| self.corner(c))
    }

    /// Ob ein Punkt im Rechteck liegt (Test im ungedrehten lokalen System).
    pub fn contains(&self, point: Vec2) -> bool {
        let local = rotate_around(point, self.center, -self.rotation) - self.center;
        local.x.abs() <= self.width / 2.0 && local.y.abs() <= self.height / 2.0
    }
}

/// Verändert die Größe eines gedrehten Rechtecks durch Ziehen einer Ecke.
///
/// `delta` ist die globale Zeigerbewegung seit Beginn des Ziehens, `rect` der
/// Zustand zu Beginn. Das Delta wird ins lokale System gedreht, Breite/Höhe
/// je nach Ecke vergrößert oder verkleinert (mindestens `min_size`) und der
/// Mittelpunkt um die halbe Größenänderung zurück ins globale System
/// verschoben. Die gegenüberliegende Ecke bleibt dabei ortsfest.
pub fn resize_rotated_rect(rect: &RotatedRect, corner: Corner, delta: Vec2, min_size: f32) -> RotatedRect {
    let local = rotate_vec(delta, -rect.rotation);
    let signs = corner.signs();

    let width = (rect.width + local.x * signs.x).max(min_size);
    let height = (rect.height + local.y * signs.y).max(min_size);

    let local_center_shift = Vec2::new(
        (width - rect.width) / 2.0 * signs.x,
        (height - rect.height) / 2.0 * signs.y,
    );

    RotatedRect {
        center: rect.center + rotate_vec(local_center_shift, rect.rotation),
        width,
        height,
        rotation: rect.rotation,
    }
}

/// Eine Maske auf dem Basis-Grundriss.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverlayMask {
    /// Eindeutige ID (`mask-{n}`)
    pub id: String,
    /// Geometrie
    #[serde(flatten)]
    pub rect: RotatedRect,
    /// Füllfarbe
    pub color: Rgba,
    /// Maske wird gezeichnet
    pub visible: bool,
}

impl OverlayMask {
    /// Erstellt eine ungedrehte Maske.
    pub fn new(id: String, center: Vec2, width: f32, height: f32) -> Self {
        Self {
            id,
            rect: RotatedRect {
                center,
                width,
                height,
                rotation: 0.0,
            },
            color: MASK_DEFAULT_COLOR,
            visible: true,
        }
    }

    /// Erstellt eine Maske aus einem Polygon: dessen Bounding-Box, ungedreht.
    pub fn from_polygon(id: String, points: &[Vec2], min_size: f32) -> Option<Self> {
        let (min, max) = bounding_box(points)?;
        let center = (min + max) * 0.5;
        let size = max - min;
        Some(Self::new(
            id,
            center,
            size.x.max(min_size),
            size.y.max(min_size),
        ))
    }

    /// Erstellt eine Maske aus einem aufgezogenen Rechteck.
    ///
    /// Gibt `None` zurück, wenn eine Seite nicht größer als `min_extent` ist.
    pub fn from_drag(id: String, start: Vec2, end: Vec2, min_extent: f32) -> Option<Self> {
        let size = (end - start).abs();
        if size.x <= min_extent || size.y <= min_extent {
            return None;
        }
        Some(Self::new(id, (start + end) * 0.5, size.x, size.y))
    }

    /// Dreht die Maske um ihren Mittelpunkt.
    pub fn rotate(&mut self, degrees: f32) {
        self.rect.rotation = normalize_degrees(self.rect.rotation + degrees);
    }

    /// Ob ein Punkt in der Maske liegt.
    pub fn contains(&self, point: Vec2) -> bool {
        self.rect.contains(point)
    }

    /// Ecke, deren Handle innerhalb von `radius` liegt.
    pub fn corner_near(&self, point: Vec2, radius: f32) -> Option<Corner> {
        Corner::ALL
            .into_iter()
            .map(|c| (c, self.rect.corner(c).distance(point)))
            .filter(|(_, d)| *d <= radius)
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(c, _)| c)
    }
}
