//! Raum-Polygone mit Beschriftung und Füllfarbe.

use super::geometry::{is_valid_polygon, normalize_degrees, point_in_polygon, vertex_centroid};
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Goldener Winkel in Grad für gut unterscheidbare Raumfarben.
const GOLDEN_ANGLE_DEG: f32 = 137.508;

/// RGBA-Farbe (0.0..=1.0 je Kanal).
pub type Rgba = [f32; 4];

/// Ein Raum auf dem Grundriss.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    /// Eindeutige ID (`room-{n}`)
    pub id: String,
    /// Umriss in natürlichen Bildkoordinaten (≥ 3 Punkte)
    pub path: Vec<Vec2>,
    /// Anzeigename (Grundlage für Geräte-IDs)
    pub name: String,
    /// Position der Beschriftung
    pub label_position: Vec2,
    /// Drehung der Beschriftung in Grad
    pub label_rotation: f32,
    /// Füllfarbe (halbtransparent)
    pub fill_color: Rgba,
    /// Raum wird gezeichnet und bei der Raumerkennung berücksichtigt
    pub visible: bool,
}

impl Room {
    /// Erstellt einen Raum aus einem geschlossenen Polygon.
    ///
    /// Gibt `None` zurück bei weniger als 3 Punkten oder ohne Fläche.
    pub fn from_polygon(id: String, name: String, path: Vec<Vec2>, color_index: usize) -> Option<Self> {
        if !is_valid_polygon(&path) {
            return None;
        }
        let label_position = vertex_centroid(&path)?;
        Some(Self {
            id,
            path,
            name,
            label_position,
            label_rotation: 0.0,
            fill_color: room_fill_color(color_index),
            visible: true,
        })
    }

    /// Ob der Punkt im Raum liegt.
    pub fn contains(&self, point: Vec2) -> bool {
        point_in_polygon(point, &self.path)
    }

    /// Verschiebt einen Eckpunkt und zentriert die Beschriftung neu.
    pub fn move_vertex(&mut self, index: usize, position: Vec2) -> bool {
        let Some(vertex) = self.path.get_mut(index) else {
            return false;
        };
        *vertex = position;
        if let Some(center) = vertex_centroid(&self.path) {
            self.label_position = center;
        }
        true
    }

    /// Dreht die Beschriftung um `degrees`.
    pub fn rotate_label(&mut self, degrees: f32) {
        self.label_rotation = normalize_degrees(self.label_rotation + degrees);
    }

    /// Index des nächstgelegenen Eckpunkts innerhalb von `radius`.
    pub fn vertex_near(&self, point: Vec2, radius: f32) -> Option<usize> {
        self.path
            .iter()
            .enumerate()
            .map(|(i, v)| (i, v.distance(point)))
            .filter(|(_, d)| *d <= radius)
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(i, _)| i)
    }
}

/// Füllfarbe für den n-ten Raum: HSLA(n·137.508°, 70 %, 80 %, 0.35).
pub fn room_fill_color(index: usize) -> Rgba {
    let hue = (index as f32 * GOLDEN_ANGLE_DEG).rem_euclid(360.0);
    let [r, g, b] = hsl_to_rgb(hue, 0.7, 0.8);
    [r, g, b, 0.35]
}

fn hsl_to_rgb(hue: f32, saturation: f32, lightness: f32) -> [f32; 3] {
    let chroma = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
    let h = hue / 60.0;
    let x = chroma * (1.0 - (h.rem_euclid(2.0) - 1.0).abs());
    let (r, g, b) = match h as u32 {
        0 => (chroma, x, 0.0),
        1 => (x, chroma, 0.0),
        2 => (0.0, chroma, x),
        3 => (0.0, x, chroma),
        4 => (x, 0.0, chroma),
        _ => (chroma, 0.0, x),
    };
    let m = lightness - chroma / 2.0;
    [r + m, g + m, b + m]
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn office() -> Room {
        Room::from_polygon(
            "room-1".into(),
            "Office".into(),
            vec![
                Vec2::new(0.0, 0.0),
                Vec2::new(100.0, 0.0),
                Vec2::new(100.0, 60.0),
                Vec2::new(0.0, 60.0),
            ],
            0,
        )
        .expect("Raum sollte erstellt werden")
    }

    #[test]
    fn test_label_at_vertex_centroid() {
        let room = office();
        assert_relative_eq!(room.label_position.x, 50.0);
        assert_relative_eq!(room.label_position.y, 30.0);
        assert_relative_eq!(room.label_rotation, 0.0);
    }

    #[test]
    fn test_too_few_points_rejected() {
        let room = Room::from_polygon(
            "room-1".into(),
            "X".into(),
            vec![Vec2::ZERO, Vec2::ONE],
            0,
        );
        assert!(room.is_none());
    }

    #[test]
    fn test_zero_area_path_rejected() {
        let collinear = vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(300.0, 0.0),
            Vec2::new(0.0, 0.0),
        ];
        assert!(Room::from_polygon("room-1".into(), "Ghost".into(), collinear, 0).is_none());

        let line = vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(50.0, 0.0),
            Vec2::new(100.0, 0.0),
        ];
        assert!(Room::from_polygon("room-1".into(), "Line".into(), line, 0).is_none());
    }

    #[test]
    fn test_move_vertex_recenters_label() {
        let mut room = office();
        assert!(room.move_vertex(2, Vec2::new(140.0, 100.0)));
        assert_relative_eq!(room.label_position.x, 60.0);
        assert_relative_eq!(room.label_position.y, 40.0);
        assert!(!room.move_vertex(9, Vec2::ZERO));
    }

    #[test]
    fn test_rotate_label_wraps() {
        let mut room = office();
        room.rotate_label(-1.0);
        assert_relative_eq!(room.label_rotation, 359.0);
        room.rotate_label(46.0);
        assert_relative_eq!(room.label_rotation, 45.0);
    }

    #[test]
    fn test_vertex_near_picks_closest() {
        let room = office();
        assert_eq!(room.vertex_near(Vec2::new(98.0, 3.0), 10.0), Some(1));
        assert_eq!(room.vertex_near(Vec2::new(50.0, 30.0), 10.0), None);
    }

    #[test]
    fn test_fill_colors_differ_and_are_translucent() {
        let a = room_fill_color(0);
        let b = room_fill_color(1);
        assert_ne!(a, b);
        assert_relative_eq!(a[3], 0.35);
        // Hue 0° bei 70 % / 80 % → helles Rot
        assert_relative_eq!(a[0], 0.94, epsilon = 1e-3);
        assert_relative_eq!(a[1], 0.66, epsilon = 1e-3);
    }
}
