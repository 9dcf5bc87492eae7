//! Einrasten von Zeichenpunkten auf bestehende Geometrie.

use super::geometry::{project_onto_segment, POLYGON_MIN_POINTS};
use glam::Vec2;

/// Art des Einrastens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapKind {
    /// Auf einen Eckpunkt bestehender Geometrie
    Vertex,
    /// Auf den ersten Punkt des aktuellen Polygons
    StartPoint,
    /// Auf die Projektion einer bestehenden Kante
    Edge,
    /// Kein Einrasten, Rohposition
    None,
}

/// Ergebnis der Snap-Auflösung.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapResult {
    /// Eingerastete (oder rohe) Position
    pub position: Vec2,
    /// Art des Einrastens
    pub kind: SnapKind,
}

/// Schwellwerte in Bildpixeln.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapConfig {
    /// Radius für Eckpunkte
    pub vertex_threshold: f32,
    /// Radius für den Startpunkt des aktuellen Polygons
    pub start_threshold: f32,
    /// Abstand für Kanten-Projektion (kleiner als der Eckpunkt-Radius)
    pub edge_threshold: f32,
}

impl Default for SnapConfig {
    fn default() -> Self {
        Self {
            vertex_threshold: 25.0,
            start_threshold: 20.0,
            edge_threshold: 20.0,
        }
    }
}

/// Löst die Snap-Position für einen Klick auf.
///
/// Priorität: nächster Eckpunkt bestehender Polygone, dann erster Punkt des
/// aktuellen Polygons (erst ab 3 Punkten, wenn es schließen kann), dann nächste Kanten-Projektion, sonst die Rohposition.
/// Kanten der Länge 0 werden übersprungen.
pub fn resolve_snap<'a, I>(point: Vec2, polygons: I, drawing: &[Vec2], config: &SnapConfig) -> SnapResult
where
    I: IntoIterator<Item = &'a [Vec2]> + Clone,
{
    let nearest_vertex = polygons
        .clone()
        .into_iter()
        .flat_map(|poly| poly.iter().copied())
        .map(|v| (v, v.distance(point)))
        .filter(|(_, d)| *d <= config.vertex_threshold)
        .min_by(|a, b| a.1.total_cmp(&b.1));
    if let Some((position, _)) = nearest_vertex {
        return SnapResult {
            position,
            kind: SnapKind::Vertex,
        };
    }

    if let Some(&start) = drawing.first() {
        if drawing.len() >= POLYGON_MIN_POINTS && start.distance(point) <= config.start_threshold {
            return SnapResult {
                position: start,
                kind: SnapKind::StartPoint,
            };
        }
    }

    let nearest_edge = polygons
        .into_iter()
        .flat_map(|poly| {
            let n = poly.len();
            (0..n).filter_map(move |i| {
                if n < 2 {
                    return None;
                }
                project_onto_segment(point, poly[i], poly[(i + 1) % n])
            })
        })
        .map(|p| (p, p.distance(point)))
        .filter(|(_, d)| *d <= config.edge_threshold)
        .min_by(|a, b| a.1.total_cmp(&b.1));
    if let Some((position, _)) = nearest_edge {
        return SnapResult {
            position,
            kind: SnapKind::Edge,
        };
    }

    SnapResult {
        position: point,
        kind: SnapKind::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn room() -> Vec<Vec2> {
        vec![
            Vec2::new(100.0, 100.0),
            Vec2::new(300.0, 100.0),
            Vec2::new(300.0, 300.0),
            Vec2::new(100.0, 300.0),
        ]
    }

    #[test]
    fn test_vertex_has_priority_over_edge() {
        let rooms = [room()];
        let result = resolve_snap(
            Vec2::new(110.0, 104.0),
            rooms.iter().map(Vec::as_slice),
            &[],
            &SnapConfig::default(),
        );
        assert_eq!(result.kind, SnapKind::Vertex);
        assert_eq!(result.position, Vec2::new(100.0, 100.0));
    }

    #[test]
    fn test_edge_projection() {
        let rooms = [room()];
        let result = resolve_snap(
            Vec2::new(200.0, 112.0),
            rooms.iter().map(Vec::as_slice),
            &[],
            &SnapConfig::default(),
        );
        assert_eq!(result.kind, SnapKind::Edge);
        assert_relative_eq!(result.position.x, 200.0);
        assert_relative_eq!(result.position.y, 100.0);
    }

    #[test]
    fn test_start_point_snap_needs_three_points() {
        let rooms: [Vec<Vec2>; 0] = [];
        let drawing = [
            Vec2::new(500.0, 500.0),
            Vec2::new(600.0, 500.0),
            Vec2::new(600.0, 600.0),
        ];
        let result = resolve_snap(
            Vec2::new(505.0, 508.0),
            rooms.iter().map(Vec::as_slice),
            &drawing,
            &SnapConfig::default(),
        );
        assert_eq!(result.kind, SnapKind::StartPoint);
        assert_eq!(result.position, drawing[0]);

        // Mit zwei Punkten kann das Polygon noch nicht schließen
        let result = resolve_snap(
            Vec2::new(505.0, 508.0),
            rooms.iter().map(Vec::as_slice),
            &drawing[..2],
            &SnapConfig::default(),
        );
        assert_eq!(result.kind, SnapKind::None);
        assert_eq!(result.position, Vec2::new(505.0, 508.0));
    }

    #[test]
    fn test_far_point_stays_raw() {
        let rooms = [room()];
        let p = Vec2::new(700.0, 700.0);
        let result = resolve_snap(p, rooms.iter().map(Vec::as_slice), &[], &SnapConfig::default());
        assert_eq!(result.kind, SnapKind::None);
        assert_eq!(result.position, p);
    }

    #[test]
    fn test_zero_length_edges_are_skipped() {
        let degenerate = [vec![Vec2::new(0.0, 0.0), Vec2::new(0.0, 0.0)]];
        let result = resolve_snap(
            Vec2::new(40.0, 0.0),
            degenerate.iter().map(Vec::as_slice),
            &[],
            &SnapConfig::default(),
        );
        assert_eq!(result.kind, SnapKind::None);
    }
}
