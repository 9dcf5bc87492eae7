//! Reine Geometrie-Hilfen: Region-Test, Schwerpunkt, Bounding-Box, Projektion, Rotation.
//!
//! Alle Funktionen arbeiten in natürlichen Bildkoordinaten (Pixel des Originalbilds).

use glam::Vec2;

/// Minimale Punktanzahl eines geschlossenen Polygons.
pub const POLYGON_MIN_POINTS: usize = 3;

/// Prüft per Ray-Casting, ob ein Punkt innerhalb eines geschlossenen Polygons liegt.
///
/// Ein horizontaler Strahl wird vom Punkt nach +X geschickt; eine ungerade
/// Anzahl an Kantenkreuzungen bedeutet "innen". Konkave Polygone werden
/// korrekt behandelt. Polygone mit weniger als 3 Punkten enthalten nichts.
pub fn point_in_polygon(point: Vec2, polygon: &[Vec2]) -> bool {
    if polygon.len() < 3 {
        return false;
    }

    let mut inside = false;
    let mut previous = polygon[polygon.len() - 1];

    for &current in polygon {
        // Kante nur zählen wenn sie die Strahl-Höhe echt überspannt;
        // dadurch ist (previous.y - current.y) hier nie 0.
        if (current.y > point.y) != (previous.y > point.y) {
            let crossing_x = (previous.x - current.x) * (point.y - current.y)
                / (previous.y - current.y)
                + current.x;
            if point.x < crossing_x {
                inside = !inside;
            }
        }
        previous = current;
    }

    inside
}

/// Mittelwert aller Eckpunkte (Label-Position von Räumen).
///
/// Gibt `None` für eine leere Punktliste zurück.
pub fn vertex_centroid(points: &[Vec2]) -> Option<Vec2> {
    if points.is_empty() {
        return None;
    }
    let sum = points.iter().fold(Vec2::ZERO, |acc, p| acc + *p);
    Some(sum / points.len() as f32)
}

/// Achsenparallele Bounding-Box als `(min, max)`.
pub fn bounding_box(points: &[Vec2]) -> Option<(Vec2, Vec2)> {
    let first = *points.first()?;
    Some(
        points
            .iter()
            .skip(1)
            .fold((first, first), |(min, max), p| (min.min(*p), max.max(*p))),
    )
}

/// Projiziert einen Punkt auf die Strecke `a`–`b` (t auf 0..1 begrenzt).
///
/// Gibt `None` zurück, wenn die Strecke die Länge 0 hat.
pub fn project_onto_segment(point: Vec2, a: Vec2, b: Vec2) -> Option<Vec2> {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq <= f32::EPSILON {
        return None;
    }
    let t = ((point - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    Some(a + ab * t)
}

/// Dreht einen Vektor um `degrees` (positiv = im Uhrzeigersinn bei Y nach unten).
pub fn rotate_vec(v: Vec2, degrees: f32) -> Vec2 {
    let (sin, cos) = degrees.to_radians().sin_cos();
    Vec2::new(v.x * cos - v.y * sin, v.x * sin + v.y * cos)
}

/// Dreht `point` um `pivot` um `degrees`.
pub fn rotate_around(point: Vec2, pivot: Vec2, degrees: f32) -> Vec2 {
    pivot + rotate_vec(point - pivot, degrees)
}

/// Manhattan-Distanz (L1) zweier Punkte.
pub fn manhattan_distance(a: Vec2, b: Vec2) -> f32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

/// Normalisiert einen Winkel in Grad auf `[0, 360)`.
pub fn normalize_degrees(degrees: f32) -> f32 {
    degrees.rem_euclid(360.0)
}

/// Vorzeichenbehaftete Fläche (Shoelace); positiv = im Uhrzeigersinn bei Y nach unten.
pub fn signed_area(polygon: &[Vec2]) -> f32 {
    let n = polygon.len();
    (0..n)
        .map(|i| polygon[i].perp_dot(polygon[(i + 1) % n]))
        .sum::<f32>()
        * 0.5
}

/// Ob das Polygon mindestens 3 Punkte und eine Fläche ungleich 0 hat.
pub fn is_valid_polygon(polygon: &[Vec2]) -> bool {
    polygon.len() >= POLYGON_MIN_POINTS && signed_area(polygon).abs() > f32::EPSILON
}

/// Zerlegt ein einfaches (ggf. konkaves) Polygon per Ear-Clipping in Dreiecke.
///
/// Liefert Indizes in `polygon`. Selbstüberschneidende Polygone werden
/// nach bestem Bemühen zerlegt; übrig bleibende Punkte werden verworfen.
pub fn triangulate_polygon(polygon: &[Vec2]) -> Vec<[usize; 3]> {
    let n = polygon.len();
    if n < 3 {
        return Vec::new();
    }
    let orientation = signed_area(polygon).signum();
    let mut remaining: Vec<usize> = (0..n).collect();
    let mut triangles = Vec::with_capacity(n - 2);

    while remaining.len() > 3 {
        let len = remaining.len();
        let ear = (0..len).find(|&i| {
            let prev = polygon[remaining[(i + len - 1) % len]];
            let cur = polygon[remaining[i]];
            let next = polygon[remaining[(i + 1) % len]];
            if (cur - prev).perp_dot(next - cur) * orientation <= 0.0 {
                return false;
            }
            let triangle = [prev, cur, next];
            remaining.iter().enumerate().all(|(j, &idx)| {
                j == i
                    || j == (i + len - 1) % len
                    || j == (i + 1) % len
                    || !point_in_polygon(polygon[idx], &triangle)
            })
        });
        let Some(i) = ear else {
            break;
        };
        triangles.push([
            remaining[(i + len - 1) % len],
            remaining[i],
            remaining[(i + 1) % len],
        ]);
        remaining.remove(i);
    }
    if remaining.len() == 3 {
        triangles.push([remaining[0], remaining[1], remaining[2]]);
    }
    triangles
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn square() -> Vec<Vec2> {
        vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(10.0, 10.0),
            Vec2::new(0.0, 10.0),
        ]
    }

    /// U-förmiges (konkaves) Polygon mit Einbuchtung von oben.
    fn u_shape() -> Vec<Vec2> {
        vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(3.0, 0.0),
            Vec2::new(3.0, 7.0),
            Vec2::new(7.0, 7.0),
            Vec2::new(7.0, 0.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(10.0, 10.0),
            Vec2::new(0.0, 10.0),
        ]
    }

    #[test]
    fn test_point_in_square() {
        assert!(point_in_polygon(Vec2::new(5.0, 5.0), &square()));
        assert!(!point_in_polygon(Vec2::new(15.0, 5.0), &square()));
        assert!(!point_in_polygon(Vec2::new(-0.5, 5.0), &square()));
    }

    #[test]
    fn test_point_in_concave_polygon() {
        let poly = u_shape();
        // Einbuchtung liegt außerhalb
        assert!(!point_in_polygon(Vec2::new(5.0, 3.0), &poly));
        // Schenkel und Basis liegen innerhalb
        assert!(point_in_polygon(Vec2::new(1.5, 3.0), &poly));
        assert!(point_in_polygon(Vec2::new(8.5, 3.0), &poly));
        assert!(point_in_polygon(Vec2::new(5.0, 9.0), &poly));
    }

    #[test]
    fn test_degenerate_polygon_contains_nothing() {
        let line = vec![Vec2::ZERO, Vec2::new(10.0, 10.0)];
        assert!(!point_in_polygon(Vec2::new(5.0, 5.0), &line));
    }

    #[test]
    fn test_vertex_centroid() {
        let c = vertex_centroid(&square()).expect("Schwerpunkt sollte existieren");
        assert_relative_eq!(c.x, 5.0);
        assert_relative_eq!(c.y, 5.0);
        assert!(vertex_centroid(&[]).is_none());
    }

    #[test]
    fn test_bounding_box() {
        let (min, max) = bounding_box(&u_shape()).expect("Bounding-Box sollte existieren");
        assert_eq!(min, Vec2::ZERO);
        assert_eq!(max, Vec2::new(10.0, 10.0));
    }

    #[test]
    fn test_projection_is_clamped_to_segment() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(10.0, 0.0);
        let mid = project_onto_segment(Vec2::new(4.0, 3.0), a, b).expect("Projektion");
        assert_relative_eq!(mid.x, 4.0);
        assert_relative_eq!(mid.y, 0.0);
        let clamped = project_onto_segment(Vec2::new(-5.0, 2.0), a, b).expect("Projektion");
        assert_eq!(clamped, a);
        assert!(project_onto_segment(Vec2::ONE, a, a).is_none());
    }

    #[test]
    fn test_rotate_vec_quarter_turn() {
        let r = rotate_vec(Vec2::new(1.0, 0.0), 90.0);
        assert_relative_eq!(r.x, 0.0, epsilon = 1e-6);
        assert_relative_eq!(r.y, 1.0, epsilon = 1e-6);
        let back = rotate_around(Vec2::new(2.0, 1.0), Vec2::new(1.0, 1.0), -90.0);
        assert_relative_eq!(back.x, 1.0, epsilon = 1e-6);
        assert_relative_eq!(back.y, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_manhattan_and_normalize() {
        assert_relative_eq!(
            manhattan_distance(Vec2::new(1.0, 2.0), Vec2::new(4.0, -2.0)),
            7.0
        );
        assert_relative_eq!(normalize_degrees(-45.0), 315.0);
        assert_relative_eq!(normalize_degrees(405.0), 45.0);
    }

    #[test]
    fn test_triangulate_concave_l_shape() {
        let l_shape = vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(20.0, 0.0),
            Vec2::new(20.0, 10.0),
            Vec2::new(10.0, 10.0),
            Vec2::new(10.0, 20.0),
            Vec2::new(0.0, 20.0),
        ];
        let triangles = triangulate_polygon(&l_shape);
        assert_eq!(triangles.len(), 4);

        let area: f32 = triangles
            .iter()
            .map(|t| signed_area(&[l_shape[t[0]], l_shape[t[1]], l_shape[t[2]]]).abs())
            .sum();
        assert_relative_eq!(area, 300.0, epsilon = 1e-3);
    }

    #[test]
    fn test_polygon_validity_needs_area() {
        let triangle = [Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0), Vec2::new(0.0, 10.0)];
        assert!(is_valid_polygon(&triangle));
        assert!(!is_valid_polygon(&triangle[..2]));
        assert!(!is_valid_polygon(&[
            Vec2::new(0.0, 0.0),
            Vec2::new(300.0, 0.0),
            Vec2::new(0.0, 0.0),
        ]));
    }
}
