#![no_main]

use floorplan_editor::core::geometry::triangulate_polygon;
use glam::Vec2;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let points: Vec<Vec2> = data
        .chunks_exact(2)
        .take(64)
        .map(|c| Vec2::new(f32::from(c[0]), f32::from(c[1])))
        .collect();

    let triangles = triangulate_polygon(&points);
    if points.len() >= 3 {
        assert!(triangles.len() <= points.len() - 2);
    }
    for triangle in triangles {
        assert!(triangle.iter().all(|&i| i < points.len()));
    }
});
