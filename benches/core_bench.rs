use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use floorplan_editor::core::geometry::{point_in_polygon, triangulate_polygon};
use floorplan_editor::core::{parse_distance_feet, resolve_snap, SnapConfig};
use glam::Vec2;
use std::hint::black_box;

/// Sternförmiges (konkaves) Polygon mit `vertex_count` Ecken.
fn build_star_polygon(vertex_count: usize) -> Vec<Vec2> {
    (0..vertex_count)
        .map(|i| {
            let angle = i as f32 / vertex_count as f32 * std::f32::consts::TAU;
            let radius = if i % 2 == 0 { 500.0 } else { 220.0 };
            Vec2::new(600.0 + radius * angle.cos(), 600.0 + radius * angle.sin())
        })
        .collect()
}

/// Raster aus quadratischen Räumen wie in einem großen Grundriss.
fn build_room_grid(rooms_per_side: usize) -> Vec<Vec<Vec2>> {
    let size = 120.0;
    (0..rooms_per_side * rooms_per_side)
        .map(|i| {
            let min = Vec2::new(
                (i % rooms_per_side) as f32 * size,
                (i / rooms_per_side) as f32 * size,
            );
            vec![
                min,
                min + Vec2::new(size, 0.0),
                min + Vec2::splat(size),
                min + Vec2::new(0.0, size),
            ]
        })
        .collect()
}

fn build_query_points(count: usize) -> Vec<Vec2> {
    (0..count)
        .map(|i| {
            let x = (i % 1000) as f32 * 1.2 + 0.37;
            let y = ((i * 7) % 1000) as f32 * 1.2 + 0.63;
            Vec2::new(x, y)
        })
        .collect()
}

fn bench_point_in_polygon(c: &mut Criterion) {
    let mut group = c.benchmark_group("point_in_polygon");
    let query_points = build_query_points(1024);

    for &vertex_count in &[8usize, 64, 512] {
        let polygon = build_star_polygon(vertex_count);
        group.bench_with_input(
            BenchmarkId::new("star_batch", vertex_count),
            &polygon,
            |b, polygon| {
                b.iter(|| {
                    let hits = query_points
                        .iter()
                        .filter(|p| point_in_polygon(black_box(**p), polygon))
                        .count();
                    black_box(hits)
                })
            },
        );
    }

    group.finish();
}

fn bench_triangulation(c: &mut Criterion) {
    let mut group = c.benchmark_group("triangulate_polygon");

    for &vertex_count in &[16usize, 128] {
        let polygon = build_star_polygon(vertex_count);
        group.bench_with_input(
            BenchmarkId::new("star", vertex_count),
            &polygon,
            |b, polygon| b.iter(|| black_box(triangulate_polygon(black_box(polygon)).len())),
        );
    }

    group.finish();
}

fn bench_snapping(c: &mut Criterion) {
    let config = SnapConfig::default();
    let rooms = build_room_grid(20);
    let query_points = build_query_points(256);

    c.bench_function("resolve_snap_400_rooms", |b| {
        b.iter(|| {
            let mut snapped = 0usize;
            for point in &query_points {
                let result = resolve_snap(
                    black_box(*point),
                    rooms.iter().map(Vec::as_slice),
                    &[],
                    &config,
                );
                if result.position != *point {
                    snapped += 1;
                }
            }
            black_box(snapped)
        })
    });
}

fn bench_distance_parsing(c: &mut Criterion) {
    let inputs = ["10' 6\"", "12 ft", "3.5 m", "350 cm", "4", "11'11\""];

    c.bench_function("parse_distance_feet", |b| {
        b.iter(|| {
            let total: f32 = inputs
                .iter()
                .filter_map(|input| parse_distance_feet(black_box(input)).ok())
                .sum();
            black_box(total)
        })
    });
}

criterion_group!(
    core_benches,
    bench_point_in_polygon,
    bench_triangulation,
    bench_snapping,
    bench_distance_parsing
);
criterion_main!(core_benches);
