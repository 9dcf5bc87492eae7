//! Layer-Compositor: zeichnet eine `RenderScene` mit dem egui-Painter.
//!
//! Zeichenreihenfolge entspricht `LayerId::ALL`. Jeder Layer wird mit seiner
//! Deckkraft multipliziert; unsichtbare Layer werden übersprungen.

use crate::core::geometry::{rotate_vec, triangulate_polygon};
use crate::core::{LayerId, Rgba};
use crate::shared::RenderScene;
use eframe::egui;
use glam::Vec2;

/// Radius der Geräte-Marker in Bildschirm-Pixeln.
const DEVICE_RADIUS: f32 = 6.0;
/// Kantenlänge der Ecken-Handles in Bildschirm-Pixeln.
const HANDLE_SIZE: f32 = 8.0;

/// Hochgeladene Bild-Texturen des Viewports.
#[derive(Default)]
pub struct ViewportTextures {
    /// Basis-Grundriss
    pub base: Option<egui::TextureHandle>,
    /// Overlay-Planbild
    pub overlay: Option<egui::TextureHandle>,
}

/// Konvertiert eine RGBA-Farbe (0..=1) und multipliziert den Alpha-Kanal.
fn color32(rgba: Rgba, alpha: f32) -> egui::Color32 {
    let channel = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
    egui::Color32::from_rgba_unmultiplied(
        channel(rgba[0]),
        channel(rgba[1]),
        channel(rgba[2]),
        channel(rgba[3] * alpha),
    )
}

/// Bildpixel → absolute egui-Position.
struct Projector<'a> {
    scene: &'a RenderScene,
    origin: egui::Pos2,
}

impl Projector<'_> {
    fn pos(&self, natural: Vec2) -> Option<egui::Pos2> {
        let local = self.scene.to_screen(natural)?;
        Some(self.origin + egui::vec2(local.x, local.y))
    }

    fn all(&self, points: &[Vec2]) -> Option<Vec<egui::Pos2>> {
        points.iter().map(|p| self.pos(*p)).collect()
    }
}

/// Zeichnet alle sichtbaren Layer der Szene in `rect`.
pub fn paint_scene(
    painter: &egui::Painter,
    rect: egui::Rect,
    scene: &RenderScene,
    textures: &ViewportTextures,
) {
    let projector = Projector {
        scene,
        origin: rect.min,
    };
    let painter = painter.with_clip_rect(rect);

    for layer in LayerId::ALL {
        let alpha = scene.layers.get(layer).alpha();
        if alpha <= 0.0 {
            continue;
        }
        match layer {
            LayerId::Base => paint_base(&painter, &projector, textures, alpha),
            LayerId::Masks => paint_masks(&painter, &projector, alpha),
            LayerId::Overlay => paint_overlay(&painter, &projector, textures, alpha),
            LayerId::Rooms => paint_rooms(&painter, &projector, alpha),
            LayerId::Devices => paint_devices(&painter, &projector, alpha),
            LayerId::Annotations => paint_annotations(&painter, &projector, rect, alpha),
        }
    }

    if !scene.has_base_image() {
        painter.text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            "No floor plan loaded. Use File → Open Floor Plan",
            egui::FontId::proportional(20.0),
            egui::Color32::GRAY,
        );
    }
}

fn paint_base(
    painter: &egui::Painter,
    projector: &Projector,
    textures: &ViewportTextures,
    alpha: f32,
) {
    let (Some(texture), Some(size)) = (&textures.base, projector.scene.base_size) else {
        return;
    };
    let (Some(min), Some(max)) = (projector.pos(Vec2::ZERO), projector.pos(size)) else {
        return;
    };
    painter.image(
        texture.id(),
        egui::Rect::from_min_max(min, max),
        egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
        egui::Color32::WHITE.gamma_multiply(alpha),
    );
}

fn paint_masks(painter: &egui::Painter, projector: &Projector, alpha: f32) {
    let scene = projector.scene;
    let selection = color32(scene.options.selection_color, 1.0);
    for mask in scene.plan.masks.values().filter(|m| m.visible) {
        let Some(corners) = projector.all(&mask.rect.corners()) else {
            continue;
        };
        let selected = scene.selected_mask.as_deref() == Some(mask.id.as_str());
        let stroke = if selected {
            egui::Stroke::new(2.0, selection)
        } else {
            egui::Stroke::NONE
        };
        painter.add(egui::Shape::convex_polygon(
            corners.clone(),
            color32(mask.color, alpha),
            stroke,
        ));
        if selected {
            for corner in corners {
                painter.rect_filled(
                    egui::Rect::from_center_size(corner, egui::Vec2::splat(HANDLE_SIZE)),
                    1.0,
                    selection,
                );
            }
        }
    }
}

fn paint_overlay(
    painter: &egui::Painter,
    projector: &Projector,
    textures: &ViewportTextures,
    alpha: f32,
) {
    let scene = projector.scene;
    let (Some(texture), Some(size)) = (&textures.overlay, scene.overlay_size) else {
        return;
    };
    let Some(corners) = projector.all(&scene.plan.overlay.corners(size)) else {
        return;
    };
    let tint = egui::Color32::WHITE.gamma_multiply(alpha);
    let uvs = [
        egui::pos2(0.0, 0.0),
        egui::pos2(1.0, 0.0),
        egui::pos2(1.0, 1.0),
        egui::pos2(0.0, 1.0),
    ];
    let mut mesh = egui::Mesh::with_texture(texture.id());
    for (pos, uv) in corners.iter().zip(uvs) {
        mesh.vertices.push(egui::epaint::Vertex {
            pos: *pos,
            uv,
            color: tint,
        });
    }
    mesh.add_triangle(0, 1, 2);
    mesh.add_triangle(0, 2, 3);
    painter.add(egui::Shape::mesh(mesh));

    if scene.plan.overlay.locked {
        return;
    }
    let outline = color32(scene.options.selection_color, 0.6);
    painter.add(egui::Shape::closed_line(
        corners,
        egui::Stroke::new(1.0, outline),
    ));
}

fn paint_rooms(painter: &egui::Painter, projector: &Projector, alpha: f32) {
    let scene = projector.scene;
    let outline = color32(scene.options.room_outline_color, alpha);
    let selection = color32(scene.options.selection_color, 1.0);

    for room in scene.plan.rooms.values().filter(|r| r.visible) {
        let Some(points) = projector.all(&room.path) else {
            continue;
        };
        let fill = color32(room.fill_color, alpha);
        let mut mesh = egui::Mesh::default();
        for pos in &points {
            mesh.colored_vertex(*pos, fill);
        }
        for [a, b, c] in triangulate_polygon(&room.path) {
            mesh.add_triangle(a as u32, b as u32, c as u32);
        }
        painter.add(egui::Shape::mesh(mesh));

        let selected = scene.selected_room.as_deref() == Some(room.id.as_str());
        let stroke = if selected {
            egui::Stroke::new(2.5, selection)
        } else {
            egui::Stroke::new(1.5, outline)
        };
        painter.add(egui::Shape::closed_line(points.clone(), stroke));
        if selected {
            for point in &points {
                painter.circle_filled(*point, HANDLE_SIZE * 0.5, selection);
            }
        }

        if let Some(anchor) = projector.pos(room.label_position) {
            paint_rotated_label(
                painter,
                anchor,
                &room.name,
                room.label_rotation,
                egui::Color32::BLACK.gamma_multiply(alpha),
            );
        }
    }
}

/// Text um seinen Mittelpunkt gedreht zeichnen.
fn paint_rotated_label(
    painter: &egui::Painter,
    center: egui::Pos2,
    text: &str,
    degrees: f32,
    color: egui::Color32,
) {
    let galley = painter.layout_no_wrap(text.to_string(), egui::FontId::proportional(14.0), color);
    let half = Vec2::new(galley.size().x, galley.size().y) * 0.5;
    let offset = rotate_vec(half, degrees);
    let top_left = center - egui::vec2(offset.x, offset.y);
    painter.add(
        egui::epaint::TextShape::new(top_left, galley, color).with_angle(degrees.to_radians()),
    );
}

fn paint_devices(painter: &egui::Painter, projector: &Projector, alpha: f32) {
    let scene = projector.scene;
    let fill = color32(scene.options.device_color, alpha);
    let link = color32(scene.options.connection_color, alpha);
    let selection = color32(scene.options.selection_color, 1.0);

    for (a, b) in scene.plan.connection_pairs() {
        if let (Some(pa), Some(pb)) = (projector.pos(a.position), projector.pos(b.position)) {
            painter.line_segment([pa, pb], egui::Stroke::new(1.5, link));
        }
    }

    let route: Vec<egui::Pos2> = scene
        .route
        .iter()
        .filter_map(|id| scene.plan.device(id))
        .filter_map(|d| projector.pos(d.position))
        .collect();
    if route.len() > 1 {
        painter.extend(egui::Shape::dashed_line(
            &route,
            egui::Stroke::new(2.5, selection),
            8.0,
            4.0,
        ));
    }

    for device in &scene.plan.devices {
        let Some(pos) = projector.pos(device.position) else {
            continue;
        };
        painter.circle_filled(pos, DEVICE_RADIUS, fill);
        let highlighted = scene.selected_device.as_deref() == Some(device.id.as_str())
            || scene.route.contains(&device.id);
        if highlighted {
            painter.circle_stroke(pos, DEVICE_RADIUS + 3.0, egui::Stroke::new(2.0, selection));
        }
    }
}

fn paint_annotations(painter: &egui::Painter, projector: &Projector, rect: egui::Rect, alpha: f32) {
    let scene = projector.scene;
    let color = color32(scene.options.annotation_color, alpha);
    let stroke = egui::Stroke::new(2.0, color);

    if let Some(drawing) = &scene.drawing {
        if let Some(points) = projector.all(&drawing.points) {
            painter.add(egui::Shape::line(points.clone(), stroke));
            for point in &points {
                painter.circle_filled(*point, 3.0, color);
            }
            if let (Some(last), Some(cursor)) = (
                points.last(),
                drawing.cursor.and_then(|c| projector.pos(c)),
            ) {
                painter.extend(egui::Shape::dashed_line(&[*last, cursor], stroke, 6.0, 4.0));
            }
            if let (true, Some(first)) = (drawing.closes, points.first()) {
                painter.circle_stroke(*first, 8.0, egui::Stroke::new(2.0, egui::Color32::GREEN));
            }
        }
    }

    if let Some((start, end)) = scene.rect_draft {
        if let (Some(a), Some(b)) = (projector.pos(start), projector.pos(end)) {
            painter.rect_stroke(
                egui::Rect::from_two_pos(a, b),
                0.0,
                stroke,
                egui::StrokeKind::Middle,
            );
        }
    }

    if let Some(points) = projector.all(&scene.calibration_points) {
        if let [a, b] = points[..] {
            painter.line_segment([a, b], stroke);
        }
        for point in points {
            painter.circle_stroke(point, 6.0, stroke);
            painter.circle_filled(point, 2.0, color);
        }
    }

    if let Some(measure) = &scene.measure {
        if let (Some(a), Some(b)) = (projector.pos(measure.start), projector.pos(measure.end)) {
            painter.line_segment([a, b], stroke);
            painter.text(
                a + (b - a) * 0.5 + egui::vec2(0.0, -12.0),
                egui::Align2::CENTER_BOTTOM,
                &measure.label,
                egui::FontId::proportional(14.0),
                color,
            );
        }
    }

    if let (Some(bar), Some(geometry)) = (&scene.scale_bar, scene.geometry) {
        let length = bar.natural_length * geometry.screen_per_natural();
        let start = rect.left_bottom() + egui::vec2(16.0, -24.0);
        let end = start + egui::vec2(length, 0.0);
        let bar_stroke = egui::Stroke::new(2.0, egui::Color32::BLACK.gamma_multiply(alpha));
        painter.line_segment([start, end], bar_stroke);
        for x in [start, end] {
            painter.line_segment([x + egui::vec2(0.0, -5.0), x + egui::vec2(0.0, 5.0)], bar_stroke);
        }
        painter.text(
            start + egui::vec2(length * 0.5, -6.0),
            egui::Align2::CENTER_BOTTOM,
            &bar.label,
            egui::FontId::proportional(12.0),
            egui::Color32::BLACK.gamma_multiply(alpha),
        );
    }
}
