//! Mausrad-Zoom.
//!
//! Alle Rad-Events eines Frames werden zu einem Delta zusammengefasst und
//! als ein Intent gemeldet.

use super::{InputState, ViewportContext};
use crate::app::AppIntent;
use crate::shared::EditorOptions;

/// Rad-Delta → Zoom-Einheiten (positiv = herauszoomen).
///
/// Pixel werden durch `wheel_pixels_per_unit` geteilt, Zeilen mit
/// `wheel_lines_per_unit`, Seiten mit `wheel_units_per_page` multipliziert.
pub fn normalize_wheel_delta(unit: egui::MouseWheelUnit, delta_y: f32, options: &EditorOptions) -> f32 {
    let units = match unit {
        egui::MouseWheelUnit::Point => delta_y / options.wheel_pixels_per_unit.max(f32::EPSILON),
        egui::MouseWheelUnit::Line => delta_y * options.wheel_lines_per_unit,
        egui::MouseWheelUnit::Page => delta_y * options.wheel_units_per_page,
    };
    // egui: positiv = nach oben scrollen = hineinzoomen
    -units
}

impl InputState {
    /// Verarbeitet das Mausrad über dem Viewport.
    pub(crate) fn handle_scroll_zoom(&self, ctx: &ViewportContext, events: &mut Vec<AppIntent>) {
        if !ctx.response.hovered() {
            return;
        }
        let delta: f32 = ctx.ui.input(|i| {
            i.events
                .iter()
                .filter_map(|event| match event {
                    egui::Event::MouseWheel { unit, delta, .. } => {
                        Some(normalize_wheel_delta(*unit, delta.y, ctx.options))
                    }
                    _ => None,
                })
                .sum()
        });
        if delta != 0.0 {
            events.push(AppIntent::WheelScrolled { delta });
        }
    }
}
