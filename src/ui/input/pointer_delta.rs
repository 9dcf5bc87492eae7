//! Zeigerbewegung und Pan per Mittel-/Sekundärtaste.

use super::{to_local, InputState, ViewportContext};
use crate::app::AppIntent;
use glam::Vec2;

impl InputState {
    /// Meldet Bewegungen über dem Viewport oder während einer eingefangenen Geste.
    pub(crate) fn handle_pointer_motion(
        &mut self,
        ctx: &ViewportContext,
        events: &mut Vec<AppIntent>,
    ) {
        let hovered = ctx.response.hovered();
        let (pos, moving) = ctx
            .ui
            .input(|i| (i.pointer.latest_pos(), i.pointer.is_moving()));

        if hovered || self.primary_captured {
            if let Some(pos) = pos.filter(|_| moving || !self.was_hovered) {
                events.push(AppIntent::PointerMoved {
                    pos: to_local(pos, ctx.response),
                });
            }
        } else if self.was_hovered {
            events.push(AppIntent::PointerLeft);
        }
        self.was_hovered = hovered;
    }

    /// Mittel- oder Sekundärtaste verschiebt die Ansicht direkt.
    pub(crate) fn handle_secondary_pan(&self, ctx: &ViewportContext, events: &mut Vec<AppIntent>) {
        if !(ctx.response.dragged_by(egui::PointerButton::Middle)
            || ctx.response.dragged_by(egui::PointerButton::Secondary))
        {
            return;
        }
        let delta = ctx.ui.input(|i| i.pointer.delta());
        if delta != egui::Vec2::ZERO {
            events.push(AppIntent::ViewPanned {
                delta: Vec2::new(delta.x, delta.y),
            });
        }
    }
}
