//! Drücken/Loslassen der Primärtaste.

use super::{to_local, InputState, ViewportContext};
use crate::app::AppIntent;

impl InputState {
    /// Primärtaste im Viewport gedrückt → Zeiger einfangen.
    pub(crate) fn handle_press(&mut self, ctx: &ViewportContext, events: &mut Vec<AppIntent>) {
        let (pressed, pos) = ctx
            .ui
            .input(|i| (i.pointer.primary_pressed(), i.pointer.interact_pos()));
        if !pressed || !ctx.response.hovered() {
            return;
        }
        if let Some(pos) = pos {
            self.primary_captured = true;
            events.push(AppIntent::PointerPressed {
                pos: to_local(pos, ctx.response),
            });
        }
    }

    /// Loslassen beendet die Geste, auch außerhalb des Viewports.
    pub(crate) fn handle_release(&mut self, ctx: &ViewportContext, events: &mut Vec<AppIntent>) {
        if !self.primary_captured {
            return;
        }
        let (released, down, pos) = ctx.ui.input(|i| {
            (
                i.pointer.primary_released(),
                i.pointer.primary_down(),
                i.pointer.latest_pos(),
            )
        });
        if !released && down {
            return;
        }
        self.primary_captured = false;
        let pos = pos.unwrap_or(ctx.response.rect.center());
        events.push(AppIntent::PointerReleased {
            pos: to_local(pos, ctx.response),
        });
    }
}
