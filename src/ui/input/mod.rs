//! Viewport-Input-Handling: Maus-Events, Pan, Scroll → AppIntent.
//!
//! Aufgeteilt in phasenbasierte Submodule:
//! - `clicks` — Drücken/Loslassen der Primärtaste (mit Pointer-Capture)
//! - `pointer_delta` — Zeigerbewegung, Verlassen, Pan per Mittel-/Sekundärtaste
//! - `zoom` — Mausrad, normalisiert auf Zoom-Einheiten

mod clicks;
mod pointer_delta;
mod zoom;

pub use zoom::normalize_wheel_delta;

use super::keyboard;
use crate::app::{AppIntent, EditorMode};
use crate::shared::EditorOptions;
use glam::Vec2;

/// Bündelt die gemeinsamen Parameter für Viewport-Event-Verarbeitung.
pub(crate) struct ViewportContext<'a> {
    pub ui: &'a egui::Ui,
    pub response: &'a egui::Response,
    pub options: &'a EditorOptions,
}

/// Verwaltet den Input-Zustand für das Viewport (Capture, Hover)
#[derive(Default)]
pub struct InputState {
    /// Primärtaste wurde im Viewport gedrückt und ist noch unten
    pub(crate) primary_captured: bool,
    /// Zeiger war im letzten Frame über dem Viewport
    pub(crate) was_hovered: bool,
}

impl InputState {
    /// Erstellt einen neuen, leeren Input-Zustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sammelt Viewport-Events aus egui-Input und gibt AppIntents zurück.
    ///
    /// Diese Methode ist der zentrale UI→Intent-Einstieg für Maus-, Scroll-
    /// und Tastatur-Interaktionen im Viewport.
    pub fn collect_viewport_events(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
        mode: &EditorMode,
        options: &EditorOptions,
    ) -> Vec<AppIntent> {
        let ctx = ViewportContext {
            ui,
            response,
            options,
        };

        let mut events = vec![AppIntent::ViewportResized {
            size: [response.rect.width(), response.rect.height()],
        }];

        // Keyboard-Shortcuts (ausgelagert in keyboard/)
        events.extend(keyboard::collect_keyboard_intents(ui, mode));

        self.handle_press(&ctx, &mut events);
        self.handle_pointer_motion(&ctx, &mut events);
        self.handle_release(&ctx, &mut events);
        self.handle_secondary_pan(&ctx, &mut events);
        self.handle_scroll_zoom(&ctx, &mut events);

        events
    }
}

/// Rechnet eine Bildschirmposition in Container-lokale Pixel um.
pub(crate) fn to_local(pointer_pos: egui::Pos2, response: &egui::Response) -> Vec2 {
    let local = pointer_pos - response.rect.min;
    Vec2::new(local.x, local.y)
}
