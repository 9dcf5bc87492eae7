//! Keyboard-Shortcuts für den Viewport.
//!
//! Verarbeitet globale Tastenkombinationen und mappt sie auf `AppIntent`s.
//! Pro Tastendruck greift genau eine Ebene: Overlay > Zeichnen > Maske >
//! Raum > Gerät > Escape-Kaskade.

use crate::app::{AppIntent, EditorMode};
use crate::core::OverlayAdjust;
use glam::Vec2;

/// Grobe Drehung (R) in Grad.
const ROTATE_COARSE_DEG: f32 = 45.0;
/// Feine Drehung (Pfeiltasten) in Grad.
const ROTATE_FINE_DEG: f32 = 1.0;

/// Momentaufnahme der relevanten Tasten eines Frames.
#[derive(Debug, Default, Clone, Copy)]
struct Keys {
    modifiers: egui::Modifiers,
    z: bool,
    y: bool,
    r: bool,
    l: bool,
    escape: bool,
    enter: bool,
    backspace: bool,
    delete: bool,
    left: bool,
    right: bool,
    up: bool,
    down: bool,
    open_bracket: bool,
    close_bracket: bool,
    minus: bool,
    plus: bool,
    num0: bool,
}

impl Keys {
    fn read(ui: &egui::Ui) -> Self {
        ui.input(|i| Keys {
            modifiers: i.modifiers,
            z: i.key_pressed(egui::Key::Z),
            y: i.key_pressed(egui::Key::Y),
            r: i.key_pressed(egui::Key::R),
            l: i.key_pressed(egui::Key::L),
            escape: i.key_pressed(egui::Key::Escape),
            enter: i.key_pressed(egui::Key::Enter),
            backspace: i.key_pressed(egui::Key::Backspace),
            delete: i.key_pressed(egui::Key::Delete),
            left: i.key_pressed(egui::Key::ArrowLeft),
            right: i.key_pressed(egui::Key::ArrowRight),
            up: i.key_pressed(egui::Key::ArrowUp),
            down: i.key_pressed(egui::Key::ArrowDown),
            open_bracket: i.key_pressed(egui::Key::OpenBracket),
            close_bracket: i.key_pressed(egui::Key::CloseBracket),
            minus: i.key_pressed(egui::Key::Minus),
            plus: i.key_pressed(egui::Key::Equals) || i.key_pressed(egui::Key::Plus),
            num0: i.key_pressed(egui::Key::Num0),
        })
    }
}

/// Verarbeitet Keyboard-Shortcuts und gibt AppIntents zurück.
///
/// Solange ein Textfeld den Fokus hat oder ein Eingabedialog offen ist,
/// werden keine Intents erzeugt.
pub(super) fn collect_keyboard_intents(ui: &egui::Ui, mode: &EditorMode) -> Vec<AppIntent> {
    if ui.ctx().wants_keyboard_input() || mode.awaits_text_input() {
        return Vec::new();
    }
    let keys = Keys::read(ui);
    let mut events = Vec::new();

    // Undo / Redo (Cmd/Ctrl + Z / Y, Shift+Cmd+Z)
    if keys.modifiers.command {
        if keys.z && !keys.modifiers.shift {
            events.push(AppIntent::UndoRequested);
        }
        if keys.y || (keys.modifiers.shift && keys.z) {
            events.push(AppIntent::RedoRequested);
        }
        return events;
    }

    let in_overlay = matches!(mode, EditorMode::Overlay { .. });
    if in_overlay {
        if let Some(intent) = overlay_intent(&keys) {
            events.push(intent);
            return events;
        }
    } else {
        if keys.plus {
            events.push(AppIntent::ZoomInRequested);
        }
        if keys.minus {
            events.push(AppIntent::ZoomOutRequested);
        }
    }
    if keys.num0 {
        events.push(AppIntent::ResetViewRequested);
    }

    if let Some(intent) = editing_intent(&keys, mode) {
        events.push(intent);
    } else if keys.escape {
        events.push(AppIntent::CancelRequested);
    }

    events
}

/// Overlay ausrichten: Pfeile verschieben, `[`/`]` drehen, `-`/`=` skalieren.
fn overlay_intent(keys: &Keys) -> Option<AppIntent> {
    if keys.l {
        return Some(AppIntent::OverlayLockToggled);
    }
    let coarse = keys.modifiers.shift;
    let step = if coarse { 10.0 } else { 1.0 };
    let rotate = if coarse { 1.0 } else { 0.1 };
    let scale = if coarse { 0.1 } else { 0.01 };

    let adjust = if keys.left {
        OverlayAdjust::Move(Vec2::new(-step, 0.0))
    } else if keys.right {
        OverlayAdjust::Move(Vec2::new(step, 0.0))
    } else if keys.up {
        OverlayAdjust::Move(Vec2::new(0.0, -step))
    } else if keys.down {
        OverlayAdjust::Move(Vec2::new(0.0, step))
    } else if keys.open_bracket {
        OverlayAdjust::Rotate(-rotate)
    } else if keys.close_bracket {
        OverlayAdjust::Rotate(rotate)
    } else if keys.minus {
        OverlayAdjust::Scale(-scale)
    } else if keys.plus {
        OverlayAdjust::Scale(scale)
    } else {
        return None;
    };
    Some(AppIntent::OverlayNudged { adjust })
}

/// Zeichnen und Selektion; `None` wenn keine Ebene die Taste beansprucht.
fn editing_intent(keys: &Keys, mode: &EditorMode) -> Option<AppIntent> {
    if mode.is_drawing_polygon() {
        if keys.enter {
            return Some(AppIntent::FinishDrawingRequested);
        }
        if keys.escape || keys.backspace {
            return Some(AppIntent::UndoDrawingPointRequested);
        }
        return None;
    }

    let rotatable = mode.selected_mask().is_some() || mode.selected_room().is_some();
    if rotatable {
        let degrees = if keys.r {
            Some(ROTATE_COARSE_DEG)
        } else if keys.left {
            Some(-ROTATE_FINE_DEG)
        } else if keys.right {
            Some(ROTATE_FINE_DEG)
        } else {
            None
        };
        if let Some(degrees) = degrees {
            return Some(AppIntent::RotateSelectionRequested { degrees });
        }
    }

    let deletable = rotatable || mode.selected_device().is_some();
    if deletable && (keys.delete || keys.backspace) {
        return Some(AppIntent::DeleteSelectionRequested);
    }
    None
}

#[cfg(test)]
mod tests;
