//! Use-Case-Funktionen für das Ausrichten des Overlay-Bildes.

use crate::app::persistence::RecordKind;
use crate::app::state::EditorMode;
use crate::app::AppState;
use crate::core::OverlayAdjust;
use glam::Vec2;

/// Wendet eine schrittweise Anpassung an; gesperrt bleibt alles unverändert.
pub fn adjust(state: &mut AppState, adjust: OverlayAdjust) {
    if state.plan.overlay.locked {
        log::debug!("Overlay gesperrt, {:?} ignoriert", adjust);
        return;
    }
    state.record_undo_snapshot();
    if state.plan_mut().overlay.adjust(adjust) {
        state.mark_dirty(RecordKind::Overlay);
    }
}

/// Sperrt oder entsperrt das Overlay.
pub fn toggle_lock(state: &mut AppState) {
    let overlay = &mut state.plan_mut().overlay;
    overlay.locked = !overlay.locked;
    let locked = overlay.locked;
    state.mark_dirty(RecordKind::Overlay);
    if locked {
        state.show_info("Overlay locked");
    } else {
        state.show_info("Overlay unlocked");
    }
}

/// Beginnt das Ziehen des Overlays an `point` (Bildpixel).
pub fn begin_drag(state: &mut AppState, point: Vec2) {
    if state.plan.overlay.locked {
        return;
    }
    state.record_undo_snapshot();
    if let EditorMode::Overlay { drag_last } = &mut state.mode {
        *drag_last = Some(point);
    }
}

/// Verschiebt das Overlay um die Zeigerbewegung seit dem letzten Update.
pub fn update_drag(state: &mut AppState, point: Vec2) {
    let EditorMode::Overlay {
        drag_last: Some(last),
    } = &mut state.mode
    else {
        return;
    };
    let delta = point - *last;
    *last = point;
    if state.plan_mut().overlay.adjust(OverlayAdjust::Move(delta)) {
        state.mark_dirty(RecordKind::Overlay);
    }
}

/// Beendet das Ziehen.
pub fn end_drag(state: &mut AppState) {
    if let EditorMode::Overlay { drag_last } = &mut state.mode {
        *drag_last = None;
    }
}
