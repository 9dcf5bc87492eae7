//! Use-Case-Funktionen für die modusabhängige Selektion.
//!
//! Drehen und Löschen wirken auf das, was im aktiven Modus selektiert ist.

use super::{devices, masks, rooms};
use crate::app::state::EditorMode;
use crate::app::AppState;

/// Dreht die Selektion (Maske oder Raum-Beschriftung) um `degrees`.
pub fn rotate(state: &mut AppState, degrees: f32) {
    if state.mode.selected_mask().is_some() {
        masks::rotate_selected(state, degrees);
    } else if state.mode.selected_room().is_some() {
        rooms::rotate_selected_label(state, degrees);
    }
}

/// Löscht die Selektion (Maske, Raum oder Gerät).
pub fn delete(state: &mut AppState) {
    if state.mode.selected_mask().is_some() {
        masks::delete_selected(state);
    } else if state.mode.selected_room().is_some() {
        rooms::delete_selected(state);
    } else if state.mode.selected_device().is_some() {
        devices::delete_selected(state);
    }
}

/// Hebt die Selektion im aktiven Modus auf.
pub fn clear(state: &mut AppState) {
    if matches!(state.mode, EditorMode::Devices { .. }) {
        devices::select(state, None);
    } else if matches!(state.mode, EditorMode::Masks { .. }) {
        masks::select(state, None);
    } else if matches!(state.mode, EditorMode::Rooms { .. }) {
        rooms::select(state, None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::OverlayMask;
    use glam::Vec2;

    #[test]
    fn test_rotate_and_delete_follow_active_mode() {
        let mut state = AppState::new();
        state
            .plan_mut()
            .add_mask(OverlayMask::new("mask-1".into(), Vec2::new(50.0, 50.0), 40.0, 40.0));
        state.mode = EditorMode::masks(crate::app::state::MaskTool::Rectangle);
        masks::select(&mut state, Some("mask-1".into()));

        rotate(&mut state, 45.0);
        assert!((state.plan.masks["mask-1"].rect.rotation - 45.0).abs() < 1e-4);

        delete(&mut state);
        assert!(state.plan.masks.is_empty());
    }

    #[test]
    fn test_without_selection_nothing_happens() {
        let mut state = AppState::new();
        rotate(&mut state, 45.0);
        delete(&mut state);
        clear(&mut state);
        assert!(!state.can_undo());
    }
}
