//! Use-Case-Funktionen für Masken: Erstellen, Verschieben, Skalieren, Drehen.

use super::layers;
use crate::app::persistence::RecordKind;
use crate::app::state::{EditorMode, MaskManipulation, MaskTool};
use crate::app::tools::PolygonDrawing;
use crate::app::AppState;
use crate::core::{resize_rotated_rect, Corner, OverlayMask, RotatedRect};
use glam::Vec2;

/// Wählt das Erstellungswerkzeug; die Selektion bleibt erhalten.
pub fn set_tool(state: &mut AppState, tool: MaskTool) {
    if !matches!(state.mode, EditorMode::Masks { .. }) {
        layers::set_mode(state, EditorMode::masks(tool));
        return;
    }
    if let EditorMode::Masks {
        tool: current,
        drawing,
        rect_draft,
        manipulation,
        ..
    } = &mut state.mode
    {
        *current = tool;
        *drawing = match tool {
            MaskTool::Polygon => PolygonDrawing::started(),
            MaskTool::Rectangle => PolygonDrawing::new(),
        };
        *rect_draft = None;
        *manipulation = None;
    }
}

fn add_mask(state: &mut AppState, mask: OverlayMask) {
    log::info!(
        "Maske {} angelegt ({:.0} × {:.0})",
        mask.id,
        mask.rect.width,
        mask.rect.height
    );
    state.record_undo_snapshot();
    state.plan_mut().add_mask(mask);
    state.mark_dirty(RecordKind::Masks);
}

/// Wandelt ein geschlossenes Polygon in eine Maske um und zeichnet weiter.
pub fn polygon_completed(state: &mut AppState, points: Vec<Vec2>) {
    let id = state.plan.next_mask_id();
    if let Some(mask) = OverlayMask::from_polygon(id, &points, state.options.mask_min_size) {
        add_mask(state, mask);
    }
    if let EditorMode::Masks {
        drawing,
        tool: MaskTool::Polygon,
        ..
    } = &mut state.mode
    {
        drawing.start();
    }
}

/// Selektiert eine Maske oder hebt die Selektion auf.
pub fn select(state: &mut AppState, id: Option<String>) {
    if let EditorMode::Masks {
        selected,
        manipulation,
        ..
    } = &mut state.mode
    {
        *selected = id.filter(|id| state.plan.masks.contains_key(id));
        *manipulation = None;
    }
}

fn selected_rect(state: &AppState) -> Option<crate::core::RotatedRect> {
    let id = state.mode.selected_mask()?;
    state.plan.masks.get(id).map(|m| m.rect)
}

/// Beginnt das Verschieben der selektierten Maske.
pub fn begin_move(state: &mut AppState, point: Vec2) {
    if selected_rect(state).is_none() {
        return;
    }
    state.record_undo_snapshot();
    if let EditorMode::Masks { manipulation, .. } = &mut state.mode {
        *manipulation = Some(MaskManipulation::Move { last: point });
    }
}

/// Beginnt die Größenänderung der selektierten Maske über eine Ecke.
pub fn begin_resize(state: &mut AppState, corner: Corner, point: Vec2) {
    let Some(start) = selected_rect(state) else {
        return;
    };
    state.record_undo_snapshot();
    if let EditorMode::Masks { manipulation, .. } = &mut state.mode {
        *manipulation = Some(MaskManipulation::Resize {
            corner,
            origin: point,
            start,
        });
    }
}

/// Setzt die laufende Manipulation mit der neuen Zeigerposition fort.
pub fn update_manipulation(state: &mut AppState, point: Vec2) {
    let min_size = state.options.mask_min_size;
    let EditorMode::Masks {
        selected: Some(id),
        manipulation: Some(active),
        ..
    } = &mut state.mode
    else {
        return;
    };
    let id = id.clone();
    let Some(current) = state.plan.masks.get(&id).map(|mask| mask.rect) else {
        return;
    };
    let rect = match active {
        MaskManipulation::Move { last } => {
            let delta = point - *last;
            *last = point;
            RotatedRect {
                center: current.center + delta,
                ..current
            }
        }
        MaskManipulation::Resize {
            corner,
            origin,
            start,
        } => resize_rotated_rect(start, *corner, point - *origin, min_size),
    };
    if let Some(mask) = state.plan_mut().masks.get_mut(&id) {
        mask.rect = rect;
        state.mark_dirty(RecordKind::Masks);
    }
}

/// Beendet die laufende Manipulation.
pub fn end_manipulation(state: &mut AppState) {
    if let EditorMode::Masks { manipulation, .. } = &mut state.mode {
        *manipulation = None;
    }
}

/// Beginnt ein aufgezogenes Rechteck.
pub fn begin_rect(state: &mut AppState, point: Vec2) {
    if let EditorMode::Masks {
        tool: MaskTool::Rectangle,
        rect_draft,
        selected,
        ..
    } = &mut state.mode
    {
        *rect_draft = Some((point, point));
        *selected = None;
    }
}

/// Zieht das Rechteck auf.
pub fn update_rect(state: &mut AppState, point: Vec2) {
    if let EditorMode::Masks {
        rect_draft: Some((_, current)),
        ..
    } = &mut state.mode
    {
        *current = point;
    }
}

/// Schließt das Rechteck ab; zu kleine Rechtecke werden verworfen.
pub fn end_rect(state: &mut AppState) {
    let EditorMode::Masks { rect_draft, .. } = &mut state.mode else {
        return;
    };
    let Some((start, end)) = rect_draft.take() else {
        return;
    };
    let id = state.plan.next_mask_id();
    match OverlayMask::from_drag(id, start, end, state.options.drag_draw_min) {
        Some(mask) => add_mask(state, mask),
        None => log::debug!("Rechteck zu klein, verworfen"),
    }
}

/// Blendet eine Maske ein oder aus.
pub fn set_visibility(state: &mut AppState, id: &str, visible: bool) {
    if !state.plan.masks.contains_key(id) {
        return;
    }
    state.record_undo_snapshot();
    if let Some(mask) = state.plan_mut().masks.get_mut(id) {
        mask.visible = visible;
    }
    state.mark_dirty(RecordKind::Masks);
}

/// Dreht die selektierte Maske um ihren Mittelpunkt.
pub fn rotate_selected(state: &mut AppState, degrees: f32) {
    let Some(id) = state.mode.selected_mask().map(str::to_string) else {
        return;
    };
    state.record_undo_snapshot();
    if let Some(mask) = state.plan_mut().masks.get_mut(&id) {
        mask.rotate(degrees);
    }
    state.mark_dirty(RecordKind::Masks);
}

/// Löscht die selektierte Maske.
pub fn delete_selected(state: &mut AppState) {
    let Some(id) = state.mode.selected_mask().map(str::to_string) else {
        return;
    };
    state.record_undo_snapshot();
    state.plan_mut().remove_mask(&id);
    log::info!("Maske {} gelöscht", id);
    select(state, None);
    state.mark_dirty(RecordKind::Masks);
}
