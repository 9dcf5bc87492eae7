//! Use-Case-Funktionen für die Polygon-Engine (Räume und Masken).
//!
//! Die Engine liefert ein [`DrawingOutcome`]; abgeschlossene Polygone werden
//! je nach Modus an die Raum- oder Masken-Use-Cases weitergereicht.

use super::{masks, rooms};
use crate::app::state::{EditorMode, MaskTool};
use crate::app::tools::DrawingOutcome;
use crate::app::AppState;
use crate::core::resolve_snap;
use glam::Vec2;

/// Fügt einen Punkt hinzu; vorher wird auf bestehende Geometrie eingerastet.
pub fn add_point(state: &mut AppState, raw: Vec2) {
    let close_threshold = state.options.polygon_close_threshold;
    let snap_config = state.options.snap_config();
    let polygons = state.plan.snap_polygons();

    let Some(drawing) = state.mode.drawing_mut() else {
        return;
    };
    if !drawing.is_active() {
        return;
    }
    let snap = resolve_snap(
        raw,
        polygons.iter().map(Vec::as_slice),
        drawing.points(),
        &snap_config,
    );
    log::debug!("Polygonpunkt {:?} ({:?})", snap.position, snap.kind);
    let outcome = drawing.add_point(snap.position, close_threshold);
    apply_outcome(state, outcome);
}

/// Schließt das Polygon explizit (ab 3 Punkten).
pub fn finish(state: &mut AppState) {
    let Some(drawing) = state.mode.drawing_mut() else {
        return;
    };
    let outcome = drawing.finish();
    apply_outcome(state, outcome);
}

/// Entfernt den letzten Punkt; der einzige Punkt bricht die Zeichnung ab.
pub fn undo_point(state: &mut AppState) {
    let Some(drawing) = state.mode.drawing_mut() else {
        return;
    };
    let outcome = drawing.undo_point();
    apply_outcome(state, outcome);
}

fn apply_outcome(state: &mut AppState, outcome: DrawingOutcome) {
    match outcome {
        DrawingOutcome::Pending => {}
        DrawingOutcome::Cancelled => {
            log::debug!("Polygon verworfen");
            // Das Masken-Polygonwerkzeug zeichnet durchgehend
            if let EditorMode::Masks { drawing, tool, .. } = &mut state.mode {
                if *tool == MaskTool::Polygon {
                    drawing.start();
                }
            }
        }
        DrawingOutcome::Completed(points) => {
            if matches!(state.mode, EditorMode::Rooms { .. }) {
                rooms::polygon_completed(state, points);
            } else if matches!(state.mode, EditorMode::Masks { .. }) {
                masks::polygon_completed(state, points);
            }
        }
    }
}
