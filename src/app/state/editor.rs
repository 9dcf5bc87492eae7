use crate::app::tools::PolygonDrawing;
use crate::core::{Corner, LayerId, RotatedRect};
use glam::Vec2;

/// Erstellungswerkzeug im Masken-Modus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MaskTool {
    /// Polygon zeichnen, wird zur Bounding-Box
    #[default]
    Polygon,
    /// Rechteck aufziehen
    Rectangle,
}

/// Werkzeug im Geräte-Modus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeviceTool {
    /// Platzieren und Verschieben
    #[default]
    Place,
    /// Geräte verketten
    Route,
}

/// Laufende Manipulation der selektierten Maske.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MaskManipulation {
    /// Verschieben; `last` = letzte Zeigerposition (Bildpixel)
    Move { last: Vec2 },
    /// Größe über eine Ecke ändern; relativ zu Startpunkt und Startgeometrie
    Resize {
        corner: Corner,
        origin: Vec2,
        start: RotatedRect,
    },
}

/// Aktiver Editor-Modus.
///
/// Jede Variante besitzt nur ihre eigenen Interaktionsdaten; ein Moduswechsel
/// verwirft den Zustand des vorherigen Modus.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum EditorMode {
    /// Nur Pan/Zoom
    #[default]
    Navigate,
    /// Overlay-Bild ausrichten
    Overlay {
        /// Letzte Zeigerposition während eines Overlay-Drags
        drag_last: Option<Vec2>,
    },
    /// Räume zeichnen und bearbeiten
    Rooms {
        /// Polygon-Engine
        drawing: PolygonDrawing,
        /// Selektierter Raum
        selected: Option<String>,
        /// Index des gezogenen Eckpunkts des selektierten Raums
        corner_drag: Option<usize>,
        /// Fertiges Polygon, wartet auf einen Namen
        pending_name: Option<Vec<Vec2>>,
    },
    /// Masken erstellen und bearbeiten
    Masks {
        /// Erstellungswerkzeug
        tool: MaskTool,
        /// Polygon-Engine (Polygon-Werkzeug)
        drawing: PolygonDrawing,
        /// Aufgezogenes Rechteck (Start, aktuell)
        rect_draft: Option<(Vec2, Vec2)>,
        /// Selektierte Maske
        selected: Option<String>,
        /// Laufende Verschiebung/Größenänderung
        manipulation: Option<MaskManipulation>,
    },
    /// Geräte platzieren und verketten
    Devices {
        /// Werkzeug
        tool: DeviceTool,
        /// Selektiertes Gerät
        selected: Option<String>,
        /// Selektiertes Gerät wird gezogen
        dragging: bool,
        /// Laufende Verkettung (geordnete Geräte-IDs)
        route: Vec<String>,
    },
    /// Maßstab kalibrieren
    Calibrate {
        /// Kalibrierpunkte (0..=2)
        points: Vec<Vec2>,
        /// Index des gezogenen Punkts
        dragging: Option<usize>,
        /// Distanz-Eingabe ist offen
        awaiting_distance: bool,
    },
    /// Distanz messen
    Measure {
        /// Messpunkte (0..=2)
        points: Vec<Vec2>,
        /// Letzte Zeigerposition für die Vorschau
        hover: Option<Vec2>,
    },
}

impl EditorMode {
    /// Frischer Modus für einen aktivierten Layer.
    pub fn for_layer(layer: LayerId) -> Self {
        match layer {
            LayerId::Overlay => EditorMode::Overlay { drag_last: None },
            LayerId::Rooms => EditorMode::rooms(),
            LayerId::Masks => EditorMode::masks(MaskTool::Polygon),
            LayerId::Devices => EditorMode::devices(DeviceTool::Place),
            LayerId::Base | LayerId::Annotations => EditorMode::Navigate,
        }
    }

    /// Raum-Modus ohne laufende Zeichnung.
    pub fn rooms() -> Self {
        EditorMode::Rooms {
            drawing: PolygonDrawing::new(),
            selected: None,
            corner_drag: None,
            pending_name: None,
        }
    }

    /// Masken-Modus; das Polygon-Werkzeug beginnt sofort zu zeichnen.
    pub fn masks(tool: MaskTool) -> Self {
        let drawing = match tool {
            MaskTool::Polygon => PolygonDrawing::started(),
            MaskTool::Rectangle => PolygonDrawing::new(),
        };
        EditorMode::Masks {
            tool,
            drawing,
            rect_draft: None,
            selected: None,
            manipulation: None,
        }
    }

    /// Geräte-Modus.
    pub fn devices(tool: DeviceTool) -> Self {
        EditorMode::Devices {
            tool,
            selected: None,
            dragging: false,
            route: Vec::new(),
        }
    }

    /// Kalibrier-Werkzeug ohne Punkte.
    pub fn calibrate() -> Self {
        EditorMode::Calibrate {
            points: Vec::new(),
            dragging: None,
            awaiting_distance: false,
        }
    }

    /// Mess-Werkzeug ohne Punkte.
    pub fn measure() -> Self {
        EditorMode::Measure {
            points: Vec::new(),
            hover: None,
        }
    }

    /// Layer, der in diesem Modus bearbeitet wird.
    pub fn active_layer(&self) -> LayerId {
        match self {
            EditorMode::Navigate => LayerId::Base,
            EditorMode::Overlay { .. } => LayerId::Overlay,
            EditorMode::Rooms { .. } => LayerId::Rooms,
            EditorMode::Masks { .. } => LayerId::Masks,
            EditorMode::Devices { .. } => LayerId::Devices,
            EditorMode::Calibrate { .. } | EditorMode::Measure { .. } => LayerId::Annotations,
        }
    }

    /// Kurzname für Statusleiste und Logs.
    pub fn label(&self) -> &'static str {
        match self {
            EditorMode::Navigate => "Navigate",
            EditorMode::Overlay { .. } => "Overlay",
            EditorMode::Rooms { .. } => "Rooms",
            EditorMode::Masks { .. } => "Masks",
            EditorMode::Devices { .. } => "Devices",
            EditorMode::Calibrate { .. } => "Calibrate",
            EditorMode::Measure { .. } => "Measure",
        }
    }

    /// Laufende Polygon-Engine (Räume oder Masken), falls vorhanden.
    pub fn drawing(&self) -> Option<&PolygonDrawing> {
        match self {
            EditorMode::Rooms { drawing, .. } | EditorMode::Masks { drawing, .. } => Some(drawing),
            _ => None,
        }
    }

    /// Mutable Polygon-Engine.
    pub fn drawing_mut(&mut self) -> Option<&mut PolygonDrawing> {
        match self {
            EditorMode::Rooms { drawing, .. } | EditorMode::Masks { drawing, .. } => Some(drawing),
            _ => None,
        }
    }

    /// Ob gerade ein Polygon mit mindestens einem Punkt gezeichnet wird.
    pub fn is_drawing_polygon(&self) -> bool {
        self.drawing().is_some_and(PolygonDrawing::has_points)
    }

    /// Selektierter Raum.
    pub fn selected_room(&self) -> Option<&str> {
        match self {
            EditorMode::Rooms { selected, .. } => selected.as_deref(),
            _ => None,
        }
    }

    /// Selektierte Maske.
    pub fn selected_mask(&self) -> Option<&str> {
        match self {
            EditorMode::Masks { selected, .. } => selected.as_deref(),
            _ => None,
        }
    }

    /// Selektiertes Gerät.
    pub fn selected_device(&self) -> Option<&str> {
        match self {
            EditorMode::Devices { selected, .. } => selected.as_deref(),
            _ => None,
        }
    }

    /// Laufende Verkettung.
    pub fn route(&self) -> &[String] {
        match self {
            EditorMode::Devices { route, .. } => route,
            _ => &[],
        }
    }

    /// Ob die Raum- oder Kalibrier-Eingabe einen Textdialog offen hat.
    pub fn awaits_text_input(&self) -> bool {
        matches!(
            self,
            EditorMode::Rooms {
                pending_name: Some(_),
                ..
            } | EditorMode::Calibrate {
                awaiting_distance: true,
                ..
            }
        )
    }

    /// Verwirft Selektionen und laufende Drags (z.B. nach Undo).
    pub fn clear_selection(&mut self) {
        match self {
            EditorMode::Overlay { drag_last } => *drag_last = None,
            EditorMode::Rooms {
                selected,
                corner_drag,
                ..
            } => {
                *selected = None;
                *corner_drag = None;
            }
            EditorMode::Masks {
                selected,
                manipulation,
                rect_draft,
                ..
            } => {
                *selected = None;
                *manipulation = None;
                *rect_draft = None;
            }
            EditorMode::Devices {
                selected,
                dragging,
                route,
                ..
            } => {
                *selected = None;
                *dragging = false;
                route.clear();
            }
            EditorMode::Calibrate { dragging, .. } => *dragging = None,
            EditorMode::Navigate | EditorMode::Measure { .. } => {}
        }
    }
}

/// Viewport-Geste unabhängig vom Modus.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Gesture {
    /// Keine Geste
    #[default]
    None,
    /// Ansicht wird verschoben
    Panning {
        /// Zeigerposition beim Start (Container-lokal)
        start_pointer: Vec2,
        /// Pan beim Start
        start_pan: Vec2,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layer_activation_maps_to_modes() {
        assert_eq!(EditorMode::for_layer(LayerId::Base), EditorMode::Navigate);
        assert_eq!(
            EditorMode::for_layer(LayerId::Rooms).active_layer(),
            LayerId::Rooms
        );
        assert!(matches!(
            EditorMode::for_layer(LayerId::Masks),
            EditorMode::Masks {
                tool: MaskTool::Polygon,
                ..
            }
        ));
    }

    #[test]
    fn test_mask_polygon_tool_starts_drawing() {
        let mode = EditorMode::masks(MaskTool::Polygon);
        assert!(mode.drawing().is_some_and(PolygonDrawing::is_active));
        let mode = EditorMode::masks(MaskTool::Rectangle);
        assert!(!mode.drawing().is_some_and(PolygonDrawing::is_active));
    }

    #[test]
    fn test_clear_selection_drops_route() {
        let mut mode = EditorMode::Devices {
            tool: DeviceTool::Route,
            selected: Some("a".into()),
            dragging: true,
            route: vec!["a".into(), "b".into()],
        };
        mode.clear_selection();
        assert!(mode.route().is_empty());
        assert!(mode.selected_device().is_none());
    }
}
