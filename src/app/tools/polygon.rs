//! Gemeinsame Polygon-Zeichen-Engine für Räume und Masken.
//!
//! Zustände: inaktiv (`path == None`) → zeichnend (nach `start()`) → inaktiv
//! (nach Abschluss oder Abbruch). Statt Callbacks liefern die Operationen ein
//! [`DrawingOutcome`], das der aufrufende Use-Case auswertet.

use crate::core::geometry::is_valid_polygon;
pub use crate::core::geometry::POLYGON_MIN_POINTS;
use glam::Vec2;

/// Ergebnis einer Zeichenoperation.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawingOutcome {
    /// Nichts abgeschlossen, Zeichnung läuft weiter (oder war inaktiv)
    Pending,
    /// Polygon geschlossen, Engine ist wieder inaktiv
    Completed(Vec<Vec2>),
    /// Zeichnung abgebrochen, Engine ist wieder inaktiv
    Cancelled,
}

/// Punkt-Akkumulator mit Schließ-Erkennung.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PolygonDrawing {
    path: Option<Vec<Vec2>>,
}

impl PolygonDrawing {
    /// Erstellt eine inaktive Engine.
    pub fn new() -> Self {
        Self { path: None }
    }

    /// Erstellt eine bereits zeichnende Engine.
    pub fn started() -> Self {
        Self {
            path: Some(Vec::new()),
        }
    }

    /// Beginnt eine neue Zeichnung (verwirft eine laufende).
    pub fn start(&mut self) {
        self.path = Some(Vec::new());
    }

    /// Ob gerade gezeichnet wird.
    pub fn is_active(&self) -> bool {
        self.path.is_some()
    }

    /// Ob bereits Punkte gesetzt wurden.
    pub fn has_points(&self) -> bool {
        self.path.as_ref().is_some_and(|p| !p.is_empty())
    }

    /// Bisher gesetzte Punkte (leer wenn inaktiv).
    pub fn points(&self) -> &[Vec2] {
        self.path.as_deref().unwrap_or(&[])
    }

    /// Ob das Polygon geschlossen werden kann.
    pub fn can_close(&self) -> bool {
        self.points().len() >= POLYGON_MIN_POINTS
    }

    /// Ob `point` den Schließ-Abstand zum ersten Punkt unterschreitet.
    pub fn is_near_start(&self, point: Vec2, close_threshold: f32) -> bool {
        self.can_close()
            && self
                .points()
                .first()
                .is_some_and(|first| first.distance(point) < close_threshold)
    }

    /// Fügt einen (bereits eingerasteten) Punkt hinzu.
    ///
    /// Liegt der Punkt bei ≥ 3 Punkten näher als `close_threshold` am ersten
    /// Punkt, wird das Polygon stattdessen geschlossen. Ein Punkt auf einem
    /// bereits gesetzten Punkt wird ignoriert.
    pub fn add_point(&mut self, point: Vec2, close_threshold: f32) -> DrawingOutcome {
        if self.is_near_start(point, close_threshold) {
            return self.finish();
        }
        let Some(path) = self.path.as_mut() else {
            return DrawingOutcome::Pending;
        };
        if path.iter().any(|p| p.distance(point) <= f32::EPSILON) {
            log::debug!("Doppelter Polygonpunkt {:?} ignoriert", point);
            return DrawingOutcome::Pending;
        }
        path.push(point);
        DrawingOutcome::Pending
    }

    /// Schließt das Polygon explizit (Enter).
    ///
    /// Ohne Wirkung unter 3 Punkten oder wenn das Polygon keine Fläche hat.
    pub fn finish(&mut self) -> DrawingOutcome {
        if !self.can_close() || !is_valid_polygon(self.points()) {
            return DrawingOutcome::Pending;
        }
        match self.path.take() {
            Some(points) => DrawingOutcome::Completed(points),
            None => DrawingOutcome::Pending,
        }
    }

    /// Entfernt den letzten Punkt; entfernt das den einzigen Punkt, wird abgebrochen.
    pub fn undo_point(&mut self) -> DrawingOutcome {
        let Some(path) = self.path.as_mut() else {
            return DrawingOutcome::Pending;
        };
        path.pop();
        if path.is_empty() {
            self.path = None;
            return DrawingOutcome::Cancelled;
        }
        DrawingOutcome::Pending
    }

    /// Bricht die Zeichnung ab.
    pub fn cancel(&mut self) -> DrawingOutcome {
        match self.path.take() {
            Some(_) => DrawingOutcome::Cancelled,
            None => DrawingOutcome::Pending,
        }
    }
}
