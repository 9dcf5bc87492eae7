use crate::app::history::{EditHistory, Snapshot};
use crate::app::persistence::{Persistence, RecordKind};
use crate::app::CommandLog;
use crate::core::{Device, DeviceTemplate, FloorPlan, Room};
use crate::shared::{options::HISTORY_DEPTH, EditorOptions};
use std::sync::Arc;

use super::{EditorMode, UiState, ViewState};

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Dauerhafte Datensätze (Arc für O(1)-Snapshots)
    pub plan: Arc<FloorPlan>,
    /// Aktiver Editor-Modus mit seinen Interaktionsdaten
    pub mode: EditorMode,
    /// View-State
    pub view: ViewState,
    /// UI-State
    pub ui: UiState,
    /// Vorlage für neu platzierte Geräte
    pub device_template: DeviceTemplate,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Undo/Redo-History (Snapshot-basiert)
    pub history: EditHistory,
    /// Laufzeit-Optionen
    pub options: EditorOptions,
    /// Speicherung der Datensätze
    pub persistence: Persistence,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State mit In-Memory-Persistenz.
    pub fn new() -> Self {
        Self::with_persistence(Persistence::in_memory())
    }

    /// Erstellt einen leeren App-State über der angegebenen Persistenz.
    pub fn with_persistence(persistence: Persistence) -> Self {
        Self {
            plan: Arc::new(FloorPlan::new()),
            mode: EditorMode::Navigate,
            view: ViewState::new(),
            ui: UiState::new(),
            device_template: DeviceTemplate::default(),
            command_log: CommandLog::new(),
            history: EditHistory::new_with_capacity(HISTORY_DEPTH),
            options: EditorOptions::default(),
            persistence,
            should_exit: false,
        }
    }

    /// Alle platzierten Geräte.
    pub fn devices(&self) -> &[Device] {
        &self.plan.devices
    }

    /// Alle Räume in Erstellungsreihenfolge.
    pub fn rooms(&self) -> impl Iterator<Item = &Room> {
        self.plan.rooms.values()
    }

    /// Mutable Zugriff auf den Grundriss (CoW: klont nur wenn ein Snapshot ihn teilt).
    pub fn plan_mut(&mut self) -> &mut FloorPlan {
        Arc::make_mut(&mut self.plan)
    }

    /// Markiert einen Datensatz zum Speichern.
    pub fn mark_dirty(&mut self, kind: RecordKind) {
        self.persistence.mark_dirty(kind);
    }

    /// Undo/Redo helpers
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Gibt zurück, ob ein Redo-Schritt verfügbar ist.
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Erstellt einen Undo-Snapshot des aktuellen Zustands.
    /// Reduziert Boilerplate in mutierenden Use-Cases.
    pub fn record_undo_snapshot(&mut self) {
        let snap = Snapshot::from_state(self);
        self.history.record_snapshot(snap);
    }

    /// Zeigt eine Info im HUD.
    pub fn show_info(&mut self, text: impl Into<String>) {
        let duration = self.options.hud_message_duration();
        self.ui.show_info(text, duration);
    }

    /// Zeigt eine Warnung im HUD (und loggt sie).
    pub fn show_warning(&mut self, text: impl Into<String>) {
        let duration = self.options.hud_message_duration();
        self.ui.show_warning(text, duration);
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
