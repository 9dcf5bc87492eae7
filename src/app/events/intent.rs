use crate::app::state::{DeviceTool, MaskTool};
use crate::core::{DeviceTemplate, HeightSettings, LayerId, MountingHeight, OverlayAdjust};
use crate::shared::EditorOptions;
use glam::Vec2;
use std::time::Instant;

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
///
/// Zeigerpositionen sind container-lokale Bildschirm-Pixel; die Umrechnung in
/// Bildpixel übernimmt das Intent-Mapping.
#[derive(Debug, Clone)]
pub enum AppIntent {
    // ── Anwendung ───────────────────────────────────────────────
    /// Anwendung beenden
    ExitRequested,
    /// Frame-Takt (speichert fällige Datensätze)
    FrameTick { now: Instant },
    /// Gespeicherte Datensätze laden (einmalig beim Start)
    LoadRecordsRequested,

    // ── Dateien ─────────────────────────────────────────────────
    /// Dateidialog für den Basis-Grundriss öffnen
    OpenBaseImageRequested,
    /// Dateidialog für das Overlay-Bild öffnen
    OpenOverlayImageRequested,
    /// Basis-Grundriss wurde im Dialog ausgewählt
    BaseImageSelected { path: String },
    /// Overlay-Bild wurde im Dialog ausgewählt
    OverlayImageSelected { path: String },

    // ── Viewport ────────────────────────────────────────────────
    /// Viewport-Größe hat sich geändert
    ViewportResized { size: [f32; 2] },
    /// Primärtaste gedrückt
    PointerPressed { pos: Vec2 },
    /// Zeiger bewegt (mit oder ohne gedrückte Taste)
    PointerMoved { pos: Vec2 },
    /// Primärtaste losgelassen
    PointerReleased { pos: Vec2 },
    /// Zeiger hat den Viewport verlassen
    PointerLeft,
    /// Ansicht direkt verschieben (Mittel-/Sekundärtaste), Bildschirm-Pixel
    ViewPanned { delta: Vec2 },
    /// Normalisiertes Mausrad-Delta eines Frames (positiv = herauszoomen)
    WheelScrolled { delta: f32 },
    /// Stufenweise hineinzoomen
    ZoomInRequested,
    /// Stufenweise herauszoomen
    ZoomOutRequested,
    /// Ansicht zurücksetzen
    ResetViewRequested,

    // ── Layer & Werkzeuge ───────────────────────────────────────
    /// Layer aktivieren (wechselt den Modus)
    LayerActivated { layer: LayerId },
    /// Sichtbarkeit eines Layers umschalten
    LayerVisibilityToggled { layer: LayerId },
    /// Deckkraft eines Layers setzen (0..=100)
    LayerOpacityChanged { layer: LayerId, opacity: u8 },
    /// Kalibrier-Werkzeug starten
    CalibrateToolRequested,
    /// Mess-Werkzeug starten
    MeasureToolRequested,

    // ── Kalibrierung ────────────────────────────────────────────
    /// Distanz-Eingabe bestätigt
    CalibrationDistanceSubmitted { input: String },
    /// Distanz-Eingabe abgebrochen
    CalibrationDistanceCancelled,

    // ── Räume ───────────────────────────────────────────────────
    /// "Draw New Room" umschalten
    DrawRoomToggled,
    /// Namensabfrage bestätigt
    RoomNameConfirmed { name: String },
    /// Namensabfrage abgebrochen
    RoomNameCancelled,
    /// Raum umbenennen
    RoomRenamed { id: String, name: String },
    /// Sichtbarkeit eines Raums umschalten
    RoomVisibilityToggled { id: String },

    // ── Masken ──────────────────────────────────────────────────
    /// Masken-Werkzeug wählen
    MaskToolSelected { tool: MaskTool },
    /// Sichtbarkeit einer Maske umschalten
    MaskVisibilityToggled { id: String },

    // ── Geräte ──────────────────────────────────────────────────
    /// Geräte-Werkzeug wählen
    DeviceToolSelected { tool: DeviceTool },
    /// Vorlage für neue Geräte geändert
    DeviceTemplateChanged { template: DeviceTemplate },
    /// Montagehöhe eines platzierten Geräts geändert
    DeviceMountingHeightChanged { id: String, height: MountingHeight },
    /// Standard-Höhen geändert
    HeightSettingsChanged { heights: HeightSettings },
    /// Gerät im Viewport anzeigen
    LocateDeviceRequested { id: String },

    // ── Overlay ─────────────────────────────────────────────────
    /// Overlay per Tastatur anpassen
    OverlayNudged { adjust: OverlayAdjust },
    /// Overlay-Sperre umschalten
    OverlayLockToggled,

    // ── Tastatur ────────────────────────────────────────────────
    /// Laufendes Polygon schließen (Enter)
    FinishDrawingRequested,
    /// Letzten Polygonpunkt entfernen (Escape/Backspace beim Zeichnen)
    UndoDrawingPointRequested,
    /// Selektion (Maske oder Raumbeschriftung) drehen
    RotateSelectionRequested { degrees: f32 },
    /// Selektion löschen
    DeleteSelectionRequested,
    /// Escape: schrittweise abbrechen
    CancelRequested,
    /// Undo: Letzte Aktion rückgängig machen
    UndoRequested,
    /// Redo: Rückgängig gemachte Aktion wiederherstellen
    RedoRequested,

    // ── Optionen ────────────────────────────────────────────────
    /// Options-Dialog öffnen
    OpenOptionsDialogRequested,
    /// Options-Dialog schließen
    CloseOptionsDialogRequested,
    /// Optionen wurden geändert (sofort anwenden)
    OptionsChanged { options: Box<EditorOptions> },
    /// Optionen auf Standardwerte zurücksetzen
    ResetOptionsRequested,
}
