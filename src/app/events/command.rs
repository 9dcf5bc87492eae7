use crate::app::state::{DeviceTool, MaskTool};
use crate::core::{Corner, DeviceTemplate, HeightSettings, LayerId, MountingHeight, OverlayAdjust};
use crate::shared::EditorOptions;
use glam::Vec2;
use std::time::Instant;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
///
/// Positionen sind, sofern nicht anders angegeben, natürliche Bildpixel.
#[derive(Debug, Clone)]
pub enum AppCommand {
    // ── Anwendung ───────────────────────────────────────────────
    /// Anwendung beenden
    RequestExit,
    /// Fällige Datensätze speichern
    PersistenceTick { now: Instant },
    /// Gespeicherte Datensätze laden
    LoadRecords,

    // ── Dateien ─────────────────────────────────────────────────
    /// Dateidialog für den Basis-Grundriss anfordern
    RequestBaseImageDialog,
    /// Dateidialog für das Overlay-Bild anfordern
    RequestOverlayImageDialog,
    /// Basis-Grundriss laden
    LoadBaseImage { path: String },
    /// Overlay-Bild laden
    LoadOverlayImage { path: String },

    // ── Viewport ────────────────────────────────────────────────
    /// Viewport-Größe setzen (Bildschirm-Pixel)
    SetViewportSize { size: [f32; 2] },
    /// Pan-Geste beginnen (Bildschirm-Pixel)
    StartPan { pointer: Vec2 },
    /// Pan-Geste fortsetzen (Bildschirm-Pixel)
    UpdatePan { pointer: Vec2 },
    /// Pan-Geste beenden
    EndPan,
    /// Ansicht verschieben (Bildschirm-Pixel)
    PanView { delta: Vec2 },
    /// Mausrad-Zoom anwenden
    ApplyWheelZoom { delta: f32 },
    /// Stufenweise hineinzoomen
    ZoomIn,
    /// Stufenweise herauszoomen
    ZoomOut,
    /// Ansicht zurücksetzen
    ResetView,
    /// Letzte Zeigerposition (Vorschau)
    SetPointerPosition { natural: Option<Vec2> },

    // ── Layer & Modus ───────────────────────────────────────────
    /// Layer aktivieren
    ActivateLayer { layer: LayerId },
    /// Layer-Sichtbarkeit setzen
    SetLayerVisibility { layer: LayerId, visible: bool },
    /// Layer-Deckkraft setzen
    SetLayerOpacity { layer: LayerId, opacity: u8 },
    /// Kalibrier-Werkzeug aktivieren
    EnterCalibrate,
    /// Mess-Werkzeug aktivieren
    EnterMeasure,

    // ── Polygon-Zeichnen ────────────────────────────────────────
    /// Punkt hinzufügen (wird eingerastet)
    AddDrawingPoint { point: Vec2 },
    /// Polygon schließen
    FinishDrawing,
    /// Letzten Punkt entfernen
    UndoDrawingPoint,

    // ── Räume ───────────────────────────────────────────────────
    /// Raum-Zeichnen starten/stoppen
    ToggleRoomDrawing,
    /// Wartendes Polygon als Raum anlegen
    ConfirmRoomName { name: String },
    /// Wartendes Polygon verwerfen
    CancelRoomName,
    /// Raum selektieren oder Selektion aufheben
    SelectRoom { id: Option<String> },
    /// Eckpunkt des selektierten Raums greifen
    BeginRoomCornerDrag { index: usize },
    /// Gegriffenen Eckpunkt verschieben
    UpdateRoomCornerDrag { point: Vec2 },
    /// Eckpunkt loslassen
    EndRoomCornerDrag,
    /// Raum umbenennen
    RenameRoom { id: String, name: String },
    /// Raum ein-/ausblenden
    SetRoomVisibility { id: String, visible: bool },

    // ── Masken ──────────────────────────────────────────────────
    /// Masken-Werkzeug wählen
    SetMaskTool { tool: MaskTool },
    /// Maske selektieren oder Selektion aufheben
    SelectMask { id: Option<String> },
    /// Selektierte Maske verschieben beginnen
    BeginMaskMove { point: Vec2 },
    /// Selektierte Maske über eine Ecke skalieren beginnen
    BeginMaskResize { corner: Corner, point: Vec2 },
    /// Laufende Manipulation fortsetzen
    UpdateMaskManipulation { point: Vec2 },
    /// Manipulation beenden
    EndMaskManipulation,
    /// Rechteck aufziehen beginnen
    BeginMaskRect { point: Vec2 },
    /// Rechteck aufziehen fortsetzen
    UpdateMaskRect { point: Vec2 },
    /// Rechteck abschließen
    EndMaskRect,
    /// Maske ein-/ausblenden
    SetMaskVisibility { id: String, visible: bool },

    // ── Selektion (modusübergreifend) ───────────────────────────
    /// Selektierte Maske bzw. Raumbeschriftung drehen
    RotateSelection { degrees: f32 },
    /// Selektierte Maske, Raum oder Gerät löschen
    DeleteSelection,
    /// Selektion aufheben
    ClearSelection,

    // ── Geräte ──────────────────────────────────────────────────
    /// Geräte-Werkzeug wählen
    SetDeviceTool { tool: DeviceTool },
    /// Vorlage setzen
    SetDeviceTemplate { template: DeviceTemplate },
    /// Gerät aus der Vorlage platzieren
    PlaceDevice { point: Vec2 },
    /// Gerät selektieren oder Selektion aufheben
    SelectDevice { id: Option<String> },
    /// Selektiertes Gerät ziehen beginnen
    BeginDeviceDrag,
    /// Gezogenes Gerät verschieben
    UpdateDeviceDrag { point: Vec2 },
    /// Gerät loslassen
    EndDeviceDrag,
    /// Gerät in die laufende Verkettung aufnehmen
    RouteClick { id: String },
    /// Laufende Verkettung verwerfen
    CancelRoute,
    /// Montagehöhe eines Geräts setzen
    SetDeviceMountingHeight { id: String, height: MountingHeight },
    /// Standard-Höhen setzen
    SetHeightSettings { heights: HeightSettings },
    /// Gerät selektieren und in die Viewport-Mitte rücken
    LocateDevice { id: String },

    // ── Overlay ─────────────────────────────────────────────────
    /// Overlay schrittweise anpassen
    AdjustOverlay { adjust: OverlayAdjust },
    /// Overlay-Sperre umschalten
    ToggleOverlayLock,
    /// Overlay-Drag beginnen
    BeginOverlayDrag { point: Vec2 },
    /// Overlay-Drag fortsetzen
    UpdateOverlayDrag { point: Vec2 },
    /// Overlay-Drag beenden
    EndOverlayDrag,

    // ── Kalibrierung & Messen ───────────────────────────────────
    /// Kalibrierpunkt setzen
    AddCalibrationPoint { point: Vec2 },
    /// Kalibrierpunkt greifen
    BeginCalibrationPointDrag { index: usize },
    /// Gegriffenen Kalibrierpunkt verschieben
    UpdateCalibrationPointDrag { point: Vec2 },
    /// Kalibrierpunkt loslassen
    EndCalibrationPointDrag,
    /// Letzten Kalibrierpunkt entfernen
    RemoveLastCalibrationPoint,
    /// Distanz-Eingabe anwenden
    SubmitCalibrationDistance { input: String },
    /// Distanz-Eingabe schließen
    CancelCalibrationDistance,
    /// Messpunkt setzen
    AddMeasurePoint { point: Vec2 },
    /// Messung verwerfen
    ClearMeasurement,

    // ── History ─────────────────────────────────────────────────
    /// Undo
    Undo,
    /// Redo
    Redo,

    // ── Optionen ────────────────────────────────────────────────
    /// Options-Dialog öffnen
    OpenOptionsDialog,
    /// Options-Dialog schließen
    CloseOptionsDialog,
    /// Optionen anwenden und speichern
    ApplyOptions { options: Box<EditorOptions> },
    /// Optionen auf Standardwerte zurücksetzen
    ResetOptions,
}
