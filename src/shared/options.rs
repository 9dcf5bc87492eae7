//! Zentrale Konfiguration für den FloorPlan-Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

// ── Ansicht ─────────────────────────────────────────────────────────

/// Minimaler Zoom-Faktor (1.0 = Bild eingepasst).
pub const VIEW_SCALE_MIN: f32 = 1.0;
/// Maximaler Zoom-Faktor.
pub const VIEW_SCALE_MAX: f32 = 10.0;
/// Multiplikator pro normalisierter Mausrad-Einheit.
pub const WHEEL_ZOOM_FACTOR: f32 = 1.07;
/// Zoom-Schritt bei Toolbar-Buttons / Shortcuts.
pub const BUTTON_ZOOM_STEP: f32 = 1.2;
/// Pixel-Delta pro normalisierter Mausrad-Einheit.
pub const WHEEL_PIXELS_PER_UNIT: f32 = 53.0;
/// Zeilen-Delta pro normalisierter Mausrad-Einheit.
pub const WHEEL_LINES_PER_UNIT: f32 = 1.0;
/// Normalisierte Einheiten pro Seiten-Scroll.
pub const WHEEL_UNITS_PER_PAGE: f32 = 10.0;

// ── Zeichnen & Einrasten ────────────────────────────────────────────

/// Einrast-Radius auf bestehende Eckpunkte (Bildpixel).
pub const SNAP_VERTEX_THRESHOLD: f32 = 25.0;
/// Einrast-Abstand auf bestehende Kanten (Bildpixel).
pub const SNAP_EDGE_THRESHOLD: f32 = 20.0;
/// Abstand zum ersten Punkt, der ein Polygon schließt (Bildpixel).
pub const POLYGON_CLOSE_THRESHOLD: f32 = 20.0;
/// Mindestgröße einer Maske (Bildpixel).
pub const MASK_MIN_SIZE: f32 = 10.0;
/// Mindestausdehnung eines aufgezogenen Rechtecks (Bildpixel).
pub const DRAG_DRAW_MIN: f32 = 10.0;

// ── Auswahl ─────────────────────────────────────────────────────────

/// Pick-Radius für Geräte (Bildpixel).
pub const DEVICE_PICK_RADIUS: f32 = 15.0;
/// Radius, in dem ein Kalibrierpunkt erneut gegriffen wird (Bildpixel).
pub const CALIBRATION_REEDIT_RADIUS: f32 = 50.0;
/// Pick-Radius für Raum-Eckpunkte und Masken-Ecken (Bildschirm-Pixel).
pub const HANDLE_PICK_RADIUS_PX: f32 = 10.0;

// ── Laufzeit ────────────────────────────────────────────────────────

/// Ruhezeit vor einem Speichervorgang in Millisekunden.
pub const SAVE_DEBOUNCE_MS: u64 = 500;
/// Anzeigedauer von HUD-Meldungen in Millisekunden.
pub const HUD_MESSAGE_MS: u64 = 3000;
/// Tiefe der Undo-History.
pub const HISTORY_DEPTH: usize = 50;

// ── Farben ──────────────────────────────────────────────────────────

/// Farbe für Raum-Umrisse (RGBA).
pub const ROOM_OUTLINE_COLOR: [f32; 4] = [0.2, 0.2, 0.2, 0.9];
/// Farbe für den selektierten Raum bzw. die selektierte Maske (RGBA: Blau).
pub const SELECTION_COLOR: [f32; 4] = [0.15, 0.45, 1.0, 1.0];
/// Farbe für Gerätemarker (RGBA: Orange).
pub const DEVICE_COLOR: [f32; 4] = [1.0, 0.55, 0.1, 1.0];
/// Farbe für Geräteverbindungen (RGBA: Grün).
pub const CONNECTION_COLOR: [f32; 4] = [0.1, 0.7, 0.3, 1.0];
/// Farbe für Zeichen-Vorschau, Kalibrier- und Messlinien (RGBA: Magenta).
pub const ANNOTATION_COLOR: [f32; 4] = [0.9, 0.1, 0.8, 1.0];

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `floorplan_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorOptions {
    // ── Ansicht ─────────────────────────────────────────────────
    /// Minimaler Zoom-Faktor
    pub view_scale_min: f32,
    /// Maximaler Zoom-Faktor
    pub view_scale_max: f32,
    /// Multiplikator pro Mausrad-Einheit
    pub wheel_zoom_factor: f32,
    /// Zoom-Schritt bei Buttons / Shortcuts
    pub button_zoom_step: f32,
    /// Pixel pro Mausrad-Einheit
    pub wheel_pixels_per_unit: f32,
    /// Zeilen pro Mausrad-Einheit
    pub wheel_lines_per_unit: f32,
    /// Mausrad-Einheiten pro Seite
    pub wheel_units_per_page: f32,

    // ── Zeichnen ────────────────────────────────────────────────
    /// Einrast-Radius Eckpunkte (Bildpixel)
    pub snap_vertex_threshold: f32,
    /// Einrast-Abstand Kanten (Bildpixel)
    pub snap_edge_threshold: f32,
    /// Schließ-Abstand zum ersten Polygonpunkt (Bildpixel)
    pub polygon_close_threshold: f32,
    /// Mindestgröße von Masken (Bildpixel)
    pub mask_min_size: f32,
    /// Mindestausdehnung aufgezogener Rechtecke (Bildpixel)
    pub drag_draw_min: f32,

    // ── Auswahl ─────────────────────────────────────────────────
    /// Pick-Radius für Geräte (Bildpixel)
    pub device_pick_radius: f32,
    /// Re-Edit-Radius für Kalibrierpunkte (Bildpixel)
    pub calibration_reedit_radius: f32,
    /// Pick-Radius für Handles (Bildschirm-Pixel)
    pub handle_pick_radius_px: f32,

    // ── Laufzeit ────────────────────────────────────────────────
    /// Debounce vor dem Speichern (ms)
    pub save_debounce_ms: u64,
    /// Anzeigedauer von HUD-Meldungen (ms)
    pub hud_message_ms: u64,
    /// Verzeichnis für die gespeicherten Datensätze; `None` = neben der Binary
    pub data_dir: Option<PathBuf>,

    // ── Farben ──────────────────────────────────────────────────
    /// Raum-Umrisse
    pub room_outline_color: [f32; 4],
    /// Auswahl-Hervorhebung
    pub selection_color: [f32; 4],
    /// Gerätemarker
    pub device_color: [f32; 4],
    /// Geräteverbindungen
    pub connection_color: [f32; 4],
    /// Vorschau und Annotationen
    pub annotation_color: [f32; 4],
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            view_scale_min: VIEW_SCALE_MIN,
            view_scale_max: VIEW_SCALE_MAX,
            wheel_zoom_factor: WHEEL_ZOOM_FACTOR,
            button_zoom_step: BUTTON_ZOOM_STEP,
            wheel_pixels_per_unit: WHEEL_PIXELS_PER_UNIT,
            wheel_lines_per_unit: WHEEL_LINES_PER_UNIT,
            wheel_units_per_page: WHEEL_UNITS_PER_PAGE,

            snap_vertex_threshold: SNAP_VERTEX_THRESHOLD,
            snap_edge_threshold: SNAP_EDGE_THRESHOLD,
            polygon_close_threshold: POLYGON_CLOSE_THRESHOLD,
            mask_min_size: MASK_MIN_SIZE,
            drag_draw_min: DRAG_DRAW_MIN,

            device_pick_radius: DEVICE_PICK_RADIUS,
            calibration_reedit_radius: CALIBRATION_REEDIT_RADIUS,
            handle_pick_radius_px: HANDLE_PICK_RADIUS_PX,

            save_debounce_ms: SAVE_DEBOUNCE_MS,
            hud_message_ms: HUD_MESSAGE_MS,
            data_dir: None,

            room_outline_color: ROOM_OUTLINE_COLOR,
            selection_color: SELECTION_COLOR,
            device_color: DEVICE_COLOR,
            connection_color: CONNECTION_COLOR,
            annotation_color: ANNOTATION_COLOR,
        }
    }
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> PathBuf {
        Self::binary_dir().join("floorplan_editor.toml")
    }

    /// Verzeichnis für die JSON-Datensätze.
    pub fn resolved_data_dir(&self) -> PathBuf {
        self.data_dir
            .clone()
            .unwrap_or_else(|| Self::binary_dir().join("floorplan_data"))
    }

    fn binary_dir() -> PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| PathBuf::from("floorplan_editor"))
            .parent()
            .unwrap_or_else(|| Path::new("."))
            .to_path_buf()
    }

    /// Debounce-Dauer für Speichervorgänge.
    pub fn save_debounce(&self) -> Duration {
        Duration::from_millis(self.save_debounce_ms)
    }

    /// Anzeigedauer von HUD-Meldungen.
    pub fn hud_message_duration(&self) -> Duration {
        Duration::from_millis(self.hud_message_ms)
    }

    /// Einrast-Konfiguration für die Polygon-Engine.
    pub fn snap_config(&self) -> crate::core::SnapConfig {
        crate::core::SnapConfig {
            vertex_threshold: self.snap_vertex_threshold,
            start_threshold: self.polygon_close_threshold,
            edge_threshold: self.snap_edge_threshold,
        }
    }
}
