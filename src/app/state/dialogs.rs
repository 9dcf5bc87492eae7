use std::time::{Duration, Instant};

/// Transiente Meldung im HUD (Ablehnungen, Bestätigungen).
#[derive(Debug, Clone, PartialEq)]
pub struct HudMessage {
    /// Anzeigetext
    pub text: String,
    /// Warnung (rot) statt Info
    pub is_warning: bool,
    /// Zeitpunkt, ab dem die Meldung nicht mehr angezeigt wird
    pub expires_at: Instant,
}

impl HudMessage {
    /// Ob die Meldung zum Zeitpunkt `now` noch sichtbar ist.
    pub fn is_visible_at(&self, now: Instant) -> bool {
        now < self.expires_at
    }
}

/// Zustand der Distanz-Eingabe beim Kalibrieren
#[derive(Debug, Default)]
pub struct CalibrationDialogState {
    /// Eingabetext (z.B. `10' 6"`)
    pub input: String,
    /// Fehlermeldung der letzten Eingabe
    pub error: Option<String>,
}

/// Zustand der Namensabfrage für neue Räume
#[derive(Debug, Default)]
pub struct RoomNameDialogState {
    /// Eingabetext
    pub name: String,
}

/// UI-bezogener Anwendungszustand
#[derive(Debug, Default)]
pub struct UiState {
    /// Ob der Dateidialog für den Basis-Grundriss geöffnet werden soll
    pub show_base_image_dialog: bool,
    /// Ob der Dateidialog für das Overlay-Bild geöffnet werden soll
    pub show_overlay_image_dialog: bool,
    /// Ob der Options-Dialog angezeigt wird
    pub show_options_dialog: bool,
    /// Distanz-Eingabe (Kalibrierung)
    pub calibration_dialog: CalibrationDialogState,
    /// Namensabfrage (Raum)
    pub room_name_dialog: RoomNameDialogState,
    /// Aktuelle HUD-Meldung
    pub message: Option<HudMessage>,
}

impl UiState {
    /// Erstellt den Standard-UI-Zustand (alle Dialoge geschlossen).
    pub fn new() -> Self {
        Self::default()
    }

    /// Zeigt eine Info-Meldung für `duration`.
    pub fn show_info(&mut self, text: impl Into<String>, duration: Duration) {
        self.message = Some(HudMessage {
            text: text.into(),
            is_warning: false,
            expires_at: Instant::now() + duration,
        });
    }

    /// Zeigt eine Warnung für `duration` und loggt sie.
    pub fn show_warning(&mut self, text: impl Into<String>, duration: Duration) {
        let text = text.into();
        log::warn!("{}", text);
        self.message = Some(HudMessage {
            text,
            is_warning: true,
            expires_at: Instant::now() + duration,
        });
    }

    /// Aktuell sichtbare Meldung.
    pub fn visible_message(&self, now: Instant) -> Option<&HudMessage> {
        self.message.as_ref().filter(|m| m.is_visible_at(now))
    }
}
