//! Standard-Montagehöhen und Biegezuschlag für die Kabellängen-Schätzung.

use serde::{Deserialize, Serialize};

/// Prozessweite Höhen-Einstellungen (Fuß).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeightSettings {
    /// Deckenhöhe
    pub ceiling_height: f32,
    /// Schalterhöhe
    pub switch_height: f32,
    /// Höhe von Außenleuchten
    pub exterior_sconce_height: f32,
    /// Zuschlag pro Richtungswechsel des Kabels
    pub bend_slack_per_bend: f32,
}

impl Default for HeightSettings {
    fn default() -> Self {
        Self {
            ceiling_height: 10.0,
            switch_height: 4.0,
            exterior_sconce_height: 6.0,
            bend_slack_per_bend: 0.5,
        }
    }
}

impl HeightSettings {
    /// Ersetzt negative oder ungültige Werte durch 0.
    pub fn sanitized(self) -> Self {
        let clean = |v: f32| if v.is_finite() { v.max(0.0) } else { 0.0 };
        Self {
            ceiling_height: clean(self.ceiling_height),
            switch_height: clean(self.switch_height),
            exterior_sconce_height: clean(self.exterior_sconce_height),
            bend_slack_per_bend: clean(self.bend_slack_per_bend),
        }
    }
}
