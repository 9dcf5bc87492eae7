//! Layer-Stapel: Reihenfolge, Sichtbarkeit und Deckkraft je Layer.

use serde::{Deserialize, Serialize};

/// Ein Layer des Grundriss-Compositors (in Zeichenreihenfolge).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LayerId {
    /// Basis-Grundriss (Rasterbild)
    Base,
    /// Deckende Masken über dem Basisbild
    Masks,
    /// Zweites Planbild (z.B. Elektroplan) mit eigener Transformation
    Overlay,
    /// Raum-Polygone mit Füllung und Beschriftung
    Rooms,
    /// Geräte, Verbindungen und aktive Route
    Devices,
    /// Kalibrier-/Messlinien, Maßstab, Zeichen-Vorschau
    Annotations,
}

impl LayerId {
    /// Alle Layer in Zeichenreihenfolge (unten → oben).
    pub const ALL: [LayerId; 6] = [
        LayerId::Base,
        LayerId::Masks,
        LayerId::Overlay,
        LayerId::Rooms,
        LayerId::Devices,
        LayerId::Annotations,
    ];

    /// Anzeigename im Layer-Panel.
    pub fn label(self) -> &'static str {
        match self {
            LayerId::Base => "Floor Plan",
            LayerId::Masks => "Masks",
            LayerId::Overlay => "Electrical Overlay",
            LayerId::Rooms => "Rooms",
            LayerId::Devices => "Devices",
            LayerId::Annotations => "Annotations",
        }
    }
}

/// Sichtbarkeit und Deckkraft eines Layers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayerConfig {
    /// Layer wird gezeichnet
    pub visible: bool,
    /// Deckkraft in Prozent (0..=100)
    pub opacity: u8,
}

impl LayerConfig {
    /// Erstellt eine Konfiguration; Deckkraft wird auf 100 begrenzt.
    pub fn new(visible: bool, opacity: u8) -> Self {
        Self {
            visible,
            opacity: opacity.min(100),
        }
    }

    /// Deckkraft als Faktor 0.0..=1.0 (0.0 wenn unsichtbar).
    pub fn alpha(&self) -> f32 {
        if self.visible {
            f32::from(self.opacity) / 100.0
        } else {
            0.0
        }
    }
}

/// Konfiguration aller Layer.
#[derive(Debug, Clone, PartialEq)]
pub struct LayerStack {
    configs: [LayerConfig; 6],
}

impl LayerStack {
    /// Standardbelegung: Overlay ausgeblendet mit 70 %, alles andere sichtbar mit 100 %.
    pub fn new() -> Self {
        let mut configs = [LayerConfig::new(true, 100); 6];
        configs[Self::index(LayerId::Overlay)] = LayerConfig::new(false, 70);
        Self { configs }
    }

    fn index(layer: LayerId) -> usize {
        match layer {
            LayerId::Base => 0,
            LayerId::Masks => 1,
            LayerId::Overlay => 2,
            LayerId::Rooms => 3,
            LayerId::Devices => 4,
            LayerId::Annotations => 5,
        }
    }

    /// Konfiguration eines Layers.
    pub fn get(&self, layer: LayerId) -> LayerConfig {
        self.configs[Self::index(layer)]
    }

    /// Setzt die Sichtbarkeit eines Layers.
    pub fn set_visible(&mut self, layer: LayerId, visible: bool) {
        self.configs[Self::index(layer)].visible = visible;
    }

    /// Setzt die Deckkraft eines Layers (auf 0..=100 begrenzt).
    pub fn set_opacity(&mut self, layer: LayerId, opacity: u8) {
        self.configs[Self::index(layer)].opacity = opacity.min(100);
    }

    /// Ob ein Layer gezeichnet wird.
    pub fn is_visible(&self, layer: LayerId) -> bool {
        self.get(layer).visible
    }
}

impl Default for LayerStack {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_defaults() {
        let stack = LayerStack::new();
        assert!(stack.is_visible(LayerId::Base));
        assert!(!stack.is_visible(LayerId::Overlay));
        assert_eq!(stack.get(LayerId::Overlay).opacity, 70);
        assert_eq!(stack.get(LayerId::Rooms).opacity, 100);
    }

    #[test]
    fn test_opacity_is_clamped_and_hidden_alpha_is_zero() {
        let mut stack = LayerStack::new();
        stack.set_opacity(LayerId::Rooms, 250);
        assert_eq!(stack.get(LayerId::Rooms).opacity, 100);
        stack.set_opacity(LayerId::Rooms, 40);
        assert_relative_eq!(stack.get(LayerId::Rooms).alpha(), 0.4);
        stack.set_visible(LayerId::Rooms, false);
        assert_relative_eq!(stack.get(LayerId::Rooms).alpha(), 0.0);
    }
}
