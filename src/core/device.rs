//! Geräte, Topologien (Bus-Familien), Netzwerke und semantische Geräte-IDs.

use super::heights::HeightSettings;
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Bus-/Protokollfamilie eines Geräts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Topology {
    /// Lichtsteuerbus DALI
    #[default]
    #[serde(rename = "DALI")]
    Dali,
    /// KNX-Gebäudebus
    #[serde(rename = "KNX")]
    Knx,
    /// Datennetz (Ethernet, WLAN, Kameras)
    #[serde(rename = "DATA")]
    Data,
    /// LED-Streifen und Treiber
    #[serde(rename = "LED")]
    Led,
    /// Zutrittskontrolle
    #[serde(rename = "Door Access")]
    DoorAccess,
    /// Rollläden
    #[serde(rename = "Window Shutters")]
    WindowShutters,
    /// Dachfenster-Antriebe
    #[serde(rename = "Skylights")]
    Skylights,
}

/// Eintrag im Gerätekatalog einer Topologie.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceTypeInfo {
    /// Typ-ID (`dt-…`)
    pub id: &'static str,
    /// Anzeigename
    pub label: &'static str,
}

const fn device_type(id: &'static str, label: &'static str) -> DeviceTypeInfo {
    DeviceTypeInfo { id, label }
}

const DALI_TYPES: &[DeviceTypeInfo] = &[
    device_type("dt-downlight", "Downlight"),
    device_type("dt-junction-box", "Junction Box"),
];
const KNX_TYPES: &[DeviceTypeInfo] = &[
    device_type("dt-switch", "Switch"),
    device_type("dt-sensor", "Sensor"),
    device_type("dt-actuator", "Actuator"),
    device_type("dt-junction-box", "Junction Box"),
];
const DATA_TYPES: &[DeviceTypeInfo] = &[
    device_type("dt-ethernet-jack", "Ethernet Jack"),
    device_type("dt-ap", "Access Point"),
    device_type("dt-camera", "Camera"),
];
const LED_TYPES: &[DeviceTypeInfo] = &[
    device_type("dt-led-strip", "LED Strip"),
    device_type("dt-led-driver", "LED Driver"),
];
const DOOR_TYPES: &[DeviceTypeInfo] = &[
    device_type("dt-electric-strike", "Electric Strike"),
    device_type("dt-intercom", "Intercom"),
    device_type("dt-door-sensor", "Door Sensor"),
];
const SHUTTER_TYPES: &[DeviceTypeInfo] = &[device_type("dt-shutter-motor", "Shutter Motor")];
const SKYLIGHT_TYPES: &[DeviceTypeInfo] = &[device_type("dt-skylight-actuator", "Skylight Actuator")];

impl Topology {
    /// Alle Topologien in Anzeige-Reihenfolge.
    pub const ALL: [Topology; 7] = [
        Topology::Dali,
        Topology::Knx,
        Topology::Data,
        Topology::Led,
        Topology::DoorAccess,
        Topology::WindowShutters,
        Topology::Skylights,
    ];

    /// Anzeigename.
    pub fn label(self) -> &'static str {
        match self {
            Topology::Dali => "DALI",
            Topology::Knx => "KNX",
            Topology::Data => "DATA",
            Topology::Led => "LED",
            Topology::DoorAccess => "Door Access",
            Topology::WindowShutters => "Window Shutters",
            Topology::Skylights => "Skylights",
        }
    }

    /// Platzierbare Gerätetypen dieser Topologie.
    pub fn device_types(self) -> &'static [DeviceTypeInfo] {
        match self {
            Topology::Dali => DALI_TYPES,
            Topology::Knx => KNX_TYPES,
            Topology::Data => DATA_TYPES,
            Topology::Led => LED_TYPES,
            Topology::DoorAccess => DOOR_TYPES,
            Topology::WindowShutters => SHUTTER_TYPES,
            Topology::Skylights => SKYLIGHT_TYPES,
        }
    }

    /// Logische Netzwerke (Segmente) dieser Topologie.
    pub fn networks(self) -> &'static [&'static str] {
        match self {
            Topology::Dali => &["lcp-1:1", "lcp-1:2", "lcp-2:1", "lcp-2:2"],
            Topology::Knx => &["knx-lcp-1", "knx-lcp-2"],
            Topology::Data => &["data-tech", "data-office"],
            _ => &["default"],
        }
    }

    /// Standard-Gerätetyp (erster Katalogeintrag).
    pub fn default_device_type(self) -> &'static str {
        self.device_types().first().map_or("dt-junction-box", |t| t.id)
    }

    /// Standard-Netzwerk (erster Eintrag).
    pub fn default_network(self) -> &'static str {
        self.networks().first().copied().unwrap_or("default")
    }
}

/// Montagehöhe eines Geräts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case", tag = "kind", content = "feet")]
pub enum MountingHeight {
    /// Deckenhöhe aus den Höhen-Einstellungen
    #[default]
    Ceiling,
    /// Schalterhöhe aus den Höhen-Einstellungen
    Switch,
    /// Außenleuchten-Höhe aus den Höhen-Einstellungen
    ExteriorSconce,
    /// Individuelle Höhe in Fuß
    Custom(f32),
}

impl MountingHeight {
    /// Effektive Höhe in Fuß.
    pub fn resolve(self, settings: &HeightSettings) -> f32 {
        match self {
            MountingHeight::Ceiling => settings.ceiling_height,
            MountingHeight::Switch => settings.switch_height,
            MountingHeight::ExteriorSconce => settings.exterior_sconce_height,
            MountingHeight::Custom(feet) => feet,
        }
    }

    /// Anzeigename.
    pub fn label(self) -> &'static str {
        match self {
            MountingHeight::Ceiling => "Ceiling",
            MountingHeight::Switch => "Switch",
            MountingHeight::ExteriorSconce => "Exterior Sconce",
            MountingHeight::Custom(_) => "Custom",
        }
    }
}

/// Ein platziertes Gerät.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Device {
    /// Semantische ID, bei Erstellung eingefroren
    pub id: String,
    /// Bus-Familie
    pub topology: Topology,
    /// Gerätetyp (`dt-…`)
    pub device_type: String,
    /// Position in Bildkoordinaten
    pub position: Vec2,
    /// Montagehöhe
    pub mounting_height: MountingHeight,
    /// Logisches Netzwerk
    pub network: String,
    /// Zuletzt erkannter Raum (abgeleitet)
    pub room_id: Option<String>,
    /// Name des zuletzt erkannten Raums (abgeleitet)
    pub room_name: Option<String>,
    /// Verbundene Geräte (nur gleiches Netzwerk)
    pub connections: Vec<String>,
}

/// Vorlage für neue Geräte (Auswahl im Properties-Panel).
#[derive(Debug, Clone, PartialEq)]
pub struct DeviceTemplate {
    /// Bus-Familie
    pub topology: Topology,
    /// Gerätetyp (`dt-…`)
    pub device_type: String,
    /// Montagehöhe
    pub mounting_height: MountingHeight,
    /// Logisches Netzwerk
    pub network: String,
}

impl Default for DeviceTemplate {
    fn default() -> Self {
        Self::for_topology(Topology::Dali)
    }
}

impl DeviceTemplate {
    /// Vorlage mit den Standardwerten einer Topologie.
    pub fn for_topology(topology: Topology) -> Self {
        Self {
            topology,
            device_type: topology.default_device_type().to_string(),
            mounting_height: MountingHeight::Ceiling,
            network: topology.default_network().to_string(),
        }
    }
}

/// Wandelt einen Raumnamen in einen ID-Bestandteil um (klein, Leerraum → `-`).
pub fn slugify(name: &str) -> String {
    name.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

/// Bildet die semantische Geräte-ID `{typ}-{raum}-{netzwerk}:{laufnummer}`.
///
/// Das Präfix `dt-` des Gerätetyps entfällt; die Laufnummer ist
/// 1 + Anzahl bestehender Geräte mit gleichem Typ, Raum und Netzwerk.
pub fn semantic_device_id(
    device_type: &str,
    room_name: &str,
    network: &str,
    existing: &[Device],
) -> String {
    let count = existing
        .iter()
        .filter(|d| {
            d.device_type == device_type
                && d.room_name.as_deref() == Some(room_name)
                && d.network == network
        })
        .count();
    let short_type = device_type.strip_prefix("dt-").unwrap_or(device_type);
    format!(
        "{}-{}-{}:{}",
        short_type,
        slugify(room_name),
        network,
        count + 1
    )
}
