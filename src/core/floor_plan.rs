//! Die zentrale Grundriss-Datenstruktur: Räume, Masken, Geräte, Maßstab, Overlay.

use super::{
    semantic_device_id, Device, DeviceTemplate, HeightSettings, OverlayMask, OverlayTransform,
    Room, ScaleCalibration,
};
use glam::Vec2;
use indexmap::IndexMap;

/// Platzierung außerhalb aller (sichtbaren) Räume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("Device must be placed inside a room")]
pub struct PlacementError;

/// Fehler beim Verketten zweier Geräte.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RoutingError {
    /// Geräte liegen in unterschiedlichen Netzwerken
    #[error("Can only connect devices on same network ({from} ≠ {to})")]
    NetworkMismatch {
        /// Netzwerk des vorherigen Geräts
        from: String,
        /// Netzwerk des angeklickten Geräts
        to: String,
    },
    /// Geräte-ID existiert nicht
    #[error("Unknown device {0}")]
    UnknownDevice(String),
    /// Gerät mit sich selbst verbinden
    #[error("Cannot connect a device to itself")]
    SelfLoop,
}

/// Alle dauerhaften Datensätze eines Grundrisses.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FloorPlan {
    /// Räume, in Erstellungsreihenfolge
    pub rooms: IndexMap<String, Room>,
    /// Masken, in Erstellungsreihenfolge (später = weiter oben)
    pub masks: IndexMap<String, OverlayMask>,
    /// Geräte (IDs nicht zwingend global eindeutig)
    pub devices: Vec<Device>,
    /// Maßstab
    pub calibration: ScaleCalibration,
    /// Overlay-Transformation
    pub overlay: OverlayTransform,
    /// Standard-Höhen
    pub heights: HeightSettings,
}

fn next_numbered_id<'a>(prefix: &str, existing: impl Iterator<Item = &'a String>) -> String {
    let max = existing
        .filter_map(|id| id.strip_prefix(prefix)?.strip_prefix('-')?.parse::<u64>().ok())
        .max()
        .unwrap_or(0);
    format!("{}-{}", prefix, max + 1)
}

impl FloorPlan {
    /// Erstellt einen leeren Grundriss.
    pub fn new() -> Self {
        Self::default()
    }

    // ── Räume ───────────────────────────────────────────────────────

    /// Nächste freie Raum-ID.
    pub fn next_room_id(&self) -> String {
        next_numbered_id("room", self.rooms.keys())
    }

    /// Fügt einen Raum hinzu (ersetzt gleiche ID).
    pub fn add_room(&mut self, room: Room) {
        self.rooms.insert(room.id.clone(), room);
    }

    /// Entfernt einen Raum; Geräte behalten ihre (dann veraltete) Raumangabe.
    pub fn remove_room(&mut self, id: &str) -> Option<Room> {
        self.rooms.shift_remove(id)
    }

    /// Erster sichtbarer Raum, der den Punkt enthält.
    pub fn room_at(&self, point: Vec2) -> Option<&Room> {
        self.rooms.values().find(|r| r.visible && r.contains(point))
    }

    // ── Masken ──────────────────────────────────────────────────────

    /// Nächste freie Masken-ID.
    pub fn next_mask_id(&self) -> String {
        next_numbered_id("mask", self.masks.keys())
    }

    /// Fügt eine Maske hinzu.
    pub fn add_mask(&mut self, mask: OverlayMask) {
        self.masks.insert(mask.id.clone(), mask);
    }

    /// Entfernt eine Maske.
    pub fn remove_mask(&mut self, id: &str) -> Option<OverlayMask> {
        self.masks.shift_remove(id)
    }

    /// Oberste sichtbare Maske unter dem Punkt.
    pub fn mask_at(&self, point: Vec2) -> Option<&OverlayMask> {
        self.masks
            .values()
            .rev()
            .find(|m| m.visible && m.contains(point))
    }

    /// Polygone bestehender Geometrie zum Einrasten (Raumumrisse, Maskenecken).
    pub fn snap_polygons(&self) -> Vec<Vec<Vec2>> {
        self.rooms
            .values()
            .map(|r| r.path.clone())
            .chain(self.masks.values().map(|m| m.rect.corners().to_vec()))
            .collect()
    }

    // ── Geräte ──────────────────────────────────────────────────────

    /// Gerät per ID.
    pub fn device(&self, id: &str) -> Option<&Device> {
        self.devices.iter().find(|d| d.id == id)
    }

    /// Gerät per ID (mutable).
    pub fn device_mut(&mut self, id: &str) -> Option<&mut Device> {
        self.devices.iter_mut().find(|d| d.id == id)
    }

    /// Nächstes Gerät innerhalb von `radius`.
    pub fn device_near(&self, point: Vec2, radius: f32) -> Option<&Device> {
        self.devices
            .iter()
            .map(|d| (d, d.position.distance(point)))
            .filter(|(_, dist)| *dist <= radius)
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(d, _)| d)
    }

    /// Platziert ein Gerät aus einer Vorlage; nur innerhalb eines sichtbaren Raums.
    pub fn place_device(
        &mut self,
        template: &DeviceTemplate,
        position: Vec2,
    ) -> Result<&Device, PlacementError> {
        let room = self.room_at(position).ok_or(PlacementError)?;
        let (room_id, room_name) = (room.id.clone(), room.name.clone());
        let id = semantic_device_id(
            &template.device_type,
            &room_name,
            &template.network,
            &self.devices,
        );
        self.devices.push(Device {
            id,
            topology: template.topology,
            device_type: template.device_type.clone(),
            position,
            mounting_height: template.mounting_height,
            network: template.network.clone(),
            room_id: Some(room_id),
            room_name: Some(room_name),
            connections: Vec::new(),
        });
        let last = self.devices.len() - 1;
        Ok(&self.devices[last])
    }

    /// Verschiebt ein Gerät und aktualisiert die Raumzuordnung.
    ///
    /// Außerhalb aller Räume bleibt die letzte Zuordnung erhalten.
    pub fn move_device(&mut self, id: &str, position: Vec2) -> bool {
        let room = self
            .room_at(position)
            .map(|r| (r.id.clone(), r.name.clone()));
        let Some(device) = self.device_mut(id) else {
            return false;
        };
        device.position = position;
        if let Some((room_id, room_name)) = room {
            device.room_id = Some(room_id);
            device.room_name = Some(room_name);
        }
        true
    }

    /// Entfernt ein Gerät und alle Verweise darauf.
    pub fn remove_device(&mut self, id: &str) -> Option<Device> {
        let index = self.devices.iter().position(|d| d.id == id)?;
        let removed = self.devices.remove(index);
        for device in &mut self.devices {
            device.connections.retain(|c| c != id);
        }
        Some(removed)
    }

    /// Prüft, ob `from` und `to` verbunden werden dürfen.
    pub fn check_link(&self, from: &str, to: &str) -> Result<(), RoutingError> {
        if from == to {
            return Err(RoutingError::SelfLoop);
        }
        let network = |id: &str| {
            self.device(id)
                .map(|d| d.network.clone())
                .ok_or_else(|| RoutingError::UnknownDevice(id.to_string()))
        };
        let (from_network, to_network) = (network(from)?, network(to)?);
        if from_network != to_network {
            return Err(RoutingError::NetworkMismatch {
                from: from_network,
                to: to_network,
            });
        }
        Ok(())
    }

    /// Verkettet zwei Geräte: `to.connections` erhält `from`.
    ///
    /// Nur im selben Netzwerk; bestehende Verbindungen werden nicht doppelt angelegt.
    pub fn link_devices(&mut self, from: &str, to: &str) -> Result<bool, RoutingError> {
        self.check_link(from, to)?;
        let target = self
            .device_mut(to)
            .ok_or_else(|| RoutingError::UnknownDevice(to.to_string()))?;
        if target.connections.iter().any(|c| c == from) {
            return Ok(false);
        }
        target.connections.push(from.to_string());
        Ok(true)
    }

    /// Ob zwei Geräte (in beliebiger Richtung) verbunden sind.
    pub fn are_connected(&self, a: &str, b: &str) -> bool {
        let has = |x: &str, y: &str| {
            self.device(x)
                .is_some_and(|d| d.connections.iter().any(|c| c == y))
        };
        has(a, b) || has(b, a)
    }

    /// Alle Verbindungen als Paare `(gerät, peer)` ohne Duplikate.
    pub fn connection_pairs(&self) -> Vec<(&Device, &Device)> {
        let mut pairs = Vec::new();
        for device in &self.devices {
            for peer_id in &device.connections {
                if let Some(peer) = self.device(peer_id) {
                    pairs.push((device, peer));
                }
            }
        }
        pairs
    }
}
