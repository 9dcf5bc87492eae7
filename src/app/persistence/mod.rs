//! Dauerhafte Speicherung der Grundriss-Datensätze.
//!
//! Jeder Datensatz-Typ hat ein eigenes [`Repository`] mit Debounce und
//! `loaded`-Flag. Änderungen markieren die betroffenen Typen als dirty,
//! `tick()` plant und schreibt sie pro Frame.

mod repository;
mod store;

pub use repository::{FlushOutcome, Repository};
pub use store::{JsonFileStore, KeyValueStore, MemoryStore};

use crate::core::{
    Device, FloorPlan, HeightSettings, OverlayMask, OverlayTransform, Room, ScaleCalibration,
};
use std::collections::HashSet;
use std::time::{Duration, Instant};

/// Art eines gespeicherten Datensatzes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    /// Maßstab
    Scale,
    /// Räume
    Rooms,
    /// Masken
    Masks,
    /// Geräte
    Devices,
    /// Overlay-Transformation
    Overlay,
    /// Standard-Höhen
    Heights,
}

impl RecordKind {
    /// Alle Datensatz-Typen.
    pub const ALL: [RecordKind; 6] = [
        RecordKind::Scale,
        RecordKind::Rooms,
        RecordKind::Masks,
        RecordKind::Devices,
        RecordKind::Overlay,
        RecordKind::Heights,
    ];

    /// Store-Schlüssel.
    pub fn key(self) -> &'static str {
        match self {
            RecordKind::Scale => "scale",
            RecordKind::Rooms => "rooms",
            RecordKind::Masks => "masks",
            RecordKind::Devices => "devices",
            RecordKind::Overlay => "overlay",
            RecordKind::Heights => "heights",
        }
    }
}

/// Alle Repositories plus Store und Dirty-Markierungen.
pub struct Persistence {
    store: Box<dyn KeyValueStore>,
    debounce: Duration,
    scale: Repository<ScaleCalibration>,
    rooms: Repository<Vec<Room>>,
    masks: Repository<Vec<OverlayMask>>,
    devices: Repository<Vec<Device>>,
    overlay: Repository<OverlayTransform>,
    heights: Repository<HeightSettings>,
    dirty: HashSet<RecordKind>,
}

impl Persistence {
    /// Erstellt die Persistenz über einem Store.
    pub fn new(store: Box<dyn KeyValueStore>, debounce: Duration) -> Self {
        Self {
            store,
            debounce,
            scale: Repository::new(RecordKind::Scale.key()),
            rooms: Repository::new(RecordKind::Rooms.key()),
            masks: Repository::new(RecordKind::Masks.key()),
            devices: Repository::new(RecordKind::Devices.key()),
            overlay: Repository::new(RecordKind::Overlay.key()),
            heights: Repository::new(RecordKind::Heights.key()),
            dirty: HashSet::new(),
        }
    }

    /// In-Memory-Persistenz (Tests, Start ohne Datenverzeichnis).
    pub fn in_memory() -> Self {
        Self::new(Box::new(MemoryStore::new()), Duration::ZERO)
    }

    /// Setzt die Debounce-Dauer (z.B. nach Options-Änderung).
    pub fn set_debounce(&mut self, debounce: Duration) {
        self.debounce = debounce;
    }

    /// Markiert einen Datensatz als geändert.
    pub fn mark_dirty(&mut self, kind: RecordKind) {
        self.dirty.insert(kind);
    }

    /// Markiert alle Datensätze als geändert (z.B. nach Undo).
    pub fn mark_all_dirty(&mut self) {
        self.dirty.extend(RecordKind::ALL);
    }

    /// Ob ein Datensatz bereits geladen wurde.
    pub fn is_loaded(&self, kind: RecordKind) -> bool {
        match kind {
            RecordKind::Scale => self.scale.is_loaded(),
            RecordKind::Rooms => self.rooms.is_loaded(),
            RecordKind::Masks => self.masks.is_loaded(),
            RecordKind::Devices => self.devices.is_loaded(),
            RecordKind::Overlay => self.overlay.is_loaded(),
            RecordKind::Heights => self.heights.is_loaded(),
        }
    }

    /// Lädt alle Datensätze in den Grundriss.
    ///
    /// Fehlerhafte Datensätze werden geloggt und bleiben auf dem aktuellen
    /// Wert; ihr Repository bleibt ungeladen und speichert daher nicht.
    /// Gibt die Anzahl erfolgreich geladener Datensätze zurück.
    pub fn load_all(&mut self, plan: &mut FloorPlan) -> usize {
        let store = &*self.store;
        let mut loaded = 0;

        match self.scale.load(store) {
            Ok(value) => {
                if let Some(value) = value {
                    plan.calibration = value;
                }
                loaded += 1;
            }
            Err(e) => log::error!("Maßstab nicht geladen: {:#}", e),
        }
        match self.rooms.load(store) {
            Ok(value) => {
                if let Some(rooms) = value {
                    plan.rooms = rooms.into_iter().map(|r| (r.id.clone(), r)).collect();
                }
                loaded += 1;
            }
            Err(e) => log::error!("Räume nicht geladen: {:#}", e),
        }
        match self.masks.load(store) {
            Ok(value) => {
                if let Some(masks) = value {
                    plan.masks = masks.into_iter().map(|m| (m.id.clone(), m)).collect();
                }
                loaded += 1;
            }
            Err(e) => log::error!("Masken nicht geladen: {:#}", e),
        }
        match self.devices.load(store) {
            Ok(value) => {
                if let Some(devices) = value {
                    plan.devices = devices;
                }
                loaded += 1;
            }
            Err(e) => log::error!("Geräte nicht geladen: {:#}", e),
        }
        match self.overlay.load(store) {
            Ok(value) => {
                if let Some(value) = value {
                    plan.overlay = value;
                }
                loaded += 1;
            }
            Err(e) => log::error!("Overlay nicht geladen: {:#}", e),
        }
        match self.heights.load(store) {
            Ok(value) => {
                if let Some(value) = value {
                    plan.heights = value.sanitized();
                }
                loaded += 1;
            }
            Err(e) => log::error!("Höhen nicht geladen: {:#}", e),
        }

        log::info!("{} von {} Datensätzen geladen", loaded, RecordKind::ALL.len());
        loaded
    }

    /// Plant markierte Datensätze und schreibt fällige.
    ///
    /// Schreibfehler werden geloggt; der Editor-Zustand bleibt unverändert.
    pub fn tick(&mut self, plan: &FloorPlan, now: Instant) {
        for kind in self.dirty.drain() {
            let debounce = self.debounce;
            let scheduled = match kind {
                RecordKind::Scale => self.scale.schedule(now, debounce),
                RecordKind::Rooms => self.rooms.schedule(now, debounce),
                RecordKind::Masks => self.masks.schedule(now, debounce),
                RecordKind::Devices => self.devices.schedule(now, debounce),
                RecordKind::Overlay => self.overlay.schedule(now, debounce),
                RecordKind::Heights => self.heights.schedule(now, debounce),
            };
            if !scheduled {
                log::debug!("Änderung an '{}' vor dem Laden verworfen", kind.key());
            }
        }

        if !self.next_deadline().is_some_and(|deadline| deadline <= now) {
            return;
        }
        let store = &mut *self.store;
        let results = [
            self.scale.flush_if_due(store, &plan.calibration, now),
            self.rooms
                .flush_if_due(store, &plan.rooms.values().cloned().collect(), now),
            self.masks
                .flush_if_due(store, &plan.masks.values().cloned().collect(), now),
            self.devices.flush_if_due(store, &plan.devices, now),
            self.overlay.flush_if_due(store, &plan.overlay, now),
            self.heights.flush_if_due(store, &plan.heights, now),
        ];
        for (kind, result) in RecordKind::ALL.into_iter().zip(results) {
            match result {
                Ok(FlushOutcome::Written) => log::debug!("Datensatz '{}' gespeichert", kind.key()),
                Ok(_) => {}
                Err(e) => log::warn!("{:#}", e),
            }
        }
    }

    /// Ob noch Schreibvorgänge anstehen (markiert oder geplant).
    pub fn has_pending(&self) -> bool {
        !self.dirty.is_empty() || self.next_deadline().is_some()
    }

    /// Frühester geplanter Speicherzeitpunkt.
    pub fn next_deadline(&self) -> Option<Instant> {
        [
            self.scale.deadline(),
            self.rooms.deadline(),
            self.masks.deadline(),
            self.devices.deadline(),
            self.overlay.deadline(),
            self.heights.deadline(),
        ]
        .into_iter()
        .flatten()
        .min()
    }
}
