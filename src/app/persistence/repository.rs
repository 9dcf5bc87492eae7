//! Entprellter Zugriff auf einen Datensatz-Typ.

use super::KeyValueStore;
use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::marker::PhantomData;
use std::time::{Duration, Instant};

/// Ergebnis eines Flush-Versuchs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlushOutcome {
    /// Nichts fällig
    Idle,
    /// Inhalt identisch zum letzten Speicherstand, nicht geschrieben
    Unchanged,
    /// In den Store geschrieben
    Written,
}

/// Repository für einen Datensatz-Typ mit `loaded`-Flag und Debounce.
///
/// Vor dem ersten erfolgreichen Laden wird nie gespeichert, damit ein noch
/// nicht geladener Wert nicht mit einem leeren Default überschrieben wird.
pub struct Repository<T> {
    key: &'static str,
    loaded: bool,
    deadline: Option<Instant>,
    last_saved: Option<String>,
    _record: PhantomData<fn() -> T>,
}

impl<T: Serialize + DeserializeOwned> Repository<T> {
    /// Erstellt ein ungeladenes Repository.
    pub fn new(key: &'static str) -> Self {
        Self {
            key,
            loaded: false,
            deadline: None,
            last_saved: None,
            _record: PhantomData,
        }
    }

    /// Store-Schlüssel.
    pub fn key(&self) -> &'static str {
        self.key
    }

    /// Ob bereits erfolgreich geladen wurde.
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Ob ein Speichervorgang geplant ist.
    pub fn has_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Zeitpunkt des geplanten Speichervorgangs.
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Lädt den Datensatz; setzt bei Erfolg `loaded` (auch wenn nichts gespeichert war).
    pub fn load(&mut self, store: &dyn KeyValueStore) -> Result<Option<T>> {
        let raw = store.load(self.key)?;
        let value = match raw {
            Some(raw) => {
                let value: T = serde_json::from_str(&raw)
                    .with_context(|| format!("Datensatz '{}' ist kein gültiges JSON", self.key))?;
                self.last_saved = Some(serde_json::to_string(&value)?);
                Some(value)
            }
            None => None,
        };
        self.loaded = true;
        Ok(value)
    }

    /// Plant (bzw. verschiebt) den nächsten Speichervorgang auf `now + debounce`.
    ///
    /// Vor dem ersten Laden ohne Wirkung; Rückgabe ob geplant wurde.
    pub fn schedule(&mut self, now: Instant, debounce: Duration) -> bool {
        if !self.loaded {
            log::debug!("Speichern von '{}' übersprungen: noch nicht geladen", self.key);
            return false;
        }
        self.deadline = Some(now + debounce);
        true
    }

    /// Schreibt den Wert, wenn die Ruhezeit abgelaufen ist und er sich geändert hat.
    ///
    /// Ein Fehler verwirft den geplanten Vorgang; der letzte Speicherstand bleibt
    /// unverändert, die nächste Änderung plant erneut.
    pub fn flush_if_due(
        &mut self,
        store: &mut dyn KeyValueStore,
        value: &T,
        now: Instant,
    ) -> Result<FlushOutcome> {
        match self.deadline {
            Some(deadline) if deadline <= now => {}
            _ => return Ok(FlushOutcome::Idle),
        }
        self.deadline = None;

        let payload = serde_json::to_string(value)
            .with_context(|| format!("Datensatz '{}' nicht serialisierbar", self.key))?;
        if self.last_saved.as_deref() == Some(payload.as_str()) {
            log::debug!("Datensatz '{}' unverändert, kein Schreibvorgang", self.key);
            return Ok(FlushOutcome::Unchanged);
        }
        store
            .save(self.key, &payload)
            .with_context(|| format!("Speichern von '{}' fehlgeschlagen", self.key))?;
        self.last_saved = Some(payload);
        Ok(FlushOutcome::Written)
    }
}
