//! Schlüssel/Wert-Speicher für die dauerhaften Datensätze.

use anyhow::{Context, Result};
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex, MutexGuard};

/// Abstrakter Datensatz-Speicher (ein JSON-Text pro Schlüssel).
pub trait KeyValueStore {
    /// Lädt den Wert zu `key`; `None` wenn noch nie gespeichert.
    fn load(&self, key: &str) -> Result<Option<String>>;
    /// Speichert den Wert zu `key`.
    fn save(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Speichert jeden Datensatz als `<dir>/<key>.json`.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    /// Erstellt einen Store im angegebenen Verzeichnis (wird beim ersten Speichern angelegt).
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl KeyValueStore for JsonFileStore {
    fn load(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }
        let raw = std::fs::read_to_string(&path)
            .with_context(|| format!("Datensatz nicht lesbar: {}", path.display()))?;
        Ok(Some(raw))
    }

    fn save(&mut self, key: &str, value: &str) -> Result<()> {
        std::fs::create_dir_all(&self.dir)
            .with_context(|| format!("Datenverzeichnis nicht anlegbar: {}", self.dir.display()))?;
        let path = self.path_for(key);
        std::fs::write(&path, value)
            .with_context(|| format!("Datensatz nicht schreibbar: {}", path.display()))?;
        Ok(())
    }
}

/// In-Memory-Store mit zählbaren Schreibvorgängen und injizierbaren Fehlern.
///
/// Klone teilen denselben Inhalt, damit Tests den Store nach der Übergabe
/// an den Editor weiter beobachten können.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    inner: Arc<Mutex<MemoryInner>>,
}

#[derive(Debug, Default)]
struct MemoryInner {
    values: HashMap<String, String>,
    save_counts: HashMap<String, usize>,
    fail_saves: bool,
    fail_loads: bool,
}

impl MemoryStore {
    /// Erstellt einen leeren Store.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, MemoryInner> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Vorbelegt einen Schlüssel (wie ein früher gespeicherter Wert).
    pub fn with_value(self, key: &str, value: &str) -> Self {
        self.lock()
            .values
            .insert(key.to_string(), value.to_string());
        self
    }

    /// Gespeicherter Rohwert.
    pub fn value(&self, key: &str) -> Option<String> {
        self.lock().values.get(key).cloned()
    }

    /// Anzahl erfolgreicher Schreibvorgänge für `key`.
    pub fn save_count(&self, key: &str) -> usize {
        self.lock().save_counts.get(key).copied().unwrap_or(0)
    }

    /// Lässt alle folgenden Speichervorgänge fehlschlagen (oder wieder gelingen).
    pub fn set_fail_saves(&self, fail: bool) {
        self.lock().fail_saves = fail;
    }

    /// Lässt alle folgenden Ladevorgänge fehlschlagen (oder wieder gelingen).
    pub fn set_fail_loads(&self, fail: bool) {
        self.lock().fail_loads = fail;
    }
}

impl KeyValueStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>> {
        let inner = self.lock();
        anyhow::ensure!(!inner.fail_loads, "Laden von '{}' fehlgeschlagen", key);
        Ok(inner.values.get(key).cloned())
    }

    fn save(&mut self, key: &str, value: &str) -> Result<()> {
        let mut inner = self.lock();
        anyhow::ensure!(!inner.fail_saves, "Speichern von '{}' fehlgeschlagen", key);
        inner.values.insert(key.to_string(), value.to_string());
        *inner.save_counts.entry(key.to_string()).or_default() += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_file_store_roundtrip() {
        let dir = std::env::temp_dir().join(format!("floorplan_store_{}", std::process::id()));
        let mut store = JsonFileStore::new(&dir);
        assert_eq!(store.load("rooms").expect("Laden"), None);
        store.save("rooms", "[]").expect("Speichern");
        assert_eq!(store.load("rooms").expect("Laden").as_deref(), Some("[]"));
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_memory_store_injected_failure() {
        let mut store = MemoryStore::new();
        let observer = store.clone();
        store.set_fail_saves(true);
        assert!(store.save("scale", "{}").is_err());
        assert_eq!(observer.save_count("scale"), 0);
        store.set_fail_saves(false);
        store.save("scale", "{}").expect("Speichern");
        assert_eq!(observer.save_count("scale"), 1);
        assert_eq!(observer.value("scale").as_deref(), Some("{}"));
    }
}
