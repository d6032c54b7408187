//! Preference storage - durable named string slots.

use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};
use std::rc::Rc;

use tracing::{debug, info, warn};

use crate::error::Result;

/// Default slot holding the locale preference
pub const LOCALE_SLOT: &str = "portfolio-language";

/// Durable key/value slots.
///
/// Writes are whole-value overwrites. Implementations may fail on either
/// operation; callers decide how to degrade.
pub trait PreferenceStorage {
    /// Read a slot. `Ok(None)` when the slot was never written.
    fn load(&self, key: &str) -> Result<Option<String>>;

    /// Overwrite a slot.
    fn save(&self, key: &str, value: &str) -> Result<()>;
}

/// Slots kept in a TOML table on disk.
///
/// The file is read on every `load`, so edits made outside the process
/// are picked up.
#[derive(Debug, Clone)]
pub struct TomlFileStorage {
    path: PathBuf,
}

impl TomlFileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `preferences.toml` in the platform config directory
    pub fn in_config_dir() -> Result<Self> {
        let dir = crate::helpers::get_or_create_config_dir()?;
        Ok(Self::new(dir.join("preferences.toml")))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_table(&self) -> Result<BTreeMap<String, toml::Value>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let content = std::fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        Ok(toml::from_str(&content)?)
    }
}

impl PreferenceStorage for TomlFileStorage {
    fn load(&self, key: &str) -> Result<Option<String>> {
        let table = self.read_table()?;
        // Non-string values are foreign data, handled like any other bad value
        Ok(table.get(key).map(|value| match value {
            toml::Value::String(s) => s.clone(),
            other => other.to_string(),
        }))
    }

    fn save(&self, key: &str, value: &str) -> Result<()> {
        // An unreadable file is replaced rather than left blocking every write
        let mut table = self.read_table().unwrap_or_else(|e| {
            warn!(path = ?self.path, error = %e, "Discarding unreadable preferences");
            BTreeMap::new()
        });
        table.insert(key.to_string(), toml::Value::String(value.to_string()));
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, toml::to_string(&table)?)?;
        info!(path = ?self.path, key, value, "Preference saved");
        Ok(())
    }
}

/// Session-only slots.
///
/// Clones share the same slots, so a test (or the shell) can keep a handle
/// and inspect what the store wrote.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    slots: Rc<RefCell<HashMap<String, String>>>,
    writes: Rc<RefCell<usize>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-populated with one slot
    pub fn with_slot(key: &str, value: &str) -> Self {
        let storage = Self::default();
        storage
            .slots
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        storage
    }

    /// Number of successful `save` calls
    pub fn write_count(&self) -> usize {
        *self.writes.borrow()
    }
}

impl PreferenceStorage for MemoryStorage {
    fn load(&self, key: &str) -> Result<Option<String>> {
        Ok(self.slots.borrow().get(key).cloned())
    }

    fn save(&self, key: &str, value: &str) -> Result<()> {
        self.slots
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        *self.writes.borrow_mut() += 1;
        debug!(key, value, "Preference kept in memory");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_storage_missing_file_is_empty() {
        let dir = tempfile::tempdir().expect("tempdir");
        let storage = TomlFileStorage::new(dir.path().join("preferences.toml"));
        assert_eq!(storage.load(LOCALE_SLOT).expect("load"), None);
    }

    #[test]
    fn test_file_storage_overwrites_and_keeps_other_slots() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested").join("preferences.toml");
        std::fs::create_dir_all(dir.path().join("nested")).expect("mkdir");
        std::fs::write(&path, "other = \"kept\"\n").expect("seed");

        let storage = TomlFileStorage::new(&path);
        storage.save(LOCALE_SLOT, "fr").expect("save fr");
        storage.save(LOCALE_SLOT, "en").expect("save en");

        assert_eq!(storage.load(LOCALE_SLOT).expect("load").as_deref(), Some("en"));
        assert_eq!(storage.load("other").expect("load").as_deref(), Some("kept"));
    }

    #[test]
    fn test_file_storage_save_replaces_corrupt_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("preferences.toml");
        std::fs::write(&path, "portfolio-language = \"fr").expect("seed");

        let storage = TomlFileStorage::new(&path);
        assert!(storage.load(LOCALE_SLOT).is_err());

        storage.save(LOCALE_SLOT, "en").expect("save over corrupt file");
        assert_eq!(storage.load(LOCALE_SLOT).expect("load").as_deref(), Some("en"));
    }

    #[test]
    fn test_memory_storage_clones_share_slots() {
        let storage = MemoryStorage::new();
        let handle = storage.clone();
        storage.save(LOCALE_SLOT, "en").expect("save");
        assert_eq!(handle.load(LOCALE_SLOT).expect("load").as_deref(), Some("en"));
        assert_eq!(handle.write_count(), 1);
    }
}
