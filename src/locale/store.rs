//! Durable preference storage.
//!
//! The only durable value is the selected locale, kept under
//! `LANGUAGE_KEY`. Everything else about a session is in-memory.

use rustc_hash::FxHashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::Result;

use super::locale::Locale;

/// Key the locale code is stored under.
pub const LANGUAGE_KEY: &str = "gameLanguage";

/// String key-value store that outlives a session.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// In-process store.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: FxHashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Store backed by a bincode-encoded file, rewritten on every `set`.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: FxHashMap<String, String>,
}

impl FileStore {
    /// Open `path`, starting empty if the file does not exist yet.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let entries = if path.exists() {
            let bytes = fs::read(&path)?;
            bincode::deserialize(&bytes)?
        } else {
            FxHashMap::default()
        };
        Ok(Self { path, entries })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PreferenceStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        let bytes = bincode::serialize(&self.entries)?;
        fs::write(&self.path, bytes)?;
        Ok(())
    }
}

/// Load the saved locale, falling back to the default.
pub fn load_locale(store: &impl PreferenceStore) -> Locale {
    let Some(code) = store.get(LANGUAGE_KEY) else {
        return Locale::default();
    };
    code.parse().unwrap_or_else(|err| {
        tracing::warn!(%err, "ignoring saved locale");
        Locale::default()
    })
}

/// Persist the selected locale.
pub fn save_locale(store: &mut impl PreferenceStore, locale: Locale) -> Result<()> {
    store.set(LANGUAGE_KEY, locale.code())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_default() {
        let store = MemoryStore::new();
        assert_eq!(load_locale(&store), Locale::Ro);
    }

    #[test]
    fn test_memory_round_trip() {
        let mut store = MemoryStore::new();
        save_locale(&mut store, Locale::De).unwrap();

        assert_eq!(store.get(LANGUAGE_KEY).as_deref(), Some("de"));
        assert_eq!(load_locale(&store), Locale::De);
    }

    #[test]
    fn test_garbage_falls_back() {
        let mut store = MemoryStore::new();
        store.set(LANGUAGE_KEY, "klingon").unwrap();

        assert_eq!(load_locale(&store), Locale::Ro);
    }

    #[test]
    fn test_file_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.bin");

        let mut store = FileStore::open(&path).unwrap();
        assert_eq!(load_locale(&store), Locale::Ro);
        save_locale(&mut store, Locale::Fr).unwrap();

        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(load_locale(&reopened), Locale::Fr);
        assert_eq!(reopened.path(), path.as_path());
    }

    #[test]
    fn test_file_corrupt_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.bin");
        fs::write(&path, [0xffu8; 3]).unwrap();

        assert!(FileStore::open(&path).is_err());
    }
}
