//! Small key/value preference store
//!
//! Holds the selection index, the first-launch flag and the item id counter,
//! independently of the list file. Backends implement [`Preferences`]; the
//! in-memory one is meant for tests and embedding, the file one for the CLI.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::storage::write_atomic;

/// Index of the selected list, -1 when none is selected
pub const SELECTED_LIST_INDEX: &str = "selectedListIndex";
/// Set until the first-run list has been seeded
pub const FIRST_TIME_LAUNCH: &str = "firstTimeLaunch";
/// Next item id to hand out
pub const NEXT_ITEM_ID: &str = "nextItemId";

pub const DEFAULT_SELECTED_LIST_INDEX: i64 = -1;
pub const DEFAULT_FIRST_TIME_LAUNCH: bool = true;
pub const DEFAULT_NEXT_ITEM_ID: i64 = 0;

/// A stored preference value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PrefValue {
    Bool(bool),
    Int(i64),
}

/// Key/value preference backend
pub trait Preferences {
    fn get(&self, key: &str) -> Option<PrefValue>;
    fn set(&mut self, key: &str, value: PrefValue);

    /// Integer stored under `key`, or `default` if absent or not an integer
    fn int_or(&self, key: &str, default: i64) -> i64 {
        match self.get(key) {
            Some(PrefValue::Int(value)) => value,
            _ => default,
        }
    }

    /// Boolean stored under `key`, or `default` if absent or not a boolean
    fn bool_or(&self, key: &str, default: bool) -> bool {
        match self.get(key) {
            Some(PrefValue::Bool(value)) => value,
            _ => default,
        }
    }
}

/// Preferences held in memory only
#[derive(Debug, Default, Clone)]
pub struct MemoryPreferences {
    values: HashMap<String, PrefValue>,
}

impl MemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Preferences for MemoryPreferences {
    fn get(&self, key: &str) -> Option<PrefValue> {
        self.values.get(key).copied()
    }

    fn set(&mut self, key: &str, value: PrefValue) {
        self.values.insert(key.to_string(), value);
    }
}

/// Preferences persisted to a TOML file, written through on every `set`
pub struct FilePreferences {
    file_path: PathBuf,
    values: BTreeMap<String, PrefValue>,
}

impl FilePreferences {
    /// Open the preference file, starting empty if it is missing or unreadable
    pub fn open(file_path: impl AsRef<Path>) -> Self {
        let file_path = file_path.as_ref().to_path_buf();
        let mut values = BTreeMap::new();

        if file_path.exists() {
            let parsed = fs::read_to_string(&file_path)
                .map_err(anyhow::Error::from)
                .and_then(|content| {
                    toml::from_str::<BTreeMap<String, PrefValue>>(&content)
                        .map_err(anyhow::Error::from)
                });
            match parsed {
                Ok(stored) => values = stored,
                Err(e) => {
                    warn!(path = %file_path.display(), error = %e, "Failed to read preferences, using defaults");
                }
            }
        }

        Self { file_path, values }
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }
}

impl Preferences for FilePreferences {
    fn get(&self, key: &str) -> Option<PrefValue> {
        self.values.get(key).copied()
    }

    fn set(&mut self, key: &str, value: PrefValue) {
        self.values.insert(key.to_string(), value);

        let result = toml::to_string(&self.values)
            .map_err(anyhow::Error::from)
            .and_then(|content| write_atomic(&self.file_path, &content));
        if let Err(e) = result {
            warn!(path = %self.file_path.display(), key, error = %e, "Failed to write preferences");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_when_absent() {
        let prefs = MemoryPreferences::new();
        assert_eq!(prefs.int_or(SELECTED_LIST_INDEX, DEFAULT_SELECTED_LIST_INDEX), -1);
        assert!(prefs.bool_or(FIRST_TIME_LAUNCH, DEFAULT_FIRST_TIME_LAUNCH));
        assert_eq!(prefs.int_or(NEXT_ITEM_ID, DEFAULT_NEXT_ITEM_ID), 0);
    }

    #[test]
    fn test_wrong_type_falls_back_to_default() {
        let mut prefs = MemoryPreferences::new();
        prefs.set(NEXT_ITEM_ID, PrefValue::Bool(true));
        assert_eq!(prefs.int_or(NEXT_ITEM_ID, 0), 0);
    }

    #[test]
    fn test_file_preferences_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("preferences.toml");

        let mut prefs = FilePreferences::open(&path);
        prefs.set(SELECTED_LIST_INDEX, PrefValue::Int(2));
        prefs.set(FIRST_TIME_LAUNCH, PrefValue::Bool(false));
        prefs.set(NEXT_ITEM_ID, PrefValue::Int(41));

        let reopened = FilePreferences::open(&path);
        assert_eq!(reopened.get(SELECTED_LIST_INDEX), Some(PrefValue::Int(2)));
        assert_eq!(reopened.get(FIRST_TIME_LAUNCH), Some(PrefValue::Bool(false)));
        assert_eq!(reopened.get(NEXT_ITEM_ID), Some(PrefValue::Int(41)));
    }

    #[test]
    fn test_file_preferences_corrupt_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("preferences.toml");
        fs::write(&path, "[[[").unwrap();

        let prefs = FilePreferences::open(&path);
        assert_eq!(prefs.get(NEXT_ITEM_ID), None);
    }
}
