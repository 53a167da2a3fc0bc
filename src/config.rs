//! Data directory layout
//!
//! Everything the front end persists lives under one directory:
//! the list file, the preference file and the pending reminder queue.

use std::path::{Path, PathBuf};

use crate::preferences::FilePreferences;
use crate::reminder::FileScheduler;
use crate::storage::ListFile;
use crate::store::Store;

pub const LISTS_FILE: &str = "Lists.toml";
pub const PREFERENCES_FILE: &str = "preferences.toml";
pub const REMINDERS_FILE: &str = "reminders.toml";

/// Store backed entirely by files in the data directory
pub type FileStore = Store<FilePreferences, FileScheduler>;

#[derive(Debug, Clone)]
pub struct Config {
    data_dir: PathBuf,
}

impl Config {
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self {
            data_dir: data_dir.as_ref().to_path_buf(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn lists_path(&self) -> PathBuf {
        self.data_dir.join(LISTS_FILE)
    }

    pub fn preferences_path(&self) -> PathBuf {
        self.data_dir.join(PREFERENCES_FILE)
    }

    pub fn reminders_path(&self) -> PathBuf {
        self.data_dir.join(REMINDERS_FILE)
    }

    /// Load the store from this data directory
    pub fn open_store(&self) -> FileStore {
        Store::load(
            ListFile::new(self.lists_path()),
            FilePreferences::open(self.preferences_path()),
            FileScheduler::open(self.reminders_path()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_paths_live_under_data_dir() {
        let config = Config::new("/tmp/trydo");
        assert_eq!(config.lists_path(), PathBuf::from("/tmp/trydo/Lists.toml"));
        assert_eq!(
            config.preferences_path(),
            PathBuf::from("/tmp/trydo/preferences.toml")
        );
        assert_eq!(
            config.reminders_path(),
            PathBuf::from("/tmp/trydo/reminders.toml")
        );
    }

    #[test]
    fn test_open_store_creates_files_on_first_launch() {
        let dir = TempDir::new().unwrap();
        let config = Config::new(dir.path().join("data"));

        let store = config.open_store();
        assert_eq!(store.lists().len(), 1);
        assert!(config.lists_path().exists());
        assert!(config.preferences_path().exists());
    }
}
