//! File persistence for the list collection
//!
//! Lists are stored as a TOML document of `[[lists]]` tables. Every write
//! goes to a temporary sibling file first and is then renamed over the
//! target, so a reader never observes a half-written file.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::model::List;

#[derive(Debug, Default, Serialize, Deserialize)]
struct ListsDocument {
    #[serde(default)]
    lists: Vec<List>,
}

/// The durable list file
pub struct ListFile {
    file_path: PathBuf,
}

impl ListFile {
    pub fn new(file_path: impl AsRef<Path>) -> Self {
        Self {
            file_path: file_path.as_ref().to_path_buf(),
        }
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    /// Read every persisted list
    ///
    /// # Returns
    /// The lists in stored order; an empty collection if the file does not exist
    pub fn load(&self) -> Result<Vec<List>> {
        if !self.file_path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.file_path)
            .with_context(|| format!("Failed to read {}", self.file_path.display()))?;
        let document: ListsDocument = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", self.file_path.display()))?;
        Ok(document.lists)
    }

    /// Replace the file with the given lists
    pub fn save(&self, lists: &[List]) -> Result<()> {
        let document = ListsDocument {
            lists: lists.to_vec(),
        };
        let content = toml::to_string_pretty(&document).context("Failed to encode lists")?;
        write_atomic(&self.file_path, &content)
    }
}

/// Write `content` to `path` via a temporary file and a rename
///
/// Missing parent directories are created.
pub fn write_atomic(path: &Path, content: &str) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir).with_context(|| format!("Failed to create {}", dir.display()))?;

    let file_name = path
        .file_name()
        .with_context(|| format!("Not a file path: {}", path.display()))?;
    let tmp = dir.join(format!(".{}.tmp", file_name.to_string_lossy()));

    fs::write(&tmp, content).with_context(|| format!("Failed to write {}", tmp.display()))?;
    fs::rename(&tmp, path).with_context(|| format!("Failed to rename to {}", path.display()))?;
    Ok(())
}
