//! Saved ("favourite") campus locations.
//!
//! The store is an ordered list of building ids kept in a JSON array on disk.
//! Adding an id that is already present is a no-op.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::campus::read_json;
use crate::error::{Error, Result};

/// Default filename for the saved-locations store inside the data directory.
pub const SAVED_LOCATIONS_FILENAME: &str = "saved_locations.json";

/// Building ids the user has saved, persisted at `path`.
#[derive(Debug, Clone, PartialEq)]
pub struct SavedLocations {
    path: PathBuf,
    ids: Vec<String>,
}

impl SavedLocations {
    /// Load the store, treating a missing file as an empty list.
    pub fn load(path: &Path) -> Result<Self> {
        let ids = match read_json::<Vec<String>>(path) {
            Ok(ids) => ids,
            Err(Error::DataFileNotFound { .. }) => Vec::new(),
            Err(err) => return Err(err),
        };
        debug!(path = %path.display(), count = ids.len(), "loaded saved locations");
        Ok(Self {
            path: path.to_path_buf(),
            ids,
        })
    }

    /// Load the store from its default location inside `data_dir`.
    pub fn load_in(data_dir: &Path) -> Result<Self> {
        Self::load(&data_dir.join(SAVED_LOCATIONS_FILENAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|saved| saved == id)
    }

    /// Append `id` unless already saved. Returns whether it was inserted.
    pub fn add(&mut self, id: &str) -> bool {
        if self.contains(id) {
            return false;
        }
        self.ids.push(id.to_string());
        true
    }

    /// Remove `id`. Returns whether it was present.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.ids.len();
        self.ids.retain(|saved| saved != id);
        self.ids.len() != before
    }

    /// Write the store back to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(&self.ids)?;
        fs::write(&self.path, contents)?;
        debug!(path = %self.path.display(), count = self.ids.len(), "saved locations written");
        Ok(())
    }
}
