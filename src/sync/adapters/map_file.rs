//! JSON file storage for the task identifier map.

use crate::sync::domain::{TaskId, TaskMap};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

/// Errors returned when writing the map file.
#[derive(Debug, Error)]
pub enum MapStoreError {
    /// The file could not be written.
    #[error("failed to write task map file: {0}")]
    Io(#[from] std::io::Error),

    /// The map could not be serialised.
    #[error("failed to serialise task map: {0}")]
    Serialise(#[from] serde_json::Error),
}

/// Durable round-trip for a [`TaskMap`], one JSON object of source-id to
/// destination-id pairs per file.
///
/// Loading tolerates a missing, unreadable, or corrupt file by starting
/// from an empty map instead of failing the run; a corrupt map only costs
/// the next run some recreations. Persisting overwrites the whole file,
/// with keys sorted for stable diffs.
#[derive(Debug, Clone)]
pub struct FileTaskMapStore {
    path: PathBuf,
}

impl FileTaskMapStore {
    /// Creates a store reading and writing the given path.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the underlying file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the map, or an empty map when the file is missing or corrupt.
    #[must_use]
    pub fn load(&self) -> TaskMap {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) => {
                debug!(
                    path = %self.path.display(),
                    error = %err,
                    "task map file not readable, starting with an empty map"
                );
                return TaskMap::new();
            }
        };

        let pairs: BTreeMap<String, String> = match serde_json::from_str(&raw) {
            Ok(pairs) => pairs,
            Err(err) => {
                warn!(
                    path = %self.path.display(),
                    error = %err,
                    "task map file is not valid JSON, starting with an empty map"
                );
                return TaskMap::new();
            }
        };

        let entries = pairs
            .into_iter()
            .map(|(source, destination)| (TaskId::from(source), TaskId::from(destination)));
        match TaskMap::from_entries(entries) {
            Ok(map) => map,
            Err(err) => {
                warn!(
                    path = %self.path.display(),
                    error = %err,
                    "task map file violates the one-to-one invariant, starting with an empty map"
                );
                TaskMap::new()
            }
        }
    }

    /// Overwrites the file with the current map contents.
    ///
    /// # Errors
    ///
    /// Returns [`MapStoreError`] when serialisation or the write fails.
    pub fn persist(&self, map: &TaskMap) -> Result<(), MapStoreError> {
        let pairs: BTreeMap<&str, &str> = map
            .entries()
            .map(|(source, destination)| (source.as_str(), destination.as_str()))
            .collect();
        let rendered = serde_json::to_string_pretty(&pairs)?;
        fs::write(&self.path, rendered)?;
        Ok(())
    }
}
