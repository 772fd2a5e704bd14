//! Persisted one-to-one association between source and destination tasks.

use super::TaskId;
use std::collections::HashMap;
use thiserror::Error;

/// Result type for task map operations.
pub type TaskMapResult<T> = Result<T, TaskMapError>;

/// Errors returned by [`TaskMap`] operations.
///
/// Duplicate-key, duplicate-value, and duplicate-pair inserts are reported
/// as distinct variants to keep a corrupted map diagnosable.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskMapError {
    /// The source identifier is already mapped.
    #[error("source task {0} is already mapped")]
    DuplicateSource(TaskId),

    /// The destination identifier is already mapped.
    #[error("destination task {0} is already mapped")]
    DuplicateDestination(TaskId),

    /// Both identifiers are already mapped.
    #[error("source task {0} and destination task {1} are both already mapped")]
    DuplicateBoth(TaskId, TaskId),

    /// No mapping exists for the identifier.
    #[error("no mapping for task {0}")]
    NotFound(TaskId),
}

/// Bijective map from source task identifiers to destination task
/// identifiers.
///
/// Implemented as two hash maps kept in lockstep with insert-time
/// cross-checks, so no source identifier ever maps to two destinations and
/// vice versa. Violating inserts fail and leave the map unchanged. The map
/// is the only state that survives across sync runs; loading and persisting
/// its durable form is the job of
/// [`FileTaskMapStore`](crate::sync::adapters::FileTaskMapStore).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskMap {
    forward: HashMap<TaskId, TaskId>,
    inverse: HashMap<TaskId, TaskId>,
}

impl TaskMap {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a map from `(source, destination)` pairs.
    ///
    /// # Errors
    ///
    /// Returns the first duplication error encountered, leaving no partial
    /// result observable to the caller.
    pub fn from_entries(
        entries: impl IntoIterator<Item = (TaskId, TaskId)>,
    ) -> TaskMapResult<Self> {
        let mut map = Self::new();
        for (source_id, destination_id) in entries {
            map.map(source_id, destination_id)?;
        }
        Ok(map)
    }

    /// Creates a mapping between a source and a destination task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskMapError::DuplicateSource`],
    /// [`TaskMapError::DuplicateDestination`], or
    /// [`TaskMapError::DuplicateBoth`] when either identifier is already
    /// mapped; the existing mappings are left unchanged.
    pub fn map(&mut self, source_id: TaskId, destination_id: TaskId) -> TaskMapResult<()> {
        let source_taken = self.forward.contains_key(&source_id);
        let destination_taken = self.inverse.contains_key(&destination_id);
        match (source_taken, destination_taken) {
            (true, true) => Err(TaskMapError::DuplicateBoth(source_id, destination_id)),
            (true, false) => Err(TaskMapError::DuplicateSource(source_id)),
            (false, true) => Err(TaskMapError::DuplicateDestination(destination_id)),
            (false, false) => {
                self.forward
                    .insert(source_id.clone(), destination_id.clone());
                self.inverse.insert(destination_id, source_id);
                Ok(())
            }
        }
    }

    /// Removes the mapping for a source task, silently doing nothing when
    /// none exists.
    pub fn unmap(&mut self, source_id: &TaskId) {
        if let Some(destination_id) = self.forward.remove(source_id) {
            self.inverse.remove(&destination_id);
        }
    }

    /// Returns the destination identifier mapped to a source task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskMapError::NotFound`] when the source task has no
    /// mapping.
    pub fn destination_for(&self, source_id: &TaskId) -> TaskMapResult<&TaskId> {
        self.forward
            .get(source_id)
            .ok_or_else(|| TaskMapError::NotFound(source_id.clone()))
    }

    /// Returns the source identifier mapped to a destination task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskMapError::NotFound`] when the destination task has no
    /// mapping.
    pub fn source_for(&self, destination_id: &TaskId) -> TaskMapResult<&TaskId> {
        self.inverse
            .get(destination_id)
            .ok_or_else(|| TaskMapError::NotFound(destination_id.clone()))
    }

    /// Returns the destination identifier mapped to a source task, or `None`.
    #[must_use]
    pub fn try_destination_for(&self, source_id: &TaskId) -> Option<&TaskId> {
        self.forward.get(source_id)
    }

    /// Returns the source identifier mapped to a destination task, or `None`.
    #[must_use]
    pub fn try_source_for(&self, destination_id: &TaskId) -> Option<&TaskId> {
        self.inverse.get(destination_id)
    }

    /// Iterates over all mapped source identifiers.
    pub fn source_ids(&self) -> impl Iterator<Item = &TaskId> {
        self.forward.keys()
    }

    /// Iterates over all mapped destination identifiers.
    pub fn destination_ids(&self) -> impl Iterator<Item = &TaskId> {
        self.inverse.keys()
    }

    /// Iterates over all `(source, destination)` pairs.
    pub fn entries(&self) -> impl Iterator<Item = (&TaskId, &TaskId)> {
        self.forward.iter()
    }

    /// Number of stored mappings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.forward.len()
    }

    /// Whether the map holds no mappings.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }
}
