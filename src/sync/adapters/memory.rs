//! In-memory task service for tests, demos, and embedding.

use super::LocalTask;
use crate::sync::domain::{SyncStatus, Task};
use crate::sync::ports::{TaskService, TaskServiceError, TaskServiceResult};
use std::sync::{Arc, RwLock};

/// Thread-safe in-memory task service.
///
/// Clones share one underlying store, so a test can keep a handle while the
/// engine owns another. Mutations requested through task status flags are
/// deferred until [`TaskService::persist_tasks`], matching the batched
/// persistence contract.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskService {
    state: Arc<RwLock<InMemoryState>>,
}

#[derive(Debug, Default)]
struct InMemoryState {
    tasks: Vec<LocalTask>,
    persisted: Vec<LocalTask>,
    persist_calls: u64,
}

impl InMemoryTaskService {
    /// Creates an empty service.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a service seeded with the given tasks.
    #[must_use]
    pub fn with_tasks(tasks: impl IntoIterator<Item = LocalTask>) -> Self {
        let service = Self::new();
        if let Ok(mut state) = service.state.write() {
            state.tasks = tasks.into_iter().collect();
        }
        service
    }

    /// Snapshot of the current durable task collection.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError`] when the store lock is poisoned.
    pub fn tasks(&self) -> TaskServiceResult<Vec<LocalTask>> {
        let state = self.read_state()?;
        Ok(state.tasks.clone())
    }

    /// The task list handed to the most recent persist call.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError`] when the store lock is poisoned.
    pub fn last_persisted(&self) -> TaskServiceResult<Vec<LocalTask>> {
        let state = self.read_state()?;
        Ok(state.persisted.clone())
    }

    /// Number of persist calls the service has received.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError`] when the store lock is poisoned.
    pub fn persist_calls(&self) -> TaskServiceResult<u64> {
        let state = self.read_state()?;
        Ok(state.persist_calls)
    }

    fn read_state(&self) -> TaskServiceResult<std::sync::RwLockReadGuard<'_, InMemoryState>> {
        self.state
            .read()
            .map_err(|err| TaskServiceError::backend(std::io::Error::other(err.to_string())))
    }

    fn write_state(&self) -> TaskServiceResult<std::sync::RwLockWriteGuard<'_, InMemoryState>> {
        self.state
            .write()
            .map_err(|err| TaskServiceError::backend(std::io::Error::other(err.to_string())))
    }
}

/// Applies one task's status flag to a durable task collection.
pub(crate) fn apply_status(tasks: &mut Vec<LocalTask>, task: &dyn Task) {
    match task.status() {
        SyncStatus::New | SyncStatus::Updated => {
            let stored = LocalTask::snapshot_of(task).with_status(SyncStatus::Unchanged);
            match tasks.iter_mut().find(|t| t.id() == task.id()) {
                Some(existing) => *existing = stored,
                None => tasks.push(stored),
            }
        }
        SyncStatus::Deleted => {
            tasks.retain(|t| t.id() != task.id());
        }
        SyncStatus::Unchanged => {}
    }
}

impl TaskService for InMemoryTaskService {
    fn get_all_tasks(&self) -> TaskServiceResult<Vec<Box<dyn Task>>> {
        let state = self.read_state()?;
        Ok(state
            .tasks
            .iter()
            .cloned()
            .map(|task| Box::new(task) as Box<dyn Task>)
            .collect())
    }

    fn make_task(&self) -> TaskServiceResult<Box<dyn Task>> {
        Ok(Box::new(LocalTask::generate()))
    }

    fn persist_tasks(&self, tasks: &[Box<dyn Task>]) -> TaskServiceResult<()> {
        let mut state = self.write_state()?;
        for task in tasks {
            apply_status(&mut state.tasks, task.as_ref());
        }
        state.persisted = tasks
            .iter()
            .map(|task| LocalTask::snapshot_of(task.as_ref()))
            .collect();
        state.persist_calls += 1;
        Ok(())
    }
}
