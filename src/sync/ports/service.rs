//! Port contract for task services on either side of a sync.

use crate::sync::domain::{SyncStatus, Task, TaskId};
use std::sync::Arc;
use thiserror::Error;

/// Result type for task service operations.
pub type TaskServiceResult<T> = Result<T, TaskServiceError>;

/// Contract each task-tracking adapter implements.
///
/// Adapters translate between their service's native representation and the
/// [`Task`] contract. The engine calls `get_all_tasks` once per run on both
/// services, `create` for each destination task it materialises, and
/// `persist_tasks` exactly once at the end of the run. Any network access,
/// rate limiting, or backoff lives inside the adapter; the engine imposes no
/// timeout of its own.
pub trait TaskService {
    /// Returns the complete current set of relevant tasks.
    ///
    /// The returned tasks must carry correct last-modified timestamps; the
    /// engine's staleness check depends on them. Adapters may include tasks
    /// they want treated as forcibly completed (archived or done-list
    /// items).
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError`] when the underlying service cannot be
    /// queried.
    fn get_all_tasks(&self) -> TaskServiceResult<Vec<Box<dyn Task>>>;

    /// Task factory hook: returns a blank task with a fresh service-scoped
    /// identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError`] when the service cannot mint a task.
    fn make_task(&self) -> TaskServiceResult<Box<dyn Task>>;

    /// Creates a new task on this service seeded from `template`.
    ///
    /// The returned task carries the service's real identifier, the
    /// template's content fields, and [`SyncStatus::New`].
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError`] when the factory hook fails.
    fn create(&self, template: &dyn Task) -> TaskServiceResult<Box<dyn Task>> {
        let mut task = self.make_task()?;
        task.copy_fields(template, SyncStatus::New);
        Ok(task)
    }

    /// Persists the full task list after engine mutation.
    ///
    /// Implementations apply whatever create/update/delete calls are needed
    /// so that durable state matches the [`SyncStatus`] flag on each task.
    /// Persisting the same list twice in the absence of external change must
    /// produce no further effect.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError`] when writing to the underlying service
    /// fails.
    fn persist_tasks(&self, tasks: &[Box<dyn Task>]) -> TaskServiceResult<()>;
}

/// Errors returned by task service implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskServiceError {
    /// The requested task does not exist on the service.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// Failure in the adapter or the service behind it.
    #[error("task service backend error: {0}")]
    Backend(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskServiceError {
    /// Wraps a backend error.
    pub fn backend(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Backend(Arc::new(err))
    }
}
