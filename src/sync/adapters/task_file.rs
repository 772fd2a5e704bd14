//! JSON file backed task service.

use super::memory::apply_status;
use super::LocalTask;
use crate::sync::domain::Task;
use crate::sync::ports::{TaskService, TaskServiceError, TaskServiceResult};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Task service holding its whole collection in one JSON file.
///
/// Useful as either end of a sync without any remote service involved: bulk
/// task imports, fixtures, and demos. A missing file reads as an empty
/// collection; a present but malformed file is a backend error, never an
/// empty collection.
#[derive(Debug, Clone)]
pub struct JsonFileTaskService {
    path: PathBuf,
}

impl JsonFileTaskService {
    /// Creates a service reading and writing the given path.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the underlying file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_collection(&self) -> TaskServiceResult<Vec<LocalTask>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(TaskServiceError::backend(err)),
        };
        serde_json::from_str(&raw).map_err(TaskServiceError::backend)
    }

    fn write_collection(&self, tasks: &[LocalTask]) -> TaskServiceResult<()> {
        let rendered = serde_json::to_string_pretty(tasks).map_err(TaskServiceError::backend)?;
        fs::write(&self.path, rendered).map_err(TaskServiceError::backend)
    }
}

impl TaskService for JsonFileTaskService {
    fn get_all_tasks(&self) -> TaskServiceResult<Vec<Box<dyn Task>>> {
        Ok(self
            .read_collection()?
            .into_iter()
            .map(|task| Box::new(task) as Box<dyn Task>)
            .collect())
    }

    fn make_task(&self) -> TaskServiceResult<Box<dyn Task>> {
        Ok(Box::new(LocalTask::generate()))
    }

    fn persist_tasks(&self, tasks: &[Box<dyn Task>]) -> TaskServiceResult<()> {
        let mut collection = self.read_collection()?;
        for task in tasks {
            apply_status(&mut collection, task.as_ref());
        }
        self.write_collection(&collection)
    }
}
