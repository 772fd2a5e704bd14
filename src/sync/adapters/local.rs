//! Owned task record used by the bundled in-process adapters.

use crate::sync::domain::{Attribute, ChecklistItem, Difficulty, SyncStatus, Task, TaskId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Concrete [`Task`] implementation backed by plain owned fields.
///
/// Serves as the record type of the in-memory and JSON-file services and as
/// a convenient task builder in tests. Remote-service adapters would
/// implement [`Task`] over their own wire representation instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalTask {
    id: TaskId,
    name: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    completed: bool,
    #[serde(default)]
    difficulty: Difficulty,
    #[serde(default)]
    attribute: Attribute,
    #[serde(default)]
    due_date: Option<DateTime<Utc>>,
    #[serde(default)]
    last_modified: Option<DateTime<Utc>>,
    #[serde(default)]
    checklist: Vec<ChecklistItem>,
    #[serde(default)]
    status: SyncStatus,
}

impl LocalTask {
    /// Creates a blank task with the given identifier.
    #[must_use]
    pub fn new(id: impl Into<TaskId>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            description: String::new(),
            completed: false,
            difficulty: Difficulty::default(),
            attribute: Attribute::default(),
            due_date: None,
            last_modified: None,
            checklist: Vec::new(),
            status: SyncStatus::default(),
        }
    }

    /// Creates a blank task with a freshly minted identifier.
    #[must_use]
    pub fn generate() -> Self {
        Self::new(Uuid::new_v4().to_string())
    }

    /// Sets the task name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the completion flag.
    #[must_use]
    pub const fn with_completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }

    /// Sets the difficulty rating.
    #[must_use]
    pub const fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Sets the category tag.
    #[must_use]
    pub const fn with_attribute(mut self, attribute: Attribute) -> Self {
        self.attribute = attribute;
        self
    }

    /// Sets the due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: Option<DateTime<Utc>>) -> Self {
        self.due_date = due_date;
        self
    }

    /// Sets the last-modified timestamp.
    #[must_use]
    pub const fn with_last_modified(mut self, last_modified: Option<DateTime<Utc>>) -> Self {
        self.last_modified = last_modified;
        self
    }

    /// Sets the checklist.
    #[must_use]
    pub fn with_checklist(mut self, checklist: impl IntoIterator<Item = ChecklistItem>) -> Self {
        self.checklist = checklist.into_iter().collect();
        self
    }

    /// Sets the synchronisation hint.
    #[must_use]
    pub const fn with_status(mut self, status: SyncStatus) -> Self {
        self.status = status;
        self
    }

    /// Builds a detached snapshot of any [`Task`], carrying over its
    /// identifier, last-modified timestamp, and status.
    #[must_use]
    pub fn snapshot_of(task: &dyn Task) -> Self {
        let mut snapshot = Self::new(task.id().clone()).with_last_modified(task.last_modified());
        snapshot.copy_fields(task, task.status());
        snapshot
    }
}

impl Task for LocalTask {
    fn id(&self) -> &TaskId {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn set_name(&mut self, name: String) {
        self.name = name;
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn set_description(&mut self, description: String) {
        self.description = description;
    }

    fn completed(&self) -> bool {
        self.completed
    }

    fn set_completed(&mut self, completed: bool) {
        self.completed = completed;
    }

    fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
    }

    fn attribute(&self) -> Attribute {
        self.attribute
    }

    fn set_attribute(&mut self, attribute: Attribute) {
        self.attribute = attribute;
    }

    fn due_date(&self) -> Option<DateTime<Utc>> {
        self.due_date
    }

    fn set_due_date(&mut self, due_date: Option<DateTime<Utc>>) {
        self.due_date = due_date;
    }

    fn last_modified(&self) -> Option<DateTime<Utc>> {
        self.last_modified
    }

    fn checklist(&self) -> &[ChecklistItem] {
        &self.checklist
    }

    fn set_checklist(&mut self, checklist: Vec<ChecklistItem>) {
        self.checklist = checklist;
    }

    fn status(&self) -> SyncStatus {
        self.status
    }

    fn set_status(&mut self, status: SyncStatus) {
        self.status = status;
    }
}
