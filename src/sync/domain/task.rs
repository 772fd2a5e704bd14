//! Service-agnostic task contract and its value types.

use super::{TaskDomainError, TaskId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Task difficulty rating.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    /// Barely worth tracking.
    Trivial,
    /// The default rating.
    #[default]
    Easy,
    /// Noticeably harder than the default.
    Medium,
    /// The hardest rating.
    Hard,
}

impl Difficulty {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Trivial => "trivial",
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }

    /// Returns the numeric weight carried by this rating.
    #[must_use]
    pub const fn weight(self) -> f32 {
        match self {
            Self::Trivial => 0.1,
            Self::Easy => 1.0,
            Self::Medium => 1.5,
            Self::Hard => 2.0,
        }
    }
}

impl TryFrom<&str> for Difficulty {
    type Error = TaskDomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "trivial" => Ok(Self::Trivial),
            "easy" => Ok(Self::Easy),
            "medium" => Ok(Self::Medium),
            "hard" => Ok(Self::Hard),
            _ => Err(TaskDomainError::InvalidDifficulty(value.to_owned())),
        }
    }
}

/// Category tag carried by a task.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Attribute {
    /// The default category.
    #[default]
    Strength,
    /// Mental work.
    Intelligence,
    /// Endurance work.
    Constitution,
    /// Observation work.
    Perception,
}

impl Attribute {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Strength => "strength",
            Self::Intelligence => "intelligence",
            Self::Constitution => "constitution",
            Self::Perception => "perception",
        }
    }
}

impl TryFrom<&str> for Attribute {
    type Error = TaskDomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "strength" => Ok(Self::Strength),
            "intelligence" => Ok(Self::Intelligence),
            "constitution" => Ok(Self::Constitution),
            "perception" => Ok(Self::Perception),
            _ => Err(TaskDomainError::InvalidAttribute(value.to_owned())),
        }
    }
}

/// Transient synchronisation hint attached to a task.
///
/// The hint tells the destination service what to do with the record during
/// the batched persist call; it is not part of the task's durable identity
/// and the engine mutates it freely.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SyncStatus {
    /// Created during this run; the destination has no record yet.
    New,
    /// Fields were copied from the source during this run.
    Updated,
    /// Untouched by this run.
    #[default]
    Unchanged,
    /// The source task vanished; the destination record should go.
    Deleted,
}

impl SyncStatus {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Updated => "updated",
            Self::Unchanged => "unchanged",
            Self::Deleted => "deleted",
        }
    }
}

impl TryFrom<&str> for SyncStatus {
    type Error = TaskDomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "new" => Ok(Self::New),
            "updated" => Ok(Self::Updated),
            "unchanged" => Ok(Self::Unchanged),
            "deleted" => Ok(Self::Deleted),
            _ => Err(TaskDomainError::InvalidSyncStatus(value.to_owned())),
        }
    }
}

/// One entry of a task checklist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistItem {
    /// Item text.
    pub text: String,
    /// Whether the item has been ticked off.
    pub checked: bool,
}

impl ChecklistItem {
    /// Creates a checklist item.
    #[must_use]
    pub fn new(text: impl Into<String>, checked: bool) -> Self {
        Self {
            text: text.into(),
            checked,
        }
    }
}

/// Normalised, service-agnostic view of a unit of work.
///
/// Each task service implements this contract by translating to and from its
/// native representation; the engine depends only on the contract, never on
/// a concrete task type. Writes to mutable fields may be deferred by the
/// implementation until the service's batch persist call.
pub trait Task {
    /// Service-scoped identifier, immutable after construction.
    fn id(&self) -> &TaskId;

    /// Task name.
    fn name(&self) -> &str;

    /// Replaces the task name.
    fn set_name(&mut self, name: String);

    /// Longer free-text description.
    fn description(&self) -> &str;

    /// Replaces the description.
    fn set_description(&mut self, description: String);

    /// Completion flag. Once true for a source task it is terminal for the
    /// sync cycle.
    fn completed(&self) -> bool;

    /// Sets the completion flag.
    fn set_completed(&mut self, completed: bool);

    /// Difficulty rating.
    fn difficulty(&self) -> Difficulty;

    /// Sets the difficulty rating.
    fn set_difficulty(&mut self, difficulty: Difficulty);

    /// Category tag.
    fn attribute(&self) -> Attribute;

    /// Sets the category tag.
    fn set_attribute(&mut self, attribute: Attribute);

    /// Optional due date, normalised to UTC.
    fn due_date(&self) -> Option<DateTime<Utc>>;

    /// Sets or clears the due date.
    fn set_due_date(&mut self, due_date: Option<DateTime<Utc>>);

    /// Last-modified timestamp in UTC. `None` means the task must always be
    /// considered changed.
    fn last_modified(&self) -> Option<DateTime<Utc>>;

    /// Ordered checklist; empty when the task has none.
    fn checklist(&self) -> &[ChecklistItem];

    /// Replaces the checklist.
    fn set_checklist(&mut self, checklist: Vec<ChecklistItem>);

    /// Current synchronisation hint.
    fn status(&self) -> SyncStatus;

    /// Sets the synchronisation hint.
    fn set_status(&mut self, status: SyncStatus);

    /// Overwrites all mutable content fields from `source` and records the
    /// supplied status. The identifier and last-modified timestamp are never
    /// copied.
    fn copy_fields(&mut self, source: &dyn Task, status: SyncStatus) {
        self.set_name(source.name().to_owned());
        self.set_description(source.description().to_owned());
        self.set_completed(source.completed());
        self.set_difficulty(source.difficulty());
        self.set_attribute(source.attribute());
        self.set_due_date(source.due_date());
        self.set_checklist(source.checklist().to_vec());
        self.set_status(status);
    }
}
