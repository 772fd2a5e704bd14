//! Per-run synchronisation statistics.

use chrono::TimeDelta;
use std::fmt;

/// Counters and timing for one synchronisation run.
///
/// Produced fresh each run and never persisted; suitable for logging or
/// user notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyncStats {
    /// Tasks left untouched (stale watermark or unresolvable mapping).
    pub skipped: u64,
    /// Destination tasks created.
    pub created: u64,
    /// Destination tasks whose fields were refreshed.
    pub updated: u64,
    /// Destination tasks brought to a completed state.
    pub completed: u64,
    /// Destination tasks flagged for removal.
    pub deleted: u64,
    /// Tasks whose processing failed without aborting the run.
    pub errors: u64,
    /// Wall-clock duration of the run.
    pub duration: TimeDelta,
}

impl SyncStats {
    /// Total number of tasks the run changed in some way.
    #[must_use]
    pub const fn total_changed(&self) -> u64 {
        self.created + self.updated + self.completed + self.deleted
    }
}

impl Default for SyncStats {
    fn default() -> Self {
        Self {
            skipped: 0,
            created: 0,
            updated: 0,
            completed: 0,
            deleted: 0,
            errors: 0,
            duration: TimeDelta::zero(),
        }
    }
}

impl fmt::Display for SyncStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "tasks skipped: {}", self.skipped)?;
        writeln!(f, "tasks created: {}", self.created)?;
        writeln!(f, "tasks updated: {}", self.updated)?;
        writeln!(f, "tasks completed: {}", self.completed)?;
        writeln!(f, "tasks deleted: {}", self.deleted)?;
        writeln!(f, "tasks errored: {}", self.errors)?;
        write!(f, "sync duration: {}ms", self.duration.num_milliseconds())
    }
}
