//! Orchestration services for task synchronisation.

mod engine;

pub use engine::{SyncOptions, SyncRunError, SyncTaskError, TaskSync};
