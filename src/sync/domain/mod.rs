//! Domain model for task synchronisation.
//!
//! The domain covers the service-agnostic task contract, the bijective
//! source-to-destination identifier map, and per-run statistics, keeping all
//! infrastructure concerns outside of the domain boundary.

mod error;
mod ids;
mod mapping;
mod stats;
mod task;

pub use error::TaskDomainError;
pub use ids::TaskId;
pub use mapping::{TaskMap, TaskMapError, TaskMapResult};
pub use stats::SyncStats;
pub use task::{Attribute, ChecklistItem, Difficulty, SyncStatus, Task};
