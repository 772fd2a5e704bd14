//! Bundled in-process adapters.
//!
//! These adapters satisfy the [`TaskService`](crate::sync::ports::TaskService)
//! port without any network access: an in-memory store and a JSON-file
//! store, both over the owned [`LocalTask`] record, plus the durable store
//! for the identifier map. Remote-service adapters live outside this crate
//! and implement the same port.

mod local;
mod map_file;
mod memory;
mod task_file;

pub use local::LocalTask;
pub use map_file::{FileTaskMapStore, MapStoreError};
pub use memory::InMemoryTaskService;
pub use task_file::JsonFileTaskService;
