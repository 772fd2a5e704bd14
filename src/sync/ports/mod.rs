//! Port contracts for external task services.

mod service;

pub use service::{TaskService, TaskServiceError, TaskServiceResult};
