//! Taskbridge: one-way synchronisation of task records between two
//! independent task-tracking services.
//!
//! The crate keeps a destination service as a faithful, incrementally
//! updated mirror of a source service's open and recently-completed work
//! items. At its centre sits a stateful, idempotent, partial-failure-
//! tolerant diffing engine over two unordered task collections, bridged by
//! a persisted one-to-one identifier map.
//!
//! # Architecture
//!
//! Taskbridge follows hexagonal architecture principles:
//!
//! - **Domain**: the service-agnostic task contract, the bijective
//!   identifier map, and run statistics
//! - **Ports**: the `TaskService` trait each tracker adapter implements
//! - **Adapters**: bundled in-process implementations (in-memory and
//!   JSON-file) and the durable store for the map
//! - **Services**: the `TaskSync` reconciliation engine
//!
//! # Modules
//!
//! - [`sync`]: the task synchronisation engine and its collaborators
//! - [`logging`]: optional tracing bootstrap for embedders

pub mod logging;
pub mod sync;
