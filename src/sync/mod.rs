//! One-way task synchronisation between two task-tracking services.
//!
//! The engine mirrors open and recently-completed work items from a source
//! service into a destination service, bridged by a persisted one-to-one
//! identifier map. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - The reconciliation engine in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
