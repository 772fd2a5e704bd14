//! Unit tests for the sync module, grouped per concern.

mod engine_recovery_tests;
mod mapping_tests;
