// Rust guideline compliant 2026-10-14

//! Adapters (secondary ports) for the max-integer service.
//!
//! Each sub-module implements the `OperationStorage` port defined in the
//! `domain` crate. Adapters are isolated from calculation and use-case logic.

pub mod in_memory_storage;
pub mod sqlite_storage;

pub use in_memory_storage::InMemoryStorage;
pub use sqlite_storage::SqliteStorage;
