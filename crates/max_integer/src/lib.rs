// Rust guideline compliant 2026-10-15

//! Max-integer service: storage adapters, configuration and HTTP transport.
//!
//! The binary in `main.rs` wires these to the `usecase` crate. Everything
//! here is an outer adapter; calculation and validation live in their own
//! crates and never see HTTP or SQL.

pub mod adapters;
pub mod config;
pub mod http;
pub mod startup;
