// Rust guideline compliant 2026-10-17

//! Adapters (secondary ports) for the credit-scoring binary.
//!
//! Each sub-module implements a port trait defined in the `domain` crate.
//! Adapters are isolated from scoring logic.

pub mod csv_sink;
pub mod csv_source;
pub mod log_sink;
