//! # Use Cases
//!
//! Application-level orchestration logic.
//!
//! This crate coordinates domain logic and infrastructure adapters
//! to implement the single use case of the tool:
//!
//! - [`orchestrator`]: Decode an image through a port and count its lines
//!
//! Use cases depend on both domain and ports, but not on infrastructure.

// crates/usecase/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod orchestrator;

pub use orchestrator::CountImageLines;
