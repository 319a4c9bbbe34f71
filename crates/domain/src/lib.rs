//! # Domain
//!
//! The pure line-counting pipeline, free of I/O:
//!
//! - [`grid`]: Read-only RGB pixel grids
//! - [`classify`]: Black/non-black pixel classification
//! - [`probe`]: Per-column "any black pixel?" predicate
//! - [`counter`]: Edge-triggered counting of black-column runs
//!
//! Everything here operates on in-memory grids and is deterministic,
//! so it can be tested against synthetic images.

// crates/domain/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod classify;
pub mod counter;
pub mod grid;
pub mod probe;

pub use counter::count_vertical_lines;
pub use grid::{PixelGrid, Rgb, RgbGrid};
