//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! This crate defines traits that abstract external concerns:
//!
//! - [`decoder`]: Turning an image file on disk into raw RGB pixels
//!
//! These ports allow the domain and application layers to remain
//! independent of any particular format library.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod decoder;
