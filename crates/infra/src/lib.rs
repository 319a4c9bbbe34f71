// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod decoder;

pub use decoder::FileImageDecoder;
