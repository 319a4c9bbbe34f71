// crates/shared-kernel/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub use error::{
    DomainError, DomainResult, ErrorContext, InfraResult, InfrastructureError, Result, VlinesError,
};

pub mod error;
pub mod path;
pub mod value_objects;

pub use value_objects::LineCount;
