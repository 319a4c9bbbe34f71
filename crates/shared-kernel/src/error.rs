// crates/shared-kernel/src/error.rs
use std::path::PathBuf;

use thiserror::Error;

/// Root error type shared across the workspace.
#[derive(Debug, Error)]
pub enum VlinesError {
    /// Adds human context while preserving the original error as the source.
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<VlinesError>,
    },

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Infrastructure error: {0}")]
    Infrastructure(#[from] InfrastructureError),
}

pub type Result<T> = std::result::Result<T, VlinesError>;

impl VlinesError {
    /// Strip `Context` wrappers and return the underlying error.
    pub fn root_cause(&self) -> &VlinesError {
        let mut err = self;
        while let VlinesError::Context { source, .. } = err {
            err = source;
        }
        err
    }
}

/// Domain-layer specific errors.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error(
        "pixel buffer for a {width}x{height} image must hold {expected} bytes, got {actual}"
    )]
    PixelBufferMismatch {
        width: usize,
        height: usize,
        expected: usize,
        actual: usize,
    },
}

pub type DomainResult<T> = std::result::Result<T, DomainError>;

/// Infrastructure-layer errors. The variants mirror the distinct failure
/// kinds the driver reports for image input.
#[derive(Debug, Error)]
pub enum InfrastructureError {
    #[error("The file does not exist at the specified path: {path}")]
    ImageNotFound { path: PathBuf },

    #[error("The application lacks permission to read this file: {path}")]
    ImageAccessDenied { path: PathBuf },

    #[error("The file format is not supported or the file is corrupted: {path} ({details})")]
    ImageUnsupported { path: PathBuf, details: String },

    #[error("Failed to read the image file '{path}': {source}")]
    ImageRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type InfraResult<T> = std::result::Result<T, InfrastructureError>;

/// Extension trait to add additional context to results.
pub trait ErrorContext<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: Into<VlinesError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| VlinesError::Context {
            context: context.into(),
            source: Box::new(e.into()),
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| VlinesError::Context {
            context: f(),
            source: Box::new(e.into()),
        })
    }
}
