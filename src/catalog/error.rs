//! Error types for catalog loading.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading the parameter catalog.
///
/// A load failure is fatal for the owning host: the error is kept and
/// re-surfaced on every later request, so the variants store plain
/// strings and stay `Clone`.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// The catalog source could not be read.
    #[error("failed to read catalog {}: {message}", .path.display())]
    Read { path: PathBuf, message: String },

    /// The catalog source is not well-formed.
    #[error("malformed catalog: {message}")]
    Parse { message: String },
}

impl CatalogError {
    /// Create a read error.
    pub fn read(path: PathBuf, message: impl Into<String>) -> Self {
        Self::Read {
            path,
            message: message.into(),
        }
    }

    /// Create a parse error.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }
}
