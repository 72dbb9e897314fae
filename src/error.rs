//! Unified error handling for the plume crate
//!
//! Domain modules define their own error types ([`FetchError`],
//! [`DomError`], [`StorageError`]); this module consolidates them into a
//! single [`Error`] enum for use across module boundaries. Nothing here is
//! ever surfaced to a page visitor; per the failure contract, errors end
//! at the diagnostic stream.

use std::io;
use thiserror::Error;

pub use crate::dom::DomError;
pub use crate::fetch::FetchError;
pub use crate::storage::StorageError;

/// Unified error type for the plume crate
#[derive(Error, Debug)]
pub enum Error {
    /// Translation fetch errors (network, status, decode)
    #[error("fetch error: {0}")]
    Fetch(#[from] FetchError),

    /// Page write errors
    #[error("page error: {0}")]
    Dom(#[from] DomError),

    /// Selection store errors
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration errors
    #[error("config error: {0}")]
    Config(String),

    /// Generic error with context
    #[error("{context}")]
    Other {
        context: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl Error {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a generic error with context
    pub fn other(context: impl Into<String>) -> Self {
        Self::Other {
            context: context.into(),
            source: None,
        }
    }
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Self::Other {
            context: err.to_string(),
            source: None,
        }
    }
}

/// Result type alias using the unified Error type
pub type Result<T> = std::result::Result<T, Error>;
