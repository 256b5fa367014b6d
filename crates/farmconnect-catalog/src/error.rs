//! # Catalog Error Types
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  std::io::Error / serde_json::Error                                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  CatalogError (this module)                                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  PortalError (in app) ← startup fails, nothing is served               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use farmconnect_core::Role;
use thiserror::Error;

/// Dataset loading errors.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The dataset file could not be read.
    #[error("Failed to read dataset {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The dataset is not valid JSON or does not match the record shapes.
    #[error("Invalid dataset: {0}")]
    Parse(#[from] serde_json::Error),

    /// A role has no overview stats, so its dashboard would open empty.
    #[error("Dataset has no overview for the {0} portal")]
    MissingRole(Role),
}

/// Result type for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;
