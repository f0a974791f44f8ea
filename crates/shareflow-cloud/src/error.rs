//! Provisioning error types

use thiserror::Error;

/// Errors surfaced while building a file system.
#[derive(Error, Debug)]
pub enum CloudError {
    /// A configuration field failed validation. Raised before any side
    /// effect; no boundary or resource exists when this is returned.
    #[error("invalid configuration: {0}")]
    Validation(#[from] shareflow_core::ValidationError),

    /// Opaque failure from the provisioning engine, propagated unchanged
    /// and never retried here.
    #[error("provisioning engine error: {0}")]
    Engine(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CloudError>;
