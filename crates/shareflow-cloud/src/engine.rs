//! Provisioning engine trait definition

use crate::error::Result;
use crate::network::{SecurityBoundary, SecurityBoundaryRequest};
use crate::props::FileSystemProperties;
use serde::{Deserialize, Serialize};

/// What happens to the underlying resource when it is removed from
/// management.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RemovalPolicy {
    Retain,
    Delete,
}

/// External provisioning engine abstraction.
///
/// The engine accepts an assembled property tree and materializes the
/// actual managed resource. Both calls block; failures are surfaced as
/// [`crate::CloudError::Engine`] and are never retried at this layer —
/// the engine's own idempotency semantics govern retries.
pub trait ProvisioningEngine: Send + Sync {
    /// Engine name for diagnostics (e.g. "cloudformation").
    fn name(&self) -> &str;

    /// Create a security boundary from the given request.
    fn create_security_boundary(
        &self,
        request: &SecurityBoundaryRequest,
    ) -> Result<SecurityBoundary>;

    /// Submit an assembled file system request, returning the engine's
    /// assigned identifier.
    fn create_file_system(&self, request: &FileSystemRequest) -> Result<ProvisionedFileSystem>;
}

/// Everything the engine needs to materialize one file system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileSystemRequest {
    pub properties: FileSystemProperties,
    pub removal_policy: RemovalPolicy,
}

impl FileSystemRequest {
    /// Wire form of the request, as the engine sees it.
    pub fn to_value(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }
}

/// Identifier assigned by the engine once it accepts a request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProvisionedFileSystem {
    pub file_system_id: String,
}
