//! Shareflow Cloud
//!
//! Provisioning layer for managed Windows file systems. Takes a validated
//! [`shareflow_core::FileSystemConfig`], assembles the property tree the
//! provisioning engine consumes, resolves the network boundary that lets
//! clients reach the file system, and hands back a [`FileSystemHandle`]
//! once the engine has assigned an identifier.
//!
//! ```text
//! FileSystemConfig ──validate──▶ property tree ──▶ ProvisioningEngine
//!                                                        │
//!                         FileSystemHandle ◀──identifier─┘
//! ```
//!
//! The engine itself is external; this crate only speaks to it through
//! the [`ProvisioningEngine`] trait.

pub mod builder;
pub mod engine;
pub mod error;
pub mod network;
pub mod props;

// Re-exports
pub use builder::{
    DeploymentContext, ExistingFileSystemAttributes, FileSystemHandle, NetworkPlacement,
    adopt_file_system, provision_file_system,
};
pub use engine::{FileSystemRequest, ProvisionedFileSystem, ProvisioningEngine, RemovalPolicy};
pub use error::{CloudError, Result};
pub use network::{
    FILE_SYSTEM_PORTS, IngressRule, NetworkReachability, Protocol, SecurityBoundary,
    SecurityBoundaryRequest, self_referencing_boundary_request,
};
pub use props::{
    AuditLogProperties, FileSystemProperties, SelfManagedAdProperties, WindowsConfiguration,
    assemble_windows_configuration,
};
