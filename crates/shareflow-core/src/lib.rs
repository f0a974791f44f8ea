//! Shareflow Core
//!
//! Configuration model and validation for managed Windows file systems.
//! This crate is pure computation: it defines the typed configuration a
//! caller supplies, normalizes scheduled-time fields into the wire format
//! the provisioning engine expects, and validates every constrained field
//! before anything is submitted downstream.

pub mod error;
pub mod model;
pub mod schedule;
pub mod validate;

// Re-exports
pub use error::{Result, ScheduleError, ValidationError};
pub use model::{
    AuditLogConfig, AuditLogLevel, DeploymentTopology, DirectoryJoin, FileSystemConfig,
    SelfManagedDirectoryConfig, StorageMedium,
};
pub use schedule::{BackupStartTime, MaintenanceTime, Weekday};
pub use validate::{validate_config, validate_config_all};
