//! Validation error types

use thiserror::Error;

/// A single-field or cross-field configuration violation.
///
/// Each variant names the field it covers and the rule that was broken;
/// the `Display` form is the message surfaced to the caller.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("throughput capacity must be a power of 2 between 8 and 4096 MB/s, got {0}")]
    ThroughputCapacity(u32),

    #[error("storage capacity must be between 32 and 65536 GiB, got {0}")]
    StorageCapacity(u32),

    #[error("directory service id '{0}' must match d- followed by 10 hex digits")]
    DirectoryId(String),

    #[error("at most 50 DNS aliases are supported, got {0}")]
    DnsAliases(usize),

    #[error("preferred subnet id is required for multi-AZ deployments")]
    PreferredSubnetRequired,

    #[error("at most 3 DNS server IPs are supported, got {0}")]
    DnsIps(usize),

    #[error("{field} must be 1-{max} characters with no line or paragraph separators")]
    Text { field: &'static str, max: usize },

    #[error("service account password must be 1-256 characters")]
    Password,

    #[error("audit log destination '{0}' is not a valid ARN")]
    AuditLogDestination(String),

    #[error("backup retention must be between 0 and 90 days, got {0}")]
    BackupRetention(u32),
}

/// Out-of-range component in a scheduled-time value.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("hour must be between 0 and 24, got {0}")]
    HourOutOfRange(u8),

    #[error("minute must be between 0 and 59, got {0}")]
    MinuteOutOfRange(u8),
}

pub type Result<T> = std::result::Result<T, ValidationError>;
