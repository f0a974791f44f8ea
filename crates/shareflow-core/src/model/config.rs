//! Top-level file system configuration

use crate::model::{AuditLogConfig, DirectoryJoin};
use crate::schedule::{BackupStartTime, MaintenanceTime};
use serde::{Deserialize, Serialize};

/// Deployment redundancy mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeploymentTopology {
    /// Multi-AZ high availability with a standby file server.
    #[serde(rename = "MULTI_AZ_1")]
    MultiAz1,
    /// Original single-AZ generation.
    #[serde(rename = "SINGLE_AZ_1")]
    SingleAz1,
    /// Current single-AZ generation.
    #[serde(rename = "SINGLE_AZ_2")]
    SingleAz2,
}

/// Backing storage medium.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StorageMedium {
    Ssd,
    Hdd,
}

/// Caller-supplied configuration for a managed Windows file system.
///
/// Optional fields that stay `None` are omitted from the assembled
/// property tree entirely.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileSystemConfig {
    pub topology: DeploymentTopology,

    pub storage_medium: StorageMedium,

    /// Sustained throughput in MB/s. Must be a power of two in 8..=4096.
    pub throughput_capacity_mbps: u32,

    /// Storage capacity in GiB. Must be in 32..=65536.
    pub storage_capacity_gib: u32,

    /// Directory to join the file system to, managed or self-managed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub directory_join: Option<DirectoryJoin>,

    /// DNS aliases (CNAMEs) for the file system endpoint, at most 50.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dns_aliases: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub audit_log: Option<AuditLogConfig>,

    /// Automatic backup retention in days, 0..=90.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_retention_days: Option<u32>,

    /// Subnet hosting the active file server. Required for multi-AZ.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_subnet_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub daily_backup_start_time: Option<BackupStartTime>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub weekly_maintenance_start_time: Option<MaintenanceTime>,
}

impl FileSystemConfig {
    /// Create a configuration with the required fields set and every
    /// optional field absent.
    pub fn new(
        topology: DeploymentTopology,
        storage_medium: StorageMedium,
        throughput_capacity_mbps: u32,
        storage_capacity_gib: u32,
    ) -> Self {
        Self {
            topology,
            storage_medium,
            throughput_capacity_mbps,
            storage_capacity_gib,
            directory_join: None,
            dns_aliases: None,
            audit_log: None,
            backup_retention_days: None,
            preferred_subnet_id: None,
            daily_backup_start_time: None,
            weekly_maintenance_start_time: None,
        }
    }
}
