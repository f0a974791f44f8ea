//! Property tree assembly
//!
//! Typed mirror of the engine's wire shape. [`assemble_windows_configuration`]
//! is the normalization step between validation and submission: a pure
//! transform that copies straight-through fields, replaces the two
//! scheduled-time values with their canonical timestamps, and leaves unset
//! options absent from the serialized tree (never null-filled).

use serde::{Deserialize, Serialize};
use shareflow_core::{
    AuditLogLevel, DeploymentTopology, DirectoryJoin, FileSystemConfig, StorageMedium,
};

/// Wire value for the file system kind this crate provisions.
pub const FILE_SYSTEM_TYPE: &str = "WINDOWS";

/// Full request-level property tree submitted to the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FileSystemProperties {
    pub file_system_type: String,

    /// Deployment subnet, always a singleton list on the wire.
    pub subnet_ids: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub kms_key_id: Option<String>,

    /// Bound security boundary, singleton list on the wire.
    pub security_group_ids: Vec<String>,

    pub storage_capacity: u32,

    pub storage_type: StorageMedium,

    pub windows_configuration: WindowsConfiguration,
}

/// Windows-specific sub-configuration of the property tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct WindowsConfiguration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_directory_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub self_managed_active_directory_configuration: Option<SelfManagedAdProperties>,

    pub deployment_type: DeploymentTopology,

    pub throughput_capacity: u32,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_subnet_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub aliases: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub audit_log_configuration: Option<AuditLogProperties>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub automatic_backup_retention_days: Option<u32>,

    /// Canonical `"HH:MM"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub daily_automatic_backup_start_time: Option<String>,

    /// Canonical `"D:HH:MM"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weekly_maintenance_start_time: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SelfManagedAdProperties {
    pub dns_ips: Vec<String>,
    pub domain_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_system_administrators_group: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organizational_unit_distinguished_name: Option<String>,
    pub user_name: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AuditLogProperties {
    pub file_access_audit_log_level: AuditLogLevel,
    pub file_share_access_audit_log_level: AuditLogLevel,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audit_log_destination: Option<String>,
}

/// Assemble the Windows sub-configuration from a validated config.
///
/// Pure and total over any input that already passed validation; the
/// input is never mutated.
pub fn assemble_windows_configuration(config: &FileSystemConfig) -> WindowsConfiguration {
    let (active_directory_id, self_managed) = match &config.directory_join {
        Some(DirectoryJoin::Managed { directory_id }) => (Some(directory_id.clone()), None),
        Some(DirectoryJoin::SelfManaged(ad)) => (
            None,
            Some(SelfManagedAdProperties {
                dns_ips: ad.dns_ips.clone(),
                domain_name: ad.domain_name.clone(),
                file_system_administrators_group: ad.admins_group.clone(),
                organizational_unit_distinguished_name: ad.ou_distinguished_name.clone(),
                user_name: ad.username.clone(),
                password: ad.password.clone(),
            }),
        ),
        None => (None, None),
    };

    WindowsConfiguration {
        active_directory_id,
        self_managed_active_directory_configuration: self_managed,
        deployment_type: config.topology,
        throughput_capacity: config.throughput_capacity_mbps,
        preferred_subnet_id: config.preferred_subnet_id.clone(),
        aliases: config.dns_aliases.clone(),
        audit_log_configuration: config.audit_log.as_ref().map(|audit| AuditLogProperties {
            file_access_audit_log_level: audit.file_access_level,
            file_share_access_audit_log_level: audit.file_share_access_level,
            audit_log_destination: audit.destination_arn.clone(),
        }),
        automatic_backup_retention_days: config.backup_retention_days,
        daily_automatic_backup_start_time: config
            .daily_backup_start_time
            .as_ref()
            .map(|t| t.to_timestamp()),
        weekly_maintenance_start_time: config
            .weekly_maintenance_start_time
            .as_ref()
            .map(|t| t.to_timestamp()),
    }
}
