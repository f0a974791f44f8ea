//! File system builder
//!
//! Top-level orchestration: validate the configuration, resolve the
//! security boundary, assemble the property tree, submit it to the
//! provisioning engine, and compose the caller-facing handle from the
//! engine's assigned identifier.

use crate::engine::{FileSystemRequest, ProvisioningEngine, RemovalPolicy};
use crate::error::Result;
use crate::network::{NetworkReachability, SecurityBoundary, self_referencing_boundary_request};
use crate::props::{FILE_SYSTEM_TYPE, FileSystemProperties, assemble_windows_configuration};
use shareflow_core::{FileSystemConfig, validate_config};

/// Where the file system lands in the network.
#[derive(Debug, Clone)]
pub struct NetworkPlacement {
    pub vpc_id: String,

    /// Deployment subnet. Submitted to the engine as a singleton list.
    pub subnet_id: String,
}

/// Deployment-side inputs that are not part of the file system
/// configuration itself.
#[derive(Debug, Clone)]
pub struct DeploymentContext {
    pub placement: NetworkPlacement,

    /// Region used when composing the endpoint name.
    pub region: String,

    /// DNS suffix used when composing the endpoint name, e.g.
    /// `amazonaws.com`.
    pub domain_suffix: String,

    /// Pre-existing boundary to bind instead of creating one.
    pub security_boundary: Option<SecurityBoundary>,

    /// Encryption key for data at rest; the engine's default key applies
    /// when unset.
    pub kms_key_id: Option<String>,

    /// Backup to restore the file system from.
    pub backup_id: Option<String>,

    pub removal_policy: RemovalPolicy,
}

/// Caller-facing handle for a file system, provisioned or adopted.
///
/// Immutable once returned; the same shape comes out of both
/// [`provision_file_system`] and [`adopt_file_system`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSystemHandle {
    /// DNS name clients mount, `<id>.fsx.<region>.<domain-suffix>`.
    pub endpoint_name: String,

    /// Engine-assigned identifier.
    pub file_system_id: String,

    pub reachability: NetworkReachability,
}

/// Attributes of a file system that already exists outside this tool.
#[derive(Debug, Clone)]
pub struct ExistingFileSystemAttributes {
    pub endpoint_name: String,
    pub file_system_id: String,
    pub security_boundary: SecurityBoundary,
}

/// Validate, assemble, and provision a new file system.
///
/// Validation runs first and fails on the first violation; nothing is
/// created when it fails. On success exactly one boundary (new or the
/// caller's) is bound and one file system is created. An engine failure
/// after boundary creation is propagated without rollback.
pub fn provision_file_system(
    engine: &dyn ProvisioningEngine,
    config: &FileSystemConfig,
    context: &DeploymentContext,
) -> Result<FileSystemHandle> {
    validate_config(config)?;

    let boundary = match &context.security_boundary {
        Some(existing) => {
            tracing::debug!("Reusing security boundary {}", existing.id);
            existing.clone()
        }
        None => {
            let request = self_referencing_boundary_request(&context.placement.vpc_id);
            let boundary = engine.create_security_boundary(&request)?;
            tracing::debug!("Created security boundary {}", boundary.id);
            boundary
        }
    };

    let request = FileSystemRequest {
        properties: FileSystemProperties {
            file_system_type: FILE_SYSTEM_TYPE.to_string(),
            subnet_ids: vec![context.placement.subnet_id.clone()],
            backup_id: context.backup_id.clone(),
            kms_key_id: context.kms_key_id.clone(),
            security_group_ids: vec![boundary.id.clone()],
            storage_capacity: config.storage_capacity_gib,
            storage_type: config.storage_medium,
            windows_configuration: assemble_windows_configuration(config),
        },
        removal_policy: context.removal_policy,
    };

    let provisioned = engine.create_file_system(&request)?;
    tracing::info!(
        "Provisioned file system {} via {}",
        provisioned.file_system_id,
        engine.name()
    );

    Ok(FileSystemHandle {
        endpoint_name: endpoint_name(
            &provisioned.file_system_id,
            &context.region,
            &context.domain_suffix,
        ),
        file_system_id: provisioned.file_system_id,
        reachability: NetworkReachability::for_boundary(boundary),
    })
}

/// Wrap a file system that already exists.
///
/// No validation runs and the engine is never called; the supplied
/// attributes are taken as-is.
pub fn adopt_file_system(attributes: ExistingFileSystemAttributes) -> FileSystemHandle {
    FileSystemHandle {
        endpoint_name: attributes.endpoint_name,
        file_system_id: attributes.file_system_id,
        reachability: NetworkReachability::for_boundary(attributes.security_boundary),
    }
}

fn endpoint_name(file_system_id: &str, region: &str, domain_suffix: &str) -> String {
    format!("{file_system_id}.fsx.{region}.{domain_suffix}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_name_template() {
        assert_eq!(
            endpoint_name("fs-0123", "us-east-1", "amazonaws.com"),
            "fs-0123.fsx.us-east-1.amazonaws.com"
        );
    }

    #[test]
    fn test_adopt_wraps_attributes_verbatim() {
        let handle = adopt_file_system(ExistingFileSystemAttributes {
            endpoint_name: "fs-9.fsx.eu-west-1.amazonaws.com".to_string(),
            file_system_id: "fs-9".to_string(),
            security_boundary: SecurityBoundary::new("sb-7"),
        });
        assert_eq!(handle.endpoint_name, "fs-9.fsx.eu-west-1.amazonaws.com");
        assert_eq!(handle.file_system_id, "fs-9");
        assert_eq!(handle.reachability.boundary.id, "sb-7");
        assert_eq!(handle.reachability.from_port, 988);
        assert_eq!(handle.reachability.to_port, 1023);
    }
}
