//! Field validators
//!
//! One narrow predicate per constrained field, plus two aggregates over a
//! whole [`FileSystemConfig`]: [`validate_config`] stops at the first
//! violation (the behavior the builder relies on), and
//! [`validate_config_all`] collects every violation for callers that want
//! the full picture up front.
//!
//! Every validator is pure and has no side effects; validation always
//! precedes resource assembly.

use crate::error::{Result, ValidationError};
use crate::model::{DeploymentTopology, DirectoryJoin, FileSystemConfig, SelfManagedDirectoryConfig};
use regex::Regex;
use std::sync::LazyLock;

static DIRECTORY_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^d-[0-9a-f]{10}$").expect("valid directory id pattern"));

// arn:<partition>:<service>:<region>:<account-or-empty>:<resource>, where
// the resource segment may itself contain colons but must not start with
// a slash.
static ARN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^arn:[^:]+:[^:]+:[^:]+:[^:]*:[^/].*$").expect("valid ARN pattern")
});

const MAX_DNS_ALIASES: usize = 50;
const MAX_DNS_IPS: usize = 3;
const MAX_RETENTION_DAYS: u32 = 90;

/// Throughput must be a power of 2 in 8..=4096 MB/s.
pub fn validate_throughput_capacity(mbps: u32) -> Result<()> {
    if !(8..=4096).contains(&mbps) || !mbps.is_power_of_two() {
        return Err(ValidationError::ThroughputCapacity(mbps));
    }
    Ok(())
}

/// Storage capacity must be in 32..=65536 GiB.
pub fn validate_storage_capacity(gib: u32) -> Result<()> {
    if !(32..=65536).contains(&gib) {
        return Err(ValidationError::StorageCapacity(gib));
    }
    Ok(())
}

/// Managed directory ids look like `d-0123456789`.
pub fn validate_directory_id(id: &str) -> Result<()> {
    if !DIRECTORY_ID_RE.is_match(id) {
        return Err(ValidationError::DirectoryId(id.to_string()));
    }
    Ok(())
}

pub fn validate_dns_aliases(aliases: &[String]) -> Result<()> {
    if aliases.len() > MAX_DNS_ALIASES {
        return Err(ValidationError::DnsAliases(aliases.len()));
    }
    Ok(())
}

/// Multi-AZ deployments need a preferred subnet for the active file
/// server. Other topologies may carry one but never require it.
pub fn validate_preferred_subnet(
    topology: DeploymentTopology,
    subnet_id: Option<&str>,
) -> Result<()> {
    if topology == DeploymentTopology::MultiAz1 && subnet_id.is_none() {
        return Err(ValidationError::PreferredSubnetRequired);
    }
    Ok(())
}

pub fn validate_dns_ips(ips: &[String]) -> Result<()> {
    if ips.len() > MAX_DNS_IPS {
        return Err(ValidationError::DnsIps(ips.len()));
    }
    Ok(())
}

pub fn validate_domain_name(name: &str) -> Result<()> {
    check_plain_text("domain name", name, 255)
}

pub fn validate_admins_group(group: &str) -> Result<()> {
    check_plain_text("administrators group", group, 256)
}

pub fn validate_ou_distinguished_name(dn: &str) -> Result<()> {
    check_plain_text("organizational unit distinguished name", dn, 2000)
}

/// Passwords only have a length bound; any characters are allowed.
pub fn validate_password(password: &str) -> Result<()> {
    let len = password.chars().count();
    if len == 0 || len > 256 {
        return Err(ValidationError::Password);
    }
    Ok(())
}

pub fn validate_username(username: &str) -> Result<()> {
    check_plain_text("service account username", username, 256)
}

pub fn validate_audit_destination(arn: &str) -> Result<()> {
    if !ARN_RE.is_match(arn) {
        return Err(ValidationError::AuditLogDestination(arn.to_string()));
    }
    Ok(())
}

pub fn validate_backup_retention(days: u32) -> Result<()> {
    if days > MAX_RETENTION_DAYS {
        return Err(ValidationError::BackupRetention(days));
    }
    Ok(())
}

/// Validate a whole configuration, stopping at the first violation.
///
/// The order is fixed: capacity fields, topology/subnet, aliases,
/// retention, audit destination, then the directory-join fields. Callers
/// only ever see the first failing rule per attempt; use
/// [`validate_config_all`] to surface everything at once.
pub fn validate_config(config: &FileSystemConfig) -> Result<()> {
    validate_throughput_capacity(config.throughput_capacity_mbps)?;
    validate_storage_capacity(config.storage_capacity_gib)?;
    validate_preferred_subnet(config.topology, config.preferred_subnet_id.as_deref())?;
    if let Some(aliases) = &config.dns_aliases {
        validate_dns_aliases(aliases)?;
    }
    if let Some(days) = config.backup_retention_days {
        validate_backup_retention(days)?;
    }
    if let Some(audit) = &config.audit_log {
        if let Some(arn) = &audit.destination_arn {
            validate_audit_destination(arn)?;
        }
    }
    match &config.directory_join {
        Some(DirectoryJoin::Managed { directory_id }) => validate_directory_id(directory_id)?,
        Some(DirectoryJoin::SelfManaged(ad)) => validate_self_managed(ad)?,
        None => {}
    }
    Ok(())
}

/// Validate a whole configuration and collect every violation, in the
/// same order [`validate_config`] checks them. Empty means valid.
pub fn validate_config_all(config: &FileSystemConfig) -> Vec<ValidationError> {
    let mut violations = Vec::new();
    let mut record = |result: Result<()>| {
        if let Err(violation) = result {
            violations.push(violation);
        }
    };

    record(validate_throughput_capacity(config.throughput_capacity_mbps));
    record(validate_storage_capacity(config.storage_capacity_gib));
    record(validate_preferred_subnet(
        config.topology,
        config.preferred_subnet_id.as_deref(),
    ));
    if let Some(aliases) = &config.dns_aliases {
        record(validate_dns_aliases(aliases));
    }
    if let Some(days) = config.backup_retention_days {
        record(validate_backup_retention(days));
    }
    if let Some(audit) = &config.audit_log {
        if let Some(arn) = &audit.destination_arn {
            record(validate_audit_destination(arn));
        }
    }
    match &config.directory_join {
        Some(DirectoryJoin::Managed { directory_id }) => {
            record(validate_directory_id(directory_id));
        }
        Some(DirectoryJoin::SelfManaged(ad)) => {
            record(validate_dns_ips(&ad.dns_ips));
            record(validate_domain_name(&ad.domain_name));
            if let Some(group) = &ad.admins_group {
                record(validate_admins_group(group));
            }
            if let Some(dn) = &ad.ou_distinguished_name {
                record(validate_ou_distinguished_name(dn));
            }
            record(validate_username(&ad.username));
            record(validate_password(&ad.password));
        }
        None => {}
    }

    violations
}

fn validate_self_managed(ad: &SelfManagedDirectoryConfig) -> Result<()> {
    validate_dns_ips(&ad.dns_ips)?;
    validate_domain_name(&ad.domain_name)?;
    if let Some(group) = &ad.admins_group {
        validate_admins_group(group)?;
    }
    if let Some(dn) = &ad.ou_distinguished_name {
        validate_ou_distinguished_name(dn)?;
    }
    validate_username(&ad.username)?;
    validate_password(&ad.password)?;
    Ok(())
}

/// Length 1..=max and no line or paragraph separators.
fn check_plain_text(field: &'static str, value: &str, max: usize) -> Result<()> {
    let len = value.chars().count();
    if len == 0 || len > max || has_line_break(value) {
        return Err(ValidationError::Text { field, max });
    }
    Ok(())
}

fn has_line_break(value: &str) -> bool {
    value
        .chars()
        .any(|c| matches!(c, '\n' | '\r' | '\u{0085}' | '\u{2028}' | '\u{2029}'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AuditLogConfig, StorageMedium};

    fn base_config() -> FileSystemConfig {
        FileSystemConfig::new(DeploymentTopology::SingleAz2, StorageMedium::Ssd, 32, 1200)
    }

    fn self_managed() -> SelfManagedDirectoryConfig {
        SelfManagedDirectoryConfig {
            dns_ips: vec!["10.0.0.2".to_string()],
            domain_name: "corp.example.com".to_string(),
            admins_group: None,
            ou_distinguished_name: None,
            username: "svc-fsx".to_string(),
            password: "hunter22".to_string(),
        }
    }

    #[test]
    fn test_throughput_accepts_powers_of_two_in_range() {
        for mbps in [8u32, 16, 32, 64, 128, 256, 512, 1024, 2048, 4096] {
            assert!(validate_throughput_capacity(mbps).is_ok(), "{mbps}");
        }
    }

    #[test]
    fn test_throughput_rejects_everything_else() {
        for mbps in [0u32, 1, 4, 7, 9, 12, 100, 3000, 4097, 8192] {
            assert!(validate_throughput_capacity(mbps).is_err(), "{mbps}");
        }
    }

    #[test]
    fn test_storage_capacity_bounds() {
        assert!(validate_storage_capacity(32).is_ok());
        assert!(validate_storage_capacity(65536).is_ok());
        assert!(validate_storage_capacity(1200).is_ok());
        assert!(validate_storage_capacity(31).is_err());
        assert!(validate_storage_capacity(65537).is_err());
        assert!(validate_storage_capacity(0).is_err());
    }

    #[test]
    fn test_directory_id_format() {
        assert!(validate_directory_id("d-0123456789").is_ok());
        assert!(validate_directory_id("d-abcdef0123").is_ok());
        assert!(validate_directory_id("d-012345678").is_err()); // 9 digits
        assert!(validate_directory_id("d-01234567890").is_err()); // 11 digits
        assert!(validate_directory_id("d-012345678g").is_err()); // not hex
        assert!(validate_directory_id("x-0123456789").is_err());
    }

    #[test]
    fn test_dns_alias_count() {
        let fifty: Vec<String> = (0..50).map(|i| format!("alias{i}")).collect();
        assert!(validate_dns_aliases(&fifty).is_ok());

        let fifty_one: Vec<String> = (0..51).map(|i| format!("alias{i}")).collect();
        assert!(validate_dns_aliases(&fifty_one).is_err());
    }

    #[test]
    fn test_preferred_subnet_required_only_for_multi_az() {
        assert!(validate_preferred_subnet(DeploymentTopology::MultiAz1, None).is_err());
        assert!(
            validate_preferred_subnet(DeploymentTopology::MultiAz1, Some("subnet-1")).is_ok()
        );
        // Allowed but never required elsewhere.
        assert!(validate_preferred_subnet(DeploymentTopology::SingleAz1, None).is_ok());
        assert!(
            validate_preferred_subnet(DeploymentTopology::SingleAz2, Some("subnet-1")).is_ok()
        );
    }

    #[test]
    fn test_dns_ip_count() {
        let ips: Vec<String> = (0..3).map(|i| format!("10.0.0.{i}")).collect();
        assert!(validate_dns_ips(&ips).is_ok());
        assert!(validate_dns_ips(&[]).is_ok());

        let four: Vec<String> = (0..4).map(|i| format!("10.0.0.{i}")).collect();
        assert!(validate_dns_ips(&four).is_err());
    }

    #[test]
    fn test_plain_text_length_and_charset() {
        assert!(validate_domain_name("corp.example.com").is_ok());
        assert!(validate_domain_name("").is_err());
        assert!(validate_domain_name(&"a".repeat(255)).is_ok());
        assert!(validate_domain_name(&"a".repeat(256)).is_err());
        assert!(validate_domain_name("corp\nexample").is_err());
        assert!(validate_domain_name("corp\u{2028}example").is_err());
        assert!(validate_domain_name("corp\u{2029}example").is_err());

        assert!(validate_ou_distinguished_name(&"a".repeat(2000)).is_ok());
        assert!(validate_ou_distinguished_name(&"a".repeat(2001)).is_err());

        assert!(validate_username("svc account").is_ok());
        assert!(validate_username("svc\raccount").is_err());
    }

    #[test]
    fn test_password_allows_any_characters() {
        assert!(validate_password("line\nbreaks\u{2028}are fine").is_ok());
        assert!(validate_password("").is_err());
        assert!(validate_password(&"x".repeat(257)).is_err());
    }

    #[test]
    fn test_arn_grammar() {
        assert!(validate_audit_destination(
            "arn:aws:logs:us-east-1:123456789012:log-group:/fsx/audit"
        )
        .is_ok());
        // Empty account segment is allowed.
        assert!(validate_audit_destination("arn:aws:s3:us-east-1::my-bucket").is_ok());
        assert!(validate_audit_destination("aws:logs:us-east-1:123:thing").is_err());
        assert!(validate_audit_destination("arn:aws:logs:us-east-1:123:/leading-slash").is_err());
        assert!(validate_audit_destination("not-an-arn").is_err());
    }

    #[test]
    fn test_backup_retention_bounds() {
        assert!(validate_backup_retention(0).is_ok());
        assert!(validate_backup_retention(90).is_ok());
        assert!(validate_backup_retention(91).is_err());
    }

    #[test]
    fn test_validate_config_fail_fast_reports_first_violation_only() {
        let mut config = base_config();
        config.throughput_capacity_mbps = 9;
        config.storage_capacity_gib = 1;

        // Both fields are bad; only throughput (checked first) surfaces.
        let err = validate_config(&config).unwrap_err();
        assert_eq!(err, ValidationError::ThroughputCapacity(9));
    }

    #[test]
    fn test_validate_config_all_collects_everything() {
        let mut config = base_config();
        config.throughput_capacity_mbps = 9;
        config.storage_capacity_gib = 1;
        config.topology = DeploymentTopology::MultiAz1;

        let violations = validate_config_all(&config);
        assert_eq!(violations.len(), 3);
        assert!(violations.contains(&ValidationError::ThroughputCapacity(9)));
        assert!(violations.contains(&ValidationError::StorageCapacity(1)));
        assert!(violations.contains(&ValidationError::PreferredSubnetRequired));
    }

    #[test]
    fn test_validate_config_checks_self_managed_fields() {
        let mut config = base_config();
        let mut ad = self_managed();
        ad.dns_ips = (0..4).map(|i| format!("10.0.0.{i}")).collect();
        config.directory_join = Some(DirectoryJoin::SelfManaged(ad));

        let err = validate_config(&config).unwrap_err();
        assert_eq!(err, ValidationError::DnsIps(4));
    }

    #[test]
    fn test_validate_config_checks_audit_destination() {
        let mut config = base_config();
        config.audit_log = Some(AuditLogConfig {
            destination_arn: Some("bogus".to_string()),
            ..Default::default()
        });

        let err = validate_config(&config).unwrap_err();
        assert!(matches!(err, ValidationError::AuditLogDestination(_)));
    }

    #[test]
    fn test_validate_config_accepts_full_valid_input() {
        let mut config = base_config();
        config.directory_join = Some(DirectoryJoin::SelfManaged(self_managed()));
        config.dns_aliases = Some(vec!["files".to_string(), "share".to_string()]);
        config.backup_retention_days = Some(30);
        assert!(validate_config(&config).is_ok());
        assert!(validate_config_all(&config).is_empty());
    }
}
