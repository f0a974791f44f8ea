//! Directory-join configuration

use serde::{Deserialize, Serialize};

/// How the file system joins a directory service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DirectoryJoin {
    /// Join a managed directory by its service-assigned identifier
    /// (`d-` followed by 10 hex digits).
    Managed { directory_id: String },

    /// Join a self-managed Active Directory.
    SelfManaged(SelfManagedDirectoryConfig),
}

/// Self-managed Active Directory settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelfManagedDirectoryConfig {
    /// DNS server IPs for the directory domain, at most 3.
    pub dns_ips: Vec<String>,

    /// Fully qualified domain name, e.g. `corp.example.com`.
    pub domain_name: String,

    /// Domain group delegated file system administration. The domain
    /// default applies when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admins_group: Option<String>,

    /// Distinguished name of the OU the file system joins under.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ou_distinguished_name: Option<String>,

    /// Service account with permission to join machines to the domain.
    pub username: String,

    pub password: String,
}
