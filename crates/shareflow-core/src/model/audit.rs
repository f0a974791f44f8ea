//! Audit log configuration

use serde::{Deserialize, Serialize};

/// What end-user activity gets logged for a given access kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuditLogLevel {
    #[default]
    Disabled,
    SuccessOnly,
    FailureOnly,
    SuccessAndFailure,
}

/// End-user access audit logging.
///
/// File access and file-share access are logged independently; both
/// default to disabled.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditLogConfig {
    /// ARN of the destination receiving the logs. The engine picks a
    /// default log group when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_arn: Option<String>,

    pub file_access_level: AuditLogLevel,

    pub file_share_access_level: AuditLogLevel,
}
