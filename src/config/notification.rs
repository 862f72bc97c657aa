use serde::{Deserialize, Serialize};

use super::ConfigError;

/// SMTP notification settings for the end-of-run drop report.
///
/// The message is sent at most once per run, and only when at least one
/// partition was dropped.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NotificationConfig {
    /// SMTP server hostname.
    pub host: String,

    /// SMTP submission port (implicit TLS).
    /// Default: 465
    #[serde(default = "default_port")]
    pub port: u16,

    /// Account used to authenticate and as the From address.
    pub username: String,

    /// Account password.
    pub password: String,

    /// Comma-separated recipient addresses.
    pub recipients: String,

    /// Subject line for the report message.
    #[serde(default = "default_subject")]
    pub subject: String,
}

impl NotificationConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.host.trim().is_empty() {
            return Err(ConfigError::Validation(
                "notification.host cannot be empty".into(),
            ));
        }
        if self.username.trim().is_empty() {
            return Err(ConfigError::Validation(
                "notification.username cannot be empty".into(),
            ));
        }
        if self
            .recipients
            .split(',')
            .all(|r| r.trim().is_empty())
        {
            return Err(ConfigError::Validation(
                "notification.recipients must name at least one address".into(),
            ));
        }
        Ok(())
    }
}

fn default_port() -> u16 {
    465
}

fn default_subject() -> String {
    "partsweep: expired partitions dropped".to_string()
}
