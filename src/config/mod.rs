//! Configuration module for the partition sweeper.
//!
//! The sweeper is configured via a TOML file, with support for environment
//! variable interpolation using `${VAR_NAME}` syntax.
//!
//! # Example
//!
//! ```toml
//! [database]
//! url = "mysql://sweeper:${PARTSWEEP_DB_PASSWORD}@db:3306/metrics"
//!
//! [targets]
//! schema = "metrics"
//! tables = "events,requests"
//! ```

mod database;
mod notification;
mod observability;
mod retention;
mod targets;

use std::path::Path;

pub use database::*;
pub use notification::*;
pub use observability::*;
pub use retention::*;
use serde::{Deserialize, Serialize};
pub use targets::*;

/// Root configuration for the partition sweeper.
///
/// There is no safe default for connection or target identity, so the
/// `database`, `targets`, and `notification` sections are required; a missing
/// section fails the load before any database operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SweepConfig {
    /// MySQL connection settings.
    pub database: DatabaseConfig,

    /// Schema and ordered table list to sweep.
    pub targets: TargetsConfig,

    /// Retention window.
    #[serde(default)]
    pub retention: RetentionConfig,

    /// SMTP settings for the drop report.
    pub notification: NotificationConfig,

    /// Observability configuration (logging).
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

impl SweepConfig {
    /// Load configuration from a TOML file.
    ///
    /// Environment variables in the format `${VAR_NAME}` are expanded.
    /// Missing required variables will cause an error.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::Io(e, path.as_ref().to_path_buf()))?;

        Self::from_str(&contents)
    }

    /// Parse configuration from a TOML string.
    pub fn from_str(contents: &str) -> Result<Self, ConfigError> {
        let expanded = expand_env_vars(contents)?;
        let config: SweepConfig = toml::from_str(&expanded).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        self.database.validate()?;
        self.targets.validate()?;
        self.retention.validate()?;
        self.notification.validate()?;
        Ok(())
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {1}: {0}")]
    Io(std::io::Error, std::path::PathBuf),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Environment variable not found: {0}")]
    EnvVarNotFound(String),

    #[error("Configuration validation error: {0}")]
    Validation(String),
}

/// Expand environment variables in the format `${VAR_NAME}`.
/// Variables appearing inside comments are left untouched.
fn expand_env_vars(input: &str) -> Result<String, ConfigError> {
    let re = regex::Regex::new(r"\$\{([^}]+)\}").unwrap();
    let mut out = String::with_capacity(input.len());

    for (i, line) in input.lines().enumerate() {
        if i > 0 {
            out.push('\n');
        }

        let comment_pos = line.find('#');
        let mut last_end = 0;

        for cap in re.captures_iter(line) {
            let m = cap.get(0).unwrap();
            if comment_pos.is_some_and(|pos| m.start() >= pos) {
                continue;
            }

            out.push_str(&line[last_end..m.start()]);

            let var_name = &cap[1];
            let value = std::env::var(var_name)
                .map_err(|_| ConfigError::EnvVarNotFound(var_name.to_string()))?;
            out.push_str(&value);

            last_end = m.end();
        }

        out.push_str(&line[last_end..]);
    }

    if input.ends_with('\n') {
        out.push('\n');
    }

    Ok(out)
}
