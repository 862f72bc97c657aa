use serde::{Deserialize, Serialize};

use super::ConfigError;

/// Retention window configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RetentionConfig {
    /// Months of data to keep. A partition is dropped only when its upper
    /// bound falls strictly before this window.
    /// Default: 3
    #[serde(default = "default_months")]
    pub months: u32,
}

impl Default for RetentionConfig {
    fn default() -> Self {
        Self {
            months: default_months(),
        }
    }
}

fn default_months() -> u32 {
    3
}

impl RetentionConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.months == 0 {
            return Err(ConfigError::Validation(
                "retention.months must be at least 1".into(),
            ));
        }
        Ok(())
    }
}
