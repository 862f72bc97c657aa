use serde::{Deserialize, Serialize};

use super::ConfigError;
use crate::models::TableTarget;

/// Tables to sweep.
///
/// The table list is ordered: tables are processed, and the drop report is
/// accumulated, in exactly this order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TargetsConfig {
    /// Schema holding the partitioned tables.
    pub schema: String,

    /// Comma-separated list of table names.
    pub tables: String,
}

impl TargetsConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.schema.trim().is_empty() {
            return Err(ConfigError::Validation(
                "targets.schema cannot be empty".into(),
            ));
        }
        Ok(())
    }

    /// The configured sweep order. An empty `tables` value yields no targets,
    /// which is a valid (no-op) run.
    pub fn targets(&self) -> Vec<TableTarget> {
        self.tables
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(|t| TableTarget {
                schema: self.schema.clone(),
                table: t.to_string(),
            })
            .collect()
    }
}
