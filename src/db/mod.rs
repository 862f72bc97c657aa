//! Database access: pool construction, error types, and the partition
//! catalog/DDL repositories.

mod error;
pub mod mysql;
pub mod repos;

pub use error::{DbError, DbResult};

use crate::config::DatabaseConfig;

/// Connect a MySQL pool from configuration.
///
/// The whole sweep shares this one pool, read-then-write.
pub async fn connect(config: &DatabaseConfig) -> DbResult<sqlx::MySqlPool> {
    let pool = sqlx::mysql::MySqlPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.url)
        .await?;
    Ok(pool)
}
