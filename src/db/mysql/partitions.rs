use async_trait::async_trait;
use sqlx::{MySqlPool, Row, mysql::MySqlRow};

use crate::{
    db::{
        DbResult,
        repos::{PartitionCatalog, PartitionDropper},
    },
    models::{PartitionBoundary, PartitionRecord},
};

/// MySQL-backed partition catalog and DDL executor, reading
/// `information_schema.PARTITIONS` and issuing `ALTER TABLE ... DROP
/// PARTITION`.
pub struct MySqlPartitionRepo {
    pool: MySqlPool,
}

impl MySqlPartitionRepo {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PartitionCatalog for MySqlPartitionRepo {
    async fn list_partitions(&self, schema: &str, table: &str) -> DbResult<Vec<PartitionRecord>> {
        let rows = sqlx::query(
            r#"
            SELECT
                p.TABLE_SCHEMA,
                p.TABLE_NAME,
                p.PARTITION_NAME,
                p.PARTITION_DESCRIPTION
            FROM information_schema.PARTITIONS p
            WHERE p.TABLE_SCHEMA = ?
              AND p.TABLE_NAME = ?
            ORDER BY p.PARTITION_ORDINAL_POSITION
            "#,
        )
        .bind(schema)
        .bind(table)
        .fetch_all(&self.pool)
        .await?;

        Ok(collect_records(
            schema,
            table,
            rows.iter().map(decode_partition_row),
        ))
    }
}

/// Collect decoded catalog rows leniently: a row that cannot be decoded, or
/// that carries no partition name, is skipped with a warning instead of
/// failing the whole table.
fn collect_records(
    schema: &str,
    table: &str,
    decoded: impl IntoIterator<Item = Result<Option<PartitionRecord>, sqlx::Error>>,
) -> Vec<PartitionRecord> {
    let mut records = Vec::new();
    for item in decoded {
        match item {
            Ok(Some(record)) => records.push(record),
            // Non-partitioned tables appear in the catalog with a NULL
            // partition name.
            Ok(None) => {
                tracing::warn!(schema, table, "Skipping catalog row without partition name");
            }
            Err(e) => {
                tracing::warn!(
                    schema,
                    table,
                    error = %e,
                    "Skipping undecodable partition catalog row"
                );
            }
        }
    }
    records
}

#[async_trait]
impl PartitionDropper for MySqlPartitionRepo {
    async fn drop_partition(&self, schema: &str, table: &str, partition: &str) -> DbResult<()> {
        // DDL statements do not accept bind parameters for identifiers.
        let sql = format!(
            "ALTER TABLE {}.{} DROP PARTITION {}",
            quote_ident(schema),
            quote_ident(table),
            quote_ident(partition),
        );

        sqlx::query(&sql).execute(&self.pool).await?;
        Ok(())
    }
}

fn decode_partition_row(row: &MySqlRow) -> Result<Option<PartitionRecord>, sqlx::Error> {
    let schema: String = row.try_get("TABLE_SCHEMA")?;
    let table: String = row.try_get("TABLE_NAME")?;
    let partition_name: Option<String> = row.try_get("PARTITION_NAME")?;
    let descriptor: Option<String> = row.try_get("PARTITION_DESCRIPTION")?;

    Ok(record_from_columns(schema, table, partition_name, descriptor))
}

/// Assemble a record from the catalog columns. Rows without a partition name
/// carry no partition to evaluate; a missing boundary descriptor (HASH/KEY
/// partitioning) maps to `Unbounded`, which is never eligible for a drop.
fn record_from_columns(
    schema: String,
    table: String,
    partition_name: Option<String>,
    descriptor: Option<String>,
) -> Option<PartitionRecord> {
    let partition_name = partition_name?;
    let boundary = descriptor
        .as_deref()
        .map(PartitionBoundary::parse)
        .unwrap_or(PartitionBoundary::Unbounded);

    Some(PartitionRecord {
        schema,
        table,
        partition_name,
        boundary,
    })
}

fn quote_ident(ident: &str) -> String {
    format!("`{}`", ident.replace('`', "``"))
}
