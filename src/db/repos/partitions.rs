use async_trait::async_trait;

use crate::{db::DbResult, models::PartitionRecord};

/// Read access to the database's partition catalog.
#[async_trait]
pub trait PartitionCatalog: Send + Sync {
    /// List all partitions of `schema`.`table` in ordinal position order,
    /// which for range partitioning is also ascending boundary order.
    ///
    /// A table with no partitions, or a table that does not exist, yields an
    /// empty list rather than an error.
    async fn list_partitions(&self, schema: &str, table: &str) -> DbResult<Vec<PartitionRecord>>;
}

/// DDL surface for removing partitions.
#[async_trait]
pub trait PartitionDropper: Send + Sync {
    /// Drop exactly the named partition from the named table, permanently
    /// deleting all rows stored in it.
    ///
    /// Not idempotent: dropping a partition that no longer exists fails.
    async fn drop_partition(&self, schema: &str, table: &str, partition: &str) -> DbResult<()>;
}
