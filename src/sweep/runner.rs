//! The run aggregator: drives one full sweep over all configured tables.

use chrono::NaiveDate;
use thiserror::Error;

use crate::{
    db::{
        DbError,
        repos::{PartitionCatalog, PartitionDropper},
    },
    models::{DayOrdinal, TableTarget},
    notify::Notifier,
    sweep::{DropReport, cutoff, policy},
};

/// Errors that abort a sweep.
///
/// Both kinds terminate the run immediately: a table is never silently
/// skipped, and a failed drop stops all further processing. Drops committed
/// before the failure stay committed; they are visible in the log but the
/// notification for them is never sent.
#[derive(Debug, Error)]
pub enum SweepError {
    #[error("failed to read partition metadata for `{schema}`.`{table}`: {source}")]
    Metadata {
        schema: String,
        table: String,
        #[source]
        source: DbError,
    },

    #[error("failed to drop partition `{partition}` from `{schema}`.`{table}`: {source}")]
    Drop {
        schema: String,
        table: String,
        partition: String,
        #[source]
        source: DbError,
    },
}

/// Results of one completed sweep.
#[derive(Debug)]
pub struct SweepSummary {
    /// All drops performed, in execution order.
    pub report: DropReport,
    /// Whether the notification was delivered. Always false when nothing was
    /// dropped; false on delivery failure, which does not fail the run.
    pub notified: bool,
}

impl SweepSummary {
    pub fn dropped(&self) -> usize {
        self.report.len()
    }
}

/// Run one retention sweep.
///
/// The cutoff is computed exactly once, from `today`, before any partition is
/// evaluated; every table in the run sees the same cutoff. Tables and
/// partitions are processed strictly sequentially in the given order, so the
/// report is deterministic for a given catalog snapshot and cutoff.
pub async fn run_sweep(
    catalog: &dyn PartitionCatalog,
    dropper: &dyn PartitionDropper,
    notifier: &dyn Notifier,
    targets: &[TableTarget],
    today: NaiveDate,
    retention_months: u32,
) -> Result<SweepSummary, SweepError> {
    let cutoff = cutoff::compute(today, retention_months);
    tracing::info!(
        cutoff,
        retention_months,
        tables = targets.len(),
        "Starting partition sweep"
    );

    let mut report = DropReport::default();

    for target in targets {
        sweep_table(catalog, dropper, target, cutoff, &mut report).await?;
    }

    if report.is_empty() {
        tracing::info!("Sweep complete, no partitions eligible");
        return Ok(SweepSummary {
            report,
            notified: false,
        });
    }

    tracing::info!(dropped = report.len(), "Sweep complete");

    let notified = match notifier.notify(&report.body()).await {
        Ok(()) => true,
        Err(e) => {
            // The drops are already committed; a lost notification must not
            // fail the run.
            tracing::error!(error = %e, "Failed to deliver drop notification");
            false
        }
    };

    Ok(SweepSummary { report, notified })
}

async fn sweep_table(
    catalog: &dyn PartitionCatalog,
    dropper: &dyn PartitionDropper,
    target: &TableTarget,
    cutoff: DayOrdinal,
    report: &mut DropReport,
) -> Result<(), SweepError> {
    let partitions = catalog
        .list_partitions(&target.schema, &target.table)
        .await
        .map_err(|source| SweepError::Metadata {
            schema: target.schema.clone(),
            table: target.table.clone(),
            source,
        })?;

    tracing::debug!(
        schema = %target.schema,
        table = %target.table,
        partitions = partitions.len(),
        "Evaluating partitions"
    );

    for record in partitions {
        if !policy::is_eligible(&record.boundary, cutoff) {
            continue;
        }

        dropper
            .drop_partition(&record.schema, &record.table, &record.partition_name)
            .await
            .map_err(|source| SweepError::Drop {
                schema: record.schema.clone(),
                table: record.table.clone(),
                partition: record.partition_name.clone(),
                source,
            })?;

        tracing::info!(
            schema = %record.schema,
            table = %record.table,
            partition = %record.partition_name,
            "Dropped partition"
        );
        report.record(&record.schema, &record.table, &record.partition_name);
    }

    Ok(())
}
