//! Domain types for partition catalog metadata.

/// Day-number encoding used by MySQL's `TO_DAYS`: days since year 0.
/// Range partition boundaries over `TO_DAYS(col)` are stored in this encoding,
/// so date comparisons reduce to integer comparisons.
pub type DayOrdinal = i64;

/// Upper bound of a range partition, decided once when the catalog row is
/// read. The catch-all `MAXVALUE` partition (and anything else that does not
/// parse as a day number) is `Unbounded` and is never dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartitionBoundary {
    /// Exclusive upper bound as a `TO_DAYS` ordinal.
    Bounded(DayOrdinal),
    /// No finite upper bound.
    Unbounded,
}

impl PartitionBoundary {
    /// Interpret a `PARTITION_DESCRIPTION` value from the catalog.
    ///
    /// Non-numeric descriptors are not an error: `MAXVALUE` is the expected
    /// descriptor of the catch-all partition.
    pub fn parse(descriptor: &str) -> Self {
        descriptor
            .trim()
            .parse()
            .map(Self::Bounded)
            .unwrap_or(Self::Unbounded)
    }
}

/// One row of partition catalog metadata, read fresh per table and never
/// mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartitionRecord {
    pub schema: String,
    pub table: String,
    pub partition_name: String,
    pub boundary: PartitionBoundary,
}

/// One configured table to sweep.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableTarget {
    pub schema: String,
    pub table: String,
}
