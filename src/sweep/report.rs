//! The run's drop report.

/// Ordered, append-only record of the partitions dropped in one run, owned by
/// the sweep runner and handed to the notifier once, after all tables are
/// processed.
#[derive(Debug, Default)]
pub struct DropReport {
    entries: Vec<String>,
}

impl DropReport {
    /// Append one drop entry. Entries keep insertion order.
    pub fn record(&mut self, schema: &str, table: &str, partition: &str) {
        self.entries.push(format!(
            "dropped partition (schema: {schema}, table: {table}, partition: {partition})"
        ));
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// The notification body: one entry per line.
    pub fn body(&self) -> String {
        self.entries.join("\n")
    }
}
