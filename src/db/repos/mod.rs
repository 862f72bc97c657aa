mod partitions;

pub use partitions::{PartitionCatalog, PartitionDropper};
