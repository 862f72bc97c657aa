mod partitions;

pub use partitions::MySqlPartitionRepo;
