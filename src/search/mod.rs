//! Partition and binary search engine

mod bounds;
mod partition;

pub use bounds::{
    binary_search, equal_range, equal_range_n, lower_bound, lower_bound_by_key,
    partition_point, partition_point_n, upper_bound, upper_bound_by_key,
};
pub use partition::{
    is_partitioned, partition, partition_copy, stable_partition, stable_partition_tuned,
    PartitionStrategy,
};

pub(crate) use bounds::{lower_bound_n, upper_bound_n};
