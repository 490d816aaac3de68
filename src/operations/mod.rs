mod partition;

pub use partition::{find_invalid, find_valid, partition_by_validity};
