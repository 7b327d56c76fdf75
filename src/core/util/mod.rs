pub mod available_workers;
pub mod map_range;
pub mod partition_rows;
