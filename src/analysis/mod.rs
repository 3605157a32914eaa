//! Analysis modules for partition verification and measurement

/// Occupancy raster coverage verification
pub mod coverage;
/// Summary statistics over finished partitions
pub mod statistics;
