//! Stochastic rectangle partitioning for abstract avatar generation
//!
//! The library splits a rectangular canvas into disjoint half-open regions
//! using one of several algorithms, from uniform grids to Mondrian-style
//! compositions, and can verify that a partition covers the canvas exactly.

#![forbid(unsafe_code)]

/// Splitting algorithms and the partition dispatch layer
pub mod algorithm;
/// Partition verification and measurement
pub mod analysis;
/// Input/output operations and error handling
pub mod io;
/// Mathematical utilities for probability sampling
pub mod math;
/// Spatial primitives for rectangles and region pools
pub mod spatial;

pub use io::error::{Result, SplitError};
