//! Runtime configuration defaults and safety limits

// Safety limit to prevent excessive memory allocation
/// Maximum occupancy raster dimension for coverage verification
pub const MAX_GRID_DIMENSION: usize = 10_000;

// Keeps the exponential balanced grid around a million cells at most
/// Maximum combined column and row depth for the balanced grid
pub const MAX_BALANCED_DEPTH: usize = 20;

// Default values for configurable parameters
/// Fixed seed for reproducible partitions
pub const DEFAULT_SEED: u64 = 42;

/// Default canvas edge length in canvas units
pub const DEFAULT_CANVAS_SIZE: u32 = 512;

/// Default number of splits requested from the chosen algorithm
pub const DEFAULT_SPLIT_COUNT: usize = 5;

/// Default splitting algorithm selector
pub const DEFAULT_ALGORITHM: &str = "random";
