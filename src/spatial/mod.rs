//! Spatial data structures for canvas partitioning
//!
//! This module contains the geometric building blocks:
//! - Half-open rectangle primitive and split orientation
//! - Region pool used as the mutable work set during splitting

/// Mutable region pool with random swap-remove draw
pub mod pool;
/// Axis-aligned rectangle primitive and split orientation
pub mod rect;

pub use rect::Rect;
