//! Error types for partitioning operations

use crate::spatial::rect::SplitOrientation;
use std::fmt;

/// Main error type for all partitioning operations
#[derive(Debug, Clone, PartialEq)]
pub enum SplitError {
    /// Bounding rectangle has non-positive width or height
    InvalidBounds {
        /// Left edge of the rejected rectangle
        x0: f64,
        /// Top edge of the rejected rectangle
        y0: f64,
        /// Right edge of the rejected rectangle
        x1: f64,
        /// Bottom edge of the rejected rectangle
        y1: f64,
    },

    /// Split count outside the range the chosen splitter supports
    InvalidSplitCount {
        /// The rejected split count
        count: usize,
        /// Explanation of why the count is invalid
        reason: &'static str,
    },

    /// Split coordinate does not fall strictly inside the parent rectangle
    ///
    /// Splitters recover from collapsed margin windows by clamping, so this
    /// surfaces only when a split position is supplied directly.
    DegenerateRegion {
        /// Axis the split was attempted along
        orientation: SplitOrientation,
        /// The rejected split coordinate
        position: f64,
        /// Low edge of the parent rectangle along the split axis
        min: f64,
        /// High edge of the parent rectangle along the split axis
        max: f64,
    },

    /// Algorithm selector rejected under strict resolution
    UnknownAlgorithm {
        /// The rejected selector string
        name: String,
    },
}

impl fmt::Display for SplitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidBounds { x0, y0, x1, y1 } => {
                write!(
                    f,
                    "Invalid bounds ({x0}, {y0}, {x1}, {y1}): width and height must be positive"
                )
            }
            Self::InvalidSplitCount { count, reason } => {
                write!(f, "Invalid split count {count}: {reason}")
            }
            Self::DegenerateRegion {
                orientation,
                position,
                min,
                max,
            } => {
                write!(
                    f,
                    "Degenerate {orientation} split at {position}: position must fall strictly between {min} and {max}"
                )
            }
            Self::UnknownAlgorithm { name } => {
                write!(f, "Unknown algorithm '{name}': no fallback in strict mode")
            }
        }
    }
}

impl std::error::Error for SplitError {}

/// Convenience type alias for partitioning results
pub type Result<T> = std::result::Result<T, SplitError>;

/// Create an invalid split count error
pub const fn invalid_split_count(count: usize, reason: &'static str) -> SplitError {
    SplitError::InvalidSplitCount { count, reason }
}

/// Create an unknown algorithm error
pub fn unknown_algorithm(name: &str) -> SplitError {
    SplitError::UnknownAlgorithm {
        name: name.to_string(),
    }
}
