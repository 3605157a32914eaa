//! Axis-aligned rectangle primitive for canvas partitioning
//!
//! Rectangles are half-open regions: a point on the left or top edge belongs
//! to the rectangle, a point on the right or bottom edge does not. Splitting
//! never mutates a rectangle in place; it produces two fresh values that
//! together cover the parent exactly.

use crate::io::error::{Result, SplitError};
use std::fmt;

/// Axis a rectangle is divided along when split
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitOrientation {
    /// Division by a vertical line, producing left and right halves
    Vertical,
    /// Division by a horizontal line, producing top and bottom halves
    Horizontal,
}

impl fmt::Display for SplitOrientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Vertical => write!(f, "vertical"),
            Self::Horizontal => write!(f, "horizontal"),
        }
    }
}

/// Half-open axis-aligned region of the canvas
///
/// Maintains the invariant `x1 > x0` and `y1 > y0` when constructed through
/// [`Rect::new`]. Values built directly from fields should be re-checked
/// with [`Rect::validate`] before partitioning.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Left edge
    pub x0: f64,
    /// Top edge
    pub y0: f64,
    /// Right edge (exclusive)
    pub x1: f64,
    /// Bottom edge (exclusive)
    pub y1: f64,
}

impl Rect {
    /// Create a rectangle after checking that both extents are positive
    ///
    /// # Errors
    ///
    /// Returns [`SplitError::InvalidBounds`] if `x1 <= x0` or `y1 <= y0`.
    pub const fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Result<Self> {
        if x1 > x0 && y1 > y0 {
            Ok(Self { x0, y0, x1, y1 })
        } else {
            Err(SplitError::InvalidBounds { x0, y0, x1, y1 })
        }
    }

    /// Re-check the extent invariant on a possibly hand-built value
    ///
    /// # Errors
    ///
    /// Returns [`SplitError::InvalidBounds`] if either extent is non-positive.
    pub const fn validate(&self) -> Result<()> {
        if self.x1 > self.x0 && self.y1 > self.y0 {
            Ok(())
        } else {
            Err(SplitError::InvalidBounds {
                x0: self.x0,
                y0: self.y0,
                x1: self.x1,
                y1: self.y1,
            })
        }
    }

    /// Horizontal extent
    pub const fn width(&self) -> f64 {
        self.x1 - self.x0
    }

    /// Vertical extent
    pub const fn height(&self) -> f64 {
        self.y1 - self.y0
    }

    /// Covered area
    pub const fn area(&self) -> f64 {
        self.width() * self.height()
    }

    /// Longer of the two extents
    pub const fn max_extent(&self) -> f64 {
        let width = self.width();
        let height = self.height();
        if width > height { width } else { height }
    }

    /// Test whether a point lies inside under half-open semantics
    pub const fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x0 && x < self.x1 && y >= self.y0 && y < self.y1
    }

    /// Test whether the interiors of two rectangles overlap
    ///
    /// Shared edges do not count as overlap, so the members of a valid
    /// partition are pairwise disjoint under this test.
    pub const fn intersects_interior(&self, other: &Self) -> bool {
        self.x0 < other.x1 && other.x0 < self.x1 && self.y0 < other.y1 && other.y0 < self.y1
    }

    /// Divide the rectangle in two at the given coordinate
    ///
    /// A [`SplitOrientation::Vertical`] split interprets `position` as an x
    /// coordinate and returns the left and right halves; a horizontal split
    /// interprets it as a y coordinate and returns the top and bottom halves.
    ///
    /// # Errors
    ///
    /// Returns [`SplitError::DegenerateRegion`] if `position` does not fall
    /// strictly inside the rectangle along the chosen axis, which would
    /// produce an empty child.
    pub const fn split_at(&self, orientation: SplitOrientation, position: f64) -> Result<(Self, Self)> {
        match orientation {
            SplitOrientation::Vertical => {
                if position <= self.x0 || position >= self.x1 {
                    return Err(SplitError::DegenerateRegion {
                        orientation,
                        position,
                        min: self.x0,
                        max: self.x1,
                    });
                }
                Ok((
                    Self {
                        x0: self.x0,
                        y0: self.y0,
                        x1: position,
                        y1: self.y1,
                    },
                    Self {
                        x0: position,
                        y0: self.y0,
                        x1: self.x1,
                        y1: self.y1,
                    },
                ))
            }
            SplitOrientation::Horizontal => {
                if position <= self.y0 || position >= self.y1 {
                    return Err(SplitError::DegenerateRegion {
                        orientation,
                        position,
                        min: self.y0,
                        max: self.y1,
                    });
                }
                Ok((
                    Self {
                        x0: self.x0,
                        y0: self.y0,
                        x1: self.x1,
                        y1: position,
                    },
                    Self {
                        x0: self.x0,
                        y0: position,
                        x1: self.x1,
                        y1: self.y1,
                    },
                ))
            }
        }
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {}, {})", self.x0, self.y0, self.x1, self.y1)
    }
}
