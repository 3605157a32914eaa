//! Uniform grid splitting into equal columns or rows

use crate::io::error::{Result, invalid_split_count};
use crate::spatial::rect::{Rect, SplitOrientation};

/// Split the bounds into `count` columns of equal width
///
/// # Errors
///
/// Returns an error if:
/// - The bounds have non-positive width or height
/// - `count` is zero
pub fn split_columns(bounds: Rect, count: usize) -> Result<Vec<Rect>> {
    split_uniform(bounds, count, SplitOrientation::Vertical)
}

/// Split the bounds into `count` rows of equal height
///
/// # Errors
///
/// Returns an error if:
/// - The bounds have non-positive width or height
/// - `count` is zero
pub fn split_rows(bounds: Rect, count: usize) -> Result<Vec<Rect>> {
    split_uniform(bounds, count, SplitOrientation::Horizontal)
}

/// Cut the bounds into equal slices along one axis
///
/// Slice edges accumulate from the low edge through multiply-add rather than
/// repeated addition, and the final edge is pinned to the high edge so the
/// slices cover the bounds exactly even when the step is not representable.
fn split_uniform(bounds: Rect, count: usize, orientation: SplitOrientation) -> Result<Vec<Rect>> {
    bounds.validate()?;
    if count == 0 {
        return Err(invalid_split_count(0, "at least one slice is required"));
    }

    let (low, high) = match orientation {
        SplitOrientation::Vertical => (bounds.x0, bounds.x1),
        SplitOrientation::Horizontal => (bounds.y0, bounds.y1),
    };
    let step = (high - low) / count as f64;

    let mut regions = Vec::with_capacity(count);
    for index in 0..count {
        let start = step.mul_add(index as f64, low);
        let end = if index + 1 == count {
            high
        } else {
            step.mul_add((index + 1) as f64, low)
        };
        let region = match orientation {
            SplitOrientation::Vertical => Rect::new(start, bounds.y0, end, bounds.y1)?,
            SplitOrientation::Horizontal => Rect::new(bounds.x0, start, bounds.x1, end)?,
        };
        regions.push(region);
    }

    Ok(regions)
}
