//! Balanced exponential grid driven by a Gaussian depth draw

use crate::algorithm::uniform::{split_columns, split_rows};
use crate::io::configuration::MAX_BALANCED_DEPTH;
use crate::io::error::{Result, invalid_split_count};
use crate::math::probability::sample_gaussian;
use crate::spatial::rect::Rect;
use rand::Rng;

// Algorithm-specific constant for the depth draw
/// Standard deviation of the column depth draw as a fraction of the count
pub const DEPTH_STD_DEV_FACTOR: f64 = 0.2;

/// Partition the bounds into an exponential grid of equal cells
///
/// The count acts as a depth budget, not a region total: the grid has two to
/// the column depth columns and two to the row depth rows, with the depths
/// chosen by [`balanced_depths`]. Outside square mode the depths always sum
/// to the count, so the grid holds exactly two to the count cells.
///
/// # Errors
///
/// Returns an error if:
/// - The bounds have non-positive width or height
/// - The combined depth exceeds [`MAX_BALANCED_DEPTH`]
pub fn split_average<R: Rng>(
    bounds: Rect,
    count: usize,
    square_mode: bool,
    rng: &mut R,
) -> Result<Vec<Rect>> {
    bounds.validate()?;

    let (col_depth, row_depth) = balanced_depths(count, square_mode, rng);
    if col_depth + row_depth > MAX_BALANCED_DEPTH {
        return Err(invalid_split_count(
            count,
            "combined grid depth exceeds the balanced depth limit",
        ));
    }

    let cols = 1_usize << col_depth;
    let rows = 1_usize << row_depth;

    let mut regions = Vec::with_capacity(cols.saturating_mul(rows));
    for column in split_columns(bounds, cols)? {
        regions.extend(split_rows(column, rows)?);
    }

    Ok(regions)
}

/// Choose the column and row depth exponents for the grid
///
/// Square mode takes the integer square root of the count for both axes and
/// draws nothing from the generator. Otherwise the column depth comes from a
/// Gaussian centred on the count, clamped to at least one before capping at
/// the count, and the rows get whatever depth remains.
pub fn balanced_depths<R: Rng>(count: usize, square_mode: bool, rng: &mut R) -> (usize, usize) {
    if square_mode {
        let side = (count as f64).sqrt() as usize;
        return (side, side);
    }

    let mean = count as f64;
    let drawn = sample_gaussian(rng, mean, DEPTH_STD_DEV_FACTOR * mean)
        .round()
        .max(1.0) as usize;
    let col_depth = drawn.min(count);
    (col_depth, count - col_depth)
}
