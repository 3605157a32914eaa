//! Mondrian-style biased bisection with a minimum pane size

use crate::algorithm::bisection::draw_split_position;
use crate::io::error::Result;
use crate::spatial::pool::RegionPool;
use crate::spatial::rect::{Rect, SplitOrientation};
use rand::Rng;

// Algorithm-specific constants for the composition rules
/// Regions with both extents below this stay whole
pub const MIN_SPLIT_EXTENT: f64 = 100.0;
/// Fraction of the extent kept clear of the cut on each side
pub const SPLIT_MARGIN: f64 = 0.2;
/// Probability of a vertical cut when the region is wider than tall
pub const WIDE_VERTICAL_BIAS: f64 = 0.6;
/// Probability of a vertical cut otherwise
pub const NARROW_VERTICAL_BIAS: f64 = 0.4;

/// Partition the bounds into an unbalanced composition of large and small panes
///
/// Runs exactly `count` rounds. Each round draws a random region and bisects
/// it with a bias toward cutting across its long axis. Regions whose extents
/// are both below [`MIN_SPLIT_EXTENT`] go back into the pool untouched, so a
/// round spent on a small pane produces no new region and later rounds keep
/// concentrating on whatever large panes remain.
///
/// # Errors
///
/// Returns an error if the bounds have non-positive width or height.
pub fn split_mondrian<R: Rng>(bounds: Rect, count: usize, rng: &mut R) -> Result<Vec<Rect>> {
    bounds.validate()?;

    let mut pool = RegionPool::seeded(bounds);
    for _ in 0..count {
        let Some(region) = pool.draw(rng) else { break };

        if region.max_extent() < MIN_SPLIT_EXTENT {
            pool.insert(region);
            continue;
        }

        let vertical_bias = if region.width() > region.height() {
            WIDE_VERTICAL_BIAS
        } else {
            NARROW_VERTICAL_BIAS
        };
        let orientation = if rng.random::<f64>() < vertical_bias {
            SplitOrientation::Vertical
        } else {
            SplitOrientation::Horizontal
        };

        let position = draw_split_position(&region, orientation, SPLIT_MARGIN, rng);
        let (first, second) = region.split_at(orientation, position)?;
        pool.insert(first);
        pool.insert(second);
    }

    Ok(pool.into_regions())
}
