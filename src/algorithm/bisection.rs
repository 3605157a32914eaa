//! Random recursive bisection of a region pool

use crate::io::error::Result;
use crate::spatial::pool::RegionPool;
use crate::spatial::rect::{Rect, SplitOrientation};
use rand::Rng;

// Algorithm-specific constants for orientation and position choice
/// Aspect ratio beyond which the cut is forced across the long axis
pub const ASPECT_FORCE_RATIO: f64 = 1.5;
/// Fraction of the extent kept clear of the cut on each side
pub const RANDOM_SPLIT_MARGIN: f64 = 0.3;

/// Partition the bounds by repeated bisection of randomly drawn regions
///
/// Performs `count - 1` bisections so the pool grows to exactly `count`
/// regions; a count of zero or one leaves the bounds whole.
///
/// # Errors
///
/// Returns an error if the bounds have non-positive width or height.
pub fn split_random<R: Rng>(bounds: Rect, count: usize, rng: &mut R) -> Result<Vec<Rect>> {
    bounds.validate()?;

    let mut pool = RegionPool::seeded(bounds);
    for _ in 0..count.saturating_sub(1) {
        let Some(region) = pool.draw(rng) else { break };

        let orientation = choose_orientation(&region, rng);
        let position = draw_split_position(&region, orientation, RANDOM_SPLIT_MARGIN, rng);
        let (first, second) = region.split_at(orientation, position)?;
        pool.insert(first);
        pool.insert(second);
    }

    Ok(pool.into_regions())
}

/// Choose a cut axis for the region
///
/// Strongly elongated regions are always cut across their long axis; regions
/// closer to square get a coin flip.
pub fn choose_orientation<R: Rng>(region: &Rect, rng: &mut R) -> SplitOrientation {
    let width = region.width();
    let height = region.height();

    if width / height > ASPECT_FORCE_RATIO {
        SplitOrientation::Vertical
    } else if height / width > ASPECT_FORCE_RATIO {
        SplitOrientation::Horizontal
    } else if rng.random::<bool>() {
        SplitOrientation::Vertical
    } else {
        SplitOrientation::Horizontal
    }
}

/// Draw a whole-number cut coordinate from the central band of the region
///
/// The band edges are truncated to whole coordinates and the draw is clamped
/// to coordinates strictly inside the region, so the returned position always
/// yields two regions with positive extent. Regions too small to contain an
/// interior whole coordinate fall back to their exact midpoint.
pub fn draw_split_position<R: Rng>(
    region: &Rect,
    orientation: SplitOrientation,
    margin: f64,
    rng: &mut R,
) -> f64 {
    let (low, high) = match orientation {
        SplitOrientation::Vertical => (region.x0, region.x1),
        SplitOrientation::Horizontal => (region.y0, region.y1),
    };
    let extent = high - low;

    let band_low = margin.mul_add(extent, low).trunc() as i64;
    let band_high = margin.mul_add(-extent, high).trunc() as i64;

    // Float casts saturate at the i64 limits; the offsets must not wrap
    // past them
    let interior_low = (low.floor() as i64).saturating_add(1);
    let interior_high = (high.ceil() as i64).saturating_sub(1);
    if interior_low > interior_high {
        // No whole coordinate fits strictly inside; bisect exactly
        return f64::midpoint(low, high);
    }

    let clamped_low = band_low.max(interior_low);
    let clamped_high = band_high.min(interior_high);
    let position = if clamped_low > clamped_high {
        // Truncation pushed the band outside the interior; take the nearest
        // interior coordinate instead
        if band_high < interior_low {
            interior_low
        } else {
            interior_high
        }
    } else {
        rng.random_range(clamped_low..=clamped_high)
    };

    position as f64
}
