//! Occupancy raster verification of partition coverage
//!
//! Rasterises the bounds into a grid of sample cells and counts how many
//! regions claim each cell centre. A valid partition claims every cell
//! exactly once; gaps and double claims show up as nonzero counters.

use crate::io::configuration::MAX_GRID_DIMENSION;
use crate::io::error::Result;
use crate::spatial::rect::Rect;
use ndarray::Array2;

/// Cell counts from rasterising a partition over its bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoverageReport {
    /// Total sample cells in the raster
    pub cells: usize,
    /// Cells claimed by exactly one region
    pub covered_cells: usize,
    /// Cells claimed by no region
    pub gap_cells: usize,
    /// Cells claimed by more than one region
    pub overlap_cells: usize,
    /// Region pairs whose interiors intersect
    pub overlapping_pairs: usize,
}

impl CoverageReport {
    /// Test whether the partition covers the bounds exactly once everywhere
    pub const fn is_exact(&self) -> bool {
        self.gap_cells == 0 && self.overlap_cells == 0 && self.overlapping_pairs == 0
    }
}

/// Rasterise the regions over the bounds and tally coverage per cell
///
/// The raster resolution tracks the bounds extent up to
/// [`MAX_GRID_DIMENSION`] cells per axis, with one cell per canvas unit when
/// the bounds fit. Each cell is sampled at its centre under half-open
/// containment, so shared region edges never double-claim a cell.
///
/// # Errors
///
/// Returns an error if the bounds have non-positive width or height.
pub fn verify_coverage(bounds: &Rect, regions: &[Rect]) -> Result<CoverageReport> {
    bounds.validate()?;

    let width_cells = (bounds.width().round() as usize).clamp(1, MAX_GRID_DIMENSION);
    let height_cells = (bounds.height().round() as usize).clamp(1, MAX_GRID_DIMENSION);
    let step_x = bounds.width() / width_cells as f64;
    let step_y = bounds.height() / height_cells as f64;

    let mut raster = Array2::<u32>::zeros((height_cells, width_cells));

    for region in regions {
        let (col_start, col_end) = cell_span(region.x0, region.x1, bounds.x0, step_x, width_cells);
        let (row_start, row_end) = cell_span(region.y0, region.y1, bounds.y0, step_y, height_cells);

        for row in row_start..row_end {
            for col in col_start..col_end {
                if let Some(cell) = raster.get_mut([row, col]) {
                    *cell += 1;
                }
            }
        }
    }

    let mut covered_cells = 0_usize;
    let mut gap_cells = 0_usize;
    let mut overlap_cells = 0_usize;
    for &claims in &raster {
        match claims {
            0 => gap_cells += 1,
            1 => covered_cells += 1,
            _ => overlap_cells += 1,
        }
    }

    let mut overlapping_pairs = 0_usize;
    for (index, first) in regions.iter().enumerate() {
        for second in regions.iter().skip(index + 1) {
            if first.intersects_interior(second) {
                overlapping_pairs += 1;
            }
        }
    }

    Ok(CoverageReport {
        cells: width_cells * height_cells,
        covered_cells,
        gap_cells,
        overlap_cells,
        overlapping_pairs,
    })
}

/// Index span of cells whose centres fall inside `[low, high)` along one axis
fn cell_span(low: f64, high: f64, origin: f64, step: f64, cells: usize) -> (usize, usize) {
    let start = ((low - origin) / step - 0.5).ceil().max(0.0) as usize;
    let end = ((high - origin) / step - 0.5).ceil().clamp(0.0, cells as f64) as usize;
    (start.min(cells), end)
}
