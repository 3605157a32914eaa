//! Summary statistics over a finished partition

use crate::spatial::rect::Rect;

/// Aggregated area and shape measures for a set of regions
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegionStatistics {
    /// Number of regions measured
    pub count: usize,
    /// Sum of all region areas
    pub total_area: f64,
    /// Smallest region area
    pub min_area: f64,
    /// Largest region area
    pub max_area: f64,
    /// Mean region area
    pub mean_area: f64,
    /// Population standard deviation of region areas
    pub area_std_dev: f64,
    /// Largest long-to-short extent ratio over all regions
    pub widest_aspect: f64,
    /// Combined region area as a fraction of the bounds area
    pub coverage_ratio: f64,
}

impl RegionStatistics {
    /// Measure a finished partition against its bounding rectangle
    ///
    /// An empty region set yields all-zero measures rather than NaN, so
    /// reports stay printable whatever the splitter produced.
    pub fn from_regions(bounds: &Rect, regions: &[Rect]) -> Self {
        if regions.is_empty() {
            return Self {
                count: 0,
                total_area: 0.0,
                min_area: 0.0,
                max_area: 0.0,
                mean_area: 0.0,
                area_std_dev: 0.0,
                widest_aspect: 0.0,
                coverage_ratio: 0.0,
            };
        }

        let mut total_area = 0.0_f64;
        let mut area_sum_sq = 0.0_f64;
        let mut min_area = f64::INFINITY;
        let mut max_area = 0.0_f64;
        let mut widest_aspect = 0.0_f64;

        for region in regions {
            let area = region.area();
            total_area += area;
            area_sum_sq = area.mul_add(area, area_sum_sq);
            min_area = min_area.min(area);
            max_area = max_area.max(area);

            let width = region.width();
            let height = region.height();
            let aspect = if width > height {
                width / height
            } else {
                height / width
            };
            widest_aspect = widest_aspect.max(aspect);
        }

        let count_f64 = regions.len() as f64;
        let mean_area = total_area / count_f64;
        // Population variance; clamped because rounding can push it slightly
        // below zero for near-identical areas
        let variance = mean_area
            .mul_add(-mean_area, area_sum_sq / count_f64)
            .max(0.0);

        Self {
            count: regions.len(),
            total_area,
            min_area,
            max_area,
            mean_area,
            area_std_dev: variance.sqrt(),
            widest_aspect,
            coverage_ratio: total_area / bounds.area(),
        }
    }
}
