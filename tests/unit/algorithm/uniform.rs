//! Tests for uniform column and row splitting

#[cfg(test)]
mod tests {
    use splitmosaic::algorithm::uniform::{split_columns, split_rows};
    use splitmosaic::io::error::SplitError;
    use splitmosaic::spatial::rect::Rect;

    fn bounds_100_by_50() -> Rect {
        Rect {
            x0: 0.0,
            y0: 0.0,
            x1: 100.0,
            y1: 50.0,
        }
    }

    // Tests equal column widths with the final edge pinned
    // Verified by accumulating edges with repeated addition
    #[test]
    fn test_split_columns_produces_equal_slices() {
        let regions = split_columns(bounds_100_by_50(), 4).unwrap_or_default();

        assert_eq!(regions.len(), 4);
        for (index, region) in regions.iter().enumerate() {
            let expected_x0 = 25.0 * index as f64;
            assert!((region.width() - 25.0).abs() < f64::EPSILON);
            assert!((region.x0 - expected_x0).abs() < f64::EPSILON);
            assert!(region.y0.abs() < f64::EPSILON);
            assert!((region.y1 - 50.0).abs() < f64::EPSILON);
        }
        assert!(
            regions
                .last()
                .is_some_and(|last| (last.x1 - 100.0).abs() < f64::EPSILON)
        );
    }

    // Tests row splitting cuts along the vertical axis
    // Verified by splitting columns instead
    #[test]
    fn test_split_rows_produces_equal_slices() {
        let regions = split_rows(bounds_100_by_50(), 5).unwrap_or_default();

        assert_eq!(regions.len(), 5);
        for region in &regions {
            assert!((region.height() - 10.0).abs() < f64::EPSILON);
            assert!(region.x0.abs() < f64::EPSILON);
            assert!((region.x1 - 100.0).abs() < f64::EPSILON);
        }
    }

    // Tests slice edges stay contiguous for non-representable steps
    // Verified by computing each edge independently of its neighbour
    #[test]
    fn test_split_columns_keeps_edges_contiguous() {
        let bounds = Rect {
            x0: 0.0,
            y0: 0.0,
            x1: 1.0,
            y1: 1.0,
        };
        let regions = split_columns(bounds, 3).unwrap_or_default();

        assert_eq!(regions.len(), 3);
        for (leading, trailing) in regions.iter().zip(regions.iter().skip(1)) {
            assert!((leading.x1 - trailing.x0).abs() < f64::EPSILON);
        }

        let total: f64 = regions.iter().map(Rect::area).sum();
        assert!((total - 1.0).abs() < 1e-12);
    }

    // Tests the zero count rejection
    // Verified by returning the whole bounds instead
    #[test]
    fn test_zero_count_is_rejected() {
        assert!(matches!(
            split_columns(bounds_100_by_50(), 0),
            Err(SplitError::InvalidSplitCount { .. })
        ));
        assert!(matches!(
            split_rows(bounds_100_by_50(), 0),
            Err(SplitError::InvalidSplitCount { .. })
        ));
    }

    // Tests a single slice returns the bounds whole
    // Verified by shrinking the single slice by one step
    #[test]
    fn test_single_slice_is_the_bounds() {
        let regions = split_columns(bounds_100_by_50(), 1).unwrap_or_default();
        assert_eq!(regions, [bounds_100_by_50()]);
    }

    // Tests degenerate bounds are rejected before slicing
    // Verified by validating after the slice loop
    #[test]
    fn test_invalid_bounds_are_rejected() {
        let flat = Rect {
            x0: 0.0,
            y0: 10.0,
            x1: 100.0,
            y1: 10.0,
        };
        assert!(matches!(
            split_rows(flat, 3),
            Err(SplitError::InvalidBounds { .. })
        ));
    }
}
