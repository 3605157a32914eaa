//! Tests for runtime configuration defaults and safety limits

#[cfg(test)]
mod tests {
    use splitmosaic::algorithm::SplitAlgorithm;
    use splitmosaic::io::configuration::{
        DEFAULT_ALGORITHM, DEFAULT_CANVAS_SIZE, DEFAULT_SEED, DEFAULT_SPLIT_COUNT,
        MAX_BALANCED_DEPTH, MAX_GRID_DIMENSION,
    };

    // Tests reproducibility and canvas defaults
    // Verified by changing constant values
    #[test]
    fn test_default_values() {
        assert_eq!(DEFAULT_SEED, 42);
        assert_eq!(DEFAULT_CANVAS_SIZE, 512);
        assert_eq!(DEFAULT_SPLIT_COUNT, 5);
        assert_eq!(DEFAULT_ALGORITHM, "random");
    }

    // Tests safety limit magnitudes
    // Verified by reducing the raster limit
    #[test]
    fn test_safety_limits() {
        assert_eq!(MAX_GRID_DIMENSION, 10_000);
        assert_eq!(MAX_BALANCED_DEPTH, 20);
    }

    // Tests the default selector resolves without fallback
    // Verified by misspelling the default selector
    #[test]
    fn test_default_algorithm_is_selectable() {
        assert!(SplitAlgorithm::from_name_strict(DEFAULT_ALGORITHM).is_some());
    }
}
