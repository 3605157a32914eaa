//! Mutable working set of rectangles during iterative splitting

use crate::spatial::rect::Rect;
use rand::Rng;

/// Order-irrelevant pool of rectangles acting as the split work set
///
/// Iterative splitters repeatedly draw a random member, divide it, and
/// insert the two halves back. Removal uses swap-remove, so draw order is
/// O(1) and the stored order carries no meaning.
#[derive(Debug, Clone)]
pub struct RegionPool {
    regions: Vec<Rect>,
}

impl RegionPool {
    /// Create a pool holding only the initial bounding rectangle
    pub fn seeded(bounds: Rect) -> Self {
        Self {
            regions: vec![bounds],
        }
    }

    /// Number of rectangles currently held
    pub const fn len(&self) -> usize {
        self.regions.len()
    }

    /// Test whether the pool holds no rectangles
    pub const fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Remove and return a uniformly random member
    ///
    /// Returns `None` on an empty pool. The vacated slot is filled by the
    /// last member, so indices of remaining rectangles are not stable.
    pub fn draw<R: Rng>(&mut self, rng: &mut R) -> Option<Rect> {
        if self.regions.is_empty() {
            return None;
        }
        let index = rng.random_range(0..self.regions.len());
        Some(self.regions.swap_remove(index))
    }

    /// Add a rectangle to the pool
    pub fn insert(&mut self, rect: Rect) {
        self.regions.push(rect);
    }

    /// View the current members without consuming the pool
    pub fn regions(&self) -> &[Rect] {
        &self.regions
    }

    /// Consume the pool and hand the accumulated regions to the caller
    pub fn into_regions(self) -> Vec<Rect> {
        self.regions
    }
}
