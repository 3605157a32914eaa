//! Algorithm selection and top-level partition dispatch

use crate::algorithm::balanced::split_average;
use crate::algorithm::bisection::split_random;
use crate::algorithm::mondrian::split_mondrian;
use crate::algorithm::uniform::{split_columns, split_rows};
use crate::io::configuration::{DEFAULT_ALGORITHM, DEFAULT_SPLIT_COUNT};
use crate::io::error::Result;
use crate::spatial::rect::Rect;
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::fmt;

/// Splitting strategies the partitioner can dispatch to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitAlgorithm {
    /// Recursive bisection of randomly drawn regions
    Random,
    /// Exponential grid with a Gaussian column depth draw
    Average,
    /// Biased bisection with a minimum pane size
    Mondrian,
    /// Equal-width columns
    CompleteDown,
    /// Equal-height rows
    CompleteLine,
    /// Leave the bounds whole
    Identity,
}

impl SplitAlgorithm {
    /// Resolve a selector string, mapping unknown names to [`Self::Identity`]
    pub fn from_name(name: &str) -> Self {
        Self::from_name_strict(name).unwrap_or(Self::Identity)
    }

    /// Resolve a selector string, rejecting unknown names
    pub fn from_name_strict(name: &str) -> Option<Self> {
        match name {
            "random" => Some(Self::Random),
            "average" => Some(Self::Average),
            "mondrian" => Some(Self::Mondrian),
            "complete_down" => Some(Self::CompleteDown),
            "complete_line" => Some(Self::CompleteLine),
            _ => None,
        }
    }

    /// Canonical selector name
    pub const fn name(self) -> &'static str {
        match self {
            Self::Random => "random",
            Self::Average => "average",
            Self::Mondrian => "mondrian",
            Self::CompleteDown => "complete_down",
            Self::CompleteLine => "complete_line",
            Self::Identity => "identity",
        }
    }

    /// Selector names accepted without falling back, in presentation order
    pub const fn selectable_names() -> [&'static str; 5] {
        [
            "random",
            "average",
            "mondrian",
            "complete_down",
            "complete_line",
        ]
    }
}

impl fmt::Display for SplitAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Parameters for a single partitioning run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitRequest {
    /// Strategy to dispatch to
    pub algorithm: SplitAlgorithm,
    /// Number of splits or slices the strategy is asked for
    pub split_count: usize,
    /// Force both axes of the balanced grid to the same depth
    pub square_mode: bool,
}

impl Default for SplitRequest {
    fn default() -> Self {
        Self {
            algorithm: SplitAlgorithm::from_name(DEFAULT_ALGORITHM),
            split_count: DEFAULT_SPLIT_COUNT,
            square_mode: false,
        }
    }
}

/// Run the requested splitting strategy over the bounds
///
/// The identity strategy returns the bounds as the single region, so callers
/// always get a usable partition back for any resolved selector.
///
/// # Errors
///
/// Returns an error if:
/// - The bounds have non-positive width or height
/// - The request carries a split count the strategy rejects
pub fn partition<R: Rng>(bounds: Rect, request: &SplitRequest, rng: &mut R) -> Result<Vec<Rect>> {
    bounds.validate()?;

    match request.algorithm {
        SplitAlgorithm::Random => split_random(bounds, request.split_count, rng),
        SplitAlgorithm::Average => {
            split_average(bounds, request.split_count, request.square_mode, rng)
        }
        SplitAlgorithm::Mondrian => split_mondrian(bounds, request.split_count, rng),
        SplitAlgorithm::CompleteDown => split_columns(bounds, request.split_count),
        SplitAlgorithm::CompleteLine => split_rows(bounds, request.split_count),
        SplitAlgorithm::Identity => Ok(vec![bounds]),
    }
}

/// Run the requested strategy with a fresh deterministic generator
///
/// Two calls with identical arguments produce identical partitions.
///
/// # Errors
///
/// Returns an error if:
/// - The bounds have non-positive width or height
/// - The request carries a split count the strategy rejects
pub fn partition_seeded(bounds: Rect, request: &SplitRequest, seed: u64) -> Result<Vec<Rect>> {
    let mut rng = StdRng::seed_from_u64(seed);
    partition(bounds, request, &mut rng)
}
