//! Mathematical utilities for the splitting algorithms

/// Probability distributions and sampling functions
pub mod probability;
