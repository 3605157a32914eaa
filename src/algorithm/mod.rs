/// Balanced exponential grid splitting
pub mod balanced;
/// Random recursive bisection
pub mod bisection;
/// Mondrian-style biased bisection
pub mod mondrian;
/// Algorithm selection and dispatch
pub mod partitioner;
/// Uniform column and row splitting
pub mod uniform;

pub use partitioner::{SplitAlgorithm, SplitRequest, partition, partition_seeded};
