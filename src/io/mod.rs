//! Input, output, and error handling for the partitioning tool

/// Command-line interface and run orchestration
pub mod cli;
/// Runtime configuration defaults and safety limits
pub mod configuration;
/// Error types for partitioning operations
pub mod error;
