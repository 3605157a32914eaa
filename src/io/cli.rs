//! Command-line interface for generating and checking canvas partitions

use crate::algorithm::partitioner::{SplitAlgorithm, SplitRequest, partition_seeded};
use crate::analysis::coverage::verify_coverage;
use crate::analysis::statistics::RegionStatistics;
use crate::io::configuration::{
    DEFAULT_ALGORITHM, DEFAULT_CANVAS_SIZE, DEFAULT_SEED, DEFAULT_SPLIT_COUNT,
};
use crate::io::error::{Result, invalid_split_count, unknown_algorithm};
use crate::spatial::rect::Rect;
use clap::Parser;

#[derive(Parser)]
#[command(name = "splitmosaic")]
#[command(
    author,
    version,
    about = "Split a canvas into rectangular regions for avatar layouts"
)]
/// Command-line arguments for the partition generation tool
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Splitting algorithm selector
    #[arg(short, long, default_value = DEFAULT_ALGORITHM)]
    pub algorithm: String,

    /// Canvas edge length in canvas units
    #[arg(long, default_value_t = DEFAULT_CANVAS_SIZE)]
    pub size: u32,

    /// Number of splits to request from the algorithm
    #[arg(short = 'n', long, default_value_t = DEFAULT_SPLIT_COUNT)]
    pub splits: usize,

    /// Random seed for reproducible partitions
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Force both axes of the balanced grid to the same depth
    #[arg(long)]
    pub square: bool,

    /// List the available algorithm selectors and exit
    #[arg(short, long)]
    pub list: bool,

    /// Check the generated partition for gaps and overlaps
    #[arg(long)]
    pub verify: bool,

    /// Reject unknown algorithm selectors instead of falling back
    #[arg(long)]
    pub strict: bool,

    /// Print regions only, without the summary block
    #[arg(short, long)]
    pub quiet: bool,
}

/// Orchestrates partition generation and report printing
pub struct PartitionRunner {
    cli: Cli,
}

impl PartitionRunner {
    /// Create a runner over parsed command-line arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Canvas bounds implied by the requested size
    ///
    /// # Errors
    ///
    /// Returns an error if the size is zero.
    pub fn bounds(&self) -> Result<Rect> {
        Rect::new(
            0.0,
            0.0,
            f64::from(self.cli.size),
            f64::from(self.cli.size),
        )
    }

    /// Build the partition request from the parsed arguments
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The requested split count is zero
    /// - Strict mode is on and the algorithm selector is unknown
    pub fn request(&self) -> Result<SplitRequest> {
        if self.cli.splits == 0 {
            return Err(invalid_split_count(
                0,
                "at least one split must be requested",
            ));
        }

        let algorithm = if self.cli.strict {
            SplitAlgorithm::from_name_strict(&self.cli.algorithm)
                .ok_or_else(|| unknown_algorithm(&self.cli.algorithm))?
        } else {
            SplitAlgorithm::from_name(&self.cli.algorithm)
        };

        Ok(SplitRequest {
            algorithm,
            split_count: self.cli.splits,
            square_mode: self.cli.square,
        })
    }

    /// Generate the partition and print one region per line
    ///
    /// # Errors
    ///
    /// Returns an error if argument validation, partitioning, or coverage
    /// checking fails.
    // Partition reports go to stdout for piping into other tools
    #[allow(clippy::print_stdout)]
    pub fn run(&self) -> Result<()> {
        if self.cli.list {
            for name in SplitAlgorithm::selectable_names() {
                println!("{name}");
            }
            return Ok(());
        }

        let bounds = self.bounds()?;
        let request = self.request()?;
        let regions = partition_seeded(bounds, &request, self.cli.seed)?;

        for region in &regions {
            println!("{region}");
        }

        if !self.cli.quiet {
            let statistics = RegionStatistics::from_regions(&bounds, &regions);
            println!();
            println!("algorithm: {}", request.algorithm);
            println!("seed: {}", self.cli.seed);
            println!("regions: {}", statistics.count);
            println!("mean area: {:.2}", statistics.mean_area);
            println!("area spread: {:.2}", statistics.area_std_dev);
            println!("widest aspect: {:.2}", statistics.widest_aspect);
        }

        if self.cli.verify {
            let report = verify_coverage(&bounds, &regions)?;
            println!(
                "coverage: {} cells, {} gaps, {} overlaps",
                report.cells, report.gap_cells, report.overlap_cells
            );
        }

        Ok(())
    }
}
