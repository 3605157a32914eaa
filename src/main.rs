//! CLI entry point for the canvas partition generation tool

use clap::Parser;
use splitmosaic::io::cli::{Cli, PartitionRunner};

fn main() -> splitmosaic::Result<()> {
    let cli = Cli::parse();
    let runner = PartitionRunner::new(cli);
    runner.run()
}
