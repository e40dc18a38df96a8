//! Chroma CLI - channel-swap a directory of images while measuring how
//! batch throughput scales with worker pool size.
//!
//! # Usage
//!
//! ```bash
//! chroma ./photos ./out
//! ```
//!
//! Every file in the input directory is decoded, its green and blue
//! channels swapped, and the result written as JPEG under the same file
//! name in the output directory. The whole batch is repeated once per
//! pool size from 1 to the configured maximum, and each run's wall-clock
//! time is printed to stdout.

use std::path::PathBuf;

use clap::Parser;

use chroma_core::{BatchRunner, BenchConfig, BenchmarkDriver, FileDiscovery, OutputConfig};

mod logging;

/// Chroma - batch channel-swap with a pool-size scaling benchmark.
#[derive(Parser, Debug)]
#[command(name = "chroma")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Directory containing the input images
    input_dir: Option<PathBuf>,

    /// Directory the transformed images are written to
    output_dir: Option<PathBuf>,

    /// Enable verbose (debug) logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    // Missing directories are not an error: print usage and exit cleanly.
    let (Some(input_dir), Some(output_dir)) = (cli.input_dir, cli.output_dir) else {
        println!("Please specify input and output directory!");
        println!("Usage: chroma <INPUT_DIR> <OUTPUT_DIR>");
        return Ok(());
    };

    tracing::debug!("Chroma v{}", chroma_core::VERSION);

    let inputs = FileDiscovery::list(&input_dir)?;
    tracing::info!("Found {} input files in {:?}", inputs.len(), input_dir);

    let runner = BatchRunner::new(output_dir, &OutputConfig::default());
    let driver = BenchmarkDriver::new(runner);
    let entries = driver.benchmark(&inputs, BenchConfig::default().max_pool_size)?;

    for entry in &entries {
        println!(
            "pool size {}, time: {} ms",
            entry.pool_size,
            entry.result.elapsed.as_millis()
        );
    }

    Ok(())
}
