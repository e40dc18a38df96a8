//! Chroma Core - parallel channel-swap batch pipeline.
//!
//! Chroma reads every file in an input directory, swaps the green and
//! blue channels of each decodable image, writes the result as JPEG to
//! an output directory, and measures how batch time scales as the worker
//! pool grows from one thread up to a configured maximum.
//!
//! # Architecture
//!
//! ```text
//! List dir → per pool size: [decode → swap → encode JPEG → write] × N workers
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! use chroma_core::{BatchRunner, BenchmarkDriver, FileDiscovery, OutputConfig};
//!
//! fn main() -> chroma_core::Result<()> {
//!     let inputs = FileDiscovery::list("./photos".as_ref())?;
//!     let runner = BatchRunner::new("./out", &OutputConfig::default());
//!     let entries = BenchmarkDriver::new(runner).benchmark(&inputs, 7)?;
//!     for entry in &entries {
//!         println!("{}: {} ms", entry.pool_size, entry.result.elapsed.as_millis());
//!     }
//!     Ok(())
//! }
//! ```

// Module declarations
pub mod bench;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod types;

// Re-exports for convenient access
pub use bench::BenchmarkDriver;
pub use config::{BenchConfig, OutputConfig};
pub use error::{ChromaError, ItemError, ListingError, PoolError, Result};
pub use pipeline::{BatchRunner, ChannelSwap, FileDiscovery, ImageDecoder, JpegWriter};
pub use types::{BenchEntry, RunResult};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
