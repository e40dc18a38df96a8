//! Pool-size scaling benchmark.

use std::path::PathBuf;

use crate::error::Result;
use crate::pipeline::BatchRunner;
use crate::types::BenchEntry;

/// Sweeps worker pool sizes and records how batch time scales.
///
/// Runs are strictly sequential: one pool is created, drained, and torn
/// down before the next size starts, so runs never compete with each
/// other for cores. There is no cancellation; every run proceeds to
/// natural completion.
pub struct BenchmarkDriver {
    runner: BatchRunner,
}

impl BenchmarkDriver {
    /// Create a driver that reuses `runner` for every sweep iteration.
    pub fn new(runner: BatchRunner) -> Self {
        Self { runner }
    }

    /// Run the batch once per pool size from 1 to `max_pool_size`
    /// inclusive, in that order.
    ///
    /// A pool lifecycle failure aborts the sweep: entries for completed
    /// sizes are discarded and the error surfaces to the caller.
    pub fn benchmark(&self, inputs: &[PathBuf], max_pool_size: usize) -> Result<Vec<BenchEntry>> {
        let mut entries = Vec::with_capacity(max_pool_size);

        for pool_size in 1..=max_pool_size {
            let result = self.runner.run(pool_size, inputs)?;
            tracing::info!(
                "Pool size {pool_size}: {} attempted, {} succeeded, {} failed, {} ms ({:.1} img/sec)",
                result.attempted,
                result.succeeded,
                result.failed,
                result.elapsed.as_millis(),
                result.images_per_second()
            );
            entries.push(BenchEntry { pool_size, result });
        }

        Ok(entries)
    }
}
