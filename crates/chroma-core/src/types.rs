//! Core data types for the Chroma batch pipeline.

use std::time::Duration;

/// Aggregate outcome of one batch run at a fixed pool size.
///
/// Counts are summed from per-worker tallies after every worker has
/// joined, so the totals are independent of completion order. Finalized
/// when the run returns and immutable thereafter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunResult {
    /// Items pulled off the work queue (one per input path)
    pub attempted: usize,

    /// Items that decoded, transformed, and wrote successfully
    pub succeeded: usize,

    /// Items skipped due to a decode or write failure
    pub failed: usize,

    /// Wall-clock time from pool creation through pool teardown.
    ///
    /// Worker startup and shutdown are inside the measured interval.
    pub elapsed: Duration,
}

impl RunResult {
    /// Successful items per second over the measured interval.
    pub fn images_per_second(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs > 0.0 {
            self.succeeded as f64 / secs
        } else {
            0.0
        }
    }
}

/// One benchmark data point: a pool size and the run it produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchEntry {
    /// Number of workers the run was executed with
    pub pool_size: usize,

    /// Summary of that run
    pub result: RunResult,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_images_per_second() {
        let result = RunResult {
            attempted: 10,
            succeeded: 8,
            failed: 2,
            elapsed: Duration::from_secs(2),
        };
        assert!((result.images_per_second() - 4.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_images_per_second_zero_elapsed() {
        let result = RunResult {
            attempted: 0,
            succeeded: 0,
            failed: 0,
            elapsed: Duration::ZERO,
        };
        assert_eq!(result.images_per_second(), 0.0);
    }
}
