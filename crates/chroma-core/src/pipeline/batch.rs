//! Batch execution across a fixed-size worker pool.

use std::path::{Path, PathBuf};
use std::thread;
use std::time::Instant;

use crossbeam_channel::Receiver;

use crate::config::OutputConfig;
use crate::error::{ItemError, PoolError};
use crate::types::RunResult;

use super::decode::ImageDecoder;
use super::encode::JpegWriter;
use super::transform::ChannelSwap;

/// Runs one pass over the input list with a bounded worker pool.
///
/// Work granularity is one image per unit: workers claim paths from a
/// shared queue, so exactly `pool_size` threads exist at any point and
/// every path is processed exactly once. A failed decode or write is
/// counted and the worker moves on; nothing short of a pool lifecycle
/// failure aborts the run.
pub struct BatchRunner {
    output_dir: PathBuf,
    writer: JpegWriter,
}

/// Per-worker counters, summed into a [`RunResult`] after the pool joins.
#[derive(Debug, Default, Clone, Copy)]
struct WorkerTally {
    attempted: usize,
    succeeded: usize,
    failed: usize,
}

impl BatchRunner {
    /// Create a runner that writes transformed images into `output_dir`.
    ///
    /// The directory is not created here: a missing destination surfaces
    /// as per-item write failures, never as a fatal error.
    pub fn new(output_dir: impl Into<PathBuf>, config: &OutputConfig) -> Self {
        Self {
            output_dir: output_dir.into(),
            writer: JpegWriter::new(config),
        }
    }

    /// Process every input path with exactly `pool_size` workers.
    ///
    /// Blocks until every item has been attempted and all workers have
    /// shut down. The reported duration spans pool creation through pool
    /// teardown, so thread startup cost is part of the measurement.
    pub fn run(&self, pool_size: usize, inputs: &[PathBuf]) -> Result<RunResult, PoolError> {
        if pool_size == 0 {
            return Err(PoolError::InvalidSize(0));
        }
        let cores = num_cpus::get();
        if pool_size > cores {
            tracing::debug!("Pool size {pool_size} exceeds {cores} available cores");
        }

        let (tx, jobs) = crossbeam_channel::unbounded::<PathBuf>();
        for path in inputs {
            // Unbounded queue with a live receiver: send cannot fail here
            let _ = tx.send(path.clone());
        }
        drop(tx);

        let started = Instant::now();

        let tallies = thread::scope(|scope| -> Result<Vec<WorkerTally>, PoolError> {
            let mut handles = Vec::with_capacity(pool_size);
            for worker in 0..pool_size {
                let jobs = jobs.clone();
                let handle = thread::Builder::new()
                    .name(format!("chroma-worker-{worker}"))
                    .spawn_scoped(scope, move || self.worker_loop(jobs))
                    .map_err(|source| PoolError::Spawn { worker, source })?;
                handles.push((worker, handle));
            }
            // Workers hold their own clones; dropping ours lets recv()
            // disconnect once the queue drains.
            drop(jobs);

            let mut tallies = Vec::with_capacity(pool_size);
            for (worker, handle) in handles {
                let tally = handle
                    .join()
                    .map_err(|_| PoolError::WorkerPanicked { worker })?;
                tallies.push(tally);
            }
            Ok(tallies)
        })?;

        let elapsed = started.elapsed();

        let mut result = RunResult {
            attempted: 0,
            succeeded: 0,
            failed: 0,
            elapsed,
        };
        for tally in tallies {
            result.attempted += tally.attempted;
            result.succeeded += tally.succeeded;
            result.failed += tally.failed;
        }

        tracing::debug!(
            "Run with pool size {pool_size}: {}/{} succeeded in {:?}",
            result.succeeded,
            result.attempted,
            result.elapsed
        );
        Ok(result)
    }

    /// Pull paths off the queue until it drains, tallying outcomes.
    fn worker_loop(&self, jobs: Receiver<PathBuf>) -> WorkerTally {
        let mut tally = WorkerTally::default();
        while let Ok(path) = jobs.recv() {
            tally.attempted += 1;
            match self.process_one(&path) {
                Ok(()) => tally.succeeded += 1,
                Err(e) => {
                    tally.failed += 1;
                    tracing::warn!("Skipping item: {e}");
                }
            }
        }
        tally
    }

    /// decode → swap channels → encode → write for a single input file.
    ///
    /// The output keeps the input's file name (extension included) while
    /// the content is always JPEG.
    fn process_one(&self, path: &Path) -> Result<(), ItemError> {
        let decoded = ImageDecoder::decode(path)?;
        let swapped = ChannelSwap::apply(&decoded);

        let dest = match path.file_name() {
            Some(name) => self.output_dir.join(name),
            None => {
                return Err(ItemError::Write {
                    path: path.to_path_buf(),
                    message: "input path has no file name".to_string(),
                })
            }
        };
        self.writer.encode_and_write(&swapped, &dest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    fn write_png(dir: &Path, name: &str, color: [u8; 3]) -> PathBuf {
        let path = dir.join(name);
        RgbImage::from_pixel(2, 2, Rgb(color)).save(&path).unwrap();
        path
    }

    #[test]
    fn test_zero_pool_size_rejected() {
        let out = tempfile::tempdir().unwrap();
        let runner = BatchRunner::new(out.path(), &OutputConfig::default());

        let err = runner.run(0, &[]).unwrap_err();
        assert!(matches!(err, PoolError::InvalidSize(0)));
    }

    #[test]
    fn test_empty_input_list() {
        let out = tempfile::tempdir().unwrap();
        let runner = BatchRunner::new(out.path(), &OutputConfig::default());

        let result = runner.run(3, &[]).unwrap();
        assert_eq!(result.attempted, 0);
        assert_eq!(result.succeeded, 0);
        assert_eq!(result.failed, 0);
    }

    #[test]
    fn test_every_item_attempted_once() {
        let input = tempfile::tempdir().unwrap();
        let out = tempfile::tempdir().unwrap();
        let inputs: Vec<_> = (0..8)
            .map(|i| write_png(input.path(), &format!("img-{i}.png"), [i as u8, 0, 0]))
            .collect();

        let runner = BatchRunner::new(out.path(), &OutputConfig::default());
        let result = runner.run(3, &inputs).unwrap();

        assert_eq!(result.attempted, 8);
        assert_eq!(result.succeeded, 8);
        assert_eq!(result.failed, 0);
    }

    #[test]
    fn test_output_keeps_input_file_name() {
        let input = tempfile::tempdir().unwrap();
        let out = tempfile::tempdir().unwrap();
        let inputs = vec![write_png(input.path(), "photo.png", [5, 6, 7])];

        let runner = BatchRunner::new(out.path(), &OutputConfig::default());
        runner.run(1, &inputs).unwrap();

        assert!(out.path().join("photo.png").exists());
    }

    #[test]
    fn test_corrupt_file_is_counted_not_fatal() {
        let input = tempfile::tempdir().unwrap();
        let out = tempfile::tempdir().unwrap();

        let mut inputs = vec![
            write_png(input.path(), "good-1.png", [1, 2, 3]),
            write_png(input.path(), "good-2.png", [4, 5, 6]),
        ];
        let corrupt = input.path().join("bad.png");
        std::fs::write(&corrupt, b"not an image").unwrap();
        inputs.push(corrupt);

        let runner = BatchRunner::new(out.path(), &OutputConfig::default());
        for pool_size in 1..=4 {
            let result = runner.run(pool_size, &inputs).unwrap();
            assert_eq!(result.attempted, 3);
            assert_eq!(result.succeeded, 2);
            assert_eq!(result.failed, 1);
        }
        assert!(!out.path().join("bad.png").exists());
    }

    #[test]
    fn test_missing_output_directory_counts_write_failures() {
        let input = tempfile::tempdir().unwrap();
        let out = tempfile::tempdir().unwrap();
        let missing = out.path().join("never-created");

        let inputs = vec![
            write_png(input.path(), "a.png", [1, 1, 1]),
            write_png(input.path(), "b.png", [2, 2, 2]),
        ];

        let runner = BatchRunner::new(&missing, &OutputConfig::default());
        let result = runner.run(2, &inputs).unwrap();

        assert_eq!(result.attempted, 2);
        assert_eq!(result.succeeded, 0);
        assert_eq!(result.failed, 2);
    }
}
