//! Error types for the Chroma batch pipeline.
//!
//! The taxonomy separates fatal failures from per-item ones: a listing or
//! pool lifecycle failure aborts the whole benchmark, while a decode or
//! write failure is confined to the item that hit it and only survives as
//! a count in the run summary.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for Chroma operations.
///
/// Only the fatal failure classes appear here; per-item errors
/// ([`ItemError`]) are handled inside the worker that encounters them and
/// never reach this level.
#[derive(Error, Debug)]
pub enum ChromaError {
    /// Input directory could not be enumerated
    #[error(transparent)]
    Listing(#[from] ListingError),

    /// Worker pool lifecycle failed
    #[error(transparent)]
    Pool(#[from] PoolError),
}

/// Failure to enumerate the input directory.
///
/// Listing is a precondition of the whole benchmark, not a per-item
/// operation, so this error is always fatal.
#[derive(Error, Debug)]
#[error("Failed to list input directory {path}: {message}")]
pub struct ListingError {
    /// Directory that could not be listed
    pub path: PathBuf,
    /// Underlying enumeration failure
    pub message: String,
}

/// Worker pool lifecycle errors.
///
/// Fatal to the current run and to any remaining benchmark iterations.
#[derive(Error, Debug)]
pub enum PoolError {
    /// Requested pool size is not a positive integer
    #[error("Invalid pool size {0}: must be at least 1")]
    InvalidSize(usize),

    /// The OS refused to spawn a worker thread
    #[error("Failed to spawn worker {worker}: {source}")]
    Spawn {
        worker: usize,
        source: std::io::Error,
    },

    /// A worker thread panicked instead of returning its tally
    #[error("Worker {worker} panicked")]
    WorkerPanicked { worker: usize },
}

/// Per-item processing errors.
///
/// These never propagate past the worker processing the item; they are
/// logged and folded into the run's failure count.
#[derive(Error, Debug)]
pub enum ItemError {
    /// Image decoding failed (unreadable, missing, or not an image)
    #[error("Decode error for {path}: {message}")]
    Decode { path: PathBuf, message: String },

    /// Encoding or writing the output file failed
    #[error("Write error for {path}: {message}")]
    Write { path: PathBuf, message: String },
}

/// Convenience type alias for Chroma results.
pub type Result<T> = std::result::Result<T, ChromaError>;
