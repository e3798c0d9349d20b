//! Error types for the estimator and its command-line front end.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// The requested sample count could not be parsed.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Reading the count or writing the report failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A parallel run was requested with zero workers.
    #[error("At least one worker is required")]
    NoWorkers,

    /// A sampling thread panicked before returning its partial count.
    #[error("Worker {0} panicked")]
    WorkerPanicked(usize),

    /// A tokio sampling task was cancelled or panicked.
    #[error("Task join failed: {0}")]
    TaskJoin(String),
}

impl From<tokio::task::JoinError> for Error {
    fn from(e: tokio::task::JoinError) -> Self {
        Error::TaskJoin(e.to_string())
    }
}
