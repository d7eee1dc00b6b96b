use std::io;

use thiserror::Error;

/// Error type for configuration, sink, and report failures.
///
/// Record generation itself cannot fail; every variant comes from the
/// surrounding plumbing.
#[derive(Debug, Error)]
pub enum SynthError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("csv sink failure: {0}")]
    Csv(#[from] csv::Error),
    #[error("configuration error: {0}")]
    Configuration(String),
    #[error("report serialization failure: {0}")]
    Report(#[from] serde_json::Error),
}
