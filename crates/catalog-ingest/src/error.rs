#![deny(unsafe_code)]

use thiserror::Error;

/// Errors raised while reading or writing catalog datasets.
///
/// These are fatal: a missing or unparseable source file aborts the run.
/// Field-level parse problems (dates, durations) are recovered as absent
/// values inside the cleaner and never surface here.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, IngestError>;
