#![deny(unsafe_code)]

use thiserror::Error;

/// Errors raised by the load stage.
///
/// `Connection` is fatal: the run halts before any insert is attempted.
/// `Database` errors during a table insert are captured per table in a
/// [`crate::TableLoadResult`] instead of propagating.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("database connection failed: {0}")]
    Connection(#[source] sqlx::Error),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}
