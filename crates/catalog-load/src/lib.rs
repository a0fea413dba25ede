#![deny(unsafe_code)]

//! Load stage for the catalog ETL pipeline.
//!
//! Persists the transformed table set to PostgreSQL in dependency order
//! (entity and parent tables before the junction tables that reference
//! them). One table's insert failure is recorded and never blocks the
//! remaining tables; only a failed connection aborts the load.

pub mod connection;
pub mod error;
pub mod loader;

pub use connection::ConnectionOptions;
pub use error::LoadError;
pub use loader::{TableLoadResult, load_tables};
