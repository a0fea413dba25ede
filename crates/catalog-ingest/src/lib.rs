#![deny(unsafe_code)]

//! Extraction and cleaning stage for the catalog ETL pipeline.
//!
//! Reads the denormalized source CSV, normalizes free-text fields, parses
//! dates and compound durations, and deduplicates records by natural key.
//! The output is a sequence of [`catalog_model::CleanedRecord`] values ready
//! for the relational transform.

pub mod clean;
pub mod csv_ingest;
pub mod error;
pub mod normalize;
pub mod source;

pub use clean::clean_records;
pub use csv_ingest::{read_source, write_cleaned};
pub use error::{IngestError, Result};
pub use normalize::normalize;
pub use source::SourceRecord;
