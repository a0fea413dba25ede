//! CLI library components for the media catalog ETL.

pub mod cli;
pub mod commands;
pub mod types;
