#![deny(unsafe_code)]

pub mod record;
pub mod tables;

pub use record::CleanedRecord;
pub use tables::{CatalogTables, EntityRow, JunctionRow, TitleRow};
