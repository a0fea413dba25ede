#![deny(unsafe_code)]

//! The transform stage: decomposes cleaned denormalized records into
//! normalized entity tables and many-to-many junction tables.

pub mod context;
pub mod extract;
pub mod transform;

pub use context::TransformContext;
pub use extract::{EntityCatalog, extract_entities};
pub use transform::transform_all;
