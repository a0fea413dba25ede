#![deny(unsafe_code)]

use crate::extract::EntityCatalog;

/// Per-run extraction state: one value-to-identifier catalog per entity
/// kind, created fresh for each pipeline execution and discarded after the
/// transform completes. The three id spaces are fully independent.
#[derive(Debug, Default)]
pub struct TransformContext {
    pub directors: EntityCatalog,
    pub casts: EntityCatalog,
    pub genres: EntityCatalog,
}

impl TransformContext {
    pub fn new() -> Self {
        Self::default()
    }
}
