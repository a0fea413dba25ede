use catalog_load::TableLoadResult;
use catalog_model::CatalogTables;

/// Result of a full pipeline run, carried to the summary printer.
pub struct RunOutcome {
    /// Cleaned records surviving deduplication.
    pub record_count: usize,
    pub tables: CatalogTables,
    pub load: LoadOutcome,
    /// Overall success: false only when the database connection could not
    /// be established. Individual table failures are reported, not fatal.
    pub success: bool,
}

pub enum LoadOutcome {
    /// Dry run: transform only, no load attempted.
    Skipped,
    /// Connection could not be established; no insert was attempted.
    ConnectionFailed(String),
    /// Load ran to completion, possibly with per-table failures.
    Completed(Vec<TableLoadResult>),
}
