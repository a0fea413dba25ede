use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{Instrument, error, info, info_span};

use catalog_ingest::{clean_records, read_source, write_cleaned};
use catalog_load::{ConnectionOptions, load_tables};
use catalog_model::{CatalogTables, CleanedRecord};
use catalog_transform::transform_all;

use crate::cli::{CleanArgs, ConnectionArgs, RunArgs};
use crate::types::{LoadOutcome, RunOutcome};

/// Clean the source dataset and write the cleaned CSV.
pub fn run_clean(args: &CleanArgs) -> Result<()> {
    let span = info_span!("clean", input = %args.input.display());
    let _guard = span.enter();
    let start = Instant::now();
    let records = read_source(&args.input).context("read source dataset")?;
    let raw_count = records.len();
    let cleaned = clean_records(records);
    let output = args
        .output
        .clone()
        .unwrap_or_else(|| default_clean_path(&args.input));
    write_cleaned(&output, &cleaned).context("write cleaned dataset")?;
    info!(
        raw = raw_count,
        cleaned = cleaned.len(),
        output = %output.display(),
        duration_ms = start.elapsed().as_millis(),
        "clean complete"
    );
    Ok(())
}

/// Run the full pipeline: extract, clean, transform and (unless dry-run)
/// load into the database.
pub fn run_pipeline(args: &RunArgs) -> Result<RunOutcome> {
    let cleaned = extract_stage(&args.input)?;
    let tables = transform_stage(&cleaned);

    if args.dry_run {
        info!("dry run, skipping database load");
        return Ok(RunOutcome {
            record_count: cleaned.len(),
            tables,
            load: LoadOutcome::Skipped,
            success: true,
        });
    }

    let options = connection_options(&args.connection);
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("build async runtime")?;
    let load_span = info_span!(
        "load",
        server = %options.server,
        database = %options.database
    );
    let load = runtime.block_on(load_stage(&options, &tables).instrument(load_span));
    let success = !matches!(load, LoadOutcome::ConnectionFailed(_));
    Ok(RunOutcome {
        record_count: cleaned.len(),
        tables,
        load,
        success,
    })
}

fn extract_stage(input: &Path) -> Result<Vec<CleanedRecord>> {
    let span = info_span!("extract", input = %input.display());
    let _guard = span.enter();
    let start = Instant::now();
    let records = read_source(input).context("read source dataset")?;
    let raw_count = records.len();
    let cleaned = clean_records(records);
    info!(
        raw = raw_count,
        cleaned = cleaned.len(),
        duration_ms = start.elapsed().as_millis(),
        "extract complete"
    );
    Ok(cleaned)
}

fn transform_stage(cleaned: &[CleanedRecord]) -> CatalogTables {
    let span = info_span!("transform");
    let _guard = span.enter();
    let start = Instant::now();
    let tables = transform_all(cleaned);
    info!(
        total_rows = tables.total_rows(),
        duration_ms = start.elapsed().as_millis(),
        "transform complete"
    );
    tables
}

async fn load_stage(options: &ConnectionOptions, tables: &CatalogTables) -> LoadOutcome {
    let pool = match options.connect().await {
        Ok(pool) => pool,
        Err(load_error) => {
            error!(
                error = %load_error,
                "connection failed, aborting load before any insert"
            );
            return LoadOutcome::ConnectionFailed(load_error.to_string());
        }
    };
    let results = load_tables(&pool, tables).await;
    pool.close().await;
    LoadOutcome::Completed(results)
}

fn connection_options(args: &ConnectionArgs) -> ConnectionOptions {
    ConnectionOptions {
        server: args.server.clone(),
        database: args.database.clone(),
        username: args.username.clone(),
        password: args.password.clone(),
    }
}

fn default_clean_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "catalog".to_string());
    input.with_file_name(format!("{stem}_clean.csv"))
}
