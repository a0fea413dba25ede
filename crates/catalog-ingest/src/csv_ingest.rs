#![deny(unsafe_code)]

//! CSV reading and writing at the pipeline boundaries.

use std::path::Path;

use tracing::info;

use catalog_model::CleanedRecord;

use crate::error::Result;
use crate::source::SourceRecord;

/// Read the denormalized source CSV.
///
/// A missing or structurally unparseable file is fatal and aborts the run;
/// there is no row-level recovery at this stage.
pub fn read_source(csv_path: &Path) -> Result<Vec<SourceRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(csv_path)?;
    let mut records = Vec::new();
    for result in reader.deserialize() {
        records.push(result?);
    }
    info!(
        path = %csv_path.display(),
        records = records.len(),
        "source dataset loaded"
    );
    Ok(records)
}

/// Write cleaned records back out as CSV, dates in ISO `YYYY-MM-DD` form.
pub fn write_cleaned(csv_path: &Path, records: &[CleanedRecord]) -> Result<()> {
    let mut writer = csv::Writer::from_path(csv_path)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    info!(
        path = %csv_path.display(),
        records = records.len(),
        "cleaned dataset written"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::read_source;

    const SAMPLE: &str = "\
show_id,type,title,director,cast,country,date_added,release_year,rating,duration,listed_in,description
s1,Movie,Example One,Alice,  Bob ,US,\"September 9, 2019\",2019,PG,90 min,\"Drama, Comedy\",A film.
s2,TV Show,Example Two,,,,\"January 1, 2020\",2020,TV-MA,2 Seasons,Drama,
";

    #[test]
    fn reads_source_csv_with_empty_cells_as_absent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.csv");
        std::fs::write(&path, SAMPLE).unwrap();

        let records = read_source(&path).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].show_id.as_deref(), Some("s1"));
        assert_eq!(records[0].kind.as_deref(), Some("Movie"));
        assert_eq!(records[1].director, None);
        assert_eq!(records[1].description, None);
    }

    #[test]
    fn missing_file_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("does-not-exist.csv");
        assert!(read_source(&path).is_err());
    }
}
