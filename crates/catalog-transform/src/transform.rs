#![deny(unsafe_code)]

//! Relational transformer: orchestrates entity extraction and builds the
//! full normalized table set from cleaned records.

use tracing::debug;

use catalog_model::{CatalogTables, CleanedRecord, TitleRow};

use crate::context::TransformContext;
use crate::extract::extract_entities;

/// Build the seven output tables from a cleaned record set.
///
/// Pure function of its input: titles appear in cleaned-record order, the
/// extractor runs once per multi-valued field with an independent id space
/// each, and referential integrity holds by construction (junction rows are
/// only ever derived from records present in `titles` and identifiers the
/// extractor just assigned).
pub fn transform_all(records: &[CleanedRecord]) -> CatalogTables {
    let titles = records.iter().map(title_row).collect::<Vec<_>>();

    let mut context = TransformContext::new();
    let title_director = extract_entities(records, |r| r.director.as_deref(), &mut context.directors);
    let title_cast = extract_entities(records, |r| r.cast.as_deref(), &mut context.casts);
    let title_genre = extract_entities(records, |r| r.listed_in.as_deref(), &mut context.genres);
    debug!(
        directors = context.directors.len(),
        casts = context.casts.len(),
        genres = context.genres.len(),
        "entity extraction complete"
    );

    CatalogTables {
        titles,
        directors: context.directors.into_rows(),
        casts: context.casts.into_rows(),
        genres: context.genres.into_rows(),
        title_director,
        title_cast,
        title_genre,
    }
}

fn title_row(record: &CleanedRecord) -> TitleRow {
    TitleRow {
        show_id: record.show_id.clone(),
        kind: record.kind.clone(),
        title: record.title.clone(),
        country: record.country.clone(),
        date_added: record.date_added,
        release_year: record.release_year,
        rating: record.rating.clone(),
        duration_int: record.duration_int,
        duration_type: record.duration_type.clone(),
        description: record.description.clone(),
    }
}
