#![deny(unsafe_code)]

//! Record cleaning: natural-key deduplication, date and duration parsing,
//! and free-text normalization.

use std::collections::HashSet;
use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use tracing::{debug, warn};

use catalog_model::CleanedRecord;

use crate::normalize::normalize;
use crate::source::SourceRecord;

/// Matches a compound duration such as "90 min" or "2 Seasons": a leading
/// integer magnitude and a trailing unit word.
static DURATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)\s*(\w+)").expect("valid regex"));

/// Date formats observed in the source data, tried in order.
const DATE_FORMATS: &[&str] = &["%B %e, %Y", "%Y-%m-%d", "%m/%d/%Y"];

/// Clean a batch of raw records.
///
/// Deduplicates by natural key keeping the first occurrence in input order
/// (later duplicates are discarded, so input order affects the result).
/// Relative order of surviving records is preserved. Records whose natural
/// key normalizes to absent are dropped with a warning.
pub fn clean_records(records: Vec<SourceRecord>) -> Vec<CleanedRecord> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut cleaned = Vec::with_capacity(records.len());
    for (index, record) in records.into_iter().enumerate() {
        let Some(show_id) = normalize(record.show_id.as_deref()) else {
            warn!(row = index + 1, "dropping record with absent natural key");
            continue;
        };
        if !seen.insert(show_id.clone()) {
            debug!(show_id = %show_id, row = index + 1, "duplicate natural key, keeping first occurrence");
            continue;
        }
        cleaned.push(clean_one(show_id, &record));
    }
    cleaned
}

fn clean_one(show_id: String, record: &SourceRecord) -> CleanedRecord {
    let (duration_int, duration_type) = parse_duration(record.duration.as_deref());
    CleanedRecord {
        show_id,
        kind: normalize(record.kind.as_deref()),
        title: normalize(record.title.as_deref()),
        director: normalize(record.director.as_deref()),
        cast: normalize(record.cast.as_deref()),
        country: normalize(record.country.as_deref()),
        date_added: parse_date_added(record.date_added.as_deref()),
        release_year: parse_release_year(record.release_year.as_deref()),
        rating: normalize(record.rating.as_deref()),
        duration_int,
        duration_type,
        listed_in: normalize(record.listed_in.as_deref()),
        description: normalize(record.description.as_deref()),
    }
}

/// Parse the `date_added` column. Unparseable or missing values become
/// `None`, never an error.
pub fn parse_date_added(value: Option<&str>) -> Option<NaiveDate> {
    let text = value?.trim();
    if text.is_empty() {
        return None;
    }
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(text, format) {
            return Some(date);
        }
    }
    debug!(value = text, "unparseable date_added, treating as absent");
    None
}

/// Split a raw duration into magnitude and unit.
///
/// "90 min" yields `(Some(90), Some("min"))`; text with no
/// `<digits><whitespace><word>` shape yields `(None, None)`. A magnitude
/// that overflows `i64` yields `None` while the unit is kept.
pub fn parse_duration(value: Option<&str>) -> (Option<i64>, Option<String>) {
    let Some(text) = value else {
        return (None, None);
    };
    let Some(captures) = DURATION.captures(text) else {
        if !text.trim().is_empty() {
            debug!(value = text, "unparseable duration, treating as absent");
        }
        return (None, None);
    };
    let magnitude = captures[1].parse::<i64>().ok();
    let unit = Some(captures[2].to_string());
    (magnitude, unit)
}

/// Parse the release year leniently; malformed values become `None`.
pub fn parse_release_year(value: Option<&str>) -> Option<i32> {
    value?.trim().parse().ok()
}
