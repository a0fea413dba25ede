#![deny(unsafe_code)]

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One catalog entry after cleaning.
///
/// Free-text fields carry normalized values: trimmed, single internal
/// spaces, `", "` comma spacing. `None` marks an absent value, distinct
/// from an empty string which never survives normalization.
///
/// The natural key (`show_id`) is unique within a cleaned dataset;
/// duplicates are removed during cleaning with the first occurrence kept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CleanedRecord {
    /// Natural key from the source dataset.
    pub show_id: String,
    /// Categorical kind, e.g. "Movie" or "TV Show" (`type` in the source).
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub title: Option<String>,
    /// Raw multi-valued director field, comma separated.
    pub director: Option<String>,
    /// Raw multi-valued cast field, comma separated.
    pub cast: Option<String>,
    pub country: Option<String>,
    pub date_added: Option<NaiveDate>,
    pub release_year: Option<i32>,
    pub rating: Option<String>,
    /// Magnitude extracted from the raw duration text, e.g. 90 for "90 min".
    pub duration_int: Option<i64>,
    /// Unit word extracted from the raw duration text, e.g. "min" or "Seasons".
    pub duration_type: Option<String>,
    /// Raw multi-valued genre field, comma separated (`listed_in` in the source).
    pub listed_in: Option<String>,
    pub description: Option<String>,
}
