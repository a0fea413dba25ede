#![deny(unsafe_code)]

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One row of the `titles` table. Relationships to directors, cast members
/// and genres are expressed through junction rows, never inline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TitleRow {
    pub show_id: String,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub title: Option<String>,
    pub country: Option<String>,
    pub date_added: Option<NaiveDate>,
    pub release_year: Option<i32>,
    pub rating: Option<String>,
    pub duration_int: Option<i64>,
    pub duration_type: Option<String>,
    pub description: Option<String>,
}

/// One deduplicated entity value (director, cast member or genre) with its
/// surrogate identifier. Identifiers are assigned sequentially in first-seen
/// order and are stable for the life of a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityRow {
    pub id: i64,
    pub name: String,
}

/// A (title, entity) pair in a many-to-many junction table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JunctionRow {
    pub show_id: String,
    pub entity_id: i64,
}

/// The full normalized table set produced by one transform run.
///
/// Every entity id referenced from a junction table exists in the matching
/// entity table, and every `show_id` in a junction table exists in `titles`.
/// The three entity kinds use independent id spaces.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogTables {
    pub titles: Vec<TitleRow>,
    pub directors: Vec<EntityRow>,
    pub casts: Vec<EntityRow>,
    pub genres: Vec<EntityRow>,
    pub title_director: Vec<JunctionRow>,
    pub title_cast: Vec<JunctionRow>,
    pub title_genre: Vec<JunctionRow>,
}

impl CatalogTables {
    /// Total number of rows across all seven tables.
    pub fn total_rows(&self) -> usize {
        self.titles.len()
            + self.directors.len()
            + self.casts.len()
            + self.genres.len()
            + self.title_director.len()
            + self.title_cast.len()
            + self.title_genre.len()
    }
}
