#![deny(unsafe_code)]

use serde::{Deserialize, Serialize};

/// One raw row of the source CSV, exactly as read from disk.
///
/// All fields are optional text: the source format leaves cells empty for
/// missing values and the cleaner decides what is genuinely absent. Typed
/// parsing (dates, years, durations) happens in [`crate::clean`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SourceRecord {
    pub show_id: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub title: Option<String>,
    pub director: Option<String>,
    pub cast: Option<String>,
    pub country: Option<String>,
    pub date_added: Option<String>,
    pub release_year: Option<String>,
    pub rating: Option<String>,
    pub duration: Option<String>,
    pub listed_in: Option<String>,
    pub description: Option<String>,
}
