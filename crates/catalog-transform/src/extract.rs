#![deny(unsafe_code)]

//! Entity extraction and deduplication.
//!
//! Splits a multi-valued free-text field (comma-separated director, cast or
//! genre values) into atomic values, deduplicates them across the whole
//! dataset and assigns each distinct value a surrogate identifier.

use std::collections::{HashMap, HashSet};

use catalog_model::{CleanedRecord, EntityRow, JunctionRow};

/// One deduplicated value-to-identifier mapping for a single entity kind.
///
/// Identifiers start at 1 and grow in first-seen order: dataset record order
/// first, split order within a record. Matching is case-sensitive on the
/// normalized value; `intern` is the only mutation and assigns an identifier
/// exactly once per distinct value.
#[derive(Debug, Default)]
pub struct EntityCatalog {
    ids: HashMap<String, i64>,
    rows: Vec<EntityRow>,
}

impl EntityCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the identifier for `name`, assigning the next sequential one
    /// on first sight.
    pub fn intern(&mut self, name: &str) -> i64 {
        if let Some(id) = self.ids.get(name) {
            return *id;
        }
        let id = self.rows.len() as i64 + 1;
        self.ids.insert(name.to_string(), id);
        self.rows.push(EntityRow {
            id,
            name: name.to_string(),
        });
        id
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Consume the catalog, yielding the entity table ordered by identifier.
    pub fn into_rows(self) -> Vec<EntityRow> {
        self.rows
    }
}

/// Extract junction rows for one multi-valued field across a record set.
///
/// `field` selects the raw comma-separated value from each record. An absent
/// field contributes no junction rows for that record. Values repeated
/// within a single record produce a single junction row (intra-record
/// dedupe); the same value across records shares one identifier via
/// `catalog`.
pub fn extract_entities<F>(
    records: &[CleanedRecord],
    field: F,
    catalog: &mut EntityCatalog,
) -> Vec<JunctionRow>
where
    F: Fn(&CleanedRecord) -> Option<&str>,
{
    let mut junctions = Vec::new();
    for record in records {
        let Some(raw) = field(record) else {
            continue;
        };
        let mut seen_in_record: HashSet<i64> = HashSet::new();
        for piece in raw.split(',') {
            let value = piece.trim();
            if value.is_empty() {
                continue;
            }
            let entity_id = catalog.intern(value);
            if seen_in_record.insert(entity_id) {
                junctions.push(JunctionRow {
                    show_id: record.show_id.clone(),
                    entity_id,
                });
            }
        }
    }
    junctions
}
