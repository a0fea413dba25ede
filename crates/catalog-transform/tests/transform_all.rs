//! Integration tests for the relational transformer: table shapes,
//! identifier spaces and referential integrity over realistic record sets.

use std::collections::HashSet;

use catalog_model::{CleanedRecord, EntityRow, JunctionRow};
use catalog_transform::transform_all;

fn record(show_id: &str) -> CleanedRecord {
    CleanedRecord {
        show_id: show_id.to_string(),
        kind: Some("Movie".to_string()),
        title: Some(format!("Title {show_id}")),
        director: None,
        cast: None,
        country: None,
        date_added: None,
        release_year: Some(2020),
        rating: None,
        duration_int: Some(90),
        duration_type: Some("min".to_string()),
        listed_in: None,
        description: None,
    }
}

fn sample() -> Vec<CleanedRecord> {
    let a = CleanedRecord {
        director: Some("Alice, Bob".to_string()),
        cast: Some("Xena".to_string()),
        listed_in: Some("Drama, Comedy".to_string()),
        ..record("s1")
    };
    let b = CleanedRecord {
        director: Some("Bob, Carol".to_string()),
        listed_in: Some("Drama".to_string()),
        ..record("s2")
    };
    vec![a, b]
}

fn assert_integrity(junctions: &[JunctionRow], entities: &[EntityRow], titles: &HashSet<&str>) {
    let ids: HashSet<i64> = entities.iter().map(|e| e.id).collect();
    for junction in junctions {
        assert!(ids.contains(&junction.entity_id));
        assert!(titles.contains(junction.show_id.as_str()));
    }
}

#[test]
fn titles_follow_cleaned_record_order() {
    let tables = transform_all(&sample());
    let ids: Vec<&str> = tables.titles.iter().map(|t| t.show_id.as_str()).collect();
    assert_eq!(ids, vec!["s1", "s2"]);
    assert_eq!(tables.titles[0].duration_int, Some(90));
    assert_eq!(tables.titles[0].duration_type.as_deref(), Some("min"));
}

#[test]
fn entity_id_spaces_are_independent() {
    let tables = transform_all(&sample());
    // Directors, casts and genres each start their ids at 1.
    assert_eq!(tables.directors.first().map(|e| e.id), Some(1));
    assert_eq!(tables.casts.first().map(|e| e.id), Some(1));
    assert_eq!(tables.genres.first().map(|e| e.id), Some(1));
    assert_eq!(tables.directors.len(), 3);
    assert_eq!(tables.casts.len(), 1);
    assert_eq!(tables.genres.len(), 2);
}

#[test]
fn junction_tables_hold_referential_integrity() {
    let tables = transform_all(&sample());
    let titles: HashSet<&str> = tables.titles.iter().map(|t| t.show_id.as_str()).collect();
    assert_integrity(&tables.title_director, &tables.directors, &titles);
    assert_integrity(&tables.title_cast, &tables.casts, &titles);
    assert_integrity(&tables.title_genre, &tables.genres, &titles);
    assert_eq!(tables.title_director.len(), 4);
    assert_eq!(tables.title_cast.len(), 1);
    assert_eq!(tables.title_genre.len(), 3);
}

#[test]
fn every_entity_is_referenced_by_some_junction_row() {
    let tables = transform_all(&sample());
    for (entities, junctions) in [
        (&tables.directors, &tables.title_director),
        (&tables.casts, &tables.title_cast),
        (&tables.genres, &tables.title_genre),
    ] {
        let referenced: HashSet<i64> = junctions.iter().map(|j| j.entity_id).collect();
        for entity in entities.iter() {
            assert!(referenced.contains(&entity.id), "unreferenced {}", entity.name);
        }
    }
}

#[test]
fn no_two_distinct_values_share_an_identifier() {
    let tables = transform_all(&sample());
    for entities in [&tables.directors, &tables.casts, &tables.genres] {
        let ids: HashSet<i64> = entities.iter().map(|e| e.id).collect();
        let names: HashSet<&str> = entities.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(ids.len(), entities.len());
        assert_eq!(names.len(), entities.len());
    }
}

#[test]
fn transform_is_deterministic() {
    let records = sample();
    assert_eq!(transform_all(&records), transform_all(&records));
}

#[test]
fn records_without_multivalue_fields_yield_empty_entity_tables() {
    let tables = transform_all(&[record("s1")]);
    assert_eq!(tables.titles.len(), 1);
    assert!(tables.directors.is_empty());
    assert!(tables.title_director.is_empty());
    assert!(tables.casts.is_empty());
    assert!(tables.genres.is_empty());
}
