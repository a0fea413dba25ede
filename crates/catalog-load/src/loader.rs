#![deny(unsafe_code)]

//! Ordered table loading with per-table failure isolation.

use sqlx::PgPool;
use tracing::{error, info};

use catalog_model::{CatalogTables, EntityRow, JunctionRow, TitleRow};

use crate::error::LoadError;

/// Outcome of loading one table: the row count attempted and the error, if
/// the insert failed. Expected per-table failures are data, not exceptions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableLoadResult {
    pub table: String,
    pub rows_attempted: usize,
    pub error: Option<String>,
}

impl TableLoadResult {
    pub fn succeeded(&self) -> bool {
        self.error.is_none()
    }
}

/// One table's rows, ready for insertion.
#[derive(Debug, Clone)]
pub enum TableBatch<'a> {
    Titles(&'a [TitleRow]),
    Entities {
        table: &'static str,
        rows: &'a [EntityRow],
    },
    Junctions {
        table: &'static str,
        entity_column: &'static str,
        rows: &'a [JunctionRow],
    },
}

impl TableBatch<'_> {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Titles(_) => "titles",
            Self::Entities { table, .. } | Self::Junctions { table, .. } => *table,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Titles(rows) => rows.len(),
            Self::Entities { rows, .. } => rows.len(),
            Self::Junctions { rows, .. } => rows.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// The fixed insert order: parents and entities before the junction tables
/// that reference them.
pub fn insert_order(tables: &CatalogTables) -> Vec<TableBatch<'_>> {
    vec![
        TableBatch::Titles(&tables.titles),
        TableBatch::Entities {
            table: "directors",
            rows: &tables.directors,
        },
        TableBatch::Entities {
            table: "casts",
            rows: &tables.casts,
        },
        TableBatch::Entities {
            table: "genres",
            rows: &tables.genres,
        },
        TableBatch::Junctions {
            table: "title_director",
            entity_column: "director_id",
            rows: &tables.title_director,
        },
        TableBatch::Junctions {
            table: "title_cast",
            entity_column: "cast_id",
            rows: &tables.title_cast,
        },
        TableBatch::Junctions {
            table: "title_genre",
            entity_column: "genre_id",
            rows: &tables.title_genre,
        },
    ]
}

/// Destination for table batches. Implemented against PostgreSQL in
/// production; tests substitute a scripted sink.
trait TableSink {
    async fn insert(&mut self, batch: &TableBatch<'_>) -> Result<(), LoadError>;
}

/// Load all tables into the database in dependency order.
///
/// Each table is attempted exactly once; a failure is recorded in its
/// [`TableLoadResult`] and the remaining tables are still attempted. The
/// returned results follow the insert order.
pub async fn load_tables(pool: &PgPool, tables: &CatalogTables) -> Vec<TableLoadResult> {
    let mut sink = PgSink { pool };
    run_load(&mut sink, tables).await
}

async fn run_load<S: TableSink>(sink: &mut S, tables: &CatalogTables) -> Vec<TableLoadResult> {
    let mut results = Vec::new();
    for batch in insert_order(tables) {
        let rows_attempted = batch.len();
        match sink.insert(&batch).await {
            Ok(()) => {
                info!(table = batch.name(), rows = rows_attempted, "table loaded");
                results.push(TableLoadResult {
                    table: batch.name().to_string(),
                    rows_attempted,
                    error: None,
                });
            }
            Err(load_error) => {
                error!(
                    table = batch.name(),
                    rows = rows_attempted,
                    error = %load_error,
                    "table load failed, continuing with remaining tables"
                );
                results.push(TableLoadResult {
                    table: batch.name().to_string(),
                    rows_attempted,
                    error: Some(load_error.to_string()),
                });
            }
        }
    }
    results
}

struct PgSink<'a> {
    pool: &'a PgPool,
}

impl TableSink for PgSink<'_> {
    async fn insert(&mut self, batch: &TableBatch<'_>) -> Result<(), LoadError> {
        match batch {
            TableBatch::Titles(rows) => insert_titles(self.pool, rows).await,
            TableBatch::Entities { table, rows } => insert_entities(self.pool, table, rows).await,
            TableBatch::Junctions {
                table,
                entity_column,
                rows,
            } => insert_junctions(self.pool, table, entity_column, rows).await,
        }
    }
}

async fn insert_titles(pool: &PgPool, rows: &[TitleRow]) -> Result<(), LoadError> {
    for row in rows {
        sqlx::query(
            "INSERT INTO titles \
             (show_id, type, title, country, date_added, release_year, rating, \
              duration_int, duration_type, description) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)",
        )
        .bind(&row.show_id)
        .bind(row.kind.as_deref())
        .bind(row.title.as_deref())
        .bind(row.country.as_deref())
        .bind(row.date_added)
        .bind(row.release_year)
        .bind(row.rating.as_deref())
        .bind(row.duration_int)
        .bind(row.duration_type.as_deref())
        .bind(row.description.as_deref())
        .execute(pool)
        .await?;
    }
    Ok(())
}

async fn insert_entities(
    pool: &PgPool,
    table: &'static str,
    rows: &[EntityRow],
) -> Result<(), LoadError> {
    let statement = format!("INSERT INTO {table} (id, name) VALUES ($1, $2)");
    for row in rows {
        sqlx::query(&statement)
            .bind(row.id)
            .bind(&row.name)
            .execute(pool)
            .await?;
    }
    Ok(())
}

async fn insert_junctions(
    pool: &PgPool,
    table: &'static str,
    entity_column: &'static str,
    rows: &[JunctionRow],
) -> Result<(), LoadError> {
    let statement = format!("INSERT INTO {table} (show_id, {entity_column}) VALUES ($1, $2)");
    for row in rows {
        sqlx::query(&statement)
            .bind(&row.show_id)
            .bind(row.entity_id)
            .execute(pool)
            .await?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{TableBatch, TableSink, insert_order, run_load};
    use crate::error::LoadError;
    use catalog_model::{CatalogTables, EntityRow, JunctionRow, TitleRow};

    fn sample_tables() -> CatalogTables {
        CatalogTables {
            titles: vec![TitleRow {
                show_id: "s1".to_string(),
                kind: Some("Movie".to_string()),
                title: Some("Example".to_string()),
                country: None,
                date_added: None,
                release_year: Some(2020),
                rating: None,
                duration_int: Some(90),
                duration_type: Some("min".to_string()),
                description: None,
            }],
            directors: vec![EntityRow {
                id: 1,
                name: "Alice".to_string(),
            }],
            casts: vec![],
            genres: vec![EntityRow {
                id: 1,
                name: "Drama".to_string(),
            }],
            title_director: vec![JunctionRow {
                show_id: "s1".to_string(),
                entity_id: 1,
            }],
            title_cast: vec![],
            title_genre: vec![JunctionRow {
                show_id: "s1".to_string(),
                entity_id: 1,
            }],
        }
    }

    /// Fails exactly the tables named in `fail_on`, records everything seen.
    struct ScriptedSink {
        fail_on: Vec<&'static str>,
        inserted: Vec<String>,
    }

    impl TableSink for ScriptedSink {
        async fn insert(&mut self, batch: &TableBatch<'_>) -> Result<(), LoadError> {
            if self.fail_on.contains(&batch.name()) {
                return Err(LoadError::Database(sqlx::Error::RowNotFound));
            }
            self.inserted.push(batch.name().to_string());
            Ok(())
        }
    }

    #[test]
    fn insert_order_is_parents_then_junctions() {
        let tables = sample_tables();
        let names: Vec<&str> = insert_order(&tables).iter().map(|b| b.name()).collect();
        assert_eq!(
            names,
            vec![
                "titles",
                "directors",
                "casts",
                "genres",
                "title_director",
                "title_cast",
                "title_genre"
            ]
        );
    }

    #[tokio::test]
    async fn one_failing_table_does_not_block_the_rest() {
        let tables = sample_tables();
        let mut sink = ScriptedSink {
            fail_on: vec!["genres"],
            inserted: Vec::new(),
        };
        let results = run_load(&mut sink, &tables).await;

        assert_eq!(results.len(), 7);
        let by_name = |name: &str| results.iter().find(|r| r.table == name).unwrap();
        assert!(by_name("titles").succeeded());
        assert!(by_name("directors").succeeded());
        assert!(!by_name("genres").succeeded());
        assert_eq!(by_name("genres").rows_attempted, 1);
        assert!(by_name("genres").error.is_some());
        // Tables after the failure were still attempted.
        assert!(by_name("title_director").succeeded());
        assert!(by_name("title_genre").succeeded());
        assert!(sink.inserted.contains(&"title_genre".to_string()));
    }

    #[tokio::test]
    async fn results_report_attempted_row_counts() {
        let tables = sample_tables();
        let mut sink = ScriptedSink {
            fail_on: vec![],
            inserted: Vec::new(),
        };
        let results = run_load(&mut sink, &tables).await;

        assert!(results.iter().all(super::TableLoadResult::succeeded));
        assert_eq!(results[0].rows_attempted, 1); // titles
        assert_eq!(results[2].rows_attempted, 0); // casts is empty
    }
}
