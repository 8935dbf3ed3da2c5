//! SQLite-backed article store.
//!
//! One import run replaces the whole table: delete everything, then insert
//! the new snapshot in fixed-size batches. Both phases share one transaction,
//! so a failed insert leaves the previous snapshot intact instead of an
//! emptied table.
//!
//! The read side is the interface the list/query collaborator consumes:
//! all rows, ordered by a whitelisted column and direction.

use crate::models::{ArticleRow, SortDirection, SortField};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{QueryBuilder, Row, Sqlite, SqlitePool};
use std::str::FromStr;
use tracing::{debug, info, instrument};

/// Rows per INSERT statement during a bulk replace.
const INSERT_BATCH_SIZE: usize = 500;

const SCHEMA: &str = "\
CREATE TABLE IF NOT EXISTS articles (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    url TEXT NOT NULL,
    title TEXT NOT NULL,
    published_at DATE NOT NULL,
    created_at TIMESTAMP NOT NULL,
    updated_at TIMESTAMP NOT NULL
)";

/// Handle to the `articles` table.
pub struct ArticleStore {
    pool: SqlitePool,
}

impl ArticleStore {
    /// Open (creating if missing) the database at `database_url` and ensure
    /// the articles table exists.
    ///
    /// The pool is capped at one connection: the importer is strictly
    /// sequential and never issues concurrent queries.
    #[instrument(level = "info", skip_all, fields(%database_url))]
    pub async fn connect(database_url: &str) -> Result<Self, sqlx::Error> {
        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await?;

        sqlx::query(SCHEMA).execute(&pool).await?;
        info!("Article store ready");
        Ok(Self { pool })
    }

    /// Replace the entire table contents with `rows`, preserving their order.
    ///
    /// Runs as a single transaction: delete all existing rows, then insert
    /// the new set in batches of [`INSERT_BATCH_SIZE`].
    #[instrument(level = "info", skip_all, fields(rows = rows.len()))]
    pub async fn replace_all(&self, rows: &[ArticleRow]) -> Result<(), sqlx::Error> {
        let mut tx = self.pool.begin().await?;

        let deleted = sqlx::query("DELETE FROM articles")
            .execute(&mut *tx)
            .await?
            .rows_affected();
        debug!(deleted, "Cleared previous snapshot");

        for chunk in rows.chunks(INSERT_BATCH_SIZE) {
            let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new(
                "INSERT INTO articles (url, title, published_at, created_at, updated_at) ",
            );
            builder.push_values(chunk, |mut b, row| {
                b.push_bind(&row.url)
                    .push_bind(&row.title)
                    .push_bind(row.published_at)
                    .push_bind(row.created_at)
                    .push_bind(row.updated_at);
            });
            builder.build().execute(&mut *tx).await?;
        }

        tx.commit().await?;
        info!(rows = rows.len(), "Replaced article snapshot");
        Ok(())
    }

    /// Fetch every stored article, ordered by the given column and direction.
    ///
    /// `sort` and `direction` are closed enums, so the ORDER BY clause is
    /// assembled from fixed identifiers only.
    pub async fn get_all(
        &self,
        sort: SortField,
        direction: SortDirection,
    ) -> Result<Vec<ArticleRow>, sqlx::Error> {
        let sql = format!(
            "SELECT url, title, published_at, created_at, updated_at \
             FROM articles ORDER BY {} {}",
            sort.as_sql(),
            direction.as_sql()
        );

        let rows = sqlx::query(&sql).fetch_all(&self.pool).await?;
        rows.into_iter()
            .map(|r| {
                Ok(ArticleRow {
                    url: r.try_get("url")?,
                    title: r.try_get("title")?,
                    published_at: r.try_get("published_at")?,
                    created_at: r.try_get("created_at")?,
                    updated_at: r.try_get("updated_at")?,
                })
            })
            .collect()
    }
}
