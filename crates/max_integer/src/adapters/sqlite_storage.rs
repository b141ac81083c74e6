// Rust guideline compliant 2026-10-14

//! SQLite adapter for the `OperationStorage` port.
//!
//! Persists `Operation` rows to a SQLite database via `sqlx`. The store is
//! append-only: plain `INSERT`, ids from `AUTOINCREMENT`, no updates or
//! deletes.

use domain::{Operation, OperationStorage, StorageError};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

/// Whether `db_url` names a private in-memory database, either as
/// `sqlite::memory:` or as a `file:` URI with `mode=memory`.
fn is_in_memory(db_url: &str) -> bool {
    db_url.contains(":memory:")
        || db_url
            .split_once('?')
            .is_some_and(|(_, query)| query.split('&').any(|param| param == "mode=memory"))
}

/// `OperationStorage` adapter backed by a SQLite database via `sqlx`.
///
/// Cloning is cheap: clones share the same connection pool.
#[derive(Debug, Clone)]
pub struct SqliteStorage {
    pool: sqlx::SqlitePool,
}

impl SqliteStorage {
    /// Open or create a SQLite database and initialize the schema.
    ///
    /// The database file is created when missing and the `operations` table
    /// via `CREATE TABLE IF NOT EXISTS`, so repeated calls are safe.
    /// In-memory URLs (`sqlite::memory:`, `?mode=memory`) get a single
    /// long-lived connection, since every SQLite connection sees its own
    /// private in-memory database.
    ///
    /// # Errors
    ///
    /// Returns `sqlx::Error` when the URL is invalid or the connection or
    /// schema creation fails.
    pub async fn new(db_url: &str) -> Result<Self, sqlx::Error> {
        let opts = db_url
            .parse::<SqliteConnectOptions>()?
            .create_if_missing(true);
        let pool_opts = if is_in_memory(db_url) {
            SqlitePoolOptions::new()
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new()
        };
        let pool = pool_opts.connect_with(opts).await?;
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS operations (
                id     INTEGER PRIMARY KEY AUTOINCREMENT,
                x      INTEGER NOT NULL,
                y      INTEGER NOT NULL,
                n      INTEGER NOT NULL,
                result INTEGER NOT NULL
            )",
        )
        .execute(&pool)
        .await?;
        tracing::info!(db_url, "sqlite.opened");
        Ok(Self { pool })
    }
}

impl OperationStorage for SqliteStorage {
    /// Insert `operation` and return it with the generated row id.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::SaveFailed` when the record has no result yet or
    /// on any `sqlx` error (connection failure, disk full, constraint
    /// violation). The underlying error is logged at `error` level.
    async fn save(&self, operation: Operation) -> Result<Operation, StorageError> {
        let Some(result) = operation.result() else {
            tracing::error!(%operation, "sqlite.save: missing result");
            return Err(StorageError::SaveFailed {
                reason: "operation has no result".to_owned(),
            });
        };
        let done = sqlx::query("INSERT INTO operations (x, y, n, result) VALUES (?, ?, ?, ?)")
            .bind(operation.x())
            .bind(operation.y())
            .bind(operation.n())
            .bind(result)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "sqlite.save");
                StorageError::SaveFailed { reason: e.to_string() }
            })?;
        let saved = operation.with_id(done.last_insert_rowid());
        tracing::debug!(operation = %saved, "sqlite.saved");
        Ok(saved)
    }

    /// Return every row ordered by id (insertion order).
    ///
    /// # Errors
    ///
    /// Returns `StorageError::FindFailed` on any `sqlx` error. The underlying
    /// error is logged at `error` level.
    async fn list(&self) -> Result<Vec<Operation>, StorageError> {
        let rows: Vec<(i64, i64, i64, i64, i64)> =
            sqlx::query_as("SELECT id, x, y, n, result FROM operations ORDER BY id")
                .fetch_all(&self.pool)
                .await
                .map_err(|e| {
                    tracing::error!(error = %e, "sqlite.list");
                    StorageError::FindFailed { reason: e.to_string() }
                })?;
        Ok(rows
            .into_iter()
            .map(|(id, x, y, n, result)| Operation::new(x, y, n).with_result(result).with_id(id))
            .collect())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
