//! SQLite-backed audit store.

use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use causelist_core::{Error, Result};
use parking_lot::Mutex;
use rusqlite::Connection;

use crate::{AuditStore, QueryRow, ResponseRow};

/// Audit store writing to a local SQLite database.
///
/// rusqlite is synchronous, so writes run on the blocking thread pool with
/// the connection behind a mutex.
pub struct SqliteStore {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteStore {
    /// Opens the audit database at `path`, creating the file, its parent
    /// directory, and the schema as needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or database cannot be created.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open(path)
            .map_err(|e| Error::audit_store(format!("failed to open {}: {e}", path.display())))?;
        init_schema(&conn)?;

        tracing::info!(path = %path.display(), "Audit database ready");
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }
}

fn init_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS case_queries (
             id          TEXT PRIMARY KEY,
             case_type   TEXT NOT NULL,
             case_number TEXT NOT NULL,
             filing_year INTEGER NOT NULL,
             ip_address  TEXT NOT NULL,
             queried_at  TEXT NOT NULL
         );
         CREATE TABLE IF NOT EXISTS case_responses (
             id            INTEGER PRIMARY KEY AUTOINCREMENT,
             query_id      TEXT NOT NULL,
             case_data     TEXT NOT NULL,
             success       INTEGER NOT NULL,
             error_message TEXT,
             responded_at  TEXT NOT NULL
         );",
    )
    .map_err(|e| Error::audit_store(format!("failed to initialize schema: {e}")))
}

#[async_trait]
impl AuditStore for SqliteStore {
    async fn record_query(&self, row: &QueryRow) -> Result<()> {
        let conn = Arc::clone(&self.conn);
        let row = row.clone();
        tokio::task::spawn_blocking(move || -> Result<()> {
            let conn = conn.lock();
            conn.execute(
                "INSERT INTO case_queries (id, case_type, case_number, filing_year, ip_address, queried_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                rusqlite::params![
                    row.query_id.to_string(),
                    row.case_type,
                    row.case_number,
                    row.filing_year,
                    row.ip_address,
                    row.queried_at.to_rfc3339(),
                ],
            )
            .map_err(|e| Error::audit_store(format!("query insert failed: {e}")))?;
            Ok(())
        })
        .await
        .map_err(|e| Error::audit_store(format!("blocking write failed: {e}")))?
    }

    async fn record_response(&self, row: &ResponseRow) -> Result<()> {
        let conn = Arc::clone(&self.conn);
        let row = row.clone();
        tokio::task::spawn_blocking(move || -> Result<()> {
            let conn = conn.lock();
            conn.execute(
                "INSERT INTO case_responses (query_id, case_data, success, error_message, responded_at)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                rusqlite::params![
                    row.query_id.to_string(),
                    row.case_data.to_string(),
                    row.success,
                    row.error_message,
                    row.responded_at.to_rfc3339(),
                ],
            )
            .map_err(|e| Error::audit_store(format!("response insert failed: {e}")))?;
            Ok(())
        })
        .await
        .map_err(|e| Error::audit_store(format!("blocking write failed: {e}")))?
    }
}
