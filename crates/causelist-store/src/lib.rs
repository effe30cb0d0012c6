//! # Causelist Store
//!
//! Best-effort audit logging for case lookups.
//!
//! Two rows are written per lookup: one when the query arrives and one
//! when it resolves. The rows are advisory logs with no read path in the
//! service; callers log write failures and carry on, so nothing here may
//! ever take a request down with it.

#![warn(missing_docs)]
#![warn(clippy::all)]

use async_trait::async_trait;
use causelist_core::{QueryId, Result};
use chrono::{DateTime, Utc};

pub mod memory;
pub mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

/// Audit row describing one submitted lookup.
#[derive(Debug, Clone)]
pub struct QueryRow {
    /// Identifier shared with the response row and the API envelope.
    pub query_id: QueryId,
    /// Raw case-type slug as submitted.
    pub case_type: String,
    /// Raw case number as submitted.
    pub case_number: String,
    /// Parsed filing year.
    pub filing_year: u16,
    /// Client address, or `unknown`.
    pub ip_address: String,
    /// When the query arrived.
    pub queried_at: DateTime<Utc>,
}

/// Audit row describing the outcome of a lookup.
#[derive(Debug, Clone)]
pub struct ResponseRow {
    /// Identifier of the query this answers.
    pub query_id: QueryId,
    /// The serialized case record, or `{}` for failures.
    pub case_data: serde_json::Value,
    /// Whether the lookup produced a record.
    pub success: bool,
    /// Error description for failed lookups.
    pub error_message: Option<String>,
    /// When the lookup resolved.
    pub responded_at: DateTime<Utc>,
}

/// Trait for audit logging backends.
#[async_trait]
pub trait AuditStore: Send + Sync {
    /// Records a submitted query.
    async fn record_query(&self, row: &QueryRow) -> Result<()>;

    /// Records the outcome of a previously recorded query.
    async fn record_response(&self, row: &ResponseRow) -> Result<()>;
}
