//! In-memory audit store (for development/testing).

use async_trait::async_trait;
use causelist_core::Result;
use parking_lot::RwLock;

use crate::{AuditStore, QueryRow, ResponseRow};

/// Audit store that keeps rows in memory.
#[derive(Default)]
pub struct MemoryStore {
    queries: RwLock<Vec<QueryRow>>,
    responses: RwLock<Vec<ResponseRow>>,
}

impl MemoryStore {
    /// Creates a new empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of recorded queries.
    #[must_use]
    pub fn query_count(&self) -> usize {
        self.queries.read().len()
    }

    /// Number of recorded responses.
    #[must_use]
    pub fn response_count(&self) -> usize {
        self.responses.read().len()
    }

    /// Snapshot of the recorded query rows.
    #[must_use]
    pub fn queries(&self) -> Vec<QueryRow> {
        self.queries.read().clone()
    }

    /// Snapshot of the recorded response rows.
    #[must_use]
    pub fn responses(&self) -> Vec<ResponseRow> {
        self.responses.read().clone()
    }
}

#[async_trait]
impl AuditStore for MemoryStore {
    async fn record_query(&self, row: &QueryRow) -> Result<()> {
        self.queries.write().push(row.clone());
        Ok(())
    }

    async fn record_response(&self, row: &ResponseRow) -> Result<()> {
        self.responses.write().push(row.clone());
        Ok(())
    }
}
