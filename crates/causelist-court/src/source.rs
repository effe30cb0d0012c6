//! The court data source interface.

use async_trait::async_trait;
use causelist_core::{CaseQuery, CaseRecord, Result};

/// Trait defining a source of court case data.
///
/// Handlers and the CLI only see this interface; the shipping
/// implementation is [`crate::DelhiHighCourt`], which synthesizes records
/// rather than talking to a real court website.
#[async_trait]
pub trait CourtSource: Send + Sync {
    /// Fetches the status report for a case.
    async fn fetch_case(&self, query: &CaseQuery) -> Result<CaseRecord>;

    /// Fetches an order document by its published URL.
    async fn fetch_order_document(&self, pdf_url: &str) -> Result<Vec<u8>>;

    /// Name of the court this source answers for.
    fn court_name(&self) -> &str;
}
