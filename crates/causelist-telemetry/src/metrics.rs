//! Request counters for the case-lookup service.

use std::sync::atomic::{AtomicU64, Ordering};

/// Counters covering the lifetime of the server process.
#[derive(Debug, Default)]
pub struct RequestMetrics {
    cases_fetched: AtomicU64,
    documents_served: AtomicU64,
    errors: AtomicU64,
    audit_failures: AtomicU64,
}

impl RequestMetrics {
    /// Creates zeroed counters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a successful case lookup.
    pub fn record_case_fetched(&self) {
        self.cases_fetched.fetch_add(1, Ordering::Relaxed);
    }

    /// Records a served order document.
    pub fn record_document_served(&self) {
        self.documents_served.fetch_add(1, Ordering::Relaxed);
    }

    /// Records an error response.
    pub fn record_error(&self) {
        self.errors.fetch_add(1, Ordering::Relaxed);
    }

    /// Records a swallowed audit-store failure.
    pub fn record_audit_failure(&self) {
        self.audit_failures.fetch_add(1, Ordering::Relaxed);
    }

    /// Returns the number of successful case lookups.
    #[must_use]
    pub fn cases_fetched(&self) -> u64 {
        self.cases_fetched.load(Ordering::Relaxed)
    }

    /// Returns the number of served order documents.
    #[must_use]
    pub fn documents_served(&self) -> u64 {
        self.documents_served.load(Ordering::Relaxed)
    }

    /// Returns the number of error responses.
    #[must_use]
    pub fn errors(&self) -> u64 {
        self.errors.load(Ordering::Relaxed)
    }

    /// Returns the number of swallowed audit failures.
    #[must_use]
    pub fn audit_failures(&self) -> u64 {
        self.audit_failures.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_start_at_zero() {
        let metrics = RequestMetrics::new();
        assert_eq!(metrics.cases_fetched(), 0);
        assert_eq!(metrics.documents_served(), 0);
        assert_eq!(metrics.errors(), 0);
        assert_eq!(metrics.audit_failures(), 0);
    }

    #[test]
    fn test_counters_accumulate() {
        let metrics = RequestMetrics::new();
        metrics.record_case_fetched();
        metrics.record_case_fetched();
        metrics.record_document_served();
        metrics.record_error();
        metrics.record_audit_failure();

        assert_eq!(metrics.cases_fetched(), 2);
        assert_eq!(metrics.documents_served(), 1);
        assert_eq!(metrics.errors(), 1);
        assert_eq!(metrics.audit_failures(), 1);
    }
}
