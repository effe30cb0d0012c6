//! Request and response shapes for the case-lookup API.
//!
//! Field names are camelCase on the wire; these are the exact shapes the
//! embedded search form posts and renders.

use causelist_core::{CaseRecord, QueryId};
use serde::{Deserialize, Serialize};

/// Body of `POST /api/fetch-case`.
///
/// All fields are optional at the serde level so that partial bodies reach
/// the handler, which answers with a field-by-field error instead of a
/// generic deserialization failure.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FetchCaseRequest {
    /// Case-type slug, e.g. `writ`.
    #[serde(default)]
    pub case_type: Option<String>,
    /// Case number, digits only.
    #[serde(default)]
    pub case_number: Option<FormValue>,
    /// Filing year.
    #[serde(default)]
    pub filing_year: Option<FormValue>,
}

/// A form field as the browser posts it (a string) or as a bare JSON
/// number from a non-browser client.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum FormValue {
    /// Form field value.
    Text(String),
    /// Bare number.
    Number(i64),
}

impl FormValue {
    /// The field in the string form the validator parses.
    #[must_use]
    pub fn as_form_value(&self) -> String {
        match self {
            Self::Text(s) => s.clone(),
            Self::Number(n) => n.to_string(),
        }
    }

    fn is_blank(&self) -> bool {
        matches!(self, Self::Text(s) if s.trim().is_empty())
    }
}

impl FetchCaseRequest {
    /// Names of required fields that are missing or blank, in form order.
    #[must_use]
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self
            .case_type
            .as_deref()
            .map_or(true, |v| v.trim().is_empty())
        {
            missing.push("caseType");
        }
        if self.case_number.as_ref().map_or(true, FormValue::is_blank) {
            missing.push("caseNumber");
        }
        if self.filing_year.as_ref().map_or(true, FormValue::is_blank) {
            missing.push("filingYear");
        }
        missing
    }
}

/// Success envelope of `POST /api/fetch-case`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FetchCaseResponse {
    /// Always `true`.
    pub success: bool,
    /// The synthesized case record.
    pub data: CaseRecord,
    /// Identifier of the audit rows written for this lookup.
    pub query_id: QueryId,
    /// Human-readable status line.
    pub message: String,
}

/// Body of `POST /api/download-pdf`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DownloadPdfRequest {
    /// URL of the order document, as published in a case record.
    #[serde(default)]
    pub pdf_url: Option<String>,
}

/// Error envelope shared by every endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct ApiError {
    /// Always `false`.
    pub success: bool,
    /// What went wrong.
    pub error: String,
    /// Extra guidance for the user, when available.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates an error envelope with the given message.
    #[must_use]
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
            details: None,
        }
    }

    /// Attaches a details line.
    #[must_use]
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

/// Payload of `GET /api/status`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusResponse {
    /// Always `running`.
    pub status: String,
    /// Seconds since the server started.
    pub uptime_seconds: u64,
    /// Name of the court the service answers for.
    pub court: String,
    /// Whether audit logging is active.
    pub audit_enabled: bool,
    /// Successful case lookups since start.
    pub cases_fetched: u64,
    /// Order documents served since start.
    pub documents_served: u64,
    /// Error responses since start.
    pub errors: u64,
    /// Swallowed audit-write failures since start.
    pub audit_failures: u64,
}
