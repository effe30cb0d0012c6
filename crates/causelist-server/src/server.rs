//! HTTP server for the case-lookup service.
//!
//! Serves the embedded search form and the JSON API behind it, backed by a
//! simulated Delhi High Court source and optional SQLite audit logging.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::header::{CACHE_CONTROL, CONTENT_DISPOSITION, CONTENT_TYPE};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::Utc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use causelist_core::{CaseQuery, CaseType, Error, QueryId, Result};
use causelist_court::{CourtSource, DelhiHighCourt, ORDER_PDF_FILENAME};
use causelist_store::{AuditStore, QueryRow, ResponseRow, SqliteStore};
use causelist_telemetry::RequestMetrics;

use crate::api::{
    ApiError, DownloadPdfRequest, FetchCaseRequest, FetchCaseResponse, FormValue, StatusResponse,
};
use crate::ui;

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Listen address.
    pub addr: SocketAddr,
    /// Enable CORS.
    pub cors: bool,
    /// Path of the SQLite audit database (None disables audit logging).
    pub audit_db: Option<PathBuf>,
    /// Hold each lookup for a court-website-sized delay.
    pub simulate_latency: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: "0.0.0.0:3000".parse().unwrap(),
            cors: true,
            audit_db: None,
            simulate_latency: true,
        }
    }
}

impl ServerConfig {
    /// Creates a new server config builder.
    pub fn builder() -> ServerConfigBuilder {
        ServerConfigBuilder::default()
    }
}

/// Builder for ServerConfig.
#[derive(Debug, Default)]
pub struct ServerConfigBuilder {
    addr: Option<SocketAddr>,
    cors: Option<bool>,
    audit_db: Option<PathBuf>,
    simulate_latency: Option<bool>,
}

impl ServerConfigBuilder {
    /// Sets the listen address.
    pub fn addr(mut self, addr: SocketAddr) -> Self {
        self.addr = Some(addr);
        self
    }

    /// Sets whether CORS is enabled.
    pub fn cors(mut self, enabled: bool) -> Self {
        self.cors = Some(enabled);
        self
    }

    /// Sets the audit database path.
    pub fn audit_db(mut self, path: impl Into<PathBuf>) -> Self {
        self.audit_db = Some(path.into());
        self
    }

    /// Sets whether lookups simulate court-website latency.
    pub fn simulate_latency(mut self, enabled: bool) -> Self {
        self.simulate_latency = Some(enabled);
        self
    }

    /// Builds the server config.
    pub fn build(self) -> ServerConfig {
        ServerConfig {
            addr: self.addr.unwrap_or_else(|| "0.0.0.0:3000".parse().unwrap()),
            cors: self.cors.unwrap_or(true),
            audit_db: self.audit_db,
            simulate_latency: self.simulate_latency.unwrap_or(true),
        }
    }
}

/// Shared application state.
pub struct AppState {
    /// Court data source.
    pub court: Arc<dyn CourtSource>,
    /// Audit store (None when audit logging is disabled).
    pub audit: Option<Arc<dyn AuditStore>>,
    /// Request counters since start.
    pub metrics: RequestMetrics,
    /// Server start time.
    pub start_time: Instant,
}

impl AppState {
    /// Creates app state over the given source and optional audit store.
    pub fn new(court: Arc<dyn CourtSource>, audit: Option<Arc<dyn AuditStore>>) -> Self {
        Self {
            court,
            audit,
            metrics: RequestMetrics::new(),
            start_time: Instant::now(),
        }
    }
}

/// The HTTP server.
pub struct Server {
    config: ServerConfig,
    state: Arc<AppState>,
}

impl Server {
    /// Creates a new server with the given configuration.
    ///
    /// An audit database that cannot be opened downgrades the server to no
    /// audit logging rather than failing startup; lookups must keep working
    /// without the log.
    pub fn new(config: ServerConfig) -> Self {
        let mut court = DelhiHighCourt::new();
        if !config.simulate_latency {
            court = court.without_latency();
        }

        let audit: Option<Arc<dyn AuditStore>> = match &config.audit_db {
            Some(path) => match SqliteStore::open(path) {
                Ok(store) => Some(Arc::new(store)),
                Err(err) => {
                    tracing::warn!(
                        error = %err,
                        path = %path.display(),
                        "Audit database unavailable, continuing without audit logging"
                    );
                    None
                }
            },
            None => None,
        };

        let state = Arc::new(AppState::new(Arc::new(court), audit));
        Self { config, state }
    }

    /// Creates a server over a caller-supplied source and audit store.
    pub fn with_source(
        config: ServerConfig,
        court: Arc<dyn CourtSource>,
        audit: Option<Arc<dyn AuditStore>>,
    ) -> Self {
        let state = Arc::new(AppState::new(court, audit));
        Self { config, state }
    }

    /// Creates the router.
    fn router(&self) -> Router {
        let mut router = Router::new()
            // Embedded search form
            .route("/", get(ui::index))
            // Health endpoints
            .route("/health", get(health))
            .route("/api/status", get(service_status))
            // Case-lookup API
            .route("/api/fetch-case", post(fetch_case))
            .route("/api/download-pdf", post(download_pdf))
            .with_state(self.state.clone());

        // Add middleware
        router = router.layer(TraceLayer::new_for_http());

        if self.config.cors {
            router = router.layer(CorsLayer::permissive());
        }

        router
    }

    /// Runs the server.
    ///
    /// # Errors
    ///
    /// Returns an error if the server cannot start.
    pub async fn run(self) -> Result<()> {
        if self.state.audit.is_none() {
            tracing::warn!("Audit logging disabled; lookups will not be recorded");
        }

        let router = self.router();

        tracing::info!(
            addr = %self.config.addr,
            court = self.state.court.court_name(),
            "Starting causelist server"
        );
        eprintln!(
            "\n\x1b[32m✓\x1b[0m Server listening on http://{}",
            self.config.addr
        );
        eprintln!("  Press Ctrl+C to stop\n");

        let listener = tokio::net::TcpListener::bind(self.config.addr)
            .await
            .map_err(Error::Io)?;

        // Set up graceful shutdown
        let shutdown_signal = async {
            let ctrl_c = async {
                tokio::signal::ctrl_c()
                    .await
                    .expect("Failed to install Ctrl+C handler");
            };

            #[cfg(unix)]
            let terminate = async {
                tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
                    .expect("Failed to install signal handler")
                    .recv()
                    .await;
            };

            #[cfg(not(unix))]
            let terminate = std::future::pending::<()>();

            tokio::select! {
                () = ctrl_c => {
                    eprintln!("\n\x1b[33m⚡\x1b[0m Received Ctrl+C, shutting down gracefully...");
                },
                () = terminate => {
                    eprintln!("\n\x1b[33m⚡\x1b[0m Received SIGTERM, shutting down gracefully...");
                },
            }
        };

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal)
            .await
            .map_err(|e| Error::internal(e.to_string()))?;

        tracing::info!("Server shutdown complete");
        eprintln!("\x1b[32m✓\x1b[0m Server stopped");

        Ok(())
    }
}

// === Error Response ===

fn error_response(status: StatusCode, body: ApiError) -> Response {
    (status, Json(body)).into_response()
}

// === Health Endpoints ===

async fn health() -> &'static str {
    "OK"
}

async fn service_status(State(state): State<Arc<AppState>>) -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "running".to_string(),
        uptime_seconds: state.start_time.elapsed().as_secs(),
        court: state.court.court_name().to_string(),
        audit_enabled: state.audit.is_some(),
        cases_fetched: state.metrics.cases_fetched(),
        documents_served: state.metrics.documents_served(),
        errors: state.metrics.errors(),
        audit_failures: state.metrics.audit_failures(),
    })
}

// === Case-Lookup Endpoints ===

async fn fetch_case(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: std::result::Result<Json<FetchCaseRequest>, JsonRejection>,
) -> Response {
    let Ok(Json(req)) = body else {
        state.metrics.record_error();
        return error_response(
            StatusCode::BAD_REQUEST,
            ApiError::new("Invalid JSON in request body"),
        );
    };

    let missing = req.missing_fields();
    if !missing.is_empty() {
        state.metrics.record_error();
        let err = Error::MissingFields {
            fields: missing.join(", "),
        };
        return error_response(StatusCode::BAD_REQUEST, ApiError::new(err.to_string()));
    }

    // Guarded by the missing-field check above.
    let case_type = req.case_type.clone().unwrap_or_default();
    let case_number = req
        .case_number
        .as_ref()
        .map(FormValue::as_form_value)
        .unwrap_or_default();
    let filing_year = req
        .filing_year
        .as_ref()
        .map(FormValue::as_form_value)
        .unwrap_or_default();

    let query = match CaseQuery::new(
        CaseType::parse(&case_type),
        case_number.as_str(),
        &filing_year,
    ) {
        Ok(query) => query,
        Err(err) => {
            state.metrics.record_error();
            return error_response(StatusCode::BAD_REQUEST, ApiError::new(err.to_string()));
        }
    };

    let query_id = QueryId::new();
    tracing::info!(
        query_id = %query_id,
        case = %query.formatted_number(),
        "Case lookup received"
    );

    // Validation failures never reach the audit log; accepted queries are
    // recorded before the fetch so failed lookups still leave a query row.
    record_query_row(
        &state,
        QueryRow {
            query_id: query_id.clone(),
            case_type,
            case_number,
            filing_year: query.filing_year(),
            ip_address: client_ip(&headers),
            queried_at: Utc::now(),
        },
    )
    .await;

    match state.court.fetch_case(&query).await {
        Ok(record) => {
            let case_data = serde_json::to_value(&record).unwrap_or_else(|_| serde_json::json!({}));
            record_response_row(
                &state,
                ResponseRow {
                    query_id: query_id.clone(),
                    case_data,
                    success: true,
                    error_message: None,
                    responded_at: Utc::now(),
                },
            )
            .await;

            state.metrics.record_case_fetched();
            let message = format!(
                "Case data fetched successfully from {}",
                state.court.court_name()
            );
            Json(FetchCaseResponse {
                success: true,
                data: record,
                query_id,
                message,
            })
            .into_response()
        }
        Err(err) => {
            record_response_row(
                &state,
                ResponseRow {
                    query_id: query_id.clone(),
                    case_data: serde_json::json!({}),
                    success: false,
                    error_message: Some(err.to_string()),
                    responded_at: Utc::now(),
                },
            )
            .await;

            state.metrics.record_error();
            let status = if err.is_client_error() {
                StatusCode::BAD_REQUEST
            } else {
                StatusCode::INTERNAL_SERVER_ERROR
            };
            let details = format!(
                "The system attempted to fetch real-time data from {}. Please verify the case details and try again.",
                state.court.court_name()
            );
            error_response(status, ApiError::new(err.to_string()).with_details(details))
        }
    }
}

async fn download_pdf(
    State(state): State<Arc<AppState>>,
    body: std::result::Result<Json<DownloadPdfRequest>, JsonRejection>,
) -> Response {
    let Ok(Json(req)) = body else {
        state.metrics.record_error();
        return error_response(
            StatusCode::BAD_REQUEST,
            ApiError::new("Invalid JSON in request body"),
        );
    };

    let Some(pdf_url) = req.pdf_url.as_deref().filter(|url| !url.is_empty()) else {
        state.metrics.record_error();
        return error_response(StatusCode::BAD_REQUEST, ApiError::new("PDF URL is required"));
    };

    tracing::info!(pdf_url, "Order document requested");

    match state.court.fetch_order_document(pdf_url).await {
        Ok(bytes) => {
            state.metrics.record_document_served();
            let headers = [
                (CONTENT_TYPE, "application/pdf".to_string()),
                (
                    CONTENT_DISPOSITION,
                    format!("attachment; filename=\"{ORDER_PDF_FILENAME}\""),
                ),
                (CACHE_CONTROL, "no-cache".to_string()),
            ];
            (StatusCode::OK, headers, bytes).into_response()
        }
        Err(err) => {
            state.metrics.record_error();
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::new("Failed to download PDF").with_details(err.to_string()),
            )
        }
    }
}

// === Audit Helpers ===

fn client_ip(headers: &HeaderMap) -> String {
    headers
        .get("x-forwarded-for")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(',').next())
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| "unknown".to_string())
}

async fn record_query_row(state: &AppState, row: QueryRow) {
    let Some(audit) = &state.audit else {
        return;
    };
    if let Err(err) = audit.record_query(&row).await {
        state.metrics.record_audit_failure();
        tracing::warn!(
            error = %err,
            query_id = %row.query_id,
            "Audit query write failed, continuing"
        );
    }
}

async fn record_response_row(state: &AppState, row: ResponseRow) {
    let Some(audit) = &state.audit else {
        return;
    };
    if let Err(err) = audit.record_response(&row).await {
        state.metrics.record_audit_failure();
        tracing::warn!(
            error = %err,
            query_id = %row.query_id,
            "Audit response write failed, continuing"
        );
    }
}
