//! Web module for the CHKO dashboard.
//!
//! This module serves the dashboard page and a small JSON API the page's
//! client script uses for the chart toggle and the PDF browser.
//!
//! # Endpoints
//!
//! - `GET /` - Dashboard page
//! - `GET /health` - Health check
//! - `GET /api/ownership` - Ownership analysis table
//! - `GET /api/ownership/chart?mode=` - Chart specification (proportion | magnitude)
//! - `GET /api/maps` - External map embeds
//! - `GET /api/pdf/categories` - PDF map categories
//! - `GET /api/pdf/categories/{category}` - Documents of one category
//! - `GET /api/pdf/categories/{category}/documents/{filename}` - PDF download
//! - `GET /api/tip` + `POST /api/tip/dismiss` - First-visit tip lifecycle
//! - `GET /static/{*path}` - Embedded static assets

pub mod pages;
pub mod static_files;

use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::{header, HeaderMap, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::config::Config;
use crate::models::{MapEntry, OwnershipTable, PdfCategory, PdfDocument};
use crate::services::{self, ChartMode, ChartSpec};

/// Name of the session cookie that suppresses the first-visit tip.
const TIP_COOKIE: &str = "chko_tip_dismissed";

// ============================================================================
// Application State
// ============================================================================

/// Shared application state for the web layer.
///
/// Holds only the configuration. The workbook and the PDF tree are re-read
/// on every request, so there is nothing else to share.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration
    config: Arc<Config>,
}

impl AppState {
    /// Creates a new application state.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Current health status (e.g., "healthy").
    pub status: String,
    /// Application version.
    pub version: String,
}

/// Query parameters for the chart endpoint.
#[derive(Debug, Deserialize)]
pub struct ChartQuery {
    /// Chart mode; defaults to the proportion chart.
    #[serde(default)]
    pub mode: ChartMode,
}

/// Map embed list response.
#[derive(Debug, Serialize)]
pub struct MapListResponse {
    /// All external map embeds, in tab order.
    pub maps: Vec<MapEntry>,
}

/// PDF category list response.
#[derive(Debug, Serialize)]
pub struct CategoryListResponse {
    /// Categories sorted alphabetically.
    pub categories: Vec<PdfCategory>,
}

/// PDF document list response.
#[derive(Debug, Serialize)]
pub struct DocumentListResponse {
    /// Category the documents belong to.
    pub category: String,
    /// Documents sorted alphabetically.
    pub documents: Vec<PdfDocument>,
}

/// First-visit tip response.
#[derive(Debug, Serialize)]
pub struct TipResponse {
    /// Whether the tip should be shown in this session.
    pub show: bool,
    /// Tip text, present when configured.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// API error response.
#[derive(Debug, Serialize)]
pub struct ApiError {
    /// Error message.
    pub error: String,
    /// Optional additional details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }

    fn with_details(error: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: Some(details.into()),
        }
    }
}

// ============================================================================
// Path Validation (Security)
// ============================================================================

/// Validates a category or filename path segment to prevent path traversal.
///
/// Returns the segment unchanged or an error if it is invalid.
fn validate_segment(segment: &str) -> Result<&str, ApiError> {
    if segment.is_empty() {
        return Err(ApiError::new("Path segment cannot be empty"));
    }

    if segment.contains("..") || segment.contains('/') || segment.contains('\\') {
        return Err(ApiError::new(
            "Invalid path segment: path traversal not allowed",
        ));
    }

    if segment.starts_with('.') {
        return Err(ApiError::new("Invalid path segment: hidden names not allowed"));
    }

    Ok(segment)
}

// ============================================================================
// Session Tip Helpers
// ============================================================================

/// Returns true when the session cookie marks the tip as dismissed.
fn tip_dismissed(headers: &HeaderMap) -> bool {
    headers
        .get(header::COOKIE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|cookies| {
            cookies
                .split(';')
                .any(|cookie| cookie.trim().starts_with(&format!("{TIP_COOKIE}=")))
        })
}

// ============================================================================
// Route Handlers
// ============================================================================

/// GET /health - Health check endpoint.
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// GET / - Dashboard page.
///
/// Panels render independently: a failed workbook load produces an inline
/// error in the analysis section while the map embeds and the PDF browser
/// still render.
async fn dashboard_page(State(state): State<AppState>, headers: HeaderMap) -> Html<String> {
    let table = services::load_ownership_table(
        &state.config.paths.spreadsheet,
        crate::constants::INDEX_COLUMN,
    );

    if let Err(err) = &table {
        warn!("Ownership analysis unavailable: {err:#}");
    }

    let categories =
        services::pdf_browser::list_categories(&state.config.paths.pdf_root).unwrap_or_else(|err| {
            warn!("Failed to list PDF categories: {err:#}");
            Vec::new()
        });

    let show_tip = state.config.ui.sidebar_tip.is_some() && !tip_dismissed(&headers);

    Html(pages::render_dashboard(
        &state.config,
        &table,
        MapEntry::all(),
        &categories,
        show_tip,
    ))
}

/// GET /api/ownership - Ownership analysis table.
async fn get_ownership(
    State(state): State<AppState>,
) -> Result<Json<OwnershipTable>, (StatusCode, Json<ApiError>)> {
    let table = load_table(&state)?;
    Ok(Json(table))
}

/// GET /api/ownership/chart - Chart specification for the requested mode.
async fn get_ownership_chart(
    State(state): State<AppState>,
    Query(query): Query<ChartQuery>,
) -> Result<Json<ChartSpec>, (StatusCode, Json<ApiError>)> {
    let table = load_table(&state)?;
    Ok(Json(services::build_chart(&table, query.mode)))
}

/// Loads the ownership table, mapping failures to a panel-fatal API error.
fn load_table(state: &AppState) -> Result<OwnershipTable, (StatusCode, Json<ApiError>)> {
    services::load_ownership_table(
        &state.config.paths.spreadsheet,
        crate::constants::INDEX_COLUMN,
    )
    .map_err(|e| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiError::with_details(
                "Failed to load ownership analysis",
                format!("{e:#}"),
            )),
        )
    })
}

/// GET /api/maps - External map embeds.
async fn list_maps() -> Json<MapListResponse> {
    Json(MapListResponse {
        maps: MapEntry::all().to_vec(),
    })
}

/// GET /api/pdf/categories - List PDF map categories.
async fn list_pdf_categories(
    State(state): State<AppState>,
) -> Result<Json<CategoryListResponse>, (StatusCode, Json<ApiError>)> {
    let categories =
        services::pdf_browser::list_categories(&state.config.paths.pdf_root).map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiError::with_details(
                    "Failed to list PDF categories",
                    format!("{e:#}"),
                )),
            )
        })?;

    Ok(Json(CategoryListResponse { categories }))
}

/// GET /api/pdf/categories/{category} - List documents of one category.
async fn list_pdf_documents(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> Result<Json<DocumentListResponse>, (StatusCode, Json<ApiError>)> {
    let category = validate_segment(&category).map_err(|e| (StatusCode::BAD_REQUEST, Json(e)))?;

    if !state.config.paths.pdf_root.join(category).is_dir() {
        return Err((
            StatusCode::NOT_FOUND,
            Json(ApiError::new(format!("PDF category not found: {category}"))),
        ));
    }

    let documents = services::pdf_browser::list_documents(&state.config.paths.pdf_root, category)
        .map_err(|e| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiError::with_details(
                "Failed to list PDF documents",
                format!("{e:#}"),
            )),
        )
    })?;

    Ok(Json(DocumentListResponse {
        category: category.to_string(),
        documents,
    }))
}

/// GET /api/pdf/categories/{category}/documents/{filename} - PDF download.
///
/// Streams the file's raw bytes with `application/pdf` and the original
/// filename. A file that disappeared between listing and download yields a
/// clear 404, never a crash.
async fn download_pdf(
    State(state): State<AppState>,
    Path((category, filename)): Path<(String, String)>,
) -> Result<Response, (StatusCode, Json<ApiError>)> {
    let category = validate_segment(&category).map_err(|e| (StatusCode::BAD_REQUEST, Json(e)))?;
    let filename = validate_segment(&filename).map_err(|e| (StatusCode::BAD_REQUEST, Json(e)))?;

    if !filename.ends_with(".pdf") {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ApiError::new("Only .pdf documents can be downloaded")),
        ));
    }

    let bytes = services::pdf_browser::open_document(
        &state.config.paths.pdf_root,
        category,
        filename,
    )
    .map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => (
            StatusCode::NOT_FOUND,
            Json(ApiError::new(format!(
                "PDF document not found: {category}/{filename}"
            ))),
        ),
        _ => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiError::with_details(
                "Failed to read PDF document",
                e.to_string(),
            )),
        ),
    })?;

    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        bytes,
    )
        .into_response())
}

/// GET /api/tip - Whether the first-visit tip should be shown.
async fn tip_status(State(state): State<AppState>, headers: HeaderMap) -> Json<TipResponse> {
    let text = state.config.ui.sidebar_tip.clone();
    let show = text.is_some() && !tip_dismissed(&headers);
    Json(TipResponse { show, text })
}

/// POST /api/tip/dismiss - Suppress the tip for the rest of the session.
///
/// The cookie carries no Max-Age, so it lives exactly as long as the browser
/// session. There is no endpoint to clear it: the flag is irreversible.
async fn dismiss_tip() -> impl IntoResponse {
    (
        StatusCode::NO_CONTENT,
        [(
            header::SET_COOKIE,
            format!("{TIP_COOKIE}=1; Path=/; SameSite=Lax"),
        )],
    )
}

// ============================================================================
// Router Setup
// ============================================================================

/// Creates the router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    // Permissive CORS is fine here: the server is designed to run locally on
    // the user's machine as the page's own backend.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(dashboard_page))
        .route("/health", get(health_check))
        // Ownership analysis
        .route("/api/ownership", get(get_ownership))
        .route("/api/ownership/chart", get(get_ownership_chart))
        // Map embeds
        .route("/api/maps", get(list_maps))
        // PDF browser
        .route("/api/pdf/categories", get(list_pdf_categories))
        .route("/api/pdf/categories/{category}", get(list_pdf_documents))
        .route(
            "/api/pdf/categories/{category}/documents/{filename}",
            get(download_pdf),
        )
        // First-visit tip
        .route("/api/tip", get(tip_status))
        .route("/api/tip/dismiss", axum::routing::post(dismiss_tip))
        // Static assets
        .route("/static/{*path}", get(static_files::serve_static))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Runs the web server.
///
/// # Errors
///
/// Returns an error if the server fails to bind or serve.
pub async fn run_server(config: Config, addr: SocketAddr) -> anyhow::Result<()> {
    let state = AppState::new(config);
    let app = create_router(state);

    info!("Starting CHKO dashboard on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_segment_valid() {
        assert!(validate_segment("biotopy").is_ok());
        assert!(validate_segment("map1.pdf").is_ok());
        assert!(validate_segment("mapa-vyskytu_2024.pdf").is_ok());
    }

    #[test]
    fn test_validate_segment_path_traversal() {
        assert!(validate_segment("../secret").is_err());
        assert!(validate_segment("foo/../bar").is_err());
        assert!(validate_segment("..").is_err());
        assert!(validate_segment("a\\b").is_err());
    }

    #[test]
    fn test_validate_segment_hidden_and_empty() {
        assert!(validate_segment(".hidden").is_err());
        assert!(validate_segment("").is_err());
    }

    #[test]
    fn test_tip_dismissed_reads_cookie() {
        let mut headers = HeaderMap::new();
        assert!(!tip_dismissed(&headers));

        headers.insert(header::COOKIE, "other=1; chko_tip_dismissed=1".parse().unwrap());
        assert!(tip_dismissed(&headers));

        let mut other = HeaderMap::new();
        other.insert(header::COOKIE, "unrelated=1".parse().unwrap());
        assert!(!tip_dismissed(&other));
    }
}
