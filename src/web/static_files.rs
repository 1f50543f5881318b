//! Embedded static assets for the dashboard page.
//!
//! The stylesheet and the client script are embedded in the binary at compile
//! time, so the dashboard ships as a single executable plus its data files.

use axum::{
    body::Body,
    extract::Path,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use rust_embed::Embed;

/// Embedded static files from the `assets/` directory.
#[derive(Embed)]
#[folder = "assets"]
#[include = "*.css"]
#[include = "*.js"]
#[include = "*.png"]
#[include = "*.svg"]
#[include = "*.ico"]
pub struct StaticAssets;

/// GET /static/{*path} - Serves an embedded static asset.
pub async fn serve_static(Path(path): Path<String>) -> Response {
    let path = path.trim_start_matches('/');

    match StaticAssets::get(path) {
        Some(content) => file_response(path, content.data.as_ref()),
        None => (StatusCode::NOT_FOUND, "File not found").into_response(),
    }
}

/// Creates an HTTP response for a file with appropriate content type.
fn file_response(path: &str, content: &[u8]) -> Response {
    let mime = mime_guess::from_path(path).first_or_octet_stream();

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, mime.as_ref())
        .header(header::CACHE_CONTROL, "public, max-age=3600")
        .body(Body::from(content.to_vec()))
        .unwrap_or_else(|_| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to create response",
            )
                .into_response()
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stylesheet_and_script_are_embedded() {
        assert!(StaticAssets::get("style.css").is_some());
        assert!(StaticAssets::get("app.js").is_some());
    }

    #[test]
    fn test_unknown_asset_is_absent() {
        assert!(StaticAssets::get("missing.css").is_none());
    }
}
