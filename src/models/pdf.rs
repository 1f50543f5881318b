//! PDF map export models.
//!
//! Categories are the immediate subdirectories of the configured PDF root;
//! documents are the `.pdf` files inside one category. Both are enumerated
//! fresh from the filesystem on every request and never cached or mutated.

use serde::Serialize;

/// A category of downloadable PDF map exports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PdfCategory {
    /// Directory name under the PDF root.
    pub name: String,
}

/// One downloadable PDF document inside a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PdfDocument {
    /// Filename including the `.pdf` extension.
    pub filename: String,
    /// File size in bytes.
    pub size_bytes: u64,
    /// Last modified timestamp (RFC 3339), when the filesystem reports one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified: Option<String>,
}
