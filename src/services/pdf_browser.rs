//! PDF directory browser.
//!
//! Enumerates the immediate subdirectories of the PDF root as categories and
//! the `.pdf` files inside one category as downloadable documents. Listings
//! are rebuilt from the filesystem on every call; nothing is cached.

use std::fs;
use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};

use crate::models::{PdfCategory, PdfDocument};

/// Lists the PDF categories under the root, sorted alphabetically.
///
/// A missing root is treated the same as an empty one: the browser shows an
/// informational "no categories" message, not an error.
pub fn list_categories(root: &Path) -> Result<Vec<PdfCategory>> {
    if !root.is_dir() {
        return Ok(Vec::new());
    }

    let entries = fs::read_dir(root)
        .with_context(|| format!("Failed to read PDF root: {}", root.display()))?;

    let mut categories = Vec::new();
    for entry in entries {
        let entry = entry.context("Failed to read directory entry")?;
        if !entry.path().is_dir() {
            continue;
        }
        if let Some(name) = entry.file_name().to_str() {
            categories.push(PdfCategory {
                name: name.to_string(),
            });
        }
    }

    categories.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(categories)
}

/// Lists the `.pdf` documents of one category, sorted alphabetically.
///
/// The suffix match is case-sensitive: `mapa.PDF` is not listed. An existing
/// category with no matching files yields an empty list (the browser shows a
/// warning, not an error).
pub fn list_documents(root: &Path, category: &str) -> Result<Vec<PdfDocument>> {
    let category_dir = root.join(category);

    let entries = fs::read_dir(&category_dir).with_context(|| {
        format!("Failed to read PDF category: {}", category_dir.display())
    })?;

    let mut documents = Vec::new();
    for entry in entries {
        let entry = entry.context("Failed to read directory entry")?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }

        let Some(filename) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if !filename.ends_with(".pdf") {
            continue;
        }

        let metadata = entry
            .metadata()
            .with_context(|| format!("Failed to stat file: {}", path.display()))?;

        let modified = metadata
            .modified()
            .ok()
            .map(|time| DateTime::<Utc>::from(time).to_rfc3339());

        documents.push(PdfDocument {
            filename: filename.to_string(),
            size_bytes: metadata.len(),
            modified,
        });
    }

    documents.sort_by(|a, b| a.filename.cmp(&b.filename));
    Ok(documents)
}

/// Reads the raw bytes of one document.
///
/// Returns the underlying I/O error so the caller can distinguish a file that
/// disappeared between listing and download (`NotFound`) from other failures.
pub fn open_document(root: &Path, category: &str, filename: &str) -> io::Result<Vec<u8>> {
    fs::read(root.join(category).join(filename))
}
