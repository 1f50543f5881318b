//! Data models for the dashboard.
//!
//! This module contains all the core data structures used throughout the
//! application. Models are designed to be independent of the web layer and
//! business logic.

pub mod colors;
pub mod maps;
pub mod ownership;
pub mod pdf;

// Re-export all model types
pub use colors::CategoryColorMap;
pub use maps::MapEntry;
pub use ownership::{OwnershipRow, OwnershipTable};
pub use pdf::{PdfCategory, PdfDocument};
