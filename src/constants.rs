//! Application-wide constants.
//!
//! This module defines constants used throughout the application,
//! including the application name and the spreadsheet conventions
//! of the ownership analysis workbook.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "CHKO Dashboard";

/// The binary name of the application (used in command examples, lowercase with hyphens).
pub const APP_BINARY_NAME: &str = "chko-dashboard";

/// Header label of the column the ownership table is indexed by.
pub const INDEX_COLUMN: &str = "Druh vlastníctva";

/// Rows whose index label contains this marker (case-insensitive) are a
/// grand-total row in the source workbook and are excluded from chart input.
pub const TOTALS_ROW_MARKER: &str = "celkový";

/// Fixed pixel width of both chart renderings.
pub const CHART_WIDTH: u32 = 800;

/// Fixed pixel height of every embedded map frame.
pub const MAP_EMBED_HEIGHT: u32 = 500;
