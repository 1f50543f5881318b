//! Business logic services.
//!
//! Services read the dashboard's inputs (workbook, PDF tree) and derive the
//! view data. They hold no state: every call re-reads the filesystem, per the
//! render-scoped execution model of the dashboard.

pub mod chart;
pub mod ownership;
pub mod pdf_browser;

pub use chart::{build_chart, ChartMode, ChartSpec};
pub use ownership::load_ownership_table;
