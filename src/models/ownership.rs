//! Ownership analysis table model.
//!
//! The source workbook holds one row per land-ownership category and one
//! numeric column per land-use type (areas in hectares). The model keeps the
//! raw rows for the data-table display and a filtered, aggregated view for
//! the charts.

use serde::Serialize;

use crate::constants::TOTALS_ROW_MARKER;

/// One row of the ownership table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OwnershipRow {
    /// Ownership category label (e.g., "štátne").
    pub category: String,
    /// Area values per land-use column, in the order of
    /// [`OwnershipTable::value_columns`]. `None` for empty cells.
    pub values: Vec<Option<f64>>,
    /// Derived total: sum of the present values of this row.
    pub total: f64,
}

impl OwnershipRow {
    /// Builds a row, computing the derived total from the present values.
    ///
    /// Empty cells are skipped, matching the NaN-skipping row sum of the
    /// original analysis.
    #[must_use]
    pub fn new(category: String, values: Vec<Option<f64>>) -> Self {
        let total = values.iter().flatten().sum();
        Self {
            category,
            values,
            total,
        }
    }

    /// Returns true if this row is the workbook's grand-total row.
    ///
    /// The match is a case-insensitive substring check on the trimmed label,
    /// so "Celkový súčet", " CELKOVÝ súčet " and similar variants all match.
    #[must_use]
    pub fn is_totals_row(&self) -> bool {
        self.category.trim().to_lowercase().contains(TOTALS_ROW_MARKER)
    }
}

/// The ownership analysis table.
///
/// `raw_rows` mirrors the workbook (including the grand-total row) and feeds
/// the data-table display; `rows` excludes the grand-total row and feeds the
/// charts. Both are rebuilt from the workbook on every load and never
/// persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OwnershipTable {
    /// Header label of the index column.
    pub index_column: String,
    /// Header labels of the numeric area columns, in workbook order.
    pub value_columns: Vec<String>,
    /// All rows as they appear in the workbook.
    pub raw_rows: Vec<OwnershipRow>,
    /// Rows with the grand-total row removed; chart input.
    pub rows: Vec<OwnershipRow>,
}

impl OwnershipTable {
    /// Builds a table from raw workbook rows, splitting off the totals row.
    #[must_use]
    pub fn new(index_column: String, value_columns: Vec<String>, raw_rows: Vec<OwnershipRow>) -> Self {
        let rows = raw_rows
            .iter()
            .filter(|row| !row.is_totals_row())
            .cloned()
            .collect();

        Self {
            index_column,
            value_columns,
            raw_rows,
            rows,
        }
    }

    /// Category labels of the chart rows, in workbook order.
    #[must_use]
    pub fn categories(&self) -> Vec<&str> {
        self.rows.iter().map(|row| row.category.as_str()).collect()
    }

    /// Derived totals of the chart rows, in workbook order.
    #[must_use]
    pub fn totals(&self) -> Vec<f64> {
        self.rows.iter().map(|row| row.total).collect()
    }
}
