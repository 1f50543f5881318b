//! Ownership workbook loader and aggregator.
//!
//! Reads the first worksheet of the analysis workbook, indexes it by the
//! configured category column, strips the grand-total row, and computes the
//! derived per-row total. Fails loudly when the workbook or the index column
//! is missing; without them no chart can be derived.

use std::path::Path;

use anyhow::{Context, Result};
use calamine::{open_workbook_auto, Data, DataType, Reader};

use crate::models::{OwnershipRow, OwnershipTable};

/// Loads the ownership table from a workbook.
///
/// The first worksheet is used; the first row is the header. Cells in the
/// numeric columns that are empty or not convertible to a number are treated
/// as missing and skipped in the row sum (calamine reports them as
/// `Data::Empty` / non-numeric, mirroring the NaN-skipping sum of the
/// original analysis).
///
/// # Errors
///
/// Returns an error if the file cannot be opened, the workbook has no
/// worksheet, the header row is missing, or the index column is absent from
/// the header.
pub fn load_ownership_table(path: &Path, index_column: &str) -> Result<OwnershipTable> {
    let mut workbook = open_workbook_auto(path)
        .with_context(|| format!("Failed to open workbook: {}", path.display()))?;

    let range = workbook
        .worksheet_range_at(0)
        .with_context(|| format!("Workbook has no worksheets: {}", path.display()))?
        .with_context(|| format!("Failed to read first worksheet: {}", path.display()))?;

    let mut rows_iter = range.rows();

    let header = rows_iter
        .next()
        .with_context(|| format!("Worksheet has no header row: {}", path.display()))?;

    let header_labels: Vec<String> = header
        .iter()
        .map(|cell| cell.as_string().unwrap_or_default().trim().to_string())
        .collect();

    let index_pos = header_labels
        .iter()
        .position(|label| label == index_column)
        .with_context(|| {
            format!(
                "Index column '{}' not found in workbook header: {}",
                index_column,
                path.display()
            )
        })?;

    // Every non-index header cell with a label is a numeric area column.
    let value_positions: Vec<usize> = header_labels
        .iter()
        .enumerate()
        .filter(|(pos, label)| *pos != index_pos && !label.is_empty())
        .map(|(pos, _)| pos)
        .collect();

    let value_columns: Vec<String> = value_positions
        .iter()
        .map(|&pos| header_labels[pos].clone())
        .collect();

    let mut raw_rows = Vec::new();

    for cells in rows_iter {
        let Some(category) = category_label(cells.get(index_pos)) else {
            // Rows without a category label carry no data (trailing blanks).
            continue;
        };

        let values: Vec<Option<f64>> = value_positions
            .iter()
            .map(|&pos| cells.get(pos).and_then(DataType::as_f64))
            .collect();

        raw_rows.push(OwnershipRow::new(category, values));
    }

    Ok(OwnershipTable::new(
        index_column.to_string(),
        value_columns,
        raw_rows,
    ))
}

/// Extracts a non-empty category label from the index cell.
fn category_label(cell: Option<&Data>) -> Option<String> {
    let label = cell?.as_string()?;
    let label = label.trim();
    if label.is_empty() {
        None
    } else {
        Some(label.to_string())
    }
}
