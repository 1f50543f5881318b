//! Integration tests for the ownership workbook loader and the chart builder.

use tempfile::TempDir;

use chko_dashboard::constants::INDEX_COLUMN;
use chko_dashboard::services::{build_chart, load_ownership_table, ChartMode};

mod fixtures;
use fixtures::{write_ownership_workbook, write_workbook_without_index_column};

#[test]
fn loads_workbook_and_computes_row_totals() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("analyza.xlsx");
    write_ownership_workbook(&path);

    let table = load_ownership_table(&path, INDEX_COLUMN).unwrap();

    assert_eq!(table.index_column, INDEX_COLUMN);
    assert_eq!(table.value_columns, vec!["orná pôda", "lesné pozemky"]);
    assert_eq!(table.raw_rows.len(), 4);

    // Derived total equals the exact sum of the present numeric cells
    let statne = &table.rows[0];
    assert_eq!(statne.category, "štátne");
    assert!((statne.total - 130.75).abs() < 1e-9);

    // Empty cell is skipped in the sum
    let cirkevne = &table.rows[1];
    assert_eq!(cirkevne.values, vec![Some(3.75), None]);
    assert!((cirkevne.total - 3.75).abs() < 1e-9);
}

#[test]
fn totals_row_is_excluded_from_chart_rows() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("analyza.xlsx");
    write_ownership_workbook(&path);

    let table = load_ownership_table(&path, INDEX_COLUMN).unwrap();

    assert_eq!(table.rows.len(), 3);
    assert!(table
        .raw_rows
        .iter()
        .any(|r| r.category.to_lowercase().contains("celkový")));
    assert!(!table
        .rows
        .iter()
        .any(|r| r.category.to_lowercase().contains("celkový")));
}

#[test]
fn missing_index_column_is_a_loud_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("bad.xlsx");
    write_workbook_without_index_column(&path);

    let err = load_ownership_table(&path, INDEX_COLUMN).unwrap_err();
    assert!(err.to_string().contains(INDEX_COLUMN));
}

#[test]
fn chart_modes_share_the_same_immutable_table() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("analyza.xlsx");
    write_ownership_workbook(&path);

    let table = load_ownership_table(&path, INDEX_COLUMN).unwrap();
    let before = table.clone();

    let pie = build_chart(&table, ChartMode::Proportion);
    let bar = build_chart(&table, ChartMode::Magnitude);
    let pie_again = build_chart(&table, ChartMode::Proportion);

    assert_eq!(table, before);
    assert_eq!(
        serde_json::to_value(&pie).unwrap(),
        serde_json::to_value(&pie_again).unwrap()
    );

    // Bar order is non-increasing by derived total
    let y = bar.data[0].y.as_ref().unwrap();
    assert!(y.windows(2).all(|w| w[0] >= w[1]));
}
