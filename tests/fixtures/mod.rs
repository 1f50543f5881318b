//! Shared test fixtures: a small ownership workbook and a PDF map tree.
#![allow(dead_code)] // Each test binary uses a subset of the fixtures

use std::fs;
use std::path::Path;

use rust_xlsxwriter::Workbook;

/// Writes an ownership workbook matching the production layout: index column
/// "Druh vlastníctva", two numeric area columns, a grand-total row, and one
/// row with an empty cell.
pub fn write_ownership_workbook(path: &Path) {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();

    sheet.write_string(0, 0, "Druh vlastníctva").unwrap();
    sheet.write_string(0, 1, "orná pôda").unwrap();
    sheet.write_string(0, 2, "lesné pozemky").unwrap();

    sheet.write_string(1, 0, "štátne").unwrap();
    sheet.write_number(1, 1, 10.5).unwrap();
    sheet.write_number(1, 2, 120.25).unwrap();

    sheet.write_string(2, 0, "cirkevné").unwrap();
    sheet.write_number(2, 1, 3.75).unwrap();
    // (2, 2) left empty: missing cells are skipped in the row sum

    sheet.write_string(3, 0, "zmiešané").unwrap();
    sheet.write_number(3, 1, 1.0).unwrap();
    sheet.write_number(3, 2, 2.0).unwrap();

    sheet.write_string(4, 0, "Celkový súčet").unwrap();
    sheet.write_number(4, 1, 15.25).unwrap();
    sheet.write_number(4, 2, 122.25).unwrap();

    workbook.save(path).unwrap();
}

/// Writes a workbook whose header lacks the "Druh vlastníctva" index column.
pub fn write_workbook_without_index_column(path: &Path) {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();

    sheet.write_string(0, 0, "Kategória").unwrap();
    sheet.write_string(0, 1, "orná pôda").unwrap();
    sheet.write_string(1, 0, "štátne").unwrap();
    sheet.write_number(1, 1, 1.0).unwrap();

    workbook.save(path).unwrap();
}

/// Creates the PDF tree from the acceptance scenario: `biotopy` holds one
/// PDF, `zoologia` holds none.
pub fn write_pdf_tree(root: &Path) {
    let biotopy = root.join("biotopy");
    let zoologia = root.join("zoologia");
    fs::create_dir_all(&biotopy).unwrap();
    fs::create_dir_all(&zoologia).unwrap();
    fs::write(biotopy.join("map1.pdf"), b"%PDF-1.4 fixture").unwrap();
}
