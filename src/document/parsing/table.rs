//! Table extraction and processing
//!
//! This module turns Word tables into typed `Table` records: the first row
//! supplies the headers, every later row becomes a data row whose cells are
//! associated with the header at the same offset.

use super::super::models::*;
use super::formatting::extract_cell_text;

/// Extract a typed table record from a docx-rs Table
///
/// Cells are laid out in grid-column space first: a horizontally merged
/// cell repeats its text in every column it spans, and a vertical-merge
/// continuation cell takes the text of the cell above it.
pub(crate) fn extract_table(table: &docx_rs::Table, table_index: usize) -> Table {
    let mut grid: Vec<Vec<String>> = Vec::with_capacity(table.rows.len());

    for table_child in &table.rows {
        let docx_rs::TableChild::TableRow(row) = table_child;
        let mut cells: Vec<String> = Vec::with_capacity(row.cells.len());

        for row_child in &row.cells {
            let docx_rs::TableRowChild::TableCell(cell) = row_child;
            let merge = CellMerge::of(cell);

            let text = if merge.continues {
                grid.last()
                    .and_then(|above| above.get(cells.len()))
                    .cloned()
                    .unwrap_or_default()
            } else {
                extract_cell_text(cell)
            };

            cells.extend(std::iter::repeat_n(text, merge.grid_span));
        }

        grid.push(cells);
    }

    table_from_grid(&grid, table_index)
}

/// Merge state of a single `w:tc`.
struct CellMerge {
    grid_span: usize,
    continues: bool,
}

impl CellMerge {
    // docx-rs keeps tcPr fields private; its serde form is the public view
    // (`gridSpan` as a number, `verticalMerge` as "restart" or "continue").
    fn of(cell: &docx_rs::TableCell) -> Self {
        let property = serde_json::to_value(&cell.property).unwrap_or_default();

        let grid_span = property
            .get("gridSpan")
            .and_then(serde_json::Value::as_u64)
            .map_or(1, |span| span.max(1) as usize);
        let continues = property
            .get("verticalMerge")
            .and_then(serde_json::Value::as_str)
            == Some("continue");

        Self {
            grid_span,
            continues,
        }
    }
}

/// Build a table record from raw cell text, row by row.
///
/// Never fails. An empty grid yields no headers, no rows and a row count of
/// -1. Rows longer than the header row get `Column_<offset>` names for the
/// extra cells; shorter rows are not padded.
pub fn table_from_grid<S: AsRef<str>>(grid: &[Vec<S>], table_index: usize) -> Table {
    let headers: Vec<String> = grid
        .first()
        .map(|row| row.iter().map(|cell| cell.as_ref().trim().to_string()).collect())
        .unwrap_or_default();

    let rows = grid
        .iter()
        .enumerate()
        .skip(1)
        .map(|(row_index, row)| Row {
            row_index,
            cells: row
                .iter()
                .enumerate()
                .map(|(offset, cell)| Cell {
                    column: column_name(&headers, offset),
                    value: cell.as_ref().trim().to_string(),
                })
                .collect(),
        })
        .collect();

    Table {
        table_index,
        column_count: headers.len(),
        headers,
        rows,
        row_count: grid.len() as i64 - 1,
    }
}

fn column_name(headers: &[String], offset: usize) -> String {
    headers
        .get(offset)
        .cloned()
        .unwrap_or_else(|| format!("Column_{offset}"))
}
