//! Table writing
//!
//! Emits a table record as a Word table: a bold header row followed by one
//! row per data row, each exactly as wide as the header row.

use docx_rs::{Docx, Paragraph, Run, TableCell, TableRow};

use crate::document::Table;

/// Append `table` to the document, followed by a blank spacing paragraph.
///
/// Tables without headers or without data rows are skipped. Data cells past
/// the header count are dropped; missing cells are left blank.
pub fn write_table(docx: Docx, table: &Table) -> Docx {
    if table.headers.is_empty() || table.rows.is_empty() {
        return docx;
    }

    let column_count = table.headers.len();

    let mut rows = Vec::with_capacity(table.rows.len() + 1);
    rows.push(TableRow::new(
        table
            .headers
            .iter()
            .map(|header| text_cell(header, true))
            .collect(),
    ));

    for row in &table.rows {
        let cells = (0..column_count)
            .map(|offset| match row.cells.get(offset) {
                Some(cell) => text_cell(&cell.value, false),
                None => TableCell::new().add_paragraph(Paragraph::new()),
            })
            .collect();
        rows.push(TableRow::new(cells));
    }

    docx.add_table(docx_rs::Table::new(rows))
        .add_paragraph(Paragraph::new())
}

fn text_cell(text: &str, bold: bool) -> TableCell {
    if text.is_empty() {
        return TableCell::new().add_paragraph(Paragraph::new());
    }

    let run = Run::new().add_text(text);
    let run = if bold { run.bold() } else { run };
    TableCell::new().add_paragraph(Paragraph::new().add_run(run))
}
