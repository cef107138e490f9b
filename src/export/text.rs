//! Plain-text rendering of a structural record

use std::fmt::Write;
use unicode_segmentation::UnicodeSegmentation;

use crate::document::{ParsedDocument, Table};

pub fn render_text(document: &ParsedDocument) -> String {
    let mut output = String::new();

    for paragraph in &document.paragraphs {
        let _ = writeln!(output, "[{}] {}", paragraph.style, paragraph.text);
    }

    for table in &document.tables {
        output.push('\n');
        let _ = writeln!(
            output,
            "Table {} ({} rows x {} columns)",
            table.table_index + 1,
            table.row_count,
            table.column_count
        );
        output.push_str(&render_table(table));
    }

    let props = &document.metadata.core_properties;
    output.push('\n');
    let _ = writeln!(output, "Paragraphs: {}", document.metadata.paragraph_count);
    let _ = writeln!(output, "Tables: {}", document.metadata.table_count);
    if !props.title.is_empty() {
        let _ = writeln!(output, "Title: {}", props.title);
    }
    if !props.author.is_empty() {
        let _ = writeln!(output, "Author: {}", props.author);
    }
    if !props.subject.is_empty() {
        let _ = writeln!(output, "Subject: {}", props.subject);
    }

    output
}

/// Render a table as an aligned grid. Rows wider than the header row widen
/// the grid.
pub fn render_table(table: &Table) -> String {
    let mut lines: Vec<Vec<&str>> = Vec::with_capacity(table.rows.len() + 1);
    lines.push(table.headers.iter().map(String::as_str).collect());
    for row in &table.rows {
        lines.push(row.cells.iter().map(|cell| cell.value.as_str()).collect());
    }

    let widths = column_widths(&lines);
    let mut output = String::new();

    for (i, line) in lines.iter().enumerate() {
        let cells: Vec<String> = widths
            .iter()
            .enumerate()
            .map(|(col, width)| pad(line.get(col).copied().unwrap_or(""), *width))
            .collect();
        let _ = writeln!(output, "| {} |", cells.join(" | "));

        if i == 0 {
            let rule: Vec<String> = widths.iter().map(|width| "-".repeat(*width)).collect();
            let _ = writeln!(output, "|-{}-|", rule.join("-|-"));
        }
    }

    output
}

fn display_width(text: &str) -> usize {
    text.graphemes(true).count()
}

fn column_widths(lines: &[Vec<&str>]) -> Vec<usize> {
    let mut widths: Vec<usize> = Vec::new();
    for line in lines {
        for (col, cell) in line.iter().enumerate() {
            let width = display_width(cell).max(3);
            match widths.get_mut(col) {
                Some(current) => *current = (*current).max(width),
                None => widths.push(width),
            }
        }
    }
    widths
}

fn pad(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(display_width(text));
    format!("{text}{}", " ".repeat(fill))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::table_from_grid;

    #[test]
    fn test_render_table_grid() {
        let table = table_from_grid(&[vec!["항목", "2024"], vec!["매출", "100억", "extra"]], 0);
        let rendered = render_table(&table);
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "| 항목  | 2024 |       |");
        assert_eq!(lines[1], "|-----|------|-------|");
        assert_eq!(lines[2], "| 매출  | 100억 | extra |");
    }
}
