//! Markdown table extraction from generated text

use once_cell::sync::Lazy;
use regex::Regex;

use crate::document::{Table, table_from_grid};

static SEPARATOR_ROW: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*\|?\s*:?-{3,}:?\s*(\|\s*:?-{3,}:?\s*)*\|?\s*$").expect("valid regex")
});

fn is_pipe_row(line: &str) -> bool {
    let line = line.trim();
    !line.is_empty() && line.contains('|') && !SEPARATOR_ROW.is_match(line)
}

fn split_row(line: &str) -> Vec<String> {
    let line = line.trim();
    let line = line.strip_prefix('|').unwrap_or(line);
    let line = line.strip_suffix('|').unwrap_or(line);
    line.split('|').map(|cell| cell.trim().to_string()).collect()
}

/// Find pipe tables (header line, `---` separator line, body lines) in
/// generated text and convert each into a table record, in order of
/// appearance.
pub fn extract_markdown_tables(text: &str) -> Vec<Table> {
    let lines: Vec<&str> = text.lines().collect();
    let mut grids: Vec<Vec<Vec<String>>> = Vec::new();
    let mut i = 0;

    while i + 1 < lines.len() {
        if !(is_pipe_row(lines[i]) && SEPARATOR_ROW.is_match(lines[i + 1])) {
            i += 1;
            continue;
        }

        let mut grid = vec![split_row(lines[i])];
        i += 2;
        while i < lines.len() && is_pipe_row(lines[i]) {
            grid.push(split_row(lines[i]));
            i += 1;
        }
        grids.push(grid);
    }

    grids
        .iter()
        .enumerate()
        .map(|(index, grid)| table_from_grid(grid, index))
        .collect()
}
