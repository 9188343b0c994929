//! Table pipeline: render cells, compute widths, wrap, equalize, assemble.

use serde_json::Value;
use unicode_width::UnicodeWidthStr;

use crate::column::{self, Column, NormalizedColumn};
use crate::error::RenderError;
use crate::render;
use crate::wrap;

/// Spaces between rendered columns unless overridden.
pub const DEFAULT_PADDING: usize = 3;

/// An ordered set of records rendered against an ordered set of columns.
///
/// Holds nothing but its inputs: every render call computes cells, widths
/// and line grids fresh and discards them, so a `Table` (or a shared
/// `Vec<Column>`) can be rendered repeatedly and concurrently.
#[derive(Debug, Clone)]
pub struct Table {
    records: Vec<Value>,
    columns: Vec<Column>,
    padding: usize,
}

impl Table {
    pub fn new(records: Vec<Value>, columns: Vec<Column>) -> Self {
        Self {
            records,
            columns,
            padding: DEFAULT_PADDING,
        }
    }

    /// Override the inter-column padding width.
    pub fn padding(mut self, padding: usize) -> Self {
        self.padding = padding;
        self
    }

    /// Render to a newline-joined string with no trailing newline.
    ///
    /// The header row leads unless every column title is empty (the
    /// key/value property-sheet case). The only error is a failing
    /// caller-supplied formatter; malformed records degrade to empty
    /// cells.
    pub fn render(&self) -> Result<String, RenderError> {
        let header: Vec<String> = self
            .columns
            .iter()
            .map(|c| c.header_text().to_owned())
            .collect();
        let headerless = header.iter().all(String::is_empty);

        // Raw cell strings for header + every record. Widths must be
        // computed over these before columns are normalized.
        let mut rows = Vec::with_capacity(self.records.len() + 1);
        rows.push(header);
        for record in &self.records {
            let row = self
                .columns
                .iter()
                .map(|c| render_cell(record, c))
                .collect::<Result<Vec<_>, _>>()?;
            rows.push(row);
        }

        let widths = compute_widths(&rows, self.columns.len());
        let normalized = column::normalize(&self.columns, &widths);
        let pad = " ".repeat(self.padding);

        let mut lines = Vec::new();
        for row in rows.iter().skip(usize::from(headerless)) {
            let mut cells = layout_row(row, &normalized);
            equalize(&mut cells, &normalized);
            let height = cells.first().map_or(0, Vec::len);
            for line_idx in 0..height {
                let line: Vec<&str> = cells.iter().map(|cell| cell[line_idx].as_str()).collect();
                lines.push(line.join(&pad));
            }
        }
        Ok(lines.join("\n"))
    }
}

/// Display string for one (record, column) pair: the formatter callback
/// when present, else the direct field lookup.
fn render_cell(record: &Value, column: &Column) -> Result<String, RenderError> {
    match &column.formatter {
        Some(formatter) => {
            formatter
                .format(record, column)
                .map_err(|source| RenderError::Formatter {
                    column: column.header_text().to_owned(),
                    source,
                })
        }
        None => Ok(render::field_string(record, column)),
    }
}

/// Max display width per column index across all raw rows.
fn compute_widths(rows: &[Vec<String>], column_count: usize) -> Vec<usize> {
    let mut widths = vec![0usize; column_count];
    for row in rows {
        for (idx, cell) in row.iter().enumerate() {
            widths[idx] = widths[idx].max(UnicodeWidthStr::width(cell.as_str()));
        }
    }
    widths
}

/// Wrap every cell of a row to its column width, padding each wrapped
/// line through the column's template.
fn layout_row(row: &[String], columns: &[NormalizedColumn]) -> Vec<Vec<String>> {
    row.iter()
        .zip(columns)
        .map(|(cell, col)| {
            wrap::wrap(cell, col.width)
                .iter()
                .map(|line| col.template.format(line))
                .collect()
        })
        .collect()
}

/// Pad every cell of a row with blank lines up to the row's height.
fn equalize(cells: &mut [Vec<String>], columns: &[NormalizedColumn]) {
    let height = cells.iter().map(Vec::len).max().unwrap_or(0);
    for (cell, col) in cells.iter_mut().zip(columns) {
        cell.resize(height, " ".repeat(col.width));
    }
}
