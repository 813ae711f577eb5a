//! Plain-text table rendering for terminal and `.txt` outputs.

use crate::utils::formatting::{bold, pad_right};
use unicode_width::UnicodeWidthStr;

pub struct Column {
    pub header: String,
    pub width: usize,
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Build a table whose column widths fit both headers and cells.
    pub fn from_rows(headers: &[String], rows: &[Vec<String>]) -> Self {
        let mut columns: Vec<Column> = headers
            .iter()
            .map(|h| Column {
                header: h.clone(),
                width: UnicodeWidthStr::width(h.as_str()),
            })
            .collect();

        for row in rows {
            for (col, cell) in columns.iter_mut().zip(row) {
                col.width = col.width.max(UnicodeWidthStr::width(cell.as_str()));
            }
        }

        Self {
            columns,
            rows: rows.to_vec(),
        }
    }

    /// Render the table. With `ansi` the header line is printed bold.
    pub fn render(&self, ansi: bool) -> String {
        let mut out = String::new();

        // Header
        let header: Vec<String> = self
            .columns
            .iter()
            .map(|c| pad_cell(&c.header, c.width))
            .collect();
        let header = header.join(" | ");
        if ansi {
            out.push_str(&bold(&header));
        } else {
            out.push_str(&header);
        }
        out.push('\n');

        let rule: Vec<String> = self.columns.iter().map(|c| "-".repeat(c.width)).collect();
        out.push_str(&rule.join("-+-"));
        out.push('\n');

        // Rows
        for row in &self.rows {
            let cells: Vec<String> = self
                .columns
                .iter()
                .enumerate()
                .map(|(i, c)| pad_cell(row.get(i).map(String::as_str).unwrap_or(""), c.width))
                .collect();
            out.push_str(cells.join(" | ").trim_end());
            out.push('\n');
        }

        out
    }
}

/// `pad_right` counts chars, not display columns; compensate for wide glyphs.
fn pad_cell(s: &str, width: usize) -> String {
    let display = UnicodeWidthStr::width(s);
    let chars = s.chars().count();
    pad_right(s, (width + chars).saturating_sub(display))
}
