// src/export/text.rs

use crate::errors::AppResult;
use crate::export::notify_export_success;
use crate::models::{Report, ReportSection};
use crate::ui::messages::info;
use crate::utils::colors::colorize_value;
use crate::utils::formatting::bold;
use crate::utils::table::Table;
use std::fs;
use std::path::Path;

/// Plain-text rendering of a report. With `ansi` labels and table headers
/// are bold and emphasized values colored, for terminal output.
pub fn render_text(report: &Report, ansi: bool) -> String {
    let mut out = String::new();

    let title = if ansi {
        bold(&report.title)
    } else {
        report.title.clone()
    };
    out.push_str(&title);
    out.push('\n');
    out.push_str(&"=".repeat(report.title.chars().count()));
    out.push_str("\n\n");

    for section in &report.sections {
        match section {
            ReportSection::Statement {
                label,
                value,
                emphasized,
            } => {
                if ansi {
                    out.push_str(&format!(
                        "{} {}\n",
                        bold(&format!("{label}:")),
                        colorize_value(value, *emphasized)
                    ));
                } else {
                    out.push_str(&format!("{label}: {value}\n"));
                }
            }
            ReportSection::Table(table) => {
                out.push('\n');
                if ansi {
                    out.push_str(&bold(&table.caption));
                } else {
                    out.push_str(&table.caption);
                }
                out.push('\n');

                if table.rows.is_empty() {
                    out.push_str("(none)\n");
                } else {
                    out.push_str(&Table::from_rows(&table.columns, &table.rows).render(ansi));
                }
                out.push('\n');
            }
        }
    }

    out
}

pub(crate) fn export_txt(report: &Report, path: &Path) -> AppResult<()> {
    info(format!("Exporting to TXT: {}", path.display()));

    fs::write(path, render_text(report, false))?;

    notify_export_success("TXT", path);
    Ok(())
}
