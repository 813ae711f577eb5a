// src/export/mod.rs

mod fs_utils;
mod json;
mod pdf;
mod text;
mod xlsx;

pub use pdf::PdfManager;
pub use text::render_text;

use crate::errors::AppResult;
use crate::models::Report;
use crate::ui::messages::success;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Common helper for export completion messages.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Pdf,
    Xlsx,
    Json,
    Txt,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Pdf => "pdf",
            ExportFormat::Xlsx => "xlsx",
            ExportFormat::Json => "json",
            ExportFormat::Txt => "txt",
        }
    }
}

/// `<dir>/Attendance_Report_<MonthName>_<Year>.<ext>`
pub fn output_path(report: &Report, dir: &Path, format: ExportFormat) -> PathBuf {
    dir.join(report.file_name(format.as_str()))
}

/// Serialize the report into `dir`, returning the written file.
/// An existing file is only replaced when `force` is set.
pub fn export_report(
    report: &Report,
    format: ExportFormat,
    dir: &Path,
    force: bool,
) -> AppResult<PathBuf> {
    fs::create_dir_all(dir)?;

    let path = output_path(report, dir, format);
    fs_utils::ensure_writable(&path, force)?;

    debug!(path = %path.display(), format = format.as_str(), "exporting report");

    match format {
        ExportFormat::Pdf => pdf::export_pdf(report, &path)?,
        ExportFormat::Xlsx => xlsx::export_xlsx(report, &path)?,
        ExportFormat::Json => json::export_json(report, &path)?,
        ExportFormat::Txt => text::export_txt(report, &path)?,
    }

    Ok(path)
}
