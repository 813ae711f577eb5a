//! Data-source references: a local CSV export or a Google Sheets link.

use crate::errors::{AppError, AppResult};
use crate::models::RecordSet;
use crate::models::schema::{load_csv_file, read_csv};
use regex::Regex;
use reqwest::Url;
use std::path::PathBuf;
use std::sync::OnceLock;
use tracing::debug;

const SHEETS_BASE: &str = "https://docs.google.com/spreadsheets/d";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    LocalCsv(PathBuf),
    GoogleSheet { sheet_id: String },
}

fn sheet_id_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"/d/([a-zA-Z0-9-_]+)").expect("valid sheet id regex"))
}

/// Extract the spreadsheet id from a sharing link.
pub fn extract_sheet_id(link: &str) -> Option<String> {
    sheet_id_regex()
        .captures(link)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

/// CSV export URL of one worksheet.
pub fn sheet_csv_url(sheet_id: &str, sheet_name: &str) -> AppResult<Url> {
    let base = format!("{SHEETS_BASE}/{sheet_id}/gviz/tq");
    Url::parse_with_params(&base, &[("tqx", "out:csv"), ("sheet", sheet_name)])
        .map_err(|e| AppError::InvalidSource(format!("cannot build sheet URL: {e}")))
}

fn looks_like_link(reference: &str) -> bool {
    reference.starts_with("http://")
        || reference.starts_with("https://")
        || reference.contains("docs.google.com")
}

impl DataSource {
    /// Interpret a user-supplied reference.
    pub fn parse(reference: &str) -> AppResult<Self> {
        let reference = reference.trim();
        if reference.is_empty() {
            return Err(AppError::InvalidSource("empty source reference".into()));
        }

        if looks_like_link(reference) {
            return extract_sheet_id(reference)
                .map(|sheet_id| DataSource::GoogleSheet { sheet_id })
                .ok_or_else(|| {
                    AppError::InvalidSource(format!(
                        "not a Google Sheets link (expected .../d/<sheet-id>/...): {reference}"
                    ))
                });
        }

        let path = PathBuf::from(reference);
        if !path.is_file() {
            return Err(AppError::InvalidSource(format!(
                "file not found: {}",
                path.display()
            )));
        }
        Ok(DataSource::LocalCsv(path))
    }

    /// Fetch and validate the records behind this source.
    pub fn load(&self, sheet_name: &str) -> AppResult<RecordSet> {
        match self {
            DataSource::LocalCsv(path) => {
                debug!(path = %path.display(), "reading local CSV");
                load_csv_file(path)
            }
            DataSource::GoogleSheet { sheet_id } => {
                let url = sheet_csv_url(sheet_id, sheet_name)?;
                debug!(%url, "downloading sheet");

                let response = reqwest::blocking::get(url)?.error_for_status()?;

                // private sheets answer with a sign-in page instead of CSV
                let is_html = response
                    .headers()
                    .get(reqwest::header::CONTENT_TYPE)
                    .and_then(|v| v.to_str().ok())
                    .is_some_and(|v| v.contains("text/html"));
                if is_html {
                    return Err(AppError::InvalidSource(
                        "the sheet is not accessible; share it as 'Anyone with the link'".into(),
                    ));
                }

                let body = response.text()?;
                read_csv(body.as_bytes())
            }
        }
    }
}
