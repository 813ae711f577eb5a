pub mod check;
pub mod config;
pub mod generate;
pub mod init;
pub mod show;

use crate::config::Config;
use crate::core::ReportRequest;
use crate::errors::AppResult;
use crate::source::DataSource;

/// Build the generation request for a source reference, falling back to
/// the configured sheet name and ranking sizes.
pub(crate) fn build_request(
    source: &str,
    sheet: Option<&str>,
    cfg: &Config,
) -> AppResult<ReportRequest> {
    Ok(ReportRequest {
        source: DataSource::parse(source)?,
        sheet_name: sheet.unwrap_or(&cfg.sheet_name).to_string(),
        limits: cfg.ranking_limits(),
    })
}
