use crate::cli::commands::build_request;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::anomaly::FINGERPRINT_COLUMNS;
use crate::core::generate::build_report_data;
use crate::errors::AppResult;
use crate::ui::messages::{header, info, success, warning};
use crate::utils::colors::paint_percentage;
use crate::utils::table::Table;

/// Handle the `check` command: validate the source, run every calculator
/// without writing anything, and list data-quality anomalies.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Check { source, sheet } = cmd {
        let request = build_request(source, sheet.as_deref(), cfg)?;
        let set = request.source.load(&request.sheet_name)?;

        header("Data source check");
        info(format!(
            "{} records for {}/{}",
            set.len(),
            set.month(),
            set.year()
        ));

        // division by zero and similar failures surface here
        let data = build_report_data(&set, &request.limits)?;

        info(format!(
            "Overall attendance: {}",
            paint_percentage(data.metrics.attendance.attendance_pct)
        ));
        info(format!(
            "Employees with not-found days: {}",
            data.anomalies.not_found_count
        ));

        let issues = &data.anomalies.fingerprint_issues;
        if issues.is_empty() {
            success("No fingerprint authentication issues");
        } else {
            warning(format!(
                "{} fingerprint authentication issue(s)",
                issues.len()
            ));
            let columns: Vec<String> = FINGERPRINT_COLUMNS.iter().map(|c| c.to_string()).collect();
            let rows: Vec<Vec<String>> = issues.iter().map(|f| f.cells()).collect();
            print!("{}", Table::from_rows(&columns, &rows).render(true));
        }

        success("Data source is valid");
    }
    Ok(())
}
