use crate::cli::commands::build_request;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::generate;
use crate::errors::AppResult;
use crate::export::export_report;
use crate::utils::path::expand_tilde;

/// Handle the `generate` command: source → report → document on disk.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Generate {
        source,
        format,
        out_dir,
        sheet,
        force,
    } = cmd
    {
        let request = build_request(source, sheet.as_deref(), cfg)?;
        let report = generate(&request)?;

        let format = format.unwrap_or(cfg.default_format);
        let dir = match out_dir {
            Some(d) => expand_tilde(d),
            None => cfg.output_dir(),
        };

        export_report(&report, format, &dir, *force)?;
    }
    Ok(())
}
