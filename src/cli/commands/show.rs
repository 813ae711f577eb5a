use crate::cli::commands::build_request;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::generate;
use crate::errors::AppResult;
use crate::export::render_text;

/// Handle the `show` command: print the report instead of writing a file.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Show {
        source,
        sheet,
        plain,
    } = cmd
    {
        let request = build_request(source, sheet.as_deref(), cfg)?;
        let report = generate(&request)?;
        print!("{}", render_text(&report, !*plain));
    }
    Ok(())
}
