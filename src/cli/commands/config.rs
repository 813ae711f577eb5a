use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use std::path::Path;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config, config_path: &Path) -> AppResult<()> {
    if let Commands::Config { print_config, path } = cmd {
        if *path {
            println!("{}", config_path.display());
        }

        // no flag: print as well
        if *print_config || !*path {
            print!("{}", cfg.to_yaml()?);
        }
    }

    Ok(())
}
