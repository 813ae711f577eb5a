use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for attreport
#[derive(Parser)]
#[command(
    name = "attreport",
    version = env!("CARGO_PKG_VERSION"),
    about = "Turn a month of per-employee attendance records into an attendance analysis report",
    long_about = None
)]
pub struct Cli {
    /// Override the configuration file path
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// Enable debug logging (RUST_LOG overrides)
    #[arg(global = true, long, short = 'v')]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write the default configuration file
    Init {
        #[arg(long, short = 'f', help = "Overwrite an existing configuration file")]
        force: bool,
    },

    /// Show the configuration
    Config {
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,

        #[arg(long = "path", help = "Print the configuration file location")]
        path: bool,
    },

    /// Generate the report document for a data source
    Generate {
        /// Local CSV file or Google Sheets link
        source: String,

        #[arg(long, value_enum, help = "Output format (default from configuration)")]
        format: Option<ExportFormat>,

        #[arg(
            long = "out-dir",
            value_name = "DIR",
            help = "Directory for the generated file"
        )]
        out_dir: Option<String>,

        #[arg(
            long,
            value_name = "NAME",
            help = "Worksheet name of a Google Sheets source"
        )]
        sheet: Option<String>,

        #[arg(long, short = 'f', help = "Overwrite an existing report file")]
        force: bool,
    },

    /// Print the report to the terminal
    Show {
        /// Local CSV file or Google Sheets link
        source: String,

        #[arg(
            long,
            value_name = "NAME",
            help = "Worksheet name of a Google Sheets source"
        )]
        sheet: Option<String>,

        #[arg(long = "plain", help = "Disable ANSI styling")]
        plain: bool,
    },

    /// Validate a data source and list data-quality anomalies
    Check {
        /// Local CSV file or Google Sheets link
        source: String,

        #[arg(
            long,
            value_name = "NAME",
            help = "Worksheet name of a Google Sheets source"
        )]
        sheet: Option<String>,
    },
}
