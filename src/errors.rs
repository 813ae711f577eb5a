//! Unified application error type.
//! Ingestion, calculators, the report assembler and every serializer
//! return AppError, so a failing generation surfaces exactly one message.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid data source: {0}")]
    InvalidSource(String),

    // ---------------------------
    // Schema / record validation
    // ---------------------------
    #[error("Malformed record at row {row}: field '{field}' {reason}")]
    MalformedRecord {
        row: usize,
        field: String,
        reason: String,
    },

    #[error("Schema mismatch: missing column(s) {0}")]
    SchemaMismatch(String),

    #[error("Empty record set: the source contains no attendance rows")]
    EmptyRecordSet,

    // ---------------------------
    // Computation
    // ---------------------------
    #[error("Division by zero while computing {0}")]
    DivisionByZero(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    #[error("Invalid duration format: {0}")]
    InvalidDuration(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

impl AppError {
    /// Shorthand used by the record parser.
    pub fn malformed(row: usize, field: &str, reason: impl Into<String>) -> Self {
        AppError::MalformedRecord {
            row,
            field: field.to_string(),
            reason: reason.into(),
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
