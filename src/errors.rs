//! Unified application error type.
//! All modules (data, config, cli, stats) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Data loading
    // ---------------------------
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Data file not found: {0}")]
    MissingDataFile(String),

    #[error("Missing column: {0}")]
    MissingColumn(String),

    #[error("Malformed value '{value}' in column '{column}'")]
    Malformed { column: String, value: String },

    // ---------------------------
    // Session
    // ---------------------------
    #[error("No trips match the selected filters")]
    NoTrips,

    #[error("Input stream closed before a valid answer was given")]
    InputClosed,

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,
}

pub type AppResult<T> = Result<T, AppError>;
