//! Unified application error type.
//! Library modules that can fail (config, range, cli) return AppError to keep
//! the error handling consistent and easy to manage. Duration parsing keeps
//! its own `ParseError` so callers can tell a blank field from a bad one.

use crate::core::duration::ParseError;
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
    // Serialization
    // ---------------------------
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error(transparent)]
    Duration(#[from] ParseError),

    #[error("Invalid duration value: {0}")]
    InvalidHours(String),

    #[error("Invalid hours notation: '{0}' (expected hm or decimal)")]
    InvalidNotation(String),

    #[error("Invalid month token: '{0}' (expected YYYY-MM)")]
    InvalidMonth(String),

    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid range: {0}")]
    InvalidRange(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

pub type AppResult<T> = Result<T, AppError>;
