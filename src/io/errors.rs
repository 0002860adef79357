/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Error types for configuration input and output

use std::io;
use thiserror::Error;

use crate::config::ConfigError;

/// Errors that can occur while reading or writing configurations
#[derive(Error, Debug)]
pub enum IoError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("Expected {expected} atoms, found {found}")]
    CountMismatch { expected: usize, found: usize },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Unsupported configuration format: {0}")]
    UnsupportedFormat(String),
}

/// Result type for input/output operations
pub type Result<T> = std::result::Result<T, IoError>;
