/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Error types for configurations and cutoffs

use thiserror::Error;

/// Errors raised while assembling configurations or cutoff specifications
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Invalid cutoff: {0}")]
    InvalidCutoff(String),

    #[error("Shape mismatch: {0}")]
    ShapeMismatch(String),
}

/// Result type for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;
