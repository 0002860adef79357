/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Error types for the geometry module

use thiserror::Error;

/// Errors that can occur in geometric transforms
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// The lattice vectors span (almost) no volume
    #[error("Degenerate cell: volume {0:e} is too close to zero")]
    DegenerateCell(f64),

    /// Input buffers cannot be interpreted as 3-vectors
    #[error("Shape mismatch: {0}")]
    ShapeMismatch(String),
}

/// A specialized Result type for geometry operations
pub type Result<T> = std::result::Result<T, GeometryError>;
