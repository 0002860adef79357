/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Error types for padding generation and neighbor lists

use thiserror::Error;

use crate::config::ConfigError;
use crate::geometry::GeometryError;

/// Errors raised while building or querying a neighbor list
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NeighborError {
    /// Zero or near-zero cell volume while some axis is periodic
    #[error("Degenerate cell: volume {0:e} is too close to zero for a periodic system")]
    DegenerateCell(f64),

    /// Species, coordinate or flag buffers disagree in length
    #[error("Shape mismatch: {0}")]
    ShapeMismatch(String),

    /// Missing, non-positive or non-finite cutoff
    #[error("Invalid cutoff: {0}")]
    InvalidCutoff(String),

    /// Coordinates or cutoff too far from the origin, in cells, to replicate
    #[error("Extent too large: {0}")]
    ExtentTooLarge(String),

    /// Query for an atom that has no neighbor list
    #[error("Atom index {index} out of range: neighbor lists exist for atoms 0..{ncontrib}")]
    IndexOutOfRange { index: usize, ncontrib: usize },
}

impl From<GeometryError> for NeighborError {
    fn from(err: GeometryError) -> Self {
        match err {
            GeometryError::DegenerateCell(volume) => NeighborError::DegenerateCell(volume),
            GeometryError::ShapeMismatch(msg) => NeighborError::ShapeMismatch(msg),
        }
    }
}

impl From<ConfigError> for NeighborError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::InvalidCutoff(msg) => NeighborError::InvalidCutoff(msg),
            ConfigError::ShapeMismatch(msg) => NeighborError::ShapeMismatch(msg),
        }
    }
}

/// Result type for neighbor list operations
pub type Result<T> = std::result::Result<T, NeighborError>;

/// Reject cutoffs that cannot describe a sphere
pub(crate) fn check_cutoff(rcut: f64) -> Result<()> {
    if !rcut.is_finite() || rcut <= 0.0 {
        return Err(NeighborError::InvalidCutoff(format!(
            "cutoff must be positive and finite, got {}",
            rcut
        )));
    }
    Ok(())
}
