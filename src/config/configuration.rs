/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Atomic configuration: species, coordinates, cell and periodic flags

use serde::{Deserialize, Serialize};

use super::errors::{ConfigError, Result};
use crate::geometry::{Cell, Vector3D};

/// Read access to an atomic configuration
///
/// Implementors hand out the contributing atoms only; periodic images are
/// generated by the neighbor list.
pub trait AtomicConfiguration {
    /// Species symbol of every contributing atom
    fn species(&self) -> &[String];

    /// Cartesian coordinates of every contributing atom
    fn coords(&self) -> &[Vector3D];

    /// Lattice vectors as rows
    fn cell(&self) -> Cell;

    /// Periodic flag per lattice direction
    fn pbc(&self) -> [bool; 3];
}

/// An owned atomic configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Configuration {
    /// Optional identifier, usually the file the configuration came from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
    species: Vec<String>,
    coords: Vec<Vector3D>,
    cell: Cell,
    pbc: [bool; 3],
}

impl Configuration {
    /// Create a configuration, checking that species and coordinates line up
    pub fn new<S: Into<String>>(
        species: impl IntoIterator<Item = S>,
        coords: Vec<Vector3D>,
        cell: Cell,
        pbc: [bool; 3],
    ) -> Result<Self> {
        let conf = Self {
            identifier: None,
            species: species.into_iter().map(Into::into).collect(),
            coords,
            cell,
            pbc,
        };
        conf.validate()?;
        Ok(conf)
    }

    /// Create a configuration from a flat `[x0, y0, z0, x1, ...]` coordinate buffer
    pub fn from_flat<S: Into<String>>(
        species: impl IntoIterator<Item = S>,
        flat_coords: &[f64],
        cell: Cell,
        pbc: [bool; 3],
    ) -> Result<Self> {
        let coords = Vector3D::from_flat(flat_coords)
            .map_err(|e| ConfigError::ShapeMismatch(e.to_string()))?;
        Self::new(species, coords, cell, pbc)
    }

    /// A cluster without any periodic boundary
    pub fn open<S: Into<String>>(
        species: impl IntoIterator<Item = S>,
        coords: Vec<Vector3D>,
    ) -> Result<Self> {
        Self::new(species, coords, Cell::zero(), [false; 3])
    }

    /// Attach an identifier
    pub fn with_identifier(mut self, identifier: impl Into<String>) -> Self {
        self.identifier = Some(identifier.into());
        self
    }

    /// Check the species/coordinate counts and that every coordinate is finite
    ///
    /// Deserialized configurations skip [`Configuration::new`], so readers call
    /// this after loading.
    pub fn validate(&self) -> Result<()> {
        if self.species.len() != self.coords.len() {
            return Err(ConfigError::ShapeMismatch(format!(
                "{} species but {} coordinates",
                self.species.len(),
                self.coords.len()
            )));
        }
        if let Some(at) = self.coords.iter().position(|p| !p.is_finite()) {
            return Err(ConfigError::ShapeMismatch(format!(
                "coordinate of atom {} is not finite: {}",
                at, self.coords[at]
            )));
        }
        Ok(())
    }

    /// Number of contributing atoms
    pub fn natoms(&self) -> usize {
        self.coords.len()
    }

    /// Copy of this configuration with every atom shifted by `shift`
    pub fn translated(&self, shift: Vector3D) -> Self {
        let mut moved = self.clone();
        for p in &mut moved.coords {
            *p = *p + shift;
        }
        moved
    }
}

impl AtomicConfiguration for Configuration {
    fn species(&self) -> &[String] {
        &self.species
    }

    fn coords(&self) -> &[Vector3D] {
        &self.coords
    }

    fn cell(&self) -> Cell {
        self.cell
    }

    fn pbc(&self) -> [bool; 3] {
        self.pbc
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_creation() {
        let conf = Configuration::new(
            ["Si", "Si"],
            vec![Vector3D::origin(), Vector3D::new(1.3, 1.3, 1.3)],
            Cell::cubic(5.43),
            [true; 3],
        )
        .unwrap();

        assert_eq!(conf.natoms(), 2);
        assert_eq!(conf.species(), ["Si".to_string(), "Si".to_string()]);
        assert_eq!(conf.pbc(), [true; 3]);
        assert!(conf.identifier.is_none());
    }

    #[test]
    fn test_shape_mismatch() {
        let err = Configuration::open(["C", "H"], vec![Vector3D::origin()]).unwrap_err();
        assert!(matches!(err, ConfigError::ShapeMismatch(_)));

        let err = Configuration::from_flat(["C"], &[0.0, 1.0], Cell::zero(), [false; 3])
            .unwrap_err();
        assert!(matches!(err, ConfigError::ShapeMismatch(_)));
    }

    #[test]
    fn test_non_finite_coordinates() {
        for bad in [f64::INFINITY, f64::NEG_INFINITY, f64::NAN] {
            let err = Configuration::new(
                ["Ar", "Ar"],
                vec![Vector3D::new(1.0, 1.0, 1.0), Vector3D::new(bad, 1.0, 1.0)],
                Cell::cubic(2.0),
                [true; 3],
            )
            .unwrap_err();
            assert!(matches!(err, ConfigError::ShapeMismatch(_)));
        }
    }

    #[test]
    fn test_translated() {
        let conf = Configuration::open(["C"], vec![Vector3D::new(1.0, 2.0, 3.0)]).unwrap();
        let moved = conf.translated(Vector3D::new(1.0, 0.0, -1.0));
        assert_eq!(moved.coords()[0], Vector3D::new(2.0, 2.0, 2.0));
        assert_eq!(conf.coords()[0], Vector3D::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_json_round_trip() {
        let conf = Configuration::new(
            ["C"],
            vec![Vector3D::new(0.5, 0.5, 0.5)],
            Cell::cubic(3.0),
            [true, true, false],
        )
        .unwrap()
        .with_identifier("graphite");

        let json = serde_json::to_string(&conf).unwrap();
        let back: Configuration = serde_json::from_str(&json).unwrap();
        assert_eq!(back, conf);
    }
}
