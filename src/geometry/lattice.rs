/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Lattice cells and coordinate transforms
//!
//! A [`Cell`] stores the three lattice vectors as rows. Fractional coordinates
//! `f` relate to Cartesian coordinates `r` through `r = f · cell`, so the
//! forward transform uses the inverse of the transposed cell matrix. That
//! inverse is assembled from the reciprocal vectors `b×c/V`, `c×a/V` and
//! `a×b/V` rather than a general 3×3 solve.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::errors::{GeometryError, Result};
use super::vector::Vector3D;

/// Cell volumes at or below this magnitude are treated as degenerate
pub const VOLUME_EPSILON: f64 = 1e-10;

/// Parallelepiped spanned by three lattice vectors
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[[f64; 3]; 3]", into = "[[f64; 3]; 3]")]
pub struct Cell {
    vectors: [Vector3D; 3],
}

impl Cell {
    /// Create a cell from lattice vectors given as rows
    pub fn new(rows: [[f64; 3]; 3]) -> Self {
        Self {
            vectors: [
                Vector3D::from_array(rows[0]),
                Vector3D::from_array(rows[1]),
                Vector3D::from_array(rows[2]),
            ],
        }
    }

    /// Create a cell from three lattice vectors
    pub fn from_vectors(a: Vector3D, b: Vector3D, c: Vector3D) -> Self {
        Self { vectors: [a, b, c] }
    }

    /// Cubic cell with edge length `a`
    pub fn cubic(a: f64) -> Self {
        Self::orthorhombic(a, a, a)
    }

    /// Orthorhombic cell with edge lengths `a`, `b`, `c`
    pub fn orthorhombic(a: f64, b: f64, c: f64) -> Self {
        Self::new([[a, 0.0, 0.0], [0.0, b, 0.0], [0.0, 0.0, c]])
    }

    /// The all-zero cell used by non-periodic configurations without a box
    pub fn zero() -> Self {
        Self::new([[0.0; 3]; 3])
    }

    /// Lattice vector along `axis` (0, 1 or 2)
    pub fn vector(&self, axis: usize) -> Vector3D {
        self.vectors[axis]
    }

    /// All three lattice vectors
    pub fn vectors(&self) -> &[Vector3D; 3] {
        &self.vectors
    }

    /// Rows of the cell matrix
    pub fn to_rows(&self) -> [[f64; 3]; 3] {
        [
            self.vectors[0].to_array(),
            self.vectors[1].to_array(),
            self.vectors[2].to_array(),
        ]
    }

    /// Signed volume `a · (b × c)`
    pub fn volume(&self) -> f64 {
        let [a, b, c] = &self.vectors;
        a.dot(&b.cross(c))
    }

    /// True when the lattice vectors span (almost) no volume
    pub fn is_degenerate(&self) -> bool {
        self.volume().abs() <= VOLUME_EPSILON
    }

    /// Face normals `b×c`, `c×a` and `a×b`
    fn face_normals(&self) -> [Vector3D; 3] {
        let [a, b, c] = &self.vectors;
        [b.cross(c), c.cross(a), a.cross(b)]
    }

    /// Reciprocal vectors, the columns of `inv(cellᵀ)`
    fn reciprocal(&self) -> Result<[Vector3D; 3]> {
        let volume = self.volume();
        if volume.abs() <= VOLUME_EPSILON {
            return Err(GeometryError::DegenerateCell(volume));
        }
        let [n0, n1, n2] = self.face_normals();
        let inv = 1.0 / volume;
        Ok([n0 * inv, n1 * inv, n2 * inv])
    }
}

impl From<[[f64; 3]; 3]> for Cell {
    fn from(rows: [[f64; 3]; 3]) -> Self {
        Self::new(rows)
    }
}

impl From<Cell> for [[f64; 3]; 3] {
    fn from(cell: Cell) -> Self {
        cell.to_rows()
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}, {}, {}]",
            self.vectors[0], self.vectors[1], self.vectors[2]
        )
    }
}

/// Convert Cartesian coordinates to fractional coordinates of `cell`
///
/// Fails with [`GeometryError::DegenerateCell`] when the cell is singular.
pub fn fractional(coords: &[Vector3D], cell: &Cell) -> Result<Vec<Vector3D>> {
    let [r0, r1, r2] = cell.reciprocal()?;
    Ok(coords
        .iter()
        .map(|p| Vector3D::new(p.dot(&r0), p.dot(&r1), p.dot(&r2)))
        .collect())
}

/// Convert a fractional coordinate back to Cartesian space
pub fn to_cartesian(frac: &Vector3D, cell: &Cell) -> Vector3D {
    let [a, b, c] = cell.vectors();
    *a * frac.x + *b * frac.y + *c * frac.z
}

/// Perpendicular distance between opposite faces of the cell, per lattice direction
///
/// Computed as `|V| / |cross(other two vectors)|`.
pub fn face_distances(cell: &Cell) -> Result<[f64; 3]> {
    let volume = cell.volume();
    if volume.abs() <= VOLUME_EPSILON {
        return Err(GeometryError::DegenerateCell(volume));
    }
    let normals = cell.face_normals();
    Ok(normals.map(|n| volume.abs() / n.length()))
}

/// Number of periodic shells needed along a direction to cover `rcut`
pub fn replication_count(rcut: f64, face_distance: f64) -> usize {
    (rcut / face_distance).ceil() as usize
}
