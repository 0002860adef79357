/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Vector3D type for positions, lattice vectors and displacements

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Index, Mul, Neg, Sub};

use super::errors::{GeometryError, Result};

/// A 3D vector of Cartesian or fractional components
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "[f64; 3]", into = "[f64; 3]")]
pub struct Vector3D {
    /// X component
    pub x: f64,
    /// Y component
    pub y: f64,
    /// Z component
    pub z: f64,
}

impl Vector3D {
    /// Create a new 3D vector
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// The zero vector
    pub fn origin() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    /// Build a vector from an `[x, y, z]` array
    pub fn from_array(v: [f64; 3]) -> Self {
        Self::new(v[0], v[1], v[2])
    }

    /// Components as an `[x, y, z]` array
    pub fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Interpret a flat `[x0, y0, z0, x1, ...]` buffer as a list of vectors
    pub fn from_flat(flat: &[f64]) -> Result<Vec<Self>> {
        if flat.len() % 3 != 0 {
            return Err(GeometryError::ShapeMismatch(format!(
                "flat coordinate buffer of length {} is not a multiple of 3",
                flat.len()
            )));
        }
        Ok(flat
            .chunks_exact(3)
            .map(|c| Self::new(c[0], c[1], c[2]))
            .collect())
    }

    /// Squared Euclidean distance to another vector
    pub fn distance_squared(&self, other: &Self) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        dx * dx + dy * dy + dz * dz
    }

    /// Euclidean distance to another vector
    pub fn distance(&self, other: &Self) -> f64 {
        self.distance_squared(other).sqrt()
    }

    /// Length (magnitude) of the vector
    pub fn length(&self) -> f64 {
        self.dot(self).sqrt()
    }

    /// Dot product with another vector
    pub fn dot(&self, other: &Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Cross product with another vector
    pub fn cross(&self, other: &Self) -> Self {
        Self {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    /// True when every component is finite
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl From<[f64; 3]> for Vector3D {
    fn from(v: [f64; 3]) -> Self {
        Self::from_array(v)
    }
}

impl From<Vector3D> for [f64; 3] {
    fn from(v: Vector3D) -> Self {
        v.to_array()
    }
}

impl Index<usize> for Vector3D {
    type Output = f64;

    fn index(&self, axis: usize) -> &f64 {
        match axis {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("Vector3D axis {} out of range", axis),
        }
    }
}

impl fmt::Display for Vector3D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.6}, {:.6}, {:.6})", self.x, self.y, self.z)
    }
}

impl Add for Vector3D {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
        }
    }
}

impl Sub for Vector3D {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
        }
    }
}

impl Neg for Vector3D {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl Mul<f64> for Vector3D {
    type Output = Self;

    fn mul(self, scale: f64) -> Self {
        Self::new(self.x * scale, self.y * scale, self.z * scale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_vector_operations() {
        let v1 = Vector3D::new(1.0, 2.0, 3.0);
        let v2 = Vector3D::new(4.0, 5.0, 6.0);

        assert_relative_eq!(v1.distance(&v2), 5.196152, epsilon = 1e-6);
        assert_relative_eq!(v1.distance_squared(&v2), 27.0, epsilon = 1e-12);
        assert_relative_eq!(v1.length(), 3.741657, epsilon = 1e-6);
        assert_relative_eq!(v1.dot(&v2), 32.0, epsilon = 1e-6);

        let cross = v1.cross(&v2);
        assert_relative_eq!(cross.x, -3.0, epsilon = 1e-6);
        assert_relative_eq!(cross.y, 6.0, epsilon = 1e-6);
        assert_relative_eq!(cross.z, -3.0, epsilon = 1e-6);

        let scaled = -(v1 * 2.0) + v2;
        assert_eq!(scaled, Vector3D::new(2.0, 1.0, 0.0));
        assert_eq!(scaled[0], 2.0);
    }

    #[test]
    fn test_from_flat() {
        let vs = Vector3D::from_flat(&[0.0, 1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
        assert_eq!(vs, vec![Vector3D::new(0.0, 1.0, 2.0), Vector3D::new(3.0, 4.0, 5.0)]);

        assert!(matches!(
            Vector3D::from_flat(&[0.0, 1.0]),
            Err(GeometryError::ShapeMismatch(_))
        ));
    }

    #[test]
    fn test_serde_as_array() {
        let v = Vector3D::new(1.5, -2.0, 0.25);
        let json = serde_json::to_string(&v).unwrap();
        assert_eq!(json, "[1.5,-2.0,0.25]");
        let back: Vector3D = serde_json::from_str(&json).unwrap();
        assert_eq!(back, v);
    }
}
