/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Geometry utilities
//!
//! Vector helpers, lattice cells and the fractional/Cartesian transforms used
//! to replicate atoms across periodic boundaries.

pub mod errors;
pub mod lattice;
pub mod vector;

pub use errors::{GeometryError, Result};
pub use lattice::{face_distances, fractional, replication_count, to_cartesian, Cell};
pub use vector::Vector3D;
