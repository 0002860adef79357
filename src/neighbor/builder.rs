/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Neighbor list construction over a combined atom set
//!
//! Atom `j` is a neighbor of atom `i` when `j != i` and their Euclidean
//! distance is strictly less than the cutoff. Only atoms flagged in
//! `need_neigh` receive a list; every atom is a candidate.

use log::debug;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use super::errors::{check_cutoff, NeighborError, Result};
use super::grid::SpatialGrid;
use crate::geometry::Vector3D;

/// How candidate pairs are enumerated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NeighborStrategy {
    /// Scan every other atom, O(n²)
    #[default]
    BruteForce,
    /// Bin atoms into a cutoff-sized grid and scan the 27 surrounding bins
    CellList,
}

/// Options for neighbor list construction
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NeighborOptions {
    /// Candidate enumeration strategy
    pub strategy: NeighborStrategy,

    /// Spread the per-atom scan (or a batch of configurations) over rayon
    pub parallel: bool,
}

impl Default for NeighborOptions {
    fn default() -> Self {
        Self {
            strategy: NeighborStrategy::BruteForce,
            parallel: true,
        }
    }
}

impl NeighborOptions {
    /// Same options with a different strategy
    pub fn with_strategy(mut self, strategy: NeighborStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Same options, run serially
    pub fn serial(mut self) -> Self {
        self.parallel = false;
        self
    }
}

/// Neighbor counts and lists for the atoms that requested them
///
/// Entries follow the order of the requesting atoms in the input.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NeighborTable {
    /// Number of neighbors per requesting atom
    pub numneigh: Vec<usize>,
    /// Ascending neighbor indices per requesting atom
    pub neighlist: Vec<Vec<usize>>,
}

#[inline]
fn within_cutoff(a: &Vector3D, b: &Vector3D, rcut: f64) -> bool {
    a.distance(b) < rcut
}

fn scan_brute_force(coords: &[Vector3D], i: usize, rcut: f64) -> Vec<usize> {
    let xi = &coords[i];
    coords
        .iter()
        .enumerate()
        .filter(|&(j, xj)| j != i && within_cutoff(xi, xj, rcut))
        .map(|(j, _)| j)
        .collect()
}

fn scan_grid(grid: &SpatialGrid, coords: &[Vector3D], i: usize, rcut: f64) -> Vec<usize> {
    let xi = &coords[i];
    let mut neighbors = Vec::new();
    grid.for_each_candidate(coords, i, rcut, |j| {
        if within_cutoff(xi, &coords[j], rcut) {
            neighbors.push(j);
        }
    });
    neighbors.sort_unstable();
    neighbors
}

/// Create a full neighbor list
///
/// # Arguments
///
/// * `coords` - Cartesian coordinates of all atoms, contributing and padding
/// * `rcut` - Cutoff radius
/// * `need_neigh` - Per-atom flag, true for atoms that need a list
/// * `options` - Strategy and parallelism
///
/// # Returns
///
/// Counts and neighbor lists of the flagged atoms, in input order. Both
/// strategies give identical output.
pub fn create_neigh(
    coords: &[Vector3D],
    rcut: f64,
    need_neigh: &[bool],
    options: NeighborOptions,
) -> Result<NeighborTable> {
    check_cutoff(rcut)?;
    if need_neigh.len() != coords.len() {
        return Err(NeighborError::ShapeMismatch(format!(
            "{} need-neighbor flags for {} atoms",
            need_neigh.len(),
            coords.len()
        )));
    }

    let requesters: Vec<usize> = need_neigh
        .iter()
        .enumerate()
        .filter_map(|(i, &need)| need.then_some(i))
        .collect();

    let neighlist: Vec<Vec<usize>> = match options.strategy {
        NeighborStrategy::BruteForce => {
            let scan = |&i: &usize| scan_brute_force(coords, i, rcut);
            if options.parallel {
                requesters.par_iter().map(scan).collect()
            } else {
                requesters.iter().map(scan).collect()
            }
        }
        NeighborStrategy::CellList => {
            let grid = SpatialGrid::from_positions(coords, rcut);
            debug!(
                "Cell list: {} atoms in {} occupied bins",
                coords.len(),
                grid.occupied_bins()
            );
            let scan = |&i: &usize| scan_grid(&grid, coords, i, rcut);
            if options.parallel {
                requesters.par_iter().map(scan).collect()
            } else {
                requesters.iter().map(scan).collect()
            }
        }
    };
    let numneigh = neighlist.iter().map(Vec::len).collect();

    Ok(NeighborTable {
        numneigh,
        neighlist,
    })
}
