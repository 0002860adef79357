/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Queryable neighbor list of a configuration
//!
//! Atoms `0..ncontrib` are the contributing atoms of the configuration,
//! atoms `ncontrib..natoms` are padding atoms. `image[i]` maps every atom
//! back to the contributing atom it represents, so `image[i] == i` for
//! contributing atoms.

use log::info;
use ndarray::Array2;
use std::sync::Arc;

use super::builder::{create_neigh, NeighborOptions};
use super::errors::{check_cutoff, NeighborError, Result};
use crate::config::{AtomicConfiguration, CutoffSpec};
use crate::geometry::Vector3D;
use crate::padding::set_padding;

/// Neighbor list over contributing and padding atoms
///
/// Built once per configuration and immutable afterwards.
#[derive(Debug, Clone)]
pub struct NeighborList {
    ncontrib: usize,
    species: Box<[Arc<str>]>,
    coords: Box<[Vector3D]>,
    image: Box<[usize]>,
    cutoffs: CutoffSpec,
    max_cutoff: f64,
    numneigh: Box<[usize]>,
    neighlist: Box<[Box<[usize]>]>,
}

impl NeighborList {
    /// Build the neighbor list of `conf` with default options
    pub fn new<C: AtomicConfiguration + ?Sized>(conf: &C, cutoffs: &CutoffSpec) -> Result<Self> {
        Self::with_options(conf, cutoffs, NeighborOptions::default())
    }

    /// Build the neighbor list of `conf`
    ///
    /// Padding is generated once with the largest cutoff in `cutoffs`, and the
    /// neighbor search uses that same radius for every pair.
    pub fn with_options<C: AtomicConfiguration + ?Sized>(
        conf: &C,
        cutoffs: &CutoffSpec,
        options: NeighborOptions,
    ) -> Result<Self> {
        let max_cutoff = cutoffs.max()?;
        check_cutoff(max_cutoff)?;

        let spec_contrib = conf.species();
        let coords_contrib = conf.coords();
        if spec_contrib.len() != coords_contrib.len() {
            return Err(NeighborError::ShapeMismatch(format!(
                "{} species but {} coordinates",
                spec_contrib.len(),
                coords_contrib.len()
            )));
        }

        let cell = conf.cell();
        let pbc = conf.pbc();
        if pbc.iter().any(|&p| p) && cell.is_degenerate() {
            return Err(NeighborError::DegenerateCell(cell.volume()));
        }

        let padding = set_padding(&cell, pbc, spec_contrib, coords_contrib, max_cutoff)?;
        let ncontrib = spec_contrib.len();
        let natoms = ncontrib + padding.len();

        // Assembled element by element so an empty padding set needs no special shape.
        let mut coords = Vec::with_capacity(natoms);
        coords.extend_from_slice(coords_contrib);
        coords.extend_from_slice(padding.coords());

        // one allocation per contributing atom, shared by all of its images
        let shared: Vec<Arc<str>> = spec_contrib
            .iter()
            .map(|s| Arc::from(s.as_str()))
            .collect();
        let mut species = Vec::with_capacity(natoms);
        species.extend(shared.iter().cloned());
        species.extend(padding.image().iter().map(|&j| Arc::clone(&shared[j])));

        let image: Vec<usize> = (0..ncontrib)
            .chain(padding.image().iter().copied())
            .collect();

        let need_neigh: Vec<bool> = (0..natoms).map(|i| i < ncontrib).collect();
        let table = create_neigh(&coords, max_cutoff, &need_neigh, options)?;

        info!(
            "Neighbor list: {} contributing, {} padding atoms, rcut {}, {} pairs",
            ncontrib,
            padding.len(),
            max_cutoff,
            table.numneigh.iter().sum::<usize>()
        );

        Ok(Self {
            ncontrib,
            species: species.into_boxed_slice(),
            coords: coords.into_boxed_slice(),
            image: image.into_boxed_slice(),
            cutoffs: cutoffs.clone(),
            max_cutoff,
            numneigh: table.numneigh.into_boxed_slice(),
            neighlist: table
                .neighlist
                .into_iter()
                .map(Vec::into_boxed_slice)
                .collect(),
        })
    }

    fn check_index(&self, i: usize) -> Result<()> {
        if i >= self.ncontrib {
            return Err(NeighborError::IndexOutOfRange {
                index: i,
                ncontrib: self.ncontrib,
            });
        }
        Ok(())
    }

    /// Number of neighbors and neighbor indices of contributing atom `i`
    ///
    /// Indices refer to the combined atom set; use [`NeighborList::image_of`]
    /// to map padding atoms back to contributing atoms.
    pub fn neighbors_of(&self, i: usize) -> Result<(usize, &[usize])> {
        self.check_index(i)?;
        Ok((self.numneigh[i], &self.neighlist[i][..]))
    }

    /// Neighbors of contributing atom `i` paired with their distances
    pub fn neighbors_with_distances(&self, i: usize) -> Result<Vec<(usize, f64)>> {
        self.check_index(i)?;
        let xi = &self.coords[i];
        Ok(self.neighlist[i]
            .iter()
            .map(|&j| (j, xi.distance(&self.coords[j])))
            .collect())
    }

    /// Neighbors of contributing atom `i` that are also within the cutoff of
    /// their species pair; pairs without a cutoff are dropped
    pub fn neighbors_within_pair_cutoff(&self, i: usize) -> Result<Vec<usize>> {
        self.check_index(i)?;
        let xi = &self.coords[i];
        let si = &self.species[i];
        Ok(self.neighlist[i]
            .iter()
            .copied()
            .filter(|&j| {
                self.cutoffs
                    .get(si, &self.species[j])
                    .is_some_and(|rc| xi.distance(&self.coords[j]) < rc)
            })
            .collect())
    }

    /// Number of contributing atoms
    pub fn ncontrib(&self) -> usize {
        self.ncontrib
    }

    /// Number of padding atoms
    pub fn npad(&self) -> usize {
        self.coords.len() - self.ncontrib
    }

    /// Number of atoms, contributing and padding
    pub fn natoms(&self) -> usize {
        self.coords.len()
    }

    /// Species of all atoms
    pub fn species(&self) -> &[Arc<str>] {
        &self.species
    }

    /// Cartesian coordinates of all atoms
    pub fn coords(&self) -> &[Vector3D] {
        &self.coords
    }

    /// Coordinates of all atoms as a `natoms × 3` array
    pub fn coords_array(&self) -> Array2<f64> {
        Array2::from_shape_fn((self.coords.len(), 3), |(i, axis)| self.coords[i][axis])
    }

    /// Contributing atom represented by every atom
    pub fn image(&self) -> &[usize] {
        &self.image
    }

    /// Contributing atom represented by atom `i`, `None` past the end
    pub fn image_of(&self, i: usize) -> Option<usize> {
        self.image.get(i).copied()
    }

    /// True when `i` indexes a padding atom
    pub fn is_padding(&self, i: usize) -> bool {
        (self.ncontrib..self.coords.len()).contains(&i)
    }

    /// Neighbor count of every contributing atom
    pub fn neighbor_counts(&self) -> &[usize] {
        &self.numneigh
    }

    /// Radius used for padding and the neighbor search
    pub fn max_cutoff(&self) -> f64 {
        self.max_cutoff
    }

    /// Per-pair cutoffs the list was built with
    pub fn cutoffs(&self) -> &CutoffSpec {
        &self.cutoffs
    }
}
