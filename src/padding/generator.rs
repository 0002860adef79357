/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Padding atom generation
//!
//! Each contributing atom is replicated into the periodic shells `(i, j, k)`
//! that can bring it within the cutoff of some contributing atom, skipping
//! the origin shell and any offset along an open axis. A replica is kept only
//! when, along every periodic axis, its fractional coordinate lies within
//! `ratio = rcut / face_distance` of the same contributing atom. The fractional
//! gap along an axis never exceeds the Cartesian distance divided by the face
//! distance, so no replica within the cutoff is lost.

use log::debug;
use rustc_hash::{FxHashMap, FxHashSet};
use std::ops::RangeInclusive;

use crate::geometry::{face_distances, fractional, replication_count, to_cartesian, Cell, Vector3D};
use crate::neighbor::errors::{check_cutoff, NeighborError, Result};

/// Largest supported distance from the origin, in cells, of a fractional
/// coordinate or of a shell offset
pub const MAX_CELL_OFFSET: f64 = 1e6;

/// Frozen set of padding atoms
///
/// `image[p]` is the index of the contributing atom that padding atom `p`
/// is a periodic copy of. Species borrow from the contributing species.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Padding<'a> {
    coords: Box<[Vector3D]>,
    species: Box<[&'a str]>,
    image: Box<[usize]>,
}

impl<'a> Padding<'a> {
    /// Number of padding atoms
    pub fn len(&self) -> usize {
        self.image.len()
    }

    /// True when no padding atom was generated
    pub fn is_empty(&self) -> bool {
        self.image.is_empty()
    }

    /// Cartesian coordinates of the padding atoms
    pub fn coords(&self) -> &[Vector3D] {
        &self.coords
    }

    /// Species of the padding atoms
    pub fn species(&self) -> &[&'a str] {
        &self.species
    }

    /// Contributing atom each padding atom is an image of
    pub fn image(&self) -> &[usize] {
        &self.image
    }
}

/// Growable buffers used while enumerating shells
#[derive(Default)]
struct PaddingBuilder<'a> {
    coords: Vec<Vector3D>,
    species: Vec<&'a str>,
    image: Vec<usize>,
}

impl<'a> PaddingBuilder<'a> {
    fn push(&mut self, coord: Vector3D, species: &'a str, image: usize) {
        self.coords.push(coord);
        self.species.push(species);
        self.image.push(image);
    }

    fn freeze(self) -> Padding<'a> {
        Padding {
            coords: self.coords.into_boxed_slice(),
            species: self.species.into_boxed_slice(),
            image: self.image.into_boxed_slice(),
        }
    }
}

type CellKey = [i64; 3];

fn out_of_range(what: String) -> NeighborError {
    NeighborError::ExtentTooLarge(format!(
        "{} is more than {:e} cells from the origin",
        what, MAX_CELL_OFFSET
    ))
}

/// Integer cell of a fractional component, bounded by [`MAX_CELL_OFFSET`]
fn cell_index(x: f64, atom: usize) -> Result<i64> {
    if x.is_nan() || x.abs() > MAX_CELL_OFFSET {
        return Err(out_of_range(format!(
            "fractional coordinate {:e} of atom {}",
            x, atom
        )));
    }
    Ok(x.floor() as i64)
}

/// Contributing atoms binned by the integer cell they sit in
///
/// Open axes always use cell index 0 and are never tested.
struct ReachGrid<'f> {
    frac: &'f [Vector3D],
    pbc: [bool; 3],
    ratio: [f64; 3],
    shells: [i64; 3],
    bins: FxHashMap<CellKey, Vec<usize>>,
}

impl<'f> ReachGrid<'f> {
    fn new(frac: &'f [Vector3D], face: [f64; 3], pbc: [bool; 3], rcut: f64) -> Result<Self> {
        let mut ratio = [0.0; 3];
        let mut shells = [0; 3];
        for axis in 0..3 {
            if !pbc[axis] {
                continue;
            }
            ratio[axis] = rcut / face[axis];
            let count = replication_count(rcut, face[axis]);
            shells[axis] = i64::try_from(count)
                .ok()
                .filter(|&n| n as f64 <= MAX_CELL_OFFSET)
                .ok_or_else(|| {
                    out_of_range(format!("cutoff {} ({} shells along axis {})", rcut, count, axis))
                })?;
        }

        let mut bins: FxHashMap<CellKey, Vec<usize>> = FxHashMap::default();
        for (at, f) in frac.iter().enumerate() {
            let mut key = [0; 3];
            for axis in 0..3 {
                if pbc[axis] {
                    key[axis] = cell_index(f[axis], at)?;
                }
            }
            bins.entry(key).or_default().push(at);
        }

        Ok(Self {
            frac,
            pbc,
            ratio,
            shells,
            bins,
        })
    }

    fn key_of(&self, g: &Vector3D) -> CellKey {
        let mut key = [0; 3];
        for axis in 0..3 {
            if self.pbc[axis] {
                key[axis] = g[axis].floor() as i64;
            }
        }
        key
    }

    /// Whether `g` lies within `ratio` of one contributing atom along every
    /// periodic axis
    fn is_near(&self, g: &Vector3D) -> bool {
        let [k0, k1, k2] = self.key_of(g);
        let [s0, s1, s2] = self.shells;
        for d0 in -s0..=s0 {
            for d1 in -s1..=s1 {
                for d2 in -s2..=s2 {
                    let Some(atoms) = self.bins.get(&[k0 + d0, k1 + d1, k2 + d2]) else {
                        continue;
                    };
                    let hit = atoms.iter().any(|&j| {
                        let f = &self.frac[j];
                        (0..3).all(|axis| {
                            !self.pbc[axis] || (g[axis] - f[axis]).abs() <= self.ratio[axis]
                        })
                    });
                    if hit {
                        return true;
                    }
                }
            }
        }
        false
    }

    /// Shell offsets along `axis` that move `f` into reach of cell `occupied`
    fn shell_range(&self, axis: usize, f: &Vector3D, occupied: &CellKey) -> RangeInclusive<i64> {
        if !self.pbc[axis] {
            return 0..=0;
        }
        let lo = occupied[axis] as f64 - self.ratio[axis] - f[axis];
        let hi = occupied[axis] as f64 + 1.0 + self.ratio[axis] - f[axis];
        (lo.ceil() as i64)..=(hi.floor() as i64)
    }

    /// Shells in which the replica of atom `at` is kept, unordered
    fn kept_shells(&self, at: usize) -> Vec<CellKey> {
        let f = &self.frac[at];
        let mut seen: FxHashSet<CellKey> = FxHashSet::default();
        let mut kept = Vec::new();
        for occupied in self.bins.keys() {
            for i in self.shell_range(0, f, occupied) {
                for j in self.shell_range(1, f, occupied) {
                    for k in self.shell_range(2, f, occupied) {
                        let shell = [i, j, k];
                        // the primary cell holds the contributing atoms themselves
                        if shell == [0; 3] || !seen.insert(shell) {
                            continue;
                        }
                        let offset = Vector3D::new(i as f64, j as f64, k as f64);
                        if self.is_near(&(offset + *f)) {
                            kept.push(shell);
                        }
                    }
                }
            }
        }
        kept
    }
}

/// Create the padding atoms of a configuration
///
/// # Arguments
///
/// * `cell` - Lattice vectors as rows
/// * `pbc` - Periodic flag per lattice direction
/// * `species` - Species of the contributing atoms
/// * `coords` - Cartesian coordinates of the contributing atoms
/// * `rcut` - Cutoff radius (the maximum over all species pairs)
///
/// # Returns
///
/// The padding atoms, possibly none, ordered by shell and then by image.
/// A fully open system never touches the cell, so its lattice vectors may be
/// degenerate. Non-finite coordinates and coordinates or cutoffs beyond
/// [`MAX_CELL_OFFSET`] cells are errors.
pub fn set_padding<'a>(
    cell: &Cell,
    pbc: [bool; 3],
    species: &'a [String],
    coords: &[Vector3D],
    rcut: f64,
) -> Result<Padding<'a>> {
    check_cutoff(rcut)?;
    if species.len() != coords.len() {
        return Err(NeighborError::ShapeMismatch(format!(
            "{} species but {} coordinates",
            species.len(),
            coords.len()
        )));
    }
    if let Some(at) = coords.iter().position(|p| !p.is_finite()) {
        return Err(NeighborError::ShapeMismatch(format!(
            "coordinate of atom {} is not finite: {}",
            at, coords[at]
        )));
    }
    if !pbc.iter().any(|&p| p) {
        debug!("No periodic axis, skipping padding");
        return Ok(Padding::default());
    }

    let face = face_distances(cell)?;
    let frac = fractional(coords, cell)?;
    if frac.is_empty() {
        return Ok(Padding::default());
    }
    let grid = ReachGrid::new(&frac, face, pbc, rcut)?;

    let mut replicas: Vec<(CellKey, usize)> = (0..frac.len())
        .flat_map(|at| grid.kept_shells(at).into_iter().map(move |shell| (shell, at)))
        .collect();
    replicas.sort_unstable();

    let mut builder = PaddingBuilder::default();
    for ([i, j, k], at) in replicas {
        let offset = Vector3D::new(i as f64, j as f64, k as f64);
        builder.push(to_cartesian(&(offset + frac[at]), cell), &species[at], at);
    }

    let padding = builder.freeze();
    debug!(
        "Padding: shells {:?}, rcut/face ratios {:?}, {} occupied cells, {} padding atoms for {} contributing",
        grid.shells,
        grid.ratio,
        grid.bins.len(),
        padding.len(),
        coords.len()
    );
    Ok(padding)
}
