/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Uniform spatial grid for cutoff queries
//!
//! Space is split into cubic bins with the cutoff as edge length, so a query
//! sphere touches at most 3×3×3 bins. The combined atom set already carries
//! its periodic images, so the grid itself is not periodic.

use rustc_hash::FxHashMap;

use crate::geometry::Vector3D;

type BinKey = (i64, i64, i64);

/// Atoms bucketed into cubic bins
pub struct SpatialGrid {
    inv_bin_size: f64,
    bins: FxHashMap<BinKey, Vec<usize>>,
}

impl SpatialGrid {
    /// Bucket `coords` into bins of edge `bin_size`
    pub fn from_positions(coords: &[Vector3D], bin_size: f64) -> Self {
        debug_assert!(bin_size > 0.0, "bin_size must be positive");
        let inv_bin_size = 1.0 / bin_size;
        let mut bins: FxHashMap<BinKey, Vec<usize>> = FxHashMap::default();
        for (i, p) in coords.iter().enumerate() {
            bins.entry(bin_of(p, inv_bin_size)).or_default().push(i);
        }
        Self { inv_bin_size, bins }
    }

    /// Number of occupied bins
    pub fn occupied_bins(&self) -> usize {
        self.bins.len()
    }

    /// Calls `f(j)` for every atom `j != center` in the bins overlapping the
    /// bounding box of a sphere of `radius` around `center`
    pub fn for_each_candidate<F: FnMut(usize)>(
        &self,
        coords: &[Vector3D],
        center: usize,
        radius: f64,
        mut f: F,
    ) {
        let c = coords[center];
        let reach = Vector3D::new(radius, radius, radius);
        let (x0, y0, z0) = bin_of(&(c - reach), self.inv_bin_size);
        let (x1, y1, z1) = bin_of(&(c + reach), self.inv_bin_size);

        for gx in x0..=x1 {
            for gy in y0..=y1 {
                for gz in z0..=z1 {
                    let Some(atoms) = self.bins.get(&(gx, gy, gz)) else {
                        continue;
                    };
                    for &j in atoms {
                        if j != center {
                            f(j);
                        }
                    }
                }
            }
        }
    }
}

fn bin_of(p: &Vector3D, inv_bin_size: f64) -> BinKey {
    (
        (p.x * inv_bin_size).floor() as i64,
        (p.y * inv_bin_size).floor() as i64,
        (p.z * inv_bin_size).floor() as i64,
    )
}
