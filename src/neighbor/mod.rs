/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Neighbor lists over contributing and padding atoms
//!
//! [`NeighborList`] pulls a configuration apart, pads it with periodic images
//! and records, for every contributing atom, the atoms of the combined set
//! that lie strictly within the largest cutoff.

pub mod batch;
pub mod builder;
pub mod errors;
pub mod grid;
pub mod list;

pub use batch::build_all;
pub use builder::{create_neigh, NeighborOptions, NeighborStrategy, NeighborTable};
pub use errors::{NeighborError, Result};
pub use list::NeighborList;
