/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! # padneigh
//!
//! Periodic padding atoms and cutoff neighbor lists for atomic configurations.
//!
//! For a configuration with periodic or mixed periodic/open boundaries, the
//! crate generates the periodic images ("padding atoms") needed so every
//! contributing atom sees its full neighborhood within a cutoff, then builds
//! a neighbor list over the combined contributing + padding atom set.
//!
//! ```
//! use padneigh::config::{Configuration, CutoffSpec};
//! use padneigh::geometry::{Cell, Vector3D};
//! use padneigh::neighbor::NeighborList;
//!
//! let conf = Configuration::new(
//!     ["Ar"],
//!     vec![Vector3D::new(1.0, 1.0, 1.0)],
//!     Cell::cubic(2.0),
//!     [true; 3],
//! )?;
//! let cutoffs = CutoffSpec::from_pairs([("Ar-Ar", 2.1)])?;
//! let nl = NeighborList::new(&conf, &cutoffs)?;
//!
//! let (count, neighbors) = nl.neighbors_of(0)?;
//! assert_eq!(count, 6);
//! assert!(neighbors.iter().all(|&j| nl.image_of(j) == Some(0)));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod cli;
pub mod config;
pub mod geometry;
pub mod io;
pub mod neighbor;
pub mod padding;

pub use config::{AtomicConfiguration, Configuration, CutoffSpec};
pub use neighbor::{NeighborError, NeighborList, NeighborOptions, NeighborStrategy};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const AUTHORS: &str = env!("CARGO_PKG_AUTHORS");
