/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Atomic configurations and cutoff specifications
//!
//! The neighbor list only needs read access to a configuration's species,
//! coordinates, cell and periodic flags, expressed by [`AtomicConfiguration`].
//! [`Configuration`] is the owned implementation used by the readers and
//! the command line tool.

pub mod configuration;
pub mod cutoff;
pub mod errors;

pub use configuration::{AtomicConfiguration, Configuration};
pub use cutoff::CutoffSpec;
pub use errors::{ConfigError, Result};
