/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Padding atoms
//!
//! Periodic images of the contributing atoms that lie close enough to the
//! cell boundary to matter for a cutoff-sphere neighbor search.

pub mod generator;

pub use generator::{set_padding, Padding, MAX_CELL_OFFSET};
