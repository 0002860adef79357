/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Neighbor lists for many configurations at once

use log::debug;
use rayon::prelude::*;

use super::builder::NeighborOptions;
use super::errors::Result;
use super::list::NeighborList;
use crate::config::{AtomicConfiguration, CutoffSpec};

/// Build one neighbor list per configuration
///
/// Builds are independent: the output follows the input order and a failure
/// in one configuration leaves the others untouched. With
/// `options.parallel` each configuration is a rayon task and its own
/// per-atom scan runs serially.
pub fn build_all<C: AtomicConfiguration + Sync>(
    configs: &[C],
    cutoffs: &CutoffSpec,
    options: NeighborOptions,
) -> Vec<Result<NeighborList>> {
    debug!(
        "Building {} neighbor lists ({})",
        configs.len(),
        if options.parallel { "parallel" } else { "serial" }
    );
    if options.parallel {
        let per_config = options.serial();
        configs
            .par_iter()
            .map(|conf| NeighborList::with_options(conf, cutoffs, per_config))
            .collect()
    } else {
        configs
            .iter()
            .map(|conf| NeighborList::with_options(conf, cutoffs, options))
            .collect()
    }
}
