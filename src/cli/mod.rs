/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Command Line Interface (CLI) module
//!
//! Reads a configuration, builds its neighbor list and reports it either as
//! text or as JSON.

use anyhow::{bail, Context};
use clap::{Parser, ValueEnum};
use serde::Serialize;
use std::fmt::Write as _;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use crate::config::CutoffSpec;
use crate::io::read_configuration;
use crate::neighbor::{NeighborList, NeighborOptions, NeighborStrategy};

/// Build the cutoff neighbor list of a periodic atomic configuration
#[derive(Parser, Debug)]
#[command(name = "padneigh", version, about)]
pub struct Cli {
    /// Configuration file (.xyz, .extxyz or .json)
    pub input: PathBuf,

    /// Cutoff for a species pair, e.g. `-c Si-Si=3.5`; repeatable
    #[arg(short = 'c', long = "cutoff", value_name = "PAIR=RCUT")]
    pub cutoffs: Vec<String>,

    /// JSON file mapping species pairs to cutoffs
    #[arg(long, value_name = "FILE")]
    pub cutoff_file: Option<PathBuf>,

    /// Candidate search strategy
    #[arg(long, value_enum, default_value_t = StrategyArg::BruteForce)]
    pub strategy: StrategyArg,

    /// Scan atoms on a single thread
    #[arg(long)]
    pub serial: bool,

    /// Print a JSON report instead of text
    #[arg(long)]
    pub json: bool,

    /// Log debug output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Strategy names accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StrategyArg {
    BruteForce,
    CellList,
}

impl From<StrategyArg> for NeighborStrategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::BruteForce => NeighborStrategy::BruteForce,
            StrategyArg::CellList => NeighborStrategy::CellList,
        }
    }
}

#[derive(Serialize)]
struct NeighborEntry<'a> {
    index: usize,
    image: usize,
    species: &'a str,
    distance: f64,
}

#[derive(Serialize)]
struct AtomEntry<'a> {
    index: usize,
    species: &'a str,
    count: usize,
    neighbors: Vec<NeighborEntry<'a>>,
}

#[derive(Serialize)]
struct Report<'a> {
    input: String,
    ncontrib: usize,
    npad: usize,
    rcut: f64,
    atoms: Vec<AtomEntry<'a>>,
}

impl Cli {
    /// Cutoffs from `--cutoff-file` overlaid with `--cutoff` entries
    pub fn cutoff_spec(&self) -> anyhow::Result<CutoffSpec> {
        let mut spec = match &self.cutoff_file {
            Some(path) => {
                let file = File::open(path)
                    .with_context(|| format!("cannot open cutoff file {}", path.display()))?;
                serde_json::from_reader(BufReader::new(file))
                    .with_context(|| format!("invalid cutoff file {}", path.display()))?
            }
            None => CutoffSpec::new(),
        };
        for entry in &self.cutoffs {
            let (pair, rcut) = CutoffSpec::parse_entry(entry)?;
            spec.insert(&pair, rcut)?;
        }
        if spec.is_empty() {
            bail!("no cutoff given; use --cutoff PAIR=RCUT or --cutoff-file");
        }
        Ok(spec)
    }

    /// Options for the neighbor list build
    pub fn options(&self) -> NeighborOptions {
        NeighborOptions {
            strategy: self.strategy.into(),
            parallel: !self.serial,
        }
    }
}

fn report<'a>(input: String, nl: &'a NeighborList) -> anyhow::Result<Report<'a>> {
    let mut atoms = Vec::with_capacity(nl.ncontrib());
    for i in 0..nl.ncontrib() {
        let neighbors = nl
            .neighbors_with_distances(i)?
            .into_iter()
            .map(|(j, distance)| NeighborEntry {
                index: j,
                image: nl.image()[j],
                species: &nl.species()[j],
                distance,
            })
            .collect::<Vec<_>>();
        atoms.push(AtomEntry {
            index: i,
            species: &nl.species()[i],
            count: neighbors.len(),
            neighbors,
        });
    }
    Ok(Report {
        input,
        ncontrib: nl.ncontrib(),
        npad: nl.npad(),
        rcut: nl.max_cutoff(),
        atoms,
    })
}

fn render_text(report: &Report<'_>) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{}: {} contributing atoms, {} padding atoms, rcut = {}",
        report.input, report.ncontrib, report.npad, report.rcut
    );
    for atom in &report.atoms {
        let _ = writeln!(
            out,
            "{:>6} {:<4} {:>4} neighbors",
            atom.index, atom.species, atom.count
        );
        for n in &atom.neighbors {
            let _ = writeln!(
                out,
                "         {:>6} {:<4} image {:>6}  r = {:.6}",
                n.index, n.species, n.image, n.distance
            );
        }
    }
    out
}

/// Execute the command and return what should be printed
pub fn run(cli: &Cli) -> anyhow::Result<String> {
    let cutoffs = cli.cutoff_spec()?;
    let conf = read_configuration(&cli.input)
        .with_context(|| format!("cannot read {}", cli.input.display()))?;
    let nl = NeighborList::with_options(&conf, &cutoffs, cli.options())
        .with_context(|| format!("cannot build neighbor list for {}", cli.input.display()))?;

    let report = report(cli.input.display().to_string(), &nl)?;
    if cli.json {
        Ok(serde_json::to_string_pretty(&report)?)
    } else {
        Ok(render_text(&report))
    }
}
