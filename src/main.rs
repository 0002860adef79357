/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Main executable for padneigh

use clap::Parser;
use padneigh::cli::{run, Cli};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    print!("{}", run(&cli)?);

    Ok(())
}
