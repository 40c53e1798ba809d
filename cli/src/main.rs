#![deny(missing_docs)]

//! # Fix Formatting
//!
//! Repairs the Lorapok player's `App.tsx` in place. The target path is fixed;
//! the flags only control logging and whether the file is written.

use clap::Parser;
use fixfmt_core::{AppResult, DEFAULT_TARGET};
use std::path::Path;

mod logger;
mod repair;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Repair spacing, state, icons and imports in App.tsx")]
struct Cli {
    #[clap(flatten)]
    repair: repair::RepairArgs,

    /// Log every pass with its match count.
    #[clap(short, long)]
    verbose: bool,

    /// Only log errors.
    #[clap(short, long)]
    quiet: bool,

    /// Disable coloured log output. Any non-empty `NO_COLOR` has the same effect.
    #[clap(long, env = "NO_COLOR", value_parser = clap::builder::FalseyValueParser::new())]
    no_color: bool,
}

fn main() -> AppResult<()> {
    let cli = Cli::parse();
    logger::init_logger(cli.verbose, cli.quiet, cli.no_color);

    repair::execute(&cli.repair, Path::new(DEFAULT_TARGET))
}
