//! # mslibquant
//!
//! A command-line tool for turning vendor mass spectral libraries into
//! quantitation methods and compact tabular summaries.
//!
//! ## Usage
//!
//! ```bash
//! # Library to quantitation method (writes NIST08.L.xml.xml)
//! mslibquant quant NIST08.L.xml
//!
//! # Five most abundant peaks per compound
//! mslibquant csv NIST08.L.xml -o peaks.csv
//!
//! # Chemical-class scores
//! mslibquant score NIST08.L.xml -o scores.csv
//!
//! # Library summary
//! mslibquant info NIST08.L.xml --json
//! ```

use anyhow::Result;
use clap::Parser;

mod cli;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli::init_logging(cli.verbosity());
    cli::dispatch(cli)
}
