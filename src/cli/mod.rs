use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use log::{info, warn};
use mslibquant::library::{load_library, load_library_file, BuildStats, Library};

mod config;
mod table;
mod info;
mod quant;
mod score;

use config::Config;

/// mslibquant - Mass spectral library to quantitation method converter
#[derive(Parser)]
#[command(name = "mslibquant")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Verbosity level (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Load settings from a TOML config file
    #[arg(long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a library into a quantitation method
    Quant {
        /// Library document (reads stdin when omitted)
        #[arg(value_name = "INPUT")]
        input: Option<PathBuf>,

        /// Output method path (defaults to INPUT.xml, or stdout)
        #[arg(short, long, value_name = "OUTPUT")]
        output: Option<PathBuf>,

        /// Leave out compounds without spectra instead of failing
        #[arg(long)]
        skip_empty: bool,
    },

    /// Export the top-N peaks of each compound as CSV
    Csv {
        /// Library document (reads stdin when omitted)
        #[arg(value_name = "INPUT")]
        input: Option<PathBuf>,

        /// Output CSV path (defaults to stdout)
        #[arg(short, long, value_name = "OUTPUT")]
        output: Option<PathBuf>,

        /// Peaks per compound (default: 5)
        #[arg(short = 'n', long)]
        top_n: Option<usize>,
    },

    /// Score each compound against chemical-class fragment kernels
    Score {
        /// Library document (reads stdin when omitted)
        #[arg(value_name = "INPUT")]
        input: Option<PathBuf>,

        /// Output CSV path (defaults to stdout)
        #[arg(short, long, value_name = "OUTPUT")]
        output: Option<PathBuf>,
    },

    /// Display information about a library document
    Info {
        /// Library document (reads stdin when omitted)
        #[arg(value_name = "INPUT")]
        input: Option<PathBuf>,

        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    pub fn verbosity(&self) -> u8 {
        self.verbose
    }
}

pub fn init_logging(verbosity: u8) {
    let log_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
}

pub fn dispatch(cli: Cli) -> Result<()> {
    let config = Config::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Quant {
            input,
            output,
            skip_empty,
        } => quant::run(input, output, skip_empty, &config),
        Commands::Csv {
            input,
            output,
            top_n,
        } => table::run(input, output, top_n, &config),
        Commands::Score { input, output } => score::run(input, output),
        Commands::Info { input, json } => info::run(input, json),
    }
}

/// Read and build a library from a file, or from stdin when no path is given
fn load_input(input: Option<&Path>) -> Result<(Library, BuildStats)> {
    let (library, stats) = match input {
        Some(path) => {
            if !path.exists() {
                anyhow::bail!("Input file does not exist: {}", path.display());
            }
            info!("Reading library: {}", path.display());
            load_library_file(path)
                .with_context(|| format!("Failed to load library: {}", path.display()))?
        }
        None => {
            info!("Reading library from stdin");
            load_library(BufReader::new(io::stdin().lock()))
                .context("Failed to load library from stdin")?
        }
    };

    if !stats.skipped_spectra.is_empty() {
        warn!(
            "{} spectra could not be decoded and were skipped",
            stats.skipped_spectra.len()
        );
    }
    info!(
        "Library {}: {} compounds, {} spectra",
        library.library_id,
        library.compounds.len(),
        library.spectrum_count()
    );
    Ok((library, stats))
}

/// Open a buffered output file, or stdout when no path is given
fn create_output(output: Option<&Path>) -> Result<Box<dyn Write>> {
    match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(BufWriter::new(io::stdout().lock()))),
    }
}
