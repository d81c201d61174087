use anyhow::{Context, Result};
use log::info;
use std::path::PathBuf;

use mslibquant::export::{write_peak_table, DEFAULT_TOP_N};

use super::config::Config;
use super::{create_output, load_input};

/// Export the most abundant peaks of each compound as CSV
pub fn run(
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    top_n: Option<usize>,
    config: &Config,
) -> Result<()> {
    let top_n = top_n.or(config.csv.top_n).unwrap_or(DEFAULT_TOP_N);
    if top_n == 0 {
        anyhow::bail!("Number of peaks per compound must be at least 1");
    }

    let (library, _stats) = load_input(input.as_deref())?;

    let out = create_output(output.as_deref())?;
    let rows = write_peak_table(&library, out, top_n).context("Failed to write peak table")?;

    info!("Exported {} compounds", rows);
    Ok(())
}
