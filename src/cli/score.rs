use anyhow::{Context, Result};
use log::info;
use std::path::PathBuf;

use mslibquant::export::write_score_table;

use super::{create_output, load_input};

/// Score each compound against the chemical-class kernels
pub fn run(input: Option<PathBuf>, output: Option<PathBuf>) -> Result<()> {
    let (library, _stats) = load_input(input.as_deref())?;

    let out = create_output(output.as_deref())?;
    let rows = write_score_table(&library, out).context("Failed to write score table")?;

    info!("Scored {} compounds", rows);
    Ok(())
}
