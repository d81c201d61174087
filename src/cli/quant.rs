use anyhow::{Context, Result};
use log::info;
use std::ffi::OsString;
use std::io::Write;
use std::path::{Path, PathBuf};

use mslibquant::method::QuantitationDataSet;

use super::config::Config;
use super::{create_output, load_input};

/// Synthesize a quantitation method from a library document
pub fn run(
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    skip_empty: bool,
    config: &Config,
) -> Result<()> {
    let (library, _stats) = load_input(input.as_deref())?;

    let options = config.quant.synthesis_options(skip_empty);
    let method = QuantitationDataSet::synthesize_with(&library, &options)
        .context("Failed to synthesize quantitation method")?;
    let text = method
        .render()
        .context("Failed to render quantitation method")?;

    let output = output.or_else(|| input.as_deref().map(default_output_path));
    let mut out = create_output(output.as_deref())?;
    out.write_all(text.as_bytes())
        .context("Failed to write quantitation method")?;
    out.flush()?;

    info!(
        "Wrote {} targets to {}",
        method.targets.len(),
        output
            .as_deref()
            .map_or_else(|| "stdout".into(), |p| p.display().to_string())
    );
    Ok(())
}

/// `library.xml` becomes `library.xml.xml`
pub(crate) fn default_output_path(input: &Path) -> PathBuf {
    let mut name = OsString::from(input.as_os_str());
    name.push(".xml");
    PathBuf::from(name)
}
