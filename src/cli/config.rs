//! TOML configuration file support.
//!
//! Settings that are awkward to pass on every invocation can live in a file:
//!
//! ```toml
//! # mslibquant.toml
//! [quant]
//! skip_empty_compounds = true
//! library_path_file_name = "D:/Libraries/NIST08.L"
//! batch_name = "Pesticides"
//! analyst_name = "QC"
//!
//! [csv]
//! top_n = 10
//! ```
//!
//! Command-line flags take precedence over file values.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

use mslibquant::method::{EmptySpectraPolicy, SynthesisOptions};

/// Root configuration structure for mslibquant.toml files.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Quantitation method settings.
    #[serde(default)]
    pub quant: QuantConfig,

    /// Peak table settings.
    #[serde(default)]
    pub csv: CsvConfig,
}

/// Configuration for the quant command.
#[derive(Debug, Default, Deserialize)]
pub struct QuantConfig {
    /// Leave compounds without spectra out instead of failing.
    pub skip_empty_compounds: Option<bool>,

    /// Value of the `LibraryPathFileName` attribute.
    pub library_path_file_name: Option<String>,

    /// Value of the `BatchName` attribute.
    pub batch_name: Option<String>,

    /// Value of the `AnalystName` attribute.
    pub analyst_name: Option<String>,
}

/// Configuration for the csv command.
#[derive(Debug, Default, Deserialize)]
pub struct CsvConfig {
    /// Number of peaks per compound.
    pub top_n: Option<usize>,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse TOML configuration")
    }

    /// Load the file if one was given, otherwise use defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }
}

impl QuantConfig {
    /// Synthesis options, with `skip_empty` from the command line winning.
    pub fn synthesis_options(&self, skip_empty: bool) -> SynthesisOptions {
        let empty_spectra = if skip_empty || self.skip_empty_compounds.unwrap_or(false) {
            EmptySpectraPolicy::Skip
        } else {
            EmptySpectraPolicy::Abort
        };

        SynthesisOptions {
            empty_spectra,
            library_path_file_name: self.library_path_file_name.clone(),
            batch_name: self.batch_name.clone(),
            analyst_name: self.analyst_name.clone(),
        }
    }
}
