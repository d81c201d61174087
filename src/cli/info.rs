use anyhow::{Context, Result};
use serde::Serialize;
use std::path::PathBuf;

use mslibquant::library::{BuildStats, Library};

use super::load_input;

/// Summary of a library document
#[derive(Debug, Serialize)]
struct LibrarySummary<'a> {
    library_id: u32,
    accurate_mass: bool,
    compounds: usize,
    spectra: usize,
    compounds_without_spectra: Vec<u32>,
    build: &'a BuildStats,
}

impl<'a> LibrarySummary<'a> {
    fn new(library: &Library, build: &'a BuildStats) -> Self {
        Self {
            library_id: library.library_id,
            accurate_mass: library.accurate_mass,
            compounds: library.compounds.len(),
            spectra: library.spectrum_count(),
            compounds_without_spectra: library
                .compounds
                .values()
                .filter(|c| c.spectra.is_empty())
                .map(|c| c.compound_id)
                .collect(),
            build,
        }
    }
}

/// Display information about a library document
pub fn run(input: Option<PathBuf>, json: bool) -> Result<()> {
    let (library, stats) = load_input(input.as_deref())?;
    let summary = LibrarySummary::new(&library, &stats);

    if json {
        let text = serde_json::to_string_pretty(&summary)
            .context("Failed to serialize library summary")?;
        println!("{}", text);
        return Ok(());
    }

    println!("Library Information");
    println!("===================");
    if let Some(path) = &input {
        println!("File: {}", path.display());
    }
    println!();

    println!("Library:");
    println!("  ID: {}", summary.library_id);
    println!("  Accurate mass: {}", summary.accurate_mass);
    println!("  Compounds: {}", summary.compounds);
    println!("  Spectra: {}", summary.spectra);
    println!();

    println!("Build:");
    println!("  Compound nodes: {}", stats.compound_nodes);
    println!("  Compounds replaced: {}", stats.compounds_replaced);
    println!("  Spectra attached: {}", stats.spectra_attached);
    println!("  Ignored nodes: {}", stats.ignored_nodes);
    println!("  Skipped spectra: {}", stats.skipped_spectra.len());
    for skipped in &stats.skipped_spectra {
        println!(
            "    spectrum {} (compound {}): {}",
            skipped.spectrum_id, skipped.compound_id, skipped.reason
        );
    }

    if !summary.compounds_without_spectra.is_empty() {
        println!();
        println!(
            "Compounds without spectra ({}): {:?}",
            summary.compounds_without_spectra.len(),
            summary.compounds_without_spectra
        );
    }

    Ok(())
}
