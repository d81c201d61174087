use std::io::Write;

use log::{info, warn};
use serde::Serialize;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::ExportError;
use crate::library::{Compound, CompoundId, Library};

/// Maximum absolute m/z distance between a peak and a kernel mass
pub const TOLERANCE: f64 = 0.1;

/// Divisor applied to every matching abundance
pub const ABUNDANCE_SCALE: f64 = 10000.0;

/// Diagnostic fragment masses of one chemical class
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassKernel {
    /// Class name, used as the column header
    pub name: &'static str,
    /// Reference fragment masses
    pub masses: &'static [f64],
}

/// The chemical classes every compound is scored against, in column order
pub const CLASS_KERNELS: [ClassKernel; 13] = [
    ClassKernel {
        name: "Alkane",
        masses: &[29.0, 43.0, 57.0, 71.0, 85.0, 99.0, 113.0, 127.0, 141.0],
    },
    ClassKernel {
        name: "Alcohol",
        masses: &[31.0, 45.0, 59.0, 73.0, 87.0, 101.0, 115.0, 129.0, 143.0],
    },
    ClassKernel {
        name: "Ester",
        masses: &[43.0, 60.0, 74.0, 88.0, 102.0, 116.0, 130.0, 144.0],
    },
    ClassKernel {
        name: "Amine",
        masses: &[30.0, 44.0, 58.0, 72.0, 86.0, 100.0, 114.0, 128.0, 142.0],
    },
    ClassKernel {
        name: "Aldehyde",
        masses: &[29.0, 44.0, 58.0, 72.0, 86.0, 100.0, 114.0, 128.0],
    },
    ClassKernel {
        name: "Ketone",
        masses: &[43.0, 58.0, 72.0, 86.0, 100.0, 114.0, 128.0, 142.0],
    },
    ClassKernel {
        name: "Chloroalkane",
        masses: &[49.0, 63.0, 77.0, 91.0, 105.0, 119.0, 133.0, 147.0],
    },
    ClassKernel {
        name: "Chlorobiphenyl",
        masses: &[152.0, 154.0, 156.0],
    },
    ClassKernel {
        name: "Halogenated",
        masses: &[50.0, 80.0, 94.0, 108.0, 122.0, 136.0],
    },
    ClassKernel {
        name: "Sulphur",
        masses: &[47.0, 61.0, 75.0, 89.0, 103.0, 117.0, 131.0, 145.0],
    },
    ClassKernel {
        name: "Furan Ether",
        masses: &[68.0, 82.0, 96.0, 110.0, 124.0, 138.0],
    },
    ClassKernel {
        name: "Carboxylic acid",
        masses: &[45.0, 60.0, 74.0, 88.0, 102.0, 116.0, 130.0, 144.0],
    },
    ClassKernel {
        name: "Aromatic",
        masses: &[77.0, 91.0, 105.0, 119.0, 133.0, 147.0],
    },
];

/// Mean per-spectrum affinity of a compound for a set of kernel masses
///
/// Every peak within [`TOLERANCE`] of a kernel mass contributes
/// `abundance / ABUNDANCE_SCALE`; a peak close to several kernel masses
/// counts once per mass. The sum over all spectra is divided by the
/// number of spectra. A class with no matching peak scores `+0.0`.
/// Returns `None` for a compound without spectra.
pub fn score(compound: &Compound, masses: &[f64]) -> Option<f64> {
    if compound.spectra.is_empty() {
        return None;
    }

    let total: f64 = compound
        .spectra
        .values()
        .map(|spectrum| {
            masses
                .iter()
                .map(|&kernel| {
                    spectrum
                        .peaks()
                        .filter(|(mz, _)| (mz - kernel).abs() < TOLERANCE)
                        .fold(0.0, |acc, (_, abundance)| acc + abundance / ABUNDANCE_SCALE)
                })
                .fold(0.0, |acc, contribution| acc + contribution)
        })
        .fold(0.0, |acc, contribution| acc + contribution);

    Some(total / compound.spectra.len() as f64)
}

/// Scores of one compound against every class in [`CLASS_KERNELS`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassScores {
    /// Compound identifier
    pub compound_id: CompoundId,
    /// Compound name
    pub name: String,
    /// One score per kernel, in [`CLASS_KERNELS`] order
    pub scores: Vec<f64>,
}

impl ClassScores {
    /// Score a compound against all classes, `None` if it has no spectra
    pub fn for_compound(compound: &Compound) -> Option<Self> {
        let scores = CLASS_KERNELS
            .iter()
            .map(|kernel| score(compound, kernel.masses))
            .collect::<Option<Vec<_>>>()?;

        Some(Self {
            compound_id: compound.compound_id,
            name: compound.name.clone(),
            scores,
        })
    }

    /// Score for the class with the given name
    pub fn class(&self, name: &str) -> Option<f64> {
        CLASS_KERNELS
            .iter()
            .position(|kernel| kernel.name == name)
            .and_then(|i| self.scores.get(i).copied())
    }
}

/// Score every compound of a library, in compound ID order
///
/// Compounds without spectra are skipped with a warning.
pub fn score_library(library: &Library) -> Vec<ClassScores> {
    let compounds: Vec<&Compound> = library.compounds.values().collect();

    #[cfg(feature = "parallel")]
    let scored: Vec<Option<ClassScores>> = compounds
        .par_iter()
        .map(|compound| ClassScores::for_compound(compound))
        .collect();

    #[cfg(not(feature = "parallel"))]
    let scored: Vec<Option<ClassScores>> = compounds
        .iter()
        .map(|compound| ClassScores::for_compound(compound))
        .collect();

    compounds
        .iter()
        .zip(scored)
        .filter_map(|(compound, scores)| {
            if scores.is_none() {
                warn!(
                    "Skipping compound {} without spectra in class scoring",
                    compound.compound_id
                );
            }
            scores
        })
        .collect()
}

/// Write the class score table, one row per scorable compound
///
/// Returns the number of data rows written.
pub fn write_score_table<W: Write>(library: &Library, out: W) -> Result<usize, ExportError> {
    let mut writer = csv::Writer::from_writer(out);

    let mut header = vec!["ID".to_string(), "Name".to_string()];
    header.extend(CLASS_KERNELS.iter().map(|kernel| kernel.name.to_string()));
    writer.write_record(&header)?;

    let rows = score_library(library);
    for row in &rows {
        let mut record = Vec::with_capacity(row.scores.len() + 2);
        record.push(row.compound_id.to_string());
        record.push(row.name.clone());
        record.extend(row.scores.iter().map(f64::to_string));
        writer.write_record(&record)?;
    }

    writer.flush()?;
    info!(
        "Scored {} of {} compounds against {} classes",
        rows.len(),
        library.compounds.len(),
        CLASS_KERNELS.len()
    );
    Ok(rows.len())
}
