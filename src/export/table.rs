use std::io::Write;

use log::{debug, info};

use super::{select_top_n, ExportError, SortOrder};
use crate::library::{Compound, Library};

/// Number of peaks per compound written by default
pub const DEFAULT_TOP_N: usize = 5;

/// m/z values of the `n` most abundant peaks of the compound's first spectrum
///
/// Empty for a compound without spectra.
pub fn top_peaks(compound: &Compound, n: usize) -> Vec<f64> {
    compound
        .first_spectrum()
        .map(|spectrum| {
            select_top_n(
                &spectrum.abundance_values,
                &spectrum.mz_values,
                n,
                SortOrder::Descending,
            )
            .into_iter()
            .map(|(_, mz)| mz)
            .collect()
        })
        .unwrap_or_default()
}

/// Write one row per compound: ID, retention index and top-N m/z values
///
/// The table is rectangular: compounds with fewer than `n` peaks get
/// empty trailing cells. Returns the number of data rows written.
pub fn write_peak_table<W: Write>(
    library: &Library,
    out: W,
    n: usize,
) -> Result<usize, ExportError> {
    let mut writer = csv::Writer::from_writer(out);

    let mut header = vec!["CompoundID".to_string(), "RetentionIndex".to_string()];
    header.extend((1..=n).map(|i| format!("MZ{i}")));
    writer.write_record(&header)?;

    let mut rows = 0;
    for compound in library.compounds.values() {
        let peaks = top_peaks(compound, n);
        if peaks.is_empty() {
            debug!("Compound {} has no peaks to export", compound.compound_id);
        }

        let mut record = Vec::with_capacity(n + 2);
        record.push(compound.compound_id.to_string());
        record.push(compound.retention_index.to_string());
        record.extend(peaks.iter().map(f64::to_string));
        record.resize(n + 2, String::new());
        writer.write_record(&record)?;
        rows += 1;
    }

    writer.flush()?;
    info!("Wrote peak table with {} compounds (top {})", rows, n);
    Ok(rows)
}
