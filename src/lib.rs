//! # mslibquant - Mass Spectral Library to Quantitation Method
//!
//! `mslibquant` reads vendor mass spectral library documents and turns them
//! into quantitation methods and compact tabular summaries.
//!
//! ## Key Features
//!
//! - **Typed library model**: [`library::Library`] → [`library::Compound`] →
//!   [`library::Spectrum`], built directly from the document tree. Spectra
//!   whose binary arrays cannot be decoded are skipped and reported instead
//!   of failing the whole library.
//!
//! - **Binary spectral arrays**: m/z and abundance values are stored as
//!   Base64 text over packed native-endian `f64` values and decoded by
//!   [`codec::SpectralCodec`].
//!
//! - **Quantitation methods**: one `TargetCompound` per library compound,
//!   each carrying a fixed instrument template, the base peak of its first
//!   spectrum and an embedded integrator parameter document.
//!
//! - **Tabular exports**: the top-N most abundant peaks per compound and
//!   chemical-class affinity scores, both as CSV.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use mslibquant::prelude::*;
//!
//! let (library, stats) = load_library_file("NIST08.L.xml")?;
//! println!(
//!     "{} compounds, {} spectra ({} skipped)",
//!     library.compounds.len(),
//!     library.spectrum_count(),
//!     stats.skipped_spectra.len()
//! );
//!
//! let method = QuantitationDataSet::synthesize(&library)?;
//! std::fs::write("NIST08.L.xml.xml", method.render()?)?;
//!
//! let peaks = std::fs::File::create("peaks.csv")?;
//! write_peak_table(&library, peaks, DEFAULT_TOP_N)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Architecture
//!
//! The library is organized into the following modules:
//!
//! - [`codec`]: Base64 / native-endian `f64` array codec
//! - [`document`]: Element tree, read interface and XML reader/writer
//! - [`library`]: Library model and builder
//! - [`method`]: Quantitation method synthesis
//! - [`export`]: Top-N selection, peak table and class score CSV exports
//!
//! ## Features
//!
//! - `parallel`: score compounds on the rayon thread pool

#![warn(missing_docs)]
#![deny(rustdoc::missing_crate_level_docs)]

pub mod codec;
pub mod document;
pub mod export;
pub mod library;
pub mod method;

/// Re-export commonly used types for convenience
pub mod prelude {
    pub use crate::codec::{CodecError, SpectralCodec};
    pub use crate::document::{read_document, render_document, DocumentError, Element, TreeNode};
    pub use crate::export::{
        score, select_top_n, write_peak_table, write_score_table, ClassScores, ExportError,
        SortOrder, CLASS_KERNELS, DEFAULT_TOP_N,
    };
    pub use crate::library::{
        load_library, load_library_file, BuildStats, Compound, Library, LibraryError, Spectrum,
    };
    pub use crate::method::{
        EmptySpectraPolicy, MethodError, QuantitationDataSet, SynthesisOptions, TargetCompound,
    };
}
