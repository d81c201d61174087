//! # Spectral Library Model
//!
//! Reads vendor library documents into a typed [`Library`] →
//! [`Compound`] → [`Spectrum`] graph.
//!
//! ## Source document
//!
//! ```text
//! LibraryDataSet
//! ├── Library
//! │   ├── LibraryID          (required)
//! │   └── AccurateMass
//! ├── Compound*              (CompoundID, CASNumber, CompoundName, Formula,
//! │                           BoilingPoint, MeltingPoint, MolecularWeight,
//! │                           RetentionIndex, RetentionTimeRTL)
//! └── Spectrum*              (LibraryID, CompoundID, SpectrumID, BasePeakMZ,
//!                             MzValues, AbundanceValues)
//! ```
//!
//! `MzValues` and `AbundanceValues` are decoded with
//! [`crate::codec::SpectralCodec`]. A spectrum that fails to decode is
//! skipped with a warning; a spectrum that names an unknown compound aborts
//! the build.

use std::io::BufRead;
use std::path::Path;

use crate::document::{read_document, read_document_file};

mod builder;
mod error;
mod models;


pub use builder::{
    BuildStats, LibraryBuilder, SkippedSpectrum, COMPOUND_TAG, LIBRARY_TAG, ROOT_TAG,
    SPECTRUM_TAG,
};
pub use error::LibraryError;
pub use models::{Compound, CompoundId, Library, LibraryId, Spectrum, SpectrumId};

/// Read a library document from a stream
pub fn load_library<R: BufRead>(input: R) -> Result<(Library, BuildStats), LibraryError> {
    let root = read_document(input)?;
    let mut builder = LibraryBuilder::new();
    let library = builder.build(&root)?;
    Ok((library, builder.into_stats()))
}

/// Read a library document from a file
pub fn load_library_file<P: AsRef<Path>>(
    path: P,
) -> Result<(Library, BuildStats), LibraryError> {
    let root = read_document_file(path)?;
    let mut builder = LibraryBuilder::new();
    let library = builder.build(&root)?;
    Ok((library, builder.into_stats()))
}
