//! Data models for spectral library content
//!
//! A [`Library`] owns its compounds, and each [`Compound`] owns its spectra.
//! Both collections are keyed by identifier and iterate in ascending order.

use std::collections::BTreeMap;

use crate::codec::{CodecError, SpectralCodec};
use crate::document::TreeNode;

/// Identifier of a library
pub type LibraryId = u32;

/// Identifier of a compound, unique within its library
pub type CompoundId = u32;

/// Identifier of a spectrum
pub type SpectrumId = u32;

/// A mass spectral library as delivered by the vendor
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Library {
    /// Library identifier
    pub library_id: LibraryId,

    /// Whether the library was acquired with accurate mass
    pub accurate_mass: bool,

    /// Compounds keyed by compound ID
    pub compounds: BTreeMap<CompoundId, Compound>,
}

impl Library {
    /// Create an empty library
    pub fn new(library_id: LibraryId, accurate_mass: bool) -> Self {
        Self {
            library_id,
            accurate_mass,
            compounds: BTreeMap::new(),
        }
    }

    /// Look up a compound by ID
    pub fn compound(&self, compound_id: CompoundId) -> Option<&Compound> {
        self.compounds.get(&compound_id)
    }

    /// Total number of spectra across all compounds
    pub fn spectrum_count(&self) -> usize {
        self.compounds.values().map(|c| c.spectra.len()).sum()
    }
}

/// One identified chemical substance
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Compound {
    /// Owning library
    pub library_id: LibraryId,

    /// Compound identifier
    pub compound_id: CompoundId,

    /// CAS registry number
    pub cas_number: String,

    /// Compound name
    pub name: String,

    /// Molecular formula
    pub formula: String,

    /// Boiling point
    pub boiling_point: f64,

    /// Melting point
    pub melting_point: f64,

    /// Molecular weight
    pub molecular_weight: f64,

    /// Retention index
    pub retention_index: f64,

    /// Retention time from retention time locking, in minutes
    pub retention_time_rtl: f64,

    /// Spectra keyed by spectrum ID
    pub spectra: BTreeMap<SpectrumId, Spectrum>,
}

impl Compound {
    /// Build a compound from a `Compound` node
    ///
    /// Never fails: every field has a default, including the identifier.
    pub fn from_node<N: TreeNode>(library_id: LibraryId, node: &N) -> Self {
        Self {
            library_id,
            compound_id: node.get_or("CompoundID", 0),
            cas_number: node.get_or("CASNumber", String::new()),
            name: node.get_or("CompoundName", String::new()),
            formula: node.get_or("Formula", String::new()),
            boiling_point: node.get_or("BoilingPoint", 0.0),
            melting_point: node.get_or("MeltingPoint", 0.0),
            molecular_weight: node.get_or("MolecularWeight", 0.0),
            retention_index: node.get_or("RetentionIndex", 0.0),
            retention_time_rtl: node.get_or("RetentionTimeRTL", 0.0),
            spectra: BTreeMap::new(),
        }
    }

    /// The spectrum with the smallest ID, if any
    pub fn first_spectrum(&self) -> Option<&Spectrum> {
        self.spectra.values().next()
    }
}

/// One mass spectrum: paired m/z and abundance arrays
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Spectrum {
    /// Owning library, as recorded on the spectrum itself
    pub library_id: LibraryId,

    /// Compound this spectrum belongs to
    pub compound_id: CompoundId,

    /// Spectrum identifier
    pub spectrum_id: SpectrumId,

    /// m/z of the most intense ion
    pub base_peak_mz: f64,

    /// m/z values, positionally paired with `abundance_values`
    pub mz_values: Vec<f64>,

    /// Abundance values, positionally paired with `mz_values`
    pub abundance_values: Vec<f64>,
}

impl Spectrum {
    /// Build a spectrum from a `Spectrum` node, decoding both binary arrays
    pub fn from_node<N: TreeNode>(node: &N) -> Result<Self, CodecError> {
        Ok(Self {
            library_id: node.get_or("LibraryID", 0),
            compound_id: node.get_or("CompoundID", 0),
            spectrum_id: node.get_or("SpectrumID", 0),
            base_peak_mz: node.get_or("BasePeakMZ", 0.0),
            mz_values: SpectralCodec::decode_field("MzValues", node.field("MzValues"))?,
            abundance_values: SpectralCodec::decode_field(
                "AbundanceValues",
                node.field("AbundanceValues"),
            )?,
        })
    }

    /// Number of usable (m/z, abundance) pairs
    pub fn peak_count(&self) -> usize {
        self.mz_values.len().min(self.abundance_values.len())
    }

    /// Iterate (m/z, abundance) pairs, clipped to the shorter array
    pub fn peaks(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.mz_values
            .iter()
            .copied()
            .zip(self.abundance_values.iter().copied())
    }
}
