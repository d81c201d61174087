use log::{debug, info, warn};
use serde::Serialize;

use super::{Compound, CompoundId, Library, LibraryError, Spectrum, SpectrumId};
use crate::document::TreeNode;

/// Tag of the document root
pub const ROOT_TAG: &str = "LibraryDataSet";

/// Tag of the section holding library-level scalars
pub const LIBRARY_TAG: &str = "Library";

/// Tag of compound nodes
pub const COMPOUND_TAG: &str = "Compound";

/// Tag of spectrum nodes
pub const SPECTRUM_TAG: &str = "Spectrum";

/// A spectrum dropped because its binary arrays could not be decoded
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedSpectrum {
    /// Compound ID recorded on the spectrum
    pub compound_id: CompoundId,
    /// Spectrum ID recorded on the spectrum
    pub spectrum_id: SpectrumId,
    /// Decoder diagnostic
    pub reason: String,
}

/// Statistics gathered while building a library
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BuildStats {
    /// Compound nodes read
    pub compound_nodes: usize,
    /// Compound nodes that replaced an earlier compound with the same ID
    pub compounds_replaced: usize,
    /// Spectra attached to a compound
    pub spectra_attached: usize,
    /// Spectra dropped because of decode failures
    pub skipped_spectra: Vec<SkippedSpectrum>,
    /// Child nodes with a tag other than `Compound` or `Spectrum`
    pub ignored_nodes: usize,
}

/// Builds a [`Library`] from a `LibraryDataSet` document
///
/// Children are visited in document order. A `Spectrum` must come after the
/// `Compound` it references, otherwise the build fails with
/// [`LibraryError::UnknownCompound`].
#[derive(Debug, Default)]
pub struct LibraryBuilder {
    stats: BuildStats,
}

impl LibraryBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Statistics of the last build
    pub fn stats(&self) -> &BuildStats {
        &self.stats
    }

    /// Consume the builder, returning its statistics
    pub fn into_stats(self) -> BuildStats {
        self.stats
    }

    /// Build a library from the document root
    pub fn build<N: TreeNode>(&mut self, root: &N) -> Result<Library, LibraryError> {
        self.stats = BuildStats::default();

        if root.tag() != ROOT_TAG {
            return Err(LibraryError::MissingSection(ROOT_TAG.to_string()));
        }

        let mut library = read_library_section(root)?;
        debug!("Reading library {}", library.library_id);

        for node in root.children() {
            match node.tag() {
                COMPOUND_TAG => self.add_compound(&mut library, node),
                SPECTRUM_TAG => self.add_spectrum(&mut library, node)?,
                LIBRARY_TAG => {}
                other => {
                    debug!("Ignoring <{}> node", other);
                    self.stats.ignored_nodes += 1;
                }
            }
        }

        info!(
            "Library {}: {} compounds, {} spectra, {} spectra skipped",
            library.library_id,
            library.compounds.len(),
            self.stats.spectra_attached,
            self.stats.skipped_spectra.len()
        );

        Ok(library)
    }

    fn add_compound<N: TreeNode>(&mut self, library: &mut Library, node: &N) {
        let compound = Compound::from_node(library.library_id, node);
        self.stats.compound_nodes += 1;

        if let Some(previous) = library.compounds.insert(compound.compound_id, compound) {
            debug!("Compound {} redefined", previous.compound_id);
            self.stats.compounds_replaced += 1;
        }
    }

    fn add_spectrum<N: TreeNode>(
        &mut self,
        library: &mut Library,
        node: &N,
    ) -> Result<(), LibraryError> {
        let spectrum = match Spectrum::from_node(node) {
            Ok(spectrum) => spectrum,
            Err(e) => {
                let skipped = SkippedSpectrum {
                    compound_id: node.get_or("CompoundID", 0),
                    spectrum_id: node.get_or("SpectrumID", 0),
                    reason: e.to_string(),
                };
                warn!(
                    "Failed to decode spectrum {} for compound {}: {}",
                    skipped.spectrum_id, skipped.compound_id, skipped.reason
                );
                self.stats.skipped_spectra.push(skipped);
                return Ok(());
            }
        };

        let compound = library
            .compounds
            .get_mut(&spectrum.compound_id)
            .ok_or(LibraryError::UnknownCompound {
                compound_id: spectrum.compound_id,
                spectrum_id: spectrum.spectrum_id,
            })?;

        compound.spectra.insert(spectrum.spectrum_id, spectrum);
        self.stats.spectra_attached += 1;
        Ok(())
    }
}

fn read_library_section<N: TreeNode>(root: &N) -> Result<Library, LibraryError> {
    let section = root
        .child(LIBRARY_TAG)
        .ok_or_else(|| LibraryError::MissingSection(LIBRARY_TAG.to_string()))?;

    let library_id = section
        .get("LibraryID")
        .map_err(|invalid| LibraryError::InvalidField {
            path: format!("{}.{}", LIBRARY_TAG, invalid.path),
            value: invalid.value,
        })?
        .ok_or_else(|| LibraryError::MissingField(format!("{}.LibraryID", LIBRARY_TAG)))?;

    Ok(Library::new(library_id, section.get_or("AccurateMass", false)))
}
