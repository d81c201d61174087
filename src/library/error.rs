use super::{CompoundId, SpectrumId};
use crate::document::DocumentError;

/// Errors that abort building a library
///
/// A library is all-or-nothing: none of these leave a partial result behind.
/// Spectra whose arrays fail to decode are not errors; they are skipped and
/// reported in [`super::BuildStats`].
#[derive(Debug, thiserror::Error)]
pub enum LibraryError {
    /// Source document is malformed or unreadable
    #[error("Failed to read library document: {0}")]
    DocumentError(#[from] DocumentError),

    /// A required section of the document is missing
    #[error("Missing required section: <{0}>")]
    MissingSection(String),

    /// A required field is missing
    #[error("Missing required field: {0}")]
    MissingField(String),

    /// A required field holds a value of the wrong type
    #[error("Invalid value {value:?} for required field {path}")]
    InvalidField {
        /// Dotted path of the field
        path: String,
        /// Raw text of the field
        value: String,
    },

    /// A spectrum references a compound that has not been defined yet
    #[error("Compound ID not found for Spectrum: {compound_id} (spectrum {spectrum_id})")]
    UnknownCompound {
        /// Compound ID referenced by the spectrum
        compound_id: CompoundId,
        /// ID of the offending spectrum
        spectrum_id: SpectrumId,
    },
}

impl LibraryError {
    /// Whether the error stems from a missing or invalid required root field
    pub fn is_structure_error(&self) -> bool {
        matches!(
            self,
            LibraryError::MissingSection(_)
                | LibraryError::MissingField(_)
                | LibraryError::InvalidField { .. }
        )
    }
}
