use crate::document::DocumentError;
use crate::library::CompoundId;

/// Errors that can occur while synthesizing a quantitation method
#[derive(Debug, thiserror::Error)]
pub enum MethodError {
    /// A compound has no spectrum to take the quantifier m/z from
    #[error("Compound {compound_id} has no spectra and cannot be targeted")]
    EmptySpectra {
        /// ID of the offending compound
        compound_id: CompoundId,
    },

    /// Rendering the method document failed
    #[error("Failed to render method document: {0}")]
    DocumentError(#[from] DocumentError),
}
