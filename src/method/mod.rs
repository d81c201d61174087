//! # Quantitation Method Synthesis
//!
//! Turns a [`crate::library::Library`] into a quantitation method: a
//! `QuantitationDataSet` document with one `TargetCompound` per library
//! compound.
//!
//! Almost everything in a target is a fixed template ([`TARGET_DEFAULTS`]).
//! Per compound, only the ID, the name, the retention time and the m/z of
//! the base peak of the first spectrum are filled in. Each target also
//! embeds the integrator settings ([`INTEGRATION_PARAMETERS`]) as a complete
//! XML document stored as escaped text.
//!
//! ```rust,no_run
//! use mslibquant::library::load_library_file;
//! use mslibquant::method::QuantitationDataSet;
//!
//! let (library, _stats) = load_library_file("NIST08.xml")?;
//! let method = QuantitationDataSet::synthesize(&library)?;
//! std::fs::write("NIST08.xml.xml", method.render()?)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod dataset;
mod error;
mod parameters;
mod target;

#[cfg(test)]
mod tests;

pub use dataset::{
    DataSetAttributes, EmptySpectraPolicy, QuantitationDataSet, SynthesisOptions,
    DATASET_ATTRIBUTES,
};
pub use error::MethodError;
pub use parameters::{
    Limits, NumericFormat, Parameter, ParameterSet, INCLUSIVE, INTEGRATION_PARAMETERS,
    UNSPECIFIED_NUMBER,
};
pub use target::{TargetCompound, TargetDefaults, TARGET_DEFAULTS};
