//! # Tabular Exports
//!
//! Compact CSV views of a [`crate::library::Library`]:
//!
//! - a peak table with the m/z values of the most abundant peaks of each
//!   compound ([`write_peak_table`])
//! - a chemical-class score table ([`write_score_table`]) that rates each
//!   compound against the diagnostic fragment masses in [`CLASS_KERNELS`]
//!
//! With the `parallel` feature, compounds are scored on the rayon thread
//! pool. Row order does not change.

mod error;
mod score;
mod table;
mod top_n;

#[cfg(test)]
mod tests;

pub use error::ExportError;
pub use score::{
    score, score_library, write_score_table, ClassKernel, ClassScores, ABUNDANCE_SCALE,
    CLASS_KERNELS, TOLERANCE,
};
pub use table::{top_peaks, write_peak_table, DEFAULT_TOP_N};
pub use top_n::{select_top_n, SortOrder};
