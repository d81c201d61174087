/// Errors that can occur while writing a tabular export
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// Error serializing a CSV record
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    /// I/O error while flushing output
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}
