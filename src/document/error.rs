/// Errors that can occur while reading or rendering a hierarchical document
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    /// Error parsing XML
    #[error("XML parsing error: {0}")]
    XmlError(#[from] quick_xml::Error),

    /// I/O error during file or stream operations
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// UTF-8 encoding error in a tag name or text content
    #[error("UTF-8 encoding error: {0}")]
    Utf8Error(#[from] std::str::Utf8Error),

    /// UTF-8 encoding error in rendered output
    #[error("UTF-8 encoding error: {0}")]
    FromUtf8Error(#[from] std::string::FromUtf8Error),

    /// Document is well-formed XML but not a single element tree
    #[error("Invalid document structure: {0}")]
    InvalidStructure(String),
}
