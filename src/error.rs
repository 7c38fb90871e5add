//! Error types for rs-feedposts.
//!
//! Field-level extraction never fails; missing structure becomes `None`.
//! The variants here cover misconfiguration and output failures only.

/// Error type for extraction and export operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A selector configured in `Options` could not be parsed.
    #[error("invalid selector: {0}")]
    InvalidSelector(String),

    /// CSV serialization failed.
    #[error("CSV serialization failed: {0}")]
    Csv(#[from] csv::Error),

    /// Writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, Error>;
