use miette::Diagnostic;
use thiserror::Error;

/// Unified error type for all metadata operations.
#[derive(Debug, Error, Diagnostic)]
pub enum MetadataError {
    /// Reading or writing the underlying stream failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The document is not well-formed `maven-metadata.xml`.
    #[error("Malformed metadata: {message}")]
    #[diagnostic(help("The repository served a document that is not valid maven-metadata.xml"))]
    Xml { message: String },

    /// An operation was re-targeted with an operand of the wrong kind.
    #[error("Operand is not correct: expected {expected}, but got {actual}")]
    OperandMismatch {
        expected: &'static str,
        actual: &'static str,
    },

    /// A version string that cannot take part in version ordering.
    #[error("Invalid version: {message}")]
    InvalidVersion { message: String },

    /// Two documents describe different coordinates and cannot be merged.
    #[error("Incompatible metadata: {message}")]
    #[diagnostic(help("Only metadata of the same groupId/artifactId/version can be merged"))]
    Incompatible { message: String },

    /// A timestamp that is not in `yyyyMMddHHmmss` form.
    #[error("Invalid timestamp: {message}")]
    Timestamp { message: String },

    /// Invalid or unreadable configuration file.
    #[error("Configuration error: {message}")]
    #[diagnostic(help("Check ~/.mvnmeta/config.toml for syntax errors"))]
    Config { message: String },

    /// Catch-all for miscellaneous errors.
    #[error("{message}")]
    Generic { message: String },
}

/// Convenience alias for results carrying a [`MetadataError`].
pub type MetadataResult<T> = Result<T, MetadataError>;
