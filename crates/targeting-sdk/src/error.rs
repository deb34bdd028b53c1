//! SDK error types

use thiserror::Error;

/// SDK error type
///
/// Every variant surfaces at engine build time or on audience lookup;
/// checking a loaded audience never fails.
#[derive(Error, Debug)]
pub enum SdkError {
    /// Malformed JSON audience definition
    #[error("Invalid audience definition: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Malformed YAML audience definition
    #[error("Invalid audience definition: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// I/O error reading a definition file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Definition file with an extension the loader does not understand
    #[error("Unsupported definition format: {0}")]
    UnsupportedFormat(String),

    /// Two audiences registered under the same id
    #[error("Duplicate audience id: {0}")]
    DuplicateAudience(String),

    /// Check requested for an id no audience was registered under
    #[error("Unknown audience id: {0}")]
    UnknownAudience(String),

    /// Engine built with no audiences registered
    #[error("No audiences registered")]
    NoAudiences,
}

/// Result type for SDK operations
pub type Result<T> = std::result::Result<T, SdkError>;
