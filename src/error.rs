// Error types module

use thiserror::Error;

/// Centralized error type for the URL builder
///
/// Building a URL never fails once a [`crate::UrlBuilder`] exists; errors
/// surface while credentials are attached or configuration is loaded.
#[derive(Error, Debug)]
pub enum Error {
    /// Signing key or salt is not a valid hex string
    #[error("Invalid hex in signing {field}: {source}")]
    InvalidHex {
        field: &'static str,
        #[source]
        source: hex::FromHexError,
    },

    /// Configuration errors (invalid YAML, missing env vars, unknown preset, etc.)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Configuration file could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn invalid_hex(field: &'static str, source: hex::FromHexError) -> Self {
        Error::InvalidHex { field, source }
    }

    pub(crate) fn config(message: impl Into<String>) -> Self {
        Error::Config(message.into())
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
