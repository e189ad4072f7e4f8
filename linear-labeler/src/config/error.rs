//! Configuration error types.

use thiserror::Error;

/// Errors that can occur while resolving run configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No Linear API key was provided.
    #[error("Missing required input: LINEAR_API_KEY")]
    MissingApiKey,

    /// The configured label token has no display label mapping.
    #[error("Unsupported label token {token:?}; known tokens: {known}")]
    UnsupportedLabelToken { token: String, known: String },

    /// The GraphQL endpoint is not a valid URL.
    #[error("Invalid Linear API URL {url:?}: {source}")]
    InvalidApiUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// Failed to read a file.
    #[error("Failed to read file '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse TOML content.
    #[error("Failed to parse label map '{path}': {source}")]
    TomlError {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    /// Validation error in the label map.
    #[error("Validation error in '{path}': {message}")]
    ValidationError { path: String, message: String },
}
