//! Linear API error types.

use thiserror::Error;

/// Errors that can occur while talking to the Linear GraphQL API.
#[derive(Debug, Error)]
pub enum LinearError {
    /// The API key cannot be used as a header value.
    #[error("Invalid Linear API key: {0}")]
    InvalidApiKey(#[from] reqwest::header::InvalidHeaderValue),

    /// Connection or protocol failure.
    #[error("Network error talking to Linear: {0}")]
    Transport(#[from] reqwest::Error),

    /// The API answered with a non-success HTTP status.
    #[error("Linear API returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        /// Raw response body, kept for diagnostics.
        body: String,
    },

    /// The response body was not the expected JSON shape.
    #[error("Failed to decode Linear API response: {source}; body: {body}")]
    Decode {
        #[source]
        source: serde_json::Error,
        body: String,
    },

    /// The API reported GraphQL errors.
    #[error("GraphQL errors: {}", .0.join(", "))]
    GraphQl(Vec<String>),

    /// The response carried neither data nor errors.
    #[error("No data in GraphQL response")]
    MissingData,
}
