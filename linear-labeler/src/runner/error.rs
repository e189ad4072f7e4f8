//! Runner error types.

use crate::identifier::IssueIdentifier;

/// Errors that end a labeling run with a failure exit status.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// Missing or unsupported configuration.
    #[error(transparent)]
    Config(#[from] crate::config::ConfigError),

    /// The pull request title holds no issue identifier.
    #[error("No Linear issue identifier found in PR title {title:?}")]
    MissingIdentifier { title: String },

    /// The tracker does not know the issue.
    #[error("Invalid Linear issue ID: {identifier}")]
    IssueNotFound { identifier: IssueIdentifier },

    /// No workspace label has the requested name.
    #[error("Label '{label}' not found")]
    LabelNotFound { label: String },

    /// The tracker accepted the mutation but reported failure.
    #[error("Failed to add label '{label}' to issue {identifier}")]
    LabelNotApplied {
        identifier: IssueIdentifier,
        label: String,
    },

    /// Transport or GraphQL failure.
    #[error(transparent)]
    Linear(#[from] crate::linear::LinearError),

    /// The run exceeded its wall-clock limit.
    #[error("Run timed out after {limit:?}")]
    Timeout { limit: std::time::Duration },
}
