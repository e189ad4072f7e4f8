//! Successful run outcomes.

use crate::identifier::IssueIdentifier;

/// How a run ended when nothing went wrong.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// The branch is not an automation branch; nothing was done.
    Skipped {
        /// Branch name, if one was provided.
        branch: Option<String>,
    },

    /// The issue already carries the label.
    AlreadyLabeled {
        /// Issue identifier.
        identifier: IssueIdentifier,
        /// Label display name.
        label: String,
    },

    /// Everything was resolved but the mutation was not sent.
    DryRun {
        /// Issue identifier.
        identifier: IssueIdentifier,
        /// Label display name.
        label: String,
        /// Internal issue id.
        issue_id: String,
        /// Label id.
        label_id: String,
    },

    /// The label was applied.
    Labeled {
        /// Issue identifier.
        identifier: IssueIdentifier,
        /// Label display name.
        label: String,
    },
}

impl RunOutcome {
    /// Returns true if the tracker was modified.
    #[must_use]
    pub fn applied(&self) -> bool {
        matches!(self, Self::Labeled { .. })
    }
}
