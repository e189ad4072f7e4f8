//! Linear entities and GraphQL envelopes.

use serde::{Deserialize, Serialize};

/// GraphQL request body.
#[derive(Debug, Serialize)]
pub(crate) struct GraphQlRequest<'a, V: Serialize> {
    pub(crate) query: &'a str,
    pub(crate) variables: V,
}

/// GraphQL response wrapper.
#[derive(Debug, Deserialize)]
pub(crate) struct GraphQlResponse<T> {
    pub(crate) data: Option<T>,
    pub(crate) errors: Option<Vec<GraphQlError>>,
}

/// A single GraphQL error.
#[derive(Debug, Deserialize)]
pub(crate) struct GraphQlError {
    pub(crate) message: String,
}

/// A label from the workspace-wide label set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    /// Linear label id.
    pub id: String,
    /// Display name.
    pub name: String,
}

/// Cursor-based pagination state.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    /// Whether another page follows this one.
    #[serde(default)]
    pub has_next_page: bool,
    /// Cursor to pass as `after` for the next page.
    pub end_cursor: Option<String>,
}

/// A list of nodes as returned by Linear connections.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", bound(deserialize = "T: Deserialize<'de>"))]
pub struct Connection<T> {
    /// Items on this page.
    #[serde(default)]
    pub nodes: Vec<T>,
    /// Pagination state, absent for unpaged sub-connections.
    #[serde(default)]
    pub page_info: PageInfo,
}

impl<T> Default for Connection<T> {
    fn default() -> Self {
        Self {
            nodes: Vec::new(),
            page_info: PageInfo::default(),
        }
    }
}

/// An issue that exists in the tracker.
#[derive(Debug, Clone, Deserialize)]
pub struct ValidatedIssue {
    /// Internal Linear id (a UUID), used by mutations.
    pub id: String,
    /// Issue title.
    pub title: String,
    /// Labels currently attached to the issue.
    #[serde(default)]
    pub labels: Connection<Label>,
}

impl ValidatedIssue {
    /// Returns true if the issue already carries a label with this name,
    /// compared case-insensitively.
    #[must_use]
    pub fn has_label(&self, name: &str) -> bool {
        let name = name.to_lowercase();
        self.labels
            .nodes
            .iter()
            .any(|label| label.name.to_lowercase() == name)
    }
}

/// Payload of `issueAddLabel`.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct SuccessPayload {
    #[serde(default)]
    pub(crate) success: bool,
}
