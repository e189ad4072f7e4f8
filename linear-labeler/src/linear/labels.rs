//! Workspace label lookup.
//!
//! Labels are fetched page by page with cursor pagination, accumulated into
//! one list, then searched by name.

use super::types::{Connection, Label};
use super::{LinearClient, LinearError};
use futures::stream::{self, Stream, TryStreamExt};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, info_span, warn, Instrument};

/// Number of labels requested per page.
pub const LABELS_PAGE_SIZE: u32 = 50;

const ISSUE_LABELS_QUERY: &str = r"
    query IssueLabels($first: Int!, $after: String) {
        issueLabels(first: $first, after: $after) {
            nodes {
                id
                name
            }
            pageInfo {
                hasNextPage
                endCursor
            }
        }
    }
";

/// Pagination progress between page fetches.
enum Cursor {
    Start,
    After(String),
    Done,
}

/// Streams pages of workspace labels, one request per page.
///
/// The first request is sent without a cursor. Each following request
/// passes the previous page's `endCursor` as `after`, until the tracker
/// reports that no further pages exist.
pub fn label_pages(
    client: &LinearClient,
) -> impl Stream<Item = Result<Vec<Label>, LinearError>> + '_ {
    stream::try_unfold(Cursor::Start, move |cursor| async move {
        let after = match cursor {
            Cursor::Done => return Ok(None),
            Cursor::Start => None,
            Cursor::After(after) => Some(after),
        };
        fetch_label_page(client, after.as_deref()).await.map(Some)
    })
}

/// Fetches a single page and works out where the next one starts.
async fn fetch_label_page(
    client: &LinearClient,
    after: Option<&str>,
) -> Result<(Vec<Label>, Cursor), LinearError> {
    #[derive(Serialize)]
    struct Variables<'a> {
        first: u32,
        after: Option<&'a str>,
    }

    #[derive(Deserialize)]
    #[serde(rename_all = "camelCase")]
    struct Response {
        issue_labels: Connection<Label>,
    }

    debug!(after = ?after, "Fetching label page");
    let response: Response = client
        .execute(
            ISSUE_LABELS_QUERY,
            Variables {
                first: LABELS_PAGE_SIZE,
                after,
            },
        )
        .await?;

    let page = response.issue_labels;
    let next = match (page.page_info.has_next_page, page.page_info.end_cursor) {
        (true, Some(end_cursor)) => Cursor::After(end_cursor),
        (true, None) => {
            // Paging again without a cursor would restart from the first page.
            warn!("Label page reported more results without an end cursor, stopping");
            Cursor::Done
        }
        (false, _) => Cursor::Done,
    };
    Ok((page.nodes, next))
}

/// Fetches every label in the workspace, in the order the tracker returns
/// them.
///
/// # Errors
///
/// Returns [`LinearError`] if any page request fails.
pub async fn fetch_all_labels(client: &LinearClient) -> Result<Vec<Label>, LinearError> {
    let span = info_span!("fetch_labels");

    async {
        let labels: Vec<Label> = label_pages(client)
            .try_fold(Vec::new(), |mut labels, page| async move {
                labels.extend(page);
                Ok(labels)
            })
            .await?;

        info!(count = labels.len(), "Fetched workspace labels");
        Ok(labels)
    }
    .instrument(span)
    .await
}

/// Finds the id of the first label whose name equals `name`, ignoring case.
#[must_use]
pub fn find_label_id<'a>(labels: &'a [Label], name: &str) -> Option<&'a str> {
    let name = name.to_lowercase();
    labels
        .iter()
        .find(|label| label.name.to_lowercase() == name)
        .map(|label| label.id.as_str())
}

/// Fetches all workspace labels and returns the id of the one named `name`.
///
/// # Errors
///
/// Returns [`LinearError`] if any page request fails.
pub async fn resolve_label_id(
    client: &LinearClient,
    name: &str,
) -> Result<Option<String>, LinearError> {
    let labels = fetch_all_labels(client).await?;
    let id = find_label_id(&labels, name).map(str::to_owned);
    debug!(label = %name, found = id.is_some(), "Searched workspace labels");
    Ok(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn label(id: &str, name: &str) -> Label {
        Label {
            id: id.to_string(),
            name: name.to_string(),
        }
    }

    #[test]
    fn find_label_id_ignores_case() {
        let labels = vec![label("lbl-1", "Bug"), label("lbl-9", "executed by codex")];
        assert_eq!(find_label_id(&labels, "Executed by Codex"), Some("lbl-9"));
    }

    #[test]
    fn find_label_id_requires_exact_name() {
        let labels = vec![label("lbl-1", "Executed by Codex (old)")];
        assert_eq!(find_label_id(&labels, "Executed by Codex"), None);
        assert_eq!(find_label_id(&[], "Executed by Codex"), None);
    }

    #[test]
    fn find_label_id_first_match_wins() {
        let labels = vec![
            label("lbl-1", "EXECUTED BY CODEX"),
            label("lbl-2", "Executed by Codex"),
        ];
        assert_eq!(find_label_id(&labels, "Executed by Codex"), Some("lbl-1"));
    }
}
