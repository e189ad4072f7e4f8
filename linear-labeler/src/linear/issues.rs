//! Issue validation and labeling.

use super::types::{SuccessPayload, ValidatedIssue};
use super::{LinearClient, LinearError};
use crate::identifier::IssueIdentifier;
use serde::{Deserialize, Serialize};
use tracing::{info, info_span, warn, Instrument};

const ISSUE_QUERY: &str = r"
    query Issue($id: String!) {
        issue(id: $id) {
            id
            title
            labels {
                nodes {
                    id
                    name
                }
            }
        }
    }
";

const ISSUE_ADD_LABEL_MUTATION: &str = r"
    mutation IssueAddLabel($id: String!, $labelId: String!) {
        issueAddLabel(id: $id, labelId: $labelId) {
            success
        }
    }
";

/// Looks up an issue by its human-readable identifier.
///
/// # Returns
///
/// The issue, or `None` when the tracker does not know the identifier, answers
/// with GraphQL errors, or returns a body without issue data.
///
/// # Errors
///
/// Returns [`LinearError`] for transport failures and non-success HTTP
/// statuses.
pub async fn validate_issue(
    client: &LinearClient,
    identifier: &IssueIdentifier,
) -> Result<Option<ValidatedIssue>, LinearError> {
    #[derive(Serialize)]
    struct Variables<'a> {
        id: &'a str,
    }

    #[derive(Deserialize)]
    struct Response {
        issue: Option<ValidatedIssue>,
    }

    let span = info_span!("validate_issue", identifier = %identifier);

    async {
        let response = match client
            .post::<_, Response>(
                ISSUE_QUERY,
                Variables {
                    id: identifier.as_str(),
                },
            )
            .await
        {
            Ok(response) => response,
            Err(LinearError::Decode { source, .. }) => {
                warn!(error = %source, "Malformed issue response");
                return Ok(None);
            }
            Err(e) => return Err(e),
        };

        if let Some(errors) = &response.errors {
            for error in errors {
                warn!(message = %error.message, "Issue lookup reported an error");
            }
        }

        let issue = response.data.and_then(|data| data.issue);
        if let Some(issue) = &issue {
            info!(title = %issue.title, issue_id = %issue.id, "Valid issue found");
        }
        Ok(issue)
    }
    .instrument(span)
    .await
}

/// Attaches a label to an issue.
///
/// # Arguments
///
/// * `client` - Authenticated Linear client
/// * `issue_id` - Internal issue id returned by [`validate_issue`]
/// * `label_id` - Label id returned by label resolution
///
/// # Returns
///
/// The `success` flag reported by the tracker. A missing payload or flag is
/// reported as `false`.
///
/// # Errors
///
/// Returns [`LinearError`] on transport failures, non-success HTTP statuses,
/// or GraphQL errors.
pub async fn add_label_to_issue(
    client: &LinearClient,
    issue_id: &str,
    label_id: &str,
) -> Result<bool, LinearError> {
    #[derive(Serialize)]
    #[serde(rename_all = "camelCase")]
    struct Variables<'a> {
        id: &'a str,
        label_id: &'a str,
    }

    #[derive(Deserialize)]
    #[serde(rename_all = "camelCase")]
    struct Response {
        issue_add_label: Option<SuccessPayload>,
    }

    let span = info_span!("add_label", issue_id = %issue_id, label_id = %label_id);

    async {
        let response: Response = client
            .execute(ISSUE_ADD_LABEL_MUTATION, Variables { id: issue_id, label_id })
            .await?;
        let success = response.issue_add_label.is_some_and(|payload| payload.success);
        info!(success, "Label mutation finished");
        Ok(success)
    }
    .instrument(span)
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identifier::extract_issue_identifier;
    use serde_json::json;
    use url::Url;
    use wiremock::matchers::{body_partial_json, method};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client(server: &MockServer) -> LinearClient {
        LinearClient::new("lin_api_test", Url::parse(&server.uri()).unwrap()).unwrap()
    }

    fn identifier(value: &str) -> IssueIdentifier {
        extract_issue_identifier(value).unwrap()
    }

    #[tokio::test]
    async fn validate_issue_returns_internal_id() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(body_partial_json(json!({"variables": {"id": "PROJ-42"}})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": {"issue": {"id": "uuid-1", "title": "Add feature"}}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let issue = validate_issue(&client(&server), &identifier("PROJ-42"))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(issue.id, "uuid-1");
        assert_eq!(issue.title, "Add feature");
    }

    #[tokio::test]
    async fn validate_issue_not_found_is_none() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": null,
                "errors": [{"message": "Entity not found: Issue"}]
            })))
            .mount(&server)
            .await;

        let issue = validate_issue(&client(&server), &identifier("PROJ-404"))
            .await
            .unwrap();
        assert!(issue.is_none());
    }

    #[tokio::test]
    async fn validate_issue_malformed_body_is_none() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{\"data\": 5"))
            .mount(&server)
            .await;

        let issue = validate_issue(&client(&server), &identifier("PROJ-1"))
            .await
            .unwrap();
        assert!(issue.is_none());
    }

    #[tokio::test]
    async fn validate_issue_propagates_http_errors() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let result = validate_issue(&client(&server), &identifier("PROJ-1")).await;
        assert!(matches!(result, Err(LinearError::Status { .. })));
    }

    #[tokio::test]
    async fn add_label_sends_ids_as_variables() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(body_partial_json(json!({
                "variables": {"id": "uuid-1", "labelId": "lbl-9"}
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": {"issueAddLabel": {"success": true}}
            })))
            .expect(1)
            .mount(&server)
            .await;

        assert!(add_label_to_issue(&client(&server), "uuid-1", "lbl-9")
            .await
            .unwrap());
    }

    #[tokio::test]
    async fn add_label_reports_failure_flag() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": {"issueAddLabel": {"success": false}}
            })))
            .mount(&server)
            .await;

        assert!(!add_label_to_issue(&client(&server), "uuid-1", "lbl-9")
            .await
            .unwrap());
    }

    #[tokio::test]
    async fn add_label_missing_payload_is_failure() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": {"issueAddLabel": null}
            })))
            .mount(&server)
            .await;

        assert!(!add_label_to_issue(&client(&server), "uuid-1", "lbl-9")
            .await
            .unwrap());
    }
}
