//! Linear GraphQL API access.
//!
//! This module provides a thin GraphQL client plus the three operations a
//! labeling run needs: validating an issue, resolving a label id from the
//! workspace label set, and attaching that label to the issue.

mod error;
mod issues;
mod labels;
mod types;

pub use error::LinearError;
pub use issues::{add_label_to_issue, validate_issue};
pub use labels::{fetch_all_labels, find_label_id, label_pages, resolve_label_id, LABELS_PAGE_SIZE};
pub use types::{Connection, Label, PageInfo, ValidatedIssue};

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;
use types::{GraphQlRequest, GraphQlResponse};
use url::Url;

/// Default Linear GraphQL endpoint.
pub const LINEAR_API_URL: &str = "https://api.linear.app/graphql";

/// Linear GraphQL client.
#[derive(Debug, Clone)]
pub struct LinearClient {
    client: reqwest::Client,
    api_url: Url,
}

impl LinearClient {
    /// Creates a client that authenticates with a personal API key.
    ///
    /// The key is sent verbatim in the `Authorization` header, which is what
    /// Linear expects for `lin_api_*` keys.
    ///
    /// # Errors
    ///
    /// Returns [`LinearError`] if the key is not a valid header value or the
    /// HTTP client cannot be built.
    pub fn new(api_key: &str, api_url: Url) -> Result<Self, LinearError> {
        let mut headers = HeaderMap::new();
        let mut auth = HeaderValue::from_str(api_key)?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        Ok(Self { client, api_url })
    }

    /// Returns the endpoint this client posts to.
    #[must_use]
    pub fn api_url(&self) -> &Url {
        &self.api_url
    }

    /// Posts a GraphQL document and returns the decoded envelope.
    ///
    /// Non-success HTTP statuses are errors carrying the raw body. GraphQL
    /// level errors are left in the envelope for the caller to inspect.
    async fn post<V: Serialize, R: DeserializeOwned>(
        &self,
        query: &str,
        variables: V,
    ) -> Result<GraphQlResponse<R>, LinearError> {
        let request = GraphQlRequest { query, variables };

        let response = self
            .client
            .post(self.api_url.clone())
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(LinearError::Status { status, body });
        }

        debug!(%status, bytes = body.len(), "Received Linear API response");
        serde_json::from_str(&body).map_err(|source| LinearError::Decode { source, body })
    }

    /// Executes a GraphQL query or mutation and returns its data.
    ///
    /// # Errors
    ///
    /// Returns [`LinearError`] on transport failures, GraphQL errors, or a
    /// response without data.
    async fn execute<V: Serialize, R: DeserializeOwned>(
        &self,
        query: &str,
        variables: V,
    ) -> Result<R, LinearError> {
        let response: GraphQlResponse<R> = self.post(query, variables).await?;

        if let Some(errors) = response.errors.filter(|errors| !errors.is_empty()) {
            return Err(LinearError::GraphQl(
                errors.into_iter().map(|e| e.message).collect(),
            ));
        }

        response.data.ok_or(LinearError::MissingData)
    }
}
