//! Runner configuration.

use crate::config::LabelMap;
use std::time::Duration;
use url::Url;

/// Configuration for a labeling run.
///
/// Built once at startup from CI-provided inputs. Empty strings are treated
/// as unset, since CI systems export missing inputs as `""`.
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// Linear API key, sent verbatim as the `Authorization` header.
    api_key: Option<String>,
    /// Label token selecting which label to apply (e.g. `codex`).
    label_token: Option<String>,
    /// Source branch of the pull request.
    branch_name: Option<String>,
    /// Pull request title containing the issue identifier.
    pr_title: Option<String>,
    /// Linear GraphQL endpoint.
    api_url: Url,
    /// Token to display label mappings.
    label_map: LabelMap,
    /// Whether to stop before applying the label.
    dry_run: bool,
    /// Wall-clock limit for the whole run.
    timeout: Option<Duration>,
}

impl RunnerConfig {
    /// Creates a new configuration for a run.
    pub fn new(
        api_key: Option<String>,
        label_token: Option<String>,
        branch_name: Option<String>,
        pr_title: Option<String>,
        api_url: Url,
    ) -> Self {
        Self {
            api_key: non_empty(api_key),
            label_token: non_empty(label_token),
            branch_name: non_empty(branch_name),
            pr_title: non_empty(pr_title),
            api_url,
            label_map: LabelMap::default(),
            dry_run: false,
            timeout: None,
        }
    }

    /// Sets a custom label map.
    #[must_use]
    pub fn with_label_map(mut self, label_map: LabelMap) -> Self {
        self.label_map = label_map;
        self
    }

    /// Enables or disables dry-run mode.
    #[must_use]
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Sets a wall-clock limit for the run.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Returns the configured API key.
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    /// Returns the configured label token.
    pub fn label_token(&self) -> Option<&str> {
        self.label_token.as_deref()
    }

    /// Returns the pull request's source branch.
    pub fn branch_name(&self) -> Option<&str> {
        self.branch_name.as_deref()
    }

    /// Returns the pull request title.
    pub fn pr_title(&self) -> Option<&str> {
        self.pr_title.as_deref()
    }

    /// Returns the Linear GraphQL endpoint.
    pub fn api_url(&self) -> &Url {
        &self.api_url
    }

    /// Returns the label map.
    pub fn label_map(&self) -> &LabelMap {
        &self.label_map
    }

    /// Returns whether dry-run mode is enabled.
    pub fn dry_run(&self) -> bool {
        self.dry_run
    }

    /// Returns the run timeout, if any.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.trim().is_empty())
}
