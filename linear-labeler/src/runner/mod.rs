//! Orchestrates a labeling run.
//!
//! A run walks five steps in order, never going back: check the branch,
//! extract the issue identifier, validate the issue, resolve the label, and
//! apply it. The first failing step ends the run.

mod config;
mod error;
mod outcome;

pub use config::RunnerConfig;
pub use error::RunnerError;
pub use outcome::RunOutcome;

use crate::branch::is_automation_branch;
use crate::config::ConfigError;
use crate::identifier::extract_issue_identifier;
use crate::linear::{add_label_to_issue, resolve_label_id, validate_issue, LinearClient};
use tracing::{info, info_span, Instrument};

/// Runs the label workflow for one pull request.
pub struct Runner {
    config: RunnerConfig,
}

impl Runner {
    /// Builds a runner from the provided configuration.
    pub fn new(config: RunnerConfig) -> Self {
        Self { config }
    }

    /// Returns the run configuration.
    pub fn config(&self) -> &RunnerConfig {
        &self.config
    }

    /// Executes the full orchestration flow.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError`] for missing configuration, an unparsable title,
    /// an unknown issue or label, a rejected mutation, transport failures, and
    /// timeouts.
    pub async fn run(&self) -> Result<RunOutcome, RunnerError> {
        let span = info_span!("run", dry_run = self.config.dry_run());

        match self.config.timeout() {
            Some(limit) => tokio::time::timeout(limit, self.run_steps())
                .instrument(span)
                .await
                .map_err(|_| RunnerError::Timeout { limit })?,
            None => self.run_steps().instrument(span).await,
        }
    }

    async fn run_steps(&self) -> Result<RunOutcome, RunnerError> {
        let config = &self.config;
        info!(
            branch = config.branch_name().unwrap_or_default(),
            pr_title = config.pr_title().unwrap_or_default(),
            label_token = config.label_token().unwrap_or_default(),
            "Starting label run"
        );

        // Check branch
        if !is_automation_branch(config.branch_name()) {
            info!("Branch name does not start with 'codex/' or 'cursor/', skipping label addition");
            return Ok(RunOutcome::Skipped {
                branch: config.branch_name().map(str::to_owned),
            });
        }

        // Extract identifier
        let title = config.pr_title().unwrap_or_default();
        let api_key = config.api_key().ok_or(ConfigError::MissingApiKey)?;
        let identifier =
            extract_issue_identifier(title).ok_or_else(|| RunnerError::MissingIdentifier {
                title: title.to_string(),
            })?;
        info!(identifier = %identifier, "Extracted issue identifier");

        // Validate issue
        let client = LinearClient::new(api_key, config.api_url().clone())?;
        let issue = validate_issue(&client, &identifier)
            .await?
            .ok_or_else(|| RunnerError::IssueNotFound {
                identifier: identifier.clone(),
            })?;

        // Resolve label
        let label = config
            .label_map()
            .resolve(config.label_token())?
            .to_string();
        if issue.has_label(&label) {
            info!(label = %label, identifier = %identifier, "Label is already on the issue");
            return Ok(RunOutcome::AlreadyLabeled { identifier, label });
        }

        let label_id = resolve_label_id(&client, &label)
            .await?
            .ok_or_else(|| RunnerError::LabelNotFound {
                label: label.clone(),
            })?;
        info!(label_id = %label_id, issue_id = %issue.id, "Resolved label and issue ids");

        if config.dry_run() {
            info!(label = %label, identifier = %identifier, "Dry run, not applying label");
            return Ok(RunOutcome::DryRun {
                identifier,
                label,
                issue_id: issue.id,
                label_id,
            });
        }

        // Apply label
        if !add_label_to_issue(&client, &issue.id, &label_id).await? {
            return Err(RunnerError::LabelNotApplied { identifier, label });
        }

        info!(label = %label, identifier = %identifier, "Label added to issue");
        Ok(RunOutcome::Labeled { identifier, label })
    }
}
