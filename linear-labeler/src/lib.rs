#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

pub mod branch;
pub mod config;
pub mod identifier;
pub mod linear;
pub mod runner;

pub use branch::{is_automation_branch, AUTOMATION_BRANCH_PREFIXES};
pub use config::{
    load_label_map, resolve_api_url, ConfigError, LabelMap, CODEX_LABEL, CODEX_TOKEN,
};
pub use identifier::{extract_issue_identifier, IssueIdentifier};
pub use linear::{
    add_label_to_issue, fetch_all_labels, find_label_id, label_pages, resolve_label_id,
    validate_issue, Label, LinearClient, LinearError, PageInfo, ValidatedIssue, LABELS_PAGE_SIZE,
    LINEAR_API_URL,
};
pub use runner::{RunOutcome, Runner, RunnerConfig, RunnerError};
