//! Branch name gating.
//!
//! Only pull requests opened from branches created by coding agents are
//! labeled. Every other branch is skipped without touching the tracker.

/// Branch prefixes that opt a pull request into labeling.
pub const AUTOMATION_BRANCH_PREFIXES: [&str; 2] = ["codex/", "cursor/"];

/// Returns true if the branch was created by a coding agent.
///
/// A missing branch name is never eligible.
#[must_use]
pub fn is_automation_branch(branch_name: Option<&str>) -> bool {
    branch_name.is_some_and(|name| {
        AUTOMATION_BRANCH_PREFIXES
            .iter()
            .any(|prefix| name.starts_with(prefix))
    })
}
