//! Extraction of Linear issue identifiers from pull request titles.

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

/// Team key, a hyphen, then the issue number (e.g. `ABC-123`).
static IDENTIFIER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Z]+-\d+").expect("identifier pattern is valid"));

/// A human-readable Linear issue identifier such as `PROJ-42`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IssueIdentifier(String);

impl IssueIdentifier {
    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for IssueIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Extracts the first issue identifier found in a pull request title.
///
/// Scans left to right for one or more uppercase ASCII letters, a hyphen,
/// and one or more digits. Only the first occurrence is returned; the match
/// is not normalized.
///
/// # Examples
///
/// ```
/// use linear_labeler::extract_issue_identifier;
///
/// let id = extract_issue_identifier("Fix bug ABC-123 urgently").unwrap();
/// assert_eq!(id.as_str(), "ABC-123");
/// assert!(extract_issue_identifier("No id here").is_none());
/// ```
#[must_use]
pub fn extract_issue_identifier(title: &str) -> Option<IssueIdentifier> {
    IDENTIFIER_PATTERN
        .find(title)
        .map(|found| IssueIdentifier(found.as_str().to_string()))
}
