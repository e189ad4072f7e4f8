//! Mapping from label tokens to Linear display label names.

use crate::config::ConfigError;
use serde::Deserialize;
use std::collections::BTreeMap;

/// Token that selects the built-in Codex label.
pub const CODEX_TOKEN: &str = "codex";

/// Display name of the built-in Codex label.
pub const CODEX_LABEL: &str = "Executed by Codex";

/// Maps configured label tokens (e.g. `codex`) to the display name of the
/// Linear label that should be applied.
///
/// The `codex` mapping is always present. Further mappings can only be added
/// explicitly through a label map file; unknown tokens are rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelMap {
    labels: BTreeMap<String, String>,
}

/// On-disk shape of a label map file.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct LabelMapFile {
    /// Token to display name mappings.
    #[serde(default)]
    pub(crate) labels: BTreeMap<String, String>,
}

impl Default for LabelMap {
    fn default() -> Self {
        let mut labels = BTreeMap::new();
        labels.insert(CODEX_TOKEN.to_string(), CODEX_LABEL.to_string());
        Self { labels }
    }
}

impl LabelMap {
    /// Adds or replaces a mapping.
    #[must_use]
    pub fn with_label(mut self, token: impl Into<String>, label: impl Into<String>) -> Self {
        self.labels.insert(token.into(), label.into());
        self
    }

    /// Resolves a token to its display label name.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnsupportedLabelToken`] when the token is
    /// missing or has no mapping.
    pub fn resolve(&self, token: Option<&str>) -> Result<&str, ConfigError> {
        token
            .and_then(|token| self.labels.get(token))
            .map(String::as_str)
            .ok_or_else(|| ConfigError::UnsupportedLabelToken {
                token: token.unwrap_or_default().to_string(),
                known: self.known_tokens(),
            })
    }

    /// Returns the configured tokens as a comma separated list.
    #[must_use]
    pub fn known_tokens(&self) -> String {
        self.labels.keys().cloned().collect::<Vec<_>>().join(", ")
    }

    pub(crate) fn extend_from_file(
        mut self,
        file: LabelMapFile,
        path: &str,
    ) -> Result<Self, ConfigError> {
        for (token, label) in file.labels {
            if token.trim().is_empty() || label.trim().is_empty() {
                return Err(ConfigError::ValidationError {
                    path: path.to_string(),
                    message: format!("label token {token:?} must map to a non-empty name"),
                });
            }
            self.labels.insert(token, label);
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codex_token_resolves_to_builtin_label() {
        let map = LabelMap::default();
        assert_eq!(map.resolve(Some("codex")).unwrap(), "Executed by Codex");
    }

    #[test]
    fn unknown_token_is_rejected() {
        let map = LabelMap::default();
        let error = map.resolve(Some("copilot")).unwrap_err();
        match error {
            ConfigError::UnsupportedLabelToken { token, known } => {
                assert_eq!(token, "copilot");
                assert_eq!(known, "codex");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn missing_token_is_rejected() {
        let map = LabelMap::default();
        assert!(matches!(
            map.resolve(None),
            Err(ConfigError::UnsupportedLabelToken { .. })
        ));
    }

    #[test]
    fn tokens_are_matched_exactly() {
        let map = LabelMap::default();
        assert!(map.resolve(Some("Codex")).is_err());
    }

    #[test]
    fn with_label_adds_mapping() {
        let map = LabelMap::default().with_label("cursor", "Executed by Cursor");
        assert_eq!(map.resolve(Some("cursor")).unwrap(), "Executed by Cursor");
        assert_eq!(map.known_tokens(), "codex, cursor");
    }

    #[test]
    fn extend_rejects_empty_names() {
        let mut labels = BTreeMap::new();
        labels.insert("cursor".to_string(), "  ".to_string());
        let result = LabelMap::default().extend_from_file(LabelMapFile { labels }, "map.toml");
        assert!(matches!(result, Err(ConfigError::ValidationError { .. })));
    }
}
