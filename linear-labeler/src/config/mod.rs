//! Label configuration loading.
//!
//! This module resolves which Linear label a run applies. The built-in
//! `codex` token is always available; extra tokens come from an optional
//! TOML label map file:
//!
//! ```toml
//! [labels]
//! cursor = "Executed by Cursor"
//! ```

mod error;
mod label_map;

pub use error::ConfigError;
pub use label_map::{LabelMap, CODEX_LABEL, CODEX_TOKEN};

use crate::linear::LINEAR_API_URL;
use label_map::LabelMapFile;
use std::path::Path;
use tracing::{debug, info};
use url::Url;

/// Parses the GraphQL endpoint, falling back to the public Linear API when
/// the value is missing or blank.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidApiUrl`] if a non-blank value is not a URL.
pub fn resolve_api_url(value: Option<&str>) -> Result<Url, ConfigError> {
    let url = value
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .unwrap_or(LINEAR_API_URL);
    Url::parse(url).map_err(|source| ConfigError::InvalidApiUrl {
        url: url.to_string(),
        source,
    })
}

/// Loads a label map file and merges it over the built-in mappings.
///
/// # Arguments
///
/// * `path` - Path to the TOML label map file
///
/// # Errors
///
/// Returns [`ConfigError`] if the file is missing, is not valid TOML, or maps
/// a token to an empty name.
pub fn load_label_map(path: &Path) -> Result<LabelMap, ConfigError> {
    debug!(path = %path.display(), "Loading label map");

    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::IoError {
        path: path.display().to_string(),
        source,
    })?;
    let file: LabelMapFile = toml::from_str(&contents).map_err(|source| ConfigError::TomlError {
        path: path.display().to_string(),
        source,
    })?;

    let map = LabelMap::default().extend_from_file(file, &path.display().to_string())?;
    info!(tokens = %map.known_tokens(), "Loaded label map");
    Ok(map)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_map(temp: &TempDir, contents: &str) -> std::path::PathBuf {
        let path = temp.path().join("labels.toml");
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn blank_api_url_uses_default() {
        assert_eq!(resolve_api_url(None).unwrap().as_str(), LINEAR_API_URL);
        assert_eq!(resolve_api_url(Some("")).unwrap().as_str(), LINEAR_API_URL);
        assert_eq!(resolve_api_url(Some("  ")).unwrap().as_str(), LINEAR_API_URL);
    }

    #[test]
    fn custom_api_url_is_parsed() {
        let url = resolve_api_url(Some("http://localhost:8080/graphql")).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/graphql");
    }

    #[test]
    fn invalid_api_url_is_rejected() {
        let result = resolve_api_url(Some("not a url"));
        assert!(matches!(result, Err(ConfigError::InvalidApiUrl { .. })));
    }

    #[test]
    fn can_load_label_map() {
        let temp = TempDir::new().unwrap();
        let path = write_map(
            &temp,
            r#"
[labels]
cursor = "Executed by Cursor"
"#,
        );

        let map = load_label_map(&path).unwrap();
        assert_eq!(map.resolve(Some("cursor")).unwrap(), "Executed by Cursor");
        assert_eq!(map.resolve(Some("codex")).unwrap(), CODEX_LABEL);
    }

    #[test]
    fn file_can_override_builtin_label() {
        let temp = TempDir::new().unwrap();
        let path = write_map(
            &temp,
            r#"
[labels]
codex = "Codex"
"#,
        );

        let map = load_label_map(&path).unwrap();
        assert_eq!(map.resolve(Some("codex")).unwrap(), "Codex");
    }

    #[test]
    fn empty_file_keeps_builtin_label() {
        let temp = TempDir::new().unwrap();
        let path = write_map(&temp, "");

        let map = load_label_map(&path).unwrap();
        assert_eq!(map, LabelMap::default());
    }

    #[test]
    fn load_label_map_missing_file() {
        let temp = TempDir::new().unwrap();
        let result = load_label_map(&temp.path().join("missing.toml"));
        assert!(matches!(result, Err(ConfigError::IoError { .. })));
    }

    #[test]
    fn load_label_map_reports_invalid_toml() {
        let temp = TempDir::new().unwrap();
        let path = write_map(&temp, "not = [valid");
        let result = load_label_map(&path);
        assert!(matches!(result, Err(ConfigError::TomlError { .. })));
    }

    #[test]
    fn load_label_map_rejects_unknown_sections() {
        let temp = TempDir::new().unwrap();
        let path = write_map(&temp, "[llm]\nprovider = \"openai\"\n");
        let result = load_label_map(&path);
        assert!(matches!(result, Err(ConfigError::TomlError { .. })));
    }
}
