//! Search configuration, read from TOML and the environment.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::engine::DEFAULT_SUGGESTION_LIMIT;
use crate::error::ConfigError;
use crate::weights::ScoringWeights;

/// Environment variable overriding [`SearchConfig::suggestion_limit`].
pub const SUGGESTION_LIMIT_ENV: &str = "BLOGSEARCH_SUGGESTION_LIMIT";

/// Prefix for per-weight overrides, e.g. `BLOGSEARCH_WEIGHT_TITLE_PHRASE`.
pub const WEIGHT_ENV_PREFIX: &str = "BLOGSEARCH_WEIGHT_";

/// Tunables for a [`BlogSearchEngine`](crate::engine::BlogSearchEngine).
///
/// ```toml
/// suggestion_limit = 8
///
/// [weights]
/// title_phrase = 120
/// tag = 40
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Points per kind of match.
    pub weights: ScoringWeights,
    /// Maximum number of autocomplete suggestions.
    pub suggestion_limit: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            weights: ScoringWeights::default(),
            suggestion_limit: DEFAULT_SUGGESTION_LIMIT,
        }
    }
}

impl SearchConfig {
    /// Parse a TOML document. Missing keys keep their defaults.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    /// Read and parse a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&source)
    }

    /// Defaults with environment overrides applied.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.apply_env(|key| std::env::var(key).ok());
        config
    }

    /// Overlay overrides from `lookup` onto this config.
    ///
    /// `lookup` maps a variable name to its value. Values that do not parse as
    /// unsigned integers are skipped with a warning.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup(SUGGESTION_LIMIT_ENV) {
            match raw.trim().parse() {
                Ok(limit) => self.suggestion_limit = limit,
                Err(_) => tracing::warn!("ignoring {SUGGESTION_LIMIT_ENV}={raw:?}: not a number"),
            }
        }

        for field in ScoringWeights::FIELDS {
            let key = format!("{WEIGHT_ENV_PREFIX}{}", field.to_uppercase());
            let Some(raw) = lookup(&key) else {
                continue;
            };
            match raw.trim().parse() {
                Ok(weight) => {
                    self.weights.set(field, weight);
                }
                Err(_) => tracing::warn!("ignoring {key}={raw:?}: not a number"),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn test_empty_document_is_default() {
        let config = SearchConfig::from_toml_str("").unwrap();
        assert_eq!(config, SearchConfig::default());
        assert_eq!(config.suggestion_limit, 5);
    }

    #[test]
    fn test_partial_weights() {
        let config = SearchConfig::from_toml_str(
            r#"
            suggestion_limit = 8

            [weights]
            title_phrase = 120
            "#,
        )
        .unwrap();
        assert_eq!(config.suggestion_limit, 8);
        assert_eq!(config.weights.title_phrase, 120);
        assert_eq!(config.weights.excerpt_phrase, 50);
    }

    #[test]
    fn test_parse_error() {
        let err = SearchConfig::from_toml_str("suggestion_limit = \"many\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[weights]\ntag = 35").unwrap();
        let config = SearchConfig::load(file.path()).unwrap();
        assert_eq!(config.weights.tag, 35);
    }

    #[test]
    fn test_missing_file() {
        let err = SearchConfig::load("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_env_overrides() {
        let vars: HashMap<&str, &str> = [
            ("BLOGSEARCH_SUGGESTION_LIMIT", "3"),
            ("BLOGSEARCH_WEIGHT_CONTENT_WORD", " 7 "),
            ("BLOGSEARCH_WEIGHT_TAG", "lots"),
        ]
        .into_iter()
        .collect();

        let mut config = SearchConfig::default();
        config.apply_env(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.suggestion_limit, 3);
        assert_eq!(config.weights.content_word, 7);
        assert_eq!(config.weights.tag, 30);
    }
}
