//! Error types for the fallible edges of the crate.
//!
//! Searching, suggesting and highlighting never fail. Only loading
//! configuration and managing stored posts can.

use std::path::PathBuf;

use thiserror::Error;

use crate::types::PostId;

/// Errors raised while loading a [`SearchConfig`](crate::config::SearchConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("failed to read config file {path}: {source}")]
  Io {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },
  #[error("invalid config: {0}")]
  Parse(#[from] toml::de::Error),
}

/// Errors raised by a [`PostRepository`](crate::store::PostRepository).
#[derive(Debug, Error)]
pub enum StoreError {
  #[error("post `{0}` already exists")]
  DuplicateId(PostId),
  #[error("post `{0}` not found")]
  NotFound(PostId),
  #[error("failed to read posts from {path}: {source}")]
  Io {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },
  #[error("invalid posts JSON: {0}")]
  Json(#[from] serde_json::Error),
}
