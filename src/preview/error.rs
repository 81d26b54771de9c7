//! Preview errors

use thiserror::Error;

/// Why a preview could not be shown
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PreviewError {
  /// The request never produced a response
  #[error("{0}")]
  Network(String),

  #[error("Failed to load resource: unauthorized")]
  Unauthorized,

  #[error("Failed to load resource (HTTP {0})")]
  Status(u16),

  #[error("Failed to read resource preview: {0}")]
  Body(String),
}

impl PreviewError {
  /// Map a non-success HTTP status
  pub fn from_status(status: u16) -> Self {
    if status == 401 {
      PreviewError::Unauthorized
    } else {
      PreviewError::Status(status)
    }
  }
}

#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("invalid modal config: {0}")]
  Parse(#[from] serde_json::Error),
}
