//! Modal configuration

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// How a successful preview body is displayed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentPolicy {
  /// Inject the fragment as markup (server-rendered, same origin)
  #[default]
  Trusted,
  /// Show the fragment as escaped text
  Text,
}

/// Ids of the elements the surrounding markup provides
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementIds {
  /// Modal container, also the backdrop
  #[serde(default = "default_modal_id")]
  pub modal: String,

  /// Container the preview is injected into
  #[serde(default = "default_body_id")]
  pub body: String,

  /// Close control
  #[serde(default = "default_close_id")]
  pub close: String,

  /// Link to the full resource view
  #[serde(default = "default_full_view_id")]
  pub full_view: String,
}

fn default_modal_id() -> String {
  "resourceModal".to_string()
}

fn default_body_id() -> String {
  "modal-body".to_string()
}

fn default_close_id() -> String {
  "closeModal".to_string()
}

fn default_full_view_id() -> String {
  "fullViewBtn".to_string()
}

impl Default for ElementIds {
  fn default() -> Self {
    Self {
      modal: default_modal_id(),
      body: default_body_id(),
      close: default_close_id(),
      full_view: default_full_view_id(),
    }
  }
}

/// Preview modal configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModalConfig {
  #[serde(default)]
  pub elements: ElementIds,

  /// Prefix of the preview and view endpoints
  #[serde(default = "default_base_path")]
  pub base_path: String,

  /// Placeholder shown while a preview is loading
  #[serde(default = "default_loading_text")]
  pub loading_text: String,

  #[serde(default)]
  pub content_policy: ContentPolicy,

  /// Max log level (trace, debug, info, warn, error)
  #[serde(default = "default_log_level")]
  pub log_level: String,
}

fn default_base_path() -> String {
  "/dashboard".to_string()
}

fn default_loading_text() -> String {
  "Loading resource...".to_string()
}

fn default_log_level() -> String {
  "info".to_string()
}

impl Default for ModalConfig {
  fn default() -> Self {
    Self {
      elements: ElementIds::default(),
      base_path: default_base_path(),
      loading_text: default_loading_text(),
      content_policy: ContentPolicy::default(),
      log_level: default_log_level(),
    }
  }
}

impl ModalConfig {
  /// Parse a JSON config. Missing fields take their defaults.
  pub fn from_json(json: &str) -> Result<Self, ConfigError> {
    serde_json::from_str(json).map_err(ConfigError::from)
  }

  /// Parsed log level, `INFO` when unrecognised
  pub fn max_level(&self) -> tracing::Level {
    self.log_level.parse().unwrap_or(tracing::Level::INFO)
  }
}
