use serde::Deserialize;
use tracing::{
  error,
  info
};

use crate::error::ConfigError;

pub const DEFAULT_STORAGE_KEY: &str =
  "attractive_todos_v1";
pub const DEFAULT_THEME_STORAGE_KEY:
  &str = "tasklet.theme";
pub const DEFAULT_SAMPLE_TASK_TEXT:
  &str = "Add a friendly task — try \
          attaching an image!";

#[derive(
  Debug, Clone, PartialEq, Eq, Deserialize,
)]
#[serde(default)]
pub struct AppConfig {
  pub storage_key:       String,
  pub theme_storage_key: String,
  pub sample_task_text:  String
}

impl Default for AppConfig {
  fn default() -> Self {
    Self {
      storage_key:
        DEFAULT_STORAGE_KEY.to_string(),
      theme_storage_key:
        DEFAULT_THEME_STORAGE_KEY
          .to_string(),
      sample_task_text:
        DEFAULT_SAMPLE_TASK_TEXT
          .to_string()
    }
  }
}

impl AppConfig {
  pub fn from_toml_str(
    raw: &str
  ) -> Result<Self, ConfigError> {
    let cfg: AppConfig =
      toml::from_str(raw)?;
    cfg.validate()?;
    Ok(cfg)
  }

  /// Parses `raw`, falling back to
  /// defaults when it is unusable.
  pub fn load_or_default(
    raw: &str
  ) -> Self {
    match Self::from_toml_str(raw) {
      | Ok(cfg) => {
        info!(
          storage_key = %cfg.storage_key,
          "loaded app config"
        );
        cfg
      }
      | Err(error) => {
        error!(%error, "failed to load app config; using defaults");
        Self::default()
      }
    }
  }

  fn validate(
    &self
  ) -> Result<(), ConfigError> {
    let fields = [
      ("storage_key", &self.storage_key),
      (
        "theme_storage_key",
        &self.theme_storage_key
      ),
      (
        "sample_task_text",
        &self.sample_task_text
      )
    ];
    for (field, value) in fields {
      if value.trim().is_empty() {
        return Err(
          ConfigError::EmptyValue {
            field
          }
        );
      }
    }
    Ok(())
  }
}
