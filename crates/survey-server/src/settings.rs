//! Runtime configuration: an optional TOML file overlaid with `SURVEY_*`
//! environment variables.

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Prefix for environment overrides, e.g. `SURVEY_PORT=9000`.
pub const ENV_PREFIX: &str = "SURVEY";

/// Runtime server configuration.
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
  pub host:           String,
  pub port:           u16,
  /// SQLite file holding the `survey_forms` collection. `~/` is expanded.
  pub store_path:     PathBuf,
  pub max_body_bytes: usize,
}

impl ServerConfig {
  /// Load from `path` (skipped if absent) and the environment.
  pub fn load(path: &Path) -> Result<Self, config::ConfigError> {
    config::Config::builder()
      .set_default("host", "0.0.0.0")?
      .set_default("port", 8080)?
      .set_default("max_body_bytes", 1024 * 1024)?
      .add_source(config::File::from(path).required(false))
      .add_source(config::Environment::with_prefix(ENV_PREFIX))
      .build()?
      .try_deserialize()
  }

  pub fn address(&self) -> String { format!("{}:{}", self.host, self.port) }

  /// `store_path` with a leading `~` expanded to the user's home directory.
  pub fn resolved_store_path(&self) -> PathBuf { expand_tilde(&self.store_path) }
}

fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}
