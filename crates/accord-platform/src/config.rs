//! Platform configuration.
//!
//! The partner list is owned by the surrounding system. It arrives as a
//! TOML file layered under `ACCORD_`-prefixed environment variables, or
//! falls back to the built-in demo partners when neither is present.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::Result;

/// Runtime configuration for [`Platform`](crate::Platform).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlatformConfig {
  /// Companies eligible to read aggregated datasets. Grants may name other
  /// companies; only the read path is gated on this list.
  pub partners: Vec<String>,
}

impl Default for PlatformConfig {
  fn default() -> Self {
    Self {
      partners: vec![
        "Retail Analytics Pro".to_owned(),
        "FinTech Insights".to_owned(),
        "Market Research Co".to_owned(),
        "Consumer Trends Lab".to_owned(),
      ],
    }
  }
}

impl PlatformConfig {
  /// Load configuration from the TOML file at `path` (missing file is fine)
  /// layered under `ACCORD_`-prefixed environment variables.
  pub fn load(path: impl AsRef<Path>) -> Result<Self> {
    let settings = config::Config::builder()
      .add_source(config::File::from(path.as_ref()).required(false))
      .add_source(config::Environment::with_prefix("ACCORD"))
      .build()?;
    Ok(settings.try_deserialize()?)
  }

  /// Whether `company` may read aggregated datasets.
  pub fn is_partner(&self, company: &str) -> bool {
    self.partners.iter().any(|p| p == company)
  }
}
