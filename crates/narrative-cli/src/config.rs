//! Generator configuration.

use narrative_agents::{ClassifierRules, OutreachParams};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable prefix, e.g. `NARRATIVE_OUTREACH__SENDER_NAME`
pub const ENV_PREFIX: &str = "NARRATIVE";

/// Complete generator configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NarrativeConfig {
    /// Sender, value proposition and Company DNA detection mode
    pub outreach: OutreachParams,

    /// Classifier keyword tables and size bands
    pub rules: ClassifierRules,
}

impl NarrativeConfig {
    /// Load configuration from file, with environment overrides
    pub fn from_file(path: &Path) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::from(path.to_path_buf()))
            .add_source(environment())
            .build()?;

        settings.try_deserialize()
    }

    /// Load from environment variables
    pub fn from_env() -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(environment())
            .build()?;

        settings.try_deserialize()
    }

    /// File plus environment when a path is given, environment only otherwise
    pub fn load(path: Option<&Path>) -> narrative_core::Result<Self> {
        let loaded = match path {
            Some(path) => Self::from_file(path),
            None => Self::from_env(),
        };
        loaded.map_err(|e| narrative_core::Error::Config(e.to_string()))
    }
}

fn environment() -> config::Environment {
    config::Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}
