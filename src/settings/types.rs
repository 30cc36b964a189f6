// Standard library
use std::path::PathBuf;

// 3rd party crates
use serde::Deserialize;

// Project imports
use crate::providers::cloudflare::types::CfConfig;

#[derive(Debug, Deserialize, Clone)]
pub struct Log {
    #[serde(default = "default_log_level")]
    pub level: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    #[serde(default)]
    pub log: Log,
    #[serde(default)]
    pub cloudflare: CfConfig,
}

impl Default for Log {
    fn default() -> Self {
        Log {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Settings that passed validation.
#[derive(Debug)]
pub struct ValidatedSettings(pub(super) Settings);

/// Loads the application settings once; they stay read-only afterwards.
pub struct ConfigManager {
    pub settings: Settings,
    pub config_path: PathBuf,
}
