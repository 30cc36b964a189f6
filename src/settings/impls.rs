// Standard library
use std::path::{Path, PathBuf};
use std::{env, fs};

// 3rd party crates
use config::{Config, ConfigError, Environment, File, FileFormat};
use tracing::{error, info, warn};

// Current module imports
use super::constants::{CONFIG_DIR_NAME, CONFIG_PATH_ENV, DEFAULT_CONFIG, ENV_PREFIX};
use super::errors::{SettingsError, ValidationError};
use super::types::{ConfigManager, Settings, ValidatedSettings};
use crate::providers::cloudflare::types::CfConfig;

impl Settings {
    pub fn get_log_level(&self) -> String {
        self.log.level.to_lowercase()
    }

    pub fn get_cloudflare(&self) -> &CfConfig {
        &self.cloudflare
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        // Validate log level
        match self.log.level.to_lowercase().as_str() {
            "error" | "warn" | "info" | "debug" | "trace" => {}
            _ => return Err(ValidationError::InvalidLogLevel(self.log.level.clone())),
        }

        self.cloudflare.validate()?;

        Ok(())
    }
}

impl ConfigManager {
    /// Creates a new `ConfigManager` instance by loading and validating the configuration.
    ///
    /// `config_path` takes precedence over `CFPURGE_CONFIG_PATH` and the
    /// default location.
    pub fn new(config_path: Option<PathBuf>) -> Result<Self, SettingsError> {
        let config_path: PathBuf = match config_path {
            Some(path) => path,
            None => Self::get_config_path()?,
        };
        Self::ensure_config_file_exists(&config_path)?;

        let settings: Settings = Self::load_settings(&config_path)?;

        // Validate settings before proceeding
        let validated_settings = ValidatedSettings::new(settings).map_err(|e| {
            error!("Configuration validation failed: {}", e);
            e
        })?;

        let manager = ConfigManager {
            settings: validated_settings.into_inner(),
            config_path,
        };

        if !manager.settings.cloudflare.resolve().is_enabled() {
            warn!(
                "Cloudflare purging is disabled: set zone_id and credentials in {:?}",
                manager.config_path
            );
        }

        Ok(manager)
    }

    /// Determines the configuration file path.
    fn get_config_path() -> Result<PathBuf, ConfigError> {
        if let Ok(path) = env::var(CONFIG_PATH_ENV) {
            Ok(PathBuf::from(path))
        } else if let Some(config_dir) = dirs::config_dir() {
            Ok(config_dir.join(CONFIG_DIR_NAME).join("config.toml"))
        } else {
            let msg: &str = "Could not determine the configuration directory";
            error!("{}", msg);
            Err(ConfigError::Message(msg.into()))
        }
    }

    /// Ensures that the configuration file exists, creating it if necessary.
    fn ensure_config_file_exists(config_path: &Path) -> Result<(), ConfigError> {
        if !config_path.exists() {
            if let Some(parent_dir) = config_path.parent() {
                fs::create_dir_all(parent_dir).map_err(|e| {
                    let msg: String = format!("Failed to create configuration directory: {}", e);
                    error!("{}", msg);
                    ConfigError::Message(msg)
                })?;
            }
            fs::write(config_path, DEFAULT_CONFIG).map_err(|e| {
                let msg: String = format!("Failed to create default configuration file: {}", e);
                error!("{}", msg);
                ConfigError::Message(msg)
            })?;
            info!("Default configuration file created at: {:?}", config_path);
        }
        Ok(())
    }

    /// Loads the settings from the configuration file and environment variables.
    fn load_settings(config_path: &Path) -> Result<Settings, ConfigError> {
        let config_file: &str = config_path.to_str().ok_or_else(|| {
            let msg: &str = "Configuration file path contains invalid UTF-8 characters";
            error!("{}", msg);
            ConfigError::Message(msg.into())
        })?;

        let settings: Config = Config::builder()
            .add_source(File::new(config_file, FileFormat::Toml))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Provides a reference to the loaded settings.
    pub fn get_settings(&self) -> &Settings {
        &self.settings
    }

    pub fn get_log_level(&self) -> String {
        self.settings.get_log_level()
    }
}

impl ValidatedSettings {
    pub fn new(settings: Settings) -> Result<Self, ValidationError> {
        settings.validate()?;
        Ok(ValidatedSettings(settings))
    }

    pub fn into_inner(self) -> Settings {
        self.0
    }
}
