use crate::{
    BridgeConfig, CONFIG_DIR_ENV, CONFIG_FILENAME, ConfigError, ConfigErrorResult,
    DEFAULT_CONFIG_DIR, LoggingConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub bridge: BridgeConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config from the resolved config directory.
    ///
    /// Loading order:
    /// 1. STUDIO_CONFIG_DIR env var, else ./.studio/
    /// 2. config.toml if it exists, else defaults
    /// 3. STUDIO_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;
        Self::load_from(&config_dir)
    }

    /// Load from an explicit directory. A missing directory or file yields defaults.
    pub fn load_from(config_dir: &Path) -> ConfigErrorResult<Self> {
        let config_path = config_dir.join(CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Priority: STUDIO_CONFIG_DIR env var > ./.studio/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR))
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.bridge.validate()?;
        self.logging.validate()?;
        Ok(())
    }

    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  bridge: {} (starting={}, ready={}, restarting={}, error={})",
            if self.bridge.enabled {
                "enabled"
            } else {
                "disabled"
            },
            self.bridge.starting_event,
            self.bridge.ready_event,
            self.bridge.restarting_event,
            self.bridge.error_event
        );
        info!(
            "  logging: {} (colored: {}, file: {})",
            self.logging.level,
            self.logging.colored,
            self.logging.file.as_deref().unwrap_or("stderr")
        );
    }

    fn apply_env_overrides(&mut self) {
        // Bridge
        Self::apply_env_bool("STUDIO_BRIDGE_ENABLED", &mut self.bridge.enabled);
        Self::apply_env_string(
            "STUDIO_BRIDGE_STARTING_EVENT",
            &mut self.bridge.starting_event,
        );
        Self::apply_env_string("STUDIO_BRIDGE_READY_EVENT", &mut self.bridge.ready_event);
        Self::apply_env_string(
            "STUDIO_BRIDGE_RESTARTING_EVENT",
            &mut self.bridge.restarting_event,
        );
        Self::apply_env_string("STUDIO_BRIDGE_ERROR_EVENT", &mut self.bridge.error_event);

        // Logging
        Self::apply_env_parse("STUDIO_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("STUDIO_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("STUDIO_LOG_FILE", &mut self.logging.file);
    }

    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Accepts "true"/"1"; anything else is false.
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
