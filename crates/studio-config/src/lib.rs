mod bridge_config;
mod config;
mod error;
mod log_level;
mod logging_config;

#[cfg(test)]
mod tests;

pub use bridge_config::BridgeConfig;
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;

pub const CONFIG_DIR_ENV: &str = "STUDIO_CONFIG_DIR";
pub const CONFIG_FILENAME: &str = "config.toml";
const DEFAULT_CONFIG_DIR: &str = ".studio";

const DEFAULT_BRIDGE_ENABLED: bool = true;
const DEFAULT_STARTING_EVENT: &str = "sidecar-starting";
const DEFAULT_READY_EVENT: &str = "sidecar-ready";
const DEFAULT_RESTARTING_EVENT: &str = "sidecar-restarting";
const DEFAULT_ERROR_EVENT: &str = "sidecar-error";

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_COLORED: bool = true;
