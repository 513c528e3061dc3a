use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_BRIDGE_ENABLED, DEFAULT_ERROR_EVENT,
    DEFAULT_READY_EVENT, DEFAULT_RESTARTING_EVENT, DEFAULT_STARTING_EVENT,
};

use serde::Deserialize;

/// Host bridge settings.
///
/// Event names must match what the host process emits for the sidecar
/// lifecycle. Disabling the bridge runs the UI in its degraded mode,
/// where the connection stays at `connecting`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BridgeConfig {
    pub enabled: bool,
    pub starting_event: String,
    pub ready_event: String,
    pub restarting_event: String,
    pub error_event: String,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            enabled: DEFAULT_BRIDGE_ENABLED,
            starting_event: String::from(DEFAULT_STARTING_EVENT),
            ready_event: String::from(DEFAULT_READY_EVENT),
            restarting_event: String::from(DEFAULT_RESTARTING_EVENT),
            error_event: String::from(DEFAULT_ERROR_EVENT),
        }
    }
}

impl BridgeConfig {
    /// Event names as `(setting key, value)` pairs.
    pub fn event_names(&self) -> [(&'static str, &str); 4] {
        [
            ("bridge.starting_event", &self.starting_event),
            ("bridge.ready_event", &self.ready_event),
            ("bridge.restarting_event", &self.restarting_event),
            ("bridge.error_event", &self.error_event),
        ]
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        let names = self.event_names();

        for (key, name) in names {
            if name.is_empty() {
                return Err(ConfigError::bridge(format!("{key} must not be empty")));
            }
            if name.chars().any(char::is_whitespace) {
                return Err(ConfigError::bridge(format!(
                    "{key} must not contain whitespace, got {name:?}"
                )));
            }
        }

        for (i, (key, name)) in names.iter().enumerate() {
            if let Some((other_key, _)) = names[i + 1..].iter().find(|(_, n)| n == name) {
                return Err(ConfigError::bridge(format!(
                    "{key} and {other_key} share the event name {name:?}"
                )));
            }
        }

        Ok(())
    }
}
