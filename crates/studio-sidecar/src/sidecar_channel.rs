use studio_config::BridgeConfig;

use std::fmt;

use serde::{Deserialize, Serialize};

/// The four sidecar lifecycle channels exposed by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SidecarChannel {
    Starting,
    Ready,
    Restarting,
    Error,
}

impl SidecarChannel {
    pub const ALL: [SidecarChannel; 4] = [
        SidecarChannel::Starting,
        SidecarChannel::Ready,
        SidecarChannel::Restarting,
        SidecarChannel::Error,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SidecarChannel::Starting => "starting",
            SidecarChannel::Ready => "ready",
            SidecarChannel::Restarting => "restarting",
            SidecarChannel::Error => "error",
        }
    }
}

impl fmt::Display for SidecarChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Host event names for each channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelNames {
    pub starting: String,
    pub ready: String,
    pub restarting: String,
    pub error: String,
}

impl ChannelNames {
    pub fn name(&self, channel: SidecarChannel) -> &str {
        match channel {
            SidecarChannel::Starting => &self.starting,
            SidecarChannel::Ready => &self.ready,
            SidecarChannel::Restarting => &self.restarting,
            SidecarChannel::Error => &self.error,
        }
    }

    /// Map a host event name back to its channel.
    pub fn resolve(&self, event: &str) -> Option<SidecarChannel> {
        SidecarChannel::ALL
            .into_iter()
            .find(|channel| self.name(*channel) == event)
    }
}

impl From<&BridgeConfig> for ChannelNames {
    fn from(config: &BridgeConfig) -> Self {
        Self {
            starting: config.starting_event.clone(),
            ready: config.ready_event.clone(),
            restarting: config.restarting_event.clone(),
            error: config.error_event.clone(),
        }
    }
}

impl Default for ChannelNames {
    fn default() -> Self {
        Self::from(&BridgeConfig::default())
    }
}
