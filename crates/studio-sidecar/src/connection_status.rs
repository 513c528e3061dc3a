use crate::SidecarError;

use std::fmt;
use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Believed status of the sidecar connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionStatus {
    /// Waiting for the sidecar (initial state)
    #[default]
    Connecting,
    /// Sidecar is reachable
    Ready,
    /// Sidecar is being restarted by the host
    Restarting,
    /// Sidecar reported a failure
    Error,
}

impl ConnectionStatus {
    pub const ALL: [ConnectionStatus; 4] = [
        ConnectionStatus::Connecting,
        ConnectionStatus::Ready,
        ConnectionStatus::Restarting,
        ConnectionStatus::Error,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ConnectionStatus::Connecting => "connecting",
            ConnectionStatus::Ready => "ready",
            ConnectionStatus::Restarting => "restarting",
            ConnectionStatus::Error => "error",
        }
    }
}

impl fmt::Display for ConnectionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConnectionStatus {
    type Err = SidecarError;

    #[track_caller]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match ConnectionStatus::ALL.into_iter().find(|status| status.as_str() == s) {
            Some(status) => Ok(status),
            None => Err(SidecarError::UnknownStatus {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}
