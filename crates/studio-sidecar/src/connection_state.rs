use crate::ConnectionStatus;

use serde::{Deserialize, Serialize};

/// Snapshot of the sidecar connection.
///
/// `error_message` is only populated in `Error` and `retry_count` only in
/// `Restarting`. `port` is the last port reported ready and survives later
/// transitions.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionState {
    pub status: ConnectionStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retry_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
}

impl ConnectionState {
    pub fn is_ready(&self) -> bool {
        self.status == ConnectionStatus::Ready
    }
}
