use crate::{ConnectionState, ConnectionStatus};

use serde::Serialize;

const CONNECTING_DETAIL: &str = "Connecting to backend...";
const ERROR_DETAIL: &str = "Backend connection failed";

/// What the UI shows for a connection that is not ready.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusIndicator {
    pub status: ConnectionStatus,
    pub label: String,
    pub detail: String,
}

/// Converts the connection state to its frontend-facing indicator.
///
/// Ready connections render nothing. Otherwise the detail is the reported
/// error message when non-empty, else a generic per-status message.
pub fn build_status_indicator(state: &ConnectionState) -> Option<StatusIndicator> {
    let (label, fallback) = match state.status {
        ConnectionStatus::Ready => return None,
        ConnectionStatus::Connecting => ("Connecting", CONNECTING_DETAIL.to_string()),
        ConnectionStatus::Restarting => (
            "Restarting",
            match state.retry_count {
                Some(attempt) => format!("Backend restarting (attempt {attempt})..."),
                None => "Backend restarting...".to_string(),
            },
        ),
        ConnectionStatus::Error => ("Disconnected", ERROR_DETAIL.to_string()),
    };

    let detail = state
        .error_message
        .as_deref()
        .filter(|message| !message.trim().is_empty())
        .map(str::to_string)
        .unwrap_or(fallback);

    Some(StatusIndicator {
        status: state.status,
        label: label.into(),
        detail,
    })
}
