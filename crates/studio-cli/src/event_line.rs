//! Newline-delimited sidecar events read by `studio watch`.
//!
//! ```text
//! {"event": "sidecar-ready", "payload": {"port": 4000}}
//! {"event": "sidecar-starting"}
//! ```

use crate::{CliError, CliResult};

use studio_sidecar::{ChannelNames, SidecarChannel};

use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Clone, Deserialize)]
pub struct EventLine {
    pub event: String,
    #[serde(default)]
    pub payload: Option<Value>,
}

/// Parse one input line into a channel and its raw JSON payload.
///
/// Blank lines yield `Ok(None)`. A missing payload is delivered as `null`.
pub fn parse_event_line(
    line: &str,
    names: &ChannelNames,
) -> CliResult<Option<(SidecarChannel, String)>> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let parsed: EventLine = serde_json::from_str(line).map_err(|e| CliError::InvalidLine {
        message: e.to_string(),
    })?;

    let channel = names
        .resolve(&parsed.event)
        .ok_or_else(|| CliError::InvalidLine {
            message: format!("unknown event {:?}", parsed.event),
        })?;

    let payload = parsed.payload.unwrap_or(Value::Null).to_string();

    Ok(Some((channel, payload)))
}
