//! Drive the connection tracker from a stream of event lines.

use crate::{CliResult, parse_event_line};

use studio_config::BridgeConfig;
use studio_sidecar::{
    ChannelNames, ConnectionState, ConnectionTracker, IpcEventAdapter, LocalBridge,
    StatusIndicator, build_status_indicator,
};

use std::io::{BufRead, Write};
use std::sync::Arc;

use log::{debug, warn};
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default)]
pub struct WatchOptions {
    /// Print the UI status indicator instead of the raw state
    pub indicator: bool,
    /// Pretty-print JSON output
    pub pretty: bool,
}

/// Feed every line of `input` through a local host bridge and write one JSON
/// document to `output` per state change, plus the final state at EOF.
///
/// Invalid lines are logged and skipped. With the bridge disabled in
/// `bridge_config`, no subscriptions are made and events have no effect.
pub fn run_watch<R: BufRead, W: Write>(
    input: R,
    output: &mut W,
    bridge_config: &BridgeConfig,
    options: WatchOptions,
) -> CliResult<ConnectionState> {
    let names = ChannelNames::from(bridge_config);
    let bridge = LocalBridge::new();
    let tracker = Arc::new(ConnectionTracker::new());
    let mut adapter = IpcEventAdapter::new(tracker.clone());

    if bridge_config.enabled {
        adapter.install(Some(&bridge));
    } else {
        adapter.install(None);
    }

    let indicator = options.indicator;
    let mut view = tracker.select(move |state: &ConnectionState| WatchView::of(state, indicator));
    write_json(output, &view.get(), options.pretty)?;

    for (index, line) in input.lines().enumerate() {
        let line = line?;
        let line_number = index + 1;

        let (channel, payload) = match parse_event_line(&line, &names) {
            Ok(Some(event)) => event,
            Ok(None) => continue,
            Err(e) => {
                warn!("Skipping line {line_number}: {e}");
                continue;
            }
        };

        let delivered = bridge.emit(channel, &payload);
        debug!("Line {line_number}: {channel} delivered to {delivered} listener(s)");

        if let Some(next) = view.poll() {
            write_json(output, &next, options.pretty)?;
        }
    }

    adapter.teardown();

    let final_state = tracker.snapshot();
    write_json(output, &FinalState { state: &final_state }, options.pretty)?;
    output.flush()?;

    Ok(final_state)
}

/// What one output line shows. Lines are only written when this changes.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
enum WatchView {
    State(ConnectionState),
    Indicator(Option<StatusIndicator>),
}

impl WatchView {
    fn of(state: &ConnectionState, indicator: bool) -> Self {
        if indicator {
            WatchView::Indicator(build_status_indicator(state))
        } else {
            WatchView::State(state.clone())
        }
    }
}

#[derive(Serialize)]
struct FinalState<'a> {
    #[serde(rename = "final")]
    state: &'a ConnectionState,
}

fn write_json<W: Write, T: Serialize>(output: &mut W, value: &T, pretty: bool) -> CliResult<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    writeln!(output, "{json}")?;
    Ok(())
}
