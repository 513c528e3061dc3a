pub mod cli;
pub mod commands;
pub mod error;
pub mod event_line;
pub mod logger;
pub mod watch;


pub use error::{CliError, CliResult};
pub use event_line::{EventLine, parse_event_line};
pub use watch::{WatchOptions, run_watch};
