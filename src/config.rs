//! Configuration constants and utilities for termpad
//!
//! Editing behaviour is fixed at compile time; only the diagnostics destination can be
//! overridden from the environment.

use std::path::PathBuf;
use std::time::Duration;

/// Version shown in the welcome banner
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Columns between tab stops when expanding tabs for display
pub const TAB_STOP: usize = 8;

/// How long a status message stays on the message bar
pub const STATUS_MESSAGE_TIMEOUT: Duration = Duration::from_secs(5);

/// Bounded wait for a single input byte
pub const INPUT_POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// Screen rows taken by the status bar and the message bar
pub const RESERVED_ROWS: u16 = 2;

/// Message shown on the message bar at startup
pub const HELP_MESSAGE: &str = "HELP: Ctrl+S to save | Ctrl+Q to quit";

/// Placeholder shown in the status bar when the buffer has no filename
pub const NO_FILENAME: &str = "[No Filename]";

/// Environment variable naming a file that receives tracing output
pub const LOG_FILE_ENV_VAR: &str = "TERMPAD_LOG_FILE";

/// Get the log file path from the environment, if one is configured
pub fn get_log_path() -> Option<PathBuf> {
    std::env::var_os(LOG_FILE_ENV_VAR)
        .filter(|val| !val.is_empty())
        .map(PathBuf::from)
}
