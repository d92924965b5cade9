/// Utility functions used throughout the application

use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};

/// Global flag for opt-in debug logging (set from --debug)
pub static DEBUG_MODE: AtomicBool = AtomicBool::new(false);

/// Get platform-specific debug log path
pub fn get_debug_log_path() -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push("docsearch-debug.log");
    path
}

/// Append a line to the debug log
///
/// No-op unless debug mode is enabled; logging failures are ignored.
pub fn log_debug(msg: &str) {
    if !DEBUG_MODE.load(Ordering::Relaxed) {
        return;
    }

    if let Ok(mut file) = OpenOptions::new()
        .create(true)
        .append(true)
        .open(get_debug_log_path())
    {
        let _ = writeln!(file, "{}", msg);
    }
}
