//! Logging infrastructure for georadar.
//!
//! Provides structured logging with file output and optional console output:
//! - Writes to `logs/georadar.log` (cleared on session start)
//! - Console output is suppressed in TUI mode so log lines do not corrupt
//!   the terminal display
//! - Configurable via the RUST_LOG environment variable

use std::fs;
use std::io;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Guard that must be kept alive for the duration of logging.
///
/// Dropping this guard will flush and close the log file writer.
pub struct LoggingGuard {
    _file_guard: WorkerGuard,
}

/// Console output behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleOutput {
    /// Also print log lines to stdout.
    Enabled,
    /// File only; used when a TUI owns the terminal.
    Disabled,
}

/// Initialize the logging system.
///
/// Creates the log directory if needed, clears the previous log file, and
/// sets up the file writer plus (optionally) stdout output.
///
/// # Errors
///
/// Returns an error if the log directory cannot be created or the previous
/// log file cannot be cleared.
pub fn init_logging(
    log_dir: &str,
    log_file: &str,
    console: ConsoleOutput,
) -> Result<LoggingGuard, io::Error> {
    fs::create_dir_all(log_dir)?;

    // Clear the previous session's log
    let log_path = Path::new(log_dir).join(log_file);
    fs::write(&log_path, "")?;

    let file_appender = tracing_appender::rolling::never(log_dir, log_file);
    let (non_blocking_file, file_guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let registry = tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer);

    match console {
        ConsoleOutput::Enabled => {
            let stdout_layer = tracing_subscriber::fmt::layer()
                .with_writer(io::stdout)
                .with_ansi(true);
            registry.with(stdout_layer).init();
        }
        ConsoleOutput::Disabled => registry.init(),
    }

    Ok(LoggingGuard {
        _file_guard: file_guard,
    })
}

/// Get the default log directory path.
pub fn default_log_dir() -> &'static str {
    "logs"
}

/// Get the default log file name.
pub fn default_log_file() -> &'static str {
    "georadar.log"
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn test_log_dir() -> PathBuf {
        // Unique directory per test to avoid conflicts
        let timestamp = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        PathBuf::from(format!("test_logs_{}", timestamp))
    }

    #[test]
    fn test_default_paths() {
        assert_eq!(default_log_dir(), "logs");
        assert_eq!(default_log_file(), "georadar.log");
    }

    #[test]
    fn test_creates_directory_and_clears_file() {
        // init_logging itself cannot run twice in one process (global
        // subscriber), so exercise the file operations directly.
        let log_dir = test_log_dir();
        let log_dir_str = log_dir.to_str().unwrap();

        fs::create_dir_all(log_dir_str).expect("create directory");
        let log_path = log_dir.join("test.log");
        fs::write(&log_path, "old session data").expect("seed log file");

        fs::write(&log_path, "").expect("clear log file");
        assert_eq!(fs::read_to_string(&log_path).unwrap(), "");

        fs::remove_dir_all(&log_dir).expect("cleanup");
    }
}
