//! CLI error handling with user-friendly messages.
//!
//! Centralizes error handling for the CLI, providing consistent formatting
//! and appropriate exit codes.

use std::fmt;
use std::process;

use georadar::telemetry::SensorError;

/// CLI-specific errors with user-friendly messages.
#[derive(Debug)]
pub enum CliError {
    /// Failed to initialize logging
    LoggingInit(std::io::Error),
    /// A coordinate argument is outside its valid range
    InvalidCoordinate {
        name: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
    /// Sensor listener failed
    Sensor(SensorError),
    /// Terminal setup or drawing failed
    Terminal(std::io::Error),
}

impl CliError {
    /// Exit the process with an appropriate error message and code.
    pub fn exit(&self) -> ! {
        eprintln!("Error: {}", self);

        // Print additional help for specific errors
        if let CliError::Sensor(SensorError::SocketBind { port, .. }) = self {
            eprintln!();
            eprintln!("Common issues:");
            eprintln!("  1. Another process is already listening on port {}", port);
            eprintln!("  2. Pick a different port with --port");
        }

        process::exit(1)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::LoggingInit(e) => write!(f, "Failed to initialize logging: {}", e),
            CliError::InvalidCoordinate {
                name,
                value,
                min,
                max,
            } => write!(
                f,
                "Invalid {}: {} (must be between {} and {})",
                name, value, min, max
            ),
            CliError::Sensor(e) => write!(f, "Sensor listener error: {}", e),
            CliError::Terminal(e) => write!(f, "Terminal error: {}", e),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::LoggingInit(e) => Some(e),
            CliError::Sensor(e) => Some(e),
            CliError::Terminal(e) => Some(e),
            _ => None,
        }
    }
}

impl From<SensorError> for CliError {
    fn from(e: SensorError) -> Self {
        CliError::Sensor(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_coordinate_message() {
        let err = CliError::InvalidCoordinate {
            name: "latitude",
            value: 91.0,
            min: -90.0,
            max: 90.0,
        };
        let text = err.to_string();
        assert!(text.contains("latitude"));
        assert!(text.contains("91"));
    }

    #[test]
    fn test_sensor_error_wraps_source() {
        use std::error::Error;

        let err = CliError::Sensor(SensorError::SocketBind {
            port: 49002,
            source: std::io::Error::new(std::io::ErrorKind::AddrInUse, "in use"),
        });
        assert!(err.source().is_some());
        assert!(err.to_string().contains("49002"));
    }
}
