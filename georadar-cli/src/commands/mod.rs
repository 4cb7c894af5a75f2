//! CLI subcommand implementations.

pub mod distance;
pub mod watch;

use georadar::geo::{MAX_LAT, MAX_LON, MIN_LAT, MIN_LON};

use crate::error::CliError;

/// Validate a latitude argument.
pub fn check_latitude(name: &'static str, value: f64) -> Result<f64, CliError> {
    if !(MIN_LAT..=MAX_LAT).contains(&value) {
        return Err(CliError::InvalidCoordinate {
            name,
            value,
            min: MIN_LAT,
            max: MAX_LAT,
        });
    }
    Ok(value)
}

/// Validate a longitude argument.
pub fn check_longitude(name: &'static str, value: f64) -> Result<f64, CliError> {
    if !(MIN_LON..=MAX_LON).contains(&value) {
        return Err(CliError::InvalidCoordinate {
            name,
            value,
            min: MIN_LON,
            max: MAX_LON,
        });
    }
    Ok(value)
}
