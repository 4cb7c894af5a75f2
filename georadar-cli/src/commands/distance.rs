//! One-shot distance/bearing computation between two coordinates.

use clap::Args;

use georadar::geo::{self, GeoPoint};
use georadar::heading::compass_label;

use super::{check_latitude, check_longitude};
use crate::error::CliError;

/// Arguments for the `distance` subcommand.
#[derive(Debug, Args)]
pub struct DistanceArgs {
    /// Origin latitude in decimal degrees
    #[arg(long)]
    pub from_lat: f64,

    /// Origin longitude in decimal degrees
    #[arg(long)]
    pub from_lon: f64,

    /// Destination latitude in decimal degrees
    #[arg(long)]
    pub to_lat: f64,

    /// Destination longitude in decimal degrees
    #[arg(long)]
    pub to_lon: f64,
}

/// Compute and print great-circle distance and initial bearing.
pub fn run(args: &DistanceArgs) -> Result<(), CliError> {
    let from = GeoPoint::new(
        check_longitude("from-lon", args.from_lon)?,
        check_latitude("from-lat", args.from_lat)?,
    );
    let to = GeoPoint::new(
        check_longitude("to-lon", args.to_lon)?,
        check_latitude("to-lat", args.to_lat)?,
    );

    let distance_m = geo::distance(from, to);
    let bearing_deg = geo::initial_bearing(from, to).to_degrees();

    println!("From     : {}", from);
    println!("To       : {}", to);
    println!("Distance : {}", format_distance(distance_m));
    println!(
        "Bearing  : {:06.2}\u{00b0} ({})",
        bearing_deg,
        compass_label(bearing_deg)
    );

    Ok(())
}

/// Format a distance with a sensible unit.
fn format_distance(meters: f64) -> String {
    if meters >= 1_000.0 {
        format!("{:.2} km", meters / 1_000.0)
    } else {
        format!("{:.1} m", meters)
    }
}
