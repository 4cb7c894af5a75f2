//! Live radar view fed by the UDP sensor listener.
//!
//! Wires the pieces together: a [`SensorListener`] receives readings, a pump
//! task applies them to a [`RadarSession`], and the TUI renders frames until
//! the user quits.

use std::time::Duration;

use clap::Args;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use georadar::config::RadarSettings;
use georadar::geo::GeoPoint;
use georadar::logging::{self, ConsoleOutput};
use georadar::session::RadarSession;
use georadar::telemetry::{HeadingConvention, SensorListener, SensorReading};

use super::{check_latitude, check_longitude};
use crate::error::CliError;
use crate::tui_app;

/// Arguments for the `watch` subcommand.
#[derive(Debug, Args)]
pub struct WatchArgs {
    /// Destination latitude in decimal degrees
    #[arg(long)]
    pub dest_lat: f64,

    /// Destination longitude in decimal degrees
    #[arg(long)]
    pub dest_lon: f64,

    /// UDP port to listen on for sensor sentences
    #[arg(long, default_value_t = 49002)]
    pub port: u16,

    /// Real-world range of the radar display in meters
    #[arg(long, default_value_t = 500.0)]
    pub range: f64,

    /// Minimum interval between display updates in milliseconds
    #[arg(long, default_value_t = 500)]
    pub update_interval_ms: u64,

    /// Interpret wire orientation angles as absolute compass values
    /// (reversed sign convention) instead of counter-clockwise alpha angles
    #[arg(long)]
    pub absolute_heading: bool,
}

/// Run the live radar view.
pub async fn run(args: &WatchArgs) -> Result<(), CliError> {
    let destination = GeoPoint::new(
        check_longitude("dest-lon", args.dest_lon)?,
        check_latitude("dest-lat", args.dest_lat)?,
    );

    // File-only logging: the TUI owns the terminal
    let _guard = logging::init_logging(
        logging::default_log_dir(),
        logging::default_log_file(),
        ConsoleOutput::Disabled,
    )
    .map_err(CliError::LoggingInit)?;

    let convention = if args.absolute_heading {
        HeadingConvention::Absolute
    } else {
        HeadingConvention::Alpha
    };
    let settings = RadarSettings::default()
        .with_port(args.port)
        .with_max_distance(args.range)
        .with_update_interval(Duration::from_millis(args.update_interval_ms))
        .with_heading_convention(convention);

    let session = RadarSession::with_config(settings.geometry, settings.session.clone());
    session.set_destination(destination);

    info!(%destination, port = args.port, range = args.range, "Starting radar watch");

    let cancellation_token = CancellationToken::new();

    // Sensor listener task
    let (reading_tx, mut reading_rx) = mpsc::channel::<SensorReading>(16);
    let listener = SensorListener::new(settings.telemetry.clone(), reading_tx);
    let listener_handle = tokio::spawn(listener.run(cancellation_token.clone()));

    // Pump readings into the session
    let pump_session = session.clone();
    let pump_handle = tokio::spawn(async move {
        while let Some(reading) = reading_rx.recv().await {
            reading.apply_to(&pump_session);
        }
        debug!("Reading pump finished");
    });

    let result = tui_app::run_tui(&session, cancellation_token.clone()).await;

    // Shut the background tasks down regardless of how the TUI ended
    cancellation_token.cancel();
    let listener_result = listener_handle.await;
    let _ = pump_handle.await;

    result?;

    // Surface a bind failure that happened while the TUI was starting
    if let Ok(Err(e)) = listener_result {
        return Err(e.into());
    }
    Ok(())
}
