//! GeoRadar - live destination radar built on spherical geodesy
//!
//! This library computes where a chosen destination sits relative to a moving
//! observer and maps that onto a circular "radar" viewport. The geometry is
//! pure and stateless; everything stateful lives in an explicit session object.
//!
//! # High-Level API
//!
//! ```ignore
//! use georadar::geo::GeoPoint;
//! use georadar::radar::RadarGeometry;
//! use georadar::session::RadarSession;
//!
//! let session = RadarSession::new(RadarGeometry::default());
//! session.set_destination(GeoPoint::new(9.99, 53.55));
//!
//! // Feed sensor readings, then render frames
//! let mut rx = session.subscribe();
//! while let Ok(frame) = rx.recv().await {
//!     println!("{}m at {:.0} deg", frame.distance_m, frame.bearing_deg);
//! }
//! ```
//!
//! # Modules
//!
//! - [`geo`] - Great-circle distance and bearing (Haversine, spherical Earth)
//! - [`radar`] - Polar-to-viewport projection with range clamping
//! - [`heading`] - Compass heading normalization and angular offsets
//! - [`session`] - Stateful radar session combining position, heading, destination
//! - [`telemetry`] - UDP sensor listener producing immutable readings
//! - [`config`] - Structured settings grouping the component configs
//! - [`logging`] - tracing setup with file and console output

pub mod config;
pub mod geo;
pub mod heading;
pub mod logging;
pub mod radar;
pub mod session;
pub mod telemetry;

/// Version of the georadar library and CLI.
///
/// This is synchronized across all components in the workspace.
/// The version is defined in `Cargo.toml` and injected at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
