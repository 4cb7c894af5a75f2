//! Great-circle geodesy
//!
//! Provides distance and initial bearing between geographic points on a
//! spherical Earth model. These are the closed-form inputs to the radar
//! projection: how far away is the destination, and in which direction.

mod types;

pub use types::{GeoPoint, MAX_LAT, MAX_LON, MIN_LAT, MIN_LON};

use std::f64::consts::TAU;

/// Mean Earth radius in meters (spherical approximation, no ellipsoidal correction).
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Great-circle distance between two points, in meters.
///
/// Uses the Haversine formula. The result is symmetric under point swap,
/// non-negative, and zero when both points are equal. The formula numerically
/// degrades near antipodal points; no special case is applied.
#[inline]
pub fn distance(a: GeoPoint, b: GeoPoint) -> f64 {
    let phi1 = a.lat_rad();
    let phi2 = b.lat_rad();
    let delta_phi = (b.latitude - a.latitude).to_radians();
    let delta_lambda = (b.longitude - a.longitude).to_radians();

    let h = (delta_phi / 2.0).sin().powi(2)
        + phi1.cos() * phi2.cos() * (delta_lambda / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_M * c
}

/// Initial great-circle bearing from `a` to `b`, in radians.
///
/// Measured clockwise from true north, normalized into [0, 2*pi).
/// Not symmetric: the bearing from `b` back to `a` is only approximately the
/// reverse for short distances. Identical points yield 0 (atan2(0, 0));
/// this degenerate result is accepted behavior, not an error.
#[inline]
pub fn initial_bearing(a: GeoPoint, b: GeoPoint) -> f64 {
    let phi1 = a.lat_rad();
    let phi2 = b.lat_rad();
    let delta_lambda = (b.longitude - a.longitude).to_radians();

    let y = delta_lambda.sin() * phi2.cos();
    let x = phi1.cos() * phi2.sin() - phi1.sin() * phi2.cos() * delta_lambda.cos();
    let theta = y.atan2(x);

    (theta + TAU) % TAU
}
