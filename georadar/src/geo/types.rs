//! Geographic type definitions

use std::fmt;

/// Valid longitude range (informational; not enforced by the geometry core).
pub const MIN_LON: f64 = -180.0;
pub const MAX_LON: f64 = 180.0;

/// Valid latitude range (informational; not enforced by the geometry core).
pub const MIN_LAT: f64 = -90.0;
pub const MAX_LAT: f64 = 90.0;

/// A geographic point in decimal degrees.
///
/// Immutable value type. Callers are responsible for keeping longitude within
/// [-180, 180] and latitude within [-90, 90]; out-of-range inputs produce
/// mathematically degenerate but still-defined results downstream.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GeoPoint {
    /// Longitude in degrees, positive east.
    pub longitude: f64,
    /// Latitude in degrees, positive north.
    pub latitude: f64,
}

impl GeoPoint {
    /// Create a new geographic point.
    #[inline]
    pub fn new(longitude: f64, latitude: f64) -> Self {
        Self {
            longitude,
            latitude,
        }
    }

    /// Latitude in radians.
    #[inline]
    pub fn lat_rad(&self) -> f64 {
        self.latitude.to_radians()
    }

    /// Longitude in radians.
    #[inline]
    pub fn lon_rad(&self) -> f64 {
        self.longitude.to_radians()
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ew = if self.longitude >= 0.0 { "E" } else { "W" };
        let ns = if self.latitude >= 0.0 { "N" } else { "S" };
        write!(
            f,
            "{:.6}\u{00b0}{}, {:.6}\u{00b0}{}",
            self.longitude.abs(),
            ew,
            self.latitude.abs(),
            ns
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_sets_fields() {
        let p = GeoPoint::new(9.99, 53.55);
        assert_eq!(p.longitude, 9.99);
        assert_eq!(p.latitude, 53.55);
    }

    #[test]
    fn test_radian_conversion() {
        let p = GeoPoint::new(180.0, 90.0);
        assert!((p.lon_rad() - std::f64::consts::PI).abs() < 1e-12);
        assert!((p.lat_rad() - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
    }

    #[test]
    fn test_display_hemisphere_suffixes() {
        let p = GeoPoint::new(-74.006, 40.7128);
        let text = p.to_string();
        assert!(text.contains("W"), "western longitude: {}", text);
        assert!(text.contains("N"), "northern latitude: {}", text);
    }
}
