//! Configuration types for georadar components.
//!
//! Each component keeps its own config next to its implementation
//! ([`RadarGeometry`](crate::radar::RadarGeometry),
//! [`SessionConfig`](crate::session::SessionConfig),
//! [`SensorListenerConfig`](crate::telemetry::SensorListenerConfig)); this
//! module groups them into one settings object so an application can build
//! everything from a single place.
//!
//! # Example
//!
//! ```
//! use georadar::config::RadarSettings;
//!
//! let settings = RadarSettings::default()
//!     .with_port(49003)
//!     .with_max_distance(1_000.0);
//! assert_eq!(settings.telemetry.port, 49003);
//! ```

use std::time::Duration;

use crate::radar::RadarGeometry;
use crate::session::SessionConfig;
use crate::telemetry::{HeadingConvention, SensorListenerConfig};

/// Combined settings for a complete radar application.
#[derive(Debug, Clone, Default)]
pub struct RadarSettings {
    /// Viewport geometry.
    pub geometry: RadarGeometry,
    /// Session broadcast behavior.
    pub session: SessionConfig,
    /// Sensor listener setup.
    pub telemetry: SensorListenerConfig,
}

impl RadarSettings {
    /// Set the UDP port the sensor listener binds.
    pub fn with_port(mut self, port: u16) -> Self {
        self.telemetry.port = port;
        self
    }

    /// Set the real-world range represented by the full viewport radius.
    pub fn with_max_distance(mut self, max_distance_m: f64) -> Self {
        self.geometry.max_distance_m = max_distance_m;
        self
    }

    /// Set the viewport radius in pixels.
    pub fn with_viewport_radius(mut self, viewport_radius: f64) -> Self {
        self.geometry.viewport_radius = viewport_radius;
        self
    }

    /// Set the minimum interval between frame broadcasts and forwarded fixes.
    ///
    /// Applies to both the session broadcast throttle and the listener's
    /// position throttle; the two exist to bound the same update rate.
    pub fn with_update_interval(mut self, interval: Duration) -> Self {
        self.session.min_broadcast_interval = interval;
        self.telemetry.min_update_interval = interval;
        self
    }

    /// Set the wire convention for orientation angles.
    pub fn with_heading_convention(mut self, convention: HeadingConvention) -> Self {
        self.telemetry.heading_convention = convention;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_component_defaults() {
        let settings = RadarSettings::default();
        assert_eq!(settings.geometry, RadarGeometry::default());
        assert_eq!(settings.telemetry.port, 49002);
        assert_eq!(
            settings.session.min_broadcast_interval,
            Duration::from_millis(500)
        );
    }

    #[test]
    fn test_builder_methods() {
        let settings = RadarSettings::default()
            .with_port(50000)
            .with_max_distance(2_000.0)
            .with_viewport_radius(100.0)
            .with_update_interval(Duration::from_millis(250))
            .with_heading_convention(HeadingConvention::Absolute);

        assert_eq!(settings.telemetry.port, 50000);
        assert_eq!(settings.geometry.max_distance_m, 2_000.0);
        assert_eq!(settings.geometry.viewport_radius, 100.0);
        assert_eq!(
            settings.session.min_broadcast_interval,
            Duration::from_millis(250)
        );
        assert_eq!(
            settings.telemetry.min_update_interval,
            Duration::from_millis(250)
        );
        assert_eq!(
            settings.telemetry.heading_convention,
            HeadingConvention::Absolute
        );
    }
}
