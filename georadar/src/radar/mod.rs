//! Radar viewport projection
//!
//! Maps a polar (bearing, distance) pair onto Cartesian pixel coordinates
//! inside a fixed-radius circular viewport. The viewport is "north-up":
//! bearing 0 points straight up and increases clockwise. Screen y grows
//! downward, so the y term is subtracted.
//!
//! Distances within the configured maximum range scale linearly; anything
//! beyond is clamped to the rim so the marker still indicates direction
//! instead of being drawn off-canvas.

/// A point in viewport pixel coordinates.
///
/// The viewport center is at (radius, radius); x grows right, y grows down.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RadarPoint {
    pub x: f64,
    pub y: f64,
}

/// Project a bearing/distance pair into a circular viewport.
///
/// # Arguments
///
/// * `bearing_rad` - Bearing in radians, clockwise from north
/// * `distance_m` - Distance to the target in meters
/// * `viewport_radius` - Radius of the circular viewport in pixels
/// * `max_distance` - Real-world range represented by the full radius, in meters
///
/// Distance 0 maps to the exact center regardless of bearing. A distance
/// beyond `max_distance` lands exactly on the rim.
#[inline]
pub fn project(
    bearing_rad: f64,
    distance_m: f64,
    viewport_radius: f64,
    max_distance: f64,
) -> RadarPoint {
    let point_radius = if distance_m <= max_distance {
        distance_m * (viewport_radius / max_distance)
    } else {
        viewport_radius
    };

    RadarPoint {
        x: viewport_radius + bearing_rad.sin() * point_radius,
        y: viewport_radius - bearing_rad.cos() * point_radius,
    }
}

/// Geometry of the radar viewport.
///
/// Groups the viewport radius, the real-world range it represents, and the
/// number of range rings drawn by the renderer. Defaults match the classic
/// display: a 150px radius covering 500m with five rings every 100m.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadarGeometry {
    /// Viewport radius in pixels.
    pub viewport_radius: f64,
    /// Real-world distance represented by the full radius, in meters.
    pub max_distance_m: f64,
    /// Number of evenly spaced range rings.
    pub ring_count: u8,
}

impl Default for RadarGeometry {
    fn default() -> Self {
        Self {
            viewport_radius: 150.0,
            max_distance_m: 500.0,
            ring_count: 5,
        }
    }
}

impl RadarGeometry {
    /// Create a geometry with the given viewport radius and range.
    pub fn new(viewport_radius: f64, max_distance_m: f64) -> Self {
        Self {
            viewport_radius,
            max_distance_m,
            ..Self::default()
        }
    }

    /// Set the number of range rings.
    pub fn with_ring_count(mut self, ring_count: u8) -> Self {
        self.ring_count = ring_count;
        self
    }

    /// Viewport center point.
    #[inline]
    pub fn center(&self) -> RadarPoint {
        RadarPoint {
            x: self.viewport_radius,
            y: self.viewport_radius,
        }
    }

    /// Pixel interval between adjacent range rings.
    #[inline]
    pub fn ring_interval(&self) -> f64 {
        self.viewport_radius / self.ring_count as f64
    }

    /// Real-world distance between adjacent range rings, in meters.
    #[inline]
    pub fn ring_distance_m(&self) -> f64 {
        self.max_distance_m / self.ring_count as f64
    }

    /// Pixel radii of the range rings, innermost first.
    pub fn ring_radii(&self) -> Vec<f64> {
        let interval = self.ring_interval();
        (1..=self.ring_count).map(|i| i as f64 * interval).collect()
    }

    /// Project a bearing/distance pair using this geometry.
    #[inline]
    pub fn project(&self, bearing_rad: f64, distance_m: f64) -> RadarPoint {
        project(
            bearing_rad,
            distance_m,
            self.viewport_radius,
            self.max_distance_m,
        )
    }

    /// Marker position for a heading-relative display.
    ///
    /// Instead of a full polar projection, the marker is placed by a signed
    /// horizontal pixel displacement proportional to the angular offset:
    /// straight ahead sits at the center, the edge of the forward visible
    /// arc (+/-90 degrees) at the rim. Offsets beyond the arc land outside
    /// the viewport; renderers hide those markers.
    #[inline]
    pub fn heading_relative_marker(&self, offset_deg: f64) -> RadarPoint {
        let displacement =
            (offset_deg / crate::heading::FORWARD_ARC_HALF_ANGLE) * self.viewport_radius;
        RadarPoint {
            x: self.viewport_radius + displacement,
            y: self.viewport_radius,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    fn distance_from_center(p: RadarPoint, radius: f64) -> f64 {
        ((p.x - radius).powi(2) + (p.y - radius).powi(2)).sqrt()
    }

    #[test]
    fn test_zero_distance_maps_to_center() {
        for bearing in [0.0, FRAC_PI_2, PI, 4.2] {
            let p = project(bearing, 0.0, 150.0, 500.0);
            assert_eq!(p, RadarPoint { x: 150.0, y: 150.0 });
        }
    }

    #[test]
    fn test_north_points_straight_up() {
        // Bearing 0 at half range: above center, same x
        let p = project(0.0, 250.0, 150.0, 500.0);
        assert!((p.x - 150.0).abs() < 1e-9);
        assert!((p.y - 75.0).abs() < 1e-9, "y should be 75, got {}", p.y);
    }

    #[test]
    fn test_east_points_right() {
        let p = project(FRAC_PI_2, 250.0, 150.0, 500.0);
        assert!((p.x - 225.0).abs() < 1e-9, "x should be 225, got {}", p.x);
        assert!((p.y - 150.0).abs() < 1e-9);
    }

    #[test]
    fn test_south_points_down() {
        let p = project(PI, 250.0, 150.0, 500.0);
        assert!((p.x - 150.0).abs() < 1e-9);
        assert!((p.y - 225.0).abs() < 1e-9, "y should be 225, got {}", p.y);
    }

    #[test]
    fn test_linear_scale_within_range() {
        let p = project(FRAC_PI_2, 100.0, 150.0, 500.0);
        // 100m of 500m = 1/5 of 150px = 30px east of center
        assert!((p.x - 180.0).abs() < 1e-9);
    }

    #[test]
    fn test_beyond_range_clamps_to_rim() {
        for distance in [500.1, 1_000.0, 1.0e7] {
            let p = project(1.0, distance, 150.0, 500.0);
            let r = distance_from_center(p, 150.0);
            assert!(
                (r - 150.0).abs() < 1e-9,
                "distance {} should clamp to rim, got radius {}",
                distance,
                r
            );
        }
    }

    #[test]
    fn test_exactly_max_distance_is_on_rim() {
        let p = project(0.0, 500.0, 150.0, 500.0);
        assert!((distance_from_center(p, 150.0) - 150.0).abs() < 1e-9);
    }

    #[test]
    fn test_default_geometry_matches_classic_display() {
        let geometry = RadarGeometry::default();
        assert_eq!(geometry.viewport_radius, 150.0);
        assert_eq!(geometry.max_distance_m, 500.0);
        assert_eq!(geometry.ring_count, 5);
        assert_eq!(geometry.ring_interval(), 30.0);
        assert_eq!(geometry.ring_distance_m(), 100.0);
    }

    #[test]
    fn test_ring_radii() {
        let geometry = RadarGeometry::default();
        assert_eq!(geometry.ring_radii(), vec![30.0, 60.0, 90.0, 120.0, 150.0]);
    }

    #[test]
    fn test_heading_relative_marker_displacement() {
        let geometry = RadarGeometry::default();

        // Straight ahead: marker at the center
        assert_eq!(
            geometry.heading_relative_marker(0.0),
            RadarPoint { x: 150.0, y: 150.0 }
        );

        // Halfway right through the forward arc: half a radius right of center
        let right = geometry.heading_relative_marker(45.0);
        assert!((right.x - 225.0).abs() < 1e-9, "x should be 225, got {}", right.x);
        assert_eq!(right.y, 150.0);

        // Edge of the visible arc lands exactly on the rim
        assert_eq!(geometry.heading_relative_marker(-90.0).x, 0.0);
        assert_eq!(geometry.heading_relative_marker(90.0).x, 300.0);
    }

    #[test]
    fn test_heading_relative_marker_outside_arc_leaves_viewport() {
        let geometry = RadarGeometry::default();
        let behind = geometry.heading_relative_marker(135.0);
        assert!(behind.x > 2.0 * geometry.viewport_radius);
    }

    #[test]
    fn test_geometry_project_delegates() {
        let geometry = RadarGeometry::new(100.0, 1_000.0);
        let direct = project(0.5, 400.0, 100.0, 1_000.0);
        assert_eq!(geometry.project(0.5, 400.0), direct);
    }
}
