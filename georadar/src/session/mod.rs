//! Radar session - combines position, heading and destination into frames.
//!
//! The session is the only stateful part of the system. It owns the
//! last-known position, the last normalized heading, the user-selected
//! destination and the broadcast throttle timestamp; the geometry core stays
//! a pure consumer of individual values.
//!
//! Every frame is recomputed from scratch from the current inputs. No derived
//! state is cached between updates.
//!
//! # Rate Limiting
//!
//! Broadcasts are rate-limited to a configurable minimum interval so a fast
//! sensor cannot flood subscribers. Direct [`RadarSession::frame`] queries
//! are never throttled.
//!
//! # Usage
//!
//! ```ignore
//! let session = RadarSession::new(RadarGeometry::default());
//! session.set_destination(GeoPoint::new(9.99, 53.55));
//!
//! let mut rx = session.subscribe();
//! session.receive_position(PositionFix::now(GeoPoint::new(9.98, 53.54), FixSource::Gps));
//! session.receive_heading(HeadingReading::Alpha(310.0));
//!
//! let frame = rx.recv().await?;
//! ```

use std::sync::{Arc, RwLock};
use std::time::{Duration, Instant};

use tokio::sync::broadcast;
use tracing::{debug, info};

use crate::geo::{self, GeoPoint};
use crate::heading::{
    angular_offset, compass_label, in_forward_arc, normalize_heading, CompassLabel, HeadingReading,
};
use crate::radar::{RadarGeometry, RadarPoint};

/// Capacity of the frame broadcast channel.
const BROADCAST_CAPACITY: usize = 16;

/// Where a position fix came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixSource {
    /// GPS sensor stream.
    Gps,
    /// User-entered coordinates.
    Manual,
}

/// An immutable position reading.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionFix {
    /// Observer position.
    pub point: GeoPoint,
    /// When the fix was measured.
    pub timestamp: Instant,
    /// Which input produced the fix.
    pub source: FixSource,
}

impl PositionFix {
    /// Create a fix timestamped now.
    pub fn now(point: GeoPoint, source: FixSource) -> Self {
        Self {
            point,
            timestamp: Instant::now(),
            source,
        }
    }
}

/// Heading-derived portion of a radar frame.
///
/// Present only when at least one orientation reading has arrived.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeadingView {
    /// Normalized compass heading in degrees, clockwise from north.
    pub heading_deg: f64,
    /// Cardinal label for the compass readout.
    pub compass: CompassLabel,
    /// Signed offset from heading to destination bearing, in (-180, 180].
    pub offset_deg: f64,
    /// True when the destination is within the forward visible arc.
    pub in_forward_arc: bool,
    /// Marker for a heading-relative display: signed horizontal displacement
    /// from the center, proportional to the offset. Only meaningful when the
    /// destination is in the forward arc.
    pub relative_marker: RadarPoint,
}

/// A complete radar snapshot for one update tick.
#[derive(Debug, Clone, PartialEq)]
pub struct RadarFrame {
    /// Observer position the frame was computed from.
    pub position: GeoPoint,
    /// Destination the frame was computed against.
    pub destination: GeoPoint,
    /// Great-circle distance to the destination, in meters.
    pub distance_m: f64,
    /// Initial bearing to the destination, in radians [0, 2pi).
    pub bearing_rad: f64,
    /// Initial bearing in degrees [0, 360).
    pub bearing_deg: f64,
    /// Destination marker in north-up viewport coordinates.
    pub marker: RadarPoint,
    /// Whether the destination is beyond the viewport range (marker clamped to rim).
    pub beyond_range: bool,
    /// Heading-derived view, when orientation data is available.
    pub heading: Option<HeadingView>,
}

/// Configuration for the radar session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Minimum interval between frame broadcasts.
    pub min_broadcast_interval: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            min_broadcast_interval: Duration::from_millis(500),
        }
    }
}

/// Internal mutable state.
struct SessionState {
    position: Option<PositionFix>,
    heading_deg: Option<f64>,
    destination: Option<GeoPoint>,
    last_broadcast: Option<Instant>,
}

/// Stateful radar session.
///
/// Thread-safe; clones share the same underlying state.
#[derive(Clone)]
pub struct RadarSession {
    state: Arc<RwLock<SessionState>>,
    broadcast_tx: broadcast::Sender<RadarFrame>,
    geometry: RadarGeometry,
    config: SessionConfig,
}

impl RadarSession {
    /// Create a session with the given viewport geometry and default config.
    pub fn new(geometry: RadarGeometry) -> Self {
        Self::with_config(geometry, SessionConfig::default())
    }

    /// Create a session with custom configuration.
    pub fn with_config(geometry: RadarGeometry, config: SessionConfig) -> Self {
        let (broadcast_tx, _) = broadcast::channel(BROADCAST_CAPACITY);
        Self {
            state: Arc::new(RwLock::new(SessionState {
                position: None,
                heading_deg: None,
                destination: None,
                last_broadcast: None,
            })),
            broadcast_tx,
            geometry,
            config,
        }
    }

    /// Viewport geometry this session projects into.
    pub fn geometry(&self) -> RadarGeometry {
        self.geometry
    }

    /// Subscribe to frame broadcasts.
    pub fn subscribe(&self) -> broadcast::Receiver<RadarFrame> {
        self.broadcast_tx.subscribe()
    }

    /// Set the destination the radar tracks.
    pub fn set_destination(&self, destination: GeoPoint) {
        let mut state = self.state.write().unwrap();
        info!(%destination, "Destination set");
        state.destination = Some(destination);
        self.maybe_broadcast(&mut state);
    }

    /// Clear the destination; subsequent frames are unavailable until a new one is set.
    pub fn clear_destination(&self) {
        let mut state = self.state.write().unwrap();
        info!("Destination cleared");
        state.destination = None;
    }

    /// Currently tracked destination, if any.
    pub fn destination(&self) -> Option<GeoPoint> {
        self.state.read().unwrap().destination
    }

    /// Receive a position fix from a sensor stream or manual entry.
    pub fn receive_position(&self, fix: PositionFix) {
        let mut state = self.state.write().unwrap();
        debug!(point = %fix.point, source = ?fix.source, "Position updated");
        state.position = Some(fix);
        self.maybe_broadcast(&mut state);
    }

    /// Receive a raw orientation reading; normalized on arrival.
    pub fn receive_heading(&self, reading: HeadingReading) {
        let heading = normalize_heading(reading);
        let mut state = self.state.write().unwrap();
        debug!(heading, "Heading updated");
        state.heading_deg = Some(heading);
        self.maybe_broadcast(&mut state);
    }

    /// Last-known position fix, if any.
    pub fn position(&self) -> Option<PositionFix> {
        self.state.read().unwrap().position
    }

    /// Last normalized heading in degrees, if any orientation reading arrived.
    pub fn heading(&self) -> Option<f64> {
        self.state.read().unwrap().heading_deg
    }

    /// Compute the current frame.
    ///
    /// Returns `None` until both a position fix and a destination are known.
    /// Never throttled; every call recomputes from the current inputs.
    pub fn frame(&self) -> Option<RadarFrame> {
        let state = self.state.read().unwrap();
        Self::compute_frame(&state, &self.geometry)
    }

    /// Recompute and broadcast a frame, honoring the rate limit.
    fn maybe_broadcast(&self, state: &mut SessionState) {
        let Some(frame) = Self::compute_frame(state, &self.geometry) else {
            return;
        };

        if let Some(last) = state.last_broadcast {
            if last.elapsed() < self.config.min_broadcast_interval {
                return;
            }
        }

        state.last_broadcast = Some(Instant::now());
        // Send fails only when no subscriber is listening; that is fine
        let _ = self.broadcast_tx.send(frame);
    }

    fn compute_frame(state: &SessionState, geometry: &RadarGeometry) -> Option<RadarFrame> {
        let position = state.position?.point;
        let destination = state.destination?;

        let distance_m = geo::distance(position, destination);
        let bearing_rad = geo::initial_bearing(position, destination);
        let bearing_deg = bearing_rad.to_degrees();
        let marker = geometry.project(bearing_rad, distance_m);
        let beyond_range = distance_m > geometry.max_distance_m;

        let heading = state.heading_deg.map(|heading_deg| {
            let offset_deg = angular_offset(bearing_deg, heading_deg);
            HeadingView {
                heading_deg,
                compass: compass_label(heading_deg),
                offset_deg,
                in_forward_arc: in_forward_arc(offset_deg),
                relative_marker: geometry.heading_relative_marker(offset_deg),
            }
        });

        Some(RadarFrame {
            position,
            destination,
            distance_m,
            bearing_rad,
            bearing_deg,
            marker,
            beyond_range,
            heading,
        })
    }
}

impl std::fmt::Debug for RadarSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.read().unwrap();
        f.debug_struct("RadarSession")
            .field("position", &state.position)
            .field("heading_deg", &state.heading_deg)
            .field("destination", &state.destination)
            .field("geometry", &self.geometry)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> RadarSession {
        RadarSession::new(RadarGeometry::default())
    }

    #[test]
    fn test_frame_unavailable_without_inputs() {
        let s = session();
        assert!(s.frame().is_none());

        // Position alone is not enough
        s.receive_position(PositionFix::now(GeoPoint::new(0.0, 0.0), FixSource::Gps));
        assert!(s.frame().is_none());
    }

    #[test]
    fn test_frame_available_with_position_and_destination() {
        let s = session();
        s.receive_position(PositionFix::now(GeoPoint::new(0.0, 0.0), FixSource::Gps));
        s.set_destination(GeoPoint::new(0.0, 1.0));

        let frame = s.frame().expect("frame should be available");
        assert!((frame.distance_m - 111_195.0).abs() < 50.0);
        assert!(frame.bearing_rad.abs() < 1e-9, "destination is due north");
        assert!(frame.beyond_range, "111km exceeds the 500m default range");
        assert!(frame.heading.is_none(), "no orientation reading yet");
    }

    #[test]
    fn test_clear_destination_removes_frame() {
        let s = session();
        s.receive_position(PositionFix::now(GeoPoint::new(0.0, 0.0), FixSource::Gps));
        s.set_destination(GeoPoint::new(0.0, 1.0));
        assert!(s.frame().is_some());

        s.clear_destination();
        assert!(s.frame().is_none());
        assert!(s.destination().is_none());
    }

    #[test]
    fn test_heading_view_populated_after_reading() {
        let s = session();
        s.receive_position(PositionFix::now(GeoPoint::new(0.0, 0.0), FixSource::Gps));
        s.set_destination(GeoPoint::new(0.0, 1.0)); // due north
        s.receive_heading(HeadingReading::Alpha(350.0)); // heading 10

        let view = s.frame().unwrap().heading.expect("heading view");
        assert!((view.heading_deg - 10.0).abs() < 1e-9);
        assert_eq!(view.compass, CompassLabel::North);
        assert!((view.offset_deg - (-10.0)).abs() < 1e-9);
        assert!(view.in_forward_arc);

        // -10 of the 90 degree arc: one ninth of the radius left of center
        let expected_x = 150.0 - (10.0 / 90.0) * 150.0;
        assert!((view.relative_marker.x - expected_x).abs() < 1e-9);
        assert!((view.relative_marker.y - 150.0).abs() < 1e-9);
    }

    #[test]
    fn test_destination_behind_is_outside_forward_arc() {
        let s = session();
        s.receive_position(PositionFix::now(GeoPoint::new(0.0, 10.0), FixSource::Gps));
        s.set_destination(GeoPoint::new(0.0, 9.0)); // due south
        s.receive_heading(HeadingReading::Alpha(0.0)); // facing north

        let view = s.frame().unwrap().heading.unwrap();
        assert!((view.offset_deg - 180.0).abs() < 1e-6);
        assert!(!view.in_forward_arc);
    }

    #[test]
    fn test_frame_recomputed_per_query() {
        let s = session();
        s.set_destination(GeoPoint::new(0.0, 1.0));
        s.receive_position(PositionFix::now(GeoPoint::new(0.0, 0.0), FixSource::Gps));
        let first = s.frame().unwrap();

        s.receive_position(PositionFix::now(GeoPoint::new(0.0, 0.5), FixSource::Gps));
        let second = s.frame().unwrap();

        assert!(second.distance_m < first.distance_m);
    }

    #[test]
    fn test_nearby_destination_within_range() {
        let s = session();
        // ~222m east at the equator
        s.receive_position(PositionFix::now(GeoPoint::new(0.0, 0.0), FixSource::Gps));
        s.set_destination(GeoPoint::new(0.002, 0.0));

        let frame = s.frame().unwrap();
        assert!(!frame.beyond_range, "~222m is inside the 500m range");
        assert!(
            frame.marker.x > 150.0,
            "eastern destination plots right of center"
        );
        assert!((frame.marker.y - 150.0).abs() < 1e-6);
    }

    #[tokio::test]
    async fn test_broadcast_on_update() {
        let s = session();
        let mut rx = s.subscribe();

        s.set_destination(GeoPoint::new(0.0, 1.0));
        s.receive_position(PositionFix::now(GeoPoint::new(0.0, 0.0), FixSource::Gps));

        let frame = rx.try_recv().expect("frame should be broadcast");
        assert!(frame.bearing_rad.abs() < 1e-9);
    }

    #[tokio::test]
    async fn test_broadcast_throttled() {
        let s = RadarSession::with_config(
            RadarGeometry::default(),
            SessionConfig {
                min_broadcast_interval: Duration::from_secs(60),
            },
        );
        let mut rx = s.subscribe();

        s.set_destination(GeoPoint::new(0.0, 1.0));
        s.receive_position(PositionFix::now(GeoPoint::new(0.0, 0.0), FixSource::Gps));
        s.receive_position(PositionFix::now(GeoPoint::new(0.0, 0.5), FixSource::Gps));
        s.receive_position(PositionFix::now(GeoPoint::new(0.0, 0.9), FixSource::Gps));

        // Only the first update inside the interval gets through
        assert!(rx.try_recv().is_ok());
        assert!(rx.try_recv().is_err());

        // frame() is never throttled and reflects the latest input
        let frame = s.frame().unwrap();
        assert_eq!(frame.position, GeoPoint::new(0.0, 0.9));
    }

    #[test]
    fn test_cloned_sessions_share_state() {
        let s = session();
        let clone = s.clone();

        clone.set_destination(GeoPoint::new(1.0, 1.0));
        assert_eq!(s.destination(), Some(GeoPoint::new(1.0, 1.0)));
    }
}
