//! Sensor Listener - UDP listener for position and orientation data.
//!
//! Listens for UDP sensor broadcasts and converts them to immutable readings
//! for the radar session. The listener never touches session state itself; it
//! forwards readings over a channel so the consumer decides what to do with
//! them.
//!
//! # Example
//!
//! ```ignore
//! let (tx, mut rx) = mpsc::channel(16);
//! let listener = SensorListener::new(SensorListenerConfig::default(), tx);
//! tokio::spawn(listener.run(cancellation_token));
//!
//! while let Some(reading) = rx.recv().await {
//!     match reading {
//!         SensorReading::Position(fix) => session.receive_position(fix),
//!         SensorReading::Heading(h) => session.receive_heading(h),
//!     }
//! }
//! ```

mod protocol;

pub use protocol::{parse_packet, Sentence};

use std::time::{Duration, Instant};

use tokio::net::UdpSocket;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, trace, warn};

use crate::geo::GeoPoint;
use crate::heading::HeadingReading;
use crate::session::{FixSource, PositionFix};

/// Maximum packet size we expect.
const MAX_PACKET_SIZE: usize = 1024;

/// Convention for interpreting the wire orientation angle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeadingConvention {
    /// Device rotation angle, counter-clockwise (device-orientation style).
    #[default]
    Alpha,
    /// Absolute compass value with reversed sign.
    Absolute,
}

/// Sensor listener configuration.
#[derive(Debug, Clone)]
pub struct SensorListenerConfig {
    /// UDP port to listen on (default: 49002, the common sim broadcast port).
    pub port: u16,

    /// Minimum interval between forwarded position fixes.
    pub min_update_interval: Duration,

    /// How to interpret the orientation angle on the wire.
    pub heading_convention: HeadingConvention,
}

impl Default for SensorListenerConfig {
    fn default() -> Self {
        Self {
            port: 49002,
            min_update_interval: Duration::from_millis(500),
            heading_convention: HeadingConvention::default(),
        }
    }
}

/// Error type for the sensor listener.
#[derive(Debug, thiserror::Error)]
pub enum SensorError {
    /// Failed to bind the UDP socket.
    #[error("Failed to bind UDP socket on port {port}: {source}")]
    SocketBind {
        port: u16,
        #[source]
        source: std::io::Error,
    },
}

/// An immutable sensor reading forwarded to the session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SensorReading {
    /// A position fix.
    Position(PositionFix),
    /// A raw orientation reading, tagged with its convention.
    Heading(HeadingReading),
}

impl SensorReading {
    /// Apply this reading to a radar session.
    pub fn apply_to(self, session: &crate::session::RadarSession) {
        match self {
            SensorReading::Position(fix) => session.receive_position(fix),
            SensorReading::Heading(reading) => session.receive_heading(reading),
        }
    }
}

/// UDP sensor listener.
///
/// Receives position/orientation sentences and sends [`SensorReading`]
/// values to the consumer via a channel.
pub struct SensorListener {
    config: SensorListenerConfig,
    reading_tx: mpsc::Sender<SensorReading>,
}

impl SensorListener {
    /// Create a new sensor listener.
    pub fn new(config: SensorListenerConfig, reading_tx: mpsc::Sender<SensorReading>) -> Self {
        Self { config, reading_tx }
    }

    /// Create with default configuration.
    pub fn with_defaults(reading_tx: mpsc::Sender<SensorReading>) -> Self {
        Self::new(SensorListenerConfig::default(), reading_tx)
    }

    /// Get the configured port.
    pub fn port(&self) -> u16 {
        self.config.port
    }

    /// Run the listener until cancelled.
    ///
    /// Binds the UDP socket, then forwards parsed readings. Position fixes
    /// are rate-limited by `min_update_interval`; orientation readings pass
    /// through unthrottled because they are cheap to apply.
    pub async fn run(self, cancellation_token: CancellationToken) -> Result<(), SensorError> {
        let addr = format!("0.0.0.0:{}", self.config.port);
        let socket = UdpSocket::bind(&addr)
            .await
            .map_err(|source| SensorError::SocketBind {
                port: self.config.port,
                source,
            })?;

        info!(port = self.config.port, "Sensor listener started");

        let mut buf = [0u8; MAX_PACKET_SIZE];
        let mut last_position: Option<Instant> = None;

        loop {
            tokio::select! {
                biased;

                _ = cancellation_token.cancelled() => {
                    info!("Sensor listener shutting down");
                    return Ok(());
                }

                result = socket.recv_from(&mut buf) => {
                    let (len, _peer) = match result {
                        Ok(r) => r,
                        Err(e) => {
                            warn!(error = %e, "Socket receive failed");
                            continue;
                        }
                    };

                    let Some(sentence) = parse_packet(&buf[..len]) else {
                        trace!(len, "Dropped unparseable packet");
                        continue;
                    };

                    let reading = match sentence {
                        Sentence::Position { longitude, latitude } => {
                            // Throttle position fixes to the configured rate
                            if let Some(last) = last_position {
                                if last.elapsed() < self.config.min_update_interval {
                                    trace!("Position fix throttled");
                                    continue;
                                }
                            }
                            last_position = Some(Instant::now());

                            SensorReading::Position(PositionFix::now(
                                GeoPoint::new(longitude, latitude),
                                FixSource::Gps,
                            ))
                        }
                        Sentence::Orientation { angle } => {
                            let reading = match self.config.heading_convention {
                                HeadingConvention::Alpha => HeadingReading::Alpha(angle),
                                HeadingConvention::Absolute => HeadingReading::Absolute(angle),
                            };
                            SensorReading::Heading(reading)
                        }
                    };

                    if self.reading_tx.send(reading).await.is_err() {
                        debug!("Reading channel closed, stopping listener");
                        return Ok(());
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = SensorListenerConfig::default();
        assert_eq!(config.port, 49002);
        assert_eq!(config.min_update_interval, Duration::from_millis(500));
        assert_eq!(config.heading_convention, HeadingConvention::Alpha);
    }

    #[test]
    fn test_listener_reports_port() {
        let (tx, _rx) = mpsc::channel(1);
        let listener = SensorListener::with_defaults(tx);
        assert_eq!(listener.port(), 49002);
    }

    #[tokio::test]
    async fn test_bind_error_on_occupied_port() {
        // Bind a socket, then ask the listener for the same port
        let held = UdpSocket::bind("0.0.0.0:0").await.unwrap();
        let port = held.local_addr().unwrap().port();

        let (tx, _rx) = mpsc::channel(1);
        let listener = SensorListener::new(
            SensorListenerConfig {
                port,
                ..Default::default()
            },
            tx,
        );

        // Rebinding the same port must fail with a SocketBind error.
        // SO_REUSEADDR does not apply; tokio binds without it on UDP.
        let result = listener.run(CancellationToken::new()).await;
        match result {
            Err(SensorError::SocketBind { port: p, .. }) => assert_eq!(p, port),
            Ok(()) => panic!("expected SocketBind error, listener ran"),
        }
    }

    #[tokio::test]
    async fn test_receives_and_forwards_readings() {
        let (tx, mut rx) = mpsc::channel(16);
        let listener_socket = UdpSocket::bind("127.0.0.1:0").await.unwrap();
        let port = listener_socket.local_addr().unwrap().port();
        drop(listener_socket);

        let listener = SensorListener::new(
            SensorListenerConfig {
                port,
                min_update_interval: Duration::from_millis(0),
                heading_convention: HeadingConvention::Alpha,
            },
            tx,
        );

        let token = CancellationToken::new();
        let handle = tokio::spawn(listener.run(token.clone()));

        // Give the listener a moment to bind
        tokio::time::sleep(Duration::from_millis(50)).await;

        let sender = UdpSocket::bind("127.0.0.1:0").await.unwrap();
        sender
            .send_to(
                b"XGPSGeoRadar,9.9937,53.5511,12.0,88.5,2.4",
                ("127.0.0.1", port),
            )
            .await
            .unwrap();
        sender
            .send_to(b"XATTGeoRadar,310.0,0.0,0.0", ("127.0.0.1", port))
            .await
            .unwrap();

        let first = tokio::time::timeout(Duration::from_secs(2), rx.recv())
            .await
            .expect("timed out waiting for position")
            .expect("channel open");
        match first {
            SensorReading::Position(fix) => {
                assert_eq!(fix.point, GeoPoint::new(9.9937, 53.5511));
                assert_eq!(fix.source, FixSource::Gps);
            }
            other => panic!("expected position first, got {:?}", other),
        }

        let second = tokio::time::timeout(Duration::from_secs(2), rx.recv())
            .await
            .expect("timed out waiting for heading")
            .expect("channel open");
        assert_eq!(second, SensorReading::Heading(HeadingReading::Alpha(310.0)));

        token.cancel();
        handle.await.unwrap().unwrap();
    }
}
