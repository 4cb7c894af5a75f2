//! Sensor sentence parsing.
//!
//! The listener accepts ForeFlight-style comma-separated text sentences:
//!
//! - `XGPS<sim>,lon,lat,alt_m,track,speed_m/s` - position fix
//! - `XATT<sim>,heading,pitch,roll` - orientation reading
//!
//! Only the fields the radar needs are extracted. Malformed packets parse to
//! `None` and are dropped by the caller; a bad sentence is never an error.

use tracing::trace;

/// A parsed sensor sentence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Sentence {
    /// Position in decimal degrees.
    Position { longitude: f64, latitude: f64 },
    /// Raw orientation angle in degrees, convention decided by the listener config.
    Orientation { angle: f64 },
}

/// Parse a sensor packet (auto-detects sentence type).
pub fn parse_packet(data: &[u8]) -> Option<Sentence> {
    if data.len() >= 4 {
        if &data[0..4] == b"XGPS" {
            return parse_position(data);
        }
        if &data[0..4] == b"XATT" {
            return parse_orientation(data);
        }
    }
    None
}

/// Parse an XGPS position sentence.
///
/// Format: `XGPS<sim>,lon,lat,alt_m,track,speed_m/s`
fn parse_position(data: &[u8]) -> Option<Sentence> {
    let text = std::str::from_utf8(data).ok()?;

    let parts: Vec<&str> = text.split(',').collect();
    if parts.len() < 3 {
        trace!("XGPS packet too short: {} parts", parts.len());
        return None;
    }

    let longitude: f64 = parts[1].trim().parse().ok()?;
    let latitude: f64 = parts[2].trim().parse().ok()?;

    Some(Sentence::Position {
        longitude,
        latitude,
    })
}

/// Parse an XATT orientation sentence.
///
/// Format: `XATT<sim>,heading,pitch,roll`
fn parse_orientation(data: &[u8]) -> Option<Sentence> {
    let text = std::str::from_utf8(data).ok()?;

    let parts: Vec<&str> = text.split(',').collect();
    if parts.len() < 2 {
        trace!("XATT packet too short: {} parts", parts.len());
        return None;
    }

    let angle: f64 = parts[1].trim().parse().ok()?;

    Some(Sentence::Orientation { angle })
}
