//! Compass heading normalization
//!
//! Converts raw orientation sensor readings into a canonical compass heading
//! (degrees clockwise from north) and computes signed angular offsets between
//! a target bearing and the current heading.
//!
//! Sensor platforms disagree on conventions. Some report an absolute compass
//! value with a reversed sign; others report a rotation angle that increases
//! counter-clockwise. Both arrive here as a [`HeadingReading`] variant so the
//! conversion happens in one place rather than behind capability sniffing.

use std::fmt;

/// Half-angle of the forward-facing visible arc, in degrees.
///
/// A target whose angular offset is within this many degrees of straight
/// ahead counts as visible on a heading-relative display.
pub const FORWARD_ARC_HALF_ANGLE: f64 = 90.0;

/// A raw orientation reading, tagged with its platform convention.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HeadingReading {
    /// Absolute compass heading with reversed sign convention.
    ///
    /// The platform reports the rotation needed to face north, so the
    /// compass heading is the negation of the reported value.
    Absolute(f64),
    /// Device rotation angle in degrees, increasing counter-clockwise.
    ///
    /// Inverted (`360 - alpha`) to obtain a clockwise-from-north heading.
    Alpha(f64),
}

/// Convert a raw reading into a compass heading in degrees, clockwise from north.
///
/// The result is range-reduced into [0, 360). The source design left the
/// alpha branch unreduced (alpha 0 produced 360); reducing here keeps every
/// downstream consumer working with a single canonical range.
#[inline]
pub fn normalize_heading(reading: HeadingReading) -> f64 {
    let raw = match reading {
        HeadingReading::Absolute(value) => -value,
        HeadingReading::Alpha(alpha) => 360.0 - alpha,
    };
    raw.rem_euclid(360.0)
}

/// Signed angular offset from the current heading to a target bearing.
///
/// Both arguments are in degrees. The result is the shortest signed rotation,
/// in (-180, 180]: positive means the target is to the right of the current
/// heading, negative to the left.
#[inline]
pub fn angular_offset(target_bearing_deg: f64, current_heading_deg: f64) -> f64 {
    let mut offset = target_bearing_deg - current_heading_deg;
    if offset > 180.0 {
        offset -= 360.0;
    } else if offset <= -180.0 {
        // Exactly half a turn is +180, keeping the range half-open
        offset += 360.0;
    }
    offset
}

/// Whether an angular offset falls within the forward-facing visible arc.
#[inline]
pub fn in_forward_arc(offset_deg: f64) -> bool {
    offset_deg.abs() <= FORWARD_ARC_HALF_ANGLE
}

/// Cardinal direction label for a compass readout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompassLabel {
    North,
    East,
    South,
    West,
}

impl fmt::Display for CompassLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::North => write!(f, "North"),
            Self::East => write!(f, "East"),
            Self::South => write!(f, "South"),
            Self::West => write!(f, "West"),
        }
    }
}

/// Discretize a heading into the nearest cardinal direction.
///
/// Uses fixed 90-degree sectors centered on each cardinal, with boundaries at
/// 45, 135, 225 and 315 degrees. There is no hysteresis: a heading
/// oscillating around a boundary flickers between the two labels. That is
/// acceptable for a cosmetic compass readout and deliberately kept simple.
#[inline]
pub fn compass_label(heading_deg: f64) -> CompassLabel {
    let heading = heading_deg.rem_euclid(360.0);
    if heading >= 315.0 || heading < 45.0 {
        CompassLabel::North
    } else if heading < 135.0 {
        CompassLabel::East
    } else if heading < 225.0 {
        CompassLabel::South
    } else {
        CompassLabel::West
    }
}
