//! Radar scope widget.
//!
//! Draws the circular radar: evenly spaced range rings around the observer
//! and the destination marker projected north-up. A marker sitting on the
//! outermost ring in yellow means the destination is beyond the configured
//! range and only its direction is meaningful.
//!
//! Layout:
//! ```text
//! ┌─ Radar ────────────────────┐
//! │         ···○···            │
//! │      ·    ●    ·           │  ● destination marker
//! │         ···○···            │  ○ range rings
//! └────────────────────────────┘
//! ```

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Color;
use ratatui::widgets::canvas::{Canvas, Circle, Points};
use ratatui::widgets::{Block, Widget};

use georadar::radar::{RadarGeometry, RadarPoint};
use georadar::session::RadarFrame;

/// Widget drawing the radar scope.
pub struct RadarScopeWidget<'a> {
    frame: Option<&'a RadarFrame>,
    geometry: RadarGeometry,
}

impl<'a> RadarScopeWidget<'a> {
    /// Create a new scope widget for the given frame and geometry.
    pub fn new(frame: Option<&'a RadarFrame>, geometry: RadarGeometry) -> Self {
        Self { frame, geometry }
    }

    /// Convert viewport pixel coordinates (y down, center at (r, r)) into
    /// canvas coordinates (y up, center at origin).
    fn to_canvas(point: RadarPoint, viewport_radius: f64) -> (f64, f64) {
        (point.x - viewport_radius, viewport_radius - point.y)
    }
}

impl Widget for RadarScopeWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let r = self.geometry.viewport_radius;
        let ring_radii = self.geometry.ring_radii();
        let frame = self.frame;

        let title = match frame {
            Some(f) if f.beyond_range => " Radar (destination beyond range) ".to_string(),
            _ => format!(" Radar ({:.0}m range) ", self.geometry.max_distance_m),
        };

        Canvas::default()
            .block(Block::bordered().title(title))
            .x_bounds([-r, r])
            .y_bounds([-r, r])
            .paint(|ctx| {
                // Range rings around the observer
                for radius in &ring_radii {
                    ctx.draw(&Circle {
                        x: 0.0,
                        y: 0.0,
                        radius: *radius,
                        color: Color::Green,
                    });
                }

                // Observer at the center
                let center = [(0.0, 0.0)];
                ctx.draw(&Points {
                    coords: &center,
                    color: Color::White,
                });

                // Destination marker
                if let Some(f) = frame {
                    let marker_color = if f.beyond_range {
                        Color::Yellow
                    } else {
                        Color::Red
                    };
                    let coords = [Self::to_canvas(f.marker, r)];
                    ctx.draw(&Points {
                        coords: &coords,
                        color: marker_color,
                    });
                }
            })
            .render(area, buf);
    }
}
