//! Status block widget.
//!
//! Three lines under the scope:
//! ```text
//! ┌─ Status ─────────────────────────────────────────────────────┐
//! │ Position : 9.99°E, 53.55°N | Fix: Gps                        │
//! │ Target   : 10.00°E, 53.56°N | Dist: 1.25km | Brg: 032°       │
//! │ Heading  : 010° North | Off: +22° | Ahead: yes               │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//! Lines degrade gracefully while inputs are missing: no fix yet shows a
//! waiting message, no orientation reading leaves the heading line dashed.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget};

use georadar::radar::RadarGeometry;
use georadar::session::{PositionFix, RadarFrame};

/// Widget displaying the textual radar status.
pub struct StatusWidget<'a> {
    frame: Option<&'a RadarFrame>,
    position: Option<PositionFix>,
    geometry: RadarGeometry,
}

impl<'a> StatusWidget<'a> {
    /// Create a new status widget.
    pub fn new(
        frame: Option<&'a RadarFrame>,
        position: Option<PositionFix>,
        geometry: RadarGeometry,
    ) -> Self {
        Self {
            frame,
            position,
            geometry,
        }
    }

    fn label(text: &'static str) -> Span<'static> {
        Span::styled(text, Style::default().fg(Color::DarkGray))
    }

    fn value(text: String) -> Span<'static> {
        Span::styled(text, Style::default().fg(Color::White))
    }

    /// Format a distance with a sensible unit.
    fn format_distance(meters: f64) -> String {
        if meters >= 1_000.0 {
            format!("{:.2}km", meters / 1_000.0)
        } else {
            format!("{:.0}m", meters)
        }
    }

    fn position_line(&self) -> Line<'static> {
        match self.position {
            Some(fix) => Line::from(vec![
                Self::label(" Position : "),
                Self::value(fix.point.to_string()),
                Self::label(" | Fix: "),
                Self::value(format!("{:?}", fix.source)),
            ]),
            None => Line::from(vec![
                Self::label(" Position : "),
                Span::styled("waiting for fix...", Style::default().fg(Color::Yellow)),
            ]),
        }
    }

    fn target_line(&self) -> Line<'static> {
        match self.frame {
            Some(frame) => {
                let distance_color = if frame.beyond_range {
                    Color::Yellow
                } else {
                    Color::Green
                };
                Line::from(vec![
                    Self::label(" Target   : "),
                    Self::value(frame.destination.to_string()),
                    Self::label(" | Dist: "),
                    Span::styled(
                        Self::format_distance(frame.distance_m),
                        Style::default().fg(distance_color),
                    ),
                    Self::label(" | Brg: "),
                    Self::value(format!("{:03.0}\u{00b0}", frame.bearing_deg)),
                ])
            }
            None => Line::from(vec![
                Self::label(" Target   : "),
                Self::value("---".to_string()),
            ]),
        }
    }

    fn heading_line(&self) -> Line<'static> {
        let view = self.frame.and_then(|f| f.heading);
        match view {
            Some(view) => {
                let (ahead, ahead_color) = if view.in_forward_arc {
                    ("yes", Color::Green)
                } else {
                    ("no", Color::Red)
                };
                Line::from(vec![
                    Self::label(" Heading  : "),
                    Self::value(format!("{:03.0}\u{00b0} {}", view.heading_deg, view.compass)),
                    Self::label(" | Off: "),
                    Self::value(format!("{:+.0}\u{00b0}", view.offset_deg)),
                    Self::label(" | Ahead: "),
                    Span::styled(ahead, Style::default().fg(ahead_color)),
                ])
            }
            None => Line::from(vec![
                Self::label(" Heading  : "),
                Self::value("---".to_string()),
            ]),
        }
    }
}

impl Widget for StatusWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = format!(
            " Status ({} rings, {:.0}m each) ",
            self.geometry.ring_count,
            self.geometry.ring_distance_m()
        );
        Paragraph::new(vec![
            self.position_line(),
            self.target_line(),
            self.heading_line(),
        ])
        .block(Block::bordered().title(title))
        .render(area, buf);
    }
}
