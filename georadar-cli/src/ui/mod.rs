//! Terminal UI for the live radar view.
//!
//! A circular scope with range rings and the destination marker, plus a
//! status block showing position, distance, bearing and compass heading.

mod radar_scope;
mod status;

pub use radar_scope::RadarScopeWidget;
pub use status::StatusWidget;

use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::Frame;

use georadar::session::RadarSession;

/// Height of the status block in rows.
const STATUS_HEIGHT: u16 = 5;

/// Render one frame of the radar view.
pub fn render(frame: &mut Frame, session: &RadarSession) {
    let areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(10), Constraint::Length(STATUS_HEIGHT)])
        .split(frame.area());

    let radar_frame = session.frame();
    let geometry = session.geometry();

    frame.render_widget(
        RadarScopeWidget::new(radar_frame.as_ref(), geometry),
        areas[0],
    );
    frame.render_widget(
        StatusWidget::new(radar_frame.as_ref(), session.position(), geometry),
        areas[1],
    );
}
