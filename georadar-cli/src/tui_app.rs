//! TUI application loop for the live radar view.
//!
//! Owns terminal setup/teardown and the redraw/input loop. Rendering is
//! delegated to the widgets in [`crate::ui`]; all radar math happens in the
//! library through [`RadarSession::frame`].

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use georadar::session::RadarSession;

use crate::error::CliError;
use crate::ui;

/// Interval between input polls; also caps the redraw rate.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Run the radar TUI until the user quits or the token is cancelled.
///
/// Quits on `q`, `Esc` or `Ctrl-C`.
pub async fn run_tui(
    session: &RadarSession,
    cancellation_token: CancellationToken,
) -> Result<(), CliError> {
    enable_raw_mode().map_err(CliError::Terminal)?;
    io::stdout()
        .execute(EnterAlternateScreen)
        .map_err(CliError::Terminal)?;

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend).map_err(CliError::Terminal)?;

    // The poll/draw loop is synchronous; keep it off the async workers so
    // the sensor listener and reading pump stay responsive
    let result =
        tokio::task::block_in_place(|| event_loop(&mut terminal, session, &cancellation_token));

    // Always restore the terminal, even when the loop failed
    let _ = disable_raw_mode();
    let _ = io::stdout().execute(LeaveAlternateScreen);

    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    session: &RadarSession,
    cancellation_token: &CancellationToken,
) -> Result<(), CliError> {
    loop {
        if cancellation_token.is_cancelled() {
            debug!("TUI loop cancelled");
            return Ok(());
        }

        terminal
            .draw(|frame| ui::render(frame, session))
            .map_err(CliError::Terminal)?;

        if !event::poll(POLL_INTERVAL).map_err(CliError::Terminal)? {
            continue;
        }

        if let Event::Key(key) = event::read().map_err(CliError::Terminal)? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            let quit = matches!(key.code, KeyCode::Char('q') | KeyCode::Esc)
                || (key.code == KeyCode::Char('c')
                    && key.modifiers.contains(KeyModifiers::CONTROL));
            if quit {
                debug!("Quit requested");
                return Ok(());
            }
        }
    }
}
