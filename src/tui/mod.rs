// TUI module - Terminal User Interface
//
// This module manages the terminal page using ratatui. It handles:
// - Terminal initialization and cleanup
// - Event loop (keyboard input, redraw ticks, widget timer signals)
// - Rendering the page

pub mod app;
pub mod components;
pub mod input;
pub mod traits;
pub mod views;

use crate::clipboard::SharedClipboard;
use crate::config::Config;
use crate::logging::LogBuffer;
use crate::widget::WidgetSignal;
use anyhow::{Context, Result};
use app::App;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;
use tokio::sync::mpsc;

/// Capacity of the widget signal channel
const SIGNAL_BUFFER: usize = 16;

/// Run the TUI
///
/// Sets up the terminal, runs the event loop until the user quits, then
/// unmounts the widgets and restores the terminal.
pub async fn run_tui(config: Config, log_buffer: LogBuffer, clipboard: SharedClipboard) -> Result<()> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to setup terminal")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let (signal_tx, mut signal_rx) = mpsc::channel(SIGNAL_BUFFER);
    let mut app = App::new(&config, clipboard, signal_tx, log_buffer);

    let result = run_event_loop(&mut terminal, &mut app, &mut signal_rx).await;

    // No dismiss may fire into a page that no longer exists
    app.shutdown();

    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

/// Main event loop
///
/// Waits on three sources with tokio::select!:
/// 1. Keyboard input
/// 2. Timer ticks (periodic redraws, e.g. after a resize)
/// 3. Dismiss signals from widget timers
async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    signal_rx: &mut mpsc::Receiver<WidgetSignal>,
) -> Result<()> {
    let mut tick_interval = tokio::time::interval(Duration::from_millis(250));

    loop {
        terminal
            .draw(|f| views::draw(f, app))
            .context("Failed to draw terminal")?;

        tokio::select! {
            _ = async {
                if event::poll(Duration::from_millis(10)).unwrap_or(false) {
                    if let Ok(Event::Key(key_event)) = event::read() {
                        app.handle_key_event(key_event);
                    }
                }
            } => {}

            _ = tick_interval.tick() => {}

            Some(signal) = signal_rx.recv() => {
                app.handle_signal(signal);
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
