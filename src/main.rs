// Folio - a portfolio page for the terminal
//
// Renders a one-page portfolio (hero, about, projects, contact, footer) and
// hosts two independent "Email" contact widgets that disclose an address,
// copy it to the clipboard and show a self-dismissing toast.
//
// Architecture:
// - Widget: pure disclosure state machine plus a cancellable dismiss timer
// - Clipboard: system clipboard (arboard) or an in-memory sink
// - TUI (ratatui): draws the page and routes keys to the focused widget
// - Demo: headless scripted walkthrough of both widgets
// - Event system: timers signal the page over an mpsc channel

mod cli;
mod clipboard;
mod config;
mod demo;
mod logging;
mod theme;
mod tui;
mod widget;

use anyhow::Result;
use cli::Mode;
use config::{Config, LogRotation};
use logging::{LogBuffer, TuiLogLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize tracing with conditional output
///
/// In TUI mode logs are captured to the buffer (prevents garbling the display),
/// headless they go to stderr. File logging optionally adds a rotating JSON
/// log. The returned guard must live as long as the program so logs flush.
///
/// Precedence: RUST_LOG env var > config file > default "info"
fn init_tracing(
    config: &Config,
    headless: bool,
    log_buffer: &LogBuffer,
) -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let default_filter = format!("folio={}", config.logging.level);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into());

    let tui_layer = (!headless).then(|| TuiLogLayer::new(log_buffer.clone()));
    let stderr_layer =
        headless.then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    let mut guard = None;
    let file_layer = if config.logging.file_enabled {
        match std::fs::create_dir_all(&config.logging.file_dir) {
            Ok(()) => {
                let dir = &config.logging.file_dir;
                let prefix = &config.logging.file_prefix;
                let file_appender = match config.logging.file_rotation {
                    LogRotation::Hourly => tracing_appender::rolling::hourly(dir, prefix),
                    LogRotation::Daily => tracing_appender::rolling::daily(dir, prefix),
                    LogRotation::Never => tracing_appender::rolling::never(dir, prefix),
                };

                // Writes happen in a background thread
                let (non_blocking, file_guard) = tracing_appender::non_blocking(file_appender);
                guard = Some(file_guard);

                Some(
                    tracing_subscriber::fmt::layer()
                        .json()
                        .with_writer(non_blocking)
                        .with_ansi(false),
                )
            }
            Err(e) => {
                eprintln!(
                    "Warning: Could not create log directory {:?}: {}",
                    config.logging.file_dir, e
                );
                None
            }
        }
    } else {
        None
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tui_layer)
        .with(stderr_layer)
        .with(file_layer)
        .init();

    guard
}

#[tokio::main]
async fn main() -> Result<()> {
    // Handle CLI commands first (config --show, --reset, --edit, --path)
    let Some(mode) = cli::handle_cli() else {
        return Ok(());
    };

    // Ensure config template exists (helps users discover options)
    Config::ensure_config_exists();

    let config = Config::from_env();
    let headless = mode == Mode::Demo || !config.enable_tui;

    let log_buffer = LogBuffer::new();
    let _file_guard = init_tracing(&config, headless, &log_buffer);

    tracing::debug!(
        theme = %config.theme,
        policy = config.contact.copy_policy.as_str(),
        clipboard = config.contact.clipboard.as_str(),
        "Configuration loaded"
    );

    if headless {
        demo::run_demo(&config.profile.email, config.contact.copy_policy).await;
        return Ok(());
    }

    let clipboard = clipboard::from_backend(config.contact.clipboard);
    tracing::info!("Using {} clipboard", clipboard.name());

    tui::run_tui(config, log_buffer, clipboard).await
}
