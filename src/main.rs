//! maiku: a minimalist terminal haiku viewer
//!
//! Up/down to pick a poem, q to quit.

use anyhow::{Context, Result};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use std::fs::OpenOptions;
use std::io;
use std::panic;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;
use tracing_subscriber::filter::filter_fn;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use maiku::config::LogConfig;
use maiku::{App, ViewerConfig};

/// Set while the alternate screen is up; stderr logging is muted meanwhile
static TUI_ACTIVE: AtomicBool = AtomicBool::new(false);

fn set_tui_active(active: bool) {
    TUI_ACTIVE.store(active, Ordering::Relaxed);
}

fn stderr_logging_enabled() -> bool {
    !TUI_ACTIVE.load(Ordering::Relaxed)
}

/// Setup the terminal for TUI mode
fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("failed to create terminal")?;
    terminal.hide_cursor().context("failed to hide cursor")?;
    set_tui_active(true);
    Ok(terminal)
}

/// Restore the terminal to normal mode.
///
/// Every step runs even if an earlier one fails; the first error is returned.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> io::Result<()> {
    set_tui_active(false);
    first_error([
        disable_raw_mode(),
        execute!(terminal.backend_mut(), LeaveAlternateScreen),
        terminal.show_cursor(),
    ])
}

fn first_error<const N: usize>(results: [io::Result<()>; N]) -> io::Result<()> {
    results.into_iter().collect()
}

/// Best-effort restore when no `Terminal` exists (setup failure, panic)
fn restore_raw_terminal() {
    set_tui_active(false);
    let _ = disable_raw_mode();
    let _ = execute!(
        io::stdout(),
        LeaveAlternateScreen,
        crossterm::cursor::Show
    );
}

/// Initialize logging with RUST_LOG environment variable support
fn init_logging(config: &LogConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let file_layer = match &config.file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("failed to open log file {}", path.display()))?;
            Some(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
        }
        None => None,
    };

    let stderr_layer = file_layer.is_none().then(|| {
        tracing_subscriber::fmt::layer()
            .with_writer(io::stderr)
            .with_filter(filter_fn(|_| stderr_logging_enabled()))
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(stderr_layer)
        .init();

    Ok(())
}

/// Install a panic hook that restores the terminal before printing the panic
fn install_panic_hook() {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        restore_raw_terminal();
        original_hook(panic_info);
    }));
}

fn main() -> Result<()> {
    let (config, config_error) = match ViewerConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (ViewerConfig::default(), Some(e)),
    };

    init_logging(&config.log)?;

    if let Some(e) = config_error {
        tracing::warn!("Ignoring configuration, using defaults: {}", e);
    }

    install_panic_hook();

    tracing::info!("Starting maiku");

    let mut terminal = match setup_terminal() {
        Ok(terminal) => terminal,
        Err(e) => {
            // Undo whatever part of the setup succeeded
            restore_raw_terminal();
            return Err(e.context("failed to initialize terminal"));
        }
    };

    let result = App::new().run(&mut terminal);

    // Restore terminal (always, even on error)
    restore_terminal(&mut terminal).context("failed to restore terminal")?;

    result?;

    tracing::info!("maiku exited cleanly");
    Ok(())
}
