//! Flex Spacer - interactive showcase for the layout primitives
//!
//! Draws an ellipsis row inside a container whose width can be changed from
//! the keyboard, so the truncation and the overflow popover can be watched as
//! they happen. `--print-styles` prints the resolved style declarations of the
//! showcase primitives as JSON instead.

mod app;
mod render;

use anyhow::{Context, Result};
use app::App;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use flex_spacer::config::Config;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::{self, OpenOptions};
use std::io;
use std::sync::Mutex;
use std::time::Duration;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Application entry point.
///
/// Loads the configuration, sets up logging and the terminal, runs the event
/// loop and restores the terminal even if the loop fails.
///
/// # Errors
/// This function will return an error if:
/// - The configuration cannot be loaded
/// - The log file cannot be opened
/// - Terminal initialization or restoration fails
fn main() -> Result<()> {
    let config = Config::load().context("Failed to load configuration")?;

    if std::env::args().skip(1).any(|arg| arg == "--print-styles") {
        let styles = app::showcase_styles(&config);
        println!("{}", serde_json::to_string_pretty(&styles)?);
        return Ok(());
    }

    init_logging(&config)?;
    info!(
        gap = %config.ellipsis_row.gap,
        max_items = config.ellipsis_row.max_items,
        px_per_cell = config.layout.px_per_cell,
        "starting showcase"
    );

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config);
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err:?}");
    }

    Ok(())
}

/// Sends `tracing` output to the log file; stdout belongs to the terminal UI.
///
/// `RUST_LOG` overrides the filter from the configuration.
fn init_logging(config: &Config) -> Result<()> {
    let path = config.log_file_path()?;
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create log directory: {dir:?}"))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file: {path:?}"))?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}

/// Runs the main event loop until the user presses 'q'.
///
/// # Errors
/// Returns an error if drawing or reading terminal events fails.
fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| render::draw(f, app))?;

        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                    KeyCode::Char('q') => return Ok(()),
                    KeyCode::Char('?') => app.toggle_help(),
                    KeyCode::Left | KeyCode::Char('h') => app.narrow(),
                    KeyCode::Right | KeyCode::Char('l') => app.widen(),
                    KeyCode::Char('+') | KeyCode::Char('=') => app.increase_max_items(),
                    KeyCode::Char('-') => app.decrease_max_items(),
                    KeyCode::Char('a') => app.add_item(),
                    KeyCode::Char('d') => app.remove_item(),
                    KeyCode::Enter | KeyCode::Char(' ') => app.toggle_popover(),
                    KeyCode::Esc => app.back(),
                    _ => {}
                },
                Event::Resize(width, height) => {
                    debug!(width, height, "terminal resized");
                    app.relayout();
                }
                _ => {}
            }
        }
    }
}
