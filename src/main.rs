//! GameStore - browse the GameStore catalog from the terminal
//!
//! A terminal UI application that shows products and community members fetched
//! from public REST APIs, with a cart counter, theme toggle, game search and a
//! contact form.

use std::io;
use std::panic;
use std::process;
use std::time::Duration;

use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::info;

use gamestore::app::{App, AppState};
use gamestore::cli::{Cli, StartupConfig};
use gamestore::{logging, ui};

/// Sets up a panic hook that restores the terminal before printing the panic message.
/// This ensures the terminal is usable even if the application panics.
fn setup_panic_hook() {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        // Attempt to restore the terminal
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        // Call the original panic hook
        original_hook(panic_info);
    }));
}

/// Renders the UI based on the current application state
fn render_ui(frame: &mut ratatui::Frame, app: &App) {
    match app.state {
        AppState::Loading => render_loading(frame, app),
        AppState::Products => ui::render_storefront(frame, app),
        AppState::Search => ui::render_search(frame, app),
        AppState::Contact => ui::render_contact(frame, app),
    }

    if app.show_help {
        ui::render_help_overlay(frame, app.theme());
    }
}

/// Renders a loading message while data is being fetched
fn render_loading(frame: &mut ratatui::Frame, app: &App) {
    use ratatui::{
        layout::{Alignment, Constraint, Direction, Layout},
        style::Style,
        widgets::{Block, Paragraph},
    };

    let palette = ui::Palette::for_theme(app.theme());
    let area = frame.area();
    frame.render_widget(Block::default().style(palette.base()), area);

    // Center the loading message vertically
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(45),
            Constraint::Length(3),
            Constraint::Percentage(45),
        ])
        .split(area);

    let loading_text = Paragraph::new("Loading the store...")
        .style(Style::default().fg(palette.accent))
        .alignment(Alignment::Center);

    frame.render_widget(loading_text, chunks[1]);
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = match StartupConfig::from_cli(&cli) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error: {}", err);
            process::exit(2);
        }
    };

    if let Some(path) = config.log_file.clone().or_else(logging::default_log_path) {
        if let Err(err) = logging::init(&path) {
            eprintln!("Warning: logging disabled ({}): {}", path.display(), err);
        }
    }
    info!(?config, "starting gamestore");

    // Set up panic hook to restore terminal on crash
    setup_panic_hook();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::with_startup_config(config);

    // Initial render to show loading state
    terminal.draw(|f| render_ui(f, &app))?;

    // Trigger initial data load
    app.load_all_data().await;

    // Main event loop
    loop {
        terminal.draw(|f| render_ui(f, &app))?;

        // Poll for keyboard events with 100ms timeout
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key);
                }
            }
        }

        if app.pending.is_some() {
            terminal.draw(|f| render_ui(f, &app))?;
            app.run_pending().await;
        }

        if app.should_quit {
            break;
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    info!("exiting");

    Ok(())
}
