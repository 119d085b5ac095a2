//! AdUserRegistry TUI - Terminal front end for AD user registration
//!
//! A Ratatui-based TUI for the advertising account registration form
//! and the admin panels (CSV import, OU management, authentication
//! tests) served by the Flask registration backend.

mod app;
mod backend;
mod config;
mod platform;
mod state;
mod ui;

use std::io;
use std::sync::Arc;

use anyhow::Result;
use app::App;
use backend::BackendClient;
use config::TuiConfig;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "aduser_tui=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = match TuiConfig::load() {
        Ok(config) => config,
        Err(error) => {
            tracing::warn!("Could not load config, using defaults: {error:#}");
            TuiConfig::default()
        }
    };
    let base_url = config.resolved_api_base_url(std::env::var("ADUSER_API_URL").ok());
    let client = Arc::new(BackendClient::new(&base_url)?);
    let mut app = App::new(
        client,
        base_url,
        &config.resolved_default_domain(),
        config.admin_live(),
    );

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Handle any errors
    if let Err(err) = result {
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|frame| ui::draw(frame, app))?;

        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                app.handle_key(key);
            }
        }

        // Collect finished background requests and expire the toast
        app.on_tick();

        if app.should_quit() {
            return Ok(());
        }
    }
}
