//! catalog-admin - terminal admin for the product catalog
//!
//! Run: cargo run -p catalog-tui

use std::io::{self, Stdout};
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::Context;
use catalog_tui::{App, Config, logger, ui};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;

const POLL_INTERVAL: Duration = Duration::from_millis(50);

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = Config::from_env();
    logger::init_logger(&config)?;

    let client = config
        .client_config()
        .build_catalog_client()
        .context("failed to build HTTP client")?;
    tracing::info!(api_url = %config.api_url, "catalog admin starting");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(Arc::new(client), config);
    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res.context("terminal loop failed")
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> io::Result<()> {
    app.start();

    while !app.should_quit {
        terminal.draw(|f| ui::draw(f, app))?;

        if event::poll(POLL_INTERVAL)?
            && let Event::Key(key) = event::read()?
            && matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat)
        {
            app.handle_key(key, Instant::now());
        }

        while let Some(ev) = app.try_next_event() {
            app.on_event(ev);
        }
        app.tick(Instant::now());
    }

    Ok(())
}
