//! Spreadgate TUI — single-page put-spread entry dashboard.
//!
//! Layout, top to bottom: title and caption, two metric blocks (price
//! vs moving average, VIX vs cap), the filter rows with their
//! pass-count, the signal banner, and a credit sidebar on the right.
//! `r` refreshes; fetches run on a worker thread so the page never
//! freezes on the network.

mod app;
mod input;
mod persistence;
mod theme;
mod ui;
mod worker;

use std::io::{self, stdout};
use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use spreadgate_core::advisory::clamp_credit;
use spreadgate_core::config::DashboardConfig;

use crate::app::AppState;
use crate::worker::{WorkerCommand, WorkerResponse};

fn main() -> Result<()> {
    // Install a panic hook that restores the terminal before printing
    // the panic.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), LeaveAlternateScreen);
        default_hook(info);
    }));

    // A `spreadgate.toml` next to the binary overrides the defaults.
    // A bad config is fatal at startup, before the terminal is touched.
    let config_path = Path::new("spreadgate.toml");
    let config = if config_path.exists() {
        DashboardConfig::from_file(config_path)
            .with_context(|| format!("loading {}", config_path.display()))?
    } else {
        DashboardConfig::default()
    };

    let state_path = dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("spreadgate")
        .join("state.json");

    // Worker channels
    let (cmd_tx, cmd_rx) = mpsc::channel();
    let (resp_tx, resp_rx) = mpsc::channel();
    let worker_handle = worker::spawn_worker(cmd_rx, resp_tx, config.clone());

    let mut app = AppState::new(config, cmd_tx.clone(), resp_rx);

    // The persisted credit input is the only state that carries over.
    if let Some(persisted) = persistence::load(&state_path) {
        app.credit = clamp_credit(persisted.credit);
    }

    // First refresh fires immediately; the page shows "fetching..."
    // until it lands.
    app.request_refresh();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run_app(&mut terminal, &mut app);

    let _ = persistence::save(&state_path, &persistence::PersistedState { credit: app.credit });

    // Shutdown worker
    let _ = cmd_tx.send(WorkerCommand::Shutdown);
    let _ = worker_handle.join();

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
) -> Result<()> {
    loop {
        // 1. Render
        terminal.draw(|f| ui::draw(f, app))?;

        // 2. Drain worker responses (non-blocking)
        while let Ok(resp) = app.worker_rx.try_recv() {
            handle_worker_response(app, resp);
        }

        // 3. Poll for input events (50ms timeout for ~20 FPS tick)
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                input::handle_key(app, key);
            }
        }

        // 4. Check quit
        if !app.running {
            break;
        }
    }
    Ok(())
}

fn handle_worker_response(app: &mut AppState, resp: WorkerResponse) {
    match resp {
        WorkerResponse::SnapshotReady(snapshot) => {
            app.refresh_in_progress = false;
            app.last_refresh_error = None;
            app.set_status(format!(
                "Refreshed: {}/4 filters pass, signal {}",
                snapshot.pass_count(),
                snapshot.signal.label()
            ));
            app.snapshot = Some(*snapshot);
        }
        WorkerResponse::RefreshFailed { category, message } => {
            app.refresh_in_progress = false;
            app.last_refresh_error = Some(message.clone());
            app.push_error(category, message);
        }
    }
}
