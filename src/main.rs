#![warn(clippy::all, clippy::pedantic)]

use std::io;
use std::os::fd::AsRawFd;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{KeyCode, KeyEventKind};
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::{debug, error, info};
use polybridge::Time;
use polybridge::app::App;
use polybridge::components::PieceRng;
use polybridge::config::{self, Config};
use polybridge::menu_types::MenuState;
use polybridge::ui;
use ratatui::{Terminal, prelude::*};

fn main() -> Result<()> {
    // Create log file and redirect stderr to it
    let log_path = "polybridge.log";
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(log_path)
        .with_context(|| format!("failed to create log file {log_path}"))?;

    // Safety: stderr and the log file are both open descriptors owned by this process
    unsafe {
        libc::dup2(log_file.as_raw_fd(), io::stderr().as_raw_fd());
    }

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .format_module_path(false)
        .init();

    info!("Starting Polyomino Bridge");

    match config::loader::load_config_from_file() {
        Ok(config) => {
            Config::install(config);
            info!("Configuration loaded successfully");
        }
        Err(e) => error!("Failed to load configuration: {e}"),
    }

    let config = Config::current();
    let rng = config
        .session
        .seed
        .map_or_else(PieceRng::new, PieceRng::with_seed);
    let app = App::with_rng(rng);
    let frame_rate = Duration::from_millis(config.display.frame_rate_ms.max(1));

    // Terminal initialization
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app, frame_rate);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!("Game error: {err:?}");
    }
    res
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, mut app: App, frame_rate: Duration) -> Result<()> {
    let mut time = Time::new();

    // Discard anything typed before the first frame
    while event::poll(Duration::ZERO)? {
        let _ = event::read()?;
    }

    loop {
        terminal.draw(|f| ui::render(f, &app))?;

        // Wait for input until the next frame is due
        if event::poll(frame_rate)? {
            if let Event::Key(key) = event::read()? {
                // Edge-triggered: only presses act, repeats and releases are ignored
                if key.kind == KeyEventKind::Press {
                    debug!("Key event: {key:?}");
                    handle_key(&mut app, key.code);
                }
            }
        }

        if app.should_quit {
            info!("Quitting, high score {}", app.high_score.get());
            return Ok(());
        }

        time.update();
        app.update(time.delta());
    }
}

fn handle_key(app: &mut App, code: KeyCode) {
    if code == KeyCode::Char('q') {
        app.should_quit = true;
        return;
    }

    match app.menu.state {
        MenuState::Title => match code {
            KeyCode::Up | KeyCode::Char('w') => app.prev_option(),
            KeyCode::Down | KeyCode::Char('s') => app.next_option(),
            KeyCode::Enter | KeyCode::Char(' ') => app.activate(),
            _ => {}
        },
        MenuState::Game => match code {
            KeyCode::Left | KeyCode::Char('a') => app.rotate_left(),
            KeyCode::Right | KeyCode::Char('d') => app.rotate_right(),
            KeyCode::Char(' ') | KeyCode::Enter => app.drop_piece(),
            _ => {}
        },
    }
}
