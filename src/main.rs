use anyhow::Context as _;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEvent},
    execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{
    fs::File,
    io::{stdout, Stdout},
    sync::Mutex,
    time::{Duration, Instant},
};
use tracing::{info, Level};

use blockfall::config::Config;
use blockfall::constants::FRAME_DELAY;
use blockfall::game::Game;
use blockfall::input::{handle_input, Action};
use blockfall::ui::ui;

fn setup_logging(config: &Config) -> anyhow::Result<()> {
    // The terminal belongs to the UI, so logs only go to a file.
    let Some(path) = &config.log_file else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_max_level(Level::from(config.log_level))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .compact()
        .init();
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let config = Config::parse();
    setup_logging(&config)?;
    info!(seed = ?config.seed, tick_ms = config.tick_ms, "starting");

    // Build the terminal before touching terminal modes so a failure here
    // leaves nothing to undo
    let backend = CrosstermBackend::new(stdout());
    let mut terminal = Terminal::new(backend).context("failed to create terminal")?;

    terminal::enable_raw_mode().context("failed to enable raw mode")?;
    let mut game = Game::with_options(config.seed, config.tick_interval());
    let result = execute!(terminal.backend_mut(), EnterAlternateScreen)
        .context("failed to enter alternate screen")
        .and_then(|()| run(&mut terminal, &mut game));

    // Cleanup, even when setup or the loop failed
    restore_terminal(&mut terminal)?;

    info!("exiting");
    result
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> anyhow::Result<()> {
    terminal::disable_raw_mode().context("failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("failed to leave alternate screen")?;
    terminal.show_cursor()?;
    Ok(())
}

fn run(terminal: &mut Terminal<CrosstermBackend<Stdout>>, game: &mut Game) -> anyhow::Result<()> {
    let mut last_frame = Instant::now();

    loop {
        terminal.draw(|f| ui(f, game))?;

        if event::poll(Duration::from_millis(FRAME_DELAY))? {
            if let Event::Key(KeyEvent { code, kind, .. }) = event::read()? {
                if handle_input(game, code, kind) == Some(Action::Quit) {
                    break;
                }
            }
        }

        let now = Instant::now();
        game.update(now.duration_since(last_frame));
        last_frame = now;
    }

    Ok(())
}
