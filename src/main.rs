//! Terminal snake runner (default binary).
//!
//! Sets up logging and the terminal, then drives a [`Session`] until the
//! player quits. Between iterations the loop waits for input, at most until
//! the next movement tick is due.

mod cli;

use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use cli::Cli;
use term_snake::engine::{GameState, Session};
use term_snake::input::TerminalInput;
use term_snake::term::{install_panic_hook, TerminalGeometry, TerminalRenderer};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_file.as_deref())?;

    let seed = cli.seed.unwrap_or_else(rand::random);

    install_panic_hook();
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, seed);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, seed: u64) -> Result<()> {
    let geometry = TerminalGeometry;
    let mut input = TerminalInput::new();
    let mut session = Session::new(&geometry, seed);

    loop {
        match session.step(Instant::now(), &mut input, &geometry, term)? {
            GameState::Exit => {
                info!(games = session.games_played(), "bye");
                return Ok(());
            }
            GameState::GameOver => {}
            GameState::Landing | GameState::Idle => {
                input.wait(session.time_until_tick(Instant::now()))?;
            }
        }
    }
}

/// Log to a file when asked; stdout belongs to the game screen.
fn init_logging(path: Option<&Path>) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };
    let log_file = std::fs::File::create(path)
        .with_context(|| format!("creating log file {}", path.display()))?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!(log = %path.display(), "logging started");
    Ok(())
}
