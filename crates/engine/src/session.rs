//! Session module - the game loop state machine
//!
//! A [`Session`] owns everything one process plays with: board, snake, RNG,
//! the exit flag and the tick timer. The driver calls [`Session::step`] once
//! per loop iteration; each call performs the work of the current state and
//! returns the state the session is in afterwards.
//!
//! ```text
//!            arrow key                      boundary / collision /
//!  Landing ─────────────▶ Idle ──────────▶ resize / Enter
//!     ▲  │                                      │
//!     │  │ resize / Enter                       ▼
//!     │  └────────────────────────────────▶ GameOver ──(Enter)──▶ Exit
//!     └───────────────(restart)──────────────────┘
//! ```

use std::time::{Duration, Instant};

use anyhow::Result;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info, instrument};

use crate::core::movement::{self, Check, GameOverCause, TickOutcome};
use crate::core::{Board, Snake};
use crate::io::{Display, Geometry, InputSource, Screen};
use crate::types::{Direction, Key, TICK_MS};

/// Game loop states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameState {
    /// Waiting for the first arrow key
    Landing,
    /// Playing; "idle" as in no key needs to be held
    Idle,
    /// Tear down, then restart or exit
    GameOver,
    /// Terminal state
    Exit,
}

impl GameState {
    pub fn as_str(self) -> &'static str {
        match self {
            GameState::Landing => "landing",
            GameState::Idle => "idle",
            GameState::GameOver => "game_over",
            GameState::Exit => "exit",
        }
    }
}

/// Game session context
#[derive(Debug)]
pub struct Session {
    board: Board,
    snake: Snake,
    rng: StdRng,
    state: GameState,
    /// Set by the quit key; turns the next game over into an exit
    exit_requested: bool,
    /// Landing screen has been drawn since entering `Landing`
    landing_drawn: bool,
    last_tick: Option<Instant>,
    tick_interval: Duration,
    last_cause: Option<GameOverCause>,
    /// Completed games (incremented on every restart)
    games_played: u32,
}

impl Session {
    /// Create a session sized to the current terminal, in `Landing`
    pub fn new<G: Geometry + ?Sized>(geometry: &G, seed: u64) -> Self {
        let (width, height) = geometry.size();
        let mut board = Board::new(width, height);
        let snake = Snake::new(&mut board);
        info!(width, height, seed, "session created");

        Self {
            board,
            snake,
            rng: StdRng::seed_from_u64(seed),
            state: GameState::Landing,
            exit_requested: false,
            landing_drawn: false,
            last_tick: None,
            tick_interval: Duration::from_millis(TICK_MS),
            last_cause: None,
            games_played: 0,
        }
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    /// Mutable board access for scripted scenarios (placing food by hand)
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn exit_requested(&self) -> bool {
        self.exit_requested
    }

    /// Cause of the most recent game over
    pub fn last_cause(&self) -> Option<GameOverCause> {
        self.last_cause
    }

    pub fn games_played(&self) -> u32 {
        self.games_played
    }

    /// How long the driver may wait for input before the next tick is due
    pub fn time_until_tick(&self, now: Instant) -> Duration {
        match (self.state, self.last_tick) {
            (GameState::Idle, Some(last)) => self
                .tick_interval
                .saturating_sub(now.saturating_duration_since(last)),
            (GameState::Idle, None) => Duration::ZERO,
            (GameState::Landing, _) => self.tick_interval,
            (GameState::GameOver | GameState::Exit, _) => Duration::ZERO,
        }
    }

    /// Run one loop iteration and return the resulting state
    pub fn step<I, G, D>(
        &mut self,
        now: Instant,
        input: &mut I,
        geometry: &G,
        display: &mut D,
    ) -> Result<GameState>
    where
        I: InputSource + ?Sized,
        G: Geometry + ?Sized,
        D: Display + ?Sized,
    {
        match self.state {
            GameState::Landing => self.step_landing(now, input, geometry, display)?,
            GameState::Idle => self.step_playing(now, input, geometry, display)?,
            GameState::GameOver => self.restart_or_exit(geometry),
            GameState::Exit => {}
        }
        Ok(self.state)
    }

    fn step_landing<I, G, D>(
        &mut self,
        now: Instant,
        input: &mut I,
        geometry: &G,
        display: &mut D,
    ) -> Result<()>
    where
        I: InputSource + ?Sized,
        G: Geometry + ?Sized,
        D: Display + ?Sized,
    {
        if !self.landing_drawn {
            display.draw(&self.board, &self.snake, Screen::Landing)?;
            self.landing_drawn = true;
        }

        if let Check::GameOver(cause) = self.check_resize(geometry) {
            self.game_over(cause);
            return Ok(());
        }

        self.poll_input(input)?;

        if self.state == GameState::Idle {
            self.board.place_food(&self.snake, &mut self.rng);
            display.draw(&self.board, &self.snake, Screen::Playing)?;
            self.last_tick = Some(now);
        }
        Ok(())
    }

    fn step_playing<I, G, D>(
        &mut self,
        now: Instant,
        input: &mut I,
        geometry: &G,
        display: &mut D,
    ) -> Result<()>
    where
        I: InputSource + ?Sized,
        G: Geometry + ?Sized,
        D: Display + ?Sized,
    {
        if let Check::GameOver(cause) = self.check_resize(geometry) {
            self.game_over(cause);
            return Ok(());
        }

        self.poll_input(input)?;
        if self.state != GameState::Idle || !self.tick_due(now) {
            return Ok(());
        }

        if let Check::GameOver(cause) = self.check_resize(geometry) {
            self.game_over(cause);
            return Ok(());
        }

        match movement::tick(&mut self.board, &mut self.snake, &mut self.rng) {
            TickOutcome::GameOver(cause) => {
                self.game_over(cause);
                return Ok(());
            }
            TickOutcome::Fed => {
                debug!(len = self.snake.len(), "fed");
            }
            TickOutcome::Moved => {}
        }

        display.draw(&self.board, &self.snake, Screen::Playing)?;
        self.last_tick = Some(now);
        Ok(())
    }

    fn tick_due(&self, now: Instant) -> bool {
        match self.last_tick {
            Some(last) => now.saturating_duration_since(last) >= self.tick_interval,
            None => true,
        }
    }

    fn check_resize<G: Geometry + ?Sized>(&self, geometry: &G) -> Check {
        let (width, height) = geometry.size();
        movement::check_resize(&self.board, width, height)
    }

    /// Read at most one key and apply it
    fn poll_input<I: InputSource + ?Sized>(&mut self, input: &mut I) -> Result<()> {
        match input.poll_key()? {
            Some(Key::Arrow(direction)) if direction != Direction::None => {
                self.snake.set_direction(direction);
                if self.state != GameState::Idle {
                    info!(direction = direction.as_str(), "game started");
                    self.state = GameState::Idle;
                }
            }
            Some(Key::Quit) => {
                self.exit_requested = true;
                self.game_over(GameOverCause::Quit);
            }
            Some(Key::Arrow(_)) | None => {}
        }
        Ok(())
    }

    fn game_over(&mut self, cause: GameOverCause) {
        info!(
            cause = cause.as_str(),
            len = self.snake.len(),
            from = self.state.as_str(),
            "game over"
        );
        self.last_cause = Some(cause);
        self.state = GameState::GameOver;
    }

    #[instrument(skip_all, fields(exit = self.exit_requested))]
    fn restart_or_exit<G: Geometry + ?Sized>(&mut self, geometry: &G) {
        self.board.teardown();
        self.snake.teardown();

        if self.exit_requested {
            info!(games = self.games_played, "exiting");
            self.state = GameState::Exit;
            return;
        }

        let (width, height) = geometry.size();
        self.board = Board::new(width, height);
        self.snake = Snake::new(&mut self.board);
        self.state = GameState::Landing;
        self.landing_drawn = false;
        self.last_tick = None;
        self.games_played += 1;
        info!(width, height, games = self.games_played, "restarted");
    }
}
