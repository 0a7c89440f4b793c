//! Movement module - per-tick advance, collision and feeding checks
//!
//! A tick runs in a fixed order on the post-advance head:
//!
//! 1. boundary check
//! 2. self-collision check
//! 3. feeding check (new food, then growth)
//!
//! The first check that ends the game stops the sequence.

use rand::Rng;
use tracing::{debug, trace};

use crate::board::Board;
use crate::snake::Snake;

/// Why a game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameOverCause {
    /// The head left the board
    Boundary,
    /// The head ran into the body
    SelfCollision,
    /// The terminal changed size mid-game
    Resize,
    /// The player pressed the quit key
    Quit,
}

impl GameOverCause {
    pub fn as_str(self) -> &'static str {
        match self {
            GameOverCause::Boundary => "boundary",
            GameOverCause::SelfCollision => "self_collision",
            GameOverCause::Resize => "resize",
            GameOverCause::Quit => "quit",
        }
    }
}

/// Result of a single check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Check {
    Continue,
    GameOver(GameOverCause),
}

/// Result of a whole tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The snake moved and nothing else happened
    Moved,
    /// The snake ate and grew by one segment
    Fed,
    GameOver(GameOverCause),
}

/// Head must stay within [1, width] x [1, height]
pub fn check_boundary(board: &Board, snake: &Snake) -> Check {
    if board.contains(snake.head()) {
        Check::Continue
    } else {
        Check::GameOver(GameOverCause::Boundary)
    }
}

/// Head must not share a cell with any other segment (scanned tail first)
pub fn check_self_collision(snake: &Snake) -> Check {
    let head = snake.head();
    let hit = snake
        .iter_rev()
        .take(snake.len().saturating_sub(1))
        .any(|seg| seg.pos() == head);
    if hit {
        Check::GameOver(GameOverCause::SelfCollision)
    } else {
        Check::Continue
    }
}

/// Board dimensions must still match the terminal
pub fn check_resize(board: &Board, width: u32, height: u32) -> Check {
    if board.width() == width && board.height() == height {
        Check::Continue
    } else {
        Check::GameOver(GameOverCause::Resize)
    }
}

/// Eat the food under the head, if any: place new food, then grow.
///
/// Returns `true` when the snake ate.
pub fn check_food<R: Rng + ?Sized>(board: &mut Board, snake: &mut Snake, rng: &mut R) -> bool {
    if snake.head() != board.food() {
        return false;
    }
    board.place_food_excluding(snake, snake.growth_cell(), rng);
    snake.add_segment(board);
    debug!(len = snake.len(), "snake grew");
    true
}

/// Advance the snake one step and run every check in order
pub fn tick<R: Rng + ?Sized>(board: &mut Board, snake: &mut Snake, rng: &mut R) -> TickOutcome {
    snake.advance();
    trace!(x = snake.head().x, y = snake.head().y, "tick");

    if let Check::GameOver(cause) = check_boundary(board, snake) {
        return TickOutcome::GameOver(cause);
    }
    if let Check::GameOver(cause) = check_self_collision(snake) {
        return TickOutcome::GameOver(cause);
    }
    if check_food(board, snake, rng) {
        TickOutcome::Fed
    } else {
        TickOutcome::Moved
    }
}
