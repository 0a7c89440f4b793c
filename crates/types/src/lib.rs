//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Coordinates
//!
//! Positions are 1-indexed terminal cells:
//!
//! - **x**: column, 1 (left edge) to board width
//! - **y**: row, 1 (top edge) to board height
//! - **(0, 0)**: the cleared value, always outside the playable area
//!
//! # Game Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 150 | Movement cadence while playing |
//! | `INITIAL_SEGMENTS` | 4 | Snake length at the start of every game |
//!
//! # Examples
//!
//! ```
//! use term_snake_types::{Direction, Position, TICK_MS};
//!
//! let pos = Position::new(5, 5);
//! assert_eq!(pos.step(Direction::Right), Position::new(6, 5));
//! assert_eq!(Direction::Up.opposite(), Direction::Down);
//! assert_eq!(TICK_MS, 150);
//! ```

/// Movement cadence in milliseconds (one snake step per tick)
pub const TICK_MS: u64 = 150;

/// Number of segments a freshly initialized snake starts with
pub const INITIAL_SEGMENTS: usize = 4;

/// Glyph drawn at the head position
pub const HEAD_GLYPH: char = '\u{2592}';

/// Glyph drawn for every non-head segment
pub const BODY_GLYPH: char = '\u{2588}';

/// Glyph drawn at the food position (rendered green)
pub const FOOD_GLYPH: char = '\u{2588}';

/// Prompt shown on the landing screen
pub const LANDING_PROMPT: &str = "Press \u{2190}\u{2191}\u{2192}\u{2193} to start, or Enter to exit";

/// A 1-indexed board cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub x: u32,
    pub y: u32,
}

impl Position {
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// The cleared position, (0, 0)
    pub const fn zero() -> Self {
        Self { x: 0, y: 0 }
    }

    /// Position one unit away in `direction`.
    ///
    /// Coordinates saturate at 0, which is always out of bounds, so a head
    /// driven past the top or left edge still trips the boundary check.
    pub fn step(self, direction: Direction) -> Self {
        match direction {
            Direction::Up => Self::new(self.x, self.y.saturating_sub(1)),
            Direction::Down => Self::new(self.x, self.y.saturating_add(1)),
            Direction::Right => Self::new(self.x.saturating_add(1), self.y),
            Direction::Left => Self::new(self.x.saturating_sub(1), self.y),
            Direction::None => self,
        }
    }
}

/// Snake movement direction
///
/// `None` is only used before the first key press of a game (landing screen).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    #[default]
    None,
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// The exact reverse direction (`None` has no reverse)
    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::None => Direction::None,
        }
    }

    /// Convert to string (lowercase)
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::None => "none",
        }
    }
}

/// A decoded key press, as seen by the game loop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Arrow key: request a direction and start playing
    Arrow(Direction),
    /// Enter: end the game and exit the program
    Quit,
}
